use tipline_models::v0::ReportStatus;
use tipline_result::Result;

use crate::{PartialReport, Report};

#[cfg(feature = "mongodb")]
mod mongodb;
mod reference;

#[async_trait]
pub trait AbstractReports: Sync + Send {
    /// Insert a new report into the database
    async fn insert_report(&self, report: &Report) -> Result<()>;

    /// Fetch a report by its id
    async fn fetch_report(&self, id: &str) -> Result<Report>;

    /// Fetch all reports, newest first
    async fn fetch_reports(&self) -> Result<Vec<Report>>;

    /// Fetch reports submitted by the given identity, newest first
    async fn fetch_reports_by_submitter(&self, submitter_id: &str) -> Result<Vec<Report>>;

    /// Fetch reports with the given status, newest first
    async fn fetch_reports_by_status(&self, status: ReportStatus) -> Result<Vec<Report>>;

    /// Fetch reports with the given threat level, newest first
    async fn fetch_reports_by_threat_level(&self, threat_level: &str) -> Result<Vec<Report>>;

    /// Count all reports
    async fn count_reports(&self) -> Result<u64>;

    /// Count reports with the given status
    async fn count_reports_by_status(&self, status: ReportStatus) -> Result<u64>;

    /// Update a report with new information
    async fn update_report(&self, id: &str, partial: &PartialReport) -> Result<()>;
}
