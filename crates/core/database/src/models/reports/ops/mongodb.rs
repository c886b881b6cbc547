use mongodb::options::FindOptions;
use tipline_models::v0::ReportStatus;
use tipline_result::Result;

use crate::MongoDb;
use crate::{PartialReport, Report};

use super::AbstractReports;

static COL: &str = "reports";

/// Order report queries by submission time, newest first
fn newest_first() -> FindOptions {
    FindOptions::builder()
        .sort(doc! { "submitted_at": -1, "_id": -1 })
        .build()
}

#[async_trait]
impl AbstractReports for MongoDb {
    /// Insert a new report into the database
    async fn insert_report(&self, report: &Report) -> Result<()> {
        query!(self, insert_one, COL, &report).map(|_| ())
    }

    /// Fetch a report by its id
    async fn fetch_report(&self, id: &str) -> Result<Report> {
        query!(self, find_one_by_id, COL, id)?.ok_or_else(|| create_error!(NotFound))
    }

    /// Fetch all reports, newest first
    async fn fetch_reports(&self) -> Result<Vec<Report>> {
        query!(self, find_with_options, COL, doc! {}, newest_first())
    }

    /// Fetch reports submitted by the given identity, newest first
    async fn fetch_reports_by_submitter(&self, submitter_id: &str) -> Result<Vec<Report>> {
        query!(
            self,
            find_with_options,
            COL,
            doc! {
                "submitter_id": submitter_id,
            },
            newest_first()
        )
    }

    /// Fetch reports with the given status, newest first
    async fn fetch_reports_by_status(&self, status: ReportStatus) -> Result<Vec<Report>> {
        query!(
            self,
            find_with_options,
            COL,
            doc! {
                "status": status.as_str(),
            },
            newest_first()
        )
    }

    /// Fetch reports with the given threat level, newest first
    async fn fetch_reports_by_threat_level(&self, threat_level: &str) -> Result<Vec<Report>> {
        query!(
            self,
            find_with_options,
            COL,
            doc! {
                "threat_level": threat_level,
            },
            newest_first()
        )
    }

    /// Count all reports
    async fn count_reports(&self) -> Result<u64> {
        query!(self, count_documents, COL, doc! {})
    }

    /// Count reports with the given status
    async fn count_reports_by_status(&self, status: ReportStatus) -> Result<u64> {
        query!(
            self,
            count_documents,
            COL,
            doc! {
                "status": status.as_str(),
            }
        )
    }

    /// Update a report with new information
    async fn update_report(&self, id: &str, partial: &PartialReport) -> Result<()> {
        query!(self, update_one_by_id, COL, id, partial).map(|_| ())
    }
}
