use tipline_models::v0::ReportStatus;
use tipline_result::Result;

use crate::ReferenceDb;
use crate::{PartialReport, Report};

use super::AbstractReports;

/// Order a snapshot by submission time, newest first
fn sort_newest_first(reports: &mut [Report]) {
    reports.sort_by(|a, b| {
        b.submitted_at
            .cmp(&a.submitted_at)
            .then_with(|| b.id.cmp(&a.id))
    });
}

#[async_trait]
impl AbstractReports for ReferenceDb {
    /// Insert a new report into the database
    async fn insert_report(&self, report: &Report) -> Result<()> {
        let mut reports = self.reports.lock().await;
        if reports.contains_key(&report.id) {
            Err(create_database_error!("insert", "report"))
        } else {
            reports.insert(report.id.to_string(), report.clone());
            Ok(())
        }
    }

    /// Fetch a report by its id
    async fn fetch_report(&self, id: &str) -> Result<Report> {
        let reports = self.reports.lock().await;
        reports
            .get(id)
            .cloned()
            .ok_or_else(|| create_error!(NotFound))
    }

    /// Fetch all reports, newest first
    async fn fetch_reports(&self) -> Result<Vec<Report>> {
        let reports = self.reports.lock().await;
        let mut reports: Vec<Report> = reports.values().cloned().collect();
        sort_newest_first(&mut reports);
        Ok(reports)
    }

    /// Fetch reports submitted by the given identity, newest first
    async fn fetch_reports_by_submitter(&self, submitter_id: &str) -> Result<Vec<Report>> {
        let reports = self.reports.lock().await;
        let mut reports: Vec<Report> = reports
            .values()
            .filter(|report| report.submitter_id == submitter_id)
            .cloned()
            .collect();
        sort_newest_first(&mut reports);
        Ok(reports)
    }

    /// Fetch reports with the given status, newest first
    async fn fetch_reports_by_status(&self, status: ReportStatus) -> Result<Vec<Report>> {
        let reports = self.reports.lock().await;
        let mut reports: Vec<Report> = reports
            .values()
            .filter(|report| report.status == status)
            .cloned()
            .collect();
        sort_newest_first(&mut reports);
        Ok(reports)
    }

    /// Fetch reports with the given threat level, newest first
    async fn fetch_reports_by_threat_level(&self, threat_level: &str) -> Result<Vec<Report>> {
        let reports = self.reports.lock().await;
        let mut reports: Vec<Report> = reports
            .values()
            .filter(|report| report.threat_level == threat_level)
            .cloned()
            .collect();
        sort_newest_first(&mut reports);
        Ok(reports)
    }

    /// Count all reports
    async fn count_reports(&self) -> Result<u64> {
        let reports = self.reports.lock().await;
        Ok(reports.len() as u64)
    }

    /// Count reports with the given status
    async fn count_reports_by_status(&self, status: ReportStatus) -> Result<u64> {
        let reports = self.reports.lock().await;
        Ok(reports
            .values()
            .filter(|report| report.status == status)
            .count() as u64)
    }

    /// Update a report with new information
    async fn update_report(&self, id: &str, partial: &PartialReport) -> Result<()> {
        let mut reports = self.reports.lock().await;
        if let Some(report) = reports.get_mut(id) {
            report.apply_options(partial.clone());
            Ok(())
        } else {
            Err(create_error!(NotFound))
        }
    }
}
