use iso8601_timestamp::Timestamp;
use tipline_models::v0::{self, DataSubmitReport, ReportStatus};
use tipline_result::Result;

use crate::Database;

auto_derived!(
    /// Citizen-submitted incident report
    pub struct Report {
        /// Unique Id
        #[serde(rename = "_id")]
        pub id: String,
        /// Identity of the citizen who submitted this report
        pub submitter_id: String,

        /// Name of the suspicious application
        pub suspicious_app_name: String,
        /// Name of the affected person
        pub victim_name: String,
        /// Contact email address for follow-up
        pub contact_info: String,
        /// Where the application was obtained
        pub download_source: String,
        /// Severity tag attached at submission
        pub threat_level: String,
        /// Description of the incident
        pub description: String,

        /// Reference to uploaded evidence, if any
        #[serde(skip_serializing_if = "Option::is_none")]
        pub evidence: Option<String>,

        /// Status of the report
        pub status: ReportStatus,
        /// When this report was submitted
        pub submitted_at: Timestamp,
    }
);

/// Partial report, only the status may change after submission
#[derive(Serialize, Deserialize, Debug, Clone, Default, Eq, PartialEq)]
pub struct PartialReport {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<ReportStatus>,
}

impl Report {
    /// Create a new report from a citizen submission
    pub async fn create(
        db: &Database,
        data: DataSubmitReport,
        submitter_id: String,
    ) -> Result<Report> {
        let report = Report {
            id: ulid::Ulid::new().to_string(),
            submitter_id,
            suspicious_app_name: data.suspicious_app_name,
            victim_name: data.victim_name,
            contact_info: data.contact_info,
            download_source: data.download_source,
            threat_level: data.threat_level,
            description: data.description,
            evidence: data.evidence,
            status: ReportStatus::Pending,
            submitted_at: Timestamp::now_utc(),
        };

        db.insert_report(&report).await?;
        Ok(report)
    }

    /// Move this report to a new status
    pub async fn update_status(&mut self, db: &Database, status: ReportStatus) -> Result<()> {
        let partial = PartialReport {
            status: Some(status),
        };

        db.update_report(&self.id, &partial).await?;
        self.apply_options(partial);
        Ok(())
    }

    /// Apply a partial set of fields to this report
    pub fn apply_options(&mut self, partial: PartialReport) {
        if let Some(status) = partial.status {
            self.status = status;
        }
    }
}

impl From<Report> for v0::Report {
    fn from(value: Report) -> Self {
        v0::Report {
            id: value.id,
            submitter_id: value.submitter_id,
            suspicious_app_name: value.suspicious_app_name,
            victim_name: value.victim_name,
            contact_info: value.contact_info,
            download_source: value.download_source,
            threat_level: value.threat_level,
            description: value.description,
            evidence: value.evidence,
            status: value.status,
            submitted_at: value.submitted_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use tipline_models::v0::{DataSubmitReport, ReportStatus};

    use crate::Report;

    fn submission(app: &str, threat_level: &str) -> DataSubmitReport {
        DataSubmitReport {
            suspicious_app_name: app.to_string(),
            victim_name: "Sam Doe".to_string(),
            contact_info: "sam@example.com".to_string(),
            download_source: "https://downloads.example".to_string(),
            threat_level: threat_level.to_string(),
            description: "Asked for banking credentials after install.".to_string(),
            evidence: None,
        }
    }

    #[async_std::test]
    async fn crud() {
        database_test!(|db| async move {
            let report = Report::create(&db, submission("FakeBank", "high"), "alice".to_string())
                .await
                .unwrap();
            assert_eq!(report.status, ReportStatus::Pending);

            let report2 = Report::create(&db, submission("FreeCoins", "low"), "alice".to_string())
                .await
                .unwrap();
            assert_ne!(report.id, report2.id);

            let mut updated = report.clone();
            updated
                .update_status(&db, ReportStatus::Investigating)
                .await
                .unwrap();

            let fetched = db.fetch_report(&report.id).await.unwrap();
            assert_eq!(fetched, updated);
            assert_eq!(fetched.status, ReportStatus::Investigating);

            // no other field may change through a status update
            assert_eq!(fetched.suspicious_app_name, report.suspicious_app_name);
            assert_eq!(fetched.submitter_id, report.submitter_id);
            assert_eq!(fetched.submitted_at, report.submitted_at);

            assert!(db.fetch_report("01J00000000000000000000000").await.is_err());
        });
    }

    #[async_std::test]
    async fn filters_and_counts() {
        database_test!(|db| async move {
            let first = Report::create(&db, submission("FakeBank", "high"), "bob".to_string())
                .await
                .unwrap();
            let second = Report::create(&db, submission("FreeCoins", "low"), "bob".to_string())
                .await
                .unwrap();
            Report::create(&db, submission("CloneApp", "high"), "carol".to_string())
                .await
                .unwrap();

            let bobs = db.fetch_reports_by_submitter("bob").await.unwrap();
            assert_eq!(bobs.len(), 2);
            assert_eq!(bobs[0].id, second.id);
            assert_eq!(bobs[1].id, first.id);
            assert!(db
                .fetch_reports_by_submitter("dave")
                .await
                .unwrap()
                .is_empty());

            let high = db.fetch_reports_by_threat_level("high").await.unwrap();
            assert_eq!(high.len(), 2);
            assert!(high.iter().all(|report| report.threat_level == "high"));

            assert_eq!(db.count_reports().await.unwrap(), 3);
            assert_eq!(
                db.count_reports_by_status(ReportStatus::Pending)
                    .await
                    .unwrap(),
                3
            );
            assert_eq!(
                db.count_reports_by_status(ReportStatus::Resolved)
                    .await
                    .unwrap(),
                0
            );

            let mut first = first;
            first
                .update_status(&db, ReportStatus::Resolved)
                .await
                .unwrap();
            assert_eq!(
                db.count_reports_by_status(ReportStatus::Resolved)
                    .await
                    .unwrap(),
                1
            );

            let resolved = db
                .fetch_reports_by_status(ReportStatus::Resolved)
                .await
                .unwrap();
            assert_eq!(resolved.len(), 1);
            assert_eq!(resolved[0].id, first.id);

            let all = db.fetch_reports().await.unwrap();
            assert_eq!(all.len() as u64, db.count_reports().await.unwrap());
            assert!(all
                .windows(2)
                .all(|pair| pair[0].submitted_at >= pair[1].submitted_at));
        });
    }
}
