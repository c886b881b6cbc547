use iso8601_timestamp::Timestamp;
#[cfg(feature = "validator")]
use validator::Validate;

auto_derived!(
    /// Citizen-submitted incident report tracked through triage
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

    /// Triage status of a report
    #[serde(rename_all = "lowercase")]
    pub enum ReportStatus {
        /// Waiting for an investigator to pick the report up
        Pending,
        /// An investigator is working the report
        Investigating,
        /// Triage has finished
        Resolved,
    }

    /// Aggregate report counts, one bucket per status
    pub struct ReportStats {
        /// Number of reports in the collection
        pub total: u64,
        /// Reports waiting for triage
        pub pending: u64,
        /// Reports currently being investigated
        pub investigating: u64,
        /// Reports that have been resolved
        pub resolved: u64,
    }

    /// Reference under which uploaded evidence was stored
    pub struct EvidenceUploaded {
        /// Stored file name, pass this along when submitting a report
        pub file_name: String,
    }

    /// New report information
    #[cfg_attr(feature = "validator", derive(Validate))]
    pub struct DataSubmitReport {
        /// Name of the suspicious application
        #[cfg_attr(feature = "validator", validate(length(min = 1, max = 128)))]
        pub suspicious_app_name: String,
        /// Name of the affected person
        #[cfg_attr(feature = "validator", validate(length(min = 1, max = 128)))]
        pub victim_name: String,
        /// Contact email address for follow-up
        #[cfg_attr(feature = "validator", validate(email))]
        pub contact_info: String,
        /// Where the application was obtained
        #[cfg_attr(feature = "validator", validate(length(min = 1, max = 256)))]
        pub download_source: String,
        /// Severity tag
        #[cfg_attr(feature = "validator", validate(length(min = 1, max = 32)))]
        pub threat_level: String,
        /// Description of the incident
        #[cfg_attr(feature = "validator", validate(length(min = 1, max = 2000)))]
        pub description: String,
        /// Evidence reference from a prior upload
        #[serde(skip_serializing_if = "Option::is_none")]
        pub evidence: Option<String>,
    }

    /// New status for a report
    pub struct DataEditReportStatus {
        /// Status to move the report to
        pub status: ReportStatus,
    }
);

impl ReportStatus {
    /// Canonical lowercase form, as stored in the database
    pub fn as_str(&self) -> &'static str {
        match self {
            ReportStatus::Pending => "pending",
            ReportStatus::Investigating => "investigating",
            ReportStatus::Resolved => "resolved",
        }
    }
}

impl std::fmt::Display for ReportStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for ReportStatus {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "pending" => Ok(ReportStatus::Pending),
            "investigating" => Ok(ReportStatus::Investigating),
            "resolved" => Ok(ReportStatus::Resolved),
            _ => Err(()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::ReportStatus;

    #[test]
    fn status_round_trips_through_canonical_form() {
        for status in [
            ReportStatus::Pending,
            ReportStatus::Investigating,
            ReportStatus::Resolved,
        ] {
            assert_eq!(status.as_str().parse::<ReportStatus>(), Ok(status));
        }

        assert!("closed".parse::<ReportStatus>().is_err());
    }
}
