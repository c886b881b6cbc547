use rocket::serde::json::Json;
use rocket::State;
use tipline_database::Database;
use tipline_models::v0::{self, ReportStatus};
use tipline_permissions::PortalPermission;
use tipline_result::{create_error, Result};

use crate::util::identity::Principal;

/// # Fetch Reports By Status
///
/// Fetch the reports currently in the given triage status, newest first.
#[openapi(tag = "Investigator")]
#[get("/reports/status/<status>")]
pub async fn fetch_reports_by_status(
    db: &State<Database>,
    principal: Principal,
    status: String,
) -> Result<Json<Vec<v0::Report>>> {
    principal.require(PortalPermission::FetchAllReports)?;

    let status: ReportStatus = status.parse().map_err(|_| {
        create_error!(FailedValidation {
            error: "unknown status".to_string()
        })
    })?;

    db.fetch_reports_by_status(status)
        .await
        .map(|reports| reports.into_iter().map(|report| report.into()).collect())
        .map(Json)
}
