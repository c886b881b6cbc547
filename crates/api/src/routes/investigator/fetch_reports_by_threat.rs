use rocket::serde::json::Json;
use rocket::State;
use tipline_database::Database;
use tipline_models::v0;
use tipline_permissions::PortalPermission;
use tipline_result::Result;

use crate::util::identity::Principal;

/// # Fetch Reports By Threat Level
///
/// Fetch the reports tagged with the given threat level, newest first.
///
/// Threat levels are free-form tags chosen at submission.
#[openapi(tag = "Investigator")]
#[get("/reports/threat/<threat_level>")]
pub async fn fetch_reports_by_threat(
    db: &State<Database>,
    principal: Principal,
    threat_level: String,
) -> Result<Json<Vec<v0::Report>>> {
    principal.require(PortalPermission::FetchAllReports)?;

    db.fetch_reports_by_threat_level(&threat_level)
        .await
        .map(|reports| reports.into_iter().map(|report| report.into()).collect())
        .map(Json)
}
