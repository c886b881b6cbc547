use rocket::serde::json::Json;
use rocket::State;
use tipline_database::Database;
use tipline_models::v0;
use tipline_permissions::PortalPermission;
use tipline_result::Result;

use crate::util::identity::Principal;

/// # Fetch Own Reports
///
/// Fetch the reports submitted by the calling citizen, newest first.
#[openapi(tag = "Citizen")]
#[get("/reports")]
pub async fn fetch_own_reports(
    db: &State<Database>,
    principal: Principal,
) -> Result<Json<Vec<v0::Report>>> {
    principal.require(PortalPermission::FetchOwnReports)?;

    db.fetch_reports_by_submitter(&principal.id)
        .await
        .map(|reports| reports.into_iter().map(|report| report.into()).collect())
        .map(Json)
}
