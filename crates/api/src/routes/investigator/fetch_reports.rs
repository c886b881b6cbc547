use rocket::serde::json::Json;
use rocket::State;
use tipline_database::Database;
use tipline_models::v0;
use tipline_permissions::PortalPermission;
use tipline_result::Result;

use crate::util::identity::Principal;

/// # Fetch Reports
///
/// Fetch every report in the collection, newest first.
#[openapi(tag = "Investigator")]
#[get("/reports")]
pub async fn fetch_reports(
    db: &State<Database>,
    principal: Principal,
) -> Result<Json<Vec<v0::Report>>> {
    principal.require(PortalPermission::FetchAllReports)?;

    db.fetch_reports()
        .await
        .map(|reports| reports.into_iter().map(|report| report.into()).collect())
        .map(Json)
}
