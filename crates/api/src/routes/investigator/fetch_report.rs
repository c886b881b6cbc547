use rocket::serde::json::Json;
use rocket::State;
use tipline_database::Database;
use tipline_models::v0;
use tipline_permissions::PortalPermission;
use tipline_result::Result;

use crate::util::identity::Principal;

/// # Fetch Report
///
/// Fetch a single report by its id.
#[openapi(tag = "Investigator")]
#[get("/reports/<id>")]
pub async fn fetch_report(
    db: &State<Database>,
    principal: Principal,
    id: String,
) -> Result<Json<v0::Report>> {
    principal.require(PortalPermission::FetchReport)?;

    db.fetch_report(&id).await.map(|report| Json(report.into()))
}
