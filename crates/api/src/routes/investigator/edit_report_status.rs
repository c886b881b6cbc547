use rocket::serde::json::Json;
use rocket::State;
use tipline_database::Database;
use tipline_models::v0;
use tipline_permissions::PortalPermission;
use tipline_result::Result;

use crate::util::identity::Principal;

/// # Edit Report Status
///
/// Move a report to a new triage status.
///
/// Any status in the closed set may follow any other; the transition
/// graph is intentionally unrestricted.
#[openapi(tag = "Investigator")]
#[patch("/reports/<id>/status", data = "<data>")]
pub async fn edit_report_status(
    db: &State<Database>,
    principal: Principal,
    id: String,
    data: Json<v0::DataEditReportStatus>,
) -> Result<Json<v0::Report>> {
    principal.require(PortalPermission::EditReportStatus)?;

    let data = data.into_inner();

    let mut report = db.fetch_report(&id).await?;
    report.update_status(db, data.status).await?;

    Ok(Json(report.into()))
}
