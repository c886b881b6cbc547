use rocket::serde::json::Json;
use rocket::State;
use tipline_database::{Database, Report};
use tipline_models::v0;
use tipline_permissions::PortalPermission;
use tipline_result::{create_error, Result};
use validator::Validate;

use crate::util::identity::Principal;

/// # Submit Report
///
/// Submit a new incident report as the calling citizen.
#[openapi(tag = "Citizen")]
#[post("/reports", data = "<data>")]
pub async fn submit_report(
    db: &State<Database>,
    principal: Principal,
    data: Json<v0::DataSubmitReport>,
) -> Result<Json<v0::Report>> {
    principal.require(PortalPermission::SubmitReport)?;

    let data = data.into_inner();
    data.validate().map_err(|error| {
        create_error!(FailedValidation {
            error: error.to_string()
        })
    })?;

    Report::create(db, data, principal.id)
        .await
        .map(|report| report.into())
        .map(Json)
}
