use rocket::serde::json::Json;
use rocket::State;
use tipline_database::Database;
use tipline_models::v0::{ReportStats, ReportStatus};
use tipline_permissions::PortalPermission;
use tipline_result::Result;

use crate::util::identity::Principal;

/// # Fetch Stats
///
/// Aggregate report counts, one bucket per status.
///
/// Counts are taken one query at a time; under concurrent submissions
/// the total may transiently disagree with the per-status buckets.
#[openapi(tag = "Investigator")]
#[get("/stats")]
pub async fn fetch_stats(
    db: &State<Database>,
    principal: Principal,
) -> Result<Json<ReportStats>> {
    principal.require(PortalPermission::FetchStats)?;

    Ok(Json(ReportStats {
        total: db.count_reports().await?,
        pending: db.count_reports_by_status(ReportStatus::Pending).await?,
        investigating: db
            .count_reports_by_status(ReportStatus::Investigating)
            .await?,
        resolved: db.count_reports_by_status(ReportStatus::Resolved).await?,
    }))
}
