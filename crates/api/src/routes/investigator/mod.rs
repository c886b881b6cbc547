use rocket::Route;
use rocket_okapi::okapi::openapi3::OpenApi;

mod edit_report_status;
mod fetch_report;
mod fetch_reports;
mod fetch_reports_by_status;
mod fetch_reports_by_threat;
mod fetch_stats;

pub fn routes() -> (Vec<Route>, OpenApi) {
    openapi_get_routes_spec![
        // Reports
        fetch_reports::fetch_reports,
        fetch_report::fetch_report,
        fetch_reports_by_status::fetch_reports_by_status,
        fetch_reports_by_threat::fetch_reports_by_threat,
        edit_report_status::edit_report_status,
        // Statistics
        fetch_stats::fetch_stats,
    ]
}
