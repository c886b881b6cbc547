use rocket::Route;
use rocket_okapi::okapi::openapi3::OpenApi;

mod fetch_own_reports;
mod submit_report;
mod upload_evidence;

pub fn routes() -> (Vec<Route>, OpenApi) {
    openapi_get_routes_spec![
        // Reports
        submit_report::submit_report,
        fetch_own_reports::fetch_own_reports,
        // Evidence
        upload_evidence::upload_evidence,
    ]
}
