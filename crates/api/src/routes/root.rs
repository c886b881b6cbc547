use rocket::serde::json::Json;
use schemars::JsonSchema;
use serde::Serialize;
use tipline_result::Result;

/// Capture crate version from Cargo
static CRATE_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Successful root response
#[derive(Serialize, JsonSchema, Debug)]
pub struct RootResponse {
    tipline: &'static str,
    version: &'static str,
}

/// # Root
///
/// Service information.
#[openapi(tag = "Core")]
#[get("/")]
pub async fn root() -> Result<Json<RootResponse>> {
    Ok(Json(RootResponse {
        tipline: "Hello, I am an incident report portal!",
        version: CRATE_VERSION,
    }))
}
