use rocket::data::ToByteUnit;
use rocket::serde::json::Json;
use rocket::Data;
use tipline_config::config;
use tipline_models::v0;
use tipline_permissions::PortalPermission;
use tipline_result::{create_error, Result};

use crate::util::identity::Principal;

/// # Upload Evidence
///
/// Upload an evidence file, returning the name it was stored under.
///
/// Pass the returned name along when submitting a report. Uploading
/// evidence and submitting a report are independent operations.
#[openapi(skip)]
#[post("/evidence?<filename>", data = "<file>")]
pub async fn upload_evidence(
    principal: Principal,
    filename: String,
    file: Data<'_>,
) -> Result<Json<v0::EvidenceUploaded>> {
    principal.require(PortalPermission::UploadEvidence)?;

    let config = config().await;
    let buf = file
        .open(config.files.limits.evidence_size.bytes())
        .into_bytes()
        .await
        .map_err(|_| create_error!(InternalError))?;

    if !buf.is_complete() {
        return Err(create_error!(FileTooLarge {
            max: config.files.limits.evidence_size
        }));
    }

    let buf = buf.into_inner();
    if buf.is_empty() {
        return Err(create_error!(FailedValidation {
            error: "file is empty".to_string()
        }));
    }

    tipline_files::upload_evidence(&filename, buf)
        .await
        .map(|file_name| Json(v0::EvidenceUploaded { file_name }))
}
