use std::time::{SystemTime, UNIX_EPOCH};

use tipline_config::{config, report_internal_error, FilesS3};
use tipline_result::Result;

use aws_sdk_s3::{
    config::{Credentials, Region},
    Client, Config,
};

/// Create an S3 client
pub fn create_client(s3_config: FilesS3) -> Client {
    let provider_name = "tipline-creds";
    let creds = Credentials::new(
        s3_config.access_key_id,
        s3_config.secret_access_key,
        None,
        None,
        provider_name,
    );

    let config = Config::builder()
        .region(Region::new(s3_config.region))
        .endpoint_url(s3_config.endpoint)
        .credentials_provider(creds)
        .build();

    Client::from_conf(config)
}

/// Build the object key evidence is stored under
///
/// Prefixing with the upload time keeps concurrent uploads of files
/// with the same name from colliding within a single deployment.
pub fn evidence_object_key(original_filename: &str) -> String {
    let millis = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .expect("time is before the epoch")
        .as_millis();

    format!("{millis}_{original_filename}")
}

/// Upload evidence bytes, returning the name they were stored under
pub async fn upload_evidence(original_filename: &str, buf: Vec<u8>) -> Result<String> {
    let config = config().await;
    let bucket = config.files.s3.bucket.clone();
    let client = create_client(config.files.s3);

    let key = evidence_object_key(original_filename);

    report_internal_error!(
        client
            .put_object()
            .bucket(bucket)
            .key(&key)
            .body(buf.into())
            .send()
            .await
    )?;

    Ok(key)
}

#[cfg(test)]
mod tests {
    use super::evidence_object_key;

    #[test]
    fn object_keys_carry_the_original_filename() {
        let key = evidence_object_key("screenshot.png");

        let (millis, rest) = key.split_once('_').unwrap();
        assert!(millis.chars().all(|c| c.is_ascii_digit()));
        assert_eq!(rest, "screenshot.png");
    }
}
