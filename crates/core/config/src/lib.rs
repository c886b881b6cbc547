use std::collections::HashMap;

use cached::proc_macro::cached;
use config::{Config, File, FileFormat};
use futures_locks::RwLock;
use once_cell::sync::Lazy;
use serde::Deserialize;

static CONFIG_BUILDER: Lazy<RwLock<Config>> = Lazy::new(|| {
    RwLock::new({
        let mut builder = Config::builder().add_source(File::from_str(
            include_str!("../Tipline.toml"),
            FileFormat::Toml,
        ));

        if std::path::Path::new("Tipline.toml").exists() {
            builder = builder.add_source(File::new("Tipline.toml", FileFormat::Toml));
        }

        builder.build().unwrap()
    })
});

#[derive(Deserialize, Debug, Clone)]
pub struct Database {
    pub mongodb: String,
}

#[derive(Deserialize, Debug, Clone)]
pub struct Hosts {
    pub api: String,
}

#[derive(Deserialize, Debug, Clone)]
pub struct ApiIdentityToken {
    pub username: String,
    pub role: String,
}

#[derive(Deserialize, Debug, Clone)]
pub struct ApiIdentity {
    pub tokens: HashMap<String, ApiIdentityToken>,
}

#[derive(Deserialize, Debug, Clone)]
pub struct Api {
    pub identity: ApiIdentity,
}

#[derive(Deserialize, Debug, Clone)]
pub struct FilesS3 {
    pub endpoint: String,
    pub region: String,
    pub access_key_id: String,
    pub secret_access_key: String,
    pub bucket: String,
}

#[derive(Deserialize, Debug, Clone)]
pub struct FilesLimits {
    pub evidence_size: usize,
}

#[derive(Deserialize, Debug, Clone)]
pub struct Files {
    pub s3: FilesS3,
    pub limits: FilesLimits,
}

#[derive(Deserialize, Debug, Clone)]
pub struct Settings {
    pub database: Database,
    pub hosts: Hosts,
    pub api: Api,
    pub files: Files,
}

pub async fn init() {
    tracing::info!("configuration loaded, api host is {}", config().await.hosts.api);
}

pub async fn read() -> Config {
    CONFIG_BUILDER.read().await.clone()
}

#[cached(time = 30)]
pub async fn config() -> Settings {
    read().await.try_deserialize::<Settings>().unwrap()
}

/// Install the global tracing subscriber
pub fn setup_logging(application: &str) {
    use tracing_subscriber::prelude::*;

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                tracing_subscriber::EnvFilter::new(format!("info,{application}=debug"))
            }),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();
}

/// Configure logging and report the loaded configuration
#[macro_export]
macro_rules! configure {
    ($application: ident) => {
        $crate::setup_logging(stringify!($application));
        $crate::init().await;
    };
}

#[cfg(feature = "report-macros")]
pub use tipline_result;

/// Log an internal error and hide its detail from the caller
#[cfg(feature = "report-macros")]
#[macro_export]
macro_rules! report_internal_error {
    ( $expr: expr ) => {
        $expr.map_err(|err| {
            ::tracing::error!("internal error: {err:?}");
            $crate::tipline_result::create_error!(InternalError)
        })
    };
}

#[cfg(feature = "test")]
#[cfg(test)]
mod tests {
    use crate::init;

    #[async_std::test]
    async fn it_works() {
        init().await;
    }
}
