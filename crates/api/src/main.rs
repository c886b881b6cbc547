#[macro_use]
extern crate rocket;
#[macro_use]
extern crate rocket_okapi;
#[macro_use]
extern crate serde_json;

pub mod routes;
pub mod util;

#[cfg(test)]
mod tests;

use std::str::FromStr;

use rocket_cors::AllowedOrigins;
use tipline_database::DatabaseInfo;
use util::identity::{IdentityProvider, TokenIdentityProvider};

#[launch]
async fn rocket() -> _ {
    tipline_config::configure!(api);

    // Setup database
    let db = DatabaseInfo::Auto
        .connect()
        .await
        .expect("Database connection failed.");

    // Setup identity provider
    let identity: Box<dyn IdentityProvider> = Box::new(TokenIdentityProvider::from_config().await);

    let cors = rocket_cors::CorsOptions {
        allowed_origins: AllowedOrigins::All,
        allowed_methods: [
            "Get", "Put", "Post", "Delete", "Options", "Head", "Trace", "Connect", "Patch",
        ]
        .iter()
        .map(|s| FromStr::from_str(s).unwrap())
        .collect(),
        ..Default::default()
    }
    .to_cors()
    .expect("Failed to create CORS.");

    // Configure Rocket
    let rocket = rocket::build();
    routes::mount(rocket)
        .mount("/", rocket_cors::catch_all_options_routes())
        .mount(
            "/swagger/",
            rocket_okapi::swagger_ui::make_swagger_ui(&rocket_okapi::swagger_ui::SwaggerUIConfig {
                url: "../openapi.json".to_owned(),
                ..Default::default()
            }),
        )
        .manage(db)
        .manage(identity)
        .manage(cors.clone())
        .attach(cors)
}
