use rocket::{Build, Rocket};
use rocket_okapi::okapi::openapi3::OpenApi;
use rocket_okapi::settings::OpenApiSettings;

mod citizen;
mod investigator;
mod root;

pub fn mount(mut rocket: Rocket<Build>) -> Rocket<Build> {
    let settings = OpenApiSettings::default();

    mount_endpoints_and_merged_docs! {
        rocket, "/".to_owned(), settings,
        "/" => (vec![], custom_openapi_spec()),
        "" => openapi_get_routes_spec![root::root],
        "/citizen" => citizen::routes(),
        "/investigator" => investigator::routes()
    };

    rocket
}

fn custom_openapi_spec() -> OpenApi {
    use rocket_okapi::okapi::openapi3::*;

    OpenApi {
        openapi: OpenApi::default_version(),
        info: Info {
            title: "Tipline API".to_owned(),
            description: Some(
                "Incident report portal for suspicious applications.".to_owned(),
            ),
            version: env!("CARGO_PKG_VERSION").to_string(),
            ..Default::default()
        },
        servers: vec![Server {
            url: "http://localhost:8000".to_owned(),
            description: Some("Local Tipline Environment".to_owned()),
            ..Default::default()
        }],
        tags: vec![
            Tag {
                name: "Core".to_owned(),
                description: Some("Determine information about this node".to_owned()),
                ..Default::default()
            },
            Tag {
                name: "Citizen".to_owned(),
                description: Some("Submit reports and upload evidence".to_owned()),
                ..Default::default()
            },
            Tag {
                name: "Investigator".to_owned(),
                description: Some("Triage the report collection".to_owned()),
                ..Default::default()
            },
        ],
        ..Default::default()
    }
}
