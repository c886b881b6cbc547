use std::collections::HashMap;

use rocket::http::{ContentType, Header, Status};
use rocket::local::asynchronous::Client;
use tipline_database::DatabaseInfo;
use tipline_models::v0;
use tipline_permissions::Role;

use crate::util::identity::{IdentityProvider, Principal, TokenIdentityProvider};

async fn client() -> Client {
    let db = DatabaseInfo::Reference
        .connect()
        .await
        .expect("Database connection failed.");

    let mut tokens = HashMap::new();
    for (token, id, role) in [
        ("alice-token", "alice", Role::Citizen),
        ("bob-token", "bob", Role::Citizen),
        ("carol-token", "carol", Role::Citizen),
        ("vimes-token", "vimes", Role::Investigator),
    ] {
        tokens.insert(
            token.to_string(),
            Principal {
                id: id.to_string(),
                role,
            },
        );
    }

    let identity: Box<dyn IdentityProvider> = Box::new(TokenIdentityProvider::new(tokens));

    let rocket = crate::routes::mount(rocket::build())
        .manage(db)
        .manage(identity);

    Client::tracked(rocket).await.expect("valid rocket instance")
}

fn session(token: &str) -> Header<'static> {
    Header::new("x-session-token", token.to_string())
}

async fn submit(client: &Client, token: &str, app: &str, threat_level: &str) -> v0::Report {
    let response = client
        .post("/citizen/reports")
        .header(session(token))
        .header(ContentType::JSON)
        .body(
            json!({
                "suspicious_app_name": app,
                "victim_name": "Sam Doe",
                "contact_info": "sam@example.com",
                "download_source": "https://downloads.example",
                "threat_level": threat_level,
                "description": "Asked for banking credentials after install."
            })
            .to_string(),
        )
        .dispatch()
        .await;

    assert_eq!(response.status(), Status::Ok);
    response.into_json().await.expect("valid report")
}

#[rocket::async_test]
async fn service_hello() {
    let client = client().await;

    let response = client.get("/").dispatch().await;
    assert_eq!(response.status(), Status::Ok);

    let body: serde_json::Value = response.into_json().await.unwrap();
    assert!(body["tipline"].is_string());
}

#[rocket::async_test]
async fn citizen_submits_and_investigator_triages() {
    let client = client().await;

    let report = submit(&client, "alice-token", "FakeBank", "high").await;
    assert_eq!(report.status, v0::ReportStatus::Pending);
    assert_eq!(report.submitter_id, "alice");
    assert!(!report.id.is_empty());

    // the investigator finds the report through the threat level filter
    let response = client
        .get("/investigator/reports/threat/high")
        .header(session("vimes-token"))
        .dispatch()
        .await;
    assert_eq!(response.status(), Status::Ok);
    let matches: Vec<v0::Report> = response.into_json().await.unwrap();
    assert_eq!(matches.len(), 1);
    assert_eq!(matches[0].id, report.id);

    // pick the report up
    let response = client
        .patch(format!("/investigator/reports/{}/status", report.id))
        .header(session("vimes-token"))
        .header(ContentType::JSON)
        .body(json!({ "status": "investigating" }).to_string())
        .dispatch()
        .await;
    assert_eq!(response.status(), Status::Ok);
    let updated: v0::Report = response.into_json().await.unwrap();
    assert_eq!(updated.status, v0::ReportStatus::Investigating);
    assert_eq!(updated.suspicious_app_name, report.suspicious_app_name);
    assert_eq!(updated.submitted_at, report.submitted_at);

    // a fresh fetch observes the new status
    let response = client
        .get(format!("/investigator/reports/{}", report.id))
        .header(session("vimes-token"))
        .dispatch()
        .await;
    assert_eq!(response.status(), Status::Ok);
    let fetched: v0::Report = response.into_json().await.unwrap();
    assert_eq!(fetched.status, v0::ReportStatus::Investigating);

    let response = client
        .get("/investigator/stats")
        .header(session("vimes-token"))
        .dispatch()
        .await;
    assert_eq!(response.status(), Status::Ok);
    let stats: v0::ReportStats = response.into_json().await.unwrap();
    assert_eq!(stats.total, 1);
    assert_eq!(stats.pending, 0);
    assert_eq!(stats.investigating, 1);
    assert_eq!(stats.resolved, 0);
}

#[rocket::async_test]
async fn citizens_only_see_their_own_reports() {
    let client = client().await;

    let first = submit(&client, "bob-token", "FreeCoins", "low").await;
    let second = submit(&client, "bob-token", "CloneApp", "medium").await;

    let response = client
        .get("/citizen/reports")
        .header(session("bob-token"))
        .dispatch()
        .await;
    assert_eq!(response.status(), Status::Ok);
    let reports: Vec<v0::Report> = response.into_json().await.unwrap();
    assert_eq!(reports.len(), 2);
    assert_eq!(reports[0].id, second.id);
    assert_eq!(reports[1].id, first.id);

    let response = client
        .get("/citizen/reports")
        .header(session("carol-token"))
        .dispatch()
        .await;
    assert_eq!(response.status(), Status::Ok);
    let reports: Vec<v0::Report> = response.into_json().await.unwrap();
    assert!(reports.is_empty());

    // the investigator sees both, newest first
    let response = client
        .get("/investigator/reports")
        .header(session("vimes-token"))
        .dispatch()
        .await;
    assert_eq!(response.status(), Status::Ok);
    let reports: Vec<v0::Report> = response.into_json().await.unwrap();
    assert_eq!(reports.len(), 2);
    assert_eq!(reports[0].id, second.id);

    let response = client
        .get("/investigator/stats")
        .header(session("vimes-token"))
        .dispatch()
        .await;
    let stats: v0::ReportStats = response.into_json().await.unwrap();
    assert_eq!(stats.total, 2);
}

#[rocket::async_test]
async fn permission_table_is_enforced() {
    let client = client().await;

    let report = submit(&client, "alice-token", "FakeBank", "high").await;

    // citizens cannot read the full collection, not even their own by id
    for uri in [
        "/investigator/reports".to_string(),
        format!("/investigator/reports/{}", report.id),
        "/investigator/stats".to_string(),
        "/investigator/reports/status/pending".to_string(),
    ] {
        let response = client
            .get(uri)
            .header(session("alice-token"))
            .dispatch()
            .await;
        assert_eq!(response.status(), Status::Forbidden);

        let body: serde_json::Value = response.into_json().await.unwrap();
        assert_eq!(body["type"], "MissingPermission");
    }

    // citizens cannot change a status, even of a report they submitted
    let response = client
        .patch(format!("/investigator/reports/{}/status", report.id))
        .header(session("alice-token"))
        .header(ContentType::JSON)
        .body(json!({ "status": "resolved" }).to_string())
        .dispatch()
        .await;
    assert_eq!(response.status(), Status::Forbidden);

    // investigators cannot submit reports
    let response = client
        .post("/citizen/reports")
        .header(session("vimes-token"))
        .header(ContentType::JSON)
        .body(
            json!({
                "suspicious_app_name": "FakeBank",
                "victim_name": "Sam Doe",
                "contact_info": "sam@example.com",
                "download_source": "https://downloads.example",
                "threat_level": "high",
                "description": "Asked for banking credentials after install."
            })
            .to_string(),
        )
        .dispatch()
        .await;
    assert_eq!(response.status(), Status::Forbidden);

    // a denied call has no side effects
    let response = client
        .get("/investigator/stats")
        .header(session("vimes-token"))
        .dispatch()
        .await;
    let stats: v0::ReportStats = response.into_json().await.unwrap();
    assert_eq!(stats.total, 1);
    assert_eq!(stats.pending, 1);

    // unresolved identities are rejected outright
    let response = client.get("/citizen/reports").dispatch().await;
    assert_eq!(response.status(), Status::Unauthorized);

    let response = client
        .get("/citizen/reports")
        .header(session("unknown-token"))
        .dispatch()
        .await;
    assert_eq!(response.status(), Status::Unauthorized);
}

#[rocket::async_test]
async fn submissions_are_validated() {
    let client = client().await;

    let mut fields = json!({
        "suspicious_app_name": "",
        "victim_name": "Sam Doe",
        "contact_info": "sam@example.com",
        "download_source": "https://downloads.example",
        "threat_level": "high",
        "description": "Asked for banking credentials after install."
    });

    let response = client
        .post("/citizen/reports")
        .header(session("alice-token"))
        .header(ContentType::JSON)
        .body(fields.to_string())
        .dispatch()
        .await;
    assert_eq!(response.status(), Status::BadRequest);
    let body: serde_json::Value = response.into_json().await.unwrap();
    assert_eq!(body["type"], "FailedValidation");
    assert!(body["error"]
        .as_str()
        .unwrap()
        .contains("suspicious_app_name"));

    fields["suspicious_app_name"] = json!("FakeBank");
    fields["contact_info"] = json!("not-an-email");

    let response = client
        .post("/citizen/reports")
        .header(session("alice-token"))
        .header(ContentType::JSON)
        .body(fields.to_string())
        .dispatch()
        .await;
    assert_eq!(response.status(), Status::BadRequest);
    let body: serde_json::Value = response.into_json().await.unwrap();
    assert_eq!(body["type"], "FailedValidation");
    assert!(body["error"].as_str().unwrap().contains("contact_info"));

    // nothing was stored along the way
    let response = client
        .get("/investigator/stats")
        .header(session("vimes-token"))
        .dispatch()
        .await;
    let stats: v0::ReportStats = response.into_json().await.unwrap();
    assert_eq!(stats.total, 0);
}

#[rocket::async_test]
async fn unknown_ids_and_statuses_are_rejected() {
    let client = client().await;

    let response = client
        .get("/investigator/reports/01J00000000000000000000000")
        .header(session("vimes-token"))
        .dispatch()
        .await;
    assert_eq!(response.status(), Status::NotFound);

    let response = client
        .patch("/investigator/reports/01J00000000000000000000000/status")
        .header(session("vimes-token"))
        .header(ContentType::JSON)
        .body(json!({ "status": "investigating" }).to_string())
        .dispatch()
        .await;
    assert_eq!(response.status(), Status::NotFound);

    // the closed set is enforced on the wire
    let report = submit(&client, "alice-token", "FakeBank", "high").await;
    let response = client
        .patch(format!("/investigator/reports/{}/status", report.id))
        .header(session("vimes-token"))
        .header(ContentType::JSON)
        .body(json!({ "status": "closed" }).to_string())
        .dispatch()
        .await;
    assert_eq!(response.status(), Status::UnprocessableEntity);

    let response = client
        .get("/investigator/reports/status/closed")
        .header(session("vimes-token"))
        .dispatch()
        .await;
    assert_eq!(response.status(), Status::BadRequest);

    // the failed transition left the report untouched
    let response = client
        .get(format!("/investigator/reports/{}", report.id))
        .header(session("vimes-token"))
        .dispatch()
        .await;
    let fetched: v0::Report = response.into_json().await.unwrap();
    assert_eq!(fetched.status, v0::ReportStatus::Pending);
}
