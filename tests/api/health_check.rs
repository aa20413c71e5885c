use serde_json::{
    json,
    Value,
};

use crate::helpers::*;

#[actix_rt::test]
async fn health_check_reports_configured_relay() {
    let test_app = spawn_app().await;

    let response = send_get_request(&test_app.endpoint("/api/health")).await;

    assert!(response.status().is_success());
    let body: Value = response.json().await.unwrap();
    assert_eq!(
        body,
        json!({
            "status": "ok",
            "emailConfig": {"host": "Set", "port": "Set", "user": "Set", "pass": "Set"}
        })
    );
}

#[actix_rt::test]
async fn health_check_reports_missing_settings_as_not_set() {
    let mut configuration = test_settings();
    configuration.email_client.port = None;
    configuration.email_client.password = String::new();
    let test_app = spawn_app_with(configuration, None).await;

    let response = send_get_request(&test_app.endpoint("/api/health")).await;

    assert_eq!(200, response.status().as_u16());
    let body: Value = response.json().await.unwrap();
    assert_eq!(
        body["emailConfig"],
        json!({"host": "Set", "port": "Not Set", "user": "Set", "pass": "Not Set"})
    );
}

#[actix_rt::test]
async fn health_check_never_touches_the_relay() {
    let test_app = spawn_app_failing_on(1).await;

    let response = send_get_request(&test_app.endpoint("/api/health")).await;

    assert_eq!(200, response.status().as_u16());
    assert!(test_app.attempted_messages().is_empty());
}
