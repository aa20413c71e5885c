use serde_json::{
    json,
    Value,
};

use contact_relay::routes::OPERATOR_EMAIL;

use crate::helpers::*;

#[actix_rt::test]
async fn subscribe_returns_a_200_for_valid_email() {
    let test_app = spawn_app().await;

    let response =
        send_json_post_request(&test_app.endpoint("/api/subscribe"), &json!({"email": "a@b.com"}))
            .await;

    assert_eq!(200, response.status().as_u16());
    let body: Value = response.json().await.unwrap();
    assert_eq!(body, json!({"message": "Subscription successful"}));
}

#[actix_rt::test]
async fn subscribe_notifies_the_operator_then_welcomes_the_subscriber() {
    let test_app = spawn_app().await;

    send_json_post_request(&test_app.endpoint("/api/subscribe"), &json!({"email": "a@b.com"}))
        .await;

    let sent = test_app.attempted_messages();
    assert_eq!(sent.len(), 2);
    assert_eq!(sent[0].to, OPERATOR_EMAIL);
    assert_eq!(sent[0].from.email, "relay@orangelilies.com");
    assert_eq!(sent[0].subject, "New Newsletter Subscription");
    assert_eq!(sent[1].to, "a@b.com");
    assert_eq!(sent[1].subject, "Welcome to Orange Lilies Newsletter!");
}

#[actix_rt::test]
async fn subscribe_returns_a_400_with_missing_email() {
    let test_app = spawn_app().await;
    let invalid_data = vec![
        (json!({}), "empty body"),
        (json!({"email": ""}), "empty email"),
        (json!({"email": null}), "null email"),
        (json!({"name": "le guin"}), "missing email"),
    ];
    for (body, error_message) in invalid_data {
        let response = send_json_post_request(&test_app.endpoint("/api/subscribe"), &body).await;
        assert_eq!(
            400,
            response.status().as_u16(),
            "Subscription with invalid body with {} did not fail",
            error_message
        );
        let body: Value = response.json().await.unwrap();
        assert_eq!(body, json!({"error": "Email is required"}));
    }
    assert!(test_app.attempted_messages().is_empty());
}

#[actix_rt::test]
async fn subscribe_treats_a_missing_or_non_json_body_as_missing_email() {
    let test_app = spawn_app().await;

    let response = reqwest::Client::new()
        .post(&test_app.endpoint("/api/subscribe"))
        .send()
        .await
        .expect("Fail to execute post request");
    assert_eq!(400, response.status().as_u16(), "bodyless request did not fail");
    let body: Value = response.json().await.unwrap();
    assert_eq!(body, json!({"error": "Email is required"}));

    let invalid_data = vec![
        ("application/json", "", "empty json body"),
        ("text/plain", "a@b.com", "plain text"),
        ("application/x-www-form-urlencoded", "email=a%40b.com", "form encoded"),
    ];
    for (content_type, body, error_message) in invalid_data {
        let response = send_post_request(
            &test_app.endpoint("/api/subscribe"),
            content_type,
            body.to_string(),
        )
        .await;
        assert_eq!(
            400,
            response.status().as_u16(),
            "Subscription with {} did not fail",
            error_message
        );
        let body: Value = response.json().await.unwrap();
        assert_eq!(body, json!({"error": "Email is required"}), "{}", error_message);
    }
    assert!(test_app.attempted_messages().is_empty());
}

#[actix_rt::test]
async fn subscribe_returns_a_400_for_json_that_does_not_parse() {
    let test_app = spawn_app().await;
    let invalid_data = vec![
        ("{\"email\": ", "truncated json"),
        ("{\"email\": 42}", "email is not a string"),
    ];
    for (body, error_message) in invalid_data {
        let response = send_post_request(
            &test_app.endpoint("/api/subscribe"),
            "application/json",
            body.to_string(),
        )
        .await;
        assert_eq!(
            400,
            response.status().as_u16(),
            "Subscription with {} did not fail",
            error_message
        );
        let body: Value = response.json().await.unwrap();
        assert_eq!(body, json!({"error": "Invalid request body"}));
    }
    assert!(test_app.attempted_messages().is_empty());
}

#[actix_rt::test]
async fn subscribe_returns_a_500_when_the_notification_fails() {
    let test_app = spawn_app_failing_on(1).await;

    let response =
        send_json_post_request(&test_app.endpoint("/api/subscribe"), &json!({"email": "a@b.com"}))
            .await;

    assert_eq!(500, response.status().as_u16());
    let body: Value = response.json().await.unwrap();
    assert_eq!(
        body,
        json!({
            "error": "Failed to process subscription",
            "details": "connect ECONNREFUSED 127.0.0.1:587"
        })
    );
    // the welcome email is never attempted
    assert_eq!(test_app.attempted_messages().len(), 1);
}

#[actix_rt::test]
async fn subscribe_returns_a_500_when_the_welcome_fails_after_notifying() {
    let test_app = spawn_app_failing_on(2).await;

    let response =
        send_json_post_request(&test_app.endpoint("/api/subscribe"), &json!({"email": "a@b.com"}))
            .await;

    assert_eq!(500, response.status().as_u16());
    let sent = test_app.attempted_messages();
    assert_eq!(sent.len(), 2);
    assert_eq!(sent[0].to, OPERATOR_EMAIL);
}
