use reqwest::Method;

use crate::helpers::*;

#[actix_rt::test]
async fn root_greets() {
    let test_app = spawn_app().await;

    let response = send_get_request(&test_app.endpoint("/")).await;

    assert_eq!(200, response.status().as_u16());
    assert_eq!(response.text().await.unwrap(), "Hello World");
}

#[actix_rt::test]
async fn get_routes_answer_head() {
    let test_app = spawn_app().await;

    for path in ["/", "/api/health"] {
        let response = reqwest::Client::new()
            .head(&test_app.endpoint(path))
            .send()
            .await
            .expect("Fail to execute head request");
        assert_eq!(200, response.status().as_u16(), "HEAD {} failed", path);
    }
}

#[actix_rt::test]
async fn unknown_routes_are_404() {
    let test_app = spawn_app().await;

    let response = send_get_request(&test_app.endpoint("/api/unknown")).await;
    assert_eq!(404, response.status().as_u16());

    // known path, wrong method
    let response = send_get_request(&test_app.endpoint("/api/subscribe")).await;
    assert_eq!(404, response.status().as_u16());

    let response = send_post_request(
        &test_app.endpoint("/api/health"),
        "application/json",
        "{}".to_string(),
    )
    .await;
    assert_eq!(404, response.status().as_u16());
}

#[actix_rt::test]
async fn any_origin_is_allowed() {
    let test_app = spawn_app().await;

    let response = reqwest::Client::new()
        .get(&test_app.endpoint("/api/health"))
        .header("Origin", "https://www.orangelilies.com")
        .send()
        .await
        .expect("Fail to execute get request");

    assert_eq!(200, response.status().as_u16());
    assert_eq!(
        response
            .headers()
            .get("access-control-allow-origin")
            .and_then(|v| v.to_str().ok()),
        Some("*")
    );
}

#[actix_rt::test]
async fn preflight_requests_are_answered() {
    let test_app = spawn_app().await;

    let response = reqwest::Client::new()
        .request(Method::OPTIONS, &test_app.endpoint("/api/contact"))
        .header("Origin", "https://example.org")
        .header("Access-Control-Request-Method", "POST")
        .header("Access-Control-Request-Headers", "content-type")
        .send()
        .await
        .expect("Fail to execute preflight request");

    assert!(response.status().is_success());
    assert!(response
        .headers()
        .contains_key("access-control-allow-methods"));
    assert!(test_app.attempted_messages().is_empty());
}
