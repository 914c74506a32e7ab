use crate::helpers::{json_body, valid_submission, TestApp};
use portfolio_backend::configuration::Environment;
use std::time::Duration;

const WINDOW: Duration = Duration::from_secs(15 * 60);

async fn spawn_limited_app(max_requests: u32) -> TestApp {
    TestApp::spawn_with(|config| {
        config.rate_limit.max_requests = max_requests;
        config.rate_limit.window_milliseconds = WINDOW.as_millis() as u64;
    })
    .await
}

#[tokio::test]
async fn submissions_beyond_the_limit_get_429_and_send_nothing() {
    // Arrange
    let app = spawn_limited_app(2).await;
    for _ in 0..2 {
        let response = app.post_contact(&valid_submission()).await;
        assert_eq!(200, response.status().as_u16());
    }

    // Act
    let response = app.post_contact(&valid_submission()).await;

    // Assert
    assert_eq!(429, response.status().as_u16());
    assert!(response.headers().contains_key("retry-after"));
    assert_eq!(response.headers()["ratelimit-remaining"], "0");
    let body = json_body(response).await;
    assert_eq!(body["success"], false);
    assert_eq!(
        body["message"],
        "Too many contact attempts. Please try again later."
    );
    assert_eq!(app.sent_emails().len(), 4);
}

#[tokio::test]
async fn submissions_are_accepted_again_after_the_window() {
    // Arrange
    let app = spawn_limited_app(1).await;
    assert_eq!(200, app.post_contact(&valid_submission()).await.status().as_u16());
    assert_eq!(429, app.post_contact(&valid_submission()).await.status().as_u16());

    // Act
    app.clock.advance(WINDOW);
    let response = app.post_contact(&valid_submission()).await;

    // Assert
    assert_eq!(200, response.status().as_u16());
    assert_eq!(app.sent_emails().len(), 4);
}

#[tokio::test]
async fn rejected_submissions_still_count_against_the_limit() {
    // Arrange
    let app = spawn_limited_app(2).await;
    for _ in 0..2 {
        let response = app.post_contact(&serde_json::json!({})).await;
        assert_eq!(400, response.status().as_u16());
    }

    // Act
    let response = app.post_contact(&valid_submission()).await;

    // Assert
    assert_eq!(429, response.status().as_u16());
    assert!(app.sent_emails().is_empty());
}

#[tokio::test]
async fn responses_carry_rate_limit_headers() {
    // Arrange
    let app = spawn_limited_app(5).await;

    // Act
    let response = app.post_contact(&valid_submission()).await;

    // Assert
    assert_eq!(200, response.status().as_u16());
    assert_eq!(response.headers()["ratelimit-limit"], "5");
    assert_eq!(response.headers()["ratelimit-remaining"], "4");
    assert_eq!(response.headers()["ratelimit-reset"], "900");
}

#[tokio::test]
async fn liveness_probe_is_not_rate_limited() {
    // Arrange
    let app = spawn_limited_app(1).await;
    app.post_contact(&valid_submission()).await;
    app.post_contact(&valid_submission()).await;

    // Act
    let response = app.get("/api/contact/test").await;

    // Assert
    assert_eq!(200, response.status().as_u16());
    assert!(!response.headers().contains_key("ratelimit-limit"));
}

#[tokio::test]
async fn rejected_submissions_are_readable_by_the_allowed_frontend() {
    // Arrange
    let frontend = "https://portfolio.example.com";
    let app = TestApp::spawn_with(|config| {
        config.application.environment = Environment::Production;
        config.cors.frontend_url = Some(frontend.into());
        config.rate_limit.max_requests = 1;
    })
    .await;
    let origin = [("Origin", frontend)];
    let response = app
        .post_contact_with_headers(&valid_submission(), &origin)
        .await;
    assert_eq!(200, response.status().as_u16());

    // Act
    let response = app
        .post_contact_with_headers(&valid_submission(), &origin)
        .await;

    // Assert
    assert_eq!(429, response.status().as_u16());
    assert_eq!(response.headers()["access-control-allow-origin"], frontend);
    assert_eq!(response.headers()["ratelimit-remaining"], "0");
    let body = json_body(response).await;
    assert_eq!(
        body["message"],
        "Too many contact attempts. Please try again later."
    );
}

#[tokio::test]
async fn forged_forwarded_for_headers_do_not_reset_the_limit() {
    // Arrange
    let app = spawn_limited_app(1).await;

    // Act
    let mut statuses = Vec::new();
    for i in 0..5 {
        let forwarded = format!("10.9.9.{}", i);
        let response = app
            .post_contact_with_headers(
                &valid_submission(),
                &[("X-Forwarded-For", forwarded.as_str())],
            )
            .await;
        statuses.push(response.status().as_u16());
    }

    // Assert
    assert_eq!(statuses, vec![200, 429, 429, 429, 429]);
    assert_eq!(app.sent_emails().len(), 2);
}

#[tokio::test]
async fn forwarded_for_keys_clients_when_trusted() {
    // Arrange
    let app = TestApp::spawn_with(|config| {
        config.rate_limit.max_requests = 1;
        config.rate_limit.trust_forwarded_for = true;
    })
    .await;

    // Act
    let first = app
        .post_contact_with_headers(&valid_submission(), &[("X-Forwarded-For", "10.9.9.1")])
        .await;
    let second = app
        .post_contact_with_headers(&valid_submission(), &[("X-Forwarded-For", "10.9.9.2")])
        .await;
    let repeat = app
        .post_contact_with_headers(&valid_submission(), &[("X-Forwarded-For", "10.9.9.1")])
        .await;

    // Assert
    assert_eq!(200, first.status().as_u16());
    assert_eq!(200, second.status().as_u16());
    assert_eq!(429, repeat.status().as_u16());
}

#[tokio::test]
async fn other_methods_on_the_send_route_do_not_use_up_attempts() {
    // Arrange
    let app = spawn_limited_app(1).await;
    for _ in 0..3 {
        let response = app.get("/api/contact/send").await;
        assert_eq!(405, response.status().as_u16());
        assert!(!response.headers().contains_key("ratelimit-limit"));
    }

    // Act
    let response = app.post_contact(&valid_submission()).await;

    // Assert
    assert_eq!(200, response.status().as_u16());
}
