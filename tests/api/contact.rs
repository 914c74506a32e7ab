use crate::helpers::{json_body, valid_submission, Failure, TestApp, TRANSPORT_DETAIL};
use portfolio_backend::configuration::Environment;

#[tokio::test]
async fn send_returns_200_and_sends_two_emails_for_a_valid_submission() {
    // Arrange
    let app = TestApp::spawn_app().await;

    // Act
    let response = app.post_contact(&valid_submission()).await;

    // Assert
    assert_eq!(200, response.status().as_u16());
    let body = json_body(response).await;
    assert_eq!(body["success"], true);
    assert_eq!(
        body["message"],
        "Message sent successfully! I will get back to you soon."
    );

    let sent = app.sent_emails();
    assert_eq!(sent.len(), 2);

    let notification = &sent[0];
    assert_eq!(notification.to, app.settings.email_client.recipient_email);
    assert_eq!(notification.from_address, app.settings.email_client.sender_email);
    assert_eq!(notification.reply_to.as_deref(), Some("ada@example.com"));
    assert_eq!(notification.subject, "New Contact: Hi");
    assert!(notification.html_body.contains("line1<br>line2"));
    assert!(notification.html_body.contains("Ada (ada@example.com)"));
    assert!(notification.text_body.contains("line1\nline2"));

    let confirmation = &sent[1];
    assert_eq!(confirmation.to, "ada@example.com");
    assert_eq!(confirmation.subject, "Thank you for contacting me!");
    assert!(confirmation
        .html_body
        .contains(&app.settings.email_client.owner_name));
}

#[tokio::test]
async fn send_accepts_url_encoded_forms() {
    // Arrange
    let app = TestApp::spawn_app().await;
    let body = "name=Ada&email=ada%40example.com&subject=Hi&message=line1%0Aline2";

    // Act
    let response = app.post_contact_form(body).await;

    // Assert
    assert_eq!(200, response.status().as_u16());
    assert_eq!(app.sent_emails().len(), 2);
}

#[tokio::test]
async fn send_returns_400_when_a_field_is_missing_or_empty() {
    // Arrange
    let app = TestApp::spawn_app().await;
    let test_cases = vec![
        (
            serde_json::json!({"email": "ada@example.com", "subject": "Hi", "message": "Hello"}),
            "missing the name",
        ),
        (
            serde_json::json!({"name": "Ada", "subject": "Hi", "message": "Hello"}),
            "missing the email",
        ),
        (
            serde_json::json!({"name": "Ada", "email": "ada@example.com", "subject": "", "message": "Hello"}),
            "empty subject",
        ),
        (
            serde_json::json!({"name": "Ada", "email": "ada@example.com", "subject": "Hi", "message": ""}),
            "empty message",
        ),
        (
            serde_json::json!({"name": "Ada", "email": "not-an-email", "subject": "Hi"}),
            "missing message with a bad email",
        ),
        (serde_json::json!({}), "missing everything"),
    ];

    for (invalid_body, error_message) in test_cases {
        // Act
        let response = app.post_contact(&invalid_body).await;

        // Assert
        assert_eq!(
            400,
            response.status().as_u16(),
            "The API did not fail with 400 Bad Request when the payload was {}.",
            error_message
        );
        let body = json_body(response).await;
        assert_eq!(body["success"], false);
        assert_eq!(body["message"], "All fields are required.");
    }
    assert!(app.sent_emails().is_empty());
}

#[tokio::test]
async fn send_returns_400_for_a_malformed_email() {
    // Arrange
    let app = TestApp::spawn_app().await;
    let test_cases = vec![
        ("adaexample.com", "no @ symbol"),
        ("ada@example", "no dot in the domain"),
        ("ada@exa mple.com", "whitespace"),
        ("@example.com", "no local part"),
    ];

    for (email, description) in test_cases {
        let mut body = valid_submission();
        body["email"] = email.into();

        // Act
        let response = app.post_contact(&body).await;

        // Assert
        assert_eq!(
            400,
            response.status().as_u16(),
            "The API did not reject an email with {}.",
            description
        );
        let body = json_body(response).await;
        assert_eq!(body["success"], false);
        assert_eq!(body["message"], "Please provide a valid email address.");
    }
    assert!(app.sent_emails().is_empty());
}

#[tokio::test]
async fn send_returns_400_for_an_unparseable_body() {
    // Arrange
    let app = TestApp::spawn_app().await;

    // Act
    let response = app
        .api_client
        .post(&format!("{}/api/contact/send", &app.address))
        .header("Content-Type", "application/json")
        .body("{\"name\": ")
        .send()
        .await
        .expect("Failed to execute request.");

    // Assert
    assert_eq!(400, response.status().as_u16());
    let body = json_body(response).await;
    assert_eq!(body["success"], false);
    assert_eq!(body["message"], "All fields are required.");
    assert!(app.sent_emails().is_empty());
}

#[tokio::test]
async fn authentication_failure_returns_a_configuration_error() {
    // Arrange
    let app = TestApp::spawn_app().await;
    app.transport.fail_with(Failure::Authentication);

    // Act
    let response = app.post_contact(&valid_submission()).await;

    // Assert
    assert_eq!(500, response.status().as_u16());
    let text = response.text().await.unwrap();
    assert!(!text.contains(TRANSPORT_DETAIL));
    assert!(!text.contains("535"));
    let body: serde_json::Value = serde_json::from_str(&text).unwrap();
    assert_eq!(body["success"], false);
    assert_eq!(
        body["message"],
        "Email configuration error. Please contact the site administrator."
    );
}

#[tokio::test]
async fn transport_failure_returns_a_generic_error() {
    // Arrange
    let app = TestApp::spawn_app().await;
    app.transport.fail_with(Failure::Transport);

    // Act
    let response = app.post_contact(&valid_submission()).await;

    // Assert
    assert_eq!(500, response.status().as_u16());
    let text = response.text().await.unwrap();
    assert!(!text.contains(TRANSPORT_DETAIL));
    let body: serde_json::Value = serde_json::from_str(&text).unwrap();
    assert_eq!(body["success"], false);
    assert_eq!(
        body["message"],
        "Failed to send message. Please try again later."
    );
}

#[tokio::test]
async fn confirmation_is_not_sent_when_the_owner_notification_fails() {
    // Arrange
    let app = TestApp::spawn_app().await;
    app.transport.fail_with(Failure::Transport);

    // Act
    app.post_contact(&valid_submission()).await;

    // Assert
    let attempts = app.sent_emails();
    assert_eq!(attempts.len(), 1);
    assert_eq!(attempts[0].subject, "New Contact: Hi");
}

#[tokio::test]
async fn liveness_probe_succeeds_even_when_mail_is_broken() {
    // Arrange
    let app = TestApp::spawn_app().await;
    app.transport.fail_with(Failure::Authentication);

    // Act
    let response = app.get("/api/contact/test").await;

    // Assert
    assert_eq!(200, response.status().as_u16());
    let body = json_body(response).await;
    assert_eq!(body["success"], true);
    assert_eq!(body["message"], "Contact API is working!");
    assert_eq!(body["environment"], "development");
    assert!(body["timestamp"].is_string());
    assert!(app.sent_emails().is_empty());
}

#[tokio::test]
async fn liveness_probe_reports_the_production_environment() {
    // Arrange
    let app = TestApp::spawn_with(|config| {
        config.application.environment = Environment::Production;
    })
    .await;

    // Act
    let response = app.get("/api/contact/test").await;

    // Assert
    let body = json_body(response).await;
    assert_eq!(body["environment"], "production");
}
