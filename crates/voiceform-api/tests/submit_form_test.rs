//! Form submission and auxiliary endpoint integration tests.
//!
//! Run with: `cargo test -p voiceform-api --test submit_form_test`

mod helpers;

use helpers::setup_test_app;
use serde_json::{json, Value};

fn patient_intake() -> Value {
    json!({
        "cancerType": "Type A",
        "condition": "Stable",
        "reason": "Follow-up",
        "fullName": "Ada Lovelace",
        "phone": "555-0100",
        "email": "ada@example.com",
        "formName": "patient-intake",
    })
}

#[tokio::test]
async fn relays_form_submission_to_the_submitted_address() {
    let app = setup_test_app().await;

    let response = app
        .server
        .post("/api/submit-form")
        .json(&patient_intake())
        .await;

    assert_eq!(response.status_code(), 201);
    let body: Value = response.json();
    assert_eq!(body["message"], "Form submitted successfully and email sent");
    assert_eq!(body["formData"]["fullName"], "Ada Lovelace");
    assert_eq!(body["formData"]["formName"], "patient-intake");

    let sent = app.mailer.sent_messages();
    assert_eq!(sent.len(), 1);
    assert_eq!(sent[0].to, "ada@example.com");
    assert_eq!(sent[0].subject, "Form Response");
    assert!(sent[0]
        .html_body
        .contains("<h2>Patient Intake Form Submission Details</h2>"));
    assert!(sent[0].attachments.is_empty());
}

#[tokio::test]
async fn accepts_urlencoded_bodies() {
    let app = setup_test_app().await;

    let response = app
        .server
        .post("/api/submit-form")
        .form(&[
            ("email", "ada@example.com"),
            ("formName", "second-opinion-request"),
            ("reason", "Need another look"),
        ])
        .await;

    assert_eq!(response.status_code(), 201);

    let sent = app.mailer.sent_messages();
    assert_eq!(sent.len(), 1);
    assert!(sent[0]
        .html_body
        .contains("<h2>Second Opinion Request Form Submission Details</h2>"));
}

#[tokio::test]
async fn missing_form_name_is_rejected_without_dispatch() {
    let app = setup_test_app().await;

    let mut submission = patient_intake();
    submission.as_object_mut().unwrap().remove("formName");

    let response = app.server.post("/api/submit-form").json(&submission).await;

    assert_eq!(response.status_code(), 400);
    let body: Value = response.json();
    assert_eq!(body["message"], "Missing required field: formName");
    assert!(app.mailer.sent_messages().is_empty());
}

#[tokio::test]
async fn missing_email_is_rejected_without_dispatch() {
    let app = setup_test_app().await;

    let mut submission = patient_intake();
    submission.as_object_mut().unwrap().remove("email");

    let response = app.server.post("/api/submit-form").json(&submission).await;

    assert_eq!(response.status_code(), 400);
    let body: Value = response.json();
    assert_eq!(body["message"], "Missing required field: email");
    assert!(app.mailer.sent_messages().is_empty());
}

#[tokio::test]
async fn resubmission_dispatches_again() {
    let app = setup_test_app().await;

    for _ in 0..2 {
        let response = app
            .server
            .post("/api/submit-form")
            .json(&patient_intake())
            .await;
        assert_eq!(response.status_code(), 201);
    }

    // No deduplication: identical submissions each get their own email.
    assert_eq!(app.mailer.sent_messages().len(), 2);
}

#[tokio::test]
async fn delivery_failure_is_a_500() {
    let app = setup_test_app().await;
    app.mailer.fail_next_sends();

    let response = app
        .server
        .post("/api/submit-form")
        .json(&patient_intake())
        .await;

    assert_eq!(response.status_code(), 500);
    let body: Value = response.json();
    assert_eq!(body["message"], "Internal server error");
}

#[tokio::test]
async fn formdata_stub_always_responds_not_found() {
    let app = setup_test_app().await;

    let response = app.server.get("/api/formdata").await;
    assert_eq!(response.status_code(), 404);
    let body: Value = response.json();
    assert_eq!(body["message"], "No form data found");

    // Query parameters make no difference.
    let response = app
        .server
        .get("/api/formdata")
        .add_query_param("id", "42")
        .await;
    assert_eq!(response.status_code(), 404);
}

#[tokio::test]
async fn welcome_route_reports_disconnected_database() {
    let app = setup_test_app().await;

    let response = app.server.get("/").await;
    assert_eq!(response.status_code(), 200);
    let body: Value = response.json();
    assert_eq!(body["message"], "Welcome to the API");
    assert_eq!(body["status"], "Server is running");
    assert_eq!(body["database"], "Disconnected");
}

#[tokio::test]
async fn health_check_probes_storage() {
    let app = setup_test_app().await;

    let response = app.server.get("/health").await;
    assert_eq!(response.status_code(), 200);
    let body: Value = response.json();
    assert_eq!(body["status"], "healthy");
    assert_eq!(body["storage"], "healthy");
}
