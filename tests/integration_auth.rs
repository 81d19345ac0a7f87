mod common;

use common::{MockApi, Reply, SESSION_COOKIE};
use dormhub::modules::auth::{AdminLoginForm, AdminLoginScreen, LoginForm, LoginScreen};
use dormhub::navigation::Route;
use dormhub_core::RequestStatus;
use dormhub_models::SchoolId;
use serde_json::json;
use tokio_util::sync::CancellationToken;

#[tokio::test]
async fn test_student_login_success_navigates_to_dorms() {
    let api = MockApi::start().await;
    api.on(
        "POST",
        "/login",
        Reply::ok(json!({
            "_id": { "$oid": "u1" },
            "email": "alice@example.edu",
            "assigned_room": null
        }))
        .with_session_cookie(),
    );
    let client = api.client();

    let mut screen = LoginScreen::with_form(
        LoginForm::new("alice@example.edu", "secret"),
        CancellationToken::new(),
    );
    let outcome = screen.submit(&client).await;

    assert_eq!(outcome.navigate, Some(Route::Dorms));
    assert!(outcome.error().is_none());
    assert_eq!(screen.request_state().status(), RequestStatus::Succeeded);
    assert_eq!(
        api.last("POST", "/login").unwrap().body,
        Some(json!({ "email": "alice@example.edu", "password": "secret" }))
    );
    assert!(client.has_session());
}

#[tokio::test]
async fn test_login_body_shape_does_not_decide_success() {
    for body in [
        json!({
            "_id": { "$oid": "u1" },
            "email": "alice@example.edu",
            "assigned_room": 101
        }),
        json!({ "email": null }),
        json!({ "message": "Logged in", "user": { "email": "alice@example.edu" } }),
        json!("ok"),
    ] {
        let api = MockApi::start().await;
        api.on("POST", "/login", Reply::ok(body.clone()).with_session_cookie());
        let client = api.client();

        let mut screen = LoginScreen::with_form(
            LoginForm::new("alice@example.edu", "secret"),
            CancellationToken::new(),
        );
        let outcome = screen.submit(&client).await;

        assert_eq!(outcome.navigate, Some(Route::Dorms), "body {}", body);
        assert!(outcome.error().is_none(), "body {}", body);
        assert!(client.has_session());
    }
}

#[tokio::test]
async fn test_session_cookie_is_sent_on_later_requests() {
    let api = MockApi::start().await;
    api.on("POST", "/login", Reply::ok(json!({})).with_session_cookie());
    api.on("GET", "/dorms", Reply::ok(json!([])));
    let client = api.client();

    let mut screen = LoginScreen::with_form(
        LoginForm::new("alice@example.edu", "secret"),
        CancellationToken::new(),
    );
    screen.submit(&client).await;
    client.list_dorms().await.unwrap();

    let cookie = api.last("GET", "/dorms").unwrap().cookie.unwrap_or_default();
    assert!(cookie.contains(SESSION_COOKIE), "cookie header was {:?}", cookie);
}

#[tokio::test]
async fn test_login_failure_keeps_fields_and_shows_server_message() {
    let api = MockApi::start().await;
    api.on("POST", "/login", Reply::error(401, "Invalid credentials"));
    let client = api.client();

    let form = LoginForm::new("alice@example.edu", "wrong");
    let mut screen = LoginScreen::with_form(form.clone(), CancellationToken::new());
    let outcome = screen.submit(&client).await;

    assert!(outcome.navigate.is_none());
    assert_eq!(outcome.error(), Some("Invalid credentials"));
    assert_eq!(screen.form, form);
    assert!(matches!(
        screen.request_state().status(),
        RequestStatus::Failed(_)
    ));
    assert!(!client.has_session());
}

#[tokio::test]
async fn test_login_failure_without_message_uses_fallback() {
    let api = MockApi::start().await;
    api.on("POST", "/login", Reply::empty(500));
    let client = api.client();

    let mut screen = LoginScreen::with_form(
        LoginForm::new("alice@example.edu", "secret"),
        CancellationToken::new(),
    );
    let outcome = screen.submit(&client).await;

    assert_eq!(
        outcome.error(),
        Some("Login failed. Please check your credentials.")
    );
}

#[tokio::test]
async fn test_blank_credentials_send_no_request() {
    let api = MockApi::start().await;
    let client = api.client();

    let mut screen = LoginScreen::with_form(LoginForm::new("", ""), CancellationToken::new());
    let outcome = screen.submit(&client).await;

    assert!(outcome.navigate.is_none());
    assert_eq!(outcome.error(), Some("Email is required, Password is required"));
    assert!(api.requests().is_empty());
}

#[tokio::test]
async fn test_admin_login_carries_school_to_dashboard() {
    let api = MockApi::start().await;
    api.on(
        "POST",
        "/admin/login",
        Reply::ok(json!({
            "message": "Login successful",
            "school": { "_id": { "$oid": "s1" }, "name": "State University" }
        }))
        .with_session_cookie(),
    );
    let client = api.client();

    let mut screen = AdminLoginScreen::with_form(
        AdminLoginForm {
            email: "admin@example.edu".into(),
            password: "secret".into(),
            school_id: "s1".into(),
        },
        CancellationToken::new(),
    );
    let outcome = screen.submit(&client).await;

    assert_eq!(
        outcome.navigate,
        Some(Route::AdminDashboard {
            school_id: SchoolId::new("s1"),
            school_name: "State University".into(),
        })
    );
    assert_eq!(
        api.last("POST", "/admin/login").unwrap().body,
        Some(json!({
            "email": "admin@example.edu",
            "password": "secret",
            "school_id": "s1"
        }))
    );
}

#[tokio::test]
async fn test_admin_login_without_school_sends_no_request() {
    let api = MockApi::start().await;
    let client = api.client();

    let mut screen = AdminLoginScreen::with_form(
        AdminLoginForm {
            email: "admin@example.edu".into(),
            password: "secret".into(),
            school_id: String::new(),
        },
        CancellationToken::new(),
    );
    let outcome = screen.submit(&client).await;

    assert_eq!(outcome.error(), Some("School ID is required"));
    assert_eq!(api.count("POST", "/admin/login"), 0);
}

#[tokio::test]
async fn test_new_session_starts_without_cookie() {
    let api = MockApi::start().await;
    api.on("POST", "/login", Reply::ok(json!({})).with_session_cookie());
    let state = api.state();

    let mut screen = LoginScreen::with_form(
        LoginForm::new("alice@example.edu", "secret"),
        CancellationToken::new(),
    );
    screen.submit(&state.client).await;
    assert!(state.client.has_session());

    let fresh = state.new_session().unwrap();
    assert!(!fresh.client.has_session());
    assert_ne!(fresh.client.session().id(), state.client.session().id());
}
