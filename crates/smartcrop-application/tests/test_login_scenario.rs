use std::sync::Arc;

use serde_json::json;
use smartcrop_application::{AdvisoryApp, LoginOutcome};
use smartcrop_core::state::MemoryPreferenceStore;
use smartcrop_core::{LocaleStore, Route, SessionStore};
use smartcrop_interaction::HttpAdvisoryClient;
use wiremock::matchers::{body_json, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

#[tokio::test]
async fn test_phone_otp_login_then_dashboard() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/auth/request-otp"))
        .and(body_json(json!({ "phone": "9999999999" })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "demo_otp": "482913" })))
        .expect(1)
        .mount(&server)
        .await;

    Mock::given(method("POST"))
        .and(path("/auth/verify-otp"))
        .and(body_json(json!({
            "phone": "9999999999",
            "otp": "482913",
            "language": "en"
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "token": "session-token-1",
            "farmer_id": "FARMER-001"
        })))
        .expect(1)
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/dashboard"))
        .and(query_param("token", "session-token-1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "recommendations": [{ "crop": "Maize", "score": 0.7, "reason": "" }],
            "soil": { "ph": 7.0, "nitrogen": 30, "phosphorus": 12, "potassium": 150 },
            "weather": { "alerts": [] },
            "notifications": []
        })))
        .expect(1)
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/calendar"))
        .and(query_param("token", "session-token-1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "items": [] })))
        .expect(1)
        .mount(&server)
        .await;

    let storage = Arc::new(MemoryPreferenceStore::new());
    let sessions = Arc::new(SessionStore::restore(storage.clone()).await.unwrap());
    let locale = Arc::new(LocaleStore::restore(storage).await.unwrap());
    let app = AdvisoryApp::new(
        sessions.clone(),
        locale,
        Arc::new(HttpAdvisoryClient::new(server.uri())),
    );

    let view = app.navigate("/login").await;
    let login = view.as_login().unwrap();

    let demo_otp = match login.request_otp("", "9999999999").await.unwrap() {
        LoginOutcome::OtpSent { demo_otp } => demo_otp.unwrap(),
        other => panic!("unexpected outcome: {other:?}"),
    };
    assert_eq!(demo_otp, "482913");

    let outcome = login.verify_otp(&demo_otp, "").await.unwrap();
    let LoginOutcome::Authenticated(session) = outcome else {
        panic!("login was not accepted");
    };
    assert!(!session.token.is_empty());
    assert!(sessions.is_authenticated().await);

    let view = app.navigate(Route::Dashboard.path()).await;
    view.mount().await;
    assert!(view.render().await.contains("Maize (Score: 70%)"));
}
