use serde_json::json;
use smartcrop_core::AdvisoryApi;
use smartcrop_core::advisory::{
    ImageUpload, OtpRequest, OtpVerification, PassthroughPage, SchemeQuery,
};
use smartcrop_interaction::{ApiCall, HttpAdvisoryClient};
use wiremock::matchers::{body_json, body_string_contains, header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

async fn setup() -> (MockServer, HttpAdvisoryClient) {
    let server = MockServer::start().await;
    let client = HttpAdvisoryClient::new(server.uri());
    (server, client)
}

#[tokio::test]
async fn test_request_otp_posts_phone_and_reads_numeric_code() {
    let (server, client) = setup().await;

    Mock::given(method("POST"))
        .and(path("/auth/request-otp"))
        .and(header("content-type", "application/json"))
        .and(body_json(json!({ "phone": "9999999999" })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "message": "sent",
            "demo_otp": 123456
        })))
        .expect(1)
        .mount(&server)
        .await;

    let issued = client
        .request_otp(&OtpRequest::new("9999999999", ""))
        .await
        .unwrap();
    assert_eq!(issued.demo_otp.as_deref(), Some("123456"));
}

#[tokio::test]
async fn test_verify_otp_sends_language_and_accepts_alias() {
    let (server, client) = setup().await;

    Mock::given(method("POST"))
        .and(path("/auth/verify-otp"))
        .and(body_json(json!({
            "phone": "9999999999",
            "otp": "123456",
            "farmer_id": "F-7",
            "language": "pa"
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "token": "tok-1",
            "farmerId": "F-7"
        })))
        .expect(1)
        .mount(&server)
        .await;

    let login = client
        .verify_otp(&OtpVerification::new("9999999999", "123456", "F-7", "", "pa"))
        .await
        .unwrap();
    assert_eq!(login.token(), Some("tok-1"));
    assert_eq!(login.farmer_id(), Some("F-7"));
}

#[tokio::test]
async fn test_dashboard_passes_token_in_query() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .and(path("/dashboard"))
        .and(query_param("token", "tok 1&2"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "recommendations": [
                { "crop": "Wheat", "score": 0.82, "reason": "Good soil moisture" }
            ],
            "soil": {
                "ph": 6.5, "nitrogen": 40.0, "phosphorus": 22.0, "potassium": 180.0,
                "advice": "Add compost"
            },
            "weather": { "alerts": [ { "type": "rain", "message": "Heavy rain tomorrow" } ] },
            "notifications": [ { "message": "Subsidy window open" } ]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let snapshot = client.dashboard("tok 1&2").await.unwrap();
    assert_eq!(snapshot.recommendations.len(), 1);
    assert_eq!(snapshot.recommendations[0].score_percent(), 82);
    assert_eq!(snapshot.weather.alerts[0].kind, "rain");
    assert_eq!(snapshot.notifications[0].title, None);
}

#[tokio::test]
async fn test_calendar_unwraps_items() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .and(path("/calendar"))
        .and(query_param("token", "tok-1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "items": [
                { "crop": "Rice", "phase": "Sowing", "date": "2025-06-15" },
                { "crop": "Rice", "phase": "Harvest", "date": "2025-10-01", "note": "Dry first" }
            ]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let items = client.calendar("tok-1").await.unwrap();
    assert_eq!(items.len(), 2);
    assert_eq!(items[1].note(), Some("Dry first"));
}

#[tokio::test]
async fn test_detect_disease_sends_multipart_file_and_token() {
    let (server, client) = setup().await;

    Mock::given(method("POST"))
        .and(path("/disease-detect"))
        .and(body_string_contains("name=\"file\""))
        .and(body_string_contains("filename=\"leaf.jpg\""))
        .and(body_string_contains("image/jpeg"))
        .and(body_string_contains("leaf-pixels"))
        .and(body_string_contains("name=\"token\""))
        .and(body_string_contains("tok-1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "diagnosis": "Leaf blight",
            "treatment": "Copper fungicide"
        })))
        .expect(1)
        .mount(&server)
        .await;

    let image = ImageUpload::new("leaf.jpg", "image/jpeg", b"leaf-pixels".to_vec());
    let diagnosis = client.detect_disease(&image, "tok-1").await.unwrap();
    assert_eq!(diagnosis.diagnosis, "Leaf blight");
    assert_eq!(diagnosis.treatment, "Copper fungicide");
}

#[tokio::test]
async fn test_search_schemes_posts_state_and_crop() {
    let (server, client) = setup().await;

    Mock::given(method("POST"))
        .and(path("/schemes"))
        .and(body_json(json!({ "state": "Punjab", "crop": "Wheat" })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "schemes": [
                { "name": "PM-KISAN", "description": "Income support", "benefit": "6000/yr" }
            ]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let schemes = client
        .search_schemes(&SchemeQuery::new("Punjab", "Wheat"))
        .await
        .unwrap();
    assert_eq!(schemes.len(), 1);
    assert_eq!(schemes[0].name, "PM-KISAN");
    assert_eq!(schemes[0].link, "");
}

#[tokio::test]
async fn test_passthrough_post_defaults_to_empty_object() {
    let (server, client) = setup().await;

    Mock::given(method("POST"))
        .and(path("/irrigation-plan"))
        .and(body_json(json!({})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "plan": ["Day 1: 20mm"] })))
        .expect(1)
        .mount(&server)
        .await;

    Mock::given(method("POST"))
        .and(path("/soil-analysis"))
        .and(body_json(json!({ "ph": 6.2 })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "advice": "Lime" })))
        .expect(1)
        .mount(&server)
        .await;

    let plan = client
        .passthrough(PassthroughPage::IrrigationPlan, None, Some("ignored"))
        .await
        .unwrap();
    assert_eq!(plan, json!({ "plan": ["Day 1: 20mm"] }));

    let soil = client
        .passthrough(PassthroughPage::SoilAnalysis, Some(json!({ "ph": 6.2 })), None)
        .await
        .unwrap();
    assert_eq!(soil, json!({ "advice": "Lime" }));
}

#[tokio::test]
async fn test_passthrough_get_attaches_token_only_when_present() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .and(path("/market-updates"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "wheat": 2275 })))
        .expect(2)
        .mount(&server)
        .await;

    client
        .passthrough(PassthroughPage::MarketUpdates, None, None)
        .await
        .unwrap();
    client
        .passthrough(PassthroughPage::MarketUpdates, None, Some("tok-1"))
        .await
        .unwrap();

    let requests = server.received_requests().await.unwrap();
    assert_eq!(requests[0].url.query(), None);
    assert_eq!(requests[1].url.query(), Some("token=tok-1"));
    assert!(requests.iter().all(|r| r.body.is_empty()));
}

#[tokio::test]
async fn test_chat_returns_reply_text() {
    let (server, client) = setup().await;

    Mock::given(method("POST"))
        .and(path("/chat"))
        .and(body_json(json!({ "text": "When to sow wheat?" })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "reply": "November" })))
        .expect(1)
        .mount(&server)
        .await;

    let reply = client.chat("When to sow wheat?").await.unwrap();
    assert_eq!(reply, "November");
}

#[tokio::test]
async fn test_error_status_body_is_still_parsed() {
    let (server, client) = setup().await;

    Mock::given(method("POST"))
        .and(path("/chat"))
        .respond_with(ResponseTemplate::new(500).set_body_json(json!({ "reply": "busy" })))
        .mount(&server)
        .await;

    assert_eq!(client.chat("hello").await.unwrap(), "busy");
}

#[tokio::test]
async fn test_non_json_body_is_malformed() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .and(path("/market-updates"))
        .respond_with(ResponseTemplate::new(502).set_body_string("<html>Bad Gateway</html>"))
        .mount(&server)
        .await;

    let err = client
        .passthrough(PassthroughPage::MarketUpdates, None, None)
        .await
        .unwrap_err();
    assert!(err.is_malformed());
    assert!(err.is_remote());
}

#[tokio::test]
async fn test_missing_field_is_malformed() {
    let (server, client) = setup().await;

    Mock::given(method("POST"))
        .and(path("/chat"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "answer": "wrong key" })))
        .mount(&server)
        .await;

    let err = client.chat("hello").await.unwrap_err();
    assert!(err.is_malformed());
}

#[tokio::test]
async fn test_unreachable_backend_is_network_failure() {
    let server = MockServer::start().await;
    let uri = server.uri();
    drop(server);

    let client = HttpAdvisoryClient::new(uri);
    let err = client.chat("hello").await.unwrap_err();
    assert!(err.is_network());
}

#[tokio::test]
async fn test_generic_call_returns_raw_json() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .and(path("/dashboard"))
        .and(query_param("token", "tok-1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "anything": [1, 2] })))
        .expect(1)
        .mount(&server)
        .await;

    let value = client
        .call(ApiCall::get("/dashboard").query("token", "tok-1"))
        .await
        .unwrap();
    assert_eq!(value["anything"], json!([1, 2]));
}
