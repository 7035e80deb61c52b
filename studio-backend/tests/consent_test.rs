// tests/consent_test.rs

mod common;

use axum::http::{Method, StatusCode};
use serde_json::json;

use common::requests::{self, TestRequest};

#[tokio::test]
async fn test_banner_shows_until_a_decision_is_stored() {
    let (app, _relay) = common::create_test_app();

    let response = requests::get(&app, "/api/consent").await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["data"]["show_banner"], true);
    assert!(response.body["data"].get("record").is_none());
}

#[tokio::test]
async fn test_saved_preferences_round_trip() {
    let (app, _relay) = common::create_test_app();

    let saved = requests::put_json(&app, "/api/consent", json!({ "functional": true })).await;
    assert_eq!(saved.status, StatusCode::OK);
    assert_eq!(saved.body["data"]["show_banner"], false);
    assert_eq!(saved.body["data"]["record"]["functional"], true);
    assert_eq!(saved.body["data"]["record"]["necessary"], true);
    assert!(saved.body["data"]["record"]["timestamp"].is_string());

    let pair = saved.cookie_pair("cookie_consent_given").unwrap();
    let replay = TestRequest::new(Method::GET, "/api/consent")
        .cookie(&pair)
        .send(&app)
        .await;
    assert_eq!(replay.body["data"]["show_banner"], false);
    assert_eq!(replay.body["data"]["record"]["functional"], true);
}

#[tokio::test]
async fn test_banner_buttons_store_their_decisions() {
    let (app, _relay) = common::create_test_app();

    let accepted = requests::post_json(&app, "/api/consent/accept-all", json!({})).await;
    assert_eq!(accepted.body["data"]["record"]["functional"], true);

    let rejected = requests::post_json(&app, "/api/consent/reject-all", json!({})).await;
    assert_eq!(rejected.body["data"]["record"]["functional"], false);
    assert_eq!(rejected.body["data"]["record"]["necessary"], true);
}

#[tokio::test]
async fn test_malformed_consent_cookie_reads_as_absent() {
    let (app, _relay) = common::create_test_app();

    for garbage in ["cookie_consent_given=oops", "cookie_consent_given={}"] {
        let response = TestRequest::new(Method::GET, "/api/consent")
            .cookie(garbage)
            .send(&app)
            .await;
        assert_eq!(response.status, StatusCode::OK);
        assert_eq!(
            response.body["data"]["show_banner"], true,
            "cookie {garbage:?} should read as absent"
        );
    }
}

#[tokio::test]
async fn test_reset_regates_the_banner_without_a_reload() {
    let (app, _relay) = common::create_test_app();

    let saved = requests::put_json(&app, "/api/consent", json!({ "functional": false })).await;
    let pair = saved.cookie_pair("cookie_consent_given").unwrap();

    let reset = TestRequest::new(Method::DELETE, "/api/consent")
        .cookie(&pair)
        .send(&app)
        .await;
    assert_eq!(reset.status, StatusCode::OK);
    assert_eq!(reset.body["data"]["show_banner"], true);
    let removal = reset
        .set_cookies
        .iter()
        .find(|cookie| cookie.starts_with("cookie_consent_given="))
        .unwrap();
    assert!(removal.contains("Max-Age=0"));

    let after = requests::delete(&app, "/api/consent").await;
    assert_eq!(after.body["data"]["show_banner"], true);
}
