use std::sync::Arc;

use axum::Router;
use axum::body::Body;
use axum::http::{Method, Request, StatusCode};
use serde_json::{Value, json};
use tower::ServiceExt;

use karmic_api::config::ApiConfig;
use karmic_api::state::AppState;
use karmic_core::session::MemorySessionStore;

fn test_app() -> Router {
    karmic_api::app(AppState {
        sessions: Arc::new(MemorySessionStore::new()),
        config: ApiConfig::default(),
    })
}

async fn send(app: &Router, method: Method, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    let builder = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(json) => builder
            .header("content-type", "application/json")
            .body(Body::from(json.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };

    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let value = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap_or(Value::Null)
    };
    (status, value)
}

fn answers() -> Value {
    json!({
        "emotional_responses": {
            "feeling": 4,
            "stress_response": 5,
            "physical_sensations": [2, 6],
            "ease": 4,
            "desires": 3
        },
        "physical_symptoms": {
            "trouble_sleeping": 4,
            "low_energy": 4,
            "headaches": 2,
            "chest_pain_breath": 1,
            "digestive_problems": 3
        }
    })
}

#[tokio::test]
async fn health_reports_ok() {
    let app = test_app();
    let (status, body) = send(&app, Method::GET, "/health", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "status": "ok" }));
}

#[tokio::test]
async fn instruments_are_listed_and_described() {
    let app = test_app();
    let (status, body) = send(&app, Method::GET, "/instruments", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body,
        json!([{ "id": "deq", "name": "DEQ" }, { "id": "sss", "name": "SSS" }])
    );

    let (status, body) = send(&app, Method::GET, "/instruments/sss", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["domains"][0]["subscales"].as_array().unwrap().len(), 5);

    let (status, body) = send(&app, Method::GET, "/instruments/phq9", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], "instrument not found: phq9");
    assert_eq!(body["kind"], "not_found");
}

#[tokio::test]
async fn validate_reports_bad_entries() {
    let app = test_app();
    let entries = json!([
        { "subscale_id": "feeling", "value": 2.0 },
        { "subscale_id": "feeling", "value": 7.0 }
    ]);
    let (status, body) = send(&app, Method::POST, "/instruments/deq/validate", Some(entries)).await;
    assert_eq!(status, StatusCode::OK);
    let errors = body.as_array().unwrap();
    assert_eq!(errors.len(), 1);
    assert_eq!(errors[0]["value"], 7.0);
}

#[tokio::test]
async fn validating_against_an_unknown_instrument_is_not_found() {
    let app = test_app();
    let entries = json!([{ "subscale_id": "feeling", "value": 2.0 }]);
    let (status, body) = send(&app, Method::POST, "/instruments/phq9/validate", Some(entries)).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["kind"], "not_found");
    assert_eq!(body["error"], "instrument not found: phq9");
}

#[tokio::test]
async fn deq_scoring_returns_scores_and_top_emotions() {
    let app = test_app();
    let responses = json!({
        "feeling": 1,
        "stress_response": 1,
        "physical_sensations": [],
        "ease": 1,
        "desires": 1
    });
    let (status, body) = send(&app, Method::POST, "/score/deq", Some(responses)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["scores"]["happiness"], 50);
    assert_eq!(body["scores"]["relaxation"], 58);

    let top = body["top_emotions"].as_array().unwrap();
    assert_eq!(top.len(), 3);
    assert_eq!(top[0]["emotion"], "relaxation");
    assert_eq!(top[0]["category"], "moderate");
}

#[tokio::test]
async fn out_of_range_answers_are_rejected() {
    let app = test_app();
    let responses = json!({
        "feeling": 6,
        "stress_response": 1,
        "physical_sensations": [],
        "ease": 1,
        "desires": 1
    });
    let (status, _) = send(&app, Method::POST, "/score/deq", Some(responses)).await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);

    let symptoms = json!({
        "trouble_sleeping": 0,
        "low_energy": 1,
        "headaches": 1,
        "chest_pain_breath": 1,
        "digestive_problems": 1
    });
    let (status, _) = send(&app, Method::POST, "/score/sss", Some(symptoms)).await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
}

#[tokio::test]
async fn sss_scoring_returns_burden_and_guidance() {
    let app = test_app();
    let symptoms = json!({
        "trouble_sleeping": 5,
        "low_energy": 5,
        "headaches": 5,
        "chest_pain_breath": 5,
        "digestive_problems": 5
    });
    let (status, body) = send(&app, Method::POST, "/score/sss", Some(symptoms)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["burden"]["total_score"], 25);
    assert_eq!(body["burden"]["category"], "very_high");
    assert_eq!(body["burden"]["flagged_symptoms"].as_array().unwrap().len(), 5);
    assert_eq!(body["recommendations"].as_array().unwrap().len(), 4);
    assert_eq!(body["breakdown"][0]["severity"], "severe");
}

#[tokio::test]
async fn body_map_lights_regions_and_suggests_symptoms() {
    let app = test_app();
    let (status, body) = send(&app, Method::POST, "/body-map", Some(json!({ "anger": 1.0 }))).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["regions"]["jaw"]["intensity"], 1.0);
    assert_eq!(body["regions"]["upper-back"]["intensity"], 0.0);
    assert_eq!(body["regions"]["upper-back"]["color"], "#E5E7EB");
    assert_eq!(body["symptoms"]["jaw_clenching"], true);
}

#[tokio::test]
async fn body_map_rejects_confidence_outside_unit_range() {
    let app = test_app();
    let (status, body) = send(&app, Method::POST, "/body-map", Some(json!({ "fear": 1.5 }))).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["error"].as_str().unwrap().contains("fear"));
}

#[tokio::test]
async fn session_lifecycle() {
    let app = test_app();
    let uri = "/sessions/user-1/assessment";

    let (status, body) = send(&app, Method::GET, uri, None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["has_completed"], false);
    assert_eq!(body["assessment"], Value::Null);

    let (status, body) = send(&app, Method::POST, uri, Some(answers())).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["assessment"]["physical_burden"]["total_score"], 14);
    assert_eq!(body["top_emotions"][0]["emotion"], "sadness");
    assert_eq!(body["burden_description"], "Moderate physical symptom burden");
    let id = body["assessment"]["id"].clone();

    let (_, body) = send(&app, Method::GET, uri, None).await;
    assert_eq!(body["has_completed"], true);
    assert_eq!(body["assessment"]["id"], id);

    let (status, body) = send(&app, Method::DELETE, uri, None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["has_completed"], false);

    let (_, body) = send(&app, Method::GET, uri, None).await;
    assert_eq!(body["assessment"], Value::Null);
}

#[tokio::test]
async fn skipping_stores_a_skipped_assessment() {
    let app = test_app();
    let (status, body) = send(&app, Method::POST, "/sessions/abc/assessment/skip", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["has_completed"], true);
    assert_eq!(body["assessment"]["skipped"], true);
    assert_eq!(body["assessment"]["emotion_scores"]["happiness"], 0);

    let (_, body) = send(&app, Method::GET, "/sessions/abc/assessment", None).await;
    assert_eq!(body["assessment"]["skipped"], true);
}

#[tokio::test]
async fn sessions_are_isolated_and_keys_checked() {
    let app = test_app();
    send(&app, Method::POST, "/sessions/a/assessment/skip", None).await;

    let (_, body) = send(&app, Method::GET, "/sessions/b/assessment", None).await;
    assert_eq!(body["has_completed"], false);

    let (status, body) = send(&app, Method::GET, "/sessions/bad%20key/assessment", None).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["kind"], "bad_request");
}
