//! HTTP surface tests via `tower::ServiceExt::oneshot`.

mod support;

use axum::http::StatusCode;
use serde_json::json;

use support::{TestHarness, request_json};

#[tokio::test]
async fn start_stop_round_trip() {
    let h = TestHarness::new();

    let (status, body) = request_json(
        h.router(),
        "POST",
        "/timer/start",
        Some(json!({"cardId": "card-a", "memberId": "m1", "memberName": "Alice"})),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["stoppedPrevious"], false);

    let (status, body) = request_json(
        h.router(),
        "POST",
        "/timer/stop",
        Some(json!({"cardId": "card-a", "memberId": "m1"})),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert!(body["newTotalSeconds"].as_i64().unwrap() >= 0);
}

#[tokio::test]
async fn stop_without_running_timer_is_bad_request() {
    let h = TestHarness::new();

    let (status, body) = request_json(
        h.router(),
        "POST",
        "/timer/stop",
        Some(json!({"cardId": "card-a", "memberId": "m1"})),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "VALIDATION_ERROR");
}

#[tokio::test]
async fn start_rejects_blank_ids() {
    let h = TestHarness::new();

    let (status, _) = request_json(
        h.router(),
        "POST",
        "/timer/start",
        Some(json!({"cardId": "", "memberId": "m1"})),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn switching_cards_reports_stopped_previous() {
    let h = TestHarness::new();

    request_json(
        h.router(),
        "POST",
        "/timer/start",
        Some(json!({"cardId": "card-a", "memberId": "m1", "memberName": "Alice"})),
    )
    .await;

    let (status, body) = request_json(
        h.router(),
        "POST",
        "/timer/start",
        Some(json!({"cardId": "card-b", "memberId": "m1", "memberName": "Alice"})),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["stoppedPrevious"], true);
}

#[tokio::test]
async fn bulk_status_returns_camel_case_map() {
    let h = TestHarness::new();

    request_json(
        h.router(),
        "POST",
        "/timer/start",
        Some(json!({"cardId": "card-a", "memberId": "m1", "memberName": "Alice"})),
    )
    .await;

    let (status, body) = request_json(
        h.router(),
        "GET",
        "/timer/status/bulk?memberId=m1&cardIds=card-a,card-b",
        None,
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["card-a"]["isRunningHere"], true);
    assert_eq!(body["card-a"]["activeTimerData"]["memberName"], "Alice");
    assert_eq!(body["card-b"]["isRunningHere"], false);
    assert_eq!(body["card-b"]["isOtherTimerRunning"], true);
    assert_eq!(body["card-b"]["totalPastSeconds"], 0);
}

#[tokio::test]
async fn bulk_status_with_no_cards_is_empty_object() {
    let h = TestHarness::new();

    let (status, body) = request_json(
        h.router(),
        "GET",
        "/timer/status/bulk?memberId=m1&cardIds=",
        None,
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({}));
}

#[tokio::test]
async fn card_logs_include_limit_string() {
    let h = TestHarness::new();
    h.settings.set_limit("card-a", "01:30:00");

    request_json(
        h.router(),
        "POST",
        "/timer/start",
        Some(json!({"cardId": "card-a", "memberId": "m1", "memberName": "Alice"})),
    )
    .await;
    request_json(
        h.router(),
        "POST",
        "/timer/stop",
        Some(json!({"cardId": "card-a", "memberId": "m1"})),
    )
    .await;

    let (status, body) = request_json(h.router(), "GET", "/timer/logs/card-a", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["timeLimit"], "01:30:00");
    assert_eq!(body["logs"].as_array().unwrap().len(), 1);
    assert_eq!(body["logs"][0]["action"], "manual_stop");
    assert_eq!(body["logs"][0]["memberName"], "Alice");
}

#[tokio::test]
async fn log_correction_round_trip() {
    let h = TestHarness::new();

    request_json(
        h.router(),
        "POST",
        "/timer/start",
        Some(json!({"cardId": "card-a", "memberId": "m1", "memberName": "Alice"})),
    )
    .await;
    request_json(
        h.router(),
        "POST",
        "/timer/stop",
        Some(json!({"cardId": "card-a", "memberId": "m1"})),
    )
    .await;
    let log_id = h.logs.all()[0].id;

    let (status, body) = request_json(
        h.router(),
        "PUT",
        &format!("/timer/logs/{log_id}"),
        Some(json!({"duration": 900})),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["log"]["duration"], 900);

    let (status, _) =
        request_json(h.router(), "DELETE", &format!("/timer/logs/{log_id}"), None).await;
    assert_eq!(status, StatusCode::OK);
    assert!(h.logs.all().is_empty());
}

#[tokio::test]
async fn unknown_log_id_is_not_found() {
    let h = TestHarness::new();
    let missing = uuid::Uuid::new_v4();

    let (status, body) = request_json(
        h.router(),
        "PUT",
        &format!("/timer/logs/{missing}"),
        Some(json!({"duration": 10})),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], "NOT_FOUND");

    let (status, _) =
        request_json(h.router(), "DELETE", &format!("/timer/logs/{missing}"), None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn negative_duration_correction_is_rejected() {
    let h = TestHarness::new();
    let missing = uuid::Uuid::new_v4();

    let (status, _) = request_json(
        h.router(),
        "PUT",
        &format!("/timer/logs/{missing}"),
        Some(json!({"duration": -5})),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn settings_upsert_is_idempotent() {
    let h = TestHarness::new();

    for limit in ["01:00:00", "02:00:00"] {
        let (status, _) = request_json(
            h.router(),
            "POST",
            "/timer/settings",
            Some(json!({"cardId": "card-a", "timeLimit": limit})),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
    }

    assert_eq!(h.settings.len(), 1);
    assert_eq!(
        h.settings.get("card-a").unwrap().time_limit.as_deref(),
        Some("02:00:00")
    );

    // A blank limit clears the setting.
    let (status, _) = request_json(
        h.router(),
        "POST",
        "/timer/settings",
        Some(json!({"cardId": "card-a", "timeLimit": ""})),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(h.settings.get("card-a").unwrap().time_limit, None);
}

#[tokio::test]
async fn health_reports_ok() {
    let h = TestHarness::new();

    let (status, body) = request_json(h.router(), "GET", "/health", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "ok");
}
