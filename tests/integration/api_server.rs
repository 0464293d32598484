//! Integration tests for the API Server
//!
//! Tests HTTP endpoints, request validation, and analysis logic.

#[path = "api_server/test_utils.rs"]
mod test_utils;

use serde_json::{json, Value};

use test_utils::{falling_candles, rising_candles, TestApiServer};

#[tokio::test]
async fn health_endpoint_reports_healthy_status() {
    let app = TestApiServer::new().await;
    let response = app.server.get("/health").await;
    assert_eq!(response.status_code(), 200);

    let body: Value = response.json();
    assert_eq!(body["status"], "healthy");
    assert!(body["uptime_seconds"].as_u64().is_some());
    assert_eq!(body["service"], "binarix-analysis-engine");
}

#[tokio::test]
async fn metrics_endpoint_exposes_prometheus_metrics() {
    let app = TestApiServer::new().await;
    let response = app.server.get("/metrics").await;
    assert_eq!(response.status_code(), 200);

    let body = response.text();
    assert!(
        body.contains("http_requests_total"),
        "Expected http_requests_total metric"
    );
    assert!(
        body.contains("http_request_duration_seconds"),
        "Expected http_request_duration_seconds metric"
    );
    assert!(
        body.contains("http_requests_in_flight"),
        "Expected http_requests_in_flight metric"
    );
}

#[tokio::test]
async fn root_lists_available_endpoints() {
    let app = TestApiServer::new().await;
    let response = app.server.get("/").await;
    assert_eq!(response.status_code(), 200);

    let body: Value = response.json();
    assert_eq!(body["service"], "binarix");
    assert!(body["version"].as_str().is_some());
    assert!(body["endpoints"]["/analyze"].as_str().is_some());
    assert!(body["endpoints"]["/predict"].as_str().is_some());
}

#[tokio::test]
async fn analyze_returns_requested_indicators() {
    let app = TestApiServer::new().await;
    let response = app
        .server
        .post("/analyze")
        .json(&json!({
            "ohlc_data": rising_candles(60),
            "indicators": [
                {"name": "rsi", "params": [14]},
                {"name": "sma", "params": [20]},
            ],
        }))
        .await;
    assert_eq!(response.status_code(), 200);

    let body: Value = response.json();
    assert_eq!(body["status"], "success");
    assert_eq!(body["data_points"], 60);
    assert_eq!(body["requested_indicators"], json!(["rsi", "sma"]));

    assert!(body["data"]["rsi"]["rsi"].as_f64().is_some());
    assert!(body["data"]["sma"]["sma"].as_f64().is_some());

    // Patterns are included unless the request opts out
    assert!(body["data"]["candlestick_patterns"]["signals"].is_object());
    assert_eq!(body["data"]["market_info"]["current_price"], 160.0);
}

#[tokio::test]
async fn analyze_can_skip_patterns() {
    let app = TestApiServer::new().await;
    let response = app
        .server
        .post("/analyze")
        .json(&json!({
            "ohlc_data": rising_candles(40),
            "indicators": [{"name": "atr"}],
            "include_patterns": false,
        }))
        .await;
    assert_eq!(response.status_code(), 200);

    let body: Value = response.json();
    assert!(body["data"]["candlestick_patterns"].is_null());
    assert!(body["data"]["atr"]["atr"].as_f64().is_some());
}

#[tokio::test]
async fn analyze_reports_per_indicator_failures_inline() {
    let app = TestApiServer::new().await;
    let response = app
        .server
        .post("/analyze")
        .json(&json!({
            "ohlc_data": rising_candles(40),
            "indicators": [
                {"name": "bb"},
                {"name": "wavetrend"},
            ],
        }))
        .await;
    assert_eq!(response.status_code(), 200);

    let body: Value = response.json();
    // Results are keyed by the requested name, aliases included
    assert!(body["data"]["bb"]["bb_upper"].as_f64().is_some());
    assert_eq!(
        body["data"]["wavetrend"]["error"],
        "unsupported indicator: wavetrend"
    );
}

#[tokio::test]
async fn analyze_reports_insufficient_data_per_indicator() {
    let app = TestApiServer::new().await;
    let response = app
        .server
        .post("/analyze")
        .json(&json!({
            "ohlc_data": rising_candles(5),
            "indicators": [{"name": "atr"}],
        }))
        .await;
    assert_eq!(response.status_code(), 200);

    let body: Value = response.json();
    assert_eq!(
        body["data"]["atr"]["error"],
        "atr needs at least 15 candles, got 5"
    );
}

#[tokio::test]
async fn analyze_rejects_empty_indicator_list() {
    let app = TestApiServer::new().await;
    let response = app
        .server
        .post("/analyze")
        .json(&json!({
            "ohlc_data": rising_candles(40),
            "indicators": [],
        }))
        .await;
    assert_eq!(response.status_code(), 400);

    let body: Value = response.json();
    assert_eq!(body["error"], "at least one indicator must be requested");
    assert_eq!(body["status"], 400);
}

#[tokio::test]
async fn analyze_rejects_malformed_candles() {
    let app = TestApiServer::new().await;
    let response = app
        .server
        .post("/analyze")
        .json(&json!({
            "ohlc_data": [
                {"time": "2024-03-01 09:00:00", "open": "oops", "high": 2, "low": 1, "close": 1.5},
            ],
            "indicators": [{"name": "rsi"}],
        }))
        .await;
    assert_eq!(response.status_code(), 400);

    let body: Value = response.json();
    let message = body["error"].as_str().unwrap();
    assert!(message.contains("invalid numeric value"), "got {}", message);
}

#[tokio::test]
async fn predict_returns_call_for_steady_rise() {
    let app = TestApiServer::new().await;
    let response = app
        .server
        .post("/predict")
        .json(&json!({"ohlc_data": rising_candles(30)}))
        .await;
    assert_eq!(response.status_code(), 200);

    let body: Value = response.json();
    assert_eq!(body["status"], "success");

    let prediction = &body["prediction"];
    assert_eq!(prediction["direction"], "call");
    let confidence = prediction["confidence"].as_f64().unwrap();
    assert!(confidence > 0.6 && confidence <= 0.95, "got {}", confidence);
    assert_eq!(prediction["timeframe_minutes"], 5);
    assert!(prediction["signal_breakdown"]["total_weight"].as_f64().unwrap() > 0.0);
    assert_eq!(
        prediction["entry_suggestion"]["entry_timing"],
        "wait_for_confirmation"
    );

    assert_eq!(body["request_info"]["timeframe_minutes"], 5);
    assert_eq!(body["request_info"]["decision_threshold"], 0.6);
    assert_eq!(body["request_info"]["data_points"], 30);
    assert_eq!(body["request_info"]["current_price"], 130.0);
}

#[tokio::test]
async fn predict_returns_put_for_steady_fall() {
    let app = TestApiServer::new().await;
    let response = app
        .server
        .post("/predict")
        .json(&json!({"ohlc_data": falling_candles(30), "timeframe_minutes": 15}))
        .await;
    assert_eq!(response.status_code(), 200);

    let body: Value = response.json();
    assert_eq!(body["prediction"]["direction"], "put");
    assert_eq!(body["prediction"]["timeframe_minutes"], 15);
    assert_eq!(body["request_info"]["timeframe_minutes"], 15);
}

#[tokio::test]
async fn predict_rejects_short_series() {
    let app = TestApiServer::new().await;
    let response = app
        .server
        .post("/predict")
        .json(&json!({"ohlc_data": rising_candles(29)}))
        .await;
    assert_eq!(response.status_code(), 400);

    let body: Value = response.json();
    assert_eq!(
        body["error"],
        "insufficient data: at least 30 candles required, got 29"
    );
    assert_eq!(body["status"], 400);
}

#[tokio::test]
async fn predict_rejects_out_of_range_threshold() {
    let app = TestApiServer::new().await;
    let response = app
        .server
        .post("/predict")
        .json(&json!({"ohlc_data": rising_candles(30), "confidence_threshold": 0.3}))
        .await;
    assert_eq!(response.status_code(), 400);

    let body: Value = response.json();
    let message = body["error"].as_str().unwrap();
    assert!(
        message.contains("confidence_threshold must be between 0.5 and 0.95"),
        "got {}",
        message
    );
}

#[tokio::test]
async fn predict_honors_custom_threshold() {
    let app = TestApiServer::new().await;
    let response = app
        .server
        .post("/predict")
        .json(&json!({"ohlc_data": rising_candles(30), "confidence_threshold": 0.75}))
        .await;
    assert_eq!(response.status_code(), 200);

    let body: Value = response.json();
    // The same series that clears 0.6 stays neutral against 0.75
    assert_eq!(body["prediction"]["direction"], "neutral");
    assert_eq!(body["request_info"]["decision_threshold"], 0.75);
}

#[tokio::test]
async fn predict_counts_directional_metrics() {
    let app = TestApiServer::new().await;
    let _ = app
        .server
        .post("/predict")
        .json(&json!({"ohlc_data": rising_candles(30)}))
        .await;

    let metrics = app.server.get("/metrics").await.text();
    assert!(
        metrics.contains("predictions_total") && metrics.contains("direction=\"call\""),
        "expected a call-labelled prediction counter"
    );
}

#[tokio::test]
async fn indicators_list_covers_all_categories() {
    let app = TestApiServer::new().await;
    let response = app.server.get("/indicators/list").await;
    assert_eq!(response.status_code(), 200);

    let body: Value = response.json();
    assert_eq!(body["status"], "success");
    assert_eq!(body["total_indicators"], 14);
    assert_eq!(body["categories"].as_array().unwrap().len(), 5);

    let rsi = &body["indicators"]["momentum"]["rsi"];
    assert_eq!(rsi["example"]["name"], "rsi");
    assert_eq!(rsi["example"]["params"], json!([14.0]));
}

#[tokio::test]
async fn patterns_list_groups_by_bias() {
    let app = TestApiServer::new().await;
    let response = app.server.get("/patterns/list").await;
    assert_eq!(response.status_code(), 200);

    let body: Value = response.json();
    assert_eq!(body["total_patterns"], 22);
    assert_eq!(body["categories"], json!(["bullish", "bearish", "neutral"]));

    let patterns = &body["patterns"];
    assert_eq!(patterns["bullish"].as_object().unwrap().len(), 9);
    assert_eq!(patterns["bearish"].as_object().unwrap().len(), 9);
    assert_eq!(patterns["neutral"].as_object().unwrap().len(), 4);
    assert!(patterns["bullish"]["hammer"].as_str().is_some());
}

#[tokio::test]
async fn api_server_is_stateless() {
    let app = TestApiServer::new().await;

    let response1 = app.server.get("/health").await;
    let response2 = app.server.get("/health").await;

    assert_eq!(response1.status_code(), 200);
    assert_eq!(response2.status_code(), 200);

    let body1: Value = response1.json();
    let body2: Value = response2.json();
    assert_eq!(body1["status"], "healthy");
    assert_eq!(body2["status"], "healthy");
}
