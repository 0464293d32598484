//! HTTP endpoint server using Axum

use axum::{
    extract::{Request, State},
    http::StatusCode,
    middleware::Next,
    response::{Json, Response},
    routing::{get, post},
    Router,
};
use serde::Deserialize;
use serde_json::{json, Map, Value};
use std::sync::Arc;
use std::time::Instant;
use tokio::sync::RwLock;
use tower::ServiceBuilder;
use tower_http::{
    cors::CorsLayer,
    trace::{DefaultMakeSpan, DefaultOnRequest, DefaultOnResponse, TraceLayer},
};
use tracing::{info, Level};

use crate::error::{ApiError, ApiResult};
use crate::indicators::IndicatorKind;
use crate::metrics::Metrics;
use crate::models::candle::{parse_series, MarketInfo, RawCandle};
use crate::models::indicators::IndicatorRequest;
use crate::models::pattern::PatternDirection;
use crate::models::prediction::PredictionDirection;
use crate::patterns::PatternKind;
use crate::signals::{PredictOptions, PredictionEngine, DEFAULT_TIMEFRAME_MINUTES, MIN_CANDLES};

#[derive(Clone)]
pub struct AppState {
    pub health: Arc<RwLock<HealthStatus>>,
    pub metrics: Arc<Metrics>,
    pub start_time: Arc<Instant>,
}

#[derive(Clone, Debug)]
pub struct HealthStatus {
    pub status: String,
}

impl Default for HealthStatus {
    fn default() -> Self {
        Self {
            status: "healthy".to_string(),
        }
    }
}

pub async fn health_check(State(state): State<AppState>) -> Result<Json<Value>, StatusCode> {
    let health = state.health.read().await;
    let uptime_seconds = state.start_time.elapsed().as_secs();
    Ok(Json(json!({
        "status": health.status,
        "uptime_seconds": uptime_seconds,
        "service": "binarix-analysis-engine"
    })))
}

pub async fn metrics_handler(State(state): State<AppState>) -> Result<String, StatusCode> {
    state
        .metrics
        .export()
        .map_err(|_| StatusCode::INTERNAL_SERVER_ERROR)
}

/// Middleware to track HTTP request metrics
async fn metrics_middleware(
    State(state): State<AppState>,
    request: Request,
    next: Next,
) -> Response {
    let start = Instant::now();
    let method = request.method().clone();
    let path = request.uri().path().to_string();

    state.metrics.http_requests_in_flight.inc();

    let response = next.run(request).await;
    let status = response.status();
    let duration = start.elapsed();

    state.metrics.http_requests_in_flight.dec();
    state.metrics.http_requests_total.inc();
    state
        .metrics
        .http_request_duration_seconds
        .observe(duration.as_secs_f64());

    // Log if error status
    if status.is_server_error() {
        tracing::error!(
            method = %method,
            path = %path,
            status = %status,
            duration_ms = duration.as_millis(),
            "HTTP request error"
        );
    }

    response
}

#[derive(Debug, Deserialize)]
struct AnalyzeRequest {
    ohlc_data: Vec<RawCandle>,
    indicators: Vec<IndicatorRequest>,
    #[serde(default = "default_include_patterns")]
    include_patterns: bool,
}

fn default_include_patterns() -> bool {
    true
}

#[derive(Debug, Deserialize)]
struct PredictRequest {
    ohlc_data: Vec<RawCandle>,
    #[serde(default = "default_timeframe_minutes")]
    timeframe_minutes: u32,
    confidence_threshold: Option<f64>,
}

fn default_timeframe_minutes() -> u32 {
    DEFAULT_TIMEFRAME_MINUTES
}

/// Compute the requested indicators over one candle series.
///
/// Per-indicator failures land inside the response body so one bad request
/// entry does not sink the rest of the batch.
async fn analyze_handler(
    State(state): State<AppState>,
    Json(request): Json<AnalyzeRequest>,
) -> ApiResult<Json<Value>> {
    if request.indicators.is_empty() {
        return Err(ApiError::Validation(
            "at least one indicator must be requested".to_string(),
        ));
    }

    let candles = parse_series(&request.ohlc_data)?;
    let report =
        PredictionEngine::analyze(&candles, &request.indicators, request.include_patterns);
    state.metrics.analyses_total.inc();

    let mut data = Map::new();
    for (name, outcome) in &report.results {
        data.insert(name.clone(), to_value(outcome)?);
    }
    if let Some(patterns) = &report.patterns {
        data.insert("candlestick_patterns".to_string(), to_value(patterns)?);
    }
    if let Some(market_info) = MarketInfo::from_candles(&candles) {
        data.insert("market_info".to_string(), to_value(&market_info)?);
    }

    let requested: Vec<&str> = request
        .indicators
        .iter()
        .map(|r| r.name.as_str())
        .collect();
    Ok(Json(json!({
        "status": "success",
        "data": data,
        "data_points": candles.len(),
        "requested_indicators": requested,
    })))
}

/// Run the prediction pipeline and report direction, risk and entry guidance.
async fn predict_handler(
    State(state): State<AppState>,
    Json(request): Json<PredictRequest>,
) -> ApiResult<Json<Value>> {
    if request.ohlc_data.len() < MIN_CANDLES {
        return Err(ApiError::Validation(format!(
            "insufficient data: at least {} candles required, got {}",
            MIN_CANDLES,
            request.ohlc_data.len()
        )));
    }

    let mut options = PredictOptions {
        timeframe_minutes: request.timeframe_minutes,
        ..PredictOptions::default()
    };
    if let Some(threshold) = request.confidence_threshold {
        if !(0.5..=0.95).contains(&threshold) {
            return Err(ApiError::Validation(format!(
                "confidence_threshold must be between 0.5 and 0.95, got {}",
                threshold
            )));
        }
        options.decision_threshold = threshold;
    }

    let candles = parse_series(&request.ohlc_data)?;
    let prediction = PredictionEngine::predict(&candles, &options);
    state
        .metrics
        .predictions_total
        .with_label_values(&[direction_label(prediction.direction)])
        .inc();

    let current_price = candles.last().map(|candle| candle.close);
    Ok(Json(json!({
        "status": "success",
        "prediction": prediction,
        "request_info": {
            "timeframe_minutes": options.timeframe_minutes,
            "decision_threshold": options.decision_threshold,
            "data_points": candles.len(),
            "current_price": current_price,
        }
    })))
}

fn direction_label(direction: PredictionDirection) -> &'static str {
    match direction {
        PredictionDirection::Call => "call",
        PredictionDirection::Put => "put",
        PredictionDirection::Neutral => "neutral",
    }
}

fn to_value<T: serde::Serialize>(value: &T) -> Result<Value, ApiError> {
    serde_json::to_value(value).map_err(|e| ApiError::Internal(e.to_string()))
}

/// Catalogue of supported indicators, grouped by category.
async fn indicators_list() -> Json<Value> {
    let mut grouped = Map::new();
    for kind in IndicatorKind::ALL {
        let category = grouped
            .entry(kind.category().name().to_string())
            .or_insert_with(|| Value::Object(Map::new()));
        if let Value::Object(listing) = category {
            listing.insert(
                kind.name().to_string(),
                json!({
                    "name": kind.description(),
                    "params": kind.parameter_spec(),
                    "example": {
                        "name": kind.name(),
                        "params": kind.example_params(),
                    }
                }),
            );
        }
    }

    let categories: Vec<String> = grouped.keys().cloned().collect();
    Json(json!({
        "status": "success",
        "indicators": grouped,
        "total_indicators": IndicatorKind::ALL.len(),
        "categories": categories,
    }))
}

/// Catalogue of detectable candlestick patterns, grouped by bias.
async fn patterns_list() -> Json<Value> {
    let mut bullish = Map::new();
    let mut bearish = Map::new();
    let mut neutral = Map::new();
    for kind in PatternKind::ALL {
        let bucket = match kind.bias() {
            PatternDirection::Bullish => &mut bullish,
            PatternDirection::Bearish => &mut bearish,
            PatternDirection::Neutral => &mut neutral,
        };
        bucket.insert(
            kind.name().to_string(),
            Value::String(kind.interpretation().to_string()),
        );
    }

    Json(json!({
        "status": "success",
        "patterns": {
            "bullish": bullish,
            "bearish": bearish,
            "neutral": neutral,
        },
        "total_patterns": PatternKind::ALL.len(),
        "categories": ["bullish", "bearish", "neutral"],
    }))
}

async fn root_info() -> Json<Value> {
    Json(json!({
        "service": "binarix",
        "version": env!("CARGO_PKG_VERSION"),
        "description": "Technical analysis engine for OHLCV candle series with pattern detection and directional predictions",
        "endpoints": {
            "/": "API information",
            "/health": "Health check",
            "/metrics": "Prometheus metrics",
            "/analyze": "Technical indicator analysis",
            "/predict": "Directional prediction with risk and entry guidance",
            "/indicators/list": "Supported indicators and parameters",
            "/patterns/list": "Detectable candlestick patterns",
        }
    }))
}

pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(root_info))
        .route("/health", get(health_check))
        .route("/metrics", get(metrics_handler))
        .route("/analyze", post(analyze_handler))
        .route("/predict", post(predict_handler))
        .route("/indicators/list", get(indicators_list))
        .route("/patterns/list", get(patterns_list))
        .layer(
            ServiceBuilder::new()
                .layer(
                    TraceLayer::new_for_http()
                        .make_span_with(DefaultMakeSpan::new().level(Level::DEBUG))
                        .on_request(DefaultOnRequest::new().level(Level::DEBUG))
                        .on_response(DefaultOnResponse::new().level(Level::DEBUG)),
                )
                .layer(axum::middleware::from_fn_with_state(
                    state.clone(),
                    metrics_middleware,
                ))
                .layer(CorsLayer::permissive()),
        )
        .with_state(state)
}

pub async fn start_server(port: u16) -> Result<(), Box<dyn std::error::Error>> {
    let metrics = Arc::new(Metrics::new()?);
    let start_time = Arc::new(Instant::now());

    let state = AppState {
        health: Arc::new(RwLock::new(HealthStatus::default())),
        metrics,
        start_time,
    };
    let app = create_router(state);
    let listener = tokio::net::TcpListener::bind(format!("0.0.0.0:{}", port)).await?;

    info!(port = port, "HTTP server listening on port {}", port);
    info!(
        "Metrics endpoint available at http://0.0.0.0:{}/metrics",
        port
    );
    axum::serve(listener, app).await?;

    Ok(())
}
