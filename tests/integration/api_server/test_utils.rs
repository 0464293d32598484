//! Test utilities for API server integration tests

use axum_test::TestServer;
use binarix::core::http::{create_router, AppState, HealthStatus};
use binarix::metrics::Metrics;
use serde_json::{json, Value};
use std::sync::Arc;
use std::time::Instant;
use tokio::sync::RwLock;

/// Test helper for API server integration tests
#[allow(dead_code)]
pub struct TestApiServer {
    pub server: TestServer,
    pub metrics: Arc<Metrics>,
}

impl TestApiServer {
    pub async fn new() -> Self {
        let metrics = Arc::new(Metrics::new().expect("metrics initialization"));
        let state = AppState {
            health: Arc::new(RwLock::new(HealthStatus::default())),
            metrics: metrics.clone(),
            start_time: Arc::new(Instant::now()),
        };

        let app = create_router(state);
        let server = TestServer::new(app).expect("start test server");

        Self { server, metrics }
    }
}

/// Steadily rising full-body candles, one minute apart.
#[allow(dead_code)]
pub fn rising_candles(count: usize) -> Vec<Value> {
    (0..count)
        .map(|i| {
            let open = 100.0 + i as f64;
            json!({
                "time": candle_time(i),
                "open": open,
                "high": open + 1.0,
                "low": open,
                "close": open + 1.0,
                "volume": 1500.0,
            })
        })
        .collect()
}

/// Steadily falling full-body candles, one minute apart.
#[allow(dead_code)]
pub fn falling_candles(count: usize) -> Vec<Value> {
    (0..count)
        .map(|i| {
            let open = 200.0 - i as f64;
            json!({
                "time": candle_time(i),
                "open": open,
                "high": open,
                "low": open - 1.0,
                "close": open - 1.0,
                "volume": 1500.0,
            })
        })
        .collect()
}

fn candle_time(i: usize) -> String {
    format!("2024-03-01 {:02}:{:02}:00", 9 + i / 60, i % 60)
}
