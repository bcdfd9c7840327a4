//! Test utilities for integration tests
use std::sync::{Arc, RwLock};

use axum::{Router, body::Body};

use askbot::api::AppState;
use askbot::api::app;
use askbot::core::AppConfig;

/// Creates a test application router. The `api_hostname` should point
/// at a mock server so no test ever talks to the real API.
pub fn test_app(api_hostname: &str, require_session_key: bool) -> Router {
    let app_config = AppConfig {
        openai_api_hostname: api_hostname.to_string(),
        openai_api_key: String::from("test-api-key"),
        openai_model: String::from("gpt-3.5-turbo"),
        system_message: String::from(
            "You are a helpful assistant. Please respond in full sentences.",
        ),
        require_session_key,
    };
    let app_state = AppState::new(app_config);
    app(Arc::new(RwLock::new(app_state)))
}

pub async fn body_to_string(body: Body) -> String {
    let bytes = axum::body::to_bytes(body, usize::MAX)
        .await
        .expect("Failed to read response body");
    String::from_utf8(bytes.to_vec()).expect("Response body was not utf-8")
}
