#![allow(dead_code)] // Each test binary uses a different subset

use serde_json::{json, Value};
use std::time::Duration;
use user_admin::api::HttpUserApi;
use wiremock::MockServer;

/// Initialize tracing for tests with proper test output handling
pub fn tracing_init() {
    let _ = tracing_subscriber::fmt().with_test_writer().try_init();
}

/// Client pointed at a mock backend
pub fn client_for(server: &MockServer) -> HttpUserApi {
    HttpUserApi::new(&server.uri(), Duration::from_secs(5)).expect("mock server uri is valid")
}

pub fn users_json() -> Value {
    json!([
        { "id": "f922", "name": "swaraj", "email": "Swaraj@gmail.com", "company_name": "cv" },
        { "id": "f923", "name": "sourabh", "email": "alex@gmail.com", "company_name": "xyz" },
    ])
}
