#![allow(dead_code)]

use axum::ServiceExt;
use axum::extract::Request;
use axum_test::TestServer;
use restbucks_orders::application::services::OrderService;
use restbucks_orders::domain::entities::{OrderId, UpdateMode};
use restbucks_orders::infrastructure::persistence::InMemoryOrderRepository;
use restbucks_orders::routes::{api_router, app_router};
use restbucks_orders::state::AppState;
use restbucks_orders::utils::id_generator::IdRange;
use std::sync::Arc;

/// Host used for `Location` URIs when a test request sends no `Host` header.
pub const FALLBACK_HOST: &str = "127.0.0.1:3000";

pub fn create_test_state(min: OrderId, max: OrderId, update_mode: UpdateMode) -> AppState {
    let repository = Arc::new(InMemoryOrderRepository::new());
    let order_service = Arc::new(OrderService::new(
        repository,
        IdRange::new(min, max).unwrap(),
        update_mode,
    ));

    AppState::new(order_service, FALLBACK_HOST)
}

/// Test server over a fresh store with the default `0..=9` range.
pub fn make_server() -> TestServer {
    make_server_with(0, 9, UpdateMode::Replace)
}

pub fn make_server_with(min: OrderId, max: OrderId, update_mode: UpdateMode) -> TestServer {
    let state = create_test_state(min, max, update_mode);
    TestServer::new(api_router(state)).unwrap()
}

/// Test server over the full application router, trailing-slash
/// normalization included.
pub fn make_app_server() -> TestServer {
    let state = create_test_state(0, 9, UpdateMode::Replace);
    TestServer::new(ServiceExt::<Request>::into_make_service(app_router(state))).unwrap()
}

/// Creates an order through the API and returns its identifier.
pub async fn create_order(server: &TestServer, record: serde_json::Value) -> u64 {
    let response = server.post("/order").json(&record).await;
    response.assert_status(axum::http::StatusCode::CREATED);
    response.json::<serde_json::Value>()["id"].as_u64().unwrap()
}
