//! Shared application state injected into every handler.

use std::sync::Arc;

use crate::application::services::OrderService;
use crate::infrastructure::persistence::InMemoryOrderRepository;

/// Concrete service type wired into the running server.
pub type AppOrderService = OrderService<InMemoryOrderRepository>;

/// State handed to handlers through axum's `State` extractor.
///
/// Owns the order store explicitly; each test builds its own instance.
#[derive(Clone)]
pub struct AppState {
    pub order_service: Arc<AppOrderService>,
    /// Host used for `Location` URIs when a request carries no `Host` header.
    pub public_host: String,
}

impl AppState {
    pub fn new(order_service: Arc<AppOrderService>, public_host: impl Into<String>) -> Self {
        Self {
            order_service,
            public_host: public_host.into(),
        }
    }
}
