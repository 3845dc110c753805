pub mod error;
pub mod handlers;
pub mod orders;
pub mod types;
pub mod vapi_types;

use crate::types::AppState;

use axum::{
    routing::{get, post},
    Router,
};
use std::sync::Arc;

pub mod consts {
    pub const VAPI_BASE_URL: &str = "https://api.vapi.ai";

    pub const ASSISTANT_NAME: &str = "Customer Service AI";
    pub const ASSISTANT_GREETING: &str =
        "Hello! Thank you for calling our customer service. How can I help you today?";
    pub const ASSISTANT_SYSTEM_PROMPT: &str = "\
You are a friendly customer service representative for TechStore Inc.
Company info: We sell electronics, computers, and gadgets.
Products: Laptops, smartphones, headphones, smartwatches.
Services: Free shipping, 30-day return policy, 24/7 support.

Capabilities:
- Product information and availability
- Order status checking
- Return and exchange processing
- Technical support basics
- Store hours and locations

Guidelines:
- Always verify order numbers (format: TS-XXXXXX)
- Be empathetic and patient
- Escalate complex technical issues
- Keep responses conversational and brief";

    pub const ORDER_NOT_FOUND: &str = "Order not found. Please verify order number.";
}

pub fn router(app_state: Arc<AppState>) -> Router {
    Router::new()
        .route("/create-assistant", post(handlers::create_assistant))
        .route("/webhook", post(handlers::webhook))
        .route("/analytics/:call_id", get(handlers::call_analytics))
        .route("/", get(|| async { "Hello, World!" }))
        .with_state(app_state)
}
