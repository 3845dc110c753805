use crate::error::AppError;
use crate::types::AppState;
use crate::vapi_types::{
    AssistantConfig, FunctionCallReply, OrderStatusResult, WebhookAck, WebhookEvent,
};

use axum::{
    extract::{Host, Path, State},
    response::{IntoResponse, Response},
    Json,
};
use serde_json::Value;
use std::sync::Arc;
use tracing::{debug, info};

/// Provision the fixed assistant profile on the platform, pointing its
/// webhook at this service.  The platform's response body is relayed
/// verbatim.
pub async fn create_assistant(
    Host(host): Host,
    State(app_state): State<Arc<AppState>>,
) -> Result<Json<Value>, AppError> {
    let webhook_url = format!("https://{host}/webhook");
    let config = AssistantConfig::customer_service(&webhook_url);
    let created = app_state.create_assistant(&config).await?;
    Ok(Json(created))
}

/// Dispatch on the platform's call events.  Only a getOrderStatus function
/// call produces a reply of its own; everything else gets the default ack.
pub async fn webhook(
    State(app_state): State<Arc<AppState>>,
    Json(event): Json<WebhookEvent>,
) -> Response {
    debug!(event = ?event, "webhook received");

    match event {
        WebhookEvent::ConversationUpdate { message } => {
            if let Some(message) = message {
                if message.kind.as_deref() == Some("transcript") {
                    if let Some(transcript) = &message.transcript {
                        info!(transcript = %transcript, "caller transcript");
                        if transcript.to_lowercase().contains("order status") {
                            // Detection hook only; the actual lookup happens
                            // when the model issues a function call.
                            info!("order status inquiry detected");
                        }
                    }
                }
            }
        }
        WebhookEvent::FunctionCall { message } => {
            if let Some(function_call) = message.and_then(|m| m.function_call) {
                if function_call.name == "getOrderStatus" {
                    let order_number = function_call
                        .parameters
                        .get("orderNumber")
                        .and_then(Value::as_str)
                        .unwrap_or_default()
                        .to_string();
                    let order_status = app_state.orders.lookup(&order_number).await;
                    return Json(FunctionCallReply {
                        result: OrderStatusResult {
                            order_status,
                            order_number,
                        },
                    })
                    .into_response();
                }
                debug!(function = %function_call.name, "no handler for requested function");
            }
        }
        WebhookEvent::CallEnd { call } => {
            info!(call = ?call, "call ended");
        }
        WebhookEvent::Other => {}
    }

    Json(WebhookAck { success: true }).into_response()
}

/// Pass a single call record through from the platform.
pub async fn call_analytics(
    Path(call_id): Path<String>,
    State(app_state): State<Arc<AppState>>,
) -> Result<Json<Value>, AppError> {
    let call = app_state.get_call(&call_id).await?;
    Ok(Json(call))
}
