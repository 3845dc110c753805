use crate::consts::{ASSISTANT_GREETING, ASSISTANT_NAME, ASSISTANT_SYSTEM_PROMPT};

use serde::{Deserialize, Serialize};
use serde_json::Value;

mod assistant {
    use super::*;

    #[derive(Serialize, Debug)]
    #[serde(rename_all = "camelCase")]
    pub struct AssistantConfig {
        pub name: String,
        pub first_message: String,
        pub model: ModelConfig,
        pub voice: VoiceConfig,
        pub server: ServerConfig,
    }

    #[derive(Serialize, Debug)]
    pub struct ModelConfig {
        pub provider: String,
        pub model: String,
        pub messages: Vec<PromptMessage>,
    }

    #[derive(Serialize, Debug)]
    pub struct PromptMessage {
        pub role: String,
        pub content: String,
    }

    #[derive(Serialize, Debug)]
    #[serde(rename_all = "camelCase")]
    pub struct VoiceConfig {
        pub provider: String,
        pub voice_id: String,
    }

    #[derive(Serialize, Debug)]
    pub struct ServerConfig {
        pub url: String,
    }

    impl AssistantConfig {
        /// The fixed customer-service profile we register with the platform.
        /// `server_url` is where the platform will deliver webhook events for
        /// calls handled by this assistant.
        pub fn customer_service(server_url: &str) -> Self {
            Self {
                name: ASSISTANT_NAME.to_string(),
                first_message: ASSISTANT_GREETING.to_string(),
                model: ModelConfig {
                    provider: "openai".to_string(),
                    model: "gpt-4".to_string(),
                    messages: vec![PromptMessage {
                        role: "system".to_string(),
                        content: ASSISTANT_SYSTEM_PROMPT.to_string(),
                    }],
                },
                voice: VoiceConfig {
                    provider: "11labs".to_string(),
                    voice_id: "rachel".to_string(),
                },
                server: ServerConfig {
                    url: server_url.to_string(),
                },
            }
        }
    }
}
pub use assistant::*;

mod webhook {
    use super::*;

    /// Event pushed to us by the platform during a call.  Anything we don't
    /// recognize lands on `Other` and gets the default ack.
    #[derive(Deserialize, Debug)]
    #[serde(tag = "type")]
    pub enum WebhookEvent {
        #[serde(rename = "conversation.update")]
        ConversationUpdate {
            #[serde(default)]
            message: Option<ConversationMessage>,
        },
        #[serde(rename = "function.call")]
        FunctionCall {
            #[serde(default)]
            message: Option<FunctionCallMessage>,
        },
        #[serde(rename = "call.end")]
        CallEnd {
            #[serde(default)]
            call: Option<Value>,
        },
        #[serde(other)]
        Other,
    }

    #[derive(Deserialize, Debug)]
    pub struct ConversationMessage {
        #[serde(rename = "type", default)]
        pub kind: Option<String>,
        #[serde(default)]
        pub transcript: Option<String>,
    }

    #[derive(Deserialize, Debug)]
    pub struct FunctionCallMessage {
        #[serde(rename = "functionCall", default)]
        pub function_call: Option<FunctionCall>,
    }

    /// Structured action request emitted by the model mid-call.  Parameters
    /// stay opaque; each handled function pulls out what it needs.
    #[derive(Deserialize, Debug)]
    pub struct FunctionCall {
        pub name: String,
        #[serde(default)]
        pub parameters: Value,
    }

    #[derive(Serialize, Debug)]
    pub struct WebhookAck {
        pub success: bool,
    }

    #[derive(Serialize, Debug)]
    pub struct FunctionCallReply {
        pub result: OrderStatusResult,
    }

    #[derive(Serialize, Debug)]
    #[serde(rename_all = "camelCase")]
    pub struct OrderStatusResult {
        pub order_status: String,
        pub order_number: String,
    }
}
pub use webhook::*;

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn webhook_event_tags_on_type() {
        let event: WebhookEvent = serde_json::from_value(json!({
            "type": "function.call",
            "message": {
                "functionCall": {
                    "name": "getOrderStatus",
                    "parameters": { "orderNumber": "TS-123456" }
                }
            }
        }))
        .unwrap();
        match event {
            WebhookEvent::FunctionCall { message } => {
                let function_call = message.unwrap().function_call.unwrap();
                assert_eq!(function_call.name, "getOrderStatus");
                assert_eq!(
                    function_call.parameters.get("orderNumber").and_then(Value::as_str),
                    Some("TS-123456")
                );
            }
            other => panic!("expected function.call, got {other:?}"),
        }
    }

    #[test]
    fn unknown_event_types_fall_through_to_other() {
        let event: WebhookEvent =
            serde_json::from_value(json!({ "type": "speech.update" })).unwrap();
        assert!(matches!(event, WebhookEvent::Other));
    }

    #[test]
    fn conversation_update_carries_optional_transcript() {
        let event: WebhookEvent = serde_json::from_value(json!({
            "type": "conversation.update",
            "message": { "type": "transcript", "transcript": "Where is my order?" }
        }))
        .unwrap();
        match event {
            WebhookEvent::ConversationUpdate { message } => {
                let message = message.unwrap();
                assert_eq!(message.kind.as_deref(), Some("transcript"));
                assert_eq!(message.transcript.as_deref(), Some("Where is my order?"));
            }
            other => panic!("expected conversation.update, got {other:?}"),
        }

        // The platform also sends updates with no message body at all.
        let bare: WebhookEvent =
            serde_json::from_value(json!({ "type": "conversation.update" })).unwrap();
        assert!(matches!(bare, WebhookEvent::ConversationUpdate { message: None }));
    }

    #[test]
    fn assistant_config_serializes_platform_field_names() {
        let config = AssistantConfig::customer_service("https://relay.example.com/webhook");
        let value = serde_json::to_value(&config).unwrap();

        assert_eq!(value["name"], "Customer Service AI");
        assert!(value["firstMessage"].is_string());
        assert_eq!(value["model"]["provider"], "openai");
        assert_eq!(value["model"]["model"], "gpt-4");
        assert_eq!(value["model"]["messages"][0]["role"], "system");
        assert_eq!(value["voice"]["provider"], "11labs");
        assert_eq!(value["voice"]["voiceId"], "rachel");
        assert_eq!(value["server"]["url"], "https://relay.example.com/webhook");
    }

    #[test]
    fn function_call_reply_serializes_camel_case() {
        let reply = FunctionCallReply {
            result: OrderStatusResult {
                order_status: "Shipped - Expected delivery: Tomorrow".to_string(),
                order_number: "TS-123456".to_string(),
            },
        };
        let value = serde_json::to_value(&reply).unwrap();
        assert_eq!(
            value,
            json!({
                "result": {
                    "orderStatus": "Shipped - Expected delivery: Tomorrow",
                    "orderNumber": "TS-123456"
                }
            })
        );
    }
}
