//! AI assistant endpoint.
//!
//! The backend exposes one text-in/text-out call; the conversational
//! framing lives entirely on this side. Every request sends the fixed
//! product context followed by the visible chat history, so the model
//! needs no server-side session.

use serde::{Deserialize, Serialize};

use super::transport::{platform_transport, ApiRequest, Transport};
use super::{api_base, parse_data, ApiError};

/// Grounding context prepended to every prompt. Keeps answers scoped to
/// the product instead of a general-purpose chatbot.
pub const SYSTEM_CONTEXT: &str = "You are the Pavit IoT assistant on pavitinfotech.com. \
Pavit IoT is a device monitoring platform: customers connect sensor fleets, watch live \
telemetry on a dashboard, build alert rules, and export reports. Answer questions about \
the product, plans and onboarding. Be concise. If a question is unrelated to Pavit IoT, \
say so and steer back to the product. Never invent prices; the pricing page is the source \
of truth.";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ChatRole {
    User,
    Assistant,
}

impl ChatRole {
    fn prefix(&self) -> &'static str {
        match self {
            ChatRole::User => "User",
            ChatRole::Assistant => "Assistant",
        }
    }
}

/// One visible message in the chat widget.
#[derive(Clone, Debug, PartialEq)]
pub struct ChatTurn {
    pub role: ChatRole,
    pub text: String,
}

impl ChatTurn {
    pub fn user(text: impl Into<String>) -> Self {
        Self {
            role: ChatRole::User,
            text: text.into(),
        }
    }

    pub fn assistant(text: impl Into<String>) -> Self {
        Self {
            role: ChatRole::Assistant,
            text: text.into(),
        }
    }
}

/// Assembles the single prompt string the backend expects: fixed context,
/// then the history oldest-to-newest, then a cue for the next reply.
pub fn build_prompt(history: &[ChatTurn]) -> String {
    let mut prompt = String::from(SYSTEM_CONTEXT);
    prompt.push_str("\n\n");
    for turn in history {
        prompt.push_str(turn.role.prefix());
        prompt.push_str(": ");
        prompt.push_str(turn.text.trim());
        prompt.push('\n');
    }
    prompt.push_str("Assistant:");
    prompt
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct GenerateRequest {
    pub prompt: String,
}

#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq)]
pub struct GenerateResponse {
    pub response: String,
}

pub struct AiClient {
    base: String,
    transport: Box<dyn Transport>,
}

impl AiClient {
    pub fn new() -> Self {
        Self::with_transport(api_base(), platform_transport())
    }

    pub fn with_transport(base: impl Into<String>, transport: Box<dyn Transport>) -> Self {
        Self {
            base: base.into(),
            transport,
        }
    }

    /// Sends the assembled prompt. The bearer token rides along when a
    /// session exists so the backend can rate-limit per account.
    pub async fn generate(
        &self,
        token: Option<&str>,
        history: &[ChatTurn],
    ) -> Result<String, ApiError> {
        let req = GenerateRequest {
            prompt: build_prompt(history),
        };
        let mut api_req = ApiRequest::post(format!("{}/ai/generate", self.base), &req)?;
        if let Some(token) = token {
            api_req = api_req.bearer(token);
        }
        let raw = self.transport.send(api_req).await?;
        let reply: GenerateResponse = parse_data(&raw)?;
        Ok(reply.response)
    }
}

impl Default for AiClient {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn prompt_starts_with_context_and_ends_with_cue() {
        let prompt = build_prompt(&[ChatTurn::user("How many devices can I connect?")]);
        assert!(prompt.starts_with(SYSTEM_CONTEXT));
        assert!(prompt.ends_with("Assistant:"));
        assert!(prompt.contains("User: How many devices can I connect?\n"));
    }

    #[test]
    fn history_keeps_order_with_latest_last() {
        let history = [
            ChatTurn::user("Do you support LoRaWAN?"),
            ChatTurn::assistant("Yes, via the gateway bridge."),
            ChatTurn::user("And MQTT?"),
        ];
        let prompt = build_prompt(&history);
        let lorawan = prompt.find("Do you support LoRaWAN?").unwrap();
        let bridge = prompt.find("Yes, via the gateway bridge.").unwrap();
        let mqtt = prompt.find("And MQTT?").unwrap();
        assert!(lorawan < bridge && bridge < mqtt);
    }

    #[test]
    fn empty_history_still_produces_a_valid_prompt() {
        let prompt = build_prompt(&[]);
        assert!(prompt.starts_with(SYSTEM_CONTEXT));
        assert!(prompt.ends_with("\n\nAssistant:"));
    }

    #[test]
    fn message_whitespace_is_trimmed() {
        let prompt = build_prompt(&[ChatTurn::user("  spaced out  ")]);
        assert!(prompt.contains("User: spaced out\n"));
    }
}
