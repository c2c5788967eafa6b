//! Outfit assistant dispatchers.
//!
//! The orchestrator only needs one capability: turn a prompt into an
//! answer. Whether that goes over HTTP, through an intermediary process or
//! to a canned responder is the dispatcher's business.
//!
//! - **HttpAssistant**: the outfit API's `/generate-outfit` endpoint
//! - **MockAssistant**: fixed development-mode answer
//! - **RuleBasedStylist**: offline outfit suggestions from event, weather and mood

#[cfg(feature = "client")]
mod http;
mod mock;
mod stylist;

#[cfg(feature = "client")]
pub use http::*;
pub use mock::*;
pub use stylist::*;

use async_trait::async_trait;
use serde_json::Value;

use crate::error::{Error, Result};

/// Prefix the outfit API uses when it answers with an error message
/// instead of an outfit.
const ERROR_PREFIX: &str = "Error:";

/// Apologies the outfit API sends in place of an outfit when generation fails.
const FAILURE_APOLOGIES: &[&str] = &[
    "Sorry, the AI service returned an error",
    "Sorry, I ran into a general issue",
];

/// Capability to answer a composed prompt.
#[async_trait]
pub trait AssistantDispatcher: Send + Sync {
    /// Ask the assistant; fails on any non-success response or transport failure.
    async fn ask(&self, prompt: &str) -> Result<String>;
}

/// Extract the answer from an assistant response payload.
///
/// Accepts `{ "outfit": .. }` and the bridged `{ "success": true, "result": .. }`
/// shape; anything reporting failure or carrying no text is a dispatch error.
/// The outfit API also reports failures inside `outfit` itself, either with
/// an `Error:` prefix or one of its fixed apologies; both count as failures.
pub fn read_answer(body: &Value) -> Result<String> {
    if body.get("success").and_then(Value::as_bool) == Some(false) {
        let cause = body
            .get("error")
            .and_then(Value::as_str)
            .filter(|s| !s.trim().is_empty())
            .unwrap_or("Unknown error occurred in assistant");
        return Err(Error::Dispatch(cause.to_string()));
    }

    let answer = body
        .get("outfit")
        .or_else(|| body.get("result"))
        .and_then(Value::as_str)
        .map(str::trim);

    match answer {
        Some(text) if text.starts_with(ERROR_PREFIX) => Err(Error::Dispatch(
            text.trim_start_matches(ERROR_PREFIX).trim().to_string(),
        )),
        Some(text) if FAILURE_APOLOGIES.iter().any(|a| text.starts_with(a)) => {
            Err(Error::Dispatch(text.to_string()))
        }
        Some("") => Err(Error::Dispatch("assistant returned an empty answer".into())),
        Some(text) => Ok(text.to_string()),
        None => match body.get("error").and_then(Value::as_str) {
            Some(cause) => Err(Error::Dispatch(cause.to_string())),
            None => Err(Error::Dispatch("malformed response from assistant".into())),
        },
    }
}
