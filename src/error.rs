//! Error Types
//!
//! Every failure in this crate degrades to "nothing happens" plus a log line;
//! these variants only exist to say what went wrong in that line.

use thiserror::Error;
use wasm_bindgen::{JsCast, JsValue};

#[derive(Debug, Clone, PartialEq, Error)]
pub enum FormError {
    #[error("network error: {0}")]
    Network(String),

    #[error("unexpected HTTP status {0}")]
    Status(u16),

    #[error("malformed response: {0}")]
    Decode(String),

    #[error("DOM error: {0}")]
    Dom(String),

    #[error("banner widget error: {0}")]
    Widget(String),

    #[error("invalid page configuration: {0}")]
    Config(String),
}

impl FormError {
    pub fn network(err: JsValue) -> Self {
        Self::Network(describe_js(&err))
    }

    pub fn decode(err: impl ToString) -> Self {
        Self::Decode(err.to_string())
    }

    pub fn dom(err: JsValue) -> Self {
        Self::Dom(describe_js(&err))
    }

    pub fn widget(err: JsValue) -> Self {
        Self::Widget(describe_js(&err))
    }
}

/// Best-effort text for a thrown JS value (Error objects, strings, anything else)
pub fn describe_js(value: &JsValue) -> String {
    if let Some(text) = value.as_string() {
        return text;
    }
    if let Some(err) = value.dyn_ref::<js_sys::Error>() {
        return String::from(err.message());
    }
    format!("{value:?}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages() {
        assert_eq!(FormError::Status(404).to_string(), "unexpected HTTP status 404");
        assert_eq!(
            FormError::decode("expected a sequence").to_string(),
            "malformed response: expected a sequence"
        );
    }
}
