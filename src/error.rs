//! Normalized failures reported by external collaborators.
//!
//! Schema, deploy, status and delete collaborators surface failures in
//! several shapes: a bare string, an envelope carrying `body.message`, an
//! object with a top-level `message`, or an arbitrary payload. Every shape is
//! captured by [`CollaboratorError`] so notifications can always render a
//! best-effort string without failing themselves.

use serde_json::Value;
use std::fmt;
use std::sync::Arc;

/// Fallback text used when no usable message can be extracted.
pub const UNKNOWN_ERROR_MESSAGE: &str = "Unknown error";

/// Failure reported by a collaborator, classified by shape.
///
/// Variants are listed in normalization priority: when a raw error value
/// could match several shapes, [`CollaboratorError::from_value`] picks the
/// first matching variant.
#[derive(Debug, Clone)]
pub enum CollaboratorError {
    /// The collaborator rejected the call without any error value.
    Missing,
    /// A plain string error, rendered verbatim.
    Text(String),
    /// An envelope whose `body.message` carries the server message.
    Body {
        /// Nested server message.
        message: String,
    },
    /// An error object with a top-level `message` field.
    Message(String),
    /// Any other structured payload, rendered as JSON.
    Payload(Value),
    /// A native error raised by an adapter.
    Opaque(Arc<dyn std::error::Error + Send + Sync>),
}

impl CollaboratorError {
    /// Creates a plain-text collaborator error.
    #[must_use]
    pub fn text(message: impl Into<String>) -> Self {
        Self::Text(message.into())
    }

    /// Wraps a native adapter error.
    pub fn opaque(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Opaque(Arc::new(err))
    }

    /// Classifies a duck-typed error value.
    ///
    /// Matching follows the rendering priority: `null` is
    /// [`CollaboratorError::Missing`], strings are passed through, then a
    /// non-empty `body.message`, then a non-empty top-level `message`, and
    /// anything else is kept as a payload.
    #[must_use]
    pub fn from_value(value: Value) -> Self {
        match value {
            Value::Null => Self::Missing,
            Value::String(text) => Self::Text(text),
            other => {
                if let Some(message) = non_empty_str(other.pointer("/body/message")) {
                    return Self::Body { message };
                }
                if let Some(message) = non_empty_str(other.get("message")) {
                    return Self::Message(message);
                }
                Self::Payload(other)
            }
        }
    }

    /// Renders the best-effort user-facing message.
    ///
    /// This never fails; payloads that cannot be serialized fall back to
    /// [`UNKNOWN_ERROR_MESSAGE`].
    #[must_use]
    pub fn user_message(&self) -> String {
        match self {
            Self::Missing => UNKNOWN_ERROR_MESSAGE.to_owned(),
            Self::Text(text) if text.is_empty() => UNKNOWN_ERROR_MESSAGE.to_owned(),
            Self::Text(text) => text.clone(),
            Self::Body { message } | Self::Message(message) => message.clone(),
            Self::Payload(payload) => serde_json::to_string(payload)
                .unwrap_or_else(|_| UNKNOWN_ERROR_MESSAGE.to_owned()),
            Self::Opaque(err) => {
                let rendered = err.to_string();
                if rendered.is_empty() {
                    UNKNOWN_ERROR_MESSAGE.to_owned()
                } else {
                    rendered
                }
            }
        }
    }
}

fn non_empty_str(value: Option<&Value>) -> Option<String> {
    value
        .and_then(Value::as_str)
        .filter(|text| !text.is_empty())
        .map(str::to_owned)
}

impl fmt::Display for CollaboratorError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.user_message())
    }
}

impl std::error::Error for CollaboratorError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Opaque(err) => Some(err.as_ref()),
            _ => None,
        }
    }
}

impl From<Value> for CollaboratorError {
    fn from(value: Value) -> Self {
        Self::from_value(value)
    }
}

impl From<String> for CollaboratorError {
    fn from(text: String) -> Self {
        Self::Text(text)
    }
}

impl From<&str> for CollaboratorError {
    fn from(text: &str) -> Self {
        Self::Text(text.to_owned())
    }
}

#[cfg(test)]
mod tests {
    use super::{CollaboratorError, UNKNOWN_ERROR_MESSAGE};
    use rstest::rstest;
    use serde_json::{Value, json};

    #[rstest]
    #[case(Value::Null, UNKNOWN_ERROR_MESSAGE)]
    #[case(json!("plain failure"), "plain failure")]
    #[case(json!({"body": {"message": "nested"}, "message": "outer"}), "nested")]
    #[case(json!({"body": {"message": ""}, "message": "outer"}), "outer")]
    #[case(json!({"message": "outer"}), "outer")]
    #[case(json!({"code": 42}), r#"{"code":42}"#)]
    #[case(json!([1, 2]), "[1,2]")]
    fn from_value_renders_in_priority_order(#[case] raw: Value, #[case] expected: &str) {
        assert_eq!(CollaboratorError::from_value(raw).user_message(), expected);
    }

    #[test]
    fn body_envelope_takes_precedence_over_top_level_message() {
        let error = CollaboratorError::from_value(json!({
            "body": {"message": "INVALID_FIELD"},
            "message": "Request failed"
        }));
        assert!(matches!(error, CollaboratorError::Body { ref message } if message == "INVALID_FIELD"));
    }

    #[test]
    fn opaque_error_renders_its_display() {
        let error = CollaboratorError::opaque(std::io::Error::other("socket closed"));
        assert_eq!(error.to_string(), "socket closed");
        assert!(std::error::Error::source(&error).is_some());
    }

    #[test]
    fn opaque_error_with_empty_display_falls_back() {
        let error = CollaboratorError::opaque(std::io::Error::other(""));
        assert_eq!(error.user_message(), UNKNOWN_ERROR_MESSAGE);
    }

    #[test]
    fn empty_text_counts_as_missing() {
        assert_eq!(CollaboratorError::text("").user_message(), UNKNOWN_ERROR_MESSAGE);
    }
}
