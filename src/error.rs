//! Store Feed Errors
//!
//! Failures raised while booting the feed or loading a page.

use wasm_bindgen::{JsCast, JsValue};

/// Errors raised by the store feed
#[derive(Debug, Clone, PartialEq)]
pub enum LoadError {
    /// A DOM element the host page must provide is absent
    MissingElement(String),
    /// Starting count is not a non-negative integer within range
    InvalidOffset(String),
    /// Options object or data attribute could not be decoded
    InvalidConfig(String),
    /// The trigger already drives a feed
    AlreadyBound(String),
    /// The request was rejected before a response arrived
    Network(String),
    /// The server answered with a non-2xx status
    Status(u16),
    /// The body was not a JSON array of products
    Decode(String),
}

impl LoadError {
    /// Whether a failed page request is worth retrying.
    ///
    /// Client errors other than 429 will not change on retry.
    pub fn is_retryable(&self) -> bool {
        match self {
            LoadError::Network(_) | LoadError::Decode(_) => true,
            LoadError::Status(code) => *code >= 500 || *code == 429,
            _ => false,
        }
    }
}

impl std::fmt::Display for LoadError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LoadError::MissingElement(id) => write!(f, "Missing element: #{}", id),
            LoadError::InvalidOffset(msg) => write!(f, "Invalid starting count: {}", msg),
            LoadError::InvalidConfig(msg) => write!(f, "Invalid config: {}", msg),
            LoadError::AlreadyBound(id) => write!(f, "Trigger #{} is already bound", id),
            LoadError::Network(msg) => write!(f, "Network error: {}", msg),
            LoadError::Status(code) => write!(f, "Server responded with status {}", code),
            LoadError::Decode(msg) => write!(f, "Invalid response body: {}", msg),
        }
    }
}

impl std::error::Error for LoadError {}

impl From<LoadError> for JsValue {
    fn from(err: LoadError) -> Self {
        js_sys::Error::new(&err.to_string()).into()
    }
}

/// Best-effort message for a rejected promise or thrown JS value
pub fn js_message(value: &JsValue) -> String {
    if let Some(err) = value.dyn_ref::<js_sys::Error>() {
        return String::from(err.message());
    }
    value.as_string().unwrap_or_else(|| format!("{:?}", value))
}
