//! Error types for the VaultX client
//!
//! Every failure a page can hit ends up as one of these enums. Pages never
//! show an error verbatim; they go through [`describe`] so that the most
//! specific message available is the one the user sees.

use crate::profile::FormField;
use thiserror::Error;

/// Shown when neither the server nor the transport gave anything useful.
pub const FALLBACK_MESSAGE: &str = "Please check your information and try again.";

/// Failures talking to the backend REST API
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ApiError {
    /// The request never produced a response (DNS, refused, CORS, ...)
    #[error("{0}")]
    Transport(String),
    /// The server answered with a non-success status
    #[error("Request failed with status code {status}")]
    Status {
        status: u16,
        /// The `message` field of the error body, when the server sent one
        message: Option<String>,
    },
    /// The response body did not have the expected shape
    #[error("Unexpected response from server: {0}")]
    Decode(String),
}

impl ApiError {
    /// Message taken from the server's error body, if any
    pub fn server_message(&self) -> Option<&str> {
        match self {
            ApiError::Status {
                message: Some(message),
                ..
            } if !message.trim().is_empty() => Some(message.as_str()),
            _ => None,
        }
    }
}

impl From<reqwest::Error> for ApiError {
    fn from(e: reqwest::Error) -> Self {
        if e.is_decode() {
            ApiError::Decode(e.to_string())
        } else {
            ApiError::Transport(e.to_string())
        }
    }
}

/// Why a single field was rejected
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldErrorKind {
    Required,
    NotANumber,
    BelowMinimum(String),
    NotOneOf(&'static [&'static str]),
    InvalidDate,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldError {
    pub field: FormField,
    pub kind: FieldErrorKind,
}

impl FieldError {
    pub fn new(field: FormField, kind: FieldErrorKind) -> Self {
        Self { field, kind }
    }

    pub fn message(&self) -> String {
        let label = self.field.label();
        match &self.kind {
            FieldErrorKind::Required => format!("{} is required", label),
            FieldErrorKind::NotANumber => format!("{} must be a number", label),
            FieldErrorKind::BelowMinimum(min) => {
                format!("{} must be at least {}", label, min)
            }
            FieldErrorKind::NotOneOf(options) => {
                format!("{} must be one of {}", label, options.join(", "))
            }
            FieldErrorKind::InvalidDate => {
                format!("{} must be a valid date (YYYY-MM-DD)", label)
            }
        }
    }
}

impl std::fmt::Display for FieldError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message())
    }
}

impl std::error::Error for FieldError {}

/// All field errors of one validation pass, in form order
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ValidationErrors(pub Vec<FieldError>);

impl ValidationErrors {
    pub fn first(&self) -> Option<&FieldError> {
        self.0.first()
    }

    /// Message for one field, used for inline hints under inputs
    pub fn for_field(&self, field: FormField) -> Option<String> {
        self.0
            .iter()
            .find(|e| e.field == field)
            .map(FieldError::message)
    }
}

impl std::fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.first() {
            Some(e) => write!(f, "{}", e),
            None => write!(f, "All fields are required"),
        }
    }
}

impl std::error::Error for ValidationErrors {}

/// Which of the two profile completion requests failed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitStep {
    Profile,
    Account,
}

impl std::fmt::Display for SubmitStep {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SubmitStep::Profile => write!(f, "profile update"),
            SubmitStep::Account => write!(f, "account creation"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ProfileError {
    #[error("Authentication required")]
    MissingAuth,
    #[error(transparent)]
    Validation(#[from] ValidationErrors),
    #[error("{step} failed: {source}")]
    Request {
        step: SubmitStep,
        #[source]
        source: ApiError,
    },
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    #[error("invalid configuration JSON: {0}")]
    Parse(String),
    #[error("invalid value for {field}: {reason}")]
    Invalid { field: &'static str, reason: String },
}

impl From<serde_json::Error> for ConfigError {
    fn from(e: serde_json::Error) -> Self {
        ConfigError::Parse(e.to_string())
    }
}

/// The description shown in a failure notification.
///
/// Priority: message from the server body, then the error's own message,
/// then [`FALLBACK_MESSAGE`].
pub fn describe(error: &ProfileError) -> String {
    match error {
        ProfileError::Request { source, .. } => describe_api(source),
        other => or_fallback(other.to_string()),
    }
}

/// Same priority rules as [`describe`], for bare API failures
pub fn describe_api(error: &ApiError) -> String {
    let message = error
        .server_message()
        .map(str::to_string)
        .unwrap_or_else(|| error.to_string());
    or_fallback(message)
}

fn or_fallback(message: String) -> String {
    if message.trim().is_empty() {
        FALLBACK_MESSAGE.to_string()
    } else {
        message
    }
}
