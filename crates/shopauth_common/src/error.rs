use thiserror::Error;

/// The base error type shared by the shopauth crates.
///
/// Crate-specific errors convert into this via `From` so handlers can turn any
/// failure into an HTTP response the same way.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ShopAuthError {
    /// The OAuth callback was rejected by the platform SDK
    #[error("Invalid OAuth callback: {0}")]
    InvalidOAuth(String),

    /// The request did not name a usable shop
    #[error("No shop provided")]
    MissingShop,

    /// An injected collaborator (SDK, webhook registry, billing) failed
    #[error("External service error: {service_name} - {message}")]
    ExternalServiceError {
        service_name: String,
        message: String,
    },

    #[error("Internal error: {0}")]
    InternalError(String),
}

impl ShopAuthError {
    /// The text sent to the browser. Unlike `Display` it carries no category prefix.
    pub fn public_message(&self) -> String {
        match self {
            ShopAuthError::InvalidOAuth(msg)
            | ShopAuthError::InternalError(msg) => msg.clone(),
            ShopAuthError::MissingShop => "No shop provided".to_string(),
            ShopAuthError::ExternalServiceError { message, .. } => message.clone(),
        }
    }
}

/// A trait for converting errors to HTTP status codes.
pub trait HttpStatusCode {
    /// Returns the HTTP status code for this error.
    fn status_code(&self) -> u16;
}

impl HttpStatusCode for ShopAuthError {
    fn status_code(&self) -> u16 {
        match self {
            ShopAuthError::InvalidOAuth(_) => 400,
            ShopAuthError::MissingShop => 500,
            ShopAuthError::ExternalServiceError { .. } => 500,
            ShopAuthError::InternalError(_) => 500,
        }
    }
}

/// Errors raised by the platform SDK while validating an OAuth callback.
///
/// Each kind calls for a different recovery, so callers match on the variant.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum CallbackError {
    /// Bad HMAC, state mismatch, malformed query. The merchant can retry.
    #[error("{0}")]
    InvalidOAuth(String),

    /// The pre-auth cookie is gone, usually because it expired.
    #[error("{0}")]
    CookieNotFound(String),

    /// The pre-auth session referenced by the cookie no longer exists.
    #[error("{0}")]
    SessionNotFound(String),

    #[error("{0}")]
    Other(String),
}

impl CallbackError {
    /// True for the kinds that mean "start the OAuth flow again".
    pub fn is_expired_session(&self) -> bool {
        matches!(
            self,
            CallbackError::CookieNotFound(_) | CallbackError::SessionNotFound(_)
        )
    }
}

/// Errors from the other SDK collaborators (auth start, webhooks, billing).
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SdkError {
    #[error("{0}")]
    Http(String),

    #[error("{message}")]
    Api { status_code: u16, message: String },

    #[error("{0}")]
    Other(String),
}

// Utility functions for error handling
pub fn external_service_error<T: std::fmt::Display>(service_name: &str, message: T) -> ShopAuthError {
    ShopAuthError::ExternalServiceError {
        service_name: service_name.to_string(),
        message: message.to_string(),
    }
}

pub fn internal_error<T: std::fmt::Display>(message: T) -> ShopAuthError {
    ShopAuthError::InternalError(message.to_string())
}
