use shopauth_common::{external_service_error, CallbackError, SdkError, ShopAuthError};
use thiserror::Error;

/// Everything that can go wrong between the callback arriving and the final redirect.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum AuthFlowError {
    /// Raised by the SDK's callback validator
    #[error(transparent)]
    Callback(#[from] CallbackError),

    /// Recording the granted scope failed
    #[error("{0}")]
    Store(SdkError),

    /// The webhook registry call itself failed (per-topic failures are only logged)
    #[error("{0}")]
    Webhooks(SdkError),

    /// The billing collaborator failed
    #[error("{0}")]
    Billing(SdkError),

    /// The `host` query parameter is missing or does not decode to an admin path
    #[error("{0}")]
    Host(String),
}

impl AuthFlowError {
    /// The pre-auth cookie or session expired; the merchant has to go through OAuth again.
    pub fn restarts_auth(&self) -> bool {
        matches!(self, AuthFlowError::Callback(err) if err.is_expired_session())
    }
}

/// Convert AuthFlowError to ShopAuthError.
///
/// Only an invalid OAuth callback is the merchant's problem (400). Everything
/// else, including the expired-session kinds when they are not recovered, is a 500.
impl From<AuthFlowError> for ShopAuthError {
    fn from(err: AuthFlowError) -> Self {
        match err {
            AuthFlowError::Callback(CallbackError::InvalidOAuth(msg)) => ShopAuthError::InvalidOAuth(msg),
            AuthFlowError::Callback(
                CallbackError::CookieNotFound(msg)
                | CallbackError::SessionNotFound(msg)
                | CallbackError::Other(msg),
            ) => ShopAuthError::InternalError(msg),
            AuthFlowError::Store(e) => external_service_error("Shop scope store", e),
            AuthFlowError::Webhooks(e) => external_service_error("Webhook registry", e),
            AuthFlowError::Billing(e) => external_service_error("Billing", e),
            AuthFlowError::Host(msg) => ShopAuthError::InternalError(msg),
        }
    }
}
