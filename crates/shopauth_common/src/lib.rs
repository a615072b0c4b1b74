// --- File: crates/shopauth_common/src/lib.rs ---

pub mod error; // Error handling
pub mod http; // HTTP utilities
pub mod logging; // Logging utilities
pub mod services; // SDK collaborator abstractions

// Re-export error types and utilities for easier access
pub use error::{
    external_service_error, internal_error, CallbackError, HttpStatusCode,
    SdkError, ShopAuthError,
};

pub use self::http::{found, handle_result};

pub use logging::{init, init_with_level};

pub use services::{
    AuthQuery, AuthServices, BeginAuth, BillingService, BoxFuture, OAuthSdk, RegisterResult,
    RegisterReturn, Session, ShopScopeStore, WebhookRegistry,
};
