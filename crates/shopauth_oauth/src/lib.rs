// --- File: crates/shopauth_oauth/src/lib.rs ---

pub mod doc;
pub mod error;
pub mod handlers;
pub mod logic;
pub mod redirect;
pub mod routes;
pub mod store;

// Re-export for the host application
pub use error::AuthFlowError;
pub use handlers::OAuthState;
pub use logic::{app_redirect_url, complete_callback, failed_registrations, GDPR_TOPICS};
pub use redirect::{redirect_to_auth, sanitize_shop, AUTH_PATH, CALLBACK_PATH};
pub use routes::{install_routes, routes};
pub use store::InMemoryShopScopeStore;
