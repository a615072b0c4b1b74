// --- File: crates/shopauth_config/src/models.rs ---

use serde::{Deserialize, Serialize};

// --- Platform App Config ---
// Holds the app credentials registered in the partner dashboard.
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct ShopifyConfig {
    pub api_key: String, // Mandatory, appears in the post-auth app URL
    #[serde(default)]
    pub api_secret_key: String, // "secret_from_env" -> SHOPIFY_API_SECRET_KEY
    pub host_name: String, // Public host of this app, without scheme
    #[serde(default)]
    pub scopes: Vec<String>,
    #[serde(default)]
    pub use_online_tokens: bool,
}

// --- Billing Config ---
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[derive(Debug, Deserialize, Serialize, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum BillingInterval {
    #[default]
    OneTime,
    #[serde(rename = "EVERY_30_DAYS")]
    Every30Days,
    Annual,
}

/// Settings handed to the billing collaborator after a successful install.
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct BillingConfig {
    #[serde(default)]
    pub required: bool,
    #[serde(default = "default_charge_name")]
    pub charge_name: String,
    #[serde(default = "default_amount")]
    pub amount: f64,
    #[serde(default = "default_currency_code")]
    pub currency_code: String,
    #[serde(default)]
    pub interval: BillingInterval,
}

fn default_charge_name() -> String {
    "My Shopify One-Time Charge".to_string()
}

fn default_amount() -> f64 {
    5.0
}

fn default_currency_code() -> String {
    "USD".to_string()
}

impl Default for BillingConfig {
    fn default() -> Self {
        Self {
            required: false,
            charge_name: default_charge_name(),
            amount: default_amount(),
            currency_code: default_currency_code(),
            interval: BillingInterval::default(),
        }
    }
}

// --- Unified App Configuration ---
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct AppConfig {
    pub shopify: ShopifyConfig,

    // Billing is optional in the config file and defaults to not required
    #[serde(default)]
    pub billing: BillingConfig,
}
