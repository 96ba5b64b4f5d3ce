//! Shop configuration loaded from environment variables.
//!
//! # Environment Variables
//!
//! All optional:
//! - `MERCADITO_ORDER_EMAIL` - Checkout order recipient (default: orders@example.com)
//! - `MERCADITO_CLEAR_CART_ON_SUBMIT` - Clear the cart after a successful
//!   checkout, `true`/`false`/`1`/`0` (default: false)
//! - `MERCADITO_PLACEHOLDER_IMAGE` - Image used when the admin form leaves
//!   the image blank (default: /placeholder.svg)
//! - `MERCADITO_SEED_CATALOG` - Start with the sample product,
//!   `true`/`false`/`1`/`0` (default: true)

use thiserror::Error;

/// Configuration errors that can occur during loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid environment variable {0}: {1}")]
    InvalidEnvVar(String, String),
}

/// Shop configuration.
#[derive(Debug, Clone)]
pub struct ShopConfig {
    /// Address the composed order mail is addressed to.
    pub order_email: String,
    /// Whether a successful checkout empties the cart. The observed demo
    /// behavior keeps the cart, so this defaults to false.
    pub clear_cart_on_submit: bool,
    /// Image URI used when a product is created without one.
    pub placeholder_image: String,
    /// Whether the catalog starts with the sample product.
    pub seed_catalog: bool,
}

impl Default for ShopConfig {
    fn default() -> Self {
        Self {
            order_email: "orders@example.com".to_owned(),
            clear_cart_on_submit: false,
            placeholder_image: "/placeholder.svg".to_owned(),
            seed_catalog: true,
        }
    }
}

impl ShopConfig {
    /// Load configuration from environment variables.
    ///
    /// Calls `dotenvy::dotenv()` to load from `.env` file if present.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if a boolean variable is set but unparseable.
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();

        let defaults = Self::default();
        Ok(Self {
            order_email: get_env_or("MERCADITO_ORDER_EMAIL", &defaults.order_email),
            clear_cart_on_submit: get_bool_env(
                "MERCADITO_CLEAR_CART_ON_SUBMIT",
                defaults.clear_cart_on_submit,
            )?,
            placeholder_image: get_env_or("MERCADITO_PLACEHOLDER_IMAGE", &defaults.placeholder_image),
            seed_catalog: get_bool_env("MERCADITO_SEED_CATALOG", defaults.seed_catalog)?,
        })
    }
}

// =============================================================================
// Helper Functions
// =============================================================================

/// Get an environment variable with a default value.
fn get_env_or(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_owned())
}

/// Get a boolean environment variable, accepting `true`/`false`/`1`/`0`.
fn get_bool_env(key: &str, default: bool) -> Result<bool, ConfigError> {
    match std::env::var(key) {
        Err(_) => Ok(default),
        Ok(value) => parse_bool(&value)
            .ok_or_else(|| ConfigError::InvalidEnvVar(key.to_owned(), format!("not a boolean: {value:?}"))),
    }
}

fn parse_bool(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "true" | "1" => Some(true),
        "false" | "0" => Some(false),
        _ => None,
    }
}
