//! Storefront configuration loaded from environment variables.
//!
//! # Environment Variables
//!
//! All optional:
//! - `TRAILCASE_CATALOG` - Path to the catalog JSON document
//!   (default: `assets/data.json`)
//! - `TRAILCASE_CART` - Path to the persisted cart slot
//!   (default: `.trailcase/cart.json`)

use std::path::PathBuf;

/// Default location of the catalog document, relative to the working
/// directory (the same way each page fetched it by relative path).
const DEFAULT_CATALOG_PATH: &str = "assets/data.json";

/// Default location of the cart slot file.
const DEFAULT_CART_PATH: &str = ".trailcase/cart.json";

/// Storefront application configuration.
#[derive(Debug, Clone)]
pub struct StorefrontConfig {
    /// Path to the catalog JSON document.
    pub catalog_path: PathBuf,
    /// Path to the persisted cart slot.
    pub cart_path: PathBuf,
}

impl StorefrontConfig {
    /// Load configuration from environment variables.
    ///
    /// Calls `dotenvy::dotenv()` to load from a `.env` file if present.
    /// Every variable has a default, so loading cannot fail.
    #[must_use]
    pub fn from_env() -> Self {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();

        Self {
            catalog_path: get_env_or_default("TRAILCASE_CATALOG", DEFAULT_CATALOG_PATH).into(),
            cart_path: get_env_or_default("TRAILCASE_CART", DEFAULT_CART_PATH).into(),
        }
    }
}

impl Default for StorefrontConfig {
    fn default() -> Self {
        Self {
            catalog_path: DEFAULT_CATALOG_PATH.into(),
            cart_path: DEFAULT_CART_PATH.into(),
        }
    }
}

/// Get an environment variable with a default value.
fn get_env_or_default(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}
