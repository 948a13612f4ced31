//! # Storefront Configuration
//!
//! Stores per-store settings loaded at startup.
//!
//! ## Configuration Sources (Priority Order)
//! 1. Environment variables (`VITRINE_*`)
//! 2. Defaults (this file)
//!
//! ## Thread Safety
//! Configuration is read-only after initialization, so no mutex needed.
//! If hot-reloading is added later, we'd wrap in `RwLock`.

use serde::{Deserialize, Serialize};

/// Storefront configuration.
///
/// ## Fields
/// Most fields have sensible defaults for development.
/// Production deployments should configure these properly.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StorefrontConfig {
    /// Store name (displayed in page titles)
    pub store_name: String,

    /// Currency code (ISO 4217)
    pub currency_code: String,

    /// Currency symbol (for display)
    pub currency_symbol: String,

    /// Number of decimal places for currency
    pub currency_decimals: u8,

    /// Quantity used when a submission does not carry one.
    /// The product page form has no quantity input, so this is
    /// what every plain "Add To Cart" click adds.
    pub default_quantity: i64,
}

impl Default for StorefrontConfig {
    /// Returns default configuration suitable for development.
    ///
    /// ## Default Values
    /// - Store: "Vitrine Dev Store"
    /// - Currency: USD ($)
    /// - Default quantity: 1
    fn default() -> Self {
        StorefrontConfig {
            store_name: "Vitrine Dev Store".to_string(),
            currency_code: "USD".to_string(),
            currency_symbol: "$".to_string(),
            currency_decimals: 2,
            default_quantity: 1,
        }
    }
}

impl StorefrontConfig {
    /// Creates a new StorefrontConfig from environment variables and defaults.
    ///
    /// ## Environment Variables
    /// - `VITRINE_STORE_NAME`: Override store name
    /// - `VITRINE_CURRENCY_CODE`: Override currency code
    /// - `VITRINE_CURRENCY_SYMBOL`: Override currency symbol
    /// - `VITRINE_DEFAULT_QUANTITY`: Override default add quantity
    pub fn from_env() -> Self {
        let mut config = StorefrontConfig::default();

        if let Ok(store_name) = std::env::var("VITRINE_STORE_NAME") {
            config.store_name = store_name;
        }

        if let Ok(currency_code) = std::env::var("VITRINE_CURRENCY_CODE") {
            config.currency_code = currency_code;
        }

        if let Ok(currency_symbol) = std::env::var("VITRINE_CURRENCY_SYMBOL") {
            config.currency_symbol = currency_symbol;
        }

        if let Ok(quantity_str) = std::env::var("VITRINE_DEFAULT_QUANTITY") {
            if let Ok(quantity) = quantity_str.parse::<i64>() {
                config.default_quantity = quantity;
            }
        }

        config
    }

    /// Formats a cent amount as a currency string.
    ///
    /// ## Example
    /// ```rust,ignore
    /// let config = StorefrontConfig::default();
    /// assert_eq!(config.format_currency(1234), "$12.34");
    /// ```
    pub fn format_currency(&self, cents: i64) -> String {
        let divisor = 10_i64.pow(self.currency_decimals as u32);
        let whole = cents / divisor;
        let frac = (cents % divisor).abs();

        format!(
            "{}{}{}",
            if cents < 0 { "-" } else { "" },
            self.currency_symbol,
            if self.currency_decimals > 0 {
                format!(
                    "{}.{:0width$}",
                    whole.abs(),
                    frac,
                    width = self.currency_decimals as usize
                )
            } else {
                whole.abs().to_string()
            }
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_currency_positive() {
        let config = StorefrontConfig::default();
        assert_eq!(config.format_currency(1234), "$12.34");
        assert_eq!(config.format_currency(100), "$1.00");
        assert_eq!(config.format_currency(1), "$0.01");
        assert_eq!(config.format_currency(0), "$0.00");
    }

    #[test]
    fn test_format_currency_negative() {
        let config = StorefrontConfig::default();
        assert_eq!(config.format_currency(-1234), "-$12.34");
    }

    #[test]
    fn test_format_currency_zero_decimals() {
        let config = StorefrontConfig {
            currency_code: "JPY".to_string(),
            currency_symbol: "¥".to_string(),
            currency_decimals: 0,
            ..StorefrontConfig::default()
        };
        assert_eq!(config.format_currency(123), "¥123");
        assert_eq!(config.format_currency(-45), "-¥45");
    }

    #[test]
    fn test_default_quantity() {
        let config = StorefrontConfig::default();
        assert_eq!(config.default_quantity, 1);
    }
}
