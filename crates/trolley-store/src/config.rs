//! # Store Configuration
//!
//! Display configuration for the cart store.
//!
//! ## Configuration Sources (Priority Order)
//! 1. Environment variables (`TROLLEY_*`)
//! 2. Defaults (this file)
//!
//! ## Thread Safety
//! Configuration is read-only after the store is built, so no lock is
//! needed. If hot-reloading is added later, we'd wrap it in `RwLock`.

use serde::{Deserialize, Serialize};
use trolley_core::Money;

/// Cart store configuration.
///
/// ## Fields
/// Defaults suit development. Deployments targeting other currencies
/// should configure these properly.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StoreConfig {
    /// Currency symbol (for display)
    pub currency_symbol: String,

    /// Number of decimal places for currency
    /// 2 for USD/EUR, 0 for JPY
    pub currency_decimals: u8,
}

impl Default for StoreConfig {
    /// Returns default configuration suitable for development.
    ///
    /// ## Default Values
    /// - Currency: USD ($), 2 decimals
    fn default() -> Self {
        StoreConfig {
            currency_symbol: "$".to_string(),
            currency_decimals: 2,
        }
    }
}

impl StoreConfig {
    /// Creates a StoreConfig from environment variables and defaults.
    ///
    /// ## Environment Variables
    /// - `TROLLEY_CURRENCY_SYMBOL`: Override currency symbol
    /// - `TROLLEY_CURRENCY_DECIMALS`: Override decimal places (e.g., "0")
    ///
    /// Malformed values fall back to the default.
    pub fn from_env() -> Self {
        let mut config = StoreConfig::default();

        if let Ok(symbol) = std::env::var("TROLLEY_CURRENCY_SYMBOL") {
            config.currency_symbol = symbol;
        }

        if let Ok(decimals_str) = std::env::var("TROLLEY_CURRENCY_DECIMALS") {
            if let Ok(decimals) = decimals_str.parse::<u8>() {
                config.currency_decimals = decimals;
            }
        }

        config
    }

    /// Formats a money amount as a currency string.
    ///
    /// ## Example
    /// ```rust
    /// use trolley_core::Money;
    /// use trolley_store::StoreConfig;
    ///
    /// let config = StoreConfig::default();
    /// assert_eq!(config.format_currency(Money::from_cents(1234)), "$12.34");
    /// ```
    pub fn format_currency(&self, amount: Money) -> String {
        let cents = amount.cents();
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
        let config = StoreConfig::default();
        assert_eq!(config.format_currency(Money::from_cents(1234)), "$12.34");
        assert_eq!(config.format_currency(Money::from_cents(100)), "$1.00");
        assert_eq!(config.format_currency(Money::from_cents(1)), "$0.01");
        assert_eq!(config.format_currency(Money::from_cents(0)), "$0.00");
    }

    #[test]
    fn test_format_currency_negative() {
        let config = StoreConfig::default();
        assert_eq!(config.format_currency(Money::from_cents(-1234)), "-$12.34");
    }

    #[test]
    fn test_format_currency_large() {
        let config = StoreConfig::default();
        assert_eq!(
            config.format_currency(Money::from_cents(123456789)),
            "$1234567.89"
        );
    }

    #[test]
    fn test_format_currency_zero_decimals() {
        let config = StoreConfig {
            currency_symbol: "¥".to_string(),
            currency_decimals: 0,
        };
        assert_eq!(config.format_currency(Money::from_cents(1234)), "¥1234");
    }

    #[test]
    fn test_from_env_overrides() {
        std::env::set_var("TROLLEY_CURRENCY_SYMBOL", "€");
        std::env::set_var("TROLLEY_CURRENCY_DECIMALS", "0");

        let config = StoreConfig::from_env();
        assert_eq!(config.currency_symbol, "€");
        assert_eq!(config.currency_decimals, 0);

        // Malformed decimals fall back to the default
        std::env::set_var("TROLLEY_CURRENCY_DECIMALS", "lots");
        let config = StoreConfig::from_env();
        assert_eq!(config.currency_decimals, 2);

        std::env::remove_var("TROLLEY_CURRENCY_SYMBOL");
        std::env::remove_var("TROLLEY_CURRENCY_DECIMALS");
    }
}
