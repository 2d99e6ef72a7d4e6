//! Application configuration management.

use std::collections::HashMap;

use serde::Deserialize;

/// Application configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    /// Marketplace configuration.
    #[serde(default)]
    pub marketplace: MarketplaceConfig,
}

/// Marketplace configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct MarketplaceConfig {
    /// Shop base currency code, the platform-wide default.
    #[serde(default = "default_base_currency")]
    pub base_currency: String,
    /// Human-readable display names keyed by currency code.
    #[serde(default)]
    pub currency_names: HashMap<String, String>,
    /// Additional currencies the currency switcher enables beyond the base.
    ///
    /// Empty means the storefront runs in single-currency mode.
    #[serde(default)]
    pub extra_currencies: Vec<String>,
}

fn default_base_currency() -> String {
    "USD".to_string()
}

impl Default for MarketplaceConfig {
    fn default() -> Self {
        Self {
            base_currency: default_base_currency(),
            currency_names: HashMap::new(),
            extra_currencies: Vec::new(),
        }
    }
}

impl AppConfig {
    /// Loads configuration from environment and config files.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration cannot be loaded.
    pub fn load() -> Result<Self, config::ConfigError> {
        let run_mode = std::env::var("RUN_MODE").unwrap_or_else(|_| "development".to_string());

        let config = config::Config::builder()
            .add_source(config::File::with_name("config/default").required(false))
            .add_source(config::File::with_name(&format!("config/{run_mode}")).required(false))
            .add_source(config::Environment::with_prefix("VENDRA").separator("__"))
            .build()?;

        config.try_deserialize()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use config::FileFormat;

    fn from_toml(toml: &str) -> AppConfig {
        config::Config::builder()
            .add_source(config::File::from_str(toml, FileFormat::Toml))
            .build()
            .unwrap()
            .try_deserialize()
            .unwrap()
    }

    #[test]
    fn test_empty_config_falls_back_to_defaults() {
        let cfg = from_toml("");
        assert_eq!(cfg.marketplace.base_currency, "USD");
    }

    #[test]
    fn test_marketplace_defaults() {
        let cfg = from_toml("[marketplace]\n");
        assert_eq!(cfg.marketplace.base_currency, "USD");
        assert!(cfg.marketplace.currency_names.is_empty());
        assert!(cfg.marketplace.extra_currencies.is_empty());
    }

    #[test]
    fn test_marketplace_full_section() {
        let cfg = from_toml(
            r#"
            [marketplace]
            base_currency = "EUR"
            extra_currencies = ["USD", "GBP"]

            [marketplace.currency_names]
            EUR = "Euro"
            USD = "US Dollar"
            "#,
        );
        assert_eq!(cfg.marketplace.base_currency, "EUR");
        assert_eq!(cfg.marketplace.extra_currencies, vec!["USD", "GBP"]);
        assert_eq!(
            cfg.marketplace.currency_names.get("EUR").map(String::as_str),
            Some("Euro")
        );
    }
}
