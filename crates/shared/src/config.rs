//! Money engine configuration.

use serde::Deserialize;

/// Configuration for display and lenient-lookup defaults.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct MoneyConfig {
    /// BCP 47 tag used when a caller does not pass a locale.
    #[serde(default = "default_locale")]
    pub default_locale: String,
    /// Exponent assumed for currency codes missing from the ISO table.
    #[serde(default = "default_fallback_exponent")]
    pub fallback_exponent: u32,
    /// Decimal places for percentage output.
    #[serde(default = "default_percentage_places")]
    pub percentage_places: u32,
}

fn default_locale() -> String {
    "en-US".to_string()
}

fn default_fallback_exponent() -> u32 {
    2
}

fn default_percentage_places() -> u32 {
    2
}

impl Default for MoneyConfig {
    fn default() -> Self {
        Self {
            default_locale: default_locale(),
            fallback_exponent: default_fallback_exponent(),
            percentage_places: default_percentage_places(),
        }
    }
}

impl MoneyConfig {
    /// Loads configuration from environment and config files.
    ///
    /// Sources, later ones winning: `config/default`, `config/{RUN_MODE}`,
    /// then `SPENDLOG__*` environment variables.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration cannot be loaded.
    pub fn load() -> Result<Self, config::ConfigError> {
        let run_mode = std::env::var("RUN_MODE").unwrap_or_else(|_| "development".to_string());

        let config = config::Config::builder()
            .add_source(config::File::with_name("config/default").required(false))
            .add_source(config::File::with_name(&format!("config/{run_mode}")).required(false))
            .add_source(
                config::Environment::with_prefix("SPENDLOG")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        config.try_deserialize()
    }
}
