use crate::rates::parse_rate_input;
use rust_decimal::Decimal;
use shared::models::RateConfiguration;

/// Calculator configuration
///
/// # Environment variables
///
/// Every setting can be overridden from the environment (or a `.env` file):
///
/// | Variable | Default | Meaning |
/// |----------|---------|---------|
/// | PAYROLL_BASE_RATE | 100 | Initial base rate ($/hour) |
/// | PAYROLL_NIGHT_A_INCREASE | 20 | Initial Night A premium (%) |
/// | PAYROLL_NIGHT_B_INCREASE | 27.5 | Initial Night B premium (%) |
/// | LOG_LEVEL | info | Log level |
/// | LOG_DIR | (unset) | Directory for daily rolling log files |
/// | ENVIRONMENT | development | Environment name |
///
/// Values that do not parse fall back to the default.
///
/// # Example
///
/// ```ignore
/// PAYROLL_BASE_RATE=125 LOG_LEVEL=debug cargo run -p payroll-calc
/// ```
#[derive(Debug, Clone)]
pub struct Config {
    /// Rates the session starts with
    pub rates: RateConfiguration,
    pub log_level: String,
    pub log_dir: Option<String>,
    /// development | staging | production
    pub environment: String,
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load configuration from an arbitrary key lookup
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = RateConfiguration::default();
        let rate = |key: &str, default: Option<Decimal>| {
            lookup(key)
                .and_then(|v| parse_rate_input(&v).ok().flatten())
                .or(default)
        };

        Self {
            rates: RateConfiguration {
                base_rate: rate("PAYROLL_BASE_RATE", defaults.base_rate),
                night_a_increase: rate("PAYROLL_NIGHT_A_INCREASE", defaults.night_a_increase),
                night_b_increase: rate("PAYROLL_NIGHT_B_INCREASE", defaults.night_b_increase),
            },
            log_level: lookup("LOG_LEVEL").unwrap_or_else(|| "info".into()),
            log_dir: lookup("LOG_DIR").filter(|d| !d.trim().is_empty()),
            environment: lookup("ENVIRONMENT").unwrap_or_else(|| "development".into()),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::from_lookup(|_| None)
    }
}
