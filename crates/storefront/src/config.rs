//! Pricing configuration with environment variable overrides.
//!
//! Every value has a built-in default matching the storefront's standard
//! pricing rules, so `PricingConfig::default()` needs no environment at
//! all. Deployments can override individual rules:
//!
//! # Environment Variables
//!
//! - `MEDLIFE_PROMO_CODE` - Recognized promo code (default: HEALTH20)
//! - `MEDLIFE_PROMO_DISCOUNT_RATE` - Discount fraction (default: 0.20)
//! - `MEDLIFE_TAX_RATE` - Tax fraction applied after discount (default: 0.08)
//! - `MEDLIFE_FREE_SHIPPING_THRESHOLD` - Subtotal above which shipping is
//!   free (default: 50.00)
//! - `MEDLIFE_STANDARD_SHIPPING` - Flat shipping fee below the threshold
//!   (default: 5.99)
//! - `MEDLIFE_LOYALTY_POINTS_PER_DOLLAR` - Points earned per total dollar
//!   (default: 10)

use medlife_core::Money;
use rust_decimal::Decimal;
use thiserror::Error;

/// Configuration errors that can occur during loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid environment variable {0}: {1}")]
    InvalidEnvVar(String, String),
    #[error("Out-of-range value in {0}: {1}")]
    OutOfRange(String, String),
}

/// Pricing rules used by the cart engine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PricingConfig {
    /// Recognized promo code, stored uppercase
    pub promo_code: String,
    /// Fraction of the subtotal discounted when the promo is applied
    pub promo_discount_rate: Decimal,
    /// Tax fraction applied to the discounted subtotal
    pub tax_rate: Decimal,
    /// Pre-discount subtotal strictly above which shipping is free
    pub free_shipping_threshold: Money,
    /// Flat shipping fee charged at or below the threshold
    pub standard_shipping: Money,
    /// Loyalty points earned per dollar of the grand total
    pub loyalty_points_per_dollar: u32,
}

impl Default for PricingConfig {
    fn default() -> Self {
        Self {
            promo_code: "HEALTH20".to_string(),
            promo_discount_rate: Decimal::new(20, 2),
            tax_rate: Decimal::new(8, 2),
            free_shipping_threshold: Money::from_cents(5000),
            standard_shipping: Money::from_cents(599),
            loyalty_points_per_dollar: 10,
        }
    }
}

impl PricingConfig {
    /// Load configuration from environment variables, falling back to the
    /// defaults for anything unset.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if a set variable does not parse, or if a
    /// rate falls outside `[0, 1]` / an amount is negative.
    pub fn from_env() -> Result<Self, ConfigError> {
        let defaults = Self::default();

        let promo_code = get_env_or_default("MEDLIFE_PROMO_CODE", &defaults.promo_code)
            .trim()
            .to_uppercase();
        let promo_discount_rate = get_decimal_env(
            "MEDLIFE_PROMO_DISCOUNT_RATE",
            defaults.promo_discount_rate,
        )?;
        let tax_rate = get_decimal_env("MEDLIFE_TAX_RATE", defaults.tax_rate)?;
        let free_shipping_threshold = get_money_env(
            "MEDLIFE_FREE_SHIPPING_THRESHOLD",
            defaults.free_shipping_threshold,
        )?;
        let standard_shipping =
            get_money_env("MEDLIFE_STANDARD_SHIPPING", defaults.standard_shipping)?;
        let loyalty_points_per_dollar = get_u32_env(
            "MEDLIFE_LOYALTY_POINTS_PER_DOLLAR",
            defaults.loyalty_points_per_dollar,
        )?;

        validate_rate(promo_discount_rate, "MEDLIFE_PROMO_DISCOUNT_RATE")?;
        validate_rate(tax_rate, "MEDLIFE_TAX_RATE")?;
        validate_amount(free_shipping_threshold, "MEDLIFE_FREE_SHIPPING_THRESHOLD")?;
        validate_amount(standard_shipping, "MEDLIFE_STANDARD_SHIPPING")?;

        Ok(Self {
            promo_code,
            promo_discount_rate,
            tax_rate,
            free_shipping_threshold,
            standard_shipping,
            loyalty_points_per_dollar,
        })
    }
}

// =============================================================================
// Helper Functions
// =============================================================================

/// Get an environment variable with a default value.
fn get_env_or_default(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}

/// Get an optional decimal environment variable.
fn get_decimal_env(key: &str, default: Decimal) -> Result<Decimal, ConfigError> {
    match std::env::var(key) {
        Ok(value) => parse_decimal(&value)
            .map_err(|e| ConfigError::InvalidEnvVar(key.to_string(), e)),
        Err(_) => Ok(default),
    }
}

/// Get an optional monetary environment variable.
fn get_money_env(key: &str, default: Money) -> Result<Money, ConfigError> {
    match std::env::var(key) {
        Ok(value) => parse_decimal(&value)
            .map(Money::new)
            .map_err(|e| ConfigError::InvalidEnvVar(key.to_string(), e)),
        Err(_) => Ok(default),
    }
}

/// Get an optional integer environment variable.
fn get_u32_env(key: &str, default: u32) -> Result<u32, ConfigError> {
    match std::env::var(key) {
        Ok(value) => value
            .trim()
            .parse::<u32>()
            .map_err(|e| ConfigError::InvalidEnvVar(key.to_string(), e.to_string())),
        Err(_) => Ok(default),
    }
}

/// Parse a decimal from a string, trimming surrounding whitespace.
fn parse_decimal(value: &str) -> Result<Decimal, String> {
    value
        .trim()
        .parse::<Decimal>()
        .map_err(|e| e.to_string())
}

/// Validate that a fraction lies in `[0, 1]`.
fn validate_rate(rate: Decimal, var_name: &str) -> Result<(), ConfigError> {
    if rate < Decimal::ZERO || rate > Decimal::ONE {
        return Err(ConfigError::OutOfRange(
            var_name.to_string(),
            format!("rate must be between 0 and 1 (got {rate})"),
        ));
    }
    Ok(())
}

/// Validate that a monetary amount is non-negative.
fn validate_amount(amount: Money, var_name: &str) -> Result<(), ConfigError> {
    if amount < Money::ZERO {
        return Err(ConfigError::OutOfRange(
            var_name.to_string(),
            format!("amount must be non-negative (got {amount})"),
        ));
    }
    Ok(())
}
