//! Unified error handling for the storefront library.
//!
//! Module-level errors (`CartError`, `BookingError`, `ConfigError`) convert
//! into a single `StorefrontError` so a presentation layer can handle one
//! type at its boundary. [`StorefrontError::is_user_error`] separates
//! rejected user input (show a message, keep going) from configuration
//! faults (log and fail startup).

use thiserror::Error;

use crate::cart::CartError;
use crate::config::ConfigError;
use crate::vaccines::BookingError;

/// Application-level error type for the storefront.
#[derive(Debug, Error)]
pub enum StorefrontError {
    /// Cart command rejected.
    #[error("Cart error: {0}")]
    Cart(#[from] CartError),

    /// Booking selection rejected.
    #[error("Booking error: {0}")]
    Booking(#[from] BookingError),

    /// Configuration failed to load.
    #[error("Config error: {0}")]
    Config(#[from] ConfigError),
}

impl StorefrontError {
    /// Whether this error stems from user input and is safe to surface
    /// verbatim, as opposed to an internal fault worth logging.
    #[must_use]
    pub const fn is_user_error(&self) -> bool {
        match self {
            Self::Cart(_) | Self::Booking(_) => true,
            Self::Config(_) => false,
        }
    }
}

/// Result type alias for `StorefrontError`.
pub type Result<T> = std::result::Result<T, StorefrontError>;

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use medlife_core::ProductId;

    use super::*;

    #[test]
    fn test_display_includes_source() {
        let err = StorefrontError::from(CartError::ItemNotFound(ProductId::new(3)));
        assert_eq!(err.to_string(), "Cart error: no cart item with id 3");
    }

    #[test]
    fn test_classification() {
        let cart = StorefrontError::from(CartError::InvalidPromoCode("BADCODE".to_string()));
        assert!(cart.is_user_error());

        let booking = StorefrontError::from(BookingError::MissingDate);
        assert!(booking.is_user_error());

        let config = StorefrontError::from(ConfigError::InvalidEnvVar(
            "MEDLIFE_TAX_RATE".to_string(),
            "not a number".to_string(),
        ));
        assert!(!config.is_user_error());
    }
}
