//! Status enums for checkout and vaccination entities.

use serde::{Deserialize, Serialize};

/// Checkout progress step.
///
/// The stepper is advance-only: within a session the step number never
/// decreases, and it saturates at [`CheckoutStep::Confirmation`].
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Default,
)]
#[serde(rename_all = "snake_case")]
pub enum CheckoutStep {
    #[default]
    Cart,
    Address,
    Payment,
    Confirmation,
}

impl CheckoutStep {
    /// All steps in order, for rendering a progress bar.
    pub const ALL: [Self; 4] = [Self::Cart, Self::Address, Self::Payment, Self::Confirmation];

    /// 1-based ordinal of this step.
    #[must_use]
    pub const fn number(self) -> u8 {
        match self {
            Self::Cart => 1,
            Self::Address => 2,
            Self::Payment => 3,
            Self::Confirmation => 4,
        }
    }

    /// Short title shown on the stepper.
    #[must_use]
    pub const fn title(self) -> &'static str {
        match self {
            Self::Cart => "Cart",
            Self::Address => "Address",
            Self::Payment => "Payment",
            Self::Confirmation => "Confirmation",
        }
    }

    /// One-line description shown under the title.
    #[must_use]
    pub const fn description(self) -> &'static str {
        match self {
            Self::Cart => "Review items",
            Self::Address => "Delivery details",
            Self::Payment => "Payment method",
            Self::Confirmation => "Order confirmed",
        }
    }

    /// The following step; the final step returns itself.
    #[must_use]
    pub const fn next(self) -> Self {
        match self {
            Self::Cart => Self::Address,
            Self::Address => Self::Payment,
            Self::Payment | Self::Confirmation => Self::Confirmation,
        }
    }

    /// Whether this is the final step.
    #[must_use]
    pub const fn is_final(self) -> bool {
        matches!(self, Self::Confirmation)
    }

    /// Completion percentage for a 4-step progress bar.
    #[must_use]
    pub const fn progress_percent(self) -> u8 {
        (self.number() as u16 * 100 / 4) as u8
    }
}

impl std::fmt::Display for CheckoutStep {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.title())
    }
}

/// Vaccine grouping used for badges and filtering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum VaccineCategory {
    Essential,
    Seasonal,
    Travel,
    AgeSpecific,
}

impl VaccineCategory {
    /// Human-readable label.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Essential => "Essential",
            Self::Seasonal => "Seasonal",
            Self::Travel => "Travel",
            Self::AgeSpecific => "Age-specific",
        }
    }
}

impl std::fmt::Display for VaccineCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

impl std::str::FromStr for VaccineCategory {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Essential" => Ok(Self::Essential),
            "Seasonal" => Ok(Self::Seasonal),
            "Travel" => Ok(Self::Travel),
            "Age-specific" => Ok(Self::AgeSpecific),
            _ => Err(format!("invalid vaccine category: {s}")),
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_step_numbers_are_ordinal() {
        for (i, step) in CheckoutStep::ALL.into_iter().enumerate() {
            assert_eq!(usize::from(step.number()), i + 1);
        }
    }

    #[test]
    fn test_step_advance_is_monotonic() {
        let mut step = CheckoutStep::Cart;
        let mut previous = step.number();
        for _ in 0..6 {
            step = step.next();
            assert!(step.number() >= previous);
            previous = step.number();
        }
        assert_eq!(step, CheckoutStep::Confirmation);
    }

    #[test]
    fn test_final_step_saturates() {
        assert_eq!(
            CheckoutStep::Confirmation.next(),
            CheckoutStep::Confirmation
        );
        assert!(CheckoutStep::Confirmation.is_final());
        assert!(!CheckoutStep::Payment.is_final());
    }

    #[test]
    fn test_progress_percent() {
        assert_eq!(CheckoutStep::Cart.progress_percent(), 25);
        assert_eq!(CheckoutStep::Confirmation.progress_percent(), 100);
    }

    #[test]
    fn test_category_labels() {
        assert_eq!(VaccineCategory::AgeSpecific.label(), "Age-specific");
        assert_eq!(
            "Age-specific".parse::<VaccineCategory>().unwrap(),
            VaccineCategory::AgeSpecific
        );
        assert!("Unknown".parse::<VaccineCategory>().is_err());
    }

    #[test]
    fn test_step_ordering_matches_numbers() {
        assert!(CheckoutStep::Cart < CheckoutStep::Address);
        assert!(CheckoutStep::Payment < CheckoutStep::Confirmation);
    }
}
