//! Shopping cart engine.
//!
//! The cart owns its line items, the applied-promo state, and the checkout
//! stepper, and derives all financial totals on demand. Nothing is cached:
//! [`Cart::totals`] recomputes from scratch on every call, so a totals query
//! always reflects the items as they stand.
//!
//! Mutations return explicit `Result`s (`ItemNotFound`, `InvalidPromoCode`)
//! rather than silently ignoring bad input; the presentation layer decides
//! whether to surface them.

use medlife_core::{CheckoutStep, Money, ProductId};
use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::config::PricingConfig;

/// Errors returned by cart commands.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CartError {
    /// No line item with the given id exists in the cart.
    #[error("no cart item with id {0}")]
    ItemNotFound(ProductId),

    /// A line item with the given id is already in the cart.
    #[error("cart already contains item {0}")]
    DuplicateItem(ProductId),

    /// Line items must enter the cart with a quantity of at least 1.
    #[error("cart items require a quantity of at least 1")]
    ZeroQuantity,

    /// The submitted promo code is not recognized.
    #[error("unrecognized promo code: {0}")]
    InvalidPromoCode(String),
}

/// One product entry in the cart.
///
/// `name`, `brand`, `unit_price`, and `delivery_estimate` are fixed at
/// creation; only `quantity` changes over the item's lifetime. An item whose
/// quantity reaches zero is removed from the cart, never retained.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LineItem {
    pub id: ProductId,
    pub name: String,
    pub brand: String,
    pub unit_price: Money,
    pub quantity: u32,
    pub delivery_estimate: String,
    /// Display-only stock flag; checkout eligibility is the caller's concern.
    pub in_stock: bool,
}

impl LineItem {
    /// Price of this line: unit price times quantity.
    #[must_use]
    pub fn line_total(&self) -> Money {
        self.unit_price * self.quantity
    }
}

/// Promo code state.
///
/// Once a recognized code has been accepted, `applied` stays set even if the
/// cart contents change afterwards; there is no re-validation on item
/// mutation and no remove-promo command.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct PromoState {
    code: Option<String>,
    applied: bool,
}

impl PromoState {
    /// The last accepted code, normalized to uppercase.
    #[must_use]
    pub fn code(&self) -> Option<&str> {
        self.code.as_deref()
    }

    /// Whether a recognized code has been accepted.
    #[must_use]
    pub const fn is_applied(&self) -> bool {
        self.applied
    }
}

/// Derived cart totals.
///
/// Computed fresh on every [`Cart::totals`] call, never stored. Monetary
/// fields keep full decimal precision; use [`Money::rounded`] (or `Display`)
/// for two-decimal presentation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CartTotals {
    /// Sum of unit price times quantity over all items.
    pub subtotal: Money,
    /// Promo discount (a fraction of the subtotal), zero when not applied.
    pub discount: Money,
    /// Tax on the discounted subtotal.
    pub tax: Money,
    /// Flat fee, waived when the pre-discount subtotal clears the threshold.
    pub shipping: Money,
    /// `subtotal - discount + tax + shipping`.
    pub total: Money,
    /// `floor(total * points-per-dollar)`, informational only.
    pub loyalty_points: u64,
}

/// The cart engine: line items, promo state, checkout step, pricing rules.
#[derive(Debug, Clone)]
pub struct Cart {
    items: Vec<LineItem>,
    promo: PromoState,
    step: CheckoutStep,
    pricing: PricingConfig,
}

impl Default for Cart {
    fn default() -> Self {
        Self::new()
    }
}

impl Cart {
    /// Create an empty cart with the standard pricing rules.
    #[must_use]
    pub fn new() -> Self {
        Self::with_pricing(PricingConfig::default())
    }

    /// Create an empty cart with explicit pricing rules.
    #[must_use]
    pub fn with_pricing(pricing: PricingConfig) -> Self {
        Self {
            items: Vec::new(),
            promo: PromoState::default(),
            step: CheckoutStep::Cart,
            pricing,
        }
    }

    /// The line items, in insertion order.
    #[must_use]
    pub fn items(&self) -> &[LineItem] {
        &self.items
    }

    /// Number of distinct line items.
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Whether the cart holds no items.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Look up a line item by id.
    #[must_use]
    pub fn item(&self, id: ProductId) -> Option<&LineItem> {
        self.items.iter().find(|item| item.id == id)
    }

    /// The promo code state.
    #[must_use]
    pub const fn promo(&self) -> &PromoState {
        &self.promo
    }

    /// The current checkout step.
    #[must_use]
    pub const fn step(&self) -> CheckoutStep {
        self.step
    }

    /// The pricing rules in effect.
    #[must_use]
    pub const fn pricing(&self) -> &PricingConfig {
        &self.pricing
    }

    /// Append a line item to the cart.
    ///
    /// This is how the presentation layer seeds the initial cart and how a
    /// catalog collaborator adds products later.
    ///
    /// # Errors
    ///
    /// Returns [`CartError::DuplicateItem`] if an item with the same id is
    /// already present, or [`CartError::ZeroQuantity`] if `item.quantity`
    /// is zero.
    pub fn add_item(&mut self, item: LineItem) -> Result<&[LineItem], CartError> {
        if item.quantity == 0 {
            return Err(CartError::ZeroQuantity);
        }
        if self.item(item.id).is_some() {
            return Err(CartError::DuplicateItem(item.id));
        }

        tracing::debug!(id = %item.id, quantity = item.quantity, "item added to cart");
        self.items.push(item);
        Ok(&self.items)
    }

    /// Adjust a line item's quantity by a signed delta.
    ///
    /// The new quantity is clamped at zero, and an item that reaches zero
    /// is removed from the cart. Totals queries reflect the change
    /// immediately.
    ///
    /// # Errors
    ///
    /// Returns [`CartError::ItemNotFound`] if no item has the given id.
    pub fn update_quantity(
        &mut self,
        id: ProductId,
        delta: i32,
    ) -> Result<&[LineItem], CartError> {
        let index = self
            .items
            .iter()
            .position(|item| item.id == id)
            .ok_or(CartError::ItemNotFound(id))?;

        let new_quantity = self.items.get(index).map_or(0, |item| {
            let adjusted = i64::from(item.quantity) + i64::from(delta);
            u32::try_from(adjusted.max(0)).unwrap_or(u32::MAX)
        });

        if new_quantity == 0 {
            tracing::debug!(%id, "item removed on zero quantity");
            self.items.remove(index);
        } else if let Some(item) = self.items.get_mut(index) {
            item.quantity = new_quantity;
        }
        Ok(&self.items)
    }

    /// Remove a line item unconditionally.
    ///
    /// # Errors
    ///
    /// Returns [`CartError::ItemNotFound`] if no item has the given id.
    pub fn remove_item(&mut self, id: ProductId) -> Result<&[LineItem], CartError> {
        let index = self
            .items
            .iter()
            .position(|item| item.id == id)
            .ok_or(CartError::ItemNotFound(id))?;

        tracing::debug!(%id, "item removed from cart");
        self.items.remove(index);
        Ok(&self.items)
    }

    /// Submit a promo code.
    ///
    /// The code is normalized (trimmed, uppercased) before comparison.
    /// Reapplying an already-accepted code is a no-op success.
    ///
    /// # Errors
    ///
    /// Returns [`CartError::InvalidPromoCode`] if the normalized code is
    /// not the recognized one; the applied flag is left unchanged.
    pub fn apply_promo_code(&mut self, code: &str) -> Result<(), CartError> {
        let normalized = code.trim().to_uppercase();

        if normalized == self.pricing.promo_code {
            if !self.promo.applied {
                tracing::info!(code = %normalized, "promo code applied");
            }
            self.promo.applied = true;
            self.promo.code = Some(normalized);
            Ok(())
        } else {
            tracing::debug!(code = %normalized, "promo code rejected");
            Err(CartError::InvalidPromoCode(normalized))
        }
    }

    /// Advance the checkout stepper by one step and return the new step.
    ///
    /// The stepper only moves forward and saturates at the final step.
    pub fn advance_checkout(&mut self) -> CheckoutStep {
        self.step = self.step.next();
        tracing::debug!(step = %self.step, "checkout advanced");
        self.step
    }

    /// Compute the derived totals for the current cart state.
    ///
    /// Pure with respect to the cart: no side effects, recomputed in full
    /// on every call. Order of derivation: subtotal, discount, tax,
    /// shipping, total, loyalty points.
    #[must_use]
    pub fn totals(&self) -> CartTotals {
        let subtotal: Money = self.items.iter().map(LineItem::line_total).sum();

        let discount = if self.promo.applied {
            subtotal.mul_rate(self.pricing.promo_discount_rate)
        } else {
            Money::ZERO
        };

        let taxable = subtotal - discount;
        let tax = taxable.mul_rate(self.pricing.tax_rate);

        // Threshold compares the pre-discount subtotal, strictly above.
        let shipping = if subtotal > self.pricing.free_shipping_threshold {
            Money::ZERO
        } else {
            self.pricing.standard_shipping
        };

        let total = subtotal - discount + tax + shipping;

        let loyalty_points = (total.amount()
            * Decimal::from(self.pricing.loyalty_points_per_dollar))
        .floor()
        .to_u64()
        .unwrap_or(0);

        CartTotals {
            subtotal,
            discount,
            tax,
            shipping,
            total,
            loyalty_points,
        }
    }
}
