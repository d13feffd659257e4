//! Integration tests for MedLife.
//!
//! These tests drive the public API across crates the way the presentation
//! layer does: seed a cart from the catalog, issue commands, and assert on
//! the derived output.
//!
//! # Running Tests
//!
//! ```bash
//! cargo test -p medlife-integration-tests
//! ```
//!
//! # Test Categories
//!
//! - `cart_checkout_flow` - Seeded cart through mutation, promo, and totals
//! - `storefront_browsing` - Catalog queries and vaccination booking

#![cfg_attr(not(test), forbid(unsafe_code))]

use medlife_core::ProductId;
use medlife_storefront::cart::Cart;
use medlife_storefront::catalog::Catalog;

/// The demo session cart: Vitamin D3 x2, Omega-3 x1, Multivitamin x1,
/// seeded from the demo catalog the way the presentation layer does.
///
/// # Panics
///
/// Panics if the demo catalog is missing a seeded product; test-only.
#[must_use]
pub fn seeded_cart(catalog: &Catalog) -> Cart {
    let mut cart = Cart::new();
    for (id, quantity) in [(1, 2), (2, 1), (4, 1)] {
        let product = catalog
            .get(ProductId::new(id))
            .expect("demo catalog product");
        cart.add_item(product.to_line_item(quantity))
            .expect("seed item is unique and non-zero");
    }
    cart
}
