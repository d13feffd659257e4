//! In-memory product catalog.
//!
//! The catalog holds the hard-coded demo product range and answers the
//! queries the storefront's product pages run client-side: text search,
//! category/brand/price filtering, sorting, and per-session favorites.
//! Catalog entries convert into cart [`LineItem`]s, which is how products
//! enter the cart engine.

use std::collections::HashSet;

use medlife_core::{Money, ProductId};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::cart::LineItem;

/// One product in the catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    pub id: ProductId,
    pub name: String,
    pub brand: String,
    pub price: Money,
    /// Pre-markdown price, shown struck through when present.
    pub original_price: Option<Money>,
    /// Average review score out of 5.
    pub rating: Decimal,
    pub review_count: u32,
    pub in_stock: bool,
    pub delivery_estimate: String,
    pub requires_prescription: bool,
    pub category: String,
}

impl Product {
    /// Savings versus the original price, if the product is marked down.
    #[must_use]
    pub fn savings(&self) -> Option<Money> {
        self.original_price.map(|original| original - self.price)
    }

    /// Convert this product into a cart line item with the given quantity.
    #[must_use]
    pub fn to_line_item(&self, quantity: u32) -> LineItem {
        LineItem {
            id: self.id,
            name: self.name.clone(),
            brand: self.brand.clone(),
            unit_price: self.price,
            quantity,
            delivery_estimate: self.delivery_estimate.clone(),
            in_stock: self.in_stock,
        }
    }
}

/// Sort orders offered by the product listing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SortKey {
    /// Most reviewed first.
    #[default]
    MostPopular,
    PriceLowToHigh,
    PriceHighToLow,
    HighestRated,
    /// Most recently added first.
    Newest,
}

/// Filter and sort criteria for a catalog query.
///
/// An empty query (`CatalogQuery::default()`) matches every product in
/// popularity order.
#[derive(Debug, Clone, Default)]
pub struct CatalogQuery {
    /// Case-insensitive substring match over name and brand.
    pub search: Option<String>,
    pub category: Option<String>,
    /// When non-empty, only these brands match.
    pub brands: Vec<String>,
    pub min_price: Option<Money>,
    pub max_price: Option<Money>,
    pub in_stock_only: bool,
    pub sort: SortKey,
}

/// A category with its product count, for the sidebar listing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CategorySummary {
    pub name: String,
    pub count: usize,
}

/// The product catalog plus per-session favorites.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    products: Vec<Product>,
    favorites: HashSet<ProductId>,
}

impl Catalog {
    /// Create a catalog from an explicit product list.
    #[must_use]
    pub fn new(products: Vec<Product>) -> Self {
        Self {
            products,
            favorites: HashSet::new(),
        }
    }

    /// The hard-coded demo product range.
    #[must_use]
    pub fn demo() -> Self {
        Self::new(demo_products())
    }

    /// All products in catalog order.
    #[must_use]
    pub fn all(&self) -> &[Product] {
        &self.products
    }

    /// Look up a product by id.
    #[must_use]
    pub fn get(&self, id: ProductId) -> Option<&Product> {
        self.products.iter().find(|p| p.id == id)
    }

    /// Distinct categories with product counts, preceded by an
    /// all-products summary. Category order follows first appearance.
    #[must_use]
    pub fn categories(&self) -> Vec<CategorySummary> {
        let mut summaries = vec![CategorySummary {
            name: "All Products".to_string(),
            count: self.products.len(),
        }];

        for product in &self.products {
            match summaries
                .iter_mut()
                .find(|s| s.name == product.category)
            {
                Some(summary) => summary.count += 1,
                None => summaries.push(CategorySummary {
                    name: product.category.clone(),
                    count: 1,
                }),
            }
        }
        summaries
    }

    /// Run a filtered, sorted query over the catalog.
    #[must_use]
    pub fn query(&self, query: &CatalogQuery) -> Vec<&Product> {
        let needle = query.search.as_ref().map(|s| s.to_lowercase());

        let mut matches: Vec<&Product> = self
            .products
            .iter()
            .filter(|p| {
                needle.as_ref().is_none_or(|needle| {
                    p.name.to_lowercase().contains(needle)
                        || p.brand.to_lowercase().contains(needle)
                })
            })
            .filter(|p| {
                query
                    .category
                    .as_ref()
                    .is_none_or(|category| p.category.eq_ignore_ascii_case(category))
            })
            .filter(|p| {
                query.brands.is_empty()
                    || query.brands.iter().any(|b| p.brand.eq_ignore_ascii_case(b))
            })
            .filter(|p| query.min_price.is_none_or(|min| p.price >= min))
            .filter(|p| query.max_price.is_none_or(|max| p.price <= max))
            .filter(|p| !query.in_stock_only || p.in_stock)
            .collect();

        match query.sort {
            SortKey::MostPopular => {
                matches.sort_by(|a, b| b.review_count.cmp(&a.review_count));
            }
            SortKey::PriceLowToHigh => matches.sort_by(|a, b| a.price.cmp(&b.price)),
            SortKey::PriceHighToLow => matches.sort_by(|a, b| b.price.cmp(&a.price)),
            SortKey::HighestRated => matches.sort_by(|a, b| b.rating.cmp(&a.rating)),
            SortKey::Newest => matches.sort_by(|a, b| b.id.as_i32().cmp(&a.id.as_i32())),
        }
        matches
    }

    /// Toggle a product's favorite flag; returns the new state.
    ///
    /// Unknown ids toggle nothing and return `false`.
    pub fn toggle_favorite(&mut self, id: ProductId) -> bool {
        if self.get(id).is_none() {
            tracing::debug!(%id, "favorite toggle for unknown product ignored");
            return false;
        }
        if self.favorites.remove(&id) {
            false
        } else {
            self.favorites.insert(id);
            true
        }
    }

    /// Whether a product is currently a favorite.
    #[must_use]
    pub fn is_favorite(&self, id: ProductId) -> bool {
        self.favorites.contains(&id)
    }

    /// Ids of all favorited products.
    #[must_use]
    pub const fn favorites(&self) -> &HashSet<ProductId> {
        &self.favorites
    }
}

/// The demo products shown on the storefront's product page.
fn demo_products() -> Vec<Product> {
    vec![
        Product {
            id: ProductId::new(1),
            name: "Vitamin D3 1000IU Tablets".to_string(),
            brand: "HealthPlus".to_string(),
            price: Money::from_cents(1299),
            original_price: Some(Money::from_cents(1599)),
            rating: Decimal::new(48, 1),
            review_count: 234,
            in_stock: true,
            delivery_estimate: "Same day delivery".to_string(),
            requires_prescription: false,
            category: "Vitamins".to_string(),
        },
        Product {
            id: ProductId::new(2),
            name: "Omega-3 Fish Oil Capsules".to_string(),
            brand: "WellnessCore".to_string(),
            price: Money::from_cents(2499),
            original_price: None,
            rating: Decimal::new(49, 1),
            review_count: 456,
            in_stock: true,
            delivery_estimate: "2-4 days".to_string(),
            requires_prescription: false,
            category: "Supplements".to_string(),
        },
        Product {
            id: ProductId::new(3),
            name: "Ibuprofen 200mg Tablets".to_string(),
            brand: "PainRelief Pro".to_string(),
            price: Money::from_cents(899),
            original_price: Some(Money::from_cents(1099)),
            rating: Decimal::new(46, 1),
            review_count: 189,
            in_stock: false,
            delivery_estimate: "5-7 days".to_string(),
            requires_prescription: true,
            category: "Pain Relief".to_string(),
        },
        Product {
            id: ProductId::new(4),
            name: "Multivitamin Complete".to_string(),
            brand: "DailyHealth".to_string(),
            price: Money::from_cents(1999),
            original_price: None,
            rating: Decimal::new(47, 1),
            review_count: 567,
            in_stock: true,
            delivery_estimate: "Same day delivery".to_string(),
            requires_prescription: false,
            category: "Vitamins".to_string(),
        },
        Product {
            id: ProductId::new(5),
            name: "Cough Syrup Natural Honey".to_string(),
            brand: "NaturalCare".to_string(),
            price: Money::from_cents(1499),
            original_price: Some(Money::from_cents(1799)),
            rating: Decimal::new(45, 1),
            review_count: 123,
            in_stock: true,
            delivery_estimate: "2-4 days".to_string(),
            requires_prescription: false,
            category: "Cold & Flu".to_string(),
        },
        Product {
            id: ProductId::new(6),
            name: "Probiotic Complex Capsules".to_string(),
            brand: "GutHealth".to_string(),
            price: Money::from_cents(2999),
            original_price: None,
            rating: Decimal::new(48, 1),
            review_count: 345,
            in_stock: true,
            delivery_estimate: "Same day delivery".to_string(),
            requires_prescription: false,
            category: "Digestive Health".to_string(),
        },
    ]
}
