//! Browsing flows: search the catalog into the cart, and book a
//! vaccination appointment from the demo schedule.

#![allow(clippy::unwrap_used)]

use chrono::{NaiveDate, NaiveTime};
use medlife_core::{LocationId, Money, ProductId, VaccineCategory};
use medlife_storefront::cart::Cart;
use medlife_storefront::catalog::{Catalog, CatalogQuery, SortKey};
use medlife_storefront::vaccines::{BookingError, BookingSelection, VaccinationService};

fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap()
}

// =============================================================================
// Catalog Into Cart
// =============================================================================

#[test]
fn test_search_result_added_to_cart() {
    let catalog = Catalog::demo();
    let mut cart = Cart::new();

    let results = catalog.query(&CatalogQuery {
        search: Some("probiotic".to_string()),
        ..CatalogQuery::default()
    });
    assert_eq!(results.len(), 1);

    cart.add_item(results[0].to_line_item(2)).unwrap();
    assert_eq!(cart.totals().subtotal, Money::from_cents(5998));
    // $59.98 clears the $50 threshold
    assert_eq!(cart.totals().shipping, Money::ZERO);
}

#[test]
fn test_cheapest_in_stock_product_under_budget() {
    let catalog = Catalog::demo();
    let results = catalog.query(&CatalogQuery {
        max_price: Some(Money::from_cents(2000)),
        in_stock_only: true,
        sort: SortKey::PriceLowToHigh,
        ..CatalogQuery::default()
    });

    // Ibuprofen is cheaper but out of stock
    assert_eq!(results[0].id, ProductId::new(1));
    assert!(results.iter().all(|p| p.in_stock));
}

#[test]
fn test_adding_same_product_twice_is_rejected() {
    let catalog = Catalog::demo();
    let mut cart = Cart::new();
    let product = catalog.get(ProductId::new(4)).unwrap();

    cart.add_item(product.to_line_item(1)).unwrap();
    assert!(cart.add_item(product.to_line_item(1)).is_err());

    // The second unit goes through a quantity update instead
    cart.update_quantity(product.id, 1).unwrap();
    assert_eq!(cart.item(product.id).unwrap().quantity, 2);
}

#[test]
fn test_favorites_are_per_session_state() {
    let mut catalog = Catalog::demo();
    catalog.toggle_favorite(ProductId::new(2));
    catalog.toggle_favorite(ProductId::new(6));

    assert_eq!(catalog.favorites().len(), 2);
    assert!(catalog.is_favorite(ProductId::new(2)));
    assert!(!catalog.is_favorite(ProductId::new(1)));
}

// =============================================================================
// Vaccination Booking
// =============================================================================

#[test]
fn test_booking_happy_path() {
    let service = VaccinationService::demo();
    let today = date(2025, 6, 2);

    // Pick the first location, the third offered date, the first slot
    let location = service.locations()[0].id;
    let day = VaccinationService::available_dates(today)[2];
    let slot = VaccinationService::time_slots()[0];

    let mut selection = BookingSelection::default();
    selection.select_location(location);
    selection.select_date(day);
    selection.select_slot(slot);

    let booking = service.confirm(&selection, today).unwrap();
    assert_eq!(booking.location, LocationId::new(1));
    assert_eq!(booking.date, date(2025, 6, 4));
    assert_eq!(booking.slot, NaiveTime::from_hms_opt(9, 0, 0).unwrap());
}

#[test]
fn test_booking_rejects_stale_window() {
    let service = VaccinationService::demo();
    let today = date(2025, 6, 2);

    let mut selection = BookingSelection::default();
    selection.select_location(LocationId::new(3));
    // Chosen from last week's window
    selection.select_date(date(2025, 5, 28));
    selection.select_slot(NaiveTime::from_hms_opt(14, 0, 0).unwrap());

    assert_eq!(
        service.confirm(&selection, today),
        Err(BookingError::DateOutOfRange(date(2025, 5, 28)))
    );
}

#[test]
fn test_vaccine_information_tabs() {
    let service = VaccinationService::demo();

    let seasonal = service.vaccines_by_category(VaccineCategory::Seasonal);
    assert_eq!(seasonal.len(), 1);
    assert_eq!(seasonal[0].name, "Influenza (Flu) Shot");
    assert_eq!(seasonal[0].price.to_string(), "$25.00");

    // Due-date reminder sweep across the records tab
    let due = service.records_due_by(date(2024, 12, 31));
    assert_eq!(due.len(), 2);
}

#[test]
fn test_booking_serializes_for_the_confirmation_view() {
    let service = VaccinationService::demo();
    let today = date(2025, 6, 2);

    let mut selection = BookingSelection::default();
    selection.select_location(LocationId::new(2));
    selection.select_date(date(2025, 6, 5));
    selection.select_slot(NaiveTime::from_hms_opt(13, 30, 0).unwrap());

    let booking = service.confirm(&selection, today).unwrap();
    let json = serde_json::to_value(booking).unwrap();
    assert_eq!(json["location"], 2);
    assert_eq!(json["date"], "2025-06-05");
}
