//! MedLife Storefront - Pharmacy storefront domain library.
//!
//! This crate owns the domain state and business rules behind the MedLife
//! storefront: the shopping cart engine, the product catalog, and the
//! vaccination scheduling data. It is consumed in-process by a presentation
//! layer which issues commands (change a quantity, apply a promo code,
//! pick an appointment slot) and renders the derived results.
//!
//! # Architecture
//!
//! - All state is in-memory and single-owner; there is no database, no
//!   network access, and no background work
//! - Monetary amounts use `medlife-core`'s decimal-backed `Money` type
//! - Mutations return explicit `Result`s; the caller decides whether a
//!   rejected command is surfaced to the user or swallowed
//! - The library emits `tracing` events at mutation points; installing a
//!   subscriber is the embedding application's job

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod cart;
pub mod catalog;
pub mod config;
pub mod error;
pub mod vaccines;
