//! Storeroom Core - Shared types library.
//!
//! This crate provides common types used across all Storeroom components:
//! - `server` - JSON REST API for customers, products, and orders
//! - `cli` - Command-line tools for migrations and seeding
//!
//! # Architecture
//!
//! The core crate contains only types - no I/O, no database access, no HTTP.
//! This keeps it lightweight and allows it to be used anywhere, including in
//! client code that builds carts and submits checkout requests.
//!
//! # Modules
//!
//! - [`types`] - Newtype wrappers for type-safe IDs, emails, statuses, and
//!   reference expansion
//! - [`cart`] - The client-held cart aggregator and its checkout draft

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod cart;
pub mod types;

pub use cart::{Cart, CartItem, OrderDraft};
pub use types::*;
