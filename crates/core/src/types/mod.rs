//! Core types for Storeroom.
//!
//! This module provides type-safe wrappers for common domain concepts.

pub mod email;
pub mod id;
pub mod line_item;
pub mod reference;
pub mod status;

pub use email::{Email, EmailError};
pub use id::*;
pub use line_item::LineItem;
pub use reference::Reference;
pub use status::OrderStatus;
