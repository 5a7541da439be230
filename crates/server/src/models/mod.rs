//! Domain models for the back-office entities.

pub mod customer;
pub mod order;
pub mod product;

pub use customer::{Customer, NewCustomer};
pub use order::{
    CustomerSummary, LineItemView, NewOrder, Order, OrderUpdate, OrderView, ProductSummary,
};
pub use product::{NewProduct, Product};
