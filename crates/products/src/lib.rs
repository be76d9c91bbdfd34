//! Products domain module.
//!
//! Business rules for products, implemented as pure value logic (no IO, no
//! storage): a `Product` entity with a fixed-rate discount, and its `Rating`.

pub mod product;
pub mod rating;

pub use product::{DISCOUNT_RATE, Product};
pub use rating::Rating;
