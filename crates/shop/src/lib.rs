//! `pm-shop` — console demonstration of the products domain.

pub mod config;

pub use config::ShopConfig;
