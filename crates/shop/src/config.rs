//! Shop configuration, read from the environment.
//!
//! Every variable is optional. A missing or empty value falls back to the
//! default; a value that is present but cannot be parsed is an error naming the
//! variable.

use core::str::FromStr;

use anyhow::Context;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use pm_core::DomainError;
use pm_products::{Product, Rating};

pub const PRODUCT_ID_VAR: &str = "PM_PRODUCT_ID";
pub const PRODUCT_NAME_VAR: &str = "PM_PRODUCT_NAME";
pub const PRODUCT_PRICE_VAR: &str = "PM_PRODUCT_PRICE";
pub const PRODUCT_RATING_VAR: &str = "PM_PRODUCT_RATING";

/// Describes the product the shop demonstrates.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShopConfig {
    pub product_id: i32,
    pub product_name: String,
    pub product_price: Decimal,
    pub product_rating: Rating,
}

impl Default for ShopConfig {
    /// A default product priced at 1.99.
    fn default() -> Self {
        let product = Product::default();
        Self {
            product_id: product.id(),
            product_name: product.name().to_string(),
            product_price: dec!(1.99),
            product_rating: product.rating(),
        }
    }
}

impl ShopConfig {
    /// Load from the process environment.
    pub fn from_env() -> anyhow::Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load through an arbitrary key lookup.
    pub fn from_lookup<F>(lookup: F) -> anyhow::Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        let product_id = read(&lookup, PRODUCT_ID_VAR, defaults.product_id, |raw| {
            raw.parse::<i32>()
                .map_err(|e| DomainError::invalid_id(format!("{raw}: {e}")))
        })?;
        let product_name = lookup(PRODUCT_NAME_VAR)
            .filter(|v| !v.trim().is_empty())
            .unwrap_or(defaults.product_name);
        let product_price =
            read(&lookup, PRODUCT_PRICE_VAR, defaults.product_price, Decimal::from_str)?;
        let product_rating =
            read(&lookup, PRODUCT_RATING_VAR, defaults.product_rating, Rating::from_str)?;

        Ok(Self {
            product_id,
            product_name,
            product_price,
            product_rating,
        })
    }

    pub fn product(&self) -> Product {
        Product::with_rating(
            self.product_id,
            self.product_name.clone(),
            self.product_price,
            self.product_rating,
        )
    }
}

fn read<T, E, F, P>(lookup: &F, key: &str, default: T, parse: P) -> anyhow::Result<T>
where
    F: Fn(&str) -> Option<String>,
    P: FnOnce(&str) -> Result<T, E>,
    E: std::error::Error + Send + Sync + 'static,
{
    match lookup(key).filter(|v| !v.trim().is_empty()) {
        Some(raw) => parse(raw.trim()).with_context(|| format!("invalid {key}")),
        None => {
            tracing::debug!(var = key, "not set; using default");
            Ok(default)
        }
    }
}
