use core::hash::{Hash, Hasher};

use rust_decimal::{Decimal, RoundingStrategy};
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use pm_core::Entity;

use crate::rating::Rating;

/// Fixed discount rate applied to every product (10%).
pub const DISCOUNT_RATE: Decimal = dec!(0.1);

/// Entity: Product.
///
/// Fields are private and there are no setters; a differently-rated version of
/// a product is obtained through [`Product::apply_rating`], which returns a new
/// value.
///
/// Constructors accept any input: negative ids, empty names and negative
/// prices are all kept as given.
///
/// Equality only looks at `id` and `name`, and hashing only at `id`. Two
/// products that differ in price or rating are still the same entity.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Product {
    id: i32,
    name: String,
    price: Decimal,
    rating: Rating,
}

impl Product {
    pub fn new(id: i32, name: impl Into<String>, price: Decimal) -> Self {
        Self::with_rating(id, name, price, Rating::NotRated)
    }

    pub fn with_rating(id: i32, name: impl Into<String>, price: Decimal, rating: Rating) -> Self {
        Self {
            id,
            name: name.into(),
            price,
            rating,
        }
    }

    pub fn id(&self) -> i32 {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn price(&self) -> Decimal {
        self.price
    }

    pub fn rating(&self) -> Rating {
        self.rating
    }

    /// Discount for this product: `price × DISCOUNT_RATE`, rounded half-up
    /// (midpoint away from zero) to two decimal places.
    ///
    /// The result carries scale 2 (`0.00`, `2.00`) unless the magnitude is too
    /// large for 96 bits at that scale (above roughly 7.9 × 10^26), where it
    /// stays at scale 1.
    pub fn discount(&self) -> Decimal {
        // Multiplying by 0.1 only shifts the decimal point, so rounding the
        // price to one place first is exact and never needs more than 28 digits.
        let mut discount = self
            .price
            .round_dp_with_strategy(1, RoundingStrategy::MidpointAwayFromZero)
            * DISCOUNT_RATE;
        discount.rescale(2);
        discount
    }

    /// Copy of this product carrying `rating`; `self` is left untouched.
    pub fn apply_rating(&self, rating: Rating) -> Product {
        Self::with_rating(self.id, self.name.clone(), self.price, rating)
    }
}

impl Default for Product {
    fn default() -> Self {
        Self::new(0, "no name", Decimal::ZERO)
    }
}

impl Entity for Product {
    type Id = i32;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}

impl PartialEq for Product {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id && self.name == other.name
    }
}

impl Eq for Product {}

impl Hash for Product {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

impl core::fmt::Display for Product {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(
            f,
            "{} {} {} {} {}",
            self.id,
            self.name,
            self.price,
            self.discount(),
            self.rating.label()
        )
    }
}
