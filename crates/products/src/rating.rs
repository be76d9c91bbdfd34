use core::str::FromStr;

use serde::{Deserialize, Serialize};

use pm_core::{DomainError, DomainResult, ValueObject};

/// Star rating of a product.
///
/// The set is closed: a product is either not rated or carries one to five
/// stars.
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Rating {
    #[default]
    NotRated,
    OneStar,
    TwoStar,
    ThreeStar,
    FourStar,
    FiveStar,
}

impl Rating {
    /// Every rating in ascending star order.
    pub const ALL: [Rating; 6] = [
        Rating::NotRated,
        Rating::OneStar,
        Rating::TwoStar,
        Rating::ThreeStar,
        Rating::FourStar,
        Rating::FiveStar,
    ];

    /// Display label: one `★` per star, empty when not rated.
    pub fn label(&self) -> &'static str {
        match self {
            Rating::NotRated => "",
            Rating::OneStar => "★",
            Rating::TwoStar => "★★",
            Rating::ThreeStar => "★★★",
            Rating::FourStar => "★★★★",
            Rating::FiveStar => "★★★★★",
        }
    }

    pub fn star_count(&self) -> u8 {
        match self {
            Rating::NotRated => 0,
            Rating::OneStar => 1,
            Rating::TwoStar => 2,
            Rating::ThreeStar => 3,
            Rating::FourStar => 4,
            Rating::FiveStar => 5,
        }
    }

    /// Canonical upper-snake name, as used in configuration and serde.
    pub fn name(&self) -> &'static str {
        match self {
            Rating::NotRated => "NOT_RATED",
            Rating::OneStar => "ONE_STAR",
            Rating::TwoStar => "TWO_STAR",
            Rating::ThreeStar => "THREE_STAR",
            Rating::FourStar => "FOUR_STAR",
            Rating::FiveStar => "FIVE_STAR",
        }
    }
}

impl ValueObject for Rating {}

impl core::fmt::Display for Rating {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.label())
    }
}

impl TryFrom<u8> for Rating {
    type Error = DomainError;

    fn try_from(stars: u8) -> DomainResult<Self> {
        Rating::ALL
            .into_iter()
            .find(|r| r.star_count() == stars)
            .ok_or_else(|| DomainError::validation(format!("rating out of range: {stars} stars")))
    }
}

impl FromStr for Rating {
    type Err = DomainError;

    /// Accepts a canonical name (`FOUR_STAR`, any case) or a star count (`4`).
    fn from_str(s: &str) -> DomainResult<Self> {
        let s = s.trim();
        if let Ok(stars) = s.parse::<u8>() {
            return Rating::try_from(stars);
        }
        Rating::ALL
            .into_iter()
            .find(|r| r.name().eq_ignore_ascii_case(s))
            .ok_or_else(|| DomainError::validation(format!("unknown rating: {s}")))
    }
}
