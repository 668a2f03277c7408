//! # Size Scale
//!
//! The closed, ordered set of instance size tiers and the operations over it.
//!
//! Every tier carries an integer weight. `nano` through `2xlarge` double at
//! each step; the `Nxlarge` tiers are N times `xlarge`, so `3xlarge` is 96
//! and not a doubling of `2xlarge`. The resulting sequence is strictly
//! increasing but not a power-of-two progression, which is why some ratios
//! (e.g. `3xlarge` over `2xlarge`) are not whole numbers.

use crate::error::{SizeError, SizeResult};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;
use std::sync::LazyLock;

// =============================================================================
// SIZE
// =============================================================================

/// An instance size tier, like `medium` or `2xlarge`.
///
/// The discriminant is the tier weight, so there is no zero `Size`.
/// Ordering follows the weights: `Size::Medium < Size::Large`.
///
/// Serializes as its canonical name. Deserializes from a name or a full
/// instance class string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "&'static str")]
#[repr(u16)]
pub enum Size {
    Nano = 1,
    Micro = 2,
    Small = 4,
    Medium = 8,
    Large = 16,
    Xlarge = 32,
    Xlarge2 = 64,
    Xlarge3 = 3 * 32,
    Xlarge4 = 4 * 32,
    Xlarge8 = 8 * 32,
    Xlarge9 = 9 * 32,
    Xlarge10 = 10 * 32,
    Xlarge12 = 12 * 32,
    Xlarge16 = 16 * 32,
    Xlarge18 = 18 * 32,
    Xlarge24 = 24 * 32,
    Xlarge32 = 32 * 32,
    Xlarge48 = 48 * 32,
}

/// Reverse lookup: canonical name -> Size.
///
/// Built once from [`Size::ALL`] on first use.
static BY_NAME: LazyLock<BTreeMap<&'static str, Size>> =
    LazyLock::new(|| Size::ALL.iter().map(|&size| (size.name(), size)).collect());

impl Size {
    /// Every tier, in ascending order.
    pub const ALL: [Size; 18] = [
        Size::Nano,
        Size::Micro,
        Size::Small,
        Size::Medium,
        Size::Large,
        Size::Xlarge,
        Size::Xlarge2,
        Size::Xlarge3,
        Size::Xlarge4,
        Size::Xlarge8,
        Size::Xlarge9,
        Size::Xlarge10,
        Size::Xlarge12,
        Size::Xlarge16,
        Size::Xlarge18,
        Size::Xlarge24,
        Size::Xlarge32,
        Size::Xlarge48,
    ];

    /// Parse a size from an instance class (`db.r6g.large`, `r5.large`) or a
    /// bare suffix (`large`).
    ///
    /// The candidate is whatever follows the last `.`, or the whole input if
    /// there is no `.`. Matching is exact and case-sensitive; nothing is
    /// trimmed.
    pub fn parse(input: &str) -> SizeResult<Self> {
        let suffix = input.rsplit_once('.').map_or(input, |(_, suffix)| suffix);
        BY_NAME
            .get(suffix)
            .copied()
            .ok_or_else(|| SizeError::UnsupportedSizeClass(input.to_owned()))
    }

    /// How many `dst` make one `self`.
    ///
    /// Fails if `self` is smaller than `dst`, or if `self` is not a whole
    /// multiple of `dst`. Using the smallest size of the family as `dst`
    /// always succeeds.
    ///
    /// Nothing here knows about families: `ratio` of two sizes parsed from
    /// unrelated families still returns a number.
    pub fn ratio(self, dst: Size) -> SizeResult<u32> {
        if self < dst {
            return Err(SizeError::SizeTooSmall { src: self, dst });
        }
        let (src_weight, dst_weight) = (self.weight(), dst.weight());
        if src_weight % dst_weight != 0 {
            return Err(SizeError::NonIntegerRatio { src: self, dst });
        }
        Ok(src_weight / dst_weight)
    }

    /// The integer weight of this tier.
    #[must_use]
    pub const fn weight(self) -> u32 {
        self as u32
    }

    /// Look a tier up by its weight.
    #[must_use]
    pub fn from_weight(weight: u32) -> Option<Self> {
        Self::ALL.into_iter().find(|size| size.weight() == weight)
    }

    /// The canonical lowercase name, as it appears in instance classes.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Size::Nano => "nano",
            Size::Micro => "micro",
            Size::Small => "small",
            Size::Medium => "medium",
            Size::Large => "large",
            Size::Xlarge => "xlarge",
            Size::Xlarge2 => "2xlarge",
            Size::Xlarge3 => "3xlarge",
            Size::Xlarge4 => "4xlarge",
            Size::Xlarge8 => "8xlarge",
            Size::Xlarge9 => "9xlarge",
            Size::Xlarge10 => "10xlarge",
            Size::Xlarge12 => "12xlarge",
            Size::Xlarge16 => "16xlarge",
            Size::Xlarge18 => "18xlarge",
            Size::Xlarge24 => "24xlarge",
            Size::Xlarge32 => "32xlarge",
            Size::Xlarge48 => "48xlarge",
        }
    }

    /// Iterate over every tier in ascending order.
    pub fn iter() -> impl Iterator<Item = Size> {
        Self::ALL.into_iter()
    }
}

// =============================================================================
// CONVERSIONS
// =============================================================================

impl fmt::Display for Size {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.name())
    }
}

impl FromStr for Size {
    type Err = SizeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<&str> for Size {
    type Error = SizeError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::parse(value)
    }
}

impl TryFrom<String> for Size {
    type Error = SizeError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<Size> for &'static str {
    fn from(size: Size) -> Self {
        size.name()
    }
}

impl From<Size> for u32 {
    fn from(size: Size) -> Self {
        size.weight()
    }
}

// =============================================================================
// TESTS
// =============================================================================
