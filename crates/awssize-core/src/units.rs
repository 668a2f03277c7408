//! # Unit Normalization
//!
//! Express a set of instance classes as a count of one reference size.
//!
//! This is the reserved-instance view of a fleet: two `large` plus one
//! `xlarge` are eight `medium`. Pick the smallest size of the family as the
//! unit and every class in that family converts without remainder.

use crate::error::SizeResult;
use crate::Size;
use serde::{Deserialize, Serialize};

/// One class of the input, converted to units.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClassUnits {
    /// The class string as given.
    pub class: String,
    /// The parsed size.
    pub size: Size,
    /// How many units one instance of `class` is worth.
    pub units: u32,
}

/// Per-class conversion of a set of classes, plus the total.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UnitBreakdown {
    /// The reference size everything was converted to.
    pub unit: Size,
    /// Input classes in input order.
    pub entries: Vec<ClassUnits>,
    /// Sum of `entries[..].units`, saturating.
    pub total: u64,
}

/// Convert every class to `unit` and report each conversion.
///
/// Stops at the first class that does not parse or does not divide evenly
/// into `unit`.
pub fn breakdown<I, S>(classes: I, unit: Size) -> SizeResult<UnitBreakdown>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut entries = Vec::new();
    let mut total: u64 = 0;

    for class in classes {
        let class = class.as_ref();
        let size = Size::parse(class)?;
        let units = size.ratio(unit)?;
        total = total.saturating_add(u64::from(units));
        entries.push(ClassUnits {
            class: class.to_owned(),
            size,
            units,
        });
    }

    Ok(UnitBreakdown {
        unit,
        entries,
        total,
    })
}

/// Total number of `unit`-sized instances equivalent to `classes`.
pub fn normalized_units<I, S>(classes: I, unit: Size) -> SizeResult<u64>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    breakdown(classes, unit).map(|report| report.total)
}

// =============================================================================
// TESTS
// =============================================================================
