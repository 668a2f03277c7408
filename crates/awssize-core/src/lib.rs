//! # awssize-core
//!
//! The instance size scale for cloud instance classes.
//!
//! Instance classes such as `db.r6g.large` or `r5.2xlarge` end in a size
//! suffix. This crate maps those suffixes onto a fixed, ordered integer scale
//! so that sizes of the same family can be compared and converted into one
//! another, in the sense that matters for billing and reserved instances:
//! one `2xlarge` is worth eight `medium`.
//!
//! ```
//! use awssize_core::Size;
//!
//! let src = Size::parse("db.r6g.2xlarge")?;
//! let dst = Size::parse("medium")?;
//! assert_eq!(src.ratio(dst)?, 8);
//! assert_eq!(src.to_string(), "2xlarge");
//! # Ok::<(), awssize_core::SizeError>(())
//! ```
//!
//! ## Constraints
//!
//! - Pure and synchronous: no I/O, no logging, no hidden mutable state.
//! - Integer arithmetic only.
//! - Family compatibility is NOT checked. Comparing `t3.large` with
//!   `m5.xlarge` yields a number; whether that number means anything is the
//!   caller's concern.

pub mod error;
pub mod size;
pub mod units;

pub use error::{SizeError, SizeResult};
pub use size::Size;
pub use units::{ClassUnits, UnitBreakdown, breakdown, normalized_units};
