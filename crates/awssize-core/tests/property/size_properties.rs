//! Property tests for the size scale.

#![allow(clippy::unwrap_used, clippy::panic)]

use awssize_core::{Size, SizeError, normalized_units};
use proptest::prelude::*;

fn any_size() -> impl Strategy<Value = Size> {
    proptest::sample::select(Size::ALL.to_vec())
}

/// Dotted prefixes like `db.r6g.` or `cache.t3.`, possibly empty.
fn class_prefix() -> impl Strategy<Value = String> {
    proptest::collection::vec("[a-z0-9-]{1,6}", 0..4).prop_map(|parts| {
        parts
            .into_iter()
            .map(|part| format!("{part}."))
            .collect::<String>()
    })
}

proptest! {
    #[test]
    fn prefix_never_changes_the_size(prefix in class_prefix(), size in any_size()) {
        let class = format!("{prefix}{size}");
        prop_assert_eq!(Size::parse(&class), Ok(size));
    }

    #[test]
    fn render_then_parse_is_identity(size in any_size()) {
        prop_assert_eq!(size.to_string().parse::<Size>(), Ok(size));
    }

    #[test]
    fn ordering_matches_weights(a in any_size(), b in any_size()) {
        prop_assert_eq!(a.cmp(&b), a.weight().cmp(&b.weight()));
    }

    #[test]
    fn ratio_inverts_multiplication(src in any_size(), dst in any_size()) {
        match src.ratio(dst) {
            Ok(n) => prop_assert_eq!(n * dst.weight(), src.weight()),
            Err(SizeError::SizeTooSmall { .. }) => prop_assert!(src < dst),
            Err(SizeError::NonIntegerRatio { .. }) => {
                prop_assert!(src >= dst);
                prop_assert_ne!(src.weight() % dst.weight(), 0);
            }
            Err(other) => prop_assert!(false, "unexpected error: {other}"),
        }
    }

    #[test]
    fn ratio_is_transitive_through_nano(src in any_size(), dst in any_size()) {
        if let Ok(n) = src.ratio(dst) {
            let via_nano = src.ratio(Size::Nano).unwrap() / dst.ratio(Size::Nano).unwrap();
            prop_assert_eq!(n, via_nano);
        }
    }

    #[test]
    fn unknown_suffix_is_rejected(prefix in class_prefix(), junk in "[A-Z]{1,8}") {
        // uppercase never matches a canonical name
        let class = format!("{prefix}{junk}");
        prop_assert_eq!(
            Size::parse(&class),
            Err(SizeError::UnsupportedSizeClass(class.clone()))
        );
    }

    #[test]
    fn nano_units_sum_weights(sizes in proptest::collection::vec(any_size(), 0..32)) {
        let classes: Vec<String> = sizes.iter().map(|s| format!("m5.{s}")).collect();
        let expected: u64 = sizes.iter().map(|s| u64::from(s.weight())).sum();
        prop_assert_eq!(normalized_units(&classes, Size::Nano), Ok(expected));
    }
}

// =============================================================================
// FIXED CASES
// =============================================================================

#[test]
fn multiples_between_classes() {
    for (mul, x, y) in [
        (2, "cache.t3.small", "cache.t3.medium"),
        (8, "medium", "2xlarge"),
        (48 * 2, "large", "48xlarge"),
    ] {
        let x = Size::parse(x).unwrap();
        let y = Size::parse(y).unwrap();
        assert_eq!(y.ratio(x), Ok(mul), "{mul} {x} != {y}");
    }
}

#[test]
fn reverse_lookup_is_safe_under_concurrent_first_use() {
    let handles: Vec<_> = (0..8)
        .map(|_| std::thread::spawn(|| Size::parse("db.r6g.16xlarge")))
        .collect();
    for handle in handles {
        assert_eq!(handle.join().unwrap(), Ok(Size::Xlarge16));
    }
}
