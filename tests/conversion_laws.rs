//! Property-based tests for container conversions.
//!
//! Round-trip laws between `Optional`, `Outcome`, and the std types, for
//! arbitrary values and arbitrary causes.

#![cfg(feature = "outcome")]

use proptest::prelude::*;
use valor::optional::Optional;
use valor::outcome::{Fault, Outcome};

// =============================================================================
// Strategy Definitions
// =============================================================================

fn arb_cause() -> impl Strategy<Value = Fault> {
    "[a-z ]{1,20}".prop_map(Fault::message)
}

fn arb_optional_i32() -> impl Strategy<Value = Optional<i32>> {
    prop_oneof![
        Just(Optional::none()),
        any::<i32>().prop_map(Optional::some),
    ]
}

// =============================================================================
// Outcome <-> Optional Laws
// =============================================================================

proptest! {
    /// ok(v).to_optional() == some(v)
    #[test]
    fn prop_ok_to_optional_is_some(value: i32) {
        prop_assert_eq!(Outcome::ok(value).to_optional(), Optional::some(value));
    }

    /// fail(e).to_optional() == none()
    #[test]
    fn prop_fail_to_optional_is_none(cause in arb_cause()) {
        let converted = Outcome::<i32>::fail(cause).to_optional();
        prop_assert_eq!(converted, Optional::none());
    }

    /// some(v).to_outcome(any).value_or_default() == v, whatever the cause.
    #[test]
    fn prop_some_to_outcome_ignores_cause(value: i32, cause in arb_cause()) {
        let converted = Optional::some(value).to_outcome(cause);
        prop_assert!(converted.is_success());
        prop_assert_eq!(converted.value_or_default(), value);
    }

    /// none().to_outcome(e) is failed and its cause is exactly e.
    #[test]
    fn prop_none_to_outcome_carries_cause(cause in arb_cause()) {
        let converted = Optional::<i32>::none().to_outcome(cause.clone());
        prop_assert!(converted.is_failed());
        prop_assert_eq!(converted.fault(), cause);
    }

    /// Converting to an outcome and back preserves the optional state.
    #[test]
    fn prop_optional_outcome_roundtrip(optional in arb_optional_i32(), cause in arb_cause()) {
        let through = optional.to_outcome(cause).to_optional();
        prop_assert_eq!(through, optional);
    }
}

// =============================================================================
// Std Interop Laws
// =============================================================================

proptest! {
    /// Optional <-> std Option is a lossless round trip.
    #[test]
    fn prop_optional_std_roundtrip(value in proptest::option::of(any::<i32>())) {
        let through: Option<i32> = Optional::maybe(value).into();
        prop_assert_eq!(through, value);
    }

    /// maybe follows the std absence convention.
    #[test]
    fn prop_maybe_matches_option_state(value in proptest::option::of(any::<i32>())) {
        prop_assert_eq!(Optional::maybe(value).has_value(), value.is_some());
    }

    /// Outcome -> std Result keeps the payload and the cause.
    #[test]
    fn prop_outcome_result_interop(value: i32, cause in arb_cause()) {
        let ok: Result<i32, Fault> = Outcome::ok(value).into();
        prop_assert_eq!(ok.ok(), Some(value));

        let err: Result<i32, Fault> = Outcome::<i32>::fail(cause.clone()).into();
        prop_assert_eq!(err.err(), Some(cause));
    }
}
