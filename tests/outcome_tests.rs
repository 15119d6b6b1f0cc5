//! Unit tests for the `Outcome<T>` container.
//!
//! Covers the state contract, branch dispatch, the success-path and
//! failure-path combinator families, defaulting extraction, and the
//! `panic_if_failed` boundary escape.

#![cfg(feature = "outcome")]

use std::cell::Cell;

use rstest::rstest;
use valor::outcome::{Fault, Outcome};

// =============================================================================
// Construction and State
// =============================================================================

#[rstest]
fn ok_is_success_with_value() {
    let success = Outcome::ok(42);
    assert!(success.is_success());
    assert!(!success.is_failed());
    assert_eq!(success.value(), 42);
}

#[rstest]
fn done_is_success_without_payload() {
    let done = Outcome::done();
    assert!(done.is_success());
    done.value();
}

#[rstest]
fn fail_is_failed_with_cause() {
    let cause = Fault::message("broken");
    let failure: Outcome<i32> = Outcome::fail(cause.clone());
    assert!(failure.is_failed());
    assert_eq!(failure.fault(), cause);
}

#[rstest]
fn fail_accepts_a_wrapped_std_error() {
    let parse_error = "x".parse::<i32>().unwrap_err();
    let failure: Outcome<i32> = Outcome::fail(Fault::new(parse_error));
    assert!(failure.fault().is::<std::num::ParseIntError>());
}

#[rstest]
fn fail_accepts_owned_and_borrowed_descriptions() {
    // Descriptions and wrapped errors are the two conversion routes into a
    // cause; both must coexist.
    let from_borrowed: Outcome<i32> = Outcome::fail("borrowed text");
    assert_eq!(from_borrowed.fault().to_string(), "borrowed text");

    let from_owned: Outcome<i32> = Outcome::fail("owned text".to_string());
    assert_eq!(from_owned.fault().to_string(), "owned text");

    let wrapped: Outcome<i32> = Outcome::fail(Fault::new("x".parse::<i32>().unwrap_err()));
    assert!(wrapped.fault().is::<std::num::ParseIntError>());
}

#[rstest]
#[should_panic(expected = "on a failed `Outcome`")]
fn value_on_failure_is_a_contract_violation() {
    let failure: Outcome<i32> = Outcome::fail("broken");
    let _ = failure.value();
}

#[rstest]
#[should_panic(expected = "on a successful `Outcome`")]
fn fault_on_success_is_a_contract_violation() {
    let _ = Outcome::ok(42).fault();
}

#[rstest]
#[should_panic(expected = "on a failed `Outcome`")]
fn value_ref_on_failure_is_a_contract_violation() {
    let failure: Outcome<i32> = Outcome::fail("broken");
    let _ = failure.value_ref();
}

#[rstest]
#[should_panic(expected = "on a successful `Outcome`")]
fn fault_ref_on_success_is_a_contract_violation() {
    let _ = Outcome::ok(42).fault_ref();
}

// =============================================================================
// Branch Dispatch
// =============================================================================

#[rstest]
fn match_with_dispatches_success_branch_only() {
    let report = Outcome::ok(42).match_with(
        |value| format!("value {value}"),
        |fault| format!("fault {fault}"),
    );
    assert_eq!(report, "value 42");
}

#[rstest]
fn match_with_dispatches_failure_branch_only() {
    let report = Outcome::<i32>::fail("declined").match_with(
        |value| format!("value {value}"),
        |fault| format!("fault {fault}"),
    );
    assert_eq!(report, "fault declined");
}

// =============================================================================
// Success-path Chaining
// =============================================================================

#[rstest]
fn then_maps_success_payload() {
    let doubled = Outcome::ok(21).then(|n| n * 2);
    assert_eq!(doubled.value(), 42);
}

#[rstest]
fn then_discarding_payload_yields_unit_outcome() {
    let seen = Cell::new(0);
    let done: Outcome<()> = Outcome::ok(42).then(|n| seen.set(n));
    assert!(done.is_success());
    assert_eq!(seen.get(), 42);
}

#[rstest]
fn then_with_chains_outcome_producing_continuations() {
    fn half(n: i32) -> Outcome<i32> {
        if n % 2 == 0 {
            Outcome::ok(n / 2)
        } else {
            Outcome::fail("odd")
        }
    }

    assert_eq!(Outcome::ok(42).then_with(half).value(), 21);
    assert!(Outcome::ok(21).then_with(half).is_failed());
}

#[rstest]
fn then_skips_continuation_on_failure_and_keeps_cause() {
    let cause = Fault::message("root");
    let invoked = Cell::new(false);

    let chained = Outcome::<i32>::fail(cause.clone())
        .then(|n| {
            invoked.set(true);
            n + 1
        })
        .then(|n| n.to_string());

    assert!(!invoked.get());
    assert_eq!(chained.fault(), cause);
}

#[rstest]
fn then_with_skips_continuation_on_failure() {
    let invoked = Cell::new(false);
    let chained = Outcome::<i32>::fail("root").then_with(|n| {
        invoked.set(true);
        Outcome::ok(n)
    });
    assert!(!invoked.get());
    assert!(chained.is_failed());
}

// =============================================================================
// Failure-path Recovery
// =============================================================================

#[rstest]
fn catch_recovers_with_replacement_value() {
    let recovered = Outcome::<i32>::fail("miss").catch(|_fault| 7);
    assert_eq!(recovered.value(), 7);
}

#[rstest]
fn catch_is_identity_on_success() {
    let invoked = Cell::new(false);
    let untouched = Outcome::ok(42).catch(|_fault| {
        invoked.set(true);
        0
    });
    assert_eq!(untouched.value(), 42);
    assert!(!invoked.get());
}

#[rstest]
fn catch_receives_the_original_cause() {
    let cause = Fault::message("root");
    Outcome::<i32>::fail(cause.clone()).catch(|fault| {
        assert_eq!(fault, cause);
        0
    });
}

#[rstest]
fn catch_with_may_stay_failed() {
    let rerouted = Outcome::<i32>::fail("primary")
        .catch_with(|fault| Outcome::fail(format!("secondary after {fault}")));
    assert!(rerouted.is_failed());
    assert_eq!(rerouted.fault().to_string(), "secondary after primary");
}

#[rstest]
fn catch_with_may_recover() {
    let recovered = Outcome::<i32>::fail("primary").catch_with(|_fault| Outcome::ok(7));
    assert_eq!(recovered.value(), 7);
}

// =============================================================================
// Inspection (Passthrough)
// =============================================================================

#[rstest]
fn if_success_runs_action_and_never_alters_state() {
    let seen = Cell::new(0);
    let passthrough = Outcome::ok(42).if_success(|value| seen.set(*value));
    assert_eq!(seen.get(), 42);
    assert_eq!(passthrough.value(), 42);
}

#[rstest]
fn if_success_is_inert_on_failure() {
    let seen = Cell::new(false);
    let passthrough = Outcome::<i32>::fail("nope").if_success(|_| seen.set(true));
    assert!(!seen.get());
    assert!(passthrough.is_failed());
}

#[rstest]
fn if_failed_runs_action_and_never_alters_state() {
    let cause = Fault::message("observed");
    let seen = Cell::new(false);

    let passthrough = Outcome::<i32>::fail(cause.clone()).if_failed(|fault| {
        assert_eq!(*fault, cause);
        seen.set(true);
    });

    assert!(seen.get());
    assert_eq!(passthrough.fault(), cause);
}

#[rstest]
fn if_failed_is_inert_on_success() {
    let seen = Cell::new(false);
    Outcome::ok(42).if_failed(|_| seen.set(true));
    assert!(!seen.get());
}

// =============================================================================
// Defaulting Extraction
// =============================================================================

#[rstest]
fn value_or_default_on_success_returns_payload() {
    assert_eq!(Outcome::ok(42).value_or_default(), 42);
}

#[rstest]
fn value_or_default_on_failure_returns_type_default() {
    assert_eq!(Outcome::<i32>::fail("gone").value_or_default(), 0);
    assert_eq!(
        Outcome::<String>::fail("gone").value_or_default(),
        String::new()
    );
}

#[rstest]
fn value_or_on_success_ignores_the_default() {
    assert_eq!(Outcome::ok(42).value_or(7), 42);
    assert_eq!(Outcome::<i32>::fail("gone").value_or(7), 7);
}

#[rstest]
fn value_or_else_only_invokes_supplier_on_failure() {
    let invoked = Cell::new(false);
    let value = Outcome::ok(42).value_or_else(|| {
        invoked.set(true);
        7
    });
    assert_eq!(value, 42);
    assert!(!invoked.get());

    assert_eq!(Outcome::<i32>::fail("gone").value_or_else(|| 7), 7);
}

// =============================================================================
// Boundary Escape
// =============================================================================

#[rstest]
fn panic_if_failed_passes_success_through() {
    let passthrough = Outcome::ok(42).panic_if_failed();
    assert_eq!(passthrough.value(), 42);
}

#[rstest]
#[should_panic]
fn panic_if_failed_raises_on_failure() {
    let failure: Outcome<i32> = Outcome::fail("fatal");
    let _ = failure.panic_if_failed();
}

// =============================================================================
// Equality and Conversions
// =============================================================================

#[rstest]
fn equality_is_structural_over_state() {
    assert_eq!(Outcome::ok(1), Outcome::ok(1));
    assert_ne!(Outcome::ok(1), Outcome::ok(2));

    let cause = Fault::message("same");
    let first: Outcome<i32> = Outcome::fail(cause.clone());
    let second: Outcome<i32> = Outcome::fail(cause);
    assert_eq!(first, second);
}

#[rstest]
fn std_result_interop() {
    let from_ok: Outcome<i32> = "42".parse::<i32>().into();
    assert_eq!(from_ok.value(), 42);

    let from_err: Outcome<i32> = "x".parse::<i32>().into();
    assert!(from_err.is_failed());

    let back: Result<i32, Fault> = Outcome::ok(5).into();
    assert_eq!(back.unwrap(), 5);
}
