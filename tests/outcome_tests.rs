#![cfg(feature = "control")]
//! Unit tests for the Outcome type.
//!
//! Outcome represents a computation that either:
//! - `Success(T)`: produced a value
//! - `Failure(String)`: failed with a human-readable message
//!
//! Tests cover construction, matching, sequencing, conversion to and from
//! `Maybe`/`Option`/`Result`, and the strict accessors.

use lambars_outcome::control::{
    AccessError, GetErrorOrThrowError, GetValueOrThrowError, Maybe, Outcome,
};
use rstest::rstest;
use std::cell::Cell;

// =============================================================================
// Construction
// =============================================================================

#[rstest]
fn outcome_success_creation() {
    let outcome = Outcome::success(42);
    assert!(matches!(outcome, Outcome::Success(42)));
}

#[rstest]
fn outcome_failure_creation() {
    let outcome: Outcome<i32> = Outcome::failure("e");
    assert!(outcome.is_failure());
    assert_eq!(outcome, Outcome::Failure("e".to_string()));
}

#[rstest]
#[case(Some(42), Outcome::success(42))]
#[case(None, Outcome::failure("e"))]
fn outcome_of_optional(#[case] optional: Option<i32>, #[case] expected: Outcome<i32>) {
    assert_eq!(Outcome::of_optional(optional, "e"), expected);
}

#[rstest]
fn outcome_of_nullable_builds_message_only_when_missing() {
    let built = Cell::new(false);
    let outcome = Outcome::of_nullable(Some(1), || {
        built.set(true);
        "missing"
    });
    assert_eq!(outcome, Outcome::success(1));
    assert!(!built.get());

    let outcome = Outcome::<i32>::of_nullable(None, || {
        built.set(true);
        "missing"
    });
    assert_eq!(outcome, Outcome::failure("missing"));
    assert!(built.get());
}

#[rstest]
fn outcome_of_maybe() {
    assert_eq!(
        Outcome::of_maybe(Maybe::some('x'), || "none"),
        Outcome::success('x')
    );
    assert_eq!(
        Outcome::<char>::of_maybe(Maybe::none(), || "none"),
        Outcome::failure("none")
    );
}

// =============================================================================
// Matching
// =============================================================================

#[rstest]
fn outcome_match_success() {
    let outcome = Outcome::success(42);
    assert!(outcome.match_with(|_| true, |_| false));
}

#[rstest]
fn outcome_match_failure() {
    let outcome: Outcome<i32> = Outcome::failure("e");
    assert!(!outcome.match_with(|_| true, |_| false));
}

#[rstest]
fn outcome_match_failure_receives_message() {
    let outcome: Outcome<i32> = Outcome::failure("reason");
    assert_eq!(
        outcome.match_with(|value| value.to_string(), |message| message),
        "reason"
    );
}

#[rstest]
fn outcome_match_void_success() {
    let mut observed = None;
    Outcome::success(42).match_void(
        |value| observed = Some(value),
        |_| panic!("failure branch must not run"),
    );
    assert_eq!(observed, Some(42));
}

#[rstest]
fn outcome_match_void_failure() {
    let mut observed = None;
    Outcome::<i32>::failure("e").match_void(
        |_| panic!("success branch must not run"),
        |message| observed = Some(message),
    );
    assert_eq!(observed, Some("e".to_string()));
}

// =============================================================================
// Bind and Map
// =============================================================================

#[rstest]
fn outcome_bind_success_on_success() {
    let outcome = Outcome::success(42).bind(|number| Outcome::success(number * number));
    assert_eq!(outcome, Outcome::success(1764));
}

#[rstest]
fn outcome_bind_success_on_failure() {
    let outcome: Outcome<i32> = Outcome::failure("e");
    let outcome = outcome.bind(|_| -> Outcome<i32> { panic!("binder must not run") });
    assert_eq!(outcome, Outcome::failure("e"));
}

#[rstest]
fn outcome_bind_failure_on_success() {
    let outcome: Outcome<i32> = Outcome::success(42).bind(|_| Outcome::failure("e"));
    assert_eq!(outcome, Outcome::failure("e"));
}

#[rstest]
fn outcome_bind_failure_on_failure_keeps_first_message() {
    let outcome: Outcome<i32> = Outcome::failure("e");
    let outcome = outcome.bind(|_| -> Outcome<i32> { panic!("binder must not run") });
    assert_eq!(outcome, Outcome::failure("e"));
}

#[rstest]
fn outcome_bind_chain_stops_at_first_failure() {
    let stages = Cell::new(0);
    let stage = |value: i32| {
        stages.set(stages.get() + 1);
        if value > 1 {
            Outcome::failure(format!("stage failed at {value}"))
        } else {
            Outcome::success(value + 1)
        }
    };

    let outcome = Outcome::success(0)
        .bind(stage)
        .bind(stage)
        .bind(stage)
        .bind(stage)
        .bind(stage);

    assert_eq!(outcome, Outcome::failure("stage failed at 2"));
    assert_eq!(stages.get(), 3);
}

#[rstest]
fn outcome_map_on_success() {
    let outcome = Outcome::success(42).map(|number| number + 1);
    assert_eq!(outcome, Outcome::success(43));
}

#[rstest]
fn outcome_map_on_failure() {
    let outcome: Outcome<i32> = Outcome::failure("e");
    let outcome = outcome.map(|_| -> i32 { panic!("mapper must not run") });
    assert_eq!(outcome, Outcome::failure("e"));
}

#[rstest]
fn outcome_map_changes_type() {
    let outcome = Outcome::success(5).map(|number| vec![number; 2]);
    assert_eq!(outcome, Outcome::success(vec![5, 5]));
}

// =============================================================================
// Conversion
// =============================================================================

#[rstest]
fn success_into_option() {
    assert_eq!(Outcome::success(42).into_option(), Some(42));
}

#[rstest]
fn failure_into_option() {
    assert_eq!(Outcome::<i32>::failure("e").into_option(), None);
}

#[rstest]
fn success_into_maybe() {
    assert_eq!(Outcome::success(42).into_maybe(), Maybe::some(42));
}

#[rstest]
fn failure_into_maybe() {
    assert_eq!(Outcome::<i32>::failure("e").into_maybe(), Maybe::none());
}

#[rstest]
fn outcome_into_result_and_back() {
    let result = Outcome::success(1).into_result();
    assert_eq!(result, Ok(1));
    assert_eq!(Outcome::from(result), Outcome::success(1));

    let result = Outcome::<i32>::failure("e").into_result();
    assert_eq!(result, Err("e".to_string()));
    assert_eq!(Outcome::from(result), Outcome::failure("e"));
}

#[rstest]
fn outcome_from_result_uses_display() {
    #[derive(Debug)]
    struct NotFound(u32);

    impl std::fmt::Display for NotFound {
        fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
            write!(formatter, "record {} not found", self.0)
        }
    }

    let outcome: Outcome<String> = Err(NotFound(7)).into();
    assert_eq!(outcome, Outcome::failure("record 7 not found"));
}

// =============================================================================
// Value Extraction
// =============================================================================

#[rstest]
fn get_value_or_default_value() {
    assert_eq!(Outcome::success(42).get_value_or_default(0), 42);
}

#[rstest]
fn get_value_or_default_default() {
    assert_eq!(Outcome::<i32>::failure("e").get_value_or_default(42), 42);
}

#[rstest]
fn get_error_or_default_value() {
    assert_eq!(Outcome::<i32>::failure("e").get_error_or_default(), "e");
}

#[rstest]
fn get_error_or_default_default() {
    assert_eq!(Outcome::success(42).get_error_or_default(), "");
}

#[rstest]
fn get_value_or_throw_on_failure_carries_message() {
    let error = Outcome::<i32>::failure("disk full").get_value_or_throw().unwrap_err();
    assert_eq!(error, GetValueOrThrowError::new("disk full"));
    assert_eq!(error.to_string(), "disk full");
}

#[rstest]
fn get_error_or_throw_on_success_uses_fixed_message() {
    let error = Outcome::success("secret value").get_error_or_throw().unwrap_err();
    assert_eq!(error, GetErrorOrThrowError);
    assert_eq!(
        error.to_string(),
        "Tried to get error message from a success."
    );
    assert!(!error.to_string().contains("secret value"));
}

#[rstest]
fn strict_accessors_compose_with_question_mark() {
    fn both(value: Outcome<i32>, error: Outcome<i32>) -> Result<(i32, String), AccessError> {
        Ok((value.get_value_or_throw()?, error.get_error_or_throw()?))
    }

    assert_eq!(
        both(Outcome::success(1), Outcome::failure("e")),
        Ok((1, "e".to_string()))
    );
    assert_eq!(
        both(Outcome::success(1), Outcome::success(2)),
        Err(AccessError::GetErrorOrThrow(GetErrorOrThrowError))
    );
    assert_eq!(
        both(Outcome::failure("x"), Outcome::failure("e")),
        Err(AccessError::GetValueOrThrow(GetValueOrThrowError::new("x")))
    );
}
