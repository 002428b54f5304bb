//! Shared helpers for integration tests.
//!
//! `test_case!` declares one test per input. Each arm checks one thing:
//!
//! - `value`: the evaluated result, compared within `1e-9`
//! - `error`: the error message, verbatim
//! - `rendered`: fragments that must appear in the rendered (no color) error

#![allow(dead_code)]

use once_cell::sync::Lazy;

pub const EPSILON: f64 = 1e-9;

pub fn assert_close(actual: f64, expected: f64, input: &str) {
    assert!(
        (actual - expected).abs() < EPSILON,
        "{:?}: expected {}, got {}",
        input,
        expected,
        actual
    );
}

/// Inputs that must evaluate, with their results. Used by property-style tests.
pub static WELL_FORMED: Lazy<Vec<(&'static str, f64)>> = Lazy::new(|| {
    vec![
        ("2+3", 5.0),
        ("2+3*4", 14.0),
        ("(2+3)*4", 20.0),
        ("2^3^2", 512.0),
        ("sqrt(9)", 3.0),
        ("-5", -5.0),
        ("--5", 5.0),
        ("-5+3", -2.0),
        ("10/4", 2.5),
        ("1.5*2", 3.0),
        ("((2+1))*2", 6.0),
    ]
});

#[macro_export]
macro_rules! test_case {
    (
        name: $name:ident,
        input: $input:expr,
        value: $value:expr $(,)?
    ) => {
        #[test]
        fn $name() {
            let input = $input;
            match reckon::evaluate(input) {
                Ok(actual) => $crate::cases::assert_close(actual, $value, input),
                Err(e) => panic!("{:?}: unexpected error: {}", input, e),
            }
        }
    };
    (
        name: $name:ident,
        input: $input:expr,
        error: $error:expr $(,)?
    ) => {
        #[test]
        fn $name() {
            let input = $input;
            match reckon::evaluate(input) {
                Ok(actual) => panic!("{:?}: expected an error, got {}", input, actual),
                Err(e) => pretty_assertions::assert_eq!(e.to_string(), $error),
            }
        }
    };
    (
        name: $name:ident,
        input: $input:expr,
        rendered: [$($fragment:expr),* $(,)?] $(,)?
    ) => {
        #[test]
        fn $name() {
            let input = $input;
            let err = reckon::evaluate(input).expect_err("expected an error");
            let output = reckon::render_error_to_string_no_color(input, &err);
            $(
                assert!(
                    output.contains($fragment),
                    "missing {:?} in rendered output:\n{}",
                    $fragment,
                    output
                );
            )*
        }
    };
}
