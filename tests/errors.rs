/*
 * Error message tests.
 *
 * The message text is shown to users verbatim, so these expectations are
 * part of the public behavior.
 */

#[macro_use]
mod cases;

use reckon::{EvaluationErrorKind, EvaluatorOptions, evaluate_with_options};

test_case!(name: empty, input: "", error: "Empty expression.");
test_case!(name: whitespace_only, input: "   ", error: "Empty expression.");
test_case!(name: division_by_zero, input: "5/0", error: "Division by zero.");
test_case!(
    name: division_by_zero_subexpression,
    input: "1/(3-3)",
    error: "Division by zero.",
);
test_case!(
    name: negative_square_root,
    input: "sqrt(-1)",
    error: "Cannot take square root of a negative number.",
);
test_case!(
    name: letters,
    input: "abc",
    error: "Expected number at position 0, got 'a'.",
);
test_case!(
    name: trailing_parenthesis,
    input: "2+3)",
    error: "Unexpected character ')' at position 3.",
);
test_case!(
    name: two_numbers,
    input: "2 3",
    error: "Unexpected character '3' at position 1.",
);
test_case!(
    name: implicit_multiplication,
    input: "2(3)",
    error: "Unexpected character '(' at position 1.",
);
test_case!(
    name: scientific_notation,
    input: "1e3",
    error: "Unexpected character 'e' at position 1.",
);
test_case!(
    name: unknown_function,
    input: "sin(1)",
    error: "Expected number at position 0, got 's'.",
);
test_case!(
    name: missing_right_operand,
    input: "4*",
    error: "Expected number at position 2, got 'end of input'.",
);
test_case!(
    name: unclosed_group,
    input: "(1+2",
    error: "Expected ')' at position 4, got 'end of input'.",
);
test_case!(
    name: unclosed_square_root,
    input: "sqrt(4",
    error: "Expected ')' at position 6, got 'end of input'.",
);
test_case!(
    name: malformed_number,
    input: "1.2.3+4",
    error: "Invalid number '1.2.3' at position 0.",
);
test_case!(
    name: leading_dot,
    input: ".5",
    error: "Invalid number '.5' at position 0.",
);
test_case!(
    name: lone_dot,
    input: ".",
    error: "Invalid number '.' at position 0.",
);
test_case!(
    name: positions_ignore_whitespace,
    input: "1 + 2 + x",
    error: "Expected number at position 4, got 'x'.",
);

test_case!(
    name: rendered_unexpected_character,
    input: "2 + 3 )",
    rendered: ["Unexpected character ')' at position 3.", "2 + 3 )", "C002"],
);
test_case!(
    name: rendered_division_by_zero,
    input: "8 / (2 - 2)",
    rendered: ["Division by zero.", "8 / (2 - 2)", "C006"],
);
test_case!(
    name: rendered_depth,
    input: "((((((((((((((((((((((((((((((((((((((((((((((((((((1))))))))))))))))))))))))))))))))))))))))))))))))))))",
    rendered: ["Expression is too deeply nested.", "C008"],
);

#[test]
fn deep_nesting_fails_without_stack_overflow() {
    let input = format!("{}1{}", "(".repeat(10_000), ")".repeat(10_000));
    let err = reckon::evaluate(&input).unwrap_err();
    assert!(matches!(
        err.kind,
        EvaluationErrorKind::TooDeeplyNested { max_depth: 50 }
    ));
}

#[test]
fn nesting_limit_is_configurable() {
    let input = format!("{}1{}", "(".repeat(60), ")".repeat(60));
    assert!(reckon::evaluate(&input).is_err());

    let options = EvaluatorOptions { max_depth: 100 };
    assert_eq!(evaluate_with_options(&input, &options).unwrap(), 1.0);
}

#[test]
fn errors_carry_spans_into_original_text() {
    let input = "1 +   foo";
    let err = reckon::evaluate(input).unwrap_err();
    let span = err.span.expect("span");
    assert_eq!(&input[span.0], "f");
}
