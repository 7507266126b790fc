pub mod error;
pub mod evaluator;
pub mod lexer;
mod operator;
pub mod parser;
pub mod percentage;
pub mod scientific;
pub mod syntax;
pub mod token;

use crate::interpreter::error::CalcError;
use crate::interpreter::scientific::{AngleUnit, ScientificFunction};
use crate::interpreter::token::Token;
use anyhow::{Context, Result};
use itertools::Itertools;
use log::trace;
use string_builder::Builder;
use syntax::expression_tree::Node;

pub use operator::BinaryOperator;
pub use percentage::calculate_percent;

/// Evaluates an arithmetic expression.
///
/// Supports numbers, `+ - * /` with the usual precedence, and parentheses.
/// Characters outside that set are ignored.
///
/// # Arguments
///
/// * `expression`: A text expression in infix format.
///
/// returns: The value of the expression.
///
/// # Examples
///
/// ```
/// use scientific_calculator::interpreter::calculate;
///
/// let value = calculate("2 + 3 * 4").unwrap();
/// assert_eq!(value, 14.0);
/// ```
pub fn calculate(expression: &str) -> Result<f64, CalcError> {
    let postfix_tokens = to_postfix(expression)?;
    trace!("Postfix tokens: {}", postfix_to_string(&postfix_tokens));
    evaluator::evaluate(&postfix_tokens)
}

/// Applies a named scientific function to a single value.
///
/// # Arguments
///
/// * `name`: One of `sin, cos, tan, asin, acos, atan, log, ln, exp, sqrt, cbrt, pow2, inv,
///   abs, fact`.
/// * `value`: The operand.
/// * `unit`: The unit angles are given in, or returned in for the inverse functions.
///
/// returns: The function value.
///
/// # Examples
///
/// ```
/// use scientific_calculator::interpreter::calculate_scientific_function;
/// use scientific_calculator::interpreter::scientific::AngleUnit;
///
/// let value = calculate_scientific_function("cos", 90.0, AngleUnit::Degrees).unwrap();
/// assert_eq!(value, 0.0);
/// ```
pub fn calculate_scientific_function(
    name: &str,
    value: f64,
    unit: AngleUnit,
) -> Result<f64, CalcError> {
    let function: ScientificFunction = name.parse()?;
    function.evaluate(value, unit)
}

/// Converts an infix expression into postfix tokens.
pub fn to_postfix(expression: &str) -> Result<Vec<Token>, CalcError> {
    let tokens = lexer::tokenize(expression);
    parser::parse(tokens)
}

/// Builds the expression tree of an expression, for display.
///
/// # Examples
///
/// ```
/// # use scientific_calculator::interpreter::error::CalcError;
/// # fn main() -> Result<(), CalcError> {
/// use scientific_calculator::interpreter::explain;
///
/// let tree = explain("(1 + 2) * 3")?;
/// print!("{}", tree);
/// # Ok(()) }
/// ```
pub fn explain(expression: &str) -> Result<Node, CalcError> {
    let postfix_tokens = to_postfix(expression)?;
    syntax::expression_tree::new_tree(&postfix_tokens)
}

/// Pretty-prints the given infix tokens with added whitespace.
///
/// # Arguments
///
/// * `tokens`: The tokens to print.
///
/// returns: A pretty-printed text-version of the given tokens.
///
/// # Examples
///
/// ```
/// use scientific_calculator::interpreter::lexer::tokenize;
/// use scientific_calculator::interpreter::tokens_to_string;
/// # use anyhow::Result;
///
/// # fn main() -> Result<()> {
/// let pretty_printed_tokens = tokens_to_string(tokenize("(1+2)*3"))?;
/// assert_eq!(pretty_printed_tokens, "(1 + 2) * 3");
/// # Ok::<(), anyhow::Error>(()) }
/// ```
pub fn tokens_to_string(tokens: Vec<Token>) -> Result<String> {
    let mut builder = Builder::new(tokens.len());

    for token in tokens {
        match token {
            Token::Operator(_) => {
                builder.append(" ");
                builder.append(token.to_string());
                builder.append(" ");
            }
            _ => builder.append(token.to_string()),
        }
    }

    builder.string().context("Failed to build token string")
}

/// Prints postfix tokens separated by single spaces.
pub fn postfix_to_string(tokens: &[Token]) -> String {
    tokens.iter().join(" ")
}

#[cfg(test)]
mod interpreter_tests {
    use super::*;
    use parameterized_macro::parameterized;

    #[parameterized(
    expression = {
    "2 + 3",
    "5 - 3",
    "4 * 3",
    "12 / 4",
    "2 + 3 * 4",
    "10 - 6 / 2",
    "(2 + 3) * 4",
    "((2 + 3) * 4) / 2",
    "10 - 2 - 3",
    "2 - 3 - 4",
    "100 / 10 / 5",
    "1.5 * 4",
    },
    expected = {
    5.0,
    2.0,
    12.0,
    3.0,
    14.0,
    7.0,
    20.0,
    10.0,
    5.0,
    -5.0,
    2.0,
    6.0,
    }
    )]
    fn calculate_expression_returns_correct_value(expression: &str, expected: f64) {
        assert_eq!(calculate(expression), Ok(expected));
    }

    #[test]
    fn division_by_zero_returns_err() {
        assert_eq!(calculate("5 / 0"), Err(CalcError::DivisionByZero));
    }

    #[test]
    fn unclosed_parenthesis_returns_err() {
        assert_eq!(calculate("(2 + 3"), Err(CalcError::MismatchedParentheses));
    }

    #[test]
    fn unopened_parenthesis_returns_err() {
        assert_eq!(calculate("2 + 3)"), Err(CalcError::MismatchedParentheses));
    }

    #[test]
    fn consecutive_operators_return_err() {
        assert!(matches!(
            calculate("2 + + 3"),
            Err(CalcError::InvalidExpression(_))
        ));
    }

    #[test]
    fn malformed_number_returns_err() {
        assert!(matches!(
            calculate("1.2.3 + 1"),
            Err(CalcError::InvalidExpression(_))
        ));
    }

    #[test]
    fn empty_expression_returns_err() {
        assert!(matches!(calculate(""), Err(CalcError::InvalidExpression(_))));
    }

    #[test]
    fn unknown_characters_are_ignored() {
        assert_eq!(calculate("2 + 3 = "), Ok(5.0));
    }

    #[test]
    fn calculate_is_repeatable() {
        let expression = "(7 - 2) * 3 / 4";

        let first = calculate(expression);
        let second = calculate(expression);

        assert_eq!(first, second);
        assert_eq!(first, Ok(3.75));
    }

    #[test]
    fn scientific_function_by_name() {
        assert_eq!(
            calculate_scientific_function("sin", 90.0, AngleUnit::Degrees),
            Ok(1.0)
        );
        assert_eq!(
            calculate_scientific_function("sqrt", 16.0, AngleUnit::Radians),
            Ok(4.0)
        );
        assert_eq!(
            calculate_scientific_function("log", 100.0, AngleUnit::Degrees),
            Ok(2.0)
        );
    }

    #[test]
    fn scientific_function_errors_are_typed() {
        assert_eq!(
            calculate_scientific_function("sqrt", -1.0, AngleUnit::Degrees),
            Err(CalcError::ImaginaryResult)
        );
        assert_eq!(
            calculate_scientific_function("inv", 0.0, AngleUnit::Degrees),
            Err(CalcError::DivisionByZero)
        );
        assert_eq!(
            calculate_scientific_function("mod", 1.0, AngleUnit::Degrees),
            Err(CalcError::UnsupportedFunction("mod".to_string()))
        );
    }

    #[test]
    fn expression_regenerates_with_normalized_spacing() {
        let tokens = lexer::tokenize("((2+3)*4)/2");

        let regenerated = tokens_to_string(tokens).unwrap();

        assert_eq!(regenerated, "((2 + 3) * 4) / 2");
    }

    #[test]
    fn postfix_form_is_space_separated() {
        let postfix = to_postfix("10 - 2 - 3").unwrap();

        assert_eq!(postfix_to_string(&postfix), "10 2 - 3 -");
    }

    #[test]
    fn explain_builds_tree_of_expression() {
        let tree = explain("1 + 2 * 3").unwrap();

        assert_eq!(tree.operation_count(), 2);
    }

    #[test]
    fn explain_reports_mismatched_parentheses() {
        assert!(matches!(
            explain("(1 + 2"),
            Err(CalcError::MismatchedParentheses)
        ));
    }
}
