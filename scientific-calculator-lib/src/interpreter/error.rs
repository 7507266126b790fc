use thiserror::Error;

/// Everything that can go wrong while evaluating an expression or a scientific function.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CalcError {
    #[error("Mismatched parentheses")]
    MismatchedParentheses,

    #[error("Invalid expression: {0}")]
    InvalidExpression(String),

    #[error("Division by zero")]
    DivisionByZero,

    #[error("The square root of a negative number is imaginary")]
    ImaginaryResult,

    #[error("Unsupported function: {0}")]
    UnsupportedFunction(String),
}

impl CalcError {
    pub(crate) fn invalid(reason: impl Into<String>) -> CalcError {
        CalcError::InvalidExpression(reason.into())
    }
}
