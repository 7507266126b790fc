use crate::interpreter::error::CalcError;
use crate::interpreter::token::Token;

/// Evaluates postfix tokens with a single operand stack.
///
/// # Arguments
///
/// * `postfix_tokens`: Tokens, ordered in postfix notation.
///
/// returns: The single value left on the stack once every token has been consumed.
pub fn evaluate(postfix_tokens: &[Token]) -> Result<f64, CalcError> {
    let mut operands: Vec<f64> = Vec::new();

    for token in postfix_tokens {
        match token {
            Token::Number(text) => {
                let value = token
                    .value()
                    .ok_or_else(|| CalcError::invalid(format!("Malformed number '{}'", text)))?;
                operands.push(value);
            }
            Token::Operator(operator) => {
                let operand_two = operands.pop();
                let operand_one = operands.pop();
                let (a, b) = match (operand_one, operand_two) {
                    (Some(a), Some(b)) => (a, b),
                    _ => {
                        return Err(CalcError::invalid(format!(
                            "Expected two operands for '{}'",
                            operator
                        )))
                    }
                };
                operands.push(operator.evaluate(a, b)?);
            }
            Token::LeftParentheses | Token::RightParentheses => {
                return Err(CalcError::invalid(
                    "There should not be any parentheses present in postfix input",
                ))
            }
        }
    }

    match operands.as_slice() {
        [result] => Ok(*result),
        [] => Err(CalcError::invalid("Nothing to evaluate")),
        _ => Err(CalcError::invalid("Too many operands")),
    }
}
