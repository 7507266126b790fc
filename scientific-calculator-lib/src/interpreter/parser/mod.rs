mod infix_converter;

use crate::interpreter::error::CalcError;
use crate::interpreter::parser::infix_converter::infix_to_postfix;
use crate::interpreter::token::Token;

/// Parses infix tokens into the equivalent postfix (Reverse Polish) sequence,
/// which can be evaluated with a single stack and no parentheses.
///
/// # Arguments
///
/// * `infix_tokens`: The tokens to parse, in infix format.
///
/// returns: The same tokens reordered into postfix format, without parentheses.
///
/// # Examples
///
/// ```
/// # use scientific_calculator::interpreter::error::CalcError;
/// # fn main() -> Result<(), CalcError> {
/// use scientific_calculator::interpreter::lexer::tokenize;
/// use scientific_calculator::interpreter::parser::parse;
/// use scientific_calculator::interpreter::postfix_to_string;
///
/// let postfix_tokens = parse(tokenize("(1 + 2) * 3"))?;
/// assert_eq!(postfix_to_string(&postfix_tokens), "1 2 + 3 *");
/// # Ok(()) }
/// ```
pub fn parse(infix_tokens: Vec<Token>) -> Result<Vec<Token>, CalcError> {
    infix_to_postfix(infix_tokens)
}
