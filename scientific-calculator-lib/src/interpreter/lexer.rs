use crate::interpreter::token::Token;

/// Splits an expression into tokens.
///
/// Whitespace is ignored, and so is any character that is neither a digit, a decimal point,
/// an operator nor a parenthesis. Numeric literals are not validated here, so `1.2.3`
/// becomes a single number token.
///
/// # Arguments
///
/// * `expression`: A text expression in infix format.
///
/// returns: The tokens of the expression, in the order they appear.
///
/// # Examples
///
/// ```
/// use scientific_calculator::interpreter::lexer::tokenize;
///
/// let tokens = tokenize("12 + 3");
/// assert_eq!(tokens.len(), 3);
/// ```
pub fn tokenize(expression: &str) -> Vec<Token> {
    let mut tokens = Vec::new();
    let mut number = String::new();

    for character in expression.chars().filter(|c| !c.is_whitespace()) {
        if character.is_ascii_digit() || character == '.' {
            number.push(character);
        } else if let Some(token) = Token::from_symbol(character) {
            flush_number(&mut number, &mut tokens);
            tokens.push(token);
        }
    }
    flush_number(&mut number, &mut tokens);

    tokens
}

fn flush_number(number: &mut String, tokens: &mut Vec<Token>) {
    if !number.is_empty() {
        tokens.push(Token::Number(std::mem::take(number)));
    }
}
