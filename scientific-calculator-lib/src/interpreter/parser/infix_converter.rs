use crate::interpreter::error::CalcError;
use crate::interpreter::operator::BinaryOperator;
use crate::interpreter::token::Token;

/// Converts infix tokens to postfix tokens using the Shunting-Yard algorithm.
pub(crate) fn infix_to_postfix(tokens: Vec<Token>) -> Result<Vec<Token>, CalcError> {
    let mut operators: Vec<Token> = vec![];
    let mut output: Vec<Token> = vec![];

    for token in tokens {
        match token {
            Token::Number(_) => {
                if token.value().is_none() {
                    return Err(CalcError::invalid(format!("Malformed number '{}'", token)));
                }
                output.push(token)
            }
            Token::LeftParentheses => operators.push(token),
            Token::RightParentheses => parse_closing_parenthesis_token(&mut operators, &mut output)?,
            Token::Operator(operator) => parse_operator_token(&mut operators, &mut output, operator),
        };
    }

    transfer_leftover_operators(&mut operators, &mut output)?;

    Ok(output)
}

fn transfer_leftover_operators(
    operators: &mut Vec<Token>,
    output: &mut Vec<Token>,
) -> Result<(), CalcError> {
    while let Some(operator) = operators.pop() {
        if operator.is_parenthesis() {
            return Err(CalcError::MismatchedParentheses);
        }
        output.push(operator);
    }
    Ok(())
}

fn parse_closing_parenthesis_token(
    operators: &mut Vec<Token>,
    output: &mut Vec<Token>,
) -> Result<(), CalcError> {
    loop {
        match operators.pop() {
            None => return Err(CalcError::MismatchedParentheses),
            // Discard the open parenthesis.
            Some(Token::LeftParentheses) => return Ok(()),
            Some(operator) => output.push(operator),
        }
    }
}

fn parse_operator_token(
    operators: &mut Vec<Token>,
    output: &mut Vec<Token>,
    operator: BinaryOperator,
) {
    // Equal precedence pops too, which makes every operator left-associative.
    // An open parenthesis has precedence 0 and therefore stops the popping.
    while let Some(top_of_operator_stack) = operators.last() {
        if top_of_operator_stack.precedence() < operator.precedence() {
            break;
        }
        if let Some(other_operator) = operators.pop() {
            output.push(other_operator);
        }
    }

    operators.push(Token::Operator(operator));
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn tokens(texts: &[&str]) -> Vec<Token> {
        texts.iter().map(|text| text.parse().unwrap()).collect()
    }

    #[test]
    fn infix_to_postfix_simple_expression() {
        // 1 + 2
        let infix = tokens(&["1", "+", "2"]);
        let postfix = tokens(&["1", "2", "+"]);

        let actual = infix_to_postfix(infix).unwrap();

        assert_eq!(actual, postfix)
    }

    #[test]
    fn infix_to_postfix_simple_parenthesised_expression() {
        // 1 - (2 + 3)
        let infix = tokens(&["1", "-", "(", "2", "+", "3", ")"]);
        let postfix = tokens(&["1", "2", "3", "+", "-"]);

        let actual = infix_to_postfix(infix).unwrap();

        assert_eq!(actual, postfix)
    }

    #[test]
    fn infix_to_postfix_multi_operator_expression() {
        // 1 + 2 * 3 - 4
        let infix = tokens(&["1", "+", "2", "*", "3", "-", "4"]);
        let postfix = tokens(&["1", "2", "3", "*", "+", "4", "-"]);

        let actual = infix_to_postfix(infix).unwrap();

        assert_eq!(actual, postfix)
    }

    #[test]
    fn infix_to_postfix_equal_precedence_is_left_associative() {
        // 2 - 3 - 4
        let infix = tokens(&["2", "-", "3", "-", "4"]);
        let postfix = tokens(&["2", "3", "-", "4", "-"]);

        let actual = infix_to_postfix(infix).unwrap();

        assert_eq!(actual, postfix)
    }

    #[test]
    fn infix_to_postfix_nested_parenthesis_expression() {
        // 1 + ((2 + 3) * 4)
        let infix = tokens(&["1", "+", "(", "(", "2", "+", "3", ")", "*", "4", ")"]);
        let postfix = tokens(&["1", "2", "3", "+", "4", "*", "+"]);

        let actual = infix_to_postfix(infix).unwrap();

        assert_eq!(actual, postfix)
    }

    #[test]
    fn infix_to_postfix_extra_closing_parenthesis_should_return_err() {
        // (1 + 2))
        let infix = tokens(&["(", "1", "+", "2", ")", ")"]);

        let actual = infix_to_postfix(infix);

        assert_eq!(actual, Err(CalcError::MismatchedParentheses));
    }

    #[test]
    fn infix_to_postfix_unclosed_parenthesis_should_return_err() {
        // (1 + 2
        let infix = tokens(&["(", "1", "+", "2"]);

        let actual = infix_to_postfix(infix);

        assert_eq!(actual, Err(CalcError::MismatchedParentheses));
    }

    #[test]
    fn infix_to_postfix_malformed_number_should_return_err() {
        let infix = tokens(&["1.2.3", "+", "1"]);

        let actual = infix_to_postfix(infix);

        assert!(matches!(actual, Err(CalcError::InvalidExpression(_))));
    }

    #[test]
    fn infix_to_postfix_keeps_consecutive_operators() {
        // 2 + + 3
        let infix = tokens(&["2", "+", "+", "3"]);
        let postfix = tokens(&["2", "+", "3", "+"]);

        let actual = infix_to_postfix(infix).unwrap();

        assert_eq!(actual, postfix)
    }
}
