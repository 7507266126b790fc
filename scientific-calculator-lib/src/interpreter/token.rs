use crate::interpreter::operator::BinaryOperator;
use std::fmt;
use std::fmt::Formatter;
use std::str;

/// A discrete part of an expression
#[derive(Clone, PartialEq)]
pub enum Token {
    /// Raw numeric text. Whether it is a well-formed number is decided later, by the parser.
    Number(String),
    Operator(BinaryOperator),
    LeftParentheses,
    RightParentheses,
}

pub static SYMBOLS: [char; 6] = ['+', '-', '*', '/', '(', ')'];

impl Token {
    pub fn from_symbol(symbol: char) -> Option<Token> {
        match symbol {
            '(' => Some(Token::LeftParentheses),
            ')' => Some(Token::RightParentheses),
            symbol => BinaryOperator::from_symbol(symbol).map(Token::Operator),
        }
    }

    /// The finite value of a number token, or `None` for anything else.
    pub fn value(&self) -> Option<f64> {
        match self {
            Token::Number(text) => parse_number(text),
            _ => None,
        }
    }

    /// Operators rank by their precedence, everything else ranks 0.
    pub(crate) fn precedence(&self) -> u8 {
        match self {
            Token::Operator(operator) => operator.precedence(),
            _ => 0,
        }
    }

    pub fn is_parenthesis(&self) -> bool {
        matches!(self, Token::LeftParentheses | Token::RightParentheses)
    }
}

/// Parses numeric text, rejecting anything that is not a finite number.
pub(crate) fn parse_number(text: &str) -> Option<f64> {
    text.parse::<f64>().ok().filter(|value| value.is_finite())
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Token::Number(text) => write!(f, "{}", text),
            Token::Operator(operator) => write!(f, "{}", operator),
            Token::LeftParentheses => write!(f, "("),
            Token::RightParentheses => write!(f, ")"),
        }
    }
}

impl str::FromStr for Token {
    type Err = ();

    fn from_str(input: &str) -> Result<Token, Self::Err> {
        let mut characters = input.chars();
        match (characters.next(), characters.next()) {
            (Some(symbol), None) if SYMBOLS.contains(&symbol) => {
                Token::from_symbol(symbol).ok_or(())
            }
            (Some(_), _) => Ok(Token::Number(input.to_string())),
            (None, _) => Err(()),
        }
    }
}

impl fmt::Debug for Token {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self)
    }
}
