use crate::interpreter::error::CalcError;
use crate::interpreter::operator::BinaryOperator;
use crate::interpreter::syntax::syntax_visitor::{walk_binary_operation, SyntaxVisitor};
use crate::interpreter::token::Token;
use ptree::{write_tree, TreeBuilder};
use std::fmt;
use std::fmt::{Debug, Display, Formatter};

/// An expression tree, used to show how an expression groups. Evaluation does not go
/// through it.
#[derive(Clone, PartialEq)]
pub enum Node {
    // Terminal symbols (leaves)
    Literal(f64),
    // Non-terminal symbols (non-leaves)
    BinaryOperation {
        operator: BinaryOperator,
        left_operand: Box<Node>,
        right_operand: Box<Node>,
    },
}

impl Node {
    pub fn new_literal(value: f64) -> Node {
        Node::Literal(value)
    }

    pub fn new_binary_operation(
        operator: BinaryOperator,
        left_operand: Node,
        right_operand: Node,
    ) -> Node {
        Node::BinaryOperation {
            operator,
            left_operand: Box::new(left_operand),
            right_operand: Box::new(right_operand),
        }
    }

    pub fn is_value(&self) -> bool {
        matches!(self, Node::Literal(_))
    }

    /// The number of operations in the tree.
    pub fn operation_count(&self) -> usize {
        match self {
            Node::Literal(_) => 0,
            Node::BinaryOperation {
                left_operand,
                right_operand,
                ..
            } => 1 + left_operand.operation_count() + right_operand.operation_count(),
        }
    }

    /// Calls the correct visitor method for the node variant on the given visitor.
    pub(crate) fn accept(&self, visitor: &mut impl SyntaxVisitor) {
        match self {
            Node::Literal(value) => visitor.visit_literal(*value),
            Node::BinaryOperation {
                operator,
                left_operand,
                right_operand,
            } => visitor.visit_binary_operation(operator, left_operand, right_operand),
        }
    }

    fn format_tree(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let mut visitor = TreeBuilderVisitor {
            builder: TreeBuilder::new("expression".into()),
        };
        self.accept(&mut visitor);

        let mut buffer: Vec<u8> = Vec::new();
        if write_tree(&visitor.builder.build(), &mut buffer).is_err() {
            return Err(fmt::Error);
        }
        let text = std::str::from_utf8(&buffer).map_err(|_| fmt::Error)?;
        f.write_str(text)
    }
}

impl Display for Node {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        self.format_tree(f)
    }
}

impl Debug for Node {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Node::Literal(value) => write!(f, "{:?}", value),
            Node::BinaryOperation { operator, .. } => write!(f, "{:?}", operator),
        }
    }
}

/// Generates an expression tree based off of the given tokens.
///
/// # Arguments
///
/// * `postfix_tokens`: Tokens, ordered in postfix notation, to convert to an expression tree.
///
/// returns: The root of the generated expression tree.
pub fn new_tree(postfix_tokens: &[Token]) -> Result<Node, CalcError> {
    let mut operands: Vec<Node> = Vec::new();

    for token in postfix_tokens {
        match token {
            Token::Number(text) => {
                let value = token
                    .value()
                    .ok_or_else(|| CalcError::invalid(format!("Malformed number '{}'", text)))?;
                operands.push(Node::new_literal(value));
            }
            Token::Operator(operator) => {
                let operand_two = operands
                    .pop()
                    .ok_or_else(|| CalcError::invalid("Expected a second operand"))?;
                let operand_one = operands
                    .pop()
                    .ok_or_else(|| CalcError::invalid("Expected a first operand"))?;
                operands.push(Node::new_binary_operation(
                    *operator,
                    operand_one,
                    operand_two,
                ));
            }
            Token::LeftParentheses | Token::RightParentheses => {
                return Err(CalcError::invalid(
                    "There should not be any parentheses present in postfix input",
                ))
            }
        }
    }

    let root = operands
        .pop()
        .ok_or_else(|| CalcError::invalid("No tree root found"))?;
    if !operands.is_empty() {
        return Err(CalcError::invalid("Too many operands"));
    }
    Ok(root)
}

struct TreeBuilderVisitor {
    builder: TreeBuilder,
}

impl SyntaxVisitor for TreeBuilderVisitor {
    fn visit_literal(&mut self, value: f64) {
        self.builder.add_empty_child(format!("{}", value));
    }
    fn visit_binary_operation(
        &mut self,
        operator: &BinaryOperator,
        left_operand: &Node,
        right_operand: &Node,
    ) {
        self.builder.begin_child(format!("{}", operator));
        walk_binary_operation(self, left_operand, right_operand);
        self.builder.end_child();
    }
}
