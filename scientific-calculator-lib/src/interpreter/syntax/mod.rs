pub mod expression_tree;
mod syntax_visitor;
