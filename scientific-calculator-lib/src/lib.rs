//! Expression evaluation for a scientific calculator, along with the formatting, input
//! validation and persisted state that a calculator front-end needs around it.

pub mod formatter;
pub mod interpreter;
pub mod state;
pub mod validators;
