#[macro_use]
extern crate lazy_static;
extern crate unicode_segmentation;

pub mod ast;
pub mod calculator;
pub mod config;
pub mod error;
pub mod fraction;
pub mod interpreter;
pub mod parser;
pub mod scanner;
pub mod token;
pub mod util;
pub mod value;

#[cfg(test)]
mod tests;

pub use crate::ast::{ExpressionTree, Operator};
pub use crate::calculator::{evaluate, Calculator};
pub use crate::config::NumberFormat;
pub use crate::error::CalcError;
pub use crate::fraction::Fraction;
pub use crate::interpreter::{Interpreter, Reduction};
pub use crate::parser::{parse, parse_with_format};
pub use crate::value::Number;
