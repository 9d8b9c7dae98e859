use crate::ast::ExpressionTree;
use crate::config::NumberFormat;
use crate::error::CalcError;
use crate::interpreter::{Interpreter, Reduction};
use crate::parser;
use crate::value::Number;

#[derive(Clone, Debug)]
pub struct Calculator<'a> {
    source: &'a str,
    format: NumberFormat,
    debug: bool,
}

impl<'a> Calculator<'a> {
    pub fn new(source: &'a str) -> Calculator<'a> {
        Calculator::with_format(source, NumberFormat::default())
    }

    pub fn with_format(source: &'a str, format: NumberFormat) -> Calculator<'a> {
        Calculator {
            source,
            format,
            debug: false,
        }
    }

    // Logs the finished tree before it is evaluated.
    pub fn debug(mut self, debug: bool) -> Calculator<'a> {
        self.debug = debug;
        self
    }

    pub fn source(&self) -> &'a str {
        self.source
    }

    pub fn tree(&self) -> Result<ExpressionTree, CalcError> {
        let tree = parser::parse_with_format(self.source, self.format.clone())?;
        if self.debug {
            log::debug!("expression tree for '{}':\n{}", self.source, tree.dump());
        }

        Ok(tree)
    }

    pub fn evaluate(&self) -> Result<String, CalcError> {
        Ok(self.evaluate_number()?.to_string())
    }

    pub fn evaluate_number(&self) -> Result<Number, CalcError> {
        Interpreter::new().evaluate(self.tree()?)
    }

    pub fn evaluate_traced(&self) -> Result<(Number, Vec<Reduction>), CalcError> {
        let mut interpreter = Interpreter::with_steps();
        let number = interpreter.evaluate(self.tree()?)?;

        Ok((number, interpreter.into_steps()))
    }
}

pub fn evaluate(source: &str) -> Result<String, CalcError> {
    Calculator::new(source).evaluate()
}
