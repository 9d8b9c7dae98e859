use std::fmt;

use crate::ast::*;
use crate::error::CalcError;
use crate::value::Number;

#[derive(Clone, Debug, PartialEq)]
pub struct Reduction {
    pub left: Number,
    pub operator: Operator,
    pub right: Number,
    pub result: Number,
}

impl fmt::Display for Reduction {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{} {} {} = {}", self.left, self.operator, self.right, self.result)
    }
}

#[derive(Debug, Default)]
pub struct Interpreter {
    record_steps: bool,
    steps: Vec<Reduction>,
}

impl Interpreter {
    pub fn new() -> Interpreter {
        Interpreter::default()
    }

    // Keeps every reduction so callers can show how the result came about.
    pub fn with_steps() -> Interpreter {
        Interpreter {
            record_steps: true,
            steps: Vec::new(),
        }
    }

    pub fn steps(&self) -> &[Reduction] {
        &self.steps
    }

    pub fn into_steps(self) -> Vec<Reduction> {
        self.steps
    }

    pub fn evaluate(&mut self, mut tree: ExpressionTree) -> Result<Number, CalcError> {
        let root = tree.root().ok_or(CalcError::IncompleteExpression)?;

        loop {
            if let Some(number) = tree.number(root) {
                return Ok(number);
            }

            let id = reducible(&tree, root).ok_or(CalcError::IncompleteExpression)?;
            let reduction = reduce(&tree, id)?;
            log::debug!("performing operation: {}", reduction);

            tree.collapse(id, reduction.result);
            if self.record_steps {
                self.steps.push(reduction);
            }
        }
    }
}

// Follows the left branch unless it is already a number, stopping at the first
// operation with two numeric children.
fn reducible(tree: &ExpressionTree, root: NodeId) -> Option<NodeId> {
    let mut id = root;
    loop {
        let left = tree.left(id)?;
        let right = tree.right(id)?;

        match (tree.is_number(left), tree.is_number(right)) {
            (true, true) => return Some(id),
            (true, false) => id = right,
            (false, _) => id = left,
        }
    }
}

fn reduce(tree: &ExpressionTree, id: NodeId) -> Result<Reduction, CalcError> {
    let operator = tree.operator(id).ok_or(CalcError::IncompleteExpression)?;
    let left = tree.left(id)
        .and_then(|left| tree.number(left))
        .ok_or(CalcError::IncompleteExpression)?;
    let right = tree.right(id)
        .and_then(|right| tree.number(right))
        .ok_or(CalcError::IncompleteExpression)?;

    let result = match operator {
        Operator::Add => left.add(right),
        Operator::Subtract => left.subtract(right),
        Operator::Multiply => left.multiply(right),
        Operator::Divide => left.divide(right)?,
        Operator::Power => left.power(right),
    };

    Ok(Reduction {
        left,
        operator,
        right,
        result,
    })
}
