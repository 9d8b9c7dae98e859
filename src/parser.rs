use num_traits::ToPrimitive;

use crate::ast::*;
use crate::config::NumberFormat;
use crate::error::{expected_list, CalcError};
use crate::scanner::Scanner;
use crate::token::*;
use crate::value::Number;

const OPERAND_START: [TokenType; 3] = [
    TokenType::LeftParen,
    TokenType::IntegerLiteral,
    TokenType::FloatLiteral,
];

const OPERAND_END: [TokenType; 7] = [
    TokenType::Star,
    TokenType::Slash,
    TokenType::Plus,
    TokenType::Minus,
    TokenType::Caret,
    TokenType::RightParen,
    TokenType::EndOfInput,
];

pub fn parse(source: &str) -> Result<ExpressionTree, CalcError> {
    parse_with_format(source, NumberFormat::default())
}

pub fn parse_with_format(source: &str, format: NumberFormat) -> Result<ExpressionTree, CalcError> {
    let parser = Parser::new(Scanner::with_format(source, format))?;

    parser.parse()
}

// Single-pass tree builder.  Each literal is wrapped in a node for the
// operator after it, and the node's level (depth * 3 + tier) decides where it
// goes.
pub struct Parser<'source> {
    scanner: Scanner<'source>,
    current: Token,
    tree: ExpressionTree,
    depth: u32,
    negate: bool,
}

impl<'source> Parser<'source> {
    pub fn new(mut scanner: Scanner<'source>) -> Result<Parser<'source>, CalcError> {
        let current = scanner.next_token()?;

        Ok(Parser {
            scanner,
            current,
            tree: ExpressionTree::default(),
            depth: 0,
            negate: false,
        })
    }

    pub fn parse(mut self) -> Result<ExpressionTree, CalcError> {
        loop {
            match self.current.token_type {
                TokenType::EndOfInput => break,
                TokenType::LeftParen => {
                    self.depth += 1;
                    self.advance()?;
                }
                TokenType::Minus | TokenType::Plus => self.sign()?,
                TokenType::IntegerLiteral | TokenType::FloatLiteral => self.expression_step()?,
                _ => return Err(self.unexpected(&OPERAND_START)),
            };
        }

        if self.tree.is_empty() {
            return Err(self.unexpected(&OPERAND_START));
        }

        // A dangling operator gets zero as its right operand: "5+" is "5+0".
        if let Some(slot) = self.tree.open_slot() {
            let zero = self.tree.add_leaf(Number::Integer(0));
            self.tree.node_mut(slot).right = Some(zero);
        }

        Ok(self.tree)
    }

    // A literal, any closing parentheses after it, and the operator or end of
    // input that follows.
    fn expression_step(&mut self) -> Result<(), CalcError> {
        let literal = self.literal()?;
        self.advance()?;

        while self.current.token_type == TokenType::RightParen {
            // Unmatched closing parentheses are ignored.
            self.depth = self.depth.saturating_sub(1);
            self.advance()?;
        }

        let operator = match self.current.token_type {
            TokenType::EndOfInput => return self.finish(literal),
            token_type => match Operator::from_token(token_type) {
                None => return Err(self.unexpected(&OPERAND_END)),
                Some(operator) => operator,
            },
        };

        let level = self.level(operator.tier());
        let candidate = self.tree.add_operation(operator, level, literal);
        self.insert(candidate)?;

        self.advance()
    }

    // Unary plus is dropped.  Unary minus is folded into the literal that
    // follows, or becomes an implicit "-1 *" in front of a group.
    fn sign(&mut self) -> Result<(), CalcError> {
        if self.current.token_type == TokenType::Minus {
            self.negate = true;
        }
        self.advance()?;

        match self.current.token_type {
            token_type if token_type.is_literal() => self.expression_step(),
            TokenType::LeftParen => {
                if self.negate {
                    self.negate = false;
                    let minus_one = self.tree.add_leaf(Number::Integer(-1));
                    let level = self.level(Tier::Exponential);
                    let candidate = self.tree.add_operation(Operator::Multiply, level, minus_one);
                    self.insert(candidate)?;
                }

                Ok(())
            }
            _ => Err(self.unexpected(&OPERAND_START)),
        }
    }

    fn literal(&mut self) -> Result<NodeId, CalcError> {
        let text = if self.negate {
            format!("-{}", self.current.text)
        } else {
            self.current.text.clone()
        };
        self.negate = false;

        let number = match self.current.token_type {
            // Integers too wide for i64 are read as floats.
            TokenType::IntegerLiteral => text.parse::<i64>()
                .map(Number::Integer)
                .or_else(|_| text.parse::<f64>().map(Number::Float))
                .ok(),
            _ => text.parse::<f64>().map(Number::Float).ok(),
        };

        match number {
            None => Err(CalcError::MalformedNumber(
                self.error_here(&format!("'{}' is not a number", text)))),
            Some(number) => Ok(self.tree.add_leaf(number)),
        }
    }

    // The last literal fills the open slot, or is the whole expression.
    fn finish(&mut self, literal: NodeId) -> Result<(), CalcError> {
        if self.tree.is_empty() {
            self.tree.set_root(literal);
            return Ok(());
        }

        let slot = self.tree.open_slot().ok_or(CalcError::IncompleteExpression)?;
        self.tree.node_mut(slot).right = Some(literal);

        Ok(())
    }

    fn insert(&mut self, candidate: NodeId) -> Result<(), CalcError> {
        let root = match self.tree.root() {
            None => {
                self.tree.set_root(candidate);
                return Ok(());
            }
            Some(root) => root,
        };

        let level = self.level_of(candidate);
        let slot = self.tree.open_slot().ok_or(CalcError::IncompleteExpression)?;
        let slot_level = self.level_of(slot);

        if slot_level < level || (slot_level == level && ! self.leans_left(slot)) {
            log::trace!("node {} (level {}) goes below node {}", candidate, level, slot);
            self.tree.node_mut(slot).right = Some(candidate);
            return Ok(());
        }

        // The slot takes the candidate's literal and the candidate moves up
        // past every ancestor that binds tighter.
        let literal = self.tree.node_mut(candidate).left.take();
        let slot_commutes = self.tree.operator(slot).map_or(false, |op| op.is_commutative());
        let slot_left = {
            let slot_node = self.tree.node_mut(slot);
            slot_node.right = literal;
            slot_node.left
        };
        let left_is_number = slot_left.map_or(false, |left| self.tree.is_number(left));
        if slot_level > level && slot_commutes && ! left_is_number {
            let slot_node = self.tree.node_mut(slot);
            std::mem::swap(&mut slot_node.left, &mut slot_node.right);
        }

        let mut node = Some(slot);
        while let Some(id) = node {
            if self.level_of(id) <= level {
                break;
            }
            node = self.tree.parent(id);
        }

        match node {
            None => {
                log::trace!("node {} (level {}) becomes the root", candidate, level);
                self.tree.node_mut(candidate).left = Some(root);
                self.tree.set_root(candidate);
            }
            Some(ancestor) if self.level_of(ancestor) == level && self.leans_left(ancestor) => {
                log::trace!("node {} (level {}) replaces node {}", candidate, level, ancestor);
                self.replace(ancestor, candidate);
            }
            Some(ancestor) => {
                log::trace!("node {} (level {}) is spliced below node {}", candidate, level, ancestor);
                let previous = self.tree.right(ancestor);
                self.tree.node_mut(candidate).left = previous;
                self.tree.node_mut(ancestor).right = Some(candidate);
            }
        }

        Ok(())
    }

    // `-` and `/` chains are built to the left so `8-2-2` reads `(8-2)-2`.
    // Other equal-level chains lean right.
    fn leans_left(&self, id: NodeId) -> bool {
        matches!(self.tree.operator(id), Some(Operator::Subtract) | Some(Operator::Divide))
    }

    // Puts `candidate` where `old` was, with `old` as its left operand.
    fn replace(&mut self, old: NodeId, candidate: NodeId) {
        match self.tree.parent(old) {
            None => self.tree.set_root(candidate),
            Some(parent) => {
                let parent_node = self.tree.node_mut(parent);
                if parent_node.left == Some(old) {
                    parent_node.left = Some(candidate);
                } else {
                    parent_node.right = Some(candidate);
                }
            }
        }
        self.tree.node_mut(candidate).left = Some(old);
    }

    fn level(&self, tier: Tier) -> u32 {
        self.depth * LEVELS_PER_GROUP + tier.to_u32().unwrap_or_default()
    }

    fn level_of(&self, id: NodeId) -> u32 {
        self.tree.node(id).level().unwrap_or_default()
    }

    fn advance(&mut self) -> Result<(), CalcError> {
        self.current = self.scanner.next_token()?;

        Ok(())
    }

    fn error_here(&self, message: &str) -> String {
        let delta = self.current.column as isize - self.scanner.cursor() as isize;

        self.scanner.error_string(message, delta)
    }

    fn unexpected(&self, expected: &[TokenType]) -> CalcError {
        let message = format!("Unexpected token: '{}'\nIs {}\tShould be {}",
                              self.current.text,
                              self.current.token_type,
                              expected_list(expected));

        CalcError::Syntax {
            token: self.current.text.clone(),
            found: self.current.token_type,
            expected: expected.to_vec(),
            message: self.error_here(&message),
        }
    }
}
