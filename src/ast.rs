use std::fmt;

use num_derive::ToPrimitive;

use crate::token::TokenType;
use crate::value::Number;

pub type NodeId = usize;

// Levels reserved for each parenthesis depth.  Operators inside a group always
// bind tighter than any operator outside it.
pub const LEVELS_PER_GROUP: u32 = 3;

// Added to the level of an operator within one parenthesis depth.
#[derive(Copy, Clone, Debug, Eq, PartialEq, ToPrimitive)]
pub enum Tier {
    Additive = 0,
    Multiplicative = 1,
    Exponential = 2,
}

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum Operator {
    Add,
    Subtract,
    Multiply,
    Divide,
    Power,
}

impl Operator {
    pub fn from_token(token_type: TokenType) -> Option<Operator> {
        match token_type {
            TokenType::Plus => Some(Operator::Add),
            TokenType::Minus => Some(Operator::Subtract),
            TokenType::Star => Some(Operator::Multiply),
            TokenType::Slash => Some(Operator::Divide),
            TokenType::Caret => Some(Operator::Power),
            _ => None,
        }
    }

    pub fn tier(&self) -> Tier {
        match self {
            Operator::Add | Operator::Subtract => Tier::Additive,
            Operator::Multiply | Operator::Divide => Tier::Multiplicative,
            Operator::Power => Tier::Exponential,
        }
    }

    pub fn is_commutative(&self) -> bool {
        matches!(self, Operator::Add | Operator::Multiply)
    }


    pub fn symbol(&self) -> &'static str {
        match self {
            Operator::Add => "+",
            Operator::Subtract => "-",
            Operator::Multiply => "*",
            Operator::Divide => "/",
            Operator::Power => "^",
        }
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum NodeKind {
    Leaf(Number),
    Operation {
        operator: Operator,
        level: u32,
    },
}

#[derive(Clone, Debug, PartialEq)]
pub struct Node {
    pub kind: NodeKind,
    pub left: Option<NodeId>,
    pub right: Option<NodeId>,
}

impl Node {
    pub fn is_number(&self) -> bool {
        matches!(self.kind, NodeKind::Leaf(_))
    }

    pub fn number(&self) -> Option<Number> {
        match self.kind {
            NodeKind::Leaf(number) => Some(number),
            NodeKind::Operation { .. } => None,
        }
    }

    pub fn operator(&self) -> Option<Operator> {
        match self.kind {
            NodeKind::Leaf(_) => None,
            NodeKind::Operation { operator, .. } => Some(operator),
        }
    }

    pub fn level(&self) -> Option<u32> {
        match self.kind {
            NodeKind::Leaf(_) => None,
            NodeKind::Operation { level, .. } => Some(level),
        }
    }
}

// Arena of nodes.  Children of a collapsed operation stay in the arena but are
// unreachable.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ExpressionTree {
    nodes: Vec<Node>,
    root: Option<NodeId>,
}

impl ExpressionTree {
    pub fn root(&self) -> Option<NodeId> {
        self.root
    }

    pub fn node(&self, id: NodeId) -> &Node {
        &self.nodes[id]
    }


    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    pub fn left(&self, id: NodeId) -> Option<NodeId> {
        self.nodes[id].left
    }

    pub fn right(&self, id: NodeId) -> Option<NodeId> {
        self.nodes[id].right
    }

    pub fn operator(&self, id: NodeId) -> Option<Operator> {
        self.nodes[id].operator()
    }

    pub fn number(&self, id: NodeId) -> Option<Number> {
        self.nodes[id].number()
    }

    pub fn is_number(&self, id: NodeId) -> bool {
        self.nodes[id].is_number()
    }

    pub(crate) fn set_root(&mut self, id: NodeId) {
        self.root = Some(id);
    }

    pub(crate) fn node_mut(&mut self, id: NodeId) -> &mut Node {
        &mut self.nodes[id]
    }

    pub(crate) fn add_leaf(&mut self, number: Number) -> NodeId {
        self.push(Node {
            kind: NodeKind::Leaf(number),
            left: None,
            right: None,
        })
    }

    pub(crate) fn add_operation(&mut self, operator: Operator, level: u32, left: NodeId) -> NodeId {
        self.push(Node {
            kind: NodeKind::Operation {
                operator,
                level,
            },
            left: Some(left),
            right: None,
        })
    }

    // Turns an operation into a leaf.  Its children become unreachable.
    pub(crate) fn collapse(&mut self, id: NodeId, number: Number) {
        let node = &mut self.nodes[id];
        node.kind = NodeKind::Leaf(number);
        node.left = None;
        node.right = None;
    }

    fn push(&mut self, node: Node) -> NodeId {
        self.nodes.push(node);

        self.nodes.len() - 1
    }

    // The operation still missing its right operand, left branch first.
    pub fn open_slot(&self) -> Option<NodeId> {
        let mut stack: Vec<NodeId> = self.root.into_iter().collect();

        while let Some(id) = stack.pop() {
            let node = &self.nodes[id];
            if node.is_number() {
                continue;
            }
            let right = match node.right {
                None => return Some(id),
                Some(right) => right,
            };
            if self.is_number(right) {
                continue;
            }

            // Popped last, so the left branch is searched first.
            stack.push(right);
            if let Some(left) = node.left {
                if ! self.is_number(left) {
                    stack.push(left);
                }
            }
        }

        None
    }

    pub fn parent(&self, target: NodeId) -> Option<NodeId> {
        let mut stack: Vec<NodeId> = self.root.into_iter().collect();

        while let Some(id) = stack.pop() {
            let node = &self.nodes[id];
            if node.left == Some(target) || node.right == Some(target) {
                return Some(id);
            }
            for child in [node.right, node.left].iter().flatten() {
                if ! self.is_number(*child) {
                    stack.push(*child);
                }
            }
        }

        None
    }

    pub fn dump(&self) -> String {
        let mut out = String::new();
        let mut stack: Vec<(NodeId, String, bool)> = self.root
            .map(|root| (root, String::new(), false))
            .into_iter()
            .collect();

        while let Some((id, prefix, is_left)) = stack.pop() {
            let node = &self.nodes[id];
            out.push_str(&prefix);
            out.push_str(if is_left { "├──" } else { "└──" });
            match node.kind {
                NodeKind::Leaf(number) => out.push_str(&number.to_string()),
                NodeKind::Operation { operator, .. } => out.push_str(operator.symbol()),
            }
            out.push('\n');

            let child_prefix = format!("{}{}", prefix, if is_left { "│   " } else { "    " });
            if let Some(right) = node.right {
                stack.push((right, child_prefix.clone(), false));
            }
            if let Some(left) = node.left {
                stack.push((left, child_prefix, true));
            }
        }

        out
    }
}
