use std::fmt;

#[derive(Copy, Clone, Debug, Eq, Hash, PartialEq)]
pub enum TokenType {
    // Single-character tokens.
    LeftParen, RightParen,
    Star, Slash, Plus, Minus, Caret,

    // Literals.
    IntegerLiteral, FloatLiteral,

    EndOfInput,
    Unknown,
}

impl TokenType {
    pub fn is_literal(&self) -> bool {
        matches!(self, TokenType::IntegerLiteral | TokenType::FloatLiteral)
    }
}

impl fmt::Display for TokenType {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        use self::TokenType::*;
        match self {
            LeftParen => write!(f, "LeftParen"),
            RightParen => write!(f, "RightParen"),
            Star => write!(f, "Mul"),
            Slash => write!(f, "Div"),
            Plus => write!(f, "Add"),
            Minus => write!(f, "Sub"),
            Caret => write!(f, "Pow"),
            IntegerLiteral => write!(f, "IntegerLiteral"),
            FloatLiteral => write!(f, "FloatLiteral"),
            EndOfInput => write!(f, "EndOfInput"),
            Unknown => write!(f, "Unknown"),
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Token {
    pub token_type: TokenType,
    // Literal text is normalized: grouping symbols are dropped and the point
    // symbol is always written as '.'.
    pub text: String,
    // Grapheme offset of the first character in the source.
    pub column: usize,
}

impl Token {
    pub fn new(token_type: TokenType, text: &str, column: usize) -> Token {
        Token {
            token_type,
            text: text.to_string(),
            column,
        }
    }
}
