use thiserror::Error;

use crate::token::TokenType;

#[derive(Clone, Debug, Error, PartialEq)]
pub enum CalcError {
    #[error("{0}")]
    MalformedNumber(String),

    #[error("{0}")]
    CharacterTooLarge(String),

    #[error("{message}")]
    Syntax {
        token: String,
        found: TokenType,
        expected: Vec<TokenType>,
        message: String,
    },

    #[error("{0}")]
    DivisionByZero(String),

    #[error("{0}")]
    Overflow(String),

    #[error("expression tree is incomplete")]
    IncompleteExpression,
}

impl CalcError {
    pub fn division_by_zero() -> CalcError {
        CalcError::DivisionByZero("Division by zero".to_string())
    }

    // Errors raised before a tree exists.  The front end uses this to pick an
    // exit code.
    pub fn is_parse_error(&self) -> bool {
        match self {
            CalcError::MalformedNumber(_) |
            CalcError::CharacterTooLarge(_) |
            CalcError::Syntax { .. } => true,
            CalcError::DivisionByZero(_) |
            CalcError::Overflow(_) |
            CalcError::IncompleteExpression => false,
        }
    }
}

// Joins expected token kinds as "A, B or C".
pub fn expected_list(expected: &[TokenType]) -> String {
    match expected.split_last() {
        None => String::new(),
        Some((last, [])) => last.to_string(),
        Some((last, rest)) => {
            let head: Vec<String> = rest.iter().map(|t| t.to_string()).collect();
            format!("{} or {}", head.join(", "), last)
        }
    }
}
