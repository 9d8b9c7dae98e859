use std::iter::Peekable;

use fnv::FnvHashMap;
use unicode_segmentation::{GraphemeIndices, UnicodeSegmentation};

use crate::config::NumberFormat;
use crate::error::CalcError;
use crate::token::*;
use crate::util::is_digit;

lazy_static! {
    static ref SINGLE_CHAR_TOKENS: FnvHashMap<&'static str, TokenType> = {
        let mut m = FnvHashMap::default();
        use crate::token::TokenType::*;
        m.insert("(", LeftParen);
        m.insert(")", RightParen);
        m.insert("*", Star);
        m.insert("/", Slash);
        m.insert("+", Plus);
        m.insert("-", Minus);
        m.insert("^", Caret);

        m
    };
}

#[derive(Clone)]
pub struct Scanner<'source> {
    source: &'source str,
    format: NumberFormat,
    grapheme_indices: Peekable<GraphemeIndices<'source>>,
    // Number of grapheme clusters consumed so far.
    cursor: usize,
}

impl<'source> Scanner<'source> {
    pub fn new(source: &'source str) -> Scanner<'source> {
        Scanner::with_format(source, NumberFormat::default())
    }

    pub fn with_format(source: &'source str, format: NumberFormat) -> Scanner<'source> {
        Scanner {
            source,
            format,
            grapheme_indices: source.grapheme_indices(true).peekable(),
            cursor: 0,
        }
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn next_token(&mut self) -> Result<Token, CalcError> {
        self.skip_whitespace();

        let grapheme = match self.peek() {
            None => return Ok(Token::new(TokenType::EndOfInput, "", self.cursor)),
            Some(grapheme) => grapheme,
        };

        if is_digit(grapheme) || self.format.is_point(grapheme) {
            return self.scan_number();
        }
        if ! grapheme.is_ascii() {
            return Err(CalcError::CharacterTooLarge(self.error_string("character too large", 0)));
        }

        let column = self.cursor;
        self.advance();
        let token_type = match SINGLE_CHAR_TOKENS.get(grapheme) {
            None => TokenType::Unknown,
            Some(token_type) => *token_type,
        };

        Ok(Token::new(token_type, grapheme, column))
    }

    // Caret goes under the cursor moved by `delta` graphemes.
    pub fn error_string(&self, message: &str, delta: isize) -> String {
        let column = (self.cursor as isize).saturating_add(delta).max(0) as usize;

        format!("{}\nFirst found here:\n\t{}\n\t{}^\n",
                message,
                self.source,
                " ".repeat(column))
    }

    fn scan_number(&mut self) -> Result<Token, CalcError> {
        let column = self.cursor;
        let mut text = String::new();
        let mut seen_point = false;

        loop {
            match self.peek() {
                Some(grapheme) if is_digit(grapheme) => text.push_str(grapheme),
                Some(grapheme) if self.format.is_point(grapheme) => {
                    if seen_point {
                        return Err(CalcError::MalformedNumber(
                            self.error_string("two points in one number are not allowed", 0)));
                    }
                    seen_point = true;
                    text.push('.');
                }
                _ => break,
            };
            self.advance();

            // A grouping symbol inside a number swallows any whitespace
            // around it as well.
            if let Some(grapheme) = self.peek() {
                if self.format.is_grouping(grapheme) {
                    self.skip_whitespace();
                }
            }
        }

        if text == "." {
            return Err(CalcError::MalformedNumber(
                self.error_string("a number needs at least one digit", -1)));
        }

        let token_type = if seen_point {
            TokenType::FloatLiteral
        } else {
            TokenType::IntegerLiteral
        };

        Ok(Token::new(token_type, &text, column))
    }

    fn skip_whitespace(&mut self) {
        while let Some(grapheme) = self.peek() {
            let skip = match grapheme {
                " " | "\t" | "\n" | "\r\n" => true,
                _ => self.format.is_grouping(grapheme),
            };
            if ! skip {
                break;
            }
            self.advance();
        }
    }

    fn peek(&mut self) -> Option<&'source str> {
        self.grapheme_indices.peek().map(|(_, grapheme_cluster)| *grapheme_cluster)
    }

    fn advance(&mut self) {
        if self.grapheme_indices.next().is_some() {
            self.cursor += 1;
        }
    }
}
