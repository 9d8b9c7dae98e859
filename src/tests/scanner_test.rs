use crate::config::*;
use crate::error::*;
use crate::scanner::*;
use crate::token::*;

fn scan_all(mut s: Scanner) -> Result<Vec<Token>, CalcError> {
    let mut tokens = Vec::new();
    loop {
        let token = s.next_token()?;
        let at_end = token.token_type == TokenType::EndOfInput;
        tokens.push(token);
        if at_end {
            return Ok(tokens);
        }
    }
}

fn scan(source: &str) -> Result<Vec<Token>, CalcError> {
    scan_all(Scanner::new(source))
}

#[test]
fn test_scan_single_tokens() {
    assert_eq!(scan("("), Ok(vec![Token::new(TokenType::LeftParen, "(", 0),
                                  Token::new(TokenType::EndOfInput, "", 1)]));
    assert_eq!(scan("+-*/^)"), Ok(vec![Token::new(TokenType::Plus, "+", 0),
                                       Token::new(TokenType::Minus, "-", 1),
                                       Token::new(TokenType::Star, "*", 2),
                                       Token::new(TokenType::Slash, "/", 3),
                                       Token::new(TokenType::Caret, "^", 4),
                                       Token::new(TokenType::RightParen, ")", 5),
                                       Token::new(TokenType::EndOfInput, "", 6)]));
    assert_eq!(scan("a"), Ok(vec![Token::new(TokenType::Unknown, "a", 0),
                                  Token::new(TokenType::EndOfInput, "", 1)]));
}

#[test]
fn test_scan_empty_input() {
    assert_eq!(scan(""), Ok(vec![Token::new(TokenType::EndOfInput, "", 0)]));
    assert_eq!(scan(" \t\r\n"), Ok(vec![Token::new(TokenType::EndOfInput, "", 3)]));
}

#[test]
fn test_scan_end_of_input_repeats() {
    let mut s = Scanner::new("1");
    assert_eq!(s.next_token(), Ok(Token::new(TokenType::IntegerLiteral, "1", 0)));
    assert_eq!(s.next_token(), Ok(Token::new(TokenType::EndOfInput, "", 1)));
    assert_eq!(s.next_token(), Ok(Token::new(TokenType::EndOfInput, "", 1)));
}

#[test]
fn test_scan_is_repeatable() {
    let source = "1'000 + (2.5*3)^2";
    let first = scan(source);
    assert!(first.is_ok());
    assert_eq!(first, scan(source));
}

#[test]
fn test_scan_numbers() {
    assert_eq!(scan("5+ 3.8"), Ok(vec![Token::new(TokenType::IntegerLiteral, "5", 0),
                                       Token::new(TokenType::Plus, "+", 1),
                                       Token::new(TokenType::FloatLiteral, "3.8", 3),
                                       Token::new(TokenType::EndOfInput, "", 6)]));
    assert_eq!(scan(".5"), Ok(vec![Token::new(TokenType::FloatLiteral, ".5", 0),
                                   Token::new(TokenType::EndOfInput, "", 2)]));
    assert_eq!(scan("7."), Ok(vec![Token::new(TokenType::FloatLiteral, "7.", 0),
                                   Token::new(TokenType::EndOfInput, "", 2)]));
}

#[test]
fn test_scan_grouping_symbols() {
    assert_eq!(scan("1'000 + 2"), Ok(vec![Token::new(TokenType::IntegerLiteral, "1000", 0),
                                          Token::new(TokenType::Plus, "+", 6),
                                          Token::new(TokenType::IntegerLiteral, "2", 8),
                                          Token::new(TokenType::EndOfInput, "", 9)]));
    assert_eq!(scan("1_000_000"), Ok(vec![Token::new(TokenType::IntegerLiteral, "1000000", 0),
                                          Token::new(TokenType::EndOfInput, "", 9)]));
    // Whitespace after a grouping symbol still belongs to the number.
    assert_eq!(scan("1, 000"), Ok(vec![Token::new(TokenType::IntegerLiteral, "1000", 0),
                                       Token::new(TokenType::EndOfInput, "", 6)]));
}

#[test]
fn test_scan_custom_format() {
    let format = NumberFormat::new(",", &["."]);
    let s = Scanner::with_format("1.234,5", format);
    assert_eq!(scan_all(s), Ok(vec![Token::new(TokenType::FloatLiteral, "1234.5", 0),
                                    Token::new(TokenType::EndOfInput, "", 7)]));

    // The point symbol is not a grouping symbol, even when listed as one.
    let format = NumberFormat::new(",", &DEFAULT_GROUPING);
    let s = Scanner::with_format("2,5", format);
    assert_eq!(scan_all(s), Ok(vec![Token::new(TokenType::FloatLiteral, "2.5", 0),
                                    Token::new(TokenType::EndOfInput, "", 3)]));
}

#[test]
fn test_scan_two_points() {
    let message = "two points in one number are not allowed\nFirst found here:\n\t1.2.3\n\t   ^\n";
    assert_eq!(scan("1.2.3"), Err(CalcError::MalformedNumber(message.to_string())));
}

#[test]
fn test_scan_lone_point() {
    let message = "a number needs at least one digit\nFirst found here:\n\t.\n\t^\n";
    assert_eq!(scan("."), Err(CalcError::MalformedNumber(message.to_string())));
}

#[test]
fn test_scan_non_ascii() {
    let message = "character too large\nFirst found here:\n\t2×3\n\t ^\n";
    assert_eq!(scan("2×3"), Err(CalcError::CharacterTooLarge(message.to_string())));

    // Configured symbols are accepted before the ASCII check.
    let format = NumberFormat::new("·", &[]);
    let s = Scanner::with_format("1·5", format);
    assert_eq!(scan_all(s), Ok(vec![Token::new(TokenType::FloatLiteral, "1.5", 0),
                                    Token::new(TokenType::EndOfInput, "", 3)]));
}

#[test]
fn test_error_string() {
    let mut s = Scanner::new("12 + x");
    for _ in 0..3 {
        assert!(s.next_token().is_ok());
    }
    assert_eq!(s.cursor(), 6);
    assert_eq!(s.error_string("bad", -1), "bad\nFirst found here:\n\t12 + x\n\t     ^\n");
    assert_eq!(s.error_string("bad", -100), "bad\nFirst found here:\n\t12 + x\n\t^\n");
}
