use std::fmt;

use logos::Logos;

use crate::{error::ParseError, expression::parser::ParseResult};

/// Represents a lexical token of an infix expression.
///
/// Expressions are whitespace-delimited, so every word of the input must be
/// exactly one of these tokens.
#[derive(Logos, Debug, PartialEq, Eq, Clone, Copy)]
pub enum Token {
    /// Integer literal tokens, such as `42`.
    #[regex(r"[0-9]+", parse_integer)]
    Integer(i64),
    /// `+`
    #[token("+")]
    Plus,
    /// `-`
    #[token("-")]
    Minus,
    /// `*`
    #[token("*")]
    Star,
    /// `/`
    #[token("/")]
    Slash,
    /// `(`
    #[token("(")]
    OpenParen,
    /// `)`
    #[token(")")]
    CloseParen,
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Integer(value) => write!(f, "{value}"),
            Self::Plus => write!(f, "+"),
            Self::Minus => write!(f, "-"),
            Self::Star => write!(f, "*"),
            Self::Slash => write!(f, "/"),
            Self::OpenParen => write!(f, "("),
            Self::CloseParen => write!(f, ")"),
        }
    }
}

/// Splits the source on whitespace and turns every word into a token.
///
/// Each token is paired with its zero-based index among the words, which is
/// the position reported by every [`ParseError`].
///
/// # Errors
/// - `UnexpectedToken` if a word is not exactly one token (`1+2`, `-5`, `x`).
/// - `LiteralTooLarge` if a digit run does not fit in an `i64`.
///
/// # Example
/// ```
/// use infix_stairs::expression::lexer::{Token, tokenize};
///
/// let tokens = tokenize("( 12 * 3 )").unwrap();
/// assert_eq!(tokens,
///            vec![(Token::OpenParen, 0),
///                 (Token::Integer(12), 1),
///                 (Token::Star, 2),
///                 (Token::Integer(3), 3),
///                 (Token::CloseParen, 4)]);
///
/// assert!(tokenize("1+2").is_err());
/// ```
pub fn tokenize(source: &str) -> ParseResult<Vec<(Token, usize)>> {
    source.split_whitespace()
          .enumerate()
          .map(|(index, word)| lex_word(word, index))
          .collect()
}

fn lex_word(word: &str, index: usize) -> ParseResult<(Token, usize)> {
    let mut lexer = Token::lexer(word);

    match lexer.next() {
        Some(Ok(token)) if lexer.span().end == word.len() => Ok((token, index)),
        // The integer regex matched but the value overflowed.
        Some(Err(())) if word.bytes().all(|b| b.is_ascii_digit()) => {
            Err(ParseError::LiteralTooLarge { token: word.to_string(),
                                              index })
        },
        _ => Err(ParseError::UnexpectedToken { token: word.to_string(),
                                               index }),
    }
}

/// Parses an integer literal from the current token slice.
///
/// # Returns
/// - `Some(i64)`: The parsed integer value if successful.
/// - `None`: If the literal does not fit in an `i64`.
fn parse_integer(lex: &logos::Lexer<Token>) -> Option<i64> {
    lex.slice().parse().ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reads_every_symbol() {
        let tokens = tokenize("( ) + - * / 7").unwrap();
        let kinds: Vec<Token> = tokens.into_iter().map(|(token, _)| token).collect();

        assert_eq!(kinds,
                   [Token::OpenParen,
                    Token::CloseParen,
                    Token::Plus,
                    Token::Minus,
                    Token::Star,
                    Token::Slash,
                    Token::Integer(7)]);
    }

    #[test]
    fn indexes_follow_words_not_bytes() {
        let tokens = tokenize("  10 \t+\n 200 ").unwrap();
        assert_eq!(tokens,
                   [(Token::Integer(10), 0), (Token::Plus, 1), (Token::Integer(200), 2)]);
    }

    #[test]
    fn rejects_glued_tokens() {
        assert_eq!(tokenize("1 + 2*3"),
                   Err(ParseError::UnexpectedToken { token: "2*3".to_string(),
                                                     index: 2, }));
    }

    #[test]
    fn rejects_negative_and_fractional_literals() {
        assert!(matches!(tokenize("-5"), Err(ParseError::UnexpectedToken { index: 0, .. })));
        assert!(matches!(tokenize("1 + 2.5"), Err(ParseError::UnexpectedToken { index: 2, .. })));
    }

    #[test]
    fn reports_oversized_literals() {
        assert_eq!(tokenize("1 + 99999999999999999999"),
                   Err(ParseError::LiteralTooLarge { token: "99999999999999999999".to_string(),
                                                     index: 2, }));
    }

    #[test]
    fn empty_source_has_no_tokens() {
        assert_eq!(tokenize(" \n\t "), Ok(vec![]));
    }
}
