//! Token classification.
//!
//! The scanner never produces token payloads: it only answers "what kind of
//! lexical unit starts at this cursor". The parser re-reads strings and numbers
//! itself. Cursors are byte offsets into the source `&str` and always sit on a
//! character boundary.

/// Kind of lexical unit found at a cursor position.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Token {
    /// `{`
    LeftBrace,
    /// `}`
    RightBrace,
    /// `[`
    LeftBracket,
    /// `]`
    RightBracket,
    /// `:`
    Colon,
    /// `,`
    Comma,
    /// `"` or `'`
    StringMarker,
    /// One of `0-9 + - .`
    Number,
    /// `true`
    True,
    /// `false`
    False,
    /// `null`
    Null,
    /// Anything else, including the end of input.
    Unknown,
}

/// Returns the first index at or after `index` that is not whitespace.
pub fn skip_whitespace(input: &str, index: usize) -> usize {
    input[index..]
        .char_indices()
        .find(|(_, ch)| !ch.is_whitespace())
        .map_or(input.len(), |(offset, _)| index + offset)
}

/// Classifies the next significant token without moving the cursor.
///
/// # Examples
///
/// ```rust
/// use serde_jsonlite::scanner::{peek, Token};
///
/// assert_eq!(peek("  {}", 0), Token::LeftBrace);
/// assert_eq!(peek("nul", 0), Token::Unknown);
/// ```
#[must_use]
pub fn peek(input: &str, index: usize) -> Token {
    let mut probe = index;
    advance(input, &mut probe)
}

/// Classifies the next significant token and moves the cursor past it.
///
/// Punctuation and string markers consume one character, literals consume
/// their full length. For [`Token::Number`] the cursor is left on the first
/// character of the literal so the parser can read it whole. For
/// [`Token::Unknown`] the cursor stops on the offending character.
pub fn advance(input: &str, index: &mut usize) -> Token {
    *index = skip_whitespace(input, *index);

    let Some(ch) = input[*index..].chars().next() else {
        return Token::Unknown;
    };

    let token = match ch {
        '{' => Token::LeftBrace,
        '}' => Token::RightBrace,
        '[' => Token::LeftBracket,
        ']' => Token::RightBracket,
        ':' => Token::Colon,
        ',' => Token::Comma,
        '"' | '\'' => Token::StringMarker,
        '0'..='9' | '+' | '-' | '.' => return Token::Number,
        _ => return advance_literal(input, index),
    };

    *index += ch.len_utf8();
    token
}

fn advance_literal(input: &str, index: &mut usize) -> Token {
    let rest = &input[*index..];

    let (token, len) = if rest.starts_with("true") {
        (Token::True, 4)
    } else if rest.starts_with("null") {
        (Token::Null, 4)
    } else if rest.starts_with("false") {
        (Token::False, 5)
    } else {
        return Token::Unknown;
    };

    *index += len;
    token
}
