//! Double-quoted value literals.
//!
//! A quoted value spans the whole right-hand side of a data line: it opens and
//! closes with `"` and may contain the usual backslash escapes. Byte escapes
//! (`\xHH`, `\NNN`) are collected as raw bytes, so the decoded result must
//! still be valid UTF-8.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum UnquoteError {
    #[error("value is not enclosed in double quotes")]
    Unterminated,

    #[error("unescaped '\"' inside quoted value")]
    UnescapedQuote,

    #[error("unknown escape sequence '\\{0}'")]
    UnknownEscape(char),

    #[error("incomplete escape sequence")]
    IncompleteEscape,

    #[error("invalid digit {0:?} in escape sequence")]
    InvalidDigit(char),

    #[error("escape sequence value {0:#x} is out of range")]
    OutOfRange(u32),

    #[error("escaped bytes do not form valid UTF-8")]
    InvalidUtf8,
}

/// Decode a double-quoted literal such as `"a\tb"` into its content.
pub fn unquote(literal: &str) -> Result<String, UnquoteError> {
    let inner = literal
        .strip_prefix('"')
        .and_then(|rest| rest.strip_suffix('"'))
        .ok_or(UnquoteError::Unterminated)?;

    if !inner.contains(['\\', '"']) {
        return Ok(inner.to_string());
    }

    let mut out: Vec<u8> = Vec::with_capacity(inner.len());
    let mut chars = inner.chars();

    while let Some(c) = chars.next() {
        match c {
            '"' => return Err(UnquoteError::UnescapedQuote),
            '\\' => {
                let escape = chars.next().ok_or(UnquoteError::IncompleteEscape)?;
                match escape {
                    'a' => out.push(0x07),
                    'b' => out.push(0x08),
                    'f' => out.push(0x0c),
                    'n' => out.push(b'\n'),
                    'r' => out.push(b'\r'),
                    't' => out.push(b'\t'),
                    'v' => out.push(0x0b),
                    '\\' => out.push(b'\\'),
                    '"' => out.push(b'"'),
                    'x' => {
                        let value = read_digits(&mut chars, None, 2, 16)?;
                        out.push(value as u8);
                    }
                    '0'..='7' => {
                        let value = read_digits(&mut chars, Some(escape), 3, 8)?;
                        if value > 0xff {
                            return Err(UnquoteError::OutOfRange(value));
                        }
                        out.push(value as u8);
                    }
                    'u' => push_char(&mut out, read_digits(&mut chars, None, 4, 16)?)?,
                    'U' => push_char(&mut out, read_digits(&mut chars, None, 8, 16)?)?,
                    other => return Err(UnquoteError::UnknownEscape(other)),
                }
            }
            c => {
                let mut buf = [0u8; 4];
                out.extend_from_slice(c.encode_utf8(&mut buf).as_bytes());
            }
        }
    }

    String::from_utf8(out).map_err(|_| UnquoteError::InvalidUtf8)
}

/// Read exactly `count` digits in `radix`, the first possibly already consumed.
fn read_digits(
    chars: &mut std::str::Chars<'_>,
    first: Option<char>,
    count: usize,
    radix: u32,
) -> Result<u32, UnquoteError> {
    let mut value: u32 = 0;
    let mut pending = first;
    for _ in 0..count {
        let c = match pending.take() {
            Some(c) => c,
            None => chars.next().ok_or(UnquoteError::IncompleteEscape)?,
        };
        let digit = c.to_digit(radix).ok_or(UnquoteError::InvalidDigit(c))?;
        value = value
            .checked_mul(radix)
            .and_then(|v| v.checked_add(digit))
            .ok_or(UnquoteError::OutOfRange(value))?;
    }
    Ok(value)
}

fn push_char(out: &mut Vec<u8>, code: u32) -> Result<(), UnquoteError> {
    let c = char::from_u32(code).ok_or(UnquoteError::OutOfRange(code))?;
    let mut buf = [0u8; 4];
    out.extend_from_slice(c.encode_utf8(&mut buf).as_bytes());
    Ok(())
}
