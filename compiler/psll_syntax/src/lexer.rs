//! Context-aware splitting and S-expression lexing.

use std::fmt;

use crate::{ensure_sufficient_stack, SyntaxError};

/// Escapes the character after it: it neither opens, closes nor splits.
pub const ESCAPE: char = '\\';

/// Contexts the lexer does not split inside of, lowest precedence first.
pub const LEXER_CONTEXTS: [(char, char); 3] = [('(', ')'), ('[', ']'), ('"', '"')];

/// A lexed S-expression.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum Sexpr {
    Atom(String),
    List(Vec<Sexpr>),
}

impl Sexpr {
    pub fn atom(text: impl Into<String>) -> Self {
        Sexpr::Atom(text.into())
    }

    /// The atom text, if this is an atom.
    pub fn as_atom(&self) -> Option<&str> {
        match self {
            Sexpr::Atom(text) => Some(text),
            Sexpr::List(_) => None,
        }
    }

    pub fn is_list(&self) -> bool {
        matches!(self, Sexpr::List(_))
    }
}

impl fmt::Display for Sexpr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Sexpr::Atom(text) => f.write_str(text),
            Sexpr::List(items) => {
                f.write_str("(")?;
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        f.write_str(" ")?;
                    }
                    write!(f, "{item}")?;
                }
                f.write_str(")")
            }
        }
    }
}

/// Split `text` at `delimiter`, except inside any of `contexts`.
///
/// Each context is an `(open, close)` pair and may nest. A context only
/// tracks its delimiters while no later context in the list is open, so
/// brackets inside a string are plain text. For a context whose opener and
/// closer are the same character, an open context closes first.
///
/// Empty parts are kept.
pub fn context_split<'a>(
    text: &'a str,
    delimiter: char,
    contexts: &[(char, char)],
) -> Result<Vec<&'a str>, SyntaxError> {
    let mut depth = vec![0isize; contexts.len()];
    let mut parts = Vec::new();
    let mut start = 0;
    let mut escaped = false;

    for (offset, ch) in text.char_indices() {
        if escaped {
            escaped = false;
            continue;
        }

        for (i, &(open, close)) in contexts.iter().enumerate() {
            if depth[i + 1..].iter().any(|&d| d != 0) {
                continue;
            }
            if depth[i] != 0 && ch == close {
                depth[i] -= 1;
            } else if ch == open {
                depth[i] += 1;
            } else if ch == close {
                depth[i] -= 1;
            }
        }

        escaped = ch == ESCAPE;

        if ch == delimiter && depth.iter().all(|&d| d == 0) {
            parts.push(&text[start..offset]);
            start = offset + ch.len_utf8();
        }

        if let Some(i) = depth.iter().position(|&d| d < 0) {
            return Err(SyntaxError::UnmatchedClose {
                offset,
                close: contexts[i].1,
            });
        }
    }
    parts.push(&text[start..]);

    if let Some(i) = depth.iter().position(|&d| d != 0) {
        return Err(SyntaxError::Unterminated {
            open: contexts[i].0,
        });
    }
    Ok(parts)
}

/// Split on blanks outside of brackets and strings, dropping empty parts.
pub fn split(text: &str) -> Result<Vec<&str>, SyntaxError> {
    let mut parts = context_split(text, ' ', &LEXER_CONTEXTS)?;
    parts.retain(|part| !part.is_empty());
    Ok(parts)
}

/// Lex reduced source into S-expressions.
///
/// Parts wrapped in `(...)` are lexed recursively; everything else, including
/// `[...]` and `"..."`, is an atom.
pub fn lex(text: &str) -> Result<Vec<Sexpr>, SyntaxError> {
    split(text)?
        .into_iter()
        .map(|part| match bracketed(part) {
            Some(inner) => ensure_sufficient_stack(|| lex(inner)).map(Sexpr::List),
            None => Ok(Sexpr::atom(part)),
        })
        .collect()
}

fn bracketed(part: &str) -> Option<&str> {
    part.strip_prefix('(')?.strip_suffix(')')
}
