//! Recursive tokenizer for formula expressions
//!
//! The tokenizer repeatedly strips leading whitespace and matched prefixes
//! from the input, accumulating tokens in order. A parenthetical match is
//! not emitted as raw text: its interior is tokenized by a recursive call
//! and the result is emitted as a single group token. The recursion carries
//! a running base offset so that an error anywhere inside a nested group is
//! reported relative to the outermost input.
//!
//! The first unmatched prefix anywhere aborts the whole call with one
//! `LexError`; there is no internal recovery and no partial output.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::formula::lexer::matcher::{match_prefix, Shape};
use crate::formula::lexer::tokens::Token;

/// Maximum parenthesis nesting depth accepted before tokenization aborts
/// with `GroupTooDeep` instead of exhausting the call stack.
pub const MAX_GROUP_DEPTH: usize = 64;

/// Reason codes for tokenization failures
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LexErrorReason {
    /// No shape pattern matched at the current position
    UnrecognizedToken,
    /// A `(` with no `)` anywhere after it
    UnterminatedGroup,
    /// Parenthesis nesting exceeded `MAX_GROUP_DEPTH`
    GroupTooDeep,
}

/// Structured tokenization failure
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LexError {
    /// Character offset of the offending position, relative to the start of
    /// the whole original input, not the innermost group slice
    pub position: usize,
    /// The text that could not be tokenized, starting at `position`
    pub remaining: String,
    pub reason: LexErrorReason,
}

impl fmt::Display for LexError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let what = match self.reason {
            LexErrorReason::UnrecognizedToken => "unrecognized token",
            LexErrorReason::UnterminatedGroup => "unterminated group",
            LexErrorReason::GroupTooDeep => "group nesting too deep",
        };
        write!(
            f,
            "{} at offset {}: {:?}",
            what,
            self.position,
            truncate(&self.remaining, 30)
        )
    }
}

impl std::error::Error for LexError {}

fn truncate(s: &str, max_chars: usize) -> String {
    if s.chars().count() > max_chars {
        let mut truncated = s.chars().take(max_chars).collect::<String>();
        truncated.push_str("...");
        truncated
    } else {
        s.to_string()
    }
}

/// Tokenize a formula string into an ordered, possibly nested token
/// sequence.
///
/// Empty and whitespace-only input succeeds with an empty sequence. Any
/// unmatched prefix, at the top level or inside any group, fails the whole
/// call with a `LexError` whose position is a character offset into the
/// original input.
pub fn tokenize(input: &str) -> Result<Vec<Token>, LexError> {
    tokenize_at(input, 0, 0)
}

/// Tokenize one slice of the original input.
///
/// `base` is the character offset of `input` within the outermost string;
/// `depth` counts the enclosing groups.
fn tokenize_at(input: &str, base: usize, depth: usize) -> Result<Vec<Token>, LexError> {
    let mut tokens = Vec::new();
    let mut rest = input;
    let mut offset = base;

    loop {
        let trimmed = rest.trim_start();
        offset += rest[..rest.len() - trimmed.len()].chars().count();
        if trimmed.is_empty() {
            return Ok(tokens);
        }

        let Some(matched) = match_prefix(trimmed) else {
            let reason = if trimmed.starts_with('(') {
                // The parenthetical pattern found no closing paren anywhere
                LexErrorReason::UnterminatedGroup
            } else {
                LexErrorReason::UnrecognizedToken
            };
            return Err(LexError {
                position: offset,
                remaining: trimmed.to_string(),
                reason,
            });
        };

        let token = match matched.shape {
            Shape::Reference => Token::Reference {
                name: matched.text.to_string(),
            },
            Shape::Number => Token::Number {
                literal: matched.text.to_string(),
            },
            Shape::Operator => Token::Operator {
                symbol: matched
                    .text
                    .chars()
                    .next()
                    .expect("operator match is a single symbol"),
            },
            Shape::Parenthetical => {
                if depth >= MAX_GROUP_DEPTH {
                    return Err(LexError {
                        position: offset,
                        remaining: trimmed.to_string(),
                        reason: LexErrorReason::GroupTooDeep,
                    });
                }
                let interior = &matched.text[1..matched.text.len() - 1];
                let children = tokenize_at(interior, offset + 1, depth + 1)?;
                Token::Group { children }
            }
        };

        tokens.push(token);
        offset += matched.text.chars().count();
        rest = &trimmed[matched.text.len()..];
    }
}
