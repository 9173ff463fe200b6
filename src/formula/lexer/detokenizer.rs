//! Detokenizer for formula token sequences
//!
//! This module provides functionality to convert a token sequence back into
//! formula text. Leaves render as the text they matched, groups re-wrap
//! their children in parens, and siblings are joined with single spaces, so
//! the output reconstructs the tokenized input modulo whitespace collapse.

use crate::formula::lexer::tokens::Token;

/// Detokenize a token sequence into formula text
pub fn detokenize(tokens: &[Token]) -> String {
    tokens
        .iter()
        .map(|token| token.to_string())
        .collect::<Vec<_>>()
        .join(" ")
}
