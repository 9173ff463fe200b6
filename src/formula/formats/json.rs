//! JSON serialization for token sequences and lex errors
//!
//! Leaves serialize as `{"kind", "text"}` objects and groups as
//! `{"kind": "group", "children": [...]}`, nesting as deep as the formula
//! does. Errors serialize with their position, remaining text, and reason
//! code so callers can branch on failures without parsing messages.

use crate::formula::lexer::{LexError, Token};

/// Serialize a token sequence to compact JSON
pub fn to_json(tokens: &[Token]) -> serde_json::Result<String> {
    serde_json::to_string(tokens)
}

/// Serialize a token sequence to pretty-printed JSON
pub fn to_json_pretty(tokens: &[Token]) -> serde_json::Result<String> {
    serde_json::to_string_pretty(tokens)
}

/// Serialize a lex error to compact JSON
pub fn error_to_json(error: &LexError) -> serde_json::Result<String> {
    serde_json::to_string(error)
}
