//! Lexer module for formula expressions
//!
//! This module contains the tokenization logic for formula strings,
//! including token definitions, the prefix matcher, the recursive
//! tokenizer, and the detokenizer.
//!
//! Group Handling
//!
//! A parenthetical prefix is captured greedily through the last `)` in the
//! remaining input and its interior is handed back to `tokenize`, so nested
//! parens are resolved by recursion rather than by a balanced-bracket scan
//! inside the matcher. The recursion carries the running offset of the
//! interior within the outermost input, which keeps error positions
//! meaningful no matter how deep the failure happens.

pub mod detokenizer;
pub mod matcher;
pub mod tokenizer;
pub mod tokens;

pub use detokenizer::detokenize;
pub use matcher::{match_prefix, Shape, ShapeMatch};
pub use tokenizer::{tokenize, LexError, LexErrorReason, MAX_GROUP_DEPTH};
pub use tokens::Token;
