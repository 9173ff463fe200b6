//! Formula processing API
//!
//! This module provides the format dispatch used by the command-line
//! interface: a registry of output formats, a string entry point, and a
//! file entry point. Tokenization failures are carried through as values
//! so the caller decides how to render them.

use std::fmt;
use std::fs;
use std::path::Path;

use crate::formula::formats::{to_json, to_json_pretty, to_treeviz_str};
use crate::formula::lexer::{detokenize, tokenize, LexError};

/// Available output formats for a tokenized formula
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    /// Compact JSON token tree
    Json,
    /// Pretty-printed JSON token tree
    JsonPretty,
    /// Indented tree view with box-drawing connectors
    Tree,
    /// Detokenized formula text (whitespace normalized)
    Text,
}

impl OutputFormat {
    /// Parse a format name like "json" or "tree"
    pub fn from_string(format_str: &str) -> Result<Self, ProcessingError> {
        match format_str {
            "json" => Ok(OutputFormat::Json),
            "json-pretty" => Ok(OutputFormat::JsonPretty),
            "tree" => Ok(OutputFormat::Tree),
            "text" => Ok(OutputFormat::Text),
            _ => Err(ProcessingError::InvalidFormat(format_str.to_string())),
        }
    }
}

/// Get all available format names
pub fn available_formats() -> Vec<String> {
    ["json", "json-pretty", "tree", "text"]
        .iter()
        .map(|s| s.to_string())
        .collect()
}

/// Errors that can occur during processing
#[derive(Debug, Clone, PartialEq)]
pub enum ProcessingError {
    InvalidFormat(String),
    IoError(String),
    Lex(LexError),
    Serialize(String),
}

impl fmt::Display for ProcessingError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ProcessingError::InvalidFormat(format) => write!(f, "Invalid format: {}", format),
            ProcessingError::IoError(msg) => write!(f, "IO error: {}", msg),
            ProcessingError::Lex(err) => write!(f, "Tokenize error: {}", err),
            ProcessingError::Serialize(msg) => write!(f, "Serialization error: {}", msg),
        }
    }
}

impl std::error::Error for ProcessingError {}

impl From<LexError> for ProcessingError {
    fn from(err: LexError) -> Self {
        ProcessingError::Lex(err)
    }
}

/// Tokenize a formula string and render it in the given format
pub fn process_formula(source: &str, format: OutputFormat) -> Result<String, ProcessingError> {
    let tokens = tokenize(source)?;
    match format {
        OutputFormat::Json => {
            to_json(&tokens).map_err(|e| ProcessingError::Serialize(e.to_string()))
        }
        OutputFormat::JsonPretty => {
            to_json_pretty(&tokens).map_err(|e| ProcessingError::Serialize(e.to_string()))
        }
        OutputFormat::Tree => Ok(to_treeviz_str(&tokens)),
        OutputFormat::Text => Ok(detokenize(&tokens)),
    }
}

/// Read a formula from a file and render it in the given format
pub fn process_file<P: AsRef<Path>>(
    file_path: P,
    format: OutputFormat,
) -> Result<String, ProcessingError> {
    let source =
        fs::read_to_string(file_path).map_err(|e| ProcessingError::IoError(e.to_string()))?;
    process_formula(&source, format)
}
