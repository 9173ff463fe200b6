//! Output formats for tokenized formulas
//!
//! Serialization of token sequences into machine-readable JSON and into an
//! indented tree view for console inspection.

pub mod json;
pub mod treeviz;

pub use json::{error_to_json, to_json, to_json_pretty};
pub use treeviz::to_treeviz_str;
