//! Token definitions for formula expressions
//!
//! Tokens are immutable values constructed once per tokenize call. Leaf
//! tokens keep the raw text they matched; a group holds only its recursively
//! tokenized children, never leftover raw text.
//!
//! The serde model is an internally tagged tree: leaves serialize as
//! `{"kind": ..., "text": ...}` and groups as `{"kind": "group",
//! "children": [...]}`.

use serde::{Deserialize, Serialize};
use std::fmt;

/// All token shapes produced by the formula tokenizer
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum Token {
    /// A cell reference such as `A1` or `AA12`: a run of one repeated
    /// uppercase letter followed by a digit run with a non-zero first digit
    Reference {
        #[serde(rename = "text")]
        name: String,
    },
    /// An integer literal, kept as written, with an optional leading `-`
    Number {
        #[serde(rename = "text")]
        literal: String,
    },
    /// One of the arithmetic operators `+`, `-`, `*`, `/`
    Operator {
        #[serde(rename = "text")]
        symbol: char,
    },
    /// A parenthesized sub-expression holding its tokenized children
    Group { children: Vec<Token> },
}

impl Token {
    /// The kind name used in serialized output and tree rendering
    pub fn kind(&self) -> &'static str {
        match self {
            Token::Reference { .. } => "reference",
            Token::Number { .. } => "number",
            Token::Operator { .. } => "operator",
            Token::Group { .. } => "group",
        }
    }

    /// Check if this token is a cell reference
    pub fn is_reference(&self) -> bool {
        matches!(self, Token::Reference { .. })
    }

    /// Check if this token is a number literal
    pub fn is_number(&self) -> bool {
        matches!(self, Token::Number { .. })
    }

    /// Check if this token is an operator
    pub fn is_operator(&self) -> bool {
        matches!(self, Token::Operator { .. })
    }

    /// Check if this token is a parenthetical group
    pub fn is_group(&self) -> bool {
        matches!(self, Token::Group { .. })
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Token::Reference { name } => write!(f, "{}", name),
            Token::Number { literal } => write!(f, "{}", literal),
            Token::Operator { symbol } => write!(f, "{}", symbol),
            Token::Group { children } => {
                write!(f, "(")?;
                for (i, child) in children.iter().enumerate() {
                    if i > 0 {
                        write!(f, " ")?;
                    }
                    write!(f, "{}", child)?;
                }
                write!(f, ")")
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_token_kinds() {
        let reference = Token::Reference {
            name: "A1".to_string(),
        };
        let number = Token::Number {
            literal: "-17".to_string(),
        };
        let operator = Token::Operator { symbol: '+' };
        let group = Token::Group { children: vec![] };

        assert_eq!(reference.kind(), "reference");
        assert_eq!(number.kind(), "number");
        assert_eq!(operator.kind(), "operator");
        assert_eq!(group.kind(), "group");
    }

    #[test]
    fn test_token_predicates() {
        let reference = Token::Reference {
            name: "B7".to_string(),
        };
        assert!(reference.is_reference());
        assert!(!reference.is_number());
        assert!(!reference.is_operator());
        assert!(!reference.is_group());

        let group = Token::Group {
            children: vec![Token::Number {
                literal: "1".to_string(),
            }],
        };
        assert!(group.is_group());
        assert!(!group.is_reference());
    }

    #[test]
    fn test_display_leaves() {
        assert_eq!(
            Token::Reference {
                name: "AA12".to_string()
            }
            .to_string(),
            "AA12"
        );
        assert_eq!(
            Token::Number {
                literal: "-1".to_string()
            }
            .to_string(),
            "-1"
        );
        assert_eq!(Token::Operator { symbol: '*' }.to_string(), "*");
    }

    #[test]
    fn test_display_group() {
        let group = Token::Group {
            children: vec![
                Token::Number {
                    literal: "1".to_string(),
                },
                Token::Operator { symbol: '+' },
                Token::Number {
                    literal: "2".to_string(),
                },
            ],
        };
        assert_eq!(group.to_string(), "(1 + 2)");
    }

    #[test]
    fn test_serialize_leaf() {
        let token = Token::Reference {
            name: "A1".to_string(),
        };
        let json = serde_json::to_string(&token).unwrap();
        assert_eq!(json, r#"{"kind":"reference","text":"A1"}"#);
    }

    #[test]
    fn test_serialize_group() {
        let group = Token::Group {
            children: vec![
                Token::Number {
                    literal: "1".to_string(),
                },
                Token::Operator { symbol: '+' },
            ],
        };
        let json = serde_json::to_string(&group).unwrap();
        assert_eq!(
            json,
            r#"{"kind":"group","children":[{"kind":"number","text":"1"},{"kind":"operator","text":"+"}]}"#
        );
    }

    #[test]
    fn test_deserialize_round_trip() {
        let group = Token::Group {
            children: vec![
                Token::Reference {
                    name: "B7".to_string(),
                },
                Token::Operator { symbol: '/' },
                Token::Number {
                    literal: "2".to_string(),
                },
            ],
        };
        let json = serde_json::to_string(&group).unwrap();
        let parsed: Token = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, group);
    }
}
