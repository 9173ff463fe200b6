//! Prefix matcher for formula token shapes
//!
//! The matcher classifies the prefix of a string into exactly one token
//! shape. Shape patterns are immutable configuration: an ordered table of
//! `(Shape, Regex)` pairs built once at first use and tried in a fixed
//! priority order, so that a reference like `A1` is always preferred over
//! reading its leading letters any other way.
//!
//! The matcher is a pure function of its input slice. It has no access to
//! previously matched tokens, which is why a `-` directly followed by a
//! digit run always matches as a signed number while a `-` separated from
//! the digits by whitespace always matches as an operator.

use once_cell::sync::Lazy;
use regex::Regex;

/// The shape categories a prefix can match, in priority order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Shape {
    Reference,
    Number,
    Operator,
    Parenthetical,
}

/// A recognized prefix: the shape it matched and the raw text span
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ShapeMatch<'a> {
    pub shape: Shape,
    pub text: &'a str,
}

/// Ordered shape patterns. Order is significant: earlier entries win.
///
/// The parenthetical pattern is greedy through the last `)` in the input
/// rather than a balanced-bracket scan, so nested parens are captured whole
/// and resolved by the tokenizer's recursion.
static SHAPE_PATTERNS: Lazy<[(Shape, Regex); 4]> = Lazy::new(|| {
    [
        (Shape::Reference, shape_regex(r"^[A-Z]+[1-9][0-9]*")),
        (Shape::Number, shape_regex(r"^-?[0-9]+")),
        (Shape::Operator, shape_regex(r"^[+\-*/]")),
        (Shape::Parenthetical, shape_regex(r"^\((?s:.)*\)")),
    ]
});

fn shape_regex(pattern: &str) -> Regex {
    Regex::new(pattern).expect("shape patterns are hard-coded and must compile")
}

/// Classify the prefix of `input` into exactly one token shape.
///
/// Patterns are tried in the fixed order reference, number, operator,
/// parenthetical; each takes its longest match. Returns `None` when no
/// shape matches the prefix.
pub fn match_prefix(input: &str) -> Option<ShapeMatch<'_>> {
    for (shape, pattern) in SHAPE_PATTERNS.iter() {
        if let Some(found) = pattern.find(input) {
            let text = found.as_str();
            if *shape == Shape::Reference && !has_uniform_column_letters(text) {
                // AB12 has the coarse reference shape but mixes letters
                continue;
            }
            return Some(ShapeMatch {
                shape: *shape,
                text,
            });
        }
    }
    None
}

/// A reference's column part must be a run of one repeated letter (`AA1`,
/// never `AB1`). The regex crate has no backreferences, so the run check
/// happens here instead of in the pattern.
fn has_uniform_column_letters(text: &str) -> bool {
    let mut letters = text.chars().take_while(|c| c.is_ascii_uppercase());
    match letters.next() {
        Some(first) => letters.all(|c| c == first),
        None => false,
    }
}
