//! Treeviz formatter for token sequences

use crate::formula::lexer::tokens::Token;

/// Render a token sequence as an indented tree with box-drawing connectors
pub fn to_treeviz_str(tokens: &[Token]) -> String {
    let mut result = String::new();
    append_tokens(&mut result, tokens, "");
    result
}

fn append_tokens(result: &mut String, tokens: &[Token], prefix: &str) {
    for (i, token) in tokens.iter().enumerate() {
        let is_last = i == tokens.len() - 1;
        append_token(result, token, prefix, is_last);
    }
}

fn append_token(result: &mut String, token: &Token, prefix: &str, is_last: bool) {
    let connector = if is_last { "└─" } else { "├─" };

    match token {
        Token::Group { children } => {
            result.push_str(&format!("{}{} group\n", prefix, connector));
            let new_prefix = format!("{}{}", prefix, if is_last { "  " } else { "│ " });
            append_tokens(result, children, &new_prefix);
        }
        leaf => {
            result.push_str(&format!(
                "{}{} {}: {}\n",
                prefix,
                connector,
                leaf.kind(),
                leaf
            ));
        }
    }
}
