use crate::extract::labels::is_negation_word;
use crate::tree::Token;

/// True when an immediate dependent of `token` is a negation word
pub fn is_negated(token: Token<'_>) -> bool {
    token.children().any(|dep| is_negation_word(dep.lower()))
}
