//! Phrase expansion around a head token.
//!
//! Both expanders walk dependents whose label belongs to a category,
//! recursing into each one, and return the gathered tokens in surface order.

use std::collections::HashSet;

use crate::extract::labels::LabelCategory;
use crate::tree::Token;

/// Multi-word noun built from `compound` dependents ("machine learning models")
pub fn expand_compound(token: Token<'_>) -> Vec<Token<'_>> {
    expand_by(token, LabelCategory::Compound)
}

/// Head plus its adjectival/descriptive dependents ("worst hamburger")
pub fn expand_descriptors(token: Token<'_>) -> Vec<Token<'_>> {
    expand_by(token, LabelCategory::Adjectival)
}

/// Lowercased tokens joined with single spaces
pub fn phrase(tokens: &[Token<'_>]) -> String {
    tokens.iter().map(|t| t.lower()).collect::<Vec<_>>().join(" ")
}

fn expand_by(token: Token<'_>, category: LabelCategory) -> Vec<Token<'_>> {
    let mut visited = HashSet::new();
    let mut gathered = Vec::new();
    gather(token, category, &mut visited, &mut gathered);
    // Non-projective attachments can visit out of surface order
    gathered.sort_by_key(|t| t.index());
    gathered
}

fn gather<'s>(
    token: Token<'s>,
    category: LabelCategory,
    visited: &mut HashSet<usize>,
    out: &mut Vec<Token<'s>>,
) {
    if !visited.insert(token.index()) {
        return;
    }
    for left in token.lefts().filter(|t| category.contains(t.dep())) {
        gather(left, category, visited, out);
    }
    out.push(token);
    for right in token.rights().filter(|t| category.contains(t.dep())) {
        gather(right, category, visited, out);
    }
}
