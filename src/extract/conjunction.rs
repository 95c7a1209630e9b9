use std::collections::HashSet;

use crate::extract::labels::{LabelCategory, COORDINATOR};
use crate::tree::Token;
use crate::types::PartOfSpeech;

/// Grammatical role being expanded through "and" coordination
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    Subject,
    Object,
    Verb,
}

impl Role {
    /// Dependents inspected for this role: subjects look left, the rest look right
    fn same_side<'s>(self, token: Token<'s>) -> Vec<Token<'s>> {
        match self {
            Role::Subject => token.lefts().collect(),
            Role::Object | Role::Verb => token.rights().collect(),
        }
    }

    fn accepts(self, token: Token<'_>) -> bool {
        match self {
            Role::Subject => {
                LabelCategory::Subject.contains(token.dep()) || token.pos() == PartOfSpeech::Noun
            }
            Role::Object => {
                LabelCategory::Object.contains(token.dep()) || token.pos() == PartOfSpeech::Noun
            }
            Role::Verb => token.pos() == PartOfSpeech::Verb,
        }
    }
}

/// Tokens coordinated with `found` by "and", excluding `found` itself.
///
/// Expansion repeats on each newly discovered token, so chains such as
/// "A, B and C" are followed to the end. A token is returned at most once.
pub fn expand_conjunctions<'s>(found: &[Token<'s>], role: Role) -> Vec<Token<'s>> {
    let mut seen: HashSet<usize> = found.iter().map(|t| t.index()).collect();
    let mut more = Vec::new();
    let mut frontier: Vec<Token<'s>> = found.to_vec();

    while !frontier.is_empty() {
        let mut next = Vec::new();
        for token in &frontier {
            let side = role.same_side(*token);
            if !side.iter().any(|t| t.lower() == COORDINATOR) {
                continue;
            }
            for candidate in side {
                if role.accepts(candidate) && seen.insert(candidate.index()) {
                    log::debug!("{:?} {:?} coordinated with {:?}", role, candidate, token);
                    next.push(candidate);
                }
            }
        }
        more.extend(next.iter().copied());
        frontier = next;
    }

    more
}
