//! Subject resolution for a verb.

use std::collections::HashSet;

use crate::extract::config::ExtractorConfig;
use crate::extract::conjunction::{expand_conjunctions, Role};
use crate::extract::expand::{expand_compound, phrase};
use crate::extract::labels::{LabelCategory, LEGACY_SUBJECT};
use crate::extract::negation::is_negated;
use crate::tree::Token;
use crate::types::{Filters, PartOfSpeech};

/// Subject phrases of one verb and the polarity that came with them
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Subjects {
    pub phrases: Vec<String>,
    pub negated: bool,
}

/// Subject-labeled left dependents of `verb`, determiners excluded
pub fn direct_subjects(verb: Token<'_>) -> Vec<Token<'_>> {
    verb.lefts()
        .filter(|t| LabelCategory::Subject.contains(t.dep()) && t.pos() != PartOfSpeech::Det)
        .collect()
}

/// Head-chain fallback used when a verb has no direct subject.
///
/// Climbs to the nearest VERB or NOUN head. A NOUN head is the subject and
/// polarity comes from the token the climb started at. A VERB head is
/// searched for `SUB`-labeled dependents; without any the climb resumes from
/// that verb. Labels from current English models never match `SUB`, so in
/// practice the VERB branch only continues the climb.
pub fn subjects_from_heads(token: Token<'_>) -> (Vec<Token<'_>>, bool) {
    let mut visited = HashSet::new();
    let mut current = token;

    while visited.insert(current.index()) {
        let mut head = current.head();
        while !matches!(head.pos(), PartOfSpeech::Verb | PartOfSpeech::Noun) && !head.is_root() {
            head = head.head();
        }

        match head.pos() {
            PartOfSpeech::Verb => {
                let mut subjects: Vec<_> = head.lefts().filter(|t| t.dep() == LEGACY_SUBJECT).collect();
                if !subjects.is_empty() {
                    let negated = is_negated(head);
                    let more = expand_conjunctions(&subjects, Role::Subject);
                    subjects.extend(more);
                    return (subjects, negated);
                }
                if head.is_root() {
                    break;
                }
                current = head;
            }
            PartOfSpeech::Noun => {
                log::debug!("{:?} takes noun head {:?} as subject", current, head);
                return (vec![head], is_negated(current));
            }
            _ => break,
        }
    }

    (Vec::new(), false)
}

/// Subject phrases found left of `verb` or through its heads, before the
/// default subject and filters are applied.
pub fn find_left_subjects(verb: Token<'_>) -> Subjects {
    let mut negated = is_negated(verb);
    let mut subjects = direct_subjects(verb);

    if !subjects.is_empty() {
        let more = expand_conjunctions(&subjects, Role::Subject);
        subjects.extend(more);
    } else {
        let (found, found_negated) = subjects_from_heads(verb);
        subjects = found;
        negated = found_negated;
    }

    let phrases = subjects
        .into_iter()
        .map(|subject| phrase(&expand_compound(subject)))
        .collect();

    Subjects { phrases, negated }
}

/// All subjects of `verb`.
///
/// A sentence root with no subject gets the configured default subject.
/// The subject filter is matched against finished phrases.
pub fn resolve_subjects(verb: Token<'_>, filters: &Filters, config: &ExtractorConfig) -> Subjects {
    let mut subjects = find_left_subjects(verb);

    if subjects.phrases.is_empty() && !verb.has_ancestors() {
        if let Some(default) = &config.default_subject {
            subjects.phrases.push(default.clone());
        }
    }

    subjects.phrases.retain(|p| filters.accepts_subject(p));
    subjects
}
