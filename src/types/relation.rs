use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// A (subject, verb) pair. The verb carries the negation marker when negated.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SvPair {
    pub subject: String,
    pub verb: String,
}

impl SvPair {
    pub fn new(subject: impl Into<String>, verb: impl Into<String>) -> Self {
        Self {
            subject: subject.into(),
            verb: verb.into(),
        }
    }
}

/// A (subject, verb, object) triple. Used for both SVO and SVAO extraction;
/// for SVAO the object is the descriptor-expanded phrase.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SvoTriple {
    pub subject: String,
    pub verb: String,
    pub object: String,
}

impl SvoTriple {
    pub fn new(
        subject: impl Into<String>,
        verb: impl Into<String>,
        object: impl Into<String>,
    ) -> Self {
        Self {
            subject: subject.into(),
            verb: verb.into(),
            object: object.into(),
        }
    }
}

/// Either kind of extracted tuple
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Relation {
    SubjectVerbObject(SvoTriple),
    SubjectVerb(SvPair),
}

impl From<SvPair> for Relation {
    fn from(pair: SvPair) -> Self {
        Relation::SubjectVerb(pair)
    }
}

impl From<SvoTriple> for Relation {
    fn from(triple: SvoTriple) -> Self {
        Relation::SubjectVerbObject(triple)
    }
}

/// Relations found in one sentence of a batch
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SentenceRelations {
    /// Position of the sentence in the input batch
    pub sentence: usize,
    pub relations: Vec<Relation>,
}

/// Optional restrictions applied during extraction.
///
/// `subjects` holds lowercased subject phrases and is matched after phrase
/// construction; `verbs` holds verb lemmas.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Filters {
    pub subjects: Option<HashSet<String>>,
    pub verbs: Option<HashSet<String>>,
}

impl Filters {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_subjects<I, S>(mut self, subjects: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.subjects = Some(subjects.into_iter().map(Into::into).collect());
        self
    }

    pub fn with_verbs<I, S>(mut self, verbs: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.verbs = Some(verbs.into_iter().map(Into::into).collect());
        self
    }

    pub fn accepts_subject(&self, phrase: &str) -> bool {
        self.subjects.as_ref().map_or(true, |set| set.contains(phrase))
    }

    pub fn accepts_verb_lemma(&self, lemma: &str) -> bool {
        self.verbs.as_ref().map_or(true, |set| set.contains(lemma))
    }
}
