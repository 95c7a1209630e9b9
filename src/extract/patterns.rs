//! SV / SVO / SVAO pattern extraction over one sentence.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::extract::config::ExtractorConfig;
use crate::extract::expand::{expand_descriptors, phrase};
use crate::extract::labels::AUXILIARY;
use crate::extract::negation::is_negated;
use crate::extract::object::{resolve_objects, resolve_objects_with_adjectives, Objects};
use crate::extract::subject::resolve_subjects;
use crate::tree::{Sentence, Token};
use crate::types::{Filters, PartOfSpeech, Relation, SvPair, SvoTriple};

/// Which tuples to extract
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PatternKind {
    /// (subject, verb)
    Sv,
    /// (subject, verb, object)
    Svo,
    /// (subject, verb, descriptor-expanded object)
    Svao,
}

impl fmt::Display for PatternKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            PatternKind::Sv => "sv",
            PatternKind::Svo => "svo",
            PatternKind::Svao => "svao",
        })
    }
}

impl FromStr for PatternKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "sv" => Ok(PatternKind::Sv),
            "svo" => Ok(PatternKind::Svo),
            "svao" => Ok(PatternKind::Svao),
            other => Err(format!("unknown pattern '{}', expected sv, svo or svao", other)),
        }
    }
}

/// Stateless pattern extractor. Holds only configuration, so one instance
/// can serve any number of sentences concurrently.
#[derive(Debug, Clone, Default)]
pub struct Extractor {
    config: ExtractorConfig,
}

impl Extractor {
    pub fn new(config: ExtractorConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ExtractorConfig {
        &self.config
    }

    /// Non-auxiliary verbs, optionally restricted to the filter's lemmas
    pub fn find_verbs<'s>(&self, sentence: &'s Sentence, filters: &Filters) -> Vec<Token<'s>> {
        sentence
            .tokens()
            .filter(|t| {
                t.pos() == PartOfSpeech::Verb
                    && t.dep() != AUXILIARY
                    && filters.accepts_verb_lemma(t.lemma())
            })
            .collect()
    }

    /// Subject-verb pairs, e.g. "John ate the worst hamburger" -> (john, ate)
    pub fn subject_verb_pairs(&self, sentence: &Sentence, filters: &Filters) -> Vec<SvPair> {
        let mut pairs = Vec::new();
        for verb in self.find_verbs(sentence, filters) {
            let subjects = resolve_subjects(verb, filters, &self.config);
            let verb_form = self.verb_form(verb, subjects.negated);
            for subject in subjects.phrases {
                pairs.push(SvPair::new(subject, verb_form.clone()));
            }
        }
        pairs
    }

    /// Subject-verb-object triples, e.g. (john, ate, hamburger)
    pub fn subject_verb_object_triples(&self, sentence: &Sentence, filters: &Filters) -> Vec<SvoTriple> {
        self.triples(sentence, filters, resolve_objects, |object| object.lower().to_string())
    }

    /// Subject-verb-object triples with descriptor-expanded objects,
    /// e.g. (john, ate, worst hamburger)
    pub fn subject_verb_adjective_object_triples(
        &self,
        sentence: &Sentence,
        filters: &Filters,
    ) -> Vec<SvoTriple> {
        self.triples(sentence, filters, resolve_objects_with_adjectives, |object| {
            phrase(&expand_descriptors(object))
        })
    }

    /// Run the extractor selected by `pattern`
    pub fn extract(&self, pattern: PatternKind, sentence: &Sentence, filters: &Filters) -> Vec<Relation> {
        match pattern {
            PatternKind::Sv => self
                .subject_verb_pairs(sentence, filters)
                .into_iter()
                .map(Relation::from)
                .collect(),
            PatternKind::Svo => self
                .subject_verb_object_triples(sentence, filters)
                .into_iter()
                .map(Relation::from)
                .collect(),
            PatternKind::Svao => self
                .subject_verb_adjective_object_triples(sentence, filters)
                .into_iter()
                .map(Relation::from)
                .collect(),
        }
    }

    fn triples<'s, R, P>(
        &self,
        sentence: &'s Sentence,
        filters: &Filters,
        resolve: R,
        object_phrase: P,
    ) -> Vec<SvoTriple>
    where
        R: Fn(Token<'s>, &ExtractorConfig) -> Objects<'s>,
        P: Fn(Token<'s>) -> String,
    {
        let mut triples = Vec::new();
        for verb in self.find_verbs(sentence, filters) {
            let subjects = resolve_subjects(verb, filters, &self.config);
            // Without subjects the verb is not examined further
            if subjects.phrases.is_empty() {
                continue;
            }
            let Objects { verb, objects } = resolve(verb, &self.config);
            for subject in &subjects.phrases {
                for &object in &objects {
                    let negated = subjects.negated || is_negated(object);
                    triples.push(SvoTriple::new(
                        subject.clone(),
                        self.verb_form(verb, negated),
                        object_phrase(object),
                    ));
                }
            }
        }
        triples
    }

    /// Lowercased verb, prefixed with the negation marker when negated
    fn verb_form(&self, verb: Token<'_>, negated: bool) -> String {
        if negated {
            format!("{}{}", self.config.negation_marker, verb.lower())
        } else {
            verb.lower().to_string()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pattern_kind_parsing() {
        assert_eq!("SVAO".parse::<PatternKind>(), Ok(PatternKind::Svao));
        assert_eq!("sv".parse::<PatternKind>(), Ok(PatternKind::Sv));
        assert!("vso".parse::<PatternKind>().is_err());
        assert_eq!(PatternKind::Svo.to_string(), "svo");
        assert_eq!(serde_json::to_string(&PatternKind::Svao).unwrap(), "\"svao\"");
    }
}
