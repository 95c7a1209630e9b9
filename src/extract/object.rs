//! Object resolution for a verb.

use crate::extract::config::ExtractorConfig;
use crate::extract::conjunction::{expand_conjunctions, Role};
use crate::extract::labels::{LabelCategory, FIRST_PERSON_OBJECT, OPEN_CLAUSAL_COMPLEMENT};
use crate::tree::Token;
use crate::types::PartOfSpeech;

/// Objects of a verb. `verb` differs from the queried verb only when the
/// xcomp path switched to a complement verb.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Objects<'s> {
    pub verb: Token<'s>,
    pub objects: Vec<Token<'s>>,
}

/// Objects hanging off prepositions among `deps`: Objects-labeled right
/// dependents of each `prep` ADP, plus the pronoun "me".
pub fn objects_from_prepositions<'s>(deps: &[Token<'s>]) -> Vec<Token<'s>> {
    deps.iter()
        .filter(|dep| dep.pos() == PartOfSpeech::Adp && LabelCategory::Preposition.contains(dep.dep()))
        .flat_map(|prep| prep.rights())
        .filter(|tok| {
            LabelCategory::Object.contains(tok.dep())
                || (tok.pos() == PartOfSpeech::Pron && tok.lower() == FIRST_PERSON_OBJECT)
        })
        .collect()
}

/// First `xcomp` verb among `deps` that has objects of its own
pub fn objects_from_xcomp<'s>(deps: &[Token<'s>]) -> Option<Objects<'s>> {
    deps.iter()
        .filter(|dep| dep.pos() == PartOfSpeech::Verb && dep.dep() == OPEN_CLAUSAL_COMPLEMENT)
        .find_map(|&verb| {
            let rights: Vec<_> = verb.rights().collect();
            let mut objects = labeled_objects(&rights);
            objects.extend(objects_from_prepositions(&rights));
            (!objects.is_empty()).then_some(Objects { verb, objects })
        })
}

/// Objects of `verb`: Objects-labeled right dependents and prepositional objects
pub fn resolve_objects<'s>(verb: Token<'s>, config: &ExtractorConfig) -> Objects<'s> {
    let rights: Vec<_> = verb.rights().collect();
    let mut objects = labeled_objects(&rights);
    objects.extend(objects_from_prepositions(&rights));
    finish(verb, &rights, objects, config)
}

/// As [`resolve_objects`], but when no right dependent carries an Objects
/// label the adjectival-labeled right dependents stand in for them.
pub fn resolve_objects_with_adjectives<'s>(verb: Token<'s>, config: &ExtractorConfig) -> Objects<'s> {
    let rights: Vec<_> = verb.rights().collect();
    let mut objects = labeled_objects(&rights);
    if objects.is_empty() {
        objects = rights
            .iter()
            .copied()
            .filter(|t| LabelCategory::Adjectival.contains(t.dep()))
            .collect();
    }
    objects.extend(objects_from_prepositions(&rights));
    finish(verb, &rights, objects, config)
}

fn labeled_objects<'s>(deps: &[Token<'s>]) -> Vec<Token<'s>> {
    deps.iter()
        .copied()
        .filter(|t| LabelCategory::Object.contains(t.dep()))
        .collect()
}

/// Optional xcomp and conjunction passes
fn finish<'s>(
    mut verb: Token<'s>,
    rights: &[Token<'s>],
    mut objects: Vec<Token<'s>>,
    config: &ExtractorConfig,
) -> Objects<'s> {
    if config.follow_xcomp {
        if let Some(found) = objects_from_xcomp(rights) {
            log::debug!("{:?} hands its objects over to xcomp {:?}", verb, found.verb);
            objects.extend(found.objects);
            verb = found.verb;
        }
    }

    if config.expand_object_conjunctions && !objects.is_empty() {
        let more = expand_conjunctions(&objects, Role::Object);
        objects.extend(more);
    }

    Objects { verb, objects }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tree::{Sentence, SentenceBuilder};
    use crate::types::PartOfSpeech::*;

    fn texts(objects: &Objects<'_>) -> Vec<String> {
        objects.objects.iter().map(|t| t.lower().to_string()).collect()
    }

    /// "She gave me a book about trees and a pen"
    fn gave() -> Sentence {
        SentenceBuilder::new()
            .token("She", "she", Pron, "nsubj", 1)
            .token("gave", "give", Verb, "ROOT", 1)
            .token("me", "I", Pron, "dative", 1)
            .token("a", "a", Det, "det", 4)
            .token("book", "book", Noun, "dobj", 1)
            .token("about", "about", Adp, "prep", 4)
            .token("trees", "tree", Noun, "pobj", 5)
            .token("and", "and", Cconj, "cc", 4)
            .token("a", "a", Det, "det", 9)
            .token("pen", "pen", Noun, "conj", 4)
            .build()
            .unwrap()
    }

    #[test]
    fn test_labeled_objects() {
        let sentence = gave();
        let verb = sentence.token(1).unwrap();
        let objects = resolve_objects(verb, &ExtractorConfig::default());
        assert_eq!(objects.verb, verb);
        assert_eq!(texts(&objects), vec!["me", "book"]);
    }

    #[test]
    fn test_object_conjunctions_when_enabled() {
        let sentence = gave();
        let verb = sentence.token(1).unwrap();
        let config = ExtractorConfig { expand_object_conjunctions: true, ..ExtractorConfig::default() };
        let objects = resolve_objects(verb, &config);
        assert_eq!(texts(&objects), vec!["me", "book", "pen"]);
    }

    #[test]
    fn test_prepositional_objects() {
        // "He talked to me about a plan": pobj is not an Objects label, "me" is special
        let sentence = SentenceBuilder::new()
            .token("He", "he", Pron, "nsubj", 1)
            .token("talked", "talk", Verb, "ROOT", 1)
            .token("to", "to", Adp, "prep", 1)
            .token("me", "I", Pron, "pobj", 2)
            .token("about", "about", Adp, "prep", 1)
            .token("a", "a", Det, "det", 6)
            .token("plan", "plan", Noun, "pobj", 4)
            .build()
            .unwrap();
        let verb = sentence.token(1).unwrap();
        let objects = resolve_objects(verb, &ExtractorConfig::default());
        assert_eq!(texts(&objects), vec!["me"]);

        let rights: Vec<_> = verb.rights().collect();
        assert_eq!(objects_from_prepositions(&rights).len(), 1);
    }

    #[test]
    fn test_adjectival_stand_in() {
        // "The soup tastes very salty": salty is acomp
        let sentence = SentenceBuilder::new()
            .token("The", "the", Det, "det", 1)
            .token("soup", "soup", Noun, "nsubj", 2)
            .token("tastes", "taste", Verb, "ROOT", 2)
            .token("very", "very", Adv, "advmod", 4)
            .token("salty", "salty", Adj, "acomp", 2)
            .build()
            .unwrap();
        let verb = sentence.token(2).unwrap();
        let config = ExtractorConfig::default();

        assert!(resolve_objects(verb, &config).objects.is_empty());
        let objects = resolve_objects_with_adjectives(verb, &config);
        assert_eq!(texts(&objects), vec!["salty"]);
    }

    #[test]
    fn test_labeled_objects_win_over_adjectives() {
        let sentence = SentenceBuilder::new()
            .token("ate", "eat", Verb, "ROOT", 0)
            .token("quickly", "quickly", Adv, "advmod", 0)
            .token("soup", "soup", Noun, "dobj", 0)
            .build()
            .unwrap();
        let objects = resolve_objects_with_adjectives(sentence.token(0).unwrap(), &ExtractorConfig::default());
        assert_eq!(texts(&objects), vec!["soup"]);
    }

    #[test]
    fn test_xcomp_switches_verb() {
        // "John wants to eat the hamburger"
        let sentence = SentenceBuilder::new()
            .token("John", "John", Propn, "nsubj", 1)
            .token("wants", "want", Verb, "ROOT", 1)
            .token("to", "to", Part, "aux", 3)
            .token("eat", "eat", Verb, "xcomp", 1)
            .token("the", "the", Det, "det", 5)
            .token("hamburger", "hamburger", Noun, "dobj", 3)
            .build()
            .unwrap();
        let wants = sentence.token(1).unwrap();

        let off = resolve_objects(wants, &ExtractorConfig::default());
        assert_eq!(off.verb, wants);
        assert!(off.objects.is_empty());

        let config = ExtractorConfig { follow_xcomp: true, ..ExtractorConfig::default() };
        let on = resolve_objects(wants, &config);
        assert_eq!(on.verb.text(), "eat");
        assert_eq!(texts(&on), vec!["hamburger"]);
    }
}
