//! Immutable dependency tree over one annotated text.

use crate::data::document::AnnotatedDoc;
use crate::tree::error::TreeError;
use crate::tree::token::Token;
use crate::types::PartOfSpeech;

/// Stored attributes of one token
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct TokenRecord {
    pub(crate) text: String,
    pub(crate) lower: String,
    pub(crate) lemma: String,
    pub(crate) pos: PartOfSpeech,
    pub(crate) dep: String,
    /// Equal to the token's own index for a root
    pub(crate) head: usize,
    pub(crate) lefts: Vec<usize>,
    pub(crate) rights: Vec<usize>,
}

/// A parsed sentence: an arena of tokens linked into a dependency forest.
///
/// Built once and never mutated, so it can be shared across threads and
/// every extraction over it is deterministic. A text holding several
/// sentences simply has several roots.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Sentence {
    tokens: Vec<TokenRecord>,
}

/// Token attributes before dependents are linked
#[derive(Debug, Clone)]
struct TokenRow {
    text: String,
    lemma: String,
    pos: PartOfSpeech,
    dep: String,
}

impl Sentence {
    /// Number of tokens
    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    /// Token handle at `index`
    pub fn token(&self, index: usize) -> Option<Token<'_>> {
        (index < self.tokens.len()).then(|| Token::new(self, index))
    }

    /// All tokens in surface order
    pub fn tokens(&self) -> impl Iterator<Item = Token<'_>> + '_ {
        (0..self.tokens.len()).map(move |i| Token::new(self, i))
    }

    /// Tokens without a head
    pub fn roots(&self) -> impl Iterator<Item = Token<'_>> + '_ {
        self.tokens().filter(|t| t.is_root())
    }

    /// Surface text, space separated
    pub fn text(&self) -> String {
        self.tokens
            .iter()
            .map(|t| t.text.as_str())
            .collect::<Vec<_>>()
            .join(" ")
    }

    pub(crate) fn record(&self, index: usize) -> &TokenRecord {
        &self.tokens[index]
    }

    /// Link rows to their heads, derive ordered dependents and reject cycles
    fn assemble(rows: Vec<TokenRow>, heads: Vec<usize>) -> Result<Self, TreeError> {
        let len = rows.len();
        let mut lefts = vec![Vec::new(); len];
        let mut rights = vec![Vec::new(); len];

        for (dependent, &head) in heads.iter().enumerate() {
            if head >= len {
                return Err(TreeError::TokenOutOfBounds { index: head, len });
            }
            if head == dependent {
                continue;
            }
            if dependent < head {
                lefts[head].push(dependent);
            } else {
                rights[head].push(dependent);
            }
        }

        // Every head walk must reach a root within `len` steps
        for start in 0..len {
            let mut current = start;
            let mut steps = 0;
            while heads[current] != current {
                current = heads[current];
                steps += 1;
                if steps > len {
                    return Err(TreeError::Cycle(start));
                }
            }
        }

        // Indices were pushed in ascending order, so each list is already sorted
        let tokens = rows
            .into_iter()
            .zip(heads)
            .zip(lefts.into_iter().zip(rights))
            .map(|((row, head), (lefts, rights))| TokenRecord {
                lower: row.text.to_lowercase(),
                text: row.text,
                lemma: row.lemma,
                pos: row.pos,
                dep: row.dep,
                head,
                lefts,
                rights,
            })
            .collect();

        Ok(Self { tokens })
    }
}

impl TryFrom<&AnnotatedDoc> for Sentence {
    type Error = TreeError;

    /// Build a tree from annotator output. Heads are recovered from the
    /// `lefts`/`rights` maps; tokens never listed as a dependent are roots.
    fn try_from(doc: &AnnotatedDoc) -> Result<Self, Self::Error> {
        let len = doc.words.len();
        for (field, found) in [
            ("lemmas", doc.lemmas.len()),
            ("pos", doc.pos.len()),
            ("dep", doc.dep.len()),
        ] {
            if found != len {
                return Err(TreeError::LengthMismatch { field, expected: len, found });
            }
        }

        let mut heads: Vec<Option<usize>> = vec![None; len];
        for (side, map) in [("left", &doc.lefts), ("right", &doc.rights)] {
            for (&head, dependents) in map {
                if head >= len {
                    return Err(TreeError::TokenOutOfBounds { index: head, len });
                }
                for &dependent in dependents {
                    if dependent >= len {
                        return Err(TreeError::TokenOutOfBounds { index: dependent, len });
                    }
                    if dependent == head {
                        return Err(TreeError::SelfAttachment(head));
                    }
                    let on_expected_side = match side {
                        "left" => dependent < head,
                        _ => dependent > head,
                    };
                    if !on_expected_side {
                        return Err(TreeError::MisplacedDependent { head, dependent, side });
                    }
                    if let Some(first) = heads[dependent] {
                        return Err(TreeError::MultipleHeads { dependent, first, second: head });
                    }
                    heads[dependent] = Some(head);
                }
            }
        }

        let mut rows = Vec::with_capacity(len);
        for i in 0..len {
            let pos = PartOfSpeech::from_index(doc.pos[i]).ok_or(TreeError::UnknownPos(doc.pos[i]))?;
            rows.push(TokenRow {
                text: doc.words[i].clone(),
                lemma: doc.lemmas[i].clone(),
                pos,
                dep: doc.dep[i].clone(),
            });
        }

        let heads = heads
            .into_iter()
            .enumerate()
            .map(|(i, head)| head.unwrap_or(i))
            .collect();

        Self::assemble(rows, heads)
    }
}

/// Row-by-row construction of a [`Sentence`], one token per call in surface
/// order. A token whose head is its own index is a root.
///
/// ```
/// use svo_extract::tree::SentenceBuilder;
/// use svo_extract::types::PartOfSpeech::*;
///
/// let sentence = SentenceBuilder::new()
///     .token("John", "John", Propn, "nsubj", 1)
///     .token("ate", "eat", Verb, "ROOT", 1)
///     .build()
///     .unwrap();
/// assert_eq!(sentence.len(), 2);
/// ```
#[derive(Debug, Clone, Default)]
pub struct SentenceBuilder {
    rows: Vec<TokenRow>,
    heads: Vec<usize>,
}

impl SentenceBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a token
    pub fn token(
        mut self,
        text: impl Into<String>,
        lemma: impl Into<String>,
        pos: PartOfSpeech,
        dep: impl Into<String>,
        head: usize,
    ) -> Self {
        self.rows.push(TokenRow {
            text: text.into(),
            lemma: lemma.into(),
            pos,
            dep: dep.into(),
        });
        self.heads.push(head);
        self
    }

    pub fn build(self) -> Result<Sentence, TreeError> {
        Sentence::assemble(self.rows, self.heads)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::PartOfSpeech::*;

    fn doc(json: &str) -> AnnotatedDoc {
        serde_json::from_str(json).unwrap()
    }

    const HAMBURGER: &str = r#"{
        "words": ["John", "ate", "the", "worst", "hamburger"],
        "lemmas": ["John", "eat", "the", "bad", "hamburger"],
        "pos": [11, 15, 5, 0, 7],
        "dep": ["nsubj", "ROOT", "det", "amod", "dobj"],
        "lefts": {"1": [0], "4": [2, 3]},
        "rights": {"1": [4]}
    }"#;

    #[test]
    fn test_heads_derived_from_dependents() {
        let sentence = Sentence::try_from(&doc(HAMBURGER)).unwrap();
        assert_eq!(sentence.len(), 5);

        let ate = sentence.token(1).unwrap();
        assert!(ate.is_root());
        assert_eq!(ate.head(), ate);

        let hamburger = sentence.token(4).unwrap();
        assert_eq!(hamburger.head(), ate);
        let lefts: Vec<&str> = hamburger.lefts().map(|t| t.text()).collect();
        assert_eq!(lefts, vec!["the", "worst"]);

        let roots: Vec<usize> = sentence.roots().map(|t| t.index()).collect();
        assert_eq!(roots, vec![1]);
        assert_eq!(sentence.text(), "John ate the worst hamburger");
    }

    #[test]
    fn test_builder_matches_annotator_path() {
        let built = SentenceBuilder::new()
            .token("John", "John", Propn, "nsubj", 1)
            .token("ate", "eat", Verb, "ROOT", 1)
            .token("the", "the", Det, "det", 4)
            .token("worst", "bad", Adj, "amod", 4)
            .token("hamburger", "hamburger", Noun, "dobj", 1)
            .build()
            .unwrap();
        let parsed = Sentence::try_from(&doc(HAMBURGER)).unwrap();
        assert_eq!(built, parsed);
    }

    #[test]
    fn test_rejects_two_heads() {
        let mut d = doc(HAMBURGER);
        d.rights.insert(0, vec![4]);
        let err = Sentence::try_from(&d).unwrap_err();
        assert!(matches!(err, TreeError::MultipleHeads { dependent: 4, .. }));
    }

    #[test]
    fn test_rejects_out_of_range_and_misplaced() {
        let mut d = doc(HAMBURGER);
        d.rights.insert(1, vec![9]);
        assert_eq!(
            Sentence::try_from(&d).unwrap_err(),
            TreeError::TokenOutOfBounds { index: 9, len: 5 }
        );

        let mut d = doc(HAMBURGER);
        d.lefts.insert(0, vec![2]);
        d.lefts.insert(4, vec![3]);
        assert_eq!(
            Sentence::try_from(&d).unwrap_err(),
            TreeError::MisplacedDependent { head: 0, dependent: 2, side: "left" }
        );

        let mut d = doc(HAMBURGER);
        d.pos[2] = 99;
        assert_eq!(Sentence::try_from(&d).unwrap_err(), TreeError::UnknownPos(99));

        let mut d = doc(HAMBURGER);
        d.dep.pop();
        assert!(matches!(
            Sentence::try_from(&d).unwrap_err(),
            TreeError::LengthMismatch { field: "dep", .. }
        ));
    }

    #[test]
    fn test_rejects_cycle() {
        let err = SentenceBuilder::new()
            .token("a", "a", Noun, "dep", 1)
            .token("b", "b", Noun, "dep", 0)
            .build()
            .unwrap_err();
        assert_eq!(err, TreeError::Cycle(0));
    }

    #[test]
    fn test_sentence_is_thread_safe() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<Sentence>();
    }
}
