use std::fmt;

use crate::tree::sentence::{Sentence, TokenRecord};
use crate::types::PartOfSpeech;

/// Read-only view of one token inside a [`Sentence`].
///
/// Handles are cheap to copy. Two handles are equal when they point at the
/// same position of the same sentence.
#[derive(Clone, Copy)]
pub struct Token<'s> {
    sentence: &'s Sentence,
    index: usize,
}

impl<'s> Token<'s> {
    pub(crate) fn new(sentence: &'s Sentence, index: usize) -> Self {
        Self { sentence, index }
    }

    fn record(&self) -> &'s TokenRecord {
        self.sentence.record(self.index)
    }

    /// Position in the sentence
    pub fn index(&self) -> usize {
        self.index
    }

    pub fn sentence(&self) -> &'s Sentence {
        self.sentence
    }

    /// Surface form
    pub fn text(&self) -> &'s str {
        &self.record().text
    }

    /// Lowercased surface form
    pub fn lower(&self) -> &'s str {
        &self.record().lower
    }

    pub fn lemma(&self) -> &'s str {
        &self.record().lemma
    }

    pub fn pos(&self) -> PartOfSpeech {
        self.record().pos
    }

    /// Dependency relation to the head
    pub fn dep(&self) -> &'s str {
        &self.record().dep
    }

    /// Syntactic head. A root is its own head.
    pub fn head(&self) -> Token<'s> {
        Token::new(self.sentence, self.record().head)
    }

    pub fn is_root(&self) -> bool {
        self.record().head == self.index
    }

    /// Dependents preceding this token, in surface order
    pub fn lefts(&self) -> impl Iterator<Item = Token<'s>> + 's {
        let sentence = self.sentence;
        self.record().lefts.iter().map(move |&i| Token::new(sentence, i))
    }

    /// Dependents following this token, in surface order
    pub fn rights(&self) -> impl Iterator<Item = Token<'s>> + 's {
        let sentence = self.sentence;
        self.record().rights.iter().map(move |&i| Token::new(sentence, i))
    }

    /// All dependents, in surface order
    pub fn children(&self) -> impl Iterator<Item = Token<'s>> + 's {
        self.lefts().chain(self.rights())
    }

    /// Heads from the direct head up to the root, excluding this token
    pub fn ancestors(&self) -> Ancestors<'s> {
        Ancestors {
            current: *self,
            remaining: self.sentence.len(),
        }
    }

    pub fn has_ancestors(&self) -> bool {
        !self.is_root()
    }
}

impl PartialEq for Token<'_> {
    fn eq(&self, other: &Self) -> bool {
        std::ptr::eq(self.sentence, other.sentence) && self.index == other.index
    }
}

impl Eq for Token<'_> {}

impl fmt::Debug for Token<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}#{}/{}/{}", self.text(), self.index, self.pos(), self.dep())
    }
}

impl fmt::Display for Token<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.text())
    }
}

/// Iterator over a token's head chain
#[derive(Debug, Clone)]
pub struct Ancestors<'s> {
    current: Token<'s>,
    remaining: usize,
}

impl<'s> Iterator for Ancestors<'s> {
    type Item = Token<'s>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.current.is_root() || self.remaining == 0 {
            return None;
        }
        self.remaining -= 1;
        self.current = self.current.head();
        Some(self.current)
    }
}
