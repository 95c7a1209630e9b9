use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Coarse part-of-speech tags (Universal Dependencies inventory).
///
/// The declaration order is the annotator's wire order: a `pos` value of `7`
/// on the wire is [`PartOfSpeech::Noun`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum PartOfSpeech {
    Adj,
    Adp,
    Adv,
    Aux,
    Cconj,
    Det,
    Intj,
    Noun,
    Num,
    Part,
    Pron,
    Propn,
    Punct,
    Sconj,
    Sym,
    Verb,
    X,
}

/// Wire order of the annotator's POS indices
pub const POS_MAPPING: [PartOfSpeech; 17] = [
    PartOfSpeech::Adj,
    PartOfSpeech::Adp,
    PartOfSpeech::Adv,
    PartOfSpeech::Aux,
    PartOfSpeech::Cconj,
    PartOfSpeech::Det,
    PartOfSpeech::Intj,
    PartOfSpeech::Noun,
    PartOfSpeech::Num,
    PartOfSpeech::Part,
    PartOfSpeech::Pron,
    PartOfSpeech::Propn,
    PartOfSpeech::Punct,
    PartOfSpeech::Sconj,
    PartOfSpeech::Sym,
    PartOfSpeech::Verb,
    PartOfSpeech::X,
];

impl PartOfSpeech {
    /// Look up a tag by its wire index
    pub fn from_index(index: usize) -> Option<Self> {
        POS_MAPPING.get(index).copied()
    }

    /// Wire index of this tag
    pub fn index(self) -> usize {
        self as usize
    }

    pub fn as_str(self) -> &'static str {
        match self {
            PartOfSpeech::Adj => "ADJ",
            PartOfSpeech::Adp => "ADP",
            PartOfSpeech::Adv => "ADV",
            PartOfSpeech::Aux => "AUX",
            PartOfSpeech::Cconj => "CCONJ",
            PartOfSpeech::Det => "DET",
            PartOfSpeech::Intj => "INTJ",
            PartOfSpeech::Noun => "NOUN",
            PartOfSpeech::Num => "NUM",
            PartOfSpeech::Part => "PART",
            PartOfSpeech::Pron => "PRON",
            PartOfSpeech::Propn => "PROPN",
            PartOfSpeech::Punct => "PUNCT",
            PartOfSpeech::Sconj => "SCONJ",
            PartOfSpeech::Sym => "SYM",
            PartOfSpeech::Verb => "VERB",
            PartOfSpeech::X => "X",
        }
    }
}

impl fmt::Display for PartOfSpeech {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PartOfSpeech {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        POS_MAPPING
            .iter()
            .copied()
            .find(|pos| pos.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| format!("unknown part-of-speech tag '{}'", s))
    }
}
