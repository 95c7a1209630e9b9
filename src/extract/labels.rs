//! Dependency label inventories used as classification filters.
//!
//! The strings are the annotator's label inventory (ClearNLP/spaCy English
//! scheme) and must match the wire values exactly.

pub const SUBJECTS: &[&str] = &["nsubj", "nsubjpass", "csubj", "csubjpass", "agent", "expl"];

pub const OBJECTS: &[&str] = &["dobj", "dative", "attr", "oprd"];

pub const ADJECTIVES: &[&str] = &[
    "acomp", "advcl", "advmod", "amod", "appos", "nn", "nmod", "ccomp", "complm", "hmod",
    "infmod", "xcomp", "rcmod", "poss",
];

pub const COMPOUNDS: &[&str] = &["compound"];

pub const PREPOSITIONS: &[&str] = &["prep"];

/// Lowercased forms that negate the token they depend on
pub const NEGATIONS: &[&str] = &["no", "not", "n't", "never", "none"];

/// Subject label of an older tagging scheme, only consulted by the head-chain
/// fallback. Current English models never emit it.
pub const LEGACY_SUBJECT: &str = "SUB";

pub const AUXILIARY: &str = "aux";
pub const OPEN_CLAUSAL_COMPLEMENT: &str = "xcomp";
pub const COORDINATOR: &str = "and";

/// Pronoun accepted as a prepositional object regardless of its label
pub const FIRST_PERSON_OBJECT: &str = "me";

/// Named label sets
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LabelCategory {
    Subject,
    Object,
    Adjectival,
    Compound,
    Preposition,
}

impl LabelCategory {
    pub fn labels(self) -> &'static [&'static str] {
        match self {
            LabelCategory::Subject => SUBJECTS,
            LabelCategory::Object => OBJECTS,
            LabelCategory::Adjectival => ADJECTIVES,
            LabelCategory::Compound => COMPOUNDS,
            LabelCategory::Preposition => PREPOSITIONS,
        }
    }

    #[inline]
    pub fn contains(self, label: &str) -> bool {
        self.labels().contains(&label)
    }
}

#[inline]
pub fn is_negation_word(lower: &str) -> bool {
    NEGATIONS.contains(&lower)
}
