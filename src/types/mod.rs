pub mod pos;
pub mod relation;

pub use pos::{PartOfSpeech, POS_MAPPING};
pub use relation::{Filters, Relation, SentenceRelations, SvPair, SvoTriple};
