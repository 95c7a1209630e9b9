//! Subject / verb / object extraction over dependency trees.
//!
//! This module is organized into the following submodules:
//! - `labels`: dependency label inventories and negation words
//! - `negation`: polarity of a token from its immediate dependents
//! - `expand`: compound and descriptor phrase expansion
//! - `conjunction`: "and"-coordinated subjects, objects and verbs
//! - `subject`: subject resolution, including the head-chain fallback
//! - `object`: object resolution (labeled, prepositional, adjectival, xcomp)
//! - `patterns`: the SV / SVO / SVAO extractors
//! - `config`: extractor switches loaded from YAML
//!
//! Every function here is total over a well-formed [`crate::tree::Sentence`]:
//! shapes that match no pattern yield empty results, never errors.

pub mod config;
pub mod conjunction;
pub mod expand;
pub mod labels;
pub mod negation;
pub mod object;
pub mod patterns;
pub mod subject;


pub use config::ExtractorConfig;
pub use conjunction::{expand_conjunctions, Role};
pub use expand::{expand_compound, expand_descriptors, phrase};
pub use labels::LabelCategory;
pub use negation::is_negated;
pub use object::{resolve_objects, resolve_objects_with_adjectives, Objects};
pub use patterns::{Extractor, PatternKind};
pub use subject::{resolve_subjects, Subjects};
