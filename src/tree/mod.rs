//! Dependency tree snapshot consumed by the extractors.
//!
//! A [`Sentence`] owns the token attributes; [`Token`] is a borrowed handle
//! used for all navigation (head, left/right dependents, ancestors).

pub mod error;
pub mod sentence;
pub mod token;

pub use error::TreeError;
pub use sentence::{Sentence, SentenceBuilder};
pub use token::{Ancestors, Token};
