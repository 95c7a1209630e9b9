use thiserror::Error;

/// Errors raised while building a dependency tree from annotator output
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TreeError {
    #[error("Field '{field}' has {found} entries, expected {expected}")]
    LengthMismatch {
        field: &'static str,
        expected: usize,
        found: usize,
    },

    #[error("Token index out of bounds: {index} (token count: {len})")]
    TokenOutOfBounds { index: usize, len: usize },

    #[error("Unknown part-of-speech index: {0}")]
    UnknownPos(usize),

    #[error("Token {dependent} is attached to both {first} and {second}")]
    MultipleHeads {
        dependent: usize,
        first: usize,
        second: usize,
    },

    #[error("Token {dependent} is listed as a {side} dependent of {head} but is on the other side")]
    MisplacedDependent {
        head: usize,
        dependent: usize,
        side: &'static str,
    },

    #[error("Token {0} is attached to itself")]
    SelfAttachment(usize),

    #[error("Head chain starting at token {0} contains a cycle")]
    Cycle(usize),
}
