pub mod document;
pub mod parser;

pub use document::{AnnotatedBatch, AnnotatedDoc, ArticlesRequest, Entity};
pub use parser::DocumentParser;
