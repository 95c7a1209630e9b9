pub mod types;
pub mod data;
pub mod tree;
pub mod extract;
pub mod engine;
pub mod api;

pub use engine::{Annotator, ExtractionEngine, ProcessError, RemoteAnnotator};
pub use extract::{Extractor, ExtractorConfig, PatternKind};
pub use tree::{Sentence, SentenceBuilder, Token, TreeError};
pub use types::{Filters, PartOfSpeech, Relation, SentenceRelations, SvPair, SvoTriple};
pub use data::{AnnotatedDoc, DocumentParser};
pub use api::{start_server};
pub use api::server::ApiConfig;
