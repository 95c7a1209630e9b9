use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Response body of the annotator's `/process` endpoint
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnnotatedBatch {
    pub result: Vec<AnnotatedDoc>,
}

/// Request body of the annotator's `/process` endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ArticlesRequest {
    pub articles: Vec<String>,
}

/// A named entity span, by token index
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Entity {
    pub tokens: Vec<usize>,
    pub label: String,
}

/// One parsed text as produced by the external annotator.
///
/// Token attributes are parallel arrays. Dependents are keyed by the head's
/// token index; tokens without dependents on a side are absent from the map.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnnotatedDoc {
    #[serde(default)]
    pub ents: Vec<Entity>,
    pub words: Vec<String>,
    pub lemmas: Vec<String>,
    #[serde(default)]
    pub offsets: Vec<usize>,
    /// Indices into [`crate::types::POS_MAPPING`]
    pub pos: Vec<usize>,
    pub dep: Vec<String>,
    #[serde(default)]
    pub lefts: BTreeMap<usize, Vec<usize>>,
    #[serde(default)]
    pub rights: BTreeMap<usize, Vec<usize>>,
}

impl AnnotatedDoc {
    /// Number of tokens
    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Total number of dependency attachments
    pub fn edge_count(&self) -> usize {
        self.lefts.values().chain(self.rights.values()).map(Vec::len).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = r#"{
        "ents": [{"tokens": [0], "label": "PERSON"}],
        "words": ["John", "ate", "the", "worst", "hamburger"],
        "lemmas": ["John", "eat", "the", "bad", "hamburger"],
        "offsets": [0, 5, 9, 13, 19],
        "pos": [11, 15, 5, 0, 7],
        "dep": ["nsubj", "ROOT", "det", "amod", "dobj"],
        "lefts": {"1": [0], "4": [2, 3]},
        "rights": {"1": [4]}
    }"#;

    #[test]
    fn test_deserialize_string_keyed_maps() {
        let doc: AnnotatedDoc = serde_json::from_str(SAMPLE).unwrap();
        assert_eq!(doc.len(), 5);
        assert_eq!(doc.lefts[&4], vec![2, 3]);
        assert_eq!(doc.rights[&1], vec![4]);
        assert!(!doc.rights.contains_key(&0));
        assert_eq!(doc.edge_count(), 4);
        assert_eq!(doc.ents[0].label, "PERSON");
    }

    #[test]
    fn test_optional_fields_default() {
        let doc: AnnotatedDoc = serde_json::from_str(
            r#"{"words": ["Go"], "lemmas": ["go"], "pos": [15], "dep": ["ROOT"]}"#,
        )
        .unwrap();
        assert!(doc.ents.is_empty());
        assert!(doc.offsets.is_empty());
        assert!(doc.lefts.is_empty());
        assert_eq!(doc.edge_count(), 0);
    }
}
