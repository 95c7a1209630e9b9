use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;
use anyhow::{Result, anyhow};
use flate2::read::GzDecoder;

use crate::data::document::{AnnotatedBatch, AnnotatedDoc};

/// Parser for annotator output stored as JSON, JSON Lines or gzipped JSON
#[derive(Debug, Clone, Default)]
pub struct DocumentParser;

impl DocumentParser {
    pub fn new() -> Self {
        Self
    }

    /// Parse a JSON file (regular or gzipped)
    pub fn parse_file<P: AsRef<Path>>(&self, file_path: P) -> Result<Vec<AnnotatedDoc>> {
        let path = file_path.as_ref();
        let file = File::open(path)
            .map_err(|e| anyhow!("Failed to open {}: {}", path.display(), e))?;

        // Check if file is gzipped by looking at magic bytes
        let mut reader = BufReader::new(file);
        let mut magic = [0u8; 2];
        let is_gzip = match reader.read_exact(&mut magic) {
            Ok(()) => magic == [0x1f, 0x8b],
            Err(_) => false,
        };

        let file = File::open(path)?;
        let documents = if is_gzip {
            self.parse_reader(BufReader::new(GzDecoder::new(file)))?
        } else {
            self.parse_reader(BufReader::new(file))?
        };

        log::debug!("Parsed {} documents from {}", documents.len(), path.display());
        Ok(documents)
    }

    /// Parse from a reader (batch response, single document, array or JSONL)
    pub fn parse_reader<R: Read>(&self, mut reader: BufReader<R>) -> Result<Vec<AnnotatedDoc>> {
        let mut content = String::new();
        reader.read_to_string(&mut content)?;

        if let Ok(docs) = self.parse_json(&content) {
            return Ok(docs);
        }

        // Try line-by-line JSON (JSONL format)
        let mut documents = Vec::new();
        for (line_no, line) in content.lines().enumerate() {
            if !line.trim().is_empty() {
                let doc: AnnotatedDoc = serde_json::from_str(line)
                    .map_err(|e| anyhow!("Invalid document on line {}: {}", line_no + 1, e))?;
                documents.push(doc);
            }
        }

        Ok(documents)
    }

    /// Parse a JSON string
    pub fn parse_json(&self, json_str: &str) -> Result<Vec<AnnotatedDoc>> {
        // The annotator's own response shape
        if let Ok(batch) = serde_json::from_str::<AnnotatedBatch>(json_str) {
            return Ok(batch.result);
        }

        if let Ok(doc) = serde_json::from_str::<AnnotatedDoc>(json_str) {
            return Ok(vec![doc]);
        }

        if let Ok(docs) = serde_json::from_str::<Vec<AnnotatedDoc>>(json_str) {
            return Ok(docs);
        }

        Err(anyhow!("Failed to parse JSON as batch, single document or array of documents"))
    }

    /// Parse a gzipped JSON string
    pub fn parse_gzipped_json(&self, gzipped_data: &[u8]) -> Result<Vec<AnnotatedDoc>> {
        let mut decoder = GzDecoder::new(gzipped_data);
        let mut json_str = String::new();
        decoder.read_to_string(&mut json_str)?;
        self.parse_json(&json_str)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use flate2::write::GzEncoder;
    use flate2::Compression;
    use std::io::Write;
    use tempfile::TempDir;

    const DOC: &str = r#"{"words":["John","ate"],"lemmas":["John","eat"],"pos":[11,15],"dep":["nsubj","ROOT"],"lefts":{"1":[0]}}"#;

    fn gzip(data: &str) -> Vec<u8> {
        let mut encoder = GzEncoder::new(Vec::new(), Compression::default());
        encoder.write_all(data.as_bytes()).unwrap();
        encoder.finish().unwrap()
    }

    #[test]
    fn test_parse_json_shapes() {
        let parser = DocumentParser::new();

        let single = parser.parse_json(DOC).unwrap();
        assert_eq!(single.len(), 1);

        let array = parser.parse_json(&format!("[{},{}]", DOC, DOC)).unwrap();
        assert_eq!(array.len(), 2);

        let batch = parser.parse_json(&format!(r#"{{"result":[{}]}}"#, DOC)).unwrap();
        assert_eq!(batch.len(), 1);
        assert_eq!(batch[0].words, vec!["John", "ate"]);

        assert!(parser.parse_json("{\"words\": 3}").is_err());
    }

    #[test]
    fn test_parse_jsonl_reader() {
        let parser = DocumentParser::new();
        let content = format!("{}\n\n{}\n", DOC, DOC);
        let docs = parser.parse_reader(BufReader::new(content.as_bytes())).unwrap();
        assert_eq!(docs.len(), 2);
    }

    #[test]
    fn test_plain_and_gzip_files_agree() {
        let dir = TempDir::new().unwrap();
        let plain = dir.path().join("docs.json");
        let zipped = dir.path().join("docs.json.gz");
        std::fs::write(&plain, DOC).unwrap();
        std::fs::write(&zipped, gzip(DOC)).unwrap();

        let parser = DocumentParser::new();
        let a = parser.parse_file(&plain).unwrap();
        let b = parser.parse_file(&zipped).unwrap();
        assert_eq!(a, b);
        assert_eq!(parser.parse_gzipped_json(&gzip(DOC)).unwrap(), a);
    }
}
