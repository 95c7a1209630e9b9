use svo_extract::types::PartOfSpeech::*;
use svo_extract::{Extractor, Filters, PatternKind, SentenceBuilder};
use anyhow::Result;

fn main() -> Result<()> {
    env_logger::init();

    println!("=== SVO extraction over a dependency parse ===");

    // "John ate the worst hamburger"
    let sentence = SentenceBuilder::new()
        .token("John", "John", Propn, "nsubj", 1)
        .token("ate", "eat", Verb, "ROOT", 1)
        .token("the", "the", Det, "det", 4)
        .token("worst", "bad", Adj, "amod", 4)
        .token("hamburger", "hamburger", Noun, "dobj", 1)
        .build()?;

    println!("Sentence: {}", sentence.text());
    for token in sentence.tokens() {
        println!("  {:>2} {:<10} {:<6} {:<6} -> {}", token.index(), token.text(), token.pos().as_str(), token.dep(), token.head().index());
    }

    let extractor = Extractor::default();
    let filters = Filters::new();
    for pattern in [PatternKind::Sv, PatternKind::Svo, PatternKind::Svao] {
        let relations = extractor.extract(pattern, &sentence, &filters);
        println!("\n--- {} ---", pattern);
        println!("{}", serde_json::to_string(&relations)?);
    }

    Ok(())
}
