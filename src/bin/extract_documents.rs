use svo_extract::{DocumentParser, ExtractionEngine, ExtractorConfig, Filters, PatternKind, Sentence};
use std::path::{Path, PathBuf};
use std::fs;
use std::io::{self, BufWriter, Write};
use anyhow::{Result, anyhow};
use clap::{Parser, ValueEnum};
use serde_json::json;
use log::{info, warn, error};
use indicatif::{ProgressBar, ProgressStyle};

#[derive(Parser, Debug)]
#[command(name = "extract_documents")]
#[command(about = "Extract subject/verb/object relations from annotated documents")]
#[command(version)]
struct Args {
    /// Annotated JSON / JSONL file (optionally gzipped) or a directory of them
    #[arg(short, long)]
    input: PathBuf,

    /// Relations to extract
    #[arg(long, default_value = "svo")]
    pattern: PatternArg,

    /// Output file for JSON Lines (default: stdout)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Keep only these subject phrases (comma separated)
    #[arg(long, value_delimiter = ',')]
    subjects: Option<Vec<String>>,

    /// Keep only verbs with these lemmas (comma separated)
    #[arg(long, value_delimiter = ',')]
    verbs: Option<Vec<String>>,

    /// Extractor configuration file (default: configs/extractor.yaml when present)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Verbose output
    #[arg(short, long)]
    verbose: bool,

    /// File pattern to match inside a directory (default: *.json)
    #[arg(short = 'f', long, default_value = "*.json")]
    file_pattern: String,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum PatternArg {
    Sv,
    Svo,
    Svao,
}

impl From<PatternArg> for PatternKind {
    fn from(arg: PatternArg) -> Self {
        match arg {
            PatternArg::Sv => PatternKind::Sv,
            PatternArg::Svo => PatternKind::Svo,
            PatternArg::Svao => PatternKind::Svao,
        }
    }
}

/// Runs one pattern over annotated files, writing one JSON line per document
pub struct DocumentExtractor {
    engine: ExtractionEngine,
    parser: DocumentParser,
    pattern: PatternKind,
    filters: Filters,
    stats: ExtractionStats,
    progress_bar: Option<ProgressBar>,
    verbose: bool,
}

#[derive(Debug)]
struct ExtractionStats {
    total_files: usize,
    processed_files: usize,
    failed_files: usize,
    total_documents: usize,
    skipped_documents: usize,
    total_tokens: usize,
    total_dependency_edges: usize,
    total_relations: usize,
    start_time: std::time::Instant,
}

impl Default for ExtractionStats {
    fn default() -> Self {
        Self {
            total_files: 0,
            processed_files: 0,
            failed_files: 0,
            total_documents: 0,
            skipped_documents: 0,
            total_tokens: 0,
            total_dependency_edges: 0,
            total_relations: 0,
            start_time: std::time::Instant::now(),
        }
    }
}

impl DocumentExtractor {
    pub fn new(config: ExtractorConfig, pattern: PatternKind, filters: Filters, verbose: bool) -> Self {
        Self {
            engine: ExtractionEngine::new(config),
            parser: DocumentParser::new(),
            pattern,
            filters,
            stats: ExtractionStats::default(),
            progress_bar: None,
            verbose,
        }
    }

    fn init_progress_bar(&mut self, total_files: usize) {
        if !self.verbose && total_files > 1 {
            let pb = ProgressBar::new(total_files as u64);
            if let Ok(style) = ProgressStyle::default_bar()
                .template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} ({eta}) {msg}")
            {
                pb.set_style(style.progress_chars("#>-"));
            }
            pb.set_message("Extracting...");
            self.progress_bar = Some(pb);
        }
    }

    fn update_progress(&mut self, current_file: &str) {
        if let Some(pb) = &mut self.progress_bar {
            pb.set_message(format!("Processing: {}", current_file));
            pb.inc(1);
        } else if self.verbose {
            info!("Processed: {}", current_file);
        }
    }

    fn finish_progress(&mut self) {
        if let Some(pb) = &mut self.progress_bar {
            pb.finish_with_message("Extraction completed!");
        }
    }

    /// Process a single file or every matching file in a directory
    pub fn run<W: Write>(&mut self, input: &Path, file_pattern: &str, out: &mut W) -> Result<()> {
        if !input.exists() {
            return Err(anyhow!("Input path does not exist: {}", input.display()));
        }

        let files = if input.is_dir() {
            find_input_files(input, file_pattern)?
        } else {
            vec![input.to_path_buf()]
        };
        info!("Found {} input files", files.len());

        self.init_progress_bar(files.len());
        for file_path in &files {
            self.process_file(file_path, out)?;
            let name = file_path.file_name().and_then(|n| n.to_str()).unwrap_or("unknown");
            self.update_progress(name);
        }
        self.finish_progress();

        out.flush()?;
        Ok(())
    }

    /// Parse failures are counted and logged; write failures abort the run
    fn process_file<W: Write>(&mut self, file_path: &Path, out: &mut W) -> Result<()> {
        self.stats.total_files += 1;

        let documents = match self.parser.parse_file(file_path) {
            Ok(documents) => documents,
            Err(e) => {
                self.stats.failed_files += 1;
                error!("Failed to process {}: {}", file_path.display(), e);
                return Ok(());
            }
        };
        self.stats.processed_files += 1;

        // Invalid documents are skipped individually so one bad parse does not
        // drop the rest of the file
        let mut sentences = Vec::with_capacity(documents.len());
        let mut positions = Vec::with_capacity(documents.len());
        for (i, doc) in documents.iter().enumerate() {
            self.stats.total_tokens += doc.len();
            self.stats.total_dependency_edges += doc.edge_count();
            match Sentence::try_from(doc) {
                Ok(sentence) => {
                    sentences.push(sentence);
                    positions.push(i);
                }
                Err(e) => {
                    self.stats.skipped_documents += 1;
                    warn!("Skipping document {} of {}: {}", i, file_path.display(), e);
                }
            }
        }
        self.stats.total_documents += documents.len();

        let results = self.engine.extract(self.pattern, &sentences, &self.filters);
        for (result, document) in results.into_iter().zip(positions) {
            self.stats.total_relations += result.relations.len();
            let line = json!({
                "file": file_path.display().to_string(),
                "document": document,
                "pattern": self.pattern,
                "relations": result.relations,
            });
            writeln!(out, "{}", line)?;
        }

        Ok(())
    }

    fn print_stats(&self) {
        let elapsed = self.stats.start_time.elapsed();

        eprintln!("\n=== Extraction Statistics ===");
        eprintln!("Total files found: {}", self.stats.total_files);
        eprintln!("Successfully processed: {}", self.stats.processed_files);
        eprintln!("Failed to process: {}", self.stats.failed_files);
        eprintln!("Total documents: {}", self.stats.total_documents);
        eprintln!("Skipped documents: {}", self.stats.skipped_documents);
        eprintln!("Total tokens: {}", self.stats.total_tokens);
        eprintln!("Total dependency edges: {}", self.stats.total_dependency_edges);
        eprintln!("Total relations: {}", self.stats.total_relations);
        eprintln!("Total time: {:.2?}", elapsed);
    }
}

/// Files in `dir` matching `pattern`; the default `*.json` also picks up
/// `.json.gz`, `.jsonl` and `.jsonl.gz`
fn find_input_files(dir: &Path, pattern: &str) -> Result<Vec<PathBuf>> {
    let mut files = Vec::new();

    for entry in fs::read_dir(dir)? {
        let path = entry?.path();
        if !path.is_file() {
            continue;
        }
        let Some(file_name) = path.file_name().map(|n| n.to_string_lossy().into_owned()) else {
            continue;
        };

        let matched = if pattern == "*.json" {
            [".json", ".json.gz", ".jsonl", ".jsonl.gz"]
                .iter()
                .any(|ext| file_name.ends_with(ext))
        } else {
            matches_pattern(&file_name, pattern)
        };
        if matched {
            files.push(path);
        }
    }

    files.sort();
    Ok(files)
}

/// Simple pattern matching (supports a single * wildcard)
fn matches_pattern(filename: &str, pattern: &str) -> bool {
    if pattern == "*" {
        return true;
    }

    if let Some((prefix, suffix)) = pattern.split_once('*') {
        if !suffix.contains('*') {
            return filename.len() >= prefix.len() + suffix.len()
                && filename.starts_with(prefix)
                && filename.ends_with(suffix);
        }
    }

    filename == pattern
}

fn load_config(path: Option<&Path>) -> Result<ExtractorConfig> {
    match path {
        Some(path) => ExtractorConfig::from_yaml_file(path),
        None => {
            let default_config = Path::new("configs/extractor.yaml");
            if default_config.exists() {
                ExtractorConfig::from_yaml_file(default_config)
            } else {
                Ok(ExtractorConfig::default())
            }
        }
    }
}

fn main() -> Result<()> {
    let args = Args::parse();

    if args.verbose {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    } else {
        env_logger::init();
    }

    let config = load_config(args.config.as_deref())?;
    let mut filters = Filters::new();
    if let Some(subjects) = args.subjects {
        filters = filters.with_subjects(subjects.into_iter().map(|s| s.to_lowercase()));
    }
    if let Some(verbs) = args.verbs {
        filters = filters.with_verbs(verbs);
    }

    let mut extractor = DocumentExtractor::new(config, args.pattern.into(), filters, args.verbose);

    match &args.output {
        Some(path) => {
            let mut out = BufWriter::new(fs::File::create(path)?);
            extractor.run(&args.input, &args.file_pattern, &mut out)?;
            info!("Wrote relations to {}", path.display());
        }
        None => {
            let stdout = io::stdout();
            let mut out = BufWriter::new(stdout.lock());
            extractor.run(&args.input, &args.file_pattern, &mut out)?;
        }
    }

    extractor.print_stats();
    Ok(())
}
