use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use ranker::{rank, sweep, Bm25Params, RankConfig, Ranking, ScoredResult, Scorer, SweepPoint};
use tracing_subscriber::{fmt, EnvFilter};
use walkdir::WalkDir;

use std::fs;
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(name = "compare")]
#[command(about = "Rank a document collection against a query with TF-IDF and BM25", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Rank the collection with the selected scorer(s)
    Rank {
        /// Input path: a file with one document per line, or a directory of .txt files
        #[arg(long)]
        input: String,
        /// Query string
        #[arg(long)]
        query: String,
        /// Scorer to run
        #[arg(long, value_enum, default_value_t = ScorerArg::Both)]
        scorer: ScorerArg,
        /// BM25 term-frequency saturation
        #[arg(long, default_value_t = ranker::bm25::DEFAULT_K1)]
        k1: f32,
        /// BM25 length-normalization strength
        #[arg(long, default_value_t = ranker::bm25::DEFAULT_B)]
        b: f32,
        /// Emit JSON instead of a ranked listing
        #[arg(long, default_value_t = false)]
        json: bool,
    },
    /// Run BM25 over a grid of k1 and b values
    Sweep {
        /// Input path: a file with one document per line, or a directory of .txt files
        #[arg(long)]
        input: String,
        /// Query string
        #[arg(long)]
        query: String,
        /// Comma-separated k1 values
        #[arg(long, value_delimiter = ',', default_value = "1.2,1.5,2.0")]
        k1: Vec<f32>,
        /// Comma-separated b values
        #[arg(long, value_delimiter = ',', default_value = "0.0,0.5,0.75,1.0")]
        b: Vec<f32>,
        /// Emit JSON instead of ranked listings
        #[arg(long, default_value_t = false)]
        json: bool,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum ScorerArg {
    Tfidf,
    Bm25,
    Both,
}

impl From<ScorerArg> for Scorer {
    fn from(arg: ScorerArg) -> Self {
        match arg {
            ScorerArg::Tfidf => Scorer::TfIdf,
            ScorerArg::Bm25 => Scorer::Bm25,
            ScorerArg::Both => Scorer::Both,
        }
    }
}

fn main() -> Result<()> {
    fmt().with_env_filter(EnvFilter::from_default_env()).init();
    let cli = Cli::parse();

    match cli.command {
        Commands::Rank { input, query, scorer, k1, b, json } => {
            let documents = load_documents(Path::new(&input))?;
            let config = RankConfig { scorer: scorer.into(), bm25: Bm25Params::new(k1, b)? };
            let ranking = rank(&documents, &query, &config)?;
            if json {
                let payload = serde_json::json!({ "query": query, "ranking": ranking });
                println!("{}", serde_json::to_string_pretty(&payload)?);
            } else {
                print_ranking(&query, &documents, &ranking);
            }
        }
        Commands::Sweep { input, query, k1, b, json } => {
            let documents = load_documents(Path::new(&input))?;
            let points = sweep(&documents, &query, &k1, &b)?;
            if json {
                let payload = serde_json::json!({ "query": query, "sweep": points });
                println!("{}", serde_json::to_string_pretty(&payload)?);
            } else {
                print_sweep(&query, &documents, &points);
            }
        }
    }
    Ok(())
}

/// Load the collection: a directory yields one document per .txt file
/// (sorted by path so document ids stay stable), a file yields one document
/// per non-empty line.
fn load_documents(input: &Path) -> Result<Vec<String>> {
    let mut documents = Vec::new();
    if input.is_dir() {
        let mut files: Vec<PathBuf> = WalkDir::new(input)
            .into_iter()
            .filter_map(|e| e.ok())
            .filter(|e| e.path().is_file())
            .filter(|e| e.path().extension().and_then(|s| s.to_str()) == Some("txt"))
            .map(|e| e.path().to_path_buf())
            .collect();
        files.sort();
        for file in files {
            let text =
                fs::read_to_string(&file).with_context(|| format!("reading {}", file.display()))?;
            documents.push(text);
        }
    } else {
        let text =
            fs::read_to_string(input).with_context(|| format!("reading {}", input.display()))?;
        documents.extend(text.lines().filter(|line| !line.trim().is_empty()).map(str::to_string));
    }
    if documents.is_empty() {
        bail!("no documents found in {}", input.display());
    }
    tracing::info!(num_docs = documents.len(), "loaded document collection");
    Ok(documents)
}

fn print_ranking(query: &str, documents: &[String], ranking: &Ranking) {
    println!("query: {query:?}");
    if let Some(results) = &ranking.tfidf {
        print_results("TF-IDF (cosine)", documents, results);
    }
    if let Some(results) = &ranking.bm25 {
        print_results("BM25", documents, results);
    }
}

fn print_sweep(query: &str, documents: &[String], points: &[SweepPoint]) {
    println!("query: {query:?}");
    for point in points {
        print_results(&format!("BM25 (k1={}, b={})", point.k1, point.b), documents, &point.results);
    }
}

fn print_results(label: &str, documents: &[String], results: &[ScoredResult]) {
    println!("\n{label}:");
    for (position, result) in results.iter().enumerate() {
        println!(
            "{}. [{:.4}] doc {}: {}",
            position + 1,
            result.score,
            result.doc_id,
            preview(&documents[result.doc_id as usize]),
        );
    }
}

/// First 60 characters of a document, flattened onto one line.
fn preview(text: &str) -> String {
    let flat = text.split_whitespace().collect::<Vec<_>>().join(" ");
    if flat.chars().count() > 60 {
        let truncated: String = flat.chars().take(60).collect();
        format!("{truncated}...")
    } else {
        flat
    }
}
