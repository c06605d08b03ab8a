//! Textcheck command-line interface.
//!
//! Analyzes plain text documents for textual overlap with a reference and
//! for statistical signs of machine generation.

use clap::{Parser, Subcommand, ValueEnum};
use std::collections::HashSet;
use std::path::PathBuf;

use textcheck::prelude::*;

#[derive(Parser)]
#[command(name = "textcheck")]
#[command(about = "Plagiarism and AI-content detection for plain text documents")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

/// Output format for analysis results
#[derive(Clone, Copy, Debug, ValueEnum)]
enum OutputFormat {
    /// JSON file
    Json,
    /// CSV file
    Csv,
}

#[derive(Subcommand)]
enum Commands {
    /// Analyze one or more documents
    ///
    /// Each document gets a plagiarism report (against --reference, or
    /// against itself when none is given) and an AI-likelihood report.
    Analyze {
        /// Documents to analyze
        #[arg(required = true)]
        files: Vec<PathBuf>,

        /// Reference document to compare against
        #[arg(long)]
        reference: Option<PathBuf>,

        /// Output file path
        #[arg(long)]
        output: Option<PathBuf>,

        /// Output format: json or csv
        #[arg(long, value_enum, default_value = "json")]
        format: OutputFormat,

        /// N-gram size for phrase-overlap similarity [default: 3]
        #[arg(long)]
        ngram_size: Option<usize>,

        /// Weight for the sentence-length deviation proxy [default: 20]
        #[arg(long)]
        perplexity_weight: Option<f64>,

        /// Weight for the lexical-diversity proxy [default: 30]
        #[arg(long)]
        burstiness_weight: Option<f64>,

        /// Suppress console reports
        #[arg(long)]
        quiet: bool,
    },

    /// Rank a document against every reference in a directory
    Corpus {
        /// Document to analyze
        #[arg(long)]
        input: PathBuf,

        /// Directory of reference documents (.txt/.md)
        #[arg(long)]
        corpus: PathBuf,

        /// Output file path
        #[arg(long)]
        output: Option<PathBuf>,

        /// Output format: json or csv
        #[arg(long, value_enum, default_value = "json")]
        format: OutputFormat,

        /// N-gram size for phrase-overlap similarity [default: 3]
        #[arg(long)]
        ngram_size: Option<usize>,

        /// Print the top N matches to console
        #[arg(long, default_value = "10")]
        show_matches: usize,

        /// Suppress progress output
        #[arg(long)]
        quiet: bool,
    },

    /// Show token and sentence statistics for a document
    Stats {
        /// Document to inspect
        #[arg(long)]
        input: PathBuf,
    },
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Analyze {
            files,
            reference,
            output,
            format,
            ngram_size,
            perplexity_weight,
            burstiness_weight,
            quiet,
        } => {
            let defaults = AnalysisParams::default();
            let params = AnalysisParams {
                ngram_size: ngram_size.unwrap_or(defaults.ngram_size),
                perplexity_weight: perplexity_weight.unwrap_or(defaults.perplexity_weight),
                burstiness_weight: burstiness_weight.unwrap_or(defaults.burstiness_weight),
            };

            let reference_text = match &reference {
                Some(path) => Some(load_document(path)?),
                None => None,
            };

            let mut history = AnalysisHistory::new();
            for file in &files {
                let text = load_document(file)?;
                let result = analyze(&text, reference_text.as_deref(), &params);

                if !quiet {
                    println!("--- {} ---", file.display());
                    print_report(&result);
                    println!();
                }

                history.push(result);
            }

            if let Some(path) = output {
                match format {
                    OutputFormat::Json => match history.latest() {
                        // Single document: write the bare result
                        Some(result) if history.len() == 1 => write_json_file(result, &path)?,
                        _ => write_history_json_file(&history, &path)?,
                    },
                    OutputFormat::Csv => {
                        write_history_csv_file(&history, &path)?;
                    }
                }
                if !quiet {
                    eprintln!("Output: {}", path.display());
                }
            }
        }

        Commands::Corpus {
            input,
            corpus,
            output,
            format,
            ngram_size,
            show_matches,
            quiet,
        } => {
            let defaults = AnalysisParams::default();
            let params = AnalysisParams {
                ngram_size: ngram_size.unwrap_or(defaults.ngram_size),
                ..defaults
            };

            let submitted = load_document(&input)?;
            if !quiet {
                eprintln!("Loading corpus from {}...", corpus.display());
            }
            let references = load_corpus(&corpus)?;
            if !quiet {
                eprintln!("  {} reference documents", references.len());
            }

            let matches = rank_against_corpus(&submitted, &references, &params, !quiet);

            println!("=== Corpus Ranking: {} ===", input.display());
            print_matches(&matches, Some(show_matches));

            match best_match(&matches) {
                Some(m) => println!(
                    "\nBest match: {} ({:.2}%, severity {})",
                    m.name, m.report.overall_similarity, m.report.severity
                ),
                None => println!("\nNo reference crossed the plagiarism threshold."),
            }

            if let Some(path) = output {
                match format {
                    OutputFormat::Json => write_matches_json_file(&matches, &path)?,
                    OutputFormat::Csv => write_matches_csv_file(&matches, &path)?,
                }
                if !quiet {
                    eprintln!("Output: {}", path.display());
                }
            }
        }

        Commands::Stats { input } => {
            let text = load_document(&input)?;
            let tokens = tokenize(&text);
            let unique: HashSet<&str> = tokens.iter().map(String::as_str).collect();
            let sentence_list = sentences(&text);
            let avg_len = if sentence_list.is_empty() {
                0.0
            } else {
                tokens.len() as f64 / sentence_list.len() as f64
            };

            println!("=== {} ===", input.display());
            println!("Tokens: {}", tokens.len());
            println!("Unique tokens: {}", unique.len());
            println!("Sentences: {}", sentence_list.len());
            println!("Avg tokens/sentence: {:.1}", avg_len);
            println!("Perplexity proxy: {:.2}", perplexity_proxy(&text));
            println!("Burstiness proxy: {:.2}", burstiness(&text));
        }
    }

    Ok(())
}
