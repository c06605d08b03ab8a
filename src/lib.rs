//! Textcheck Analysis Library
//!
//! Plagiarism and AI-content detection for plain text documents.
//! Blends four orthogonal similarity measures into a graded plagiarism
//! verdict and estimates machine-likeness from sentence statistics.
//!
//! # Example
//!
//! ```
//! use textcheck::prelude::*;
//!
//! let params = AnalysisParams::default();
//!
//! // Compare a submitted text against a reference
//! let report = detect_plagiarism(
//!     "The quick brown fox jumps over the lazy dog.",
//!     "The quick brown fox jumps over a sleepy dog.",
//!     &params,
//! );
//! assert!(report.overall_similarity > 50.0);
//! assert!(report.is_plagiarized);
//!
//! // Estimate AI-likelihood of a single text
//! let ai = detect_ai_content(
//!     "Short sentence. A noticeably longer sentence with many more words follows.",
//!     &params,
//! );
//! assert!(ai.ai_probability >= 0.0 && ai.ai_probability <= 100.0);
//!
//! // Or run both at once with a timestamped result
//! let result = analyze("Some submitted writing here.", None, &params);
//! assert!(result.self_reference);
//! ```

pub mod ai;
pub mod batch;
pub mod input;
pub mod models;
pub mod output;
pub mod report;
pub mod similarity;
pub mod tokenize;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::ai::{burstiness, detect_ai_content, perplexity_proxy};
    pub use crate::batch::{best_match, rank_against_corpus};
    pub use crate::input::{load_corpus, load_document, InputError};
    pub use crate::models::{
        AiReport, AnalysisHistory, AnalysisParams, AnalysisResult, Classification, Confidence,
        CorpusMatch, ReferenceDoc, Severity, SimilarityReport,
    };
    pub use crate::output::{
        format_match, print_matches, print_report, write_history_csv, write_history_csv_file,
        write_history_json, write_history_json_file, write_json, write_json_file,
        write_matches_csv, write_matches_csv_file, write_matches_json_file, OutputError,
    };
    pub use crate::report::analyze;
    pub use crate::similarity::{
        cosine_similarity, detect_plagiarism, jaccard_similarity, ngram_similarity,
        sequence_similarity,
    };
    pub use crate::tokenize::{ngrams, sentences, token_counts, tokenize};
}

// Re-export commonly used types at the crate root
pub use models::{AiReport, AnalysisParams, AnalysisResult, SimilarityReport};
pub use report::analyze;
pub use similarity::detect_plagiarism;
