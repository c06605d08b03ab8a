//! Assembles the two independent analyses into a single timestamped result.

use crate::ai::detect_ai_content;
use crate::models::{AnalysisParams, AnalysisResult};
use crate::similarity::detect_plagiarism;
use chrono::Local;

/// Run both analyses on a submitted text and package the results.
///
/// When `reference` is absent or empty the submitted text is compared
/// against itself; the result then carries `self_reference = true` so the
/// baseline self-similarity score is not mistaken for a plagiarism signal.
///
/// Infallible: every input degrades to well-defined zero scores. Decoding
/// and I/O failures belong to the boundary, not here.
pub fn analyze(submitted: &str, reference: Option<&str>, params: &AnalysisParams) -> AnalysisResult {
    let (reference_text, self_reference) = match reference {
        Some(r) if !r.is_empty() => (r, false),
        _ => (submitted, true),
    };

    AnalysisResult {
        version: env!("CARGO_PKG_VERSION").to_string(),
        plagiarism_analysis: detect_plagiarism(reference_text, submitted, params),
        ai_analysis: detect_ai_content(submitted, params),
        self_reference,
        timestamp: Local::now().to_rfc3339(),
    }
}
