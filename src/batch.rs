//! Ranking a submitted document against a reference corpus.
//!
//! Every (reference, submitted) pair is independent, so the comparisons fan
//! out across the rayon thread pool with no shared state.

use crate::models::{AnalysisParams, CorpusMatch, ReferenceDoc};
use crate::similarity::detect_plagiarism;
use indicatif::{ProgressBar, ProgressStyle};
use rayon::prelude::*;

/// Compare a submitted text against every reference document.
///
/// Returns one match per reference, sorted by overall similarity descending
/// (ties broken by name for a stable order).
pub fn rank_against_corpus(
    submitted: &str,
    references: &[ReferenceDoc],
    params: &AnalysisParams,
    show_progress: bool,
) -> Vec<CorpusMatch> {
    let progress = if show_progress {
        let pb = ProgressBar::new(references.len() as u64);
        pb.set_style(
            ProgressStyle::default_bar()
                .template(
                    "{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} ({per_sec})",
                )
                .unwrap()
                .progress_chars("#>-"),
        );
        Some(pb)
    } else {
        None
    };

    let mut matches: Vec<CorpusMatch> = references
        .par_iter()
        .map(|reference| {
            let report = detect_plagiarism(&reference.text, submitted, params);
            if let Some(ref pb) = progress {
                pb.inc(1);
            }
            CorpusMatch {
                name: reference.name.clone(),
                report,
            }
        })
        .collect();

    if let Some(pb) = progress {
        pb.finish_and_clear();
    }

    matches.sort_by(|a, b| {
        b.report
            .overall_similarity
            .partial_cmp(&a.report.overall_similarity)
            .unwrap_or(std::cmp::Ordering::Equal)
            .then_with(|| a.name.cmp(&b.name))
    });

    matches
}

/// The best match above the plagiarism threshold, if any.
///
/// Assumes `matches` is sorted as produced by [`rank_against_corpus`].
pub fn best_match(matches: &[CorpusMatch]) -> Option<&CorpusMatch> {
    matches.first().filter(|m| m.report.is_plagiarized)
}
