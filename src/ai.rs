//! Statistical AI-likelihood estimation.
//!
//! Two cheap proxies stand in for real language-model scoring: the spread of
//! sentence lengths ("perplexity proxy") and the average per-sentence
//! lexical diversity ("burstiness proxy"). Texts with fewer than two
//! sentences score 0 on both proxies, so the degenerate output is always
//! ai_probability 0.0, Low confidence, Human-Written.

use crate::models::{AiReport, AnalysisParams, Classification, Confidence};
use crate::tokenize::{sentences, tokenize};
use std::collections::HashSet;

/// Population standard deviation of per-sentence token counts.
///
/// Returns 0.0 for a text with no sentences; a single sentence deviates
/// from its own mean by nothing and also yields 0.0.
pub fn perplexity_proxy(text: &str) -> f64 {
    let sentence_list = sentences(text);
    if sentence_list.is_empty() {
        return 0.0;
    }

    let counts: Vec<f64> = sentence_list
        .iter()
        .map(|s| tokenize(s).len() as f64)
        .collect();

    let mean = counts.iter().sum::<f64>() / counts.len() as f64;
    let variance = counts.iter().map(|c| (c - mean).powi(2)).sum::<f64>() / counts.len() as f64;

    variance.sqrt()
}

/// Mean per-sentence lexical diversity (unique tokens / total tokens).
///
/// Sentences without tokens are skipped. Returns 0.0 for texts with fewer
/// than two sentences. Always in [0, 1]: it averages ratios each in [0, 1].
pub fn burstiness(text: &str) -> f64 {
    let sentence_list = sentences(text);
    if sentence_list.len() < 2 {
        return 0.0;
    }

    let mut ratios = Vec::with_capacity(sentence_list.len());
    for sentence in &sentence_list {
        let tokens = tokenize(sentence);
        if tokens.is_empty() {
            continue;
        }
        let unique: HashSet<&str> = tokens.iter().map(String::as_str).collect();
        ratios.push(unique.len() as f64 / tokens.len() as f64);
    }

    if ratios.is_empty() {
        return 0.0;
    }

    ratios.iter().sum::<f64>() / ratios.len() as f64
}

/// Round to one decimal place.
fn round1(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

/// Round to two decimal places.
fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Estimate whether a text is machine-generated.
///
/// `ai_probability = clamp(perplexity * W1 + burstiness * W2, 0, 100)` with
/// the canonical weight pair W1 = 20, W2 = 30 from `AnalysisParams`. The
/// confidence and classification ladders are applied to the unrounded
/// probability.
pub fn detect_ai_content(text: &str, params: &AnalysisParams) -> AiReport {
    let perplexity = perplexity_proxy(text);
    let bursty = burstiness(text);

    let ai_probability = (perplexity * params.perplexity_weight
        + bursty * params.burstiness_weight)
        .clamp(0.0, 100.0);

    AiReport {
        ai_probability: round1(ai_probability),
        perplexity_score: round2(perplexity),
        burstiness_score: round2(bursty),
        confidence_level: Confidence::from_probability(ai_probability),
        classification: Classification::from_probability(ai_probability),
    }
}
