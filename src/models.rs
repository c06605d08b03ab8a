//! Data structures for the textcheck analysis pipeline.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Severity grade for a plagiarism verdict.
///
/// Derived from the overall similarity percentage with strict thresholds:
/// >75 critical, >60 high, >40 moderate, else low.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Low,
    Moderate,
    High,
    Critical,
}

impl Severity {
    /// Grade an overall similarity percentage (0-100).
    pub fn from_score(overall: f64) -> Self {
        if overall > 75.0 {
            Severity::Critical
        } else if overall > 60.0 {
            Severity::High
        } else if overall > 40.0 {
            Severity::Moderate
        } else {
            Severity::Low
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Severity::Low => "low",
            Severity::Moderate => "moderate",
            Severity::High => "high",
            Severity::Critical => "critical",
        };
        write!(f, "{}", s)
    }
}

/// Confidence grade for an AI-likelihood verdict.
///
/// >70 High, >40 Medium, else Low (strict thresholds over ai_probability).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Confidence {
    Low,
    Medium,
    High,
}

impl Confidence {
    pub fn from_probability(ai_probability: f64) -> Self {
        if ai_probability > 70.0 {
            Confidence::High
        } else if ai_probability > 40.0 {
            Confidence::Medium
        } else {
            Confidence::Low
        }
    }
}

impl fmt::Display for Confidence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Confidence::Low => "Low",
            Confidence::Medium => "Medium",
            Confidence::High => "High",
        };
        write!(f, "{}", s)
    }
}

/// Binary classification of a document's likely origin.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Classification {
    #[serde(rename = "Human-Written")]
    HumanWritten,
    #[serde(rename = "AI-Generated")]
    AiGenerated,
}

impl Classification {
    pub fn from_probability(ai_probability: f64) -> Self {
        if ai_probability > 60.0 {
            Classification::AiGenerated
        } else {
            Classification::HumanWritten
        }
    }
}

impl fmt::Display for Classification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Classification::HumanWritten => "Human-Written",
            Classification::AiGenerated => "AI-Generated",
        };
        write!(f, "{}", s)
    }
}

/// Analysis parameters.
///
/// The four similarity blend weights are fixed constants in the similarity
/// module and deliberately not configurable; only the n-gram size and the
/// AI-probability weight pair can be tuned here.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalysisParams {
    /// N-gram size for phrase-overlap similarity (default: 3)
    pub ngram_size: usize,
    /// Weight applied to the sentence-length deviation proxy (default: 20.0)
    pub perplexity_weight: f64,
    /// Weight applied to the lexical-diversity proxy (default: 30.0)
    pub burstiness_weight: f64,
}

impl Default for AnalysisParams {
    fn default() -> Self {
        Self {
            ngram_size: 3,
            perplexity_weight: 20.0,
            burstiness_weight: 30.0,
        }
    }
}

/// Result of comparing a submitted text against a reference text.
///
/// All component scores are percentages in [0, 100] rounded to two decimals.
/// `overall_similarity` is the fixed 0.3/0.2/0.3/0.2 blend of the four
/// components; the verdict fields are derived from the unrounded blend.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SimilarityReport {
    pub overall_similarity: f64,
    pub cosine_similarity: f64,
    pub jaccard_similarity: f64,
    pub sequence_similarity: f64,
    pub ngram_similarity: f64,
    pub is_plagiarized: bool,
    pub severity: Severity,
}

/// Result of the AI-likelihood estimate for a single text.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AiReport {
    /// Probability-like score in [0, 100], one decimal
    pub ai_probability: f64,
    /// Population standard deviation of per-sentence token counts
    pub perplexity_score: f64,
    /// Mean per-sentence unique/total token ratio, in [0, 1]
    pub burstiness_score: f64,
    pub confidence_level: Confidence,
    pub classification: Classification,
}

/// Combined analysis of one submitted document.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalysisResult {
    pub version: String,
    pub plagiarism_analysis: SimilarityReport,
    pub ai_analysis: AiReport,
    /// True when no reference was supplied and the submitted text was
    /// compared against itself. The plagiarism verdict is then a baseline
    /// self-similarity, not a meaningful signal, and callers should
    /// suppress or reinterpret it.
    pub self_reference: bool,
    /// ISO-8601 timestamp from the caller-process clock
    pub timestamp: String,
}

/// A named reference document for corpus ranking.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReferenceDoc {
    pub name: String,
    pub text: String,
}

/// One reference document's similarity against the submitted text.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CorpusMatch {
    pub name: String,
    pub report: SimilarityReport,
}

/// An explicit, caller-owned list of past analysis results.
///
/// Replaces implicit session state: the history is a plain value the caller
/// creates, appends to, and serializes as it sees fit.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AnalysisHistory {
    results: Vec<AnalysisResult>,
}

impl AnalysisHistory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a result, keeping insertion order.
    pub fn push(&mut self, result: AnalysisResult) {
        self.results.push(result);
    }

    /// The most recently appended result, if any.
    pub fn latest(&self) -> Option<&AnalysisResult> {
        self.results.last()
    }

    pub fn len(&self) -> usize {
        self.results.len()
    }

    pub fn is_empty(&self) -> bool {
        self.results.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, AnalysisResult> {
        self.results.iter()
    }

    pub fn results(&self) -> &[AnalysisResult] {
        &self.results
    }
}
