//! Output formatting for analysis results (JSON, CSV, console).

use crate::models::{AnalysisHistory, AnalysisResult, CorpusMatch};
use std::io::{self, Write};
use std::path::Path;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum OutputError {
    #[error("IO error: {0}")]
    Io(#[from] io::Error),
    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Write a single analysis result as pretty JSON.
pub fn write_json<W: Write>(result: &AnalysisResult, writer: &mut W) -> Result<(), OutputError> {
    let json = serde_json::to_string_pretty(result)?;
    writer.write_all(json.as_bytes())?;
    Ok(())
}

/// Write a single analysis result as JSON to a file.
pub fn write_json_file(result: &AnalysisResult, path: &Path) -> Result<(), OutputError> {
    let mut file = std::fs::File::create(path)?;
    write_json(result, &mut file)
}

/// Write an analysis history as pretty JSON.
pub fn write_history_json<W: Write>(
    history: &AnalysisHistory,
    writer: &mut W,
) -> Result<(), OutputError> {
    let json = serde_json::to_string_pretty(history)?;
    writer.write_all(json.as_bytes())?;
    Ok(())
}

/// Write an analysis history as JSON to a file.
pub fn write_history_json_file(history: &AnalysisHistory, path: &Path) -> Result<(), OutputError> {
    let mut file = std::fs::File::create(path)?;
    write_history_json(history, &mut file)
}

/// Write analysis results as CSV, one row per result.
pub fn write_history_csv<W: Write>(
    history: &AnalysisHistory,
    writer: &mut W,
) -> Result<(), OutputError> {
    writeln!(
        writer,
        "timestamp,overall_similarity,cosine_similarity,jaccard_similarity,\
         sequence_similarity,ngram_similarity,is_plagiarized,severity,self_reference,\
         ai_probability,perplexity_score,burstiness_score,confidence_level,classification"
    )?;

    for result in history.iter() {
        let plag = &result.plagiarism_analysis;
        let ai = &result.ai_analysis;
        writeln!(
            writer,
            "{},{},{},{},{},{},{},{},{},{},{},{},{},{}",
            result.timestamp,
            plag.overall_similarity,
            plag.cosine_similarity,
            plag.jaccard_similarity,
            plag.sequence_similarity,
            plag.ngram_similarity,
            plag.is_plagiarized,
            plag.severity,
            result.self_reference,
            ai.ai_probability,
            ai.perplexity_score,
            ai.burstiness_score,
            ai.confidence_level,
            ai.classification
        )?;
    }

    Ok(())
}

/// Write analysis results as CSV to a file.
pub fn write_history_csv_file(history: &AnalysisHistory, path: &Path) -> Result<(), OutputError> {
    let mut file = std::fs::File::create(path)?;
    write_history_csv(history, &mut file)
}

/// Write corpus matches as CSV, one row per reference document.
pub fn write_matches_csv<W: Write>(
    matches: &[CorpusMatch],
    writer: &mut W,
) -> Result<(), OutputError> {
    writeln!(
        writer,
        "name,overall_similarity,cosine_similarity,jaccard_similarity,\
         sequence_similarity,ngram_similarity,is_plagiarized,severity"
    )?;

    for m in matches {
        let r = &m.report;
        writeln!(
            writer,
            "{},{},{},{},{},{},{},{}",
            m.name,
            r.overall_similarity,
            r.cosine_similarity,
            r.jaccard_similarity,
            r.sequence_similarity,
            r.ngram_similarity,
            r.is_plagiarized,
            r.severity
        )?;
    }

    Ok(())
}

/// Write corpus matches as CSV to a file.
pub fn write_matches_csv_file(matches: &[CorpusMatch], path: &Path) -> Result<(), OutputError> {
    let mut file = std::fs::File::create(path)?;
    write_matches_csv(matches, &mut file)
}

/// Write corpus matches as JSON to a file.
pub fn write_matches_json_file(matches: &[CorpusMatch], path: &Path) -> Result<(), OutputError> {
    let json = serde_json::to_string_pretty(matches)?;
    std::fs::write(path, json)?;
    Ok(())
}

/// Print a human-readable report for one analysis result.
pub fn print_report(result: &AnalysisResult) {
    let plag = &result.plagiarism_analysis;
    let ai = &result.ai_analysis;

    println!("=== Analysis Report ({}) ===", result.timestamp);
    println!();
    if result.self_reference {
        println!("No reference supplied: similarity below is the self-comparison");
        println!("baseline, not a plagiarism signal.");
    } else {
        println!(
            "Verdict: {} (severity: {})",
            if plag.is_plagiarized {
                "PLAGIARIZED"
            } else {
                "original"
            },
            plag.severity
        );
    }
    println!("Overall similarity: {:.2}%", plag.overall_similarity);
    println!("  Cosine:   {:.2}%", plag.cosine_similarity);
    println!("  Jaccard:  {:.2}%", plag.jaccard_similarity);
    println!("  Sequence: {:.2}%", plag.sequence_similarity);
    println!("  N-gram:   {:.2}%", plag.ngram_similarity);
    println!();
    println!("AI probability: {:.1}% ({} confidence)", ai.ai_probability, ai.confidence_level);
    println!("Classification: {}", ai.classification);
    println!(
        "  Perplexity proxy: {:.2}  Burstiness proxy: {:.2}",
        ai.perplexity_score, ai.burstiness_score
    );
}

/// Format one corpus match as a single summary line.
pub fn format_match(m: &CorpusMatch) -> String {
    format!(
        "{:<30} overall={:.2}%  severity={}  plagiarized={}",
        m.name, m.report.overall_similarity, m.report.severity, m.report.is_plagiarized
    )
}

/// Print corpus matches, best first, up to an optional limit.
pub fn print_matches(matches: &[CorpusMatch], limit: Option<usize>) {
    let to_print = match limit {
        Some(n) => &matches[..n.min(matches.len())],
        None => matches,
    };

    for m in to_print {
        println!("{}", format_match(m));
    }

    if let Some(n) = limit {
        if matches.len() > n {
            println!("... and {} more references", matches.len() - n);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::AnalysisParams;
    use crate::report::analyze;

    #[test]
    fn test_json_round_trip() {
        let params = AnalysisParams::default();
        let result = analyze("Some text. More text here.", None, &params);

        let mut buf = Vec::new();
        write_json(&result, &mut buf).unwrap();

        let parsed: AnalysisResult = serde_json::from_slice(&buf).unwrap();
        assert_eq!(
            parsed.plagiarism_analysis.overall_similarity,
            result.plagiarism_analysis.overall_similarity
        );
        assert_eq!(parsed.timestamp, result.timestamp);
    }

    #[test]
    fn test_json_field_names_match_contract() {
        let params = AnalysisParams::default();
        let result = analyze("Some text. More text here.", None, &params);

        let value = serde_json::to_value(&result).unwrap();
        assert!(value.get("plagiarism_analysis").is_some());
        assert!(value.get("ai_analysis").is_some());
        assert!(value.get("timestamp").is_some());
        assert!(value["plagiarism_analysis"].get("overall_similarity").is_some());
        assert!(value["ai_analysis"].get("ai_probability").is_some());
    }

    #[test]
    fn test_history_csv_shape() {
        let params = AnalysisParams::default();
        let mut history = AnalysisHistory::new();
        history.push(analyze("First document. Two sentences.", None, &params));
        history.push(analyze("Second document. Also two.", None, &params));

        let mut buf = Vec::new();
        write_history_csv(&history, &mut buf).unwrap();

        let csv = String::from_utf8(buf).unwrap();
        let lines: Vec<&str> = csv.lines().collect();
        assert_eq!(lines.len(), 3); // header + 2 rows
        assert!(lines[0].starts_with("timestamp,overall_similarity"));
        assert_eq!(lines[1].split(',').count(), 14);
    }

    #[test]
    fn test_matches_csv_shape() {
        let matches = vec![CorpusMatch {
            name: "ref.txt".to_string(),
            report: crate::similarity::detect_plagiarism(
                "a b c",
                "a b c",
                &AnalysisParams::default(),
            ),
        }];

        let mut buf = Vec::new();
        write_matches_csv(&matches, &mut buf).unwrap();

        let csv = String::from_utf8(buf).unwrap();
        let lines: Vec<&str> = csv.lines().collect();
        assert_eq!(lines.len(), 2);
        assert!(lines[1].starts_with("ref.txt,"));
    }
}
