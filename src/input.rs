//! Loading documents and reference corpora from disk.
//!
//! This is the engine's only error surface: the analysis itself is
//! infallible, but input that is not valid UTF-8 text is rejected here.

use crate::models::ReferenceDoc;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum InputError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("{path} is not valid UTF-8 text")]
    Decode { path: PathBuf },
    #[error("no text documents (.txt/.md) found in {0}")]
    EmptyCorpus(PathBuf),
}

/// Read a document as UTF-8 text.
///
/// Distinguishes I/O failures from malformed (undecodable) content.
pub fn load_document(path: &Path) -> Result<String, InputError> {
    let bytes = std::fs::read(path).map_err(|source| InputError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    String::from_utf8(bytes).map_err(|_| InputError::Decode {
        path: path.to_path_buf(),
    })
}

/// Load every `.txt`/`.md` file of a directory as a reference corpus.
///
/// Documents are named by file stem and sorted by name so ranking output is
/// stable across runs. Errors if the directory holds no text documents.
pub fn load_corpus(dir: &Path) -> Result<Vec<ReferenceDoc>, InputError> {
    let entries = std::fs::read_dir(dir).map_err(|source| InputError::Io {
        path: dir.to_path_buf(),
        source,
    })?;

    let mut references = Vec::new();
    for entry in entries {
        let entry = entry.map_err(|source| InputError::Io {
            path: dir.to_path_buf(),
            source,
        })?;
        let path = entry.path();

        let is_text = matches!(
            path.extension().and_then(|e| e.to_str()),
            Some("txt") | Some("md")
        );
        if !path.is_file() || !is_text {
            continue;
        }

        let name = path
            .file_name()
            .and_then(|n| n.to_str())
            .unwrap_or_default()
            .to_string();
        let text = load_document(&path)?;
        references.push(ReferenceDoc { name, text });
    }

    if references.is_empty() {
        return Err(InputError::EmptyCorpus(dir.to_path_buf()));
    }

    references.sort_by(|a, b| a.name.cmp(&b.name));
    Ok(references)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    fn temp_dir(name: &str) -> PathBuf {
        let dir = std::env::temp_dir().join(format!("textcheck-input-{}", name));
        let _ = fs::remove_dir_all(&dir);
        fs::create_dir_all(&dir).unwrap();
        dir
    }

    #[test]
    fn test_load_document_utf8() {
        let dir = temp_dir("doc");
        let path = dir.join("sample.txt");
        fs::write(&path, "Hello, world.").unwrap();

        let text = load_document(&path).unwrap();
        assert_eq!(text, "Hello, world.");
    }

    #[test]
    fn test_load_document_missing_file() {
        let dir = temp_dir("missing");
        let err = load_document(&dir.join("nope.txt")).unwrap_err();
        assert!(matches!(err, InputError::Io { .. }));
    }

    #[test]
    fn test_load_document_rejects_invalid_utf8() {
        let dir = temp_dir("binary");
        let path = dir.join("blob.txt");
        fs::write(&path, [0xff, 0xfe, 0x00, 0x80]).unwrap();

        let err = load_document(&path).unwrap_err();
        assert!(matches!(err, InputError::Decode { .. }));
    }

    #[test]
    fn test_load_corpus_sorted_and_filtered() {
        let dir = temp_dir("corpus");
        fs::write(dir.join("b.txt"), "second document").unwrap();
        fs::write(dir.join("a.md"), "first document").unwrap();
        fs::write(dir.join("ignore.bin"), "not text").unwrap();

        let corpus = load_corpus(&dir).unwrap();
        assert_eq!(corpus.len(), 2);
        assert_eq!(corpus[0].name, "a.md");
        assert_eq!(corpus[1].name, "b.txt");
    }

    #[test]
    fn test_load_corpus_empty_dir() {
        let dir = temp_dir("empty");
        let err = load_corpus(&dir).unwrap_err();
        assert!(matches!(err, InputError::EmptyCorpus(_)));
    }
}
