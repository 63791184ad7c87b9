//! Word counting and `.txt` import/export.

use std::path::{Path, PathBuf};
use thiserror::Error;

/// File name used for exported output.
pub const EXPORT_FILE_NAME: &str = "humanized-text.txt";

#[derive(Debug, Error)]
pub enum TextFileError {
    #[error("Only .txt files can be imported: '{path}'")]
    UnsupportedFile { path: PathBuf },

    #[error("Failed to read '{path}': {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to write '{path}': {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Number of whitespace-separated words in `text`.
pub fn word_count(text: &str) -> usize {
    text.split_whitespace().count()
}

/// Write `text` to `dir/humanized-text.txt`, replacing any previous export.
pub fn export_text(dir: &Path, text: &str) -> Result<PathBuf, TextFileError> {
    let path = dir.join(EXPORT_FILE_NAME);
    std::fs::write(&path, text.as_bytes()).map_err(|source| TextFileError::Write {
        path: path.clone(),
        source,
    })?;
    tracing::info!(path = %path.display(), bytes = text.len(), "Exported output");
    Ok(path)
}

/// Read a `.txt` file in full.
pub async fn import_text(path: &Path) -> Result<String, TextFileError> {
    let is_txt = path
        .extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case("txt"));
    if !is_txt {
        return Err(TextFileError::UnsupportedFile {
            path: path.to_path_buf(),
        });
    }

    let text = tokio::fs::read_to_string(path)
        .await
        .map_err(|source| TextFileError::Read {
            path: path.to_path_buf(),
            source,
        })?;
    tracing::info!(path = %path.display(), bytes = text.len(), "Imported input");
    Ok(text)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn word_count_ignores_extra_whitespace() {
        assert_eq!(word_count(""), 0);
        assert_eq!(word_count("   \n\t "), 0);
        assert_eq!(word_count("a  b   c"), 3);
        assert_eq!(word_count("  leading and trailing  "), 3);
        assert_eq!(word_count("line one\nline\ttwo"), 4);
    }

    #[test]
    fn export_writes_exact_bytes() {
        let dir = tempfile::tempdir().unwrap();
        let text = "Ünïcode — text\r\nwith trailing newline\n";
        let path = export_text(dir.path(), text).unwrap();
        assert!(path.ends_with(EXPORT_FILE_NAME));
        assert_eq!(std::fs::read(&path).unwrap(), text.as_bytes());
    }

    #[test]
    fn export_overwrites_previous_file() {
        let dir = tempfile::tempdir().unwrap();
        export_text(dir.path(), "first version").unwrap();
        let path = export_text(dir.path(), "second").unwrap();
        assert_eq!(std::fs::read_to_string(path).unwrap(), "second");
    }

    #[tokio::test]
    async fn import_reads_whole_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("draft.TXT");
        std::fs::write(&path, "hello\nworld").unwrap();
        assert_eq!(import_text(&path).await.unwrap(), "hello\nworld");
    }

    #[tokio::test]
    async fn import_rejects_other_extensions() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("draft.md");
        std::fs::write(&path, "# hi").unwrap();
        assert!(matches!(
            import_text(&path).await,
            Err(TextFileError::UnsupportedFile { .. })
        ));
    }

    #[tokio::test]
    async fn import_missing_file_is_read_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing.txt");
        assert!(matches!(
            import_text(&path).await,
            Err(TextFileError::Read { .. })
        ));
    }
}
