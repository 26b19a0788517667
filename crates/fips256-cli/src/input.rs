//! # Message Input
//!
//! Turns the `--text` / `--file` selection into the byte sequence to hash.
//! Text is hashed as its UTF-8 bytes. Files are read as UTF-8 text with
//! trailing whitespace stripped, unless `--raw` asks for the stored bytes.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Args;

/// Where the message comes from. Exactly one source is required.
#[derive(Args, Debug, Clone)]
#[group(required = true, multiple = false)]
pub struct InputArgs {
    /// Text to hash.
    #[arg(short, long)]
    pub text: Option<String>,

    /// File to hash.
    #[arg(short, long)]
    pub file: Option<PathBuf>,
}

/// Read the selected message.
///
/// With `raw`, a file is hashed byte-for-byte; otherwise it must be valid
/// UTF-8 and trailing whitespace is removed first.
pub fn load_message(input: &InputArgs, raw: bool) -> Result<Vec<u8>> {
    match (&input.text, &input.file) {
        (Some(text), _) => Ok(text.as_bytes().to_vec()),
        (None, Some(path)) if raw => read_raw(path),
        (None, Some(path)) => read_text(path),
        (None, None) => anyhow::bail!("one of --text or --file is required"),
    }
}

fn read_raw(path: &Path) -> Result<Vec<u8>> {
    let bytes = std::fs::read(path)
        .with_context(|| format!("failed to read {}", path.display()))?;
    tracing::debug!(path = %path.display(), bytes = bytes.len(), "read raw file");
    Ok(bytes)
}

fn read_text(path: &Path) -> Result<Vec<u8>> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read {} as UTF-8 text", path.display()))?;
    let trimmed = text.trim_end();
    tracing::debug!(
        path = %path.display(),
        bytes = trimmed.len(),
        stripped = text.len() - trimmed.len(),
        "read text file"
    );
    Ok(trimmed.as_bytes().to_vec())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn text(s: &str) -> InputArgs {
        InputArgs { text: Some(s.to_string()), file: None }
    }

    fn file(path: &Path) -> InputArgs {
        InputArgs { text: None, file: Some(path.to_path_buf()) }
    }

    #[test]
    fn text_is_utf8_bytes() {
        assert_eq!(load_message(&text("héllo"), false).unwrap(), "héllo".as_bytes());
    }

    #[test]
    fn text_keeps_trailing_whitespace() {
        assert_eq!(load_message(&text("abc \n"), false).unwrap(), b"abc \n");
    }

    #[test]
    fn file_strips_trailing_whitespace() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("msg.txt");
        std::fs::write(&path, "  abc\n\n\t ").unwrap();
        assert_eq!(load_message(&file(&path), false).unwrap(), b"  abc");
    }

    #[test]
    fn raw_file_is_hashed_as_stored() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("blob.bin");
        std::fs::write(&path, [0xff, 0xfe, b'\n']).unwrap();
        assert_eq!(load_message(&file(&path), true).unwrap(), vec![0xff, 0xfe, b'\n']);
    }

    #[test]
    fn non_utf8_file_without_raw_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("blob.bin");
        std::fs::write(&path, [0xff, 0xfe]).unwrap();
        let err = load_message(&file(&path), false).unwrap_err();
        assert!(format!("{err:#}").contains("UTF-8"));
    }

    #[test]
    fn missing_file_reports_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("absent.txt");
        let err = load_message(&file(&path), false).unwrap_err();
        assert!(format!("{err:#}").contains("absent.txt"));
    }

    #[test]
    fn no_source_is_an_error() {
        let input = InputArgs { text: None, file: None };
        assert!(load_message(&input, false).is_err());
    }
}
