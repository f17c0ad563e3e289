//! Input resolution: validate a source path and read it as normalised text.
//!
//! Errors are distinguished up front (missing file, no permission, not UTF-8)
//! so the CLI can report the path and a remedy before any parsing happens.
//! The parser only ever sees `\n` line endings.

use crate::error::PosterError;
use std::path::Path;
use tracing::debug;

/// Byte-order mark some editors prepend to UTF-8 files.
const BOM: char = '\u{feff}';

/// Read `path` into a `String` ready for parsing.
///
/// The text has its BOM removed and line endings normalised to `\n`.
pub fn read_input(path: &Path) -> Result<String, PosterError> {
    if !path.exists() {
        return Err(PosterError::FileNotFound {
            path: path.to_path_buf(),
        });
    }

    let bytes = std::fs::read(path).map_err(|e| match e.kind() {
        std::io::ErrorKind::PermissionDenied => PosterError::PermissionDenied {
            path: path.to_path_buf(),
        },
        std::io::ErrorKind::NotFound => PosterError::FileNotFound {
            path: path.to_path_buf(),
        },
        _ => PosterError::ReadFailed {
            path: path.to_path_buf(),
            source: e,
        },
    })?;

    let text = String::from_utf8(bytes).map_err(|e| PosterError::InvalidUtf8 {
        path: path.to_path_buf(),
        offset: e.utf8_error().valid_up_to(),
    })?;

    debug!("Read {} bytes from {}", text.len(), path.display());

    let text = text.strip_prefix(BOM).unwrap_or(&text);
    Ok(normalise_line_endings(text))
}

/// Convert `\r\n` and lone `\r` line endings to `\n`.
pub fn normalise_line_endings(text: &str) -> String {
    if !text.contains('\r') {
        return text.to_string();
    }
    text.replace("\r\n", "\n").replace('\r', "\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn missing_file_is_reported() {
        let err = read_input(Path::new("/definitely/not/here.md")).unwrap_err();
        assert!(matches!(err, PosterError::FileNotFound { .. }));
        assert!(err.to_string().contains("/definitely/not/here.md"));
    }

    #[test]
    fn reads_and_normalises() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(b"\xEF\xBB\xBF---\r\ntitle: T\r\n---\rbody").unwrap();
        let text = read_input(file.path()).unwrap();
        assert_eq!(text, "---\ntitle: T\n---\nbody");
    }

    #[test]
    fn invalid_utf8_reports_offset() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(b"abc\xFFdef").unwrap();
        match read_input(file.path()) {
            Err(PosterError::InvalidUtf8 { offset, .. }) => assert_eq!(offset, 3),
            other => panic!("expected InvalidUtf8, got {other:?}"),
        }
    }

    #[test]
    fn directory_is_a_read_failure() {
        let dir = tempfile::tempdir().unwrap();
        let err = read_input(dir.path()).unwrap_err();
        assert!(matches!(
            err,
            PosterError::ReadFailed { .. } | PosterError::PermissionDenied { .. }
        ));
    }

    #[test]
    fn line_endings() {
        assert_eq!(normalise_line_endings("a\r\nb\rc\n"), "a\nb\nc\n");
        assert_eq!(normalise_line_endings("plain"), "plain");
    }
}
