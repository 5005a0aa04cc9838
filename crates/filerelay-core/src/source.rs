//! Source file access.

use std::path::Path;

use bytes::Bytes;

use crate::error::{RelayError, Result};

/// Read the whole file. This is the only fallible step of a refresh.
pub async fn read_source(path: &Path) -> Result<Bytes> {
    tokio::fs::read(path)
        .await
        .map(Bytes::from)
        .map_err(|source| RelayError::SourceRead {
            path: path.to_path_buf(),
            source,
        })
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]

    use std::io::Write;

    use super::*;
    use crate::error::ErrorKind;

    #[tokio::test]
    async fn reads_bytes_verbatim() {
        let mut f = tempfile::NamedTempFile::new().unwrap();
        f.write_all(b"# HELP x\nx{a=\"\xff\"} 1\n").unwrap();
        let got = read_source(f.path()).await.unwrap();
        assert_eq!(&got[..], b"# HELP x\nx{a=\"\xff\"} 1\n");
    }

    #[tokio::test]
    async fn missing_file_is_source_read_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = read_source(&dir.path().join("absent.txt")).await.unwrap_err();
        assert_eq!(err.kind(), ErrorKind::SourceRead);
    }
}
