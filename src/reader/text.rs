use crate::core::error::Result;
use async_trait::async_trait;
use std::path::Path;

/// Filesystem collaborator: reads a file as UTF-8 text.
#[async_trait]
pub trait TextReader: Send + Sync {
    async fn read_text(&self, path: &Path) -> Result<String>;
}

/// Default reader backed by `tokio::fs`. Invalid UTF-8 surfaces as an I/O
/// error with `ErrorKind::InvalidData`.
#[derive(Debug, Default, Clone, Copy)]
pub struct FsTextReader;

#[async_trait]
impl TextReader for FsTextReader {
    async fn read_text(&self, path: &Path) -> Result<String> {
        log::debug!("Reading file: {}", path.display());
        let text = tokio::fs::read_to_string(path).await?;
        Ok(text)
    }
}

pub async fn read_file<P: AsRef<Path>>(path: P) -> Result<String> {
    FsTextReader.read_text(path.as_ref()).await
}
