use async_trait::async_trait;
use std::path::Path;

/// Persists generated text
#[async_trait]
pub trait FileWriter: Send + Sync {
    /// Writes `content` to `path`, creating parent directories as needed
    async fn write_text(&self, path: &Path, content: &str) -> std::io::Result<()>;
}

/// Writes to the local filesystem
#[derive(Debug, Clone, Default)]
pub struct FsFileWriter;

impl FsFileWriter {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl FileWriter for FsFileWriter {
    async fn write_text(&self, path: &Path, content: &str) -> std::io::Result<()> {
        if let Some(dir) = path.parent() {
            if !dir.as_os_str().is_empty() {
                tokio::fs::create_dir_all(dir).await?;
            }
        }

        tokio::fs::write(path, content).await
    }
}
