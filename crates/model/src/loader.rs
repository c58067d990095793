use crate::types::Codebase;
use async_trait::async_trait;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Model file looked up when the source path is a directory
pub const DEFAULT_MODEL_FILE: &str = "codebase.json";

#[derive(Error, Debug)]
pub enum LoadError {
    #[error("No analyzable codebase at: {0}")]
    NotFound(String),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Invalid codebase model: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, LoadError>;

/// Produces the structural model of a codebase
#[async_trait]
pub trait CodebaseLoader: Send + Sync {
    async fn load(&self, source: &str) -> Result<Codebase>;
}

/// Loads a codebase model serialized as JSON by an external analyzer
#[derive(Debug, Clone, Default)]
pub struct JsonCodebaseLoader;

impl JsonCodebaseLoader {
    pub fn new() -> Self {
        Self
    }

    /// Resolves the model file: a `.json` file, or a directory holding `codebase.json`
    #[doc(hidden)]
    pub async fn resolve(source: &str) -> Result<PathBuf> {
        let path = Path::new(source);
        let metadata = tokio::fs::metadata(path)
            .await
            .map_err(|_| LoadError::NotFound(source.to_string()))?;

        if metadata.is_dir() {
            let candidate = path.join(DEFAULT_MODEL_FILE);
            if tokio::fs::metadata(&candidate).await.map(|m| m.is_file()).unwrap_or(false) {
                return Ok(candidate);
            }
            return Err(LoadError::NotFound(source.to_string()));
        }

        let is_json = path
            .extension()
            .map(|ext| ext.eq_ignore_ascii_case("json"))
            .unwrap_or(false);
        if !is_json {
            return Err(LoadError::NotFound(source.to_string()));
        }

        Ok(path.to_path_buf())
    }
}

#[async_trait]
impl CodebaseLoader for JsonCodebaseLoader {
    async fn load(&self, source: &str) -> Result<Codebase> {
        let file = Self::resolve(source).await?;
        tracing::info!("Loading codebase model: {}", file.display());

        let content = tokio::fs::read_to_string(&file).await?;
        let codebase: Codebase = serde_json::from_str(&content)?;

        tracing::debug!(
            "Loaded {} projects, {} types",
            codebase.projects.len(),
            codebase.types().count()
        );
        Ok(codebase)
    }
}
