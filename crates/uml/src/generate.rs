use crate::emitters::{DiagramDocument, DiagramEmitter};
use crate::options::EmitOptions;
use model::{Codebase, CodebaseLoader, FileWriter, LoadError};
use rayon::prelude::*;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum GenerateError {
    #[error("Missing required option: {0}")]
    MissingInput(&'static str),
    #[error(transparent)]
    Load(#[from] LoadError),
    #[error("Failed to write {}: {source}", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

pub type Result<T> = std::result::Result<T, GenerateError>;

/// One generation run
#[derive(Debug, Clone, Default)]
pub struct GenerateRequest {
    /// Source handed to the loader
    pub source: String,
    pub output_directory: String,
    pub options: EmitOptions,
}

impl GenerateRequest {
    pub fn new(source: &str, output_directory: &str) -> Self {
        Self {
            source: source.to_string(),
            output_directory: output_directory.to_string(),
            options: EmitOptions::default(),
        }
    }

    pub fn with_options(mut self, options: EmitOptions) -> Self {
        self.options = options;
        self
    }

    fn validate(&self) -> Result<()> {
        if self.source.trim().is_empty() {
            return Err(GenerateError::MissingInput("--source"));
        }
        if self.output_directory.trim().is_empty() {
            return Err(GenerateError::MissingInput("--out"));
        }
        Ok(())
    }
}

/// Files written by a run, in emitter order
#[derive(Debug, Clone, Default)]
pub struct GenerateReport {
    pub written: Vec<PathBuf>,
}

/// Loads a codebase once, runs every emitter on it and writes the documents
pub struct DiagramGenerator {
    loader: Box<dyn CodebaseLoader>,
    emitters: Vec<Box<dyn DiagramEmitter>>,
    writer: Box<dyn FileWriter>,
}

impl DiagramGenerator {
    pub fn new(
        loader: Box<dyn CodebaseLoader>,
        emitters: Vec<Box<dyn DiagramEmitter>>,
        writer: Box<dyn FileWriter>,
    ) -> Self {
        Self {
            loader,
            emitters,
            writer,
        }
    }

    pub fn emitter_names(&self) -> Vec<&'static str> {
        self.emitters.iter().map(|e| e.name()).collect()
    }

    /// Renders every document without touching the filesystem
    ///
    /// Emitters share nothing but the codebase, so they run in parallel; the result
    /// keeps emitter order.
    pub fn render(&self, codebase: &Codebase, options: &EmitOptions) -> Vec<DiagramDocument> {
        self.emitters
            .par_iter()
            .map(|emitter| emitter.emit(codebase, options))
            .collect::<Vec<_>>()
            .into_iter()
            .flatten()
            .collect()
    }

    pub async fn execute(&self, request: &GenerateRequest) -> Result<GenerateReport> {
        request.validate()?;

        let codebase = self.loader.load(&request.source).await?;
        tracing::info!(
            "Loaded {} projects, {} types from {}",
            codebase.projects.len(),
            codebase.types().count(),
            request.source
        );

        let documents = self.render(&codebase, &request.options);

        let output = Path::new(&request.output_directory);
        let mut report = GenerateReport::default();
        for doc in documents {
            let path = output.join(&doc.file_name);
            self.writer
                .write_text(&path, &doc.content)
                .await
                .map_err(|source| GenerateError::Write {
                    path: path.clone(),
                    source,
                })?;

            tracing::info!("Wrote {}", path.display());
            report.written.push(path);
        }

        Ok(report)
    }
}
