//! model - structural model of an analyzed codebase
//!
//! Types, namespaces and their relations, plus the loader and writer seams

mod loader;
mod types;
mod writer;

pub use loader::{CodebaseLoader, JsonCodebaseLoader, LoadError, DEFAULT_MODEL_FILE};
pub use types::{Codebase, Dependency, DependencyKind, Project, TypeKind, TypeModel};
pub use writer::{FileWriter, FsFileWriter};
