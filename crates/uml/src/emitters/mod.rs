mod class;
mod layer;
mod package;

pub use class::ClassDiagramEmitter;
pub use layer::LayerDiagramEmitter;
pub use package::PackageDiagramEmitter;

use crate::layer::LayerMarkers;
use crate::options::EmitOptions;
use model::Codebase;

/// Extension of every produced document
pub const DOCUMENT_EXTENSION: &str = "puml";

/// Short names of the built-in emitters, in run order
pub const EMITTER_NAMES: [&str; 3] = [
    PackageDiagramEmitter::NAME,
    ClassDiagramEmitter::NAME,
    LayerDiagramEmitter::NAME,
];

/// One generated diagram file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DiagramDocument {
    pub file_name: String,
    pub content: String,
}

impl DiagramDocument {
    /// Document named after the emitter: `<name>.puml`
    pub fn new(emitter_name: &str, content: String) -> Self {
        Self {
            file_name: format!("{}.{}", emitter_name, DOCUMENT_EXTENSION),
            content,
        }
    }
}

/// Renders diagrams from a codebase
///
/// Emitters are pure: they read the shared codebase and own every derived structure.
pub trait DiagramEmitter: Send + Sync {
    /// Short name, also the document file stem
    fn name(&self) -> &'static str;

    fn emit(&self, codebase: &Codebase, options: &EmitOptions) -> Vec<DiagramDocument>;
}

/// Package, class and layer emitters
pub fn default_emitters(markers: &LayerMarkers) -> Vec<Box<dyn DiagramEmitter>> {
    EMITTER_NAMES
        .iter()
        .filter_map(|name| emitter_by_name(name, markers))
        .collect()
}

pub fn emitter_by_name(name: &str, markers: &LayerMarkers) -> Option<Box<dyn DiagramEmitter>> {
    match name {
        PackageDiagramEmitter::NAME => Some(Box::new(PackageDiagramEmitter::new())),
        ClassDiagramEmitter::NAME => Some(Box::new(ClassDiagramEmitter::new(markers))),
        LayerDiagramEmitter::NAME => Some(Box::new(LayerDiagramEmitter::new(markers))),
        _ => None,
    }
}
