//! uml - PlantUML diagrams from a codebase model
//!
//! Package, class and layer diagrams with stable node ids

mod alias;
mod emitters;
mod filter;
mod generate;
mod graph;
mod layer;
mod options;
mod plantuml;

pub use alias::alias;
pub use emitters::{
    default_emitters, emitter_by_name, ClassDiagramEmitter, DiagramDocument, DiagramEmitter,
    LayerDiagramEmitter, PackageDiagramEmitter, DOCUMENT_EXTENSION, EMITTER_NAMES,
};
pub use filter::{is_eligible, is_noise, normalize_full_name};
pub use generate::{DiagramGenerator, GenerateError, GenerateReport, GenerateRequest};
pub use graph::{DependencyEdge, Relation, TypeGraph, TypeScope};
pub use layer::{Layer, LayerClassifier, LayerMarkers};
pub use options::EmitOptions;
