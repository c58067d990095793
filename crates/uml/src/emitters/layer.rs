use super::{DiagramDocument, DiagramEmitter};
use crate::graph::{TypeGraph, TypeScope};
use crate::layer::{Layer, LayerClassifier, LayerMarkers};
use crate::options::EmitOptions;
use crate::plantuml;
use model::Codebase;
use std::collections::BTreeMap;

const LEGEND: &str = "Numbers on arrows = amount of cross-layer references detected.";

/// Layer overview: cross-layer reference counts between architectural buckets
#[derive(Debug, Clone, Default)]
pub struct LayerDiagramEmitter {
    classifier: LayerClassifier,
}

impl LayerDiagramEmitter {
    pub const NAME: &'static str = "layers";

    pub fn new(markers: &LayerMarkers) -> Self {
        Self {
            classifier: LayerClassifier::new(markers),
        }
    }

    /// Edge count per (from, to) layer pair, same-layer edges left out
    pub fn cross_layer_counts(&self, codebase: &Codebase, options: &EmitOptions) -> BTreeMap<(Layer, Layer), usize> {
        let scope = TypeScope::build(codebase, options);
        let graph = TypeGraph::build(&scope);

        let mut counts = BTreeMap::new();
        for (from, to) in graph.endpoints() {
            let from_layer = self.classifier.layer_of(from);
            let to_layer = self.classifier.layer_of(to);
            if from_layer != to_layer {
                *counts.entry((from_layer, to_layer)).or_insert(0) += 1;
            }
        }
        counts
    }
}

impl DiagramEmitter for LayerDiagramEmitter {
    fn name(&self) -> &'static str {
        Self::NAME
    }

    fn emit(&self, codebase: &Codebase, options: &EmitOptions) -> Vec<DiagramDocument> {
        let counts = self.cross_layer_counts(codebase, options);
        tracing::debug!("{}: {} cross-layer pairs", Self::NAME, counts.len());

        let mut lines = plantuml::start(
            Self::NAME,
            &[
                "skinparam shadowing false",
                "skinparam linetype ortho",
                "skinparam componentStyle rectangle",
            ],
        );

        for layer in Layer::ALL {
            lines.push(format!("rectangle \"{}\" as {}", layer.display_name(), layer.id()));
        }
        lines.push(String::new());

        for ((from, to), count) in &counts {
            lines.push(format!("{} ..> {} : {}", from.id(), to.id(), count));
        }
        lines.push(String::new());

        lines.push("legend left".to_string());
        lines.push(LEGEND.to_string());
        lines.push("endlegend".to_string());

        vec![DiagramDocument::new(Self::NAME, plantuml::finish(lines))]
    }
}
