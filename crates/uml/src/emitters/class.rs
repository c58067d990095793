use super::{DiagramDocument, DiagramEmitter};
use crate::alias::alias;
use crate::graph::{TypeGraph, TypeScope};
use crate::layer::{LayerClassifier, LayerMarkers};
use crate::options::EmitOptions;
use crate::plantuml;
use model::{Codebase, DependencyKind, TypeKind, TypeModel};
use std::collections::BTreeMap;

const DEFAULT_CONSTRUCTOR_LABEL: &str = "ctor";
const DEFAULT_MEMBER_LABEL: &str = "member";

/// Types grouped by namespace, with inheritance, realization and dependency edges
#[derive(Debug, Clone, Default)]
pub struct ClassDiagramEmitter {
    classifier: LayerClassifier,
}

impl ClassDiagramEmitter {
    pub const NAME: &'static str = "classes";

    pub fn new(markers: &LayerMarkers) -> Self {
        Self {
            classifier: LayerClassifier::new(markers),
        }
    }

    fn keyword(kind: TypeKind) -> &'static str {
        match kind {
            TypeKind::Interface => "interface",
            TypeKind::Enum => "enum",
            TypeKind::Class | TypeKind::Record | TypeKind::Struct => "class",
        }
    }

    fn declaration(&self, t: &TypeModel) -> String {
        format!(
            "{} \"{}\" as {} <<{}>>",
            Self::keyword(t.kind),
            plantuml::escape(&t.name),
            alias(&t.full_name),
            self.classifier.layer_of(t).display_name()
        )
    }

    fn dependency_line(arrow: &str, from: &TypeModel, to: &TypeModel, label: Option<&str>, default: &str) -> String {
        let label = label.filter(|l| !l.trim().is_empty()).unwrap_or(default);
        format!(
            "{} {} {} : {}",
            alias(&from.full_name),
            arrow,
            alias(&to.full_name),
            plantuml::escape(label)
        )
    }
}

impl DiagramEmitter for ClassDiagramEmitter {
    fn name(&self) -> &'static str {
        Self::NAME
    }

    fn emit(&self, codebase: &Codebase, options: &EmitOptions) -> Vec<DiagramDocument> {
        let scope = TypeScope::build(codebase, options);
        let graph = TypeGraph::build(&scope);
        tracing::debug!("{}: {} types, {} edges", Self::NAME, scope.len(), graph.edge_count());

        let mut lines = plantuml::start(Self::NAME, &["hide empty members", "skinparam shadowing false"]);

        // namespace -> types, both ordinal
        let mut groups: BTreeMap<&str, Vec<&TypeModel>> = BTreeMap::new();
        for t in scope.types() {
            groups.entry(t.namespace.as_str()).or_default().push(t);
        }

        for (ns, types) in &groups {
            if ns.trim().is_empty() {
                lines.extend(types.iter().map(|t| self.declaration(t)));
                continue;
            }

            lines.push(format!("package \"{}\" {{", plantuml::escape(ns)));
            lines.extend(types.iter().map(|t| format!("  {}", self.declaration(t))));
            lines.push("}".to_string());
        }
        lines.push(String::new());

        for r in &graph.inheritance {
            lines.push(format!("{} --|> {}", alias(&r.from.full_name), alias(&r.to.full_name)));
        }

        for r in &graph.realization {
            lines.push(format!("{} ..|> {}", alias(&r.from.full_name), alias(&r.to.full_name)));
        }

        for d in graph.dependencies.iter().filter(|d| d.kind == DependencyKind::Constructor) {
            lines.push(Self::dependency_line("..>", d.from, d.to, d.label, DEFAULT_CONSTRUCTOR_LABEL));
        }

        for d in graph.dependencies.iter().filter(|d| d.kind == DependencyKind::Member) {
            lines.push(Self::dependency_line("-->", d.from, d.to, d.label, DEFAULT_MEMBER_LABEL));
        }
        lines.push(String::new());

        vec![DiagramDocument::new(Self::NAME, plantuml::finish(lines))]
    }
}
