use super::{DiagramDocument, DiagramEmitter};
use crate::filter::is_eligible;
use crate::options::EmitOptions;
use crate::plantuml;
use model::Codebase;
use std::collections::BTreeSet;

/// Namespace overview: one empty package per eligible namespace
#[derive(Debug, Clone, Default)]
pub struct PackageDiagramEmitter;

impl PackageDiagramEmitter {
    pub const NAME: &'static str = "packages";

    pub fn new() -> Self {
        Self
    }

    /// Distinct eligible namespaces of every type, in ordinal order
    ///
    /// Synthesized types still count: the namespace exists even when nothing in it is drawn.
    pub fn namespaces<'a>(codebase: &'a Codebase, options: &EmitOptions) -> BTreeSet<&'a str> {
        codebase
            .types()
            .map(|t| t.namespace.as_str())
            .filter(|ns| is_eligible(ns, options))
            .collect()
    }
}

impl DiagramEmitter for PackageDiagramEmitter {
    fn name(&self) -> &'static str {
        Self::NAME
    }

    fn emit(&self, codebase: &Codebase, options: &EmitOptions) -> Vec<DiagramDocument> {
        let namespaces = Self::namespaces(codebase, options);
        tracing::debug!("{}: {} namespaces", Self::NAME, namespaces.len());

        let mut lines = plantuml::start(
            Self::NAME,
            &["hide empty members", "skinparam packageStyle rectangle"],
        );

        for ns in &namespaces {
            lines.push(format!("package \"{}\" {{ }}", plantuml::escape(ns)));
        }
        lines.push(String::new());

        vec![DiagramDocument::new(Self::NAME, plantuml::finish(lines))]
    }
}
