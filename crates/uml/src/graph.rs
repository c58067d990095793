use crate::filter::{is_eligible, is_noise, normalize_full_name};
use crate::options::EmitOptions;
use model::{Codebase, DependencyKind, TypeModel};
use std::collections::BTreeMap;

/// Eligible, non-noise types of one render, keyed by full name (ordinal order)
pub struct TypeScope<'a> {
    by_full_name: BTreeMap<&'a str, &'a TypeModel>,
}

impl<'a> TypeScope<'a> {
    /// Applies the namespace filter and drops noise types
    pub fn build(codebase: &'a Codebase, options: &EmitOptions) -> Self {
        let mut by_full_name = BTreeMap::new();

        for t in codebase.types() {
            if !is_eligible(&t.namespace, options) || is_noise(t) {
                continue;
            }

            let key = normalize_full_name(&t.full_name);
            if by_full_name.contains_key(key) {
                tracing::warn!("Duplicate type full name, keeping first: {}", key);
                continue;
            }
            by_full_name.insert(key, t);
        }

        Self { by_full_name }
    }

    /// Looks up an in-scope type, accepting global-qualified names
    pub fn get(&self, full_name: &str) -> Option<&'a TypeModel> {
        self.by_full_name.get(normalize_full_name(full_name)).copied()
    }

    pub fn contains(&self, full_name: &str) -> bool {
        self.get(full_name).is_some()
    }

    /// In-scope types ordered by full name
    pub fn types(&self) -> impl Iterator<Item = &'a TypeModel> + '_ {
        self.by_full_name.values().copied()
    }

    pub fn len(&self) -> usize {
        self.by_full_name.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_full_name.is_empty()
    }
}

/// `from` is-a `to` (base type or implemented interface)
#[derive(Debug, Clone, Copy)]
pub struct Relation<'a> {
    pub from: &'a TypeModel,
    pub to: &'a TypeModel,
}

/// `from` depends on `to`
#[derive(Debug, Clone, Copy)]
pub struct DependencyEdge<'a> {
    pub from: &'a TypeModel,
    pub to: &'a TypeModel,
    pub kind: DependencyKind,
    pub label: Option<&'a str>,
}

/// Edges between in-scope types; references leaving the scope are dropped
#[derive(Debug, Default)]
pub struct TypeGraph<'a> {
    pub inheritance: Vec<Relation<'a>>,
    pub realization: Vec<Relation<'a>>,
    pub dependencies: Vec<DependencyEdge<'a>>,
}

impl<'a> TypeGraph<'a> {
    pub fn build(scope: &TypeScope<'a>) -> Self {
        let mut graph = Self::default();

        for t in scope.types() {
            if let Some(base) = t.base_type_full_name.as_deref() {
                if !base.trim().is_empty() {
                    if let Some(to) = scope.get(base) {
                        graph.inheritance.push(Relation { from: t, to });
                    }
                }
            }

            for iface in &t.interface_full_names {
                if let Some(to) = scope.get(iface) {
                    graph.realization.push(Relation { from: t, to });
                }
            }

            for dep in &t.dependencies {
                let Some(to) = scope.get(&dep.target_type_full_name) else {
                    continue;
                };
                if std::ptr::eq(to, t) {
                    continue;
                }

                graph.dependencies.push(DependencyEdge {
                    from: t,
                    to,
                    kind: dep.kind,
                    label: dep.label.as_deref(),
                });
            }
        }

        tracing::debug!(
            "Type graph: {} inheritance, {} realization, {} dependency edges",
            graph.inheritance.len(),
            graph.realization.len(),
            graph.dependencies.len()
        );
        graph
    }

    pub fn edge_count(&self) -> usize {
        self.inheritance.len() + self.realization.len() + self.dependencies.len()
    }

    /// (from, to) of every edge regardless of its kind
    pub fn endpoints(&self) -> impl Iterator<Item = (&'a TypeModel, &'a TypeModel)> + '_ {
        self.inheritance
            .iter()
            .chain(&self.realization)
            .map(|r| (r.from, r.to))
            .chain(self.dependencies.iter().map(|d| (d.from, d.to)))
    }
}
