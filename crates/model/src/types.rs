use serde::{Deserialize, Serialize};

/// Analyzed codebase: every project the loader discovered, in load order
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Codebase {
    pub projects: Vec<Project>,
}

impl Codebase {
    pub fn new(projects: Vec<Project>) -> Self {
        Self { projects }
    }

    /// All types across projects, in project order then declaration order
    pub fn types(&self) -> impl Iterator<Item = &TypeModel> {
        self.projects.iter().flat_map(|p| p.types.iter())
    }
}

/// A single project (assembly, crate, package...) of the codebase
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Project {
    pub name: String,
    #[serde(default)]
    pub types: Vec<TypeModel>,
}

impl Project {
    pub fn new(name: &str, types: Vec<TypeModel>) -> Self {
        Self {
            name: name.to_string(),
            types,
        }
    }
}

/// Kind of a declared type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TypeKind {
    Class,
    Interface,
    Enum,
    Record,
    Struct,
}

/// A declared type
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TypeModel {
    /// Simple name: "Customer"
    pub name: String,
    /// Namespace, empty for the global namespace: "ExampleApp.Domain"
    #[serde(default)]
    pub namespace: String,
    pub kind: TypeKind,
    /// Unique key within a codebase: "ExampleApp.Domain.Customer"
    pub full_name: String,
    #[serde(default)]
    pub base_type_full_name: Option<String>,
    #[serde(default)]
    pub interface_full_names: Vec<String>,
    #[serde(default)]
    pub dependencies: Vec<Dependency>,
}

impl TypeModel {
    /// Creates a type with no relations; the full name is derived from namespace + name
    pub fn new(namespace: &str, name: &str, kind: TypeKind) -> Self {
        let full_name = if namespace.is_empty() {
            name.to_string()
        } else {
            format!("{}.{}", namespace, name)
        };

        Self {
            name: name.to_string(),
            namespace: namespace.to_string(),
            kind,
            full_name,
            base_type_full_name: None,
            interface_full_names: Vec::new(),
            dependencies: Vec::new(),
        }
    }

    pub fn with_base(mut self, base_full_name: &str) -> Self {
        self.base_type_full_name = Some(base_full_name.to_string());
        self
    }

    pub fn with_interface(mut self, interface_full_name: &str) -> Self {
        self.interface_full_names.push(interface_full_name.to_string());
        self
    }

    pub fn with_dependency(mut self, dependency: Dependency) -> Self {
        self.dependencies.push(dependency);
        self
    }
}

/// How a type depends on another
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DependencyKind {
    /// Construction-time requirement (injected collaborator)
    Constructor,
    /// Field or property
    Member,
}

/// Directed reference from the owning type to another type
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Dependency {
    pub target_type_full_name: String,
    pub kind: DependencyKind,
    /// Parameter or member name
    #[serde(default)]
    pub label: Option<String>,
}

impl Dependency {
    pub fn constructor(target: &str, label: Option<&str>) -> Self {
        Self {
            target_type_full_name: target.to_string(),
            kind: DependencyKind::Constructor,
            label: label.map(str::to_string),
        }
    }

    pub fn member(target: &str, label: Option<&str>) -> Self {
        Self {
            target_type_full_name: target.to_string(),
            kind: DependencyKind::Member,
            label: label.map(str::to_string),
        }
    }
}
