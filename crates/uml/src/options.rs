/// Options shared by every emitter of one run
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EmitOptions {
    /// Only namespaces starting with this prefix participate
    pub include_namespace_prefix: Option<String>,
    /// Namespaces starting with any of these prefixes are left out
    pub exclude_namespace_prefixes: Vec<String>,
}

impl EmitOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_include(mut self, prefix: &str) -> Self {
        self.include_namespace_prefix = Some(prefix.to_string());
        self
    }

    pub fn with_exclude(mut self, prefix: &str) -> Self {
        self.exclude_namespace_prefixes.push(prefix.to_string());
        self
    }
}
