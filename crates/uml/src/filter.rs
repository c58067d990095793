use crate::options::EmitOptions;
use model::TypeModel;

/// Qualifier some analyzers put in front of fully-qualified names
pub const GLOBAL_QUALIFIER: &str = "global::";

/// Synthesized entry-point type emitted for top-level statements
const SYNTHESIZED_PROGRAM: &str = "AutoGeneratedProgram";

/// Whether a namespace participates in a render
///
/// Prefix checks are ordinal and case-sensitive. A blank include prefix counts as
/// "not configured" and blank exclude prefixes are ignored.
pub fn is_eligible(namespace: &str, options: &EmitOptions) -> bool {
    if let Some(include) = options.include_namespace_prefix.as_deref() {
        if !include.trim().is_empty() && !namespace.starts_with(include) {
            return false;
        }
    }

    !options
        .exclude_namespace_prefixes
        .iter()
        .any(|ex| !ex.trim().is_empty() && namespace.starts_with(ex.as_str()))
}

/// Compiler-synthesized or placeholder types never rendered
pub fn is_noise(t: &TypeModel) -> bool {
    t.name == SYNTHESIZED_PROGRAM || t.name.starts_with('<')
}

/// Strips the global qualifier so both spellings address the same type
pub fn normalize_full_name(full_name: &str) -> &str {
    full_name.strip_prefix(GLOBAL_QUALIFIER).unwrap_or(full_name)
}
