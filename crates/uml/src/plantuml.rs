//! PlantUML text helpers shared by the emitters

/// Opens a document: `@startuml <name>` followed by the preamble lines
pub fn start(name: &str, preamble: &[&str]) -> Vec<String> {
    let mut lines = vec![format!("@startuml {}", name)];
    lines.extend(preamble.iter().map(|l| l.to_string()));
    lines.push(String::new());
    lines
}

/// Closes a document and joins it, always newline-terminated
pub fn finish(mut lines: Vec<String>) -> String {
    lines.push("@enduml".to_string());
    let mut text = lines.join("\n");
    text.push('\n');
    text
}

/// Makes a value safe inside a quoted name or an edge label
pub fn escape(value: &str) -> String {
    value
        .replace('\\', "\\\\")
        .replace('"', "\\\"")
        .replace("\r\n", " ")
        .replace(['\r', '\n'], " ")
}
