//! End-to-end generation tests
//!
//! Uses the demo model in `demos/example_app` and in-memory collaborators.

use async_trait::async_trait;
use model::{
    Codebase, CodebaseLoader, Dependency, FileWriter, FsFileWriter, JsonCodebaseLoader, LoadError,
    Project, TypeKind, TypeModel,
};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use tempfile::tempdir;
use uml::{
    default_emitters, emitter_by_name, DiagramGenerator, EmitOptions, GenerateError,
    GenerateRequest, Layer, LayerClassifier, LayerDiagramEmitter, LayerMarkers, TypeGraph,
    TypeScope,
};

fn demo_path() -> String {
    format!("{}/../../demos/example_app", env!("CARGO_MANIFEST_DIR"))
}

/// Loader returning a fixed codebase and counting calls
struct StaticLoader {
    codebase: Codebase,
    calls: Arc<AtomicUsize>,
}

#[async_trait]
impl CodebaseLoader for StaticLoader {
    async fn load(&self, _source: &str) -> Result<Codebase, LoadError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Ok(self.codebase.clone())
    }
}

struct FailingLoader;

#[async_trait]
impl CodebaseLoader for FailingLoader {
    async fn load(&self, source: &str) -> Result<Codebase, LoadError> {
        Err(LoadError::NotFound(source.to_string()))
    }
}

/// Writer keeping files in memory; fails on paths ending with `fail_on`
#[derive(Default)]
struct MemoryWriter {
    files: Arc<Mutex<BTreeMap<PathBuf, String>>>,
    fail_on: Option<&'static str>,
}

#[async_trait]
impl FileWriter for MemoryWriter {
    async fn write_text(&self, path: &Path, content: &str) -> std::io::Result<()> {
        if let Some(name) = self.fail_on {
            if path.ends_with(name) {
                return Err(std::io::Error::new(std::io::ErrorKind::PermissionDenied, "read-only"));
            }
        }
        self.files.lock().unwrap().insert(path.to_path_buf(), content.to_string());
        Ok(())
    }
}

fn scenario_codebase() -> Codebase {
    Codebase::new(vec![Project::new(
        "App",
        vec![
            TypeModel::new("App.Domain", "A", TypeKind::Class),
            TypeModel::new("App.Infrastructure", "B", TypeKind::Class)
                .with_dependency(Dependency::constructor("App.Domain.A", Some("repo"))),
        ],
    )])
}

#[tokio::test]
async fn test_writes_every_document_to_output_directory() {
    let calls = Arc::new(AtomicUsize::new(0));
    let writer = MemoryWriter::default();
    let files = Arc::clone(&writer.files);

    let generator = DiagramGenerator::new(
        Box::new(StaticLoader { codebase: scenario_codebase(), calls: Arc::clone(&calls) }),
        default_emitters(&LayerMarkers::default()),
        Box::new(writer),
    );

    let report = generator
        .execute(&GenerateRequest::new("app.json", "out/diagrams"))
        .await
        .expect("generation failed");

    assert_eq!(calls.load(Ordering::SeqCst), 1);
    assert_eq!(
        report.written,
        vec![
            PathBuf::from("out/diagrams/packages.puml"),
            PathBuf::from("out/diagrams/classes.puml"),
            PathBuf::from("out/diagrams/layers.puml"),
        ]
    );

    let files = files.lock().unwrap();
    let layers = &files[Path::new("out/diagrams/layers.puml")];
    assert!(layers.contains("L_Infrastructure ..> L_Domain : 1\n"));
    assert_eq!(layers.matches("..>").count(), 1);

    let classes = &files[Path::new("out/diagrams/classes.puml")];
    let edge = format!("{} ..> {} : repo", uml::alias("App.Infrastructure.B"), uml::alias("App.Domain.A"));
    assert!(classes.contains(&edge));
}

#[tokio::test]
async fn test_blank_input_rejected_before_loading() {
    let calls = Arc::new(AtomicUsize::new(0));
    let generator = DiagramGenerator::new(
        Box::new(StaticLoader { codebase: Codebase::default(), calls: Arc::clone(&calls) }),
        default_emitters(&LayerMarkers::default()),
        Box::new(MemoryWriter::default()),
    );

    let err = generator.execute(&GenerateRequest::new("  ", "out")).await.unwrap_err();
    assert!(matches!(err, GenerateError::MissingInput("--source")));

    let err = generator.execute(&GenerateRequest::new("app.json", "")).await.unwrap_err();
    assert!(matches!(err, GenerateError::MissingInput("--out")));

    assert_eq!(calls.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn test_load_error_writes_nothing() {
    let writer = MemoryWriter::default();
    let files = Arc::clone(&writer.files);
    let generator = DiagramGenerator::new(
        Box::new(FailingLoader),
        default_emitters(&LayerMarkers::default()),
        Box::new(writer),
    );

    let err = generator.execute(&GenerateRequest::new("missing.sln", "out")).await.unwrap_err();
    assert!(matches!(err, GenerateError::Load(LoadError::NotFound(_))));
    assert_eq!(err.to_string(), "No analyzable codebase at: missing.sln");
    assert!(files.lock().unwrap().is_empty());
}

#[tokio::test]
async fn test_write_error_aborts_run() {
    let writer = MemoryWriter { fail_on: Some("classes.puml"), ..MemoryWriter::default() };
    let files = Arc::clone(&writer.files);
    let generator = DiagramGenerator::new(
        Box::new(StaticLoader { codebase: scenario_codebase(), calls: Arc::new(AtomicUsize::new(0)) }),
        default_emitters(&LayerMarkers::default()),
        Box::new(writer),
    );

    let err = generator.execute(&GenerateRequest::new("app.json", "out")).await.unwrap_err();
    assert!(matches!(err, GenerateError::Write { .. }));

    // packages was written before the failure, layers never
    let files = files.lock().unwrap();
    assert!(files.contains_key(Path::new("out/packages.puml")));
    assert!(!files.contains_key(Path::new("out/layers.puml")));
}

#[tokio::test]
async fn test_demo_model_to_disk() {
    let dir = tempdir().expect("Failed to create temp dir");
    let out = dir.path().join("diagrams");

    let generator = DiagramGenerator::new(
        Box::new(JsonCodebaseLoader::new()),
        default_emitters(&LayerMarkers::default()),
        Box::new(FsFileWriter::new()),
    );
    let request = GenerateRequest::new(&demo_path(), out.to_str().unwrap());
    let report = generator.execute(&request).await.expect("generation failed");
    assert_eq!(report.written.len(), 3);

    let packages = std::fs::read_to_string(out.join("packages.puml")).unwrap();
    let listed: Vec<_> = packages.lines().filter(|l| l.starts_with("package ")).collect();
    assert_eq!(
        listed,
        vec![
            "package \"\" { }",
            "package \"ExampleApp.Application\" { }",
            "package \"ExampleApp.Cli\" { }",
            "package \"ExampleApp.Domain\" { }",
            "package \"ExampleApp.Infrastructure\" { }",
        ]
    );

    let layers = std::fs::read_to_string(out.join("layers.puml")).unwrap();
    let edges: Vec<_> = layers.lines().filter(|l| l.contains("..>")).collect();
    assert_eq!(
        edges,
        vec![
            "L_Application ..> L_Domain : 2",
            "L_Infrastructure ..> L_Domain : 1",
            "L_Infrastructure ..> L_Application : 1",
            "L_Cli ..> L_Application : 1",
        ]
    );

    let classes = std::fs::read_to_string(out.join("classes.puml")).unwrap();
    assert!(!classes.contains("Program>$"));
    assert!(classes.contains(&format!(
        "{} ..|> {}",
        uml::alias("ExampleApp.Infrastructure.SystemClock"),
        uml::alias("ExampleApp.Domain.IClock")
    )));
    assert!(classes.contains(&format!(
        "{} --> {} : member",
        uml::alias("ExampleApp.Cli.Program"),
        uml::alias("ExampleApp.Application.GetCustomerUseCase")
    )));
}

#[tokio::test]
async fn test_demo_output_is_byte_identical_across_runs() {
    let codebase = JsonCodebaseLoader::new().load(&demo_path()).await.expect("load failed");
    let generator = DiagramGenerator::new(
        Box::new(JsonCodebaseLoader::new()),
        default_emitters(&LayerMarkers::default()),
        Box::new(MemoryWriter::default()),
    );

    let options = EmitOptions::new().with_exclude("ExampleApp.Cli");
    let first = generator.render(&codebase, &options);
    let second = generator.render(&codebase, &options);
    assert_eq!(first, second);
}

#[tokio::test]
async fn test_layer_totals_conserve_cross_layer_edges() {
    let codebase = JsonCodebaseLoader::new().load(&demo_path()).await.expect("load failed");
    let options = EmitOptions::default();
    let classifier = LayerClassifier::default();

    let scope = TypeScope::build(&codebase, &options);
    let graph = TypeGraph::build(&scope);
    let crossing = graph
        .endpoints()
        .filter(|(from, to)| classifier.layer_of(from) != classifier.layer_of(to))
        .count();

    let counts = LayerDiagramEmitter::default().cross_layer_counts(&codebase, &options);
    assert_eq!(counts.values().sum::<usize>(), crossing);
    assert_eq!(crossing, 5);
    assert!(!counts.contains_key(&(Layer::Domain, Layer::Infrastructure)));
}

#[test]
fn test_selected_emitters_only() {
    let markers = LayerMarkers::default();
    let emitters = ["layers", "packages"]
        .iter()
        .filter_map(|n| emitter_by_name(n, &markers))
        .collect();
    let generator = DiagramGenerator::new(Box::new(FailingLoader), emitters, Box::new(MemoryWriter::default()));

    assert_eq!(generator.emitter_names(), vec!["layers", "packages"]);
    let docs = generator.render(&scenario_codebase(), &EmitOptions::default());
    let names: Vec<_> = docs.iter().map(|d| d.file_name.as_str()).collect();
    assert_eq!(names, vec!["layers.puml", "packages.puml"]);
}
