//! generate subcommand - PlantUML diagrams from a codebase model

use clap::builder::PossibleValuesParser;
use clap::Args;
use model::{FsFileWriter, JsonCodebaseLoader};
use uml::{
    default_emitters, emitter_by_name, DiagramEmitter, DiagramGenerator, EmitOptions,
    GenerateRequest, LayerMarkers, EMITTER_NAMES,
};

#[derive(Args, Debug)]
pub struct GenerateArgs {
    /// Codebase model: a .json file or a folder containing codebase.json
    #[arg(long)]
    pub source: Option<String>,
    /// Output directory for generated diagrams
    #[arg(long)]
    pub out: Option<String>,
    /// Include only namespaces starting with this prefix
    #[arg(long)]
    pub include: Option<String>,
    /// Exclude namespaces starting with this prefix (repeatable)
    #[arg(long)]
    pub exclude: Vec<String>,
    /// Emitter to run (repeatable, default: all)
    #[arg(long = "emitter", value_parser = PossibleValuesParser::new(EMITTER_NAMES))]
    pub emitters: Vec<String>,
}

impl GenerateArgs {
    fn request(&self) -> GenerateRequest {
        let mut options = EmitOptions::new();
        options.include_namespace_prefix = self.include.clone();
        options.exclude_namespace_prefixes = self.exclude.clone();

        GenerateRequest::new(
            self.source.as_deref().unwrap_or_default(),
            self.out.as_deref().unwrap_or_default(),
        )
        .with_options(options)
    }

    fn emitters(&self, markers: &LayerMarkers) -> Vec<Box<dyn DiagramEmitter>> {
        if self.emitters.is_empty() {
            return default_emitters(markers);
        }

        let mut names: Vec<&str> = Vec::new();
        for name in &self.emitters {
            if !names.contains(&name.as_str()) {
                names.push(name);
            }
        }
        names
            .into_iter()
            .filter_map(|name| emitter_by_name(name, markers))
            .collect()
    }
}

pub async fn run(args: GenerateArgs) -> anyhow::Result<()> {
    let markers = LayerMarkers::from_env();
    let request = args.request();

    let generator = DiagramGenerator::new(
        Box::new(JsonCodebaseLoader::new()),
        args.emitters(&markers),
        Box::new(FsFileWriter::new()),
    );
    tracing::info!("Emitters: {:?}", generator.emitter_names());

    generator.execute(&request).await?;

    println!("Generated diagrams in: {}", request.output_directory);
    Ok(())
}
