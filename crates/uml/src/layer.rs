use model::TypeModel;

/// Coarse architectural bucket inferred from a namespace
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Layer {
    Domain,
    Application,
    Infrastructure,
    Cli,
    Tests,
    Other,
}

impl Layer {
    /// Every layer, in rendering order
    pub const ALL: [Layer; 6] = [
        Layer::Domain,
        Layer::Application,
        Layer::Infrastructure,
        Layer::Cli,
        Layer::Tests,
        Layer::Other,
    ];

    /// Diagram node id
    pub fn id(self) -> &'static str {
        match self {
            Layer::Domain => "L_Domain",
            Layer::Application => "L_Application",
            Layer::Infrastructure => "L_Infrastructure",
            Layer::Cli => "L_Cli",
            Layer::Tests => "L_Tests",
            Layer::Other => "L_Other",
        }
    }

    pub fn display_name(self) -> &'static str {
        match self {
            Layer::Domain => "Domain",
            Layer::Application => "Application",
            Layer::Infrastructure => "Infrastructure",
            Layer::Cli => "CLI",
            Layer::Tests => "Tests",
            Layer::Other => "Other",
        }
    }
}

/// Namespace substrings that identify each layer
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LayerMarkers {
    pub domain: String,
    pub application: String,
    pub infrastructure: String,
    pub cli: String,
    pub test: String,
}

impl Default for LayerMarkers {
    fn default() -> Self {
        Self {
            domain: ".Domain".to_string(),
            application: ".Application".to_string(),
            infrastructure: ".Infrastructure".to_string(),
            cli: ".Cli".to_string(),
            test: ".Test".to_string(),
        }
    }
}

impl LayerMarkers {
    /// Loads markers from `UMLGEN_*_MARKER` environment variables
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Defaults overridden by whatever `lookup` returns for each variable
    #[doc(hidden)]
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut markers = Self::default();

        if let Some(v) = lookup("UMLGEN_DOMAIN_MARKER") {
            markers.domain = v;
        }
        if let Some(v) = lookup("UMLGEN_APPLICATION_MARKER") {
            markers.application = v;
        }
        if let Some(v) = lookup("UMLGEN_INFRASTRUCTURE_MARKER") {
            markers.infrastructure = v;
        }
        if let Some(v) = lookup("UMLGEN_CLI_MARKER") {
            markers.cli = v;
        }
        if let Some(v) = lookup("UMLGEN_TEST_MARKER") {
            markers.test = v;
        }

        markers
    }
}

/// Maps types to layers: first marker contained in the namespace wins
#[derive(Debug, Clone)]
pub struct LayerClassifier {
    /// (layer, lowercased marker) in precedence order; blank markers dropped
    rules: Vec<(Layer, String)>,
}

impl LayerClassifier {
    pub fn new(markers: &LayerMarkers) -> Self {
        let rules = [
            (Layer::Domain, &markers.domain),
            (Layer::Application, &markers.application),
            (Layer::Infrastructure, &markers.infrastructure),
            (Layer::Cli, &markers.cli),
            (Layer::Tests, &markers.test),
        ]
        .into_iter()
        .filter(|(_, marker)| !marker.trim().is_empty())
        .map(|(layer, marker)| (layer, marker.to_lowercase()))
        .collect();

        Self { rules }
    }

    pub fn layer_of(&self, t: &TypeModel) -> Layer {
        self.classify_namespace(&t.namespace)
    }

    pub fn classify_namespace(&self, namespace: &str) -> Layer {
        let ns = namespace.to_lowercase();
        self.rules
            .iter()
            .find(|(_, marker)| ns.contains(marker.as_str()))
            .map(|(layer, _)| *layer)
            .unwrap_or(Layer::Other)
    }
}

impl Default for LayerClassifier {
    fn default() -> Self {
        Self::new(&LayerMarkers::default())
    }
}
