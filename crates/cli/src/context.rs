//! Application context

use scamguard_risk::{ClassifierConfig, EntropySource, RiskClassifier, RngEntropy};
use std::path::Path;

/// Shared state for CLI commands
pub struct AppContext {
    pub classifier: RiskClassifier,
}

impl AppContext {
    /// Build from an optional JSON config file, falling back to defaults
    pub fn new(config_path: Option<&Path>) -> Result<Self, anyhow::Error> {
        let config = match config_path {
            Some(path) => {
                let config = ClassifierConfig::from_file(path).map_err(|e| {
                    anyhow::anyhow!("Failed to load config {}: {}", path.display(), e)
                })?;
                tracing::info!(path = %path.display(), "Loaded classifier config");
                config
            }
            None => ClassifierConfig::default(),
        };
        Self::with_config(config)
    }

    pub fn with_config(config: ClassifierConfig) -> Result<Self, anyhow::Error> {
        Ok(Self {
            classifier: RiskClassifier::new(config)?,
        })
    }

    pub fn config(&self) -> &ClassifierConfig {
        self.classifier.config()
    }

    /// Seeded entropy when a seed is given, thread-local otherwise
    pub fn entropy(seed: Option<u64>) -> Box<dyn EntropySource> {
        match seed {
            Some(seed) => Box::new(RngEntropy::seeded(seed)),
            None => Box::new(RngEntropy::thread()),
        }
    }
}
