use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::Path;

#[derive(Debug, Deserialize, Default)]
#[serde(default)]
pub struct FileConfig {
    /// Credential hasher to use: "argon2" (default) or "test_fast" when the
    /// test-fast-hasher feature is enabled.
    pub hasher: Option<String>,

    /// Whether to load the bundled sample users, projects and stories.
    pub seed_sample_data: Option<bool>,
}

impl FileConfig {
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {:?}", path))?;
        toml::from_str(&content).with_context(|| format!("Failed to parse config file: {:?}", path))
    }
}
