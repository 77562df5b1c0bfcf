mod file_config;

pub use file_config::FileConfig;

use crate::user::CredentialHasher;
use anyhow::Result;

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub hasher: CredentialHasher,
    pub seed_sample_data: bool,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            hasher: CredentialHasher::Argon2,
            seed_sample_data: true,
        }
    }
}

impl AppConfig {
    /// Resolve configuration from an optional TOML file config; values not
    /// present in the file fall back to the defaults above.
    pub fn resolve(file_config: Option<FileConfig>) -> Result<Self> {
        let file = file_config.unwrap_or_default();
        let defaults = Self::default();

        let hasher = match file.hasher {
            Some(name) => name.parse()?,
            None => defaults.hasher,
        };
        let seed_sample_data = file.seed_sample_data.unwrap_or(defaults.seed_sample_data);

        Ok(Self {
            hasher,
            seed_sample_data,
        })
    }
}
