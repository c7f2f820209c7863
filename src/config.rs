use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;
use std::path::PathBuf;

/// Export configuration
#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct ExportConfig {
    /// rbook XML export to read
    #[serde(default = "default_input")]
    pub input: PathBuf,
    /// Directory the Markdown files are written to (created if missing)
    #[serde(default = "default_output_dir")]
    pub output_dir: PathBuf,
    /// Suffix colliding file names with `-2`, `-3`, ... instead of overwriting
    #[serde(default)]
    pub unique_filenames: bool,
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            input: default_input(),
            output_dir: default_output_dir(),
            unique_filenames: false,
        }
    }
}

// Default value functions
fn default_input() -> PathBuf {
    PathBuf::from("export-1427076510.xml")
}

fn default_output_dir() -> PathBuf {
    PathBuf::from("export")
}

/// Load configuration from file and environment variables
///
/// Configuration is loaded with the following priority (highest to lowest):
/// 1. Environment variables with RBOOK__ prefix
/// 2. rbook-export.toml file in current directory
/// 3. Default values
///
/// Environment variable format: RBOOK__OUTPUT_DIR
pub fn load_config() -> Result<ExportConfig, ConfigError> {
    let settings = Config::builder()
        // Optional config file (can be missing)
        .add_source(File::with_name("rbook-export").required(false))
        .add_source(
            Environment::with_prefix("RBOOK")
                .separator("__")
                .try_parsing(true),
        )
        .build()?;

    settings.try_deserialize()
}
