use shared_types::ShellConfig;
use std::path::PathBuf;
use std::sync::OnceLock;

static CONFIG: OnceLock<ShellConfig> = OnceLock::new();

/// Default config file, relative to the working directory.
const CONFIG_PATH: &str = "config.toml";

/// Environment variable overriding [`CONFIG_PATH`].
pub const CONFIG_ENV: &str = "EDUMAP_CONFIG";

/// Parse a config file body. Unknown keys are ignored, missing ones default.
pub fn parse_config(contents: &str) -> Result<ShellConfig, toml::de::Error> {
    toml::from_str(contents)
}

fn config_path() -> PathBuf {
    std::env::var_os(CONFIG_ENV)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(CONFIG_PATH))
}

/// Read the config file into a fresh [`ShellConfig`].
///
/// Missing or unparseable files fall back to defaults.
pub fn read_config() -> ShellConfig {
    if let Err(e) = dotenvy::dotenv() {
        tracing::trace!(error = %e, "no .env file loaded");
    }

    let path = config_path();
    match std::fs::read_to_string(&path) {
        Ok(contents) => match parse_config(&contents) {
            Ok(config) => {
                tracing::info!(path = %path.display(), ?config, "loaded shell config");
                config
            }
            Err(e) => {
                tracing::warn!(path = %path.display(), error = %e, "failed to parse config; using defaults");
                ShellConfig::default()
            }
        },
        Err(e) => {
            tracing::debug!(path = %path.display(), error = %e, "config not found; using defaults");
            ShellConfig::default()
        }
    }
}

/// Load the config once. Safe to call multiple times; only the first call
/// reads the file.
pub fn load_config() -> &'static ShellConfig {
    CONFIG.get_or_init(read_config)
}

/// The loaded config, loading it on first use.
pub fn config() -> &'static ShellConfig {
    CONFIG.get().unwrap_or_else(load_config)
}
