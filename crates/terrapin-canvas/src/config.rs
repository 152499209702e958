//! Session configuration loader.
//!
//! Reads `terrapin.toml` and deserializes it into [`SessionConfig`]. Falls
//! back to defaults when the file is missing or malformed; a broken config
//! should never keep the user from drawing.

use std::path::Path;

use terrapin_types::config::SessionConfig;

/// Load session configuration from `path`.
///
/// - If the file does not exist, returns [`SessionConfig::default()`].
/// - If the file exists but cannot be read or parsed, logs a warning and
///   returns the default.
/// - Otherwise returns the parsed config.
pub fn load_config(path: &Path) -> SessionConfig {
    let content = match std::fs::read_to_string(path) {
        Ok(content) => content,
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
            tracing::debug!("No config found at {}, using defaults", path.display());
            return SessionConfig::default();
        }
        Err(err) => {
            tracing::warn!("Failed to read {}: {err}, using defaults", path.display());
            return SessionConfig::default();
        }
    };

    match toml::from_str::<SessionConfig>(&content) {
        Ok(config) => config,
        Err(err) => {
            tracing::warn!("Failed to parse {}: {err}, using defaults", path.display());
            SessionConfig::default()
        }
    }
}
