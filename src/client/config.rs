use std::fs;
use std::io::ErrorKind;
use std::path::PathBuf;

use crate::shared::config::ConfigFile;
use crate::shared::{ClientConfig, ConfigError};

/// Optional config file inside the data directory
pub const CONFIG_FILE: &str = "config.toml";

/// Default data directory: `<platform data dir>/rewatch`
pub fn default_data_dir() -> Option<PathBuf> {
    dirs::data_dir().map(|dir| dir.join("rewatch"))
}

/// Load the client configuration from the process environment
///
/// `REWATCH_HOME` picks the data directory; `REWATCH_API_URL` and
/// `REWATCH_JIKAN_URL` override whatever `config.toml` says.
pub fn load_config() -> Result<ClientConfig, ConfigError> {
    load_config_from(|name| std::env::var(name).ok())
}

/// Load the client configuration through an arbitrary variable lookup
pub fn load_config_from<F>(lookup: F) -> Result<ClientConfig, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    let data_dir = lookup("REWATCH_HOME")
        .filter(|dir| !dir.trim().is_empty())
        .map(PathBuf::from)
        .or_else(default_data_dir)
        .ok_or(ConfigError::MissingValue("REWATCH_HOME"))?;

    let mut builder = ClientConfig::builder().data_dir(&data_dir);
    if let Some(url) = lookup("REWATCH_API_URL") {
        builder = builder.api_url(url);
    }
    if let Some(url) = lookup("REWATCH_JIKAN_URL") {
        builder = builder.jikan_url(url);
    }

    let file_path = data_dir.join(CONFIG_FILE);
    match fs::read_to_string(&file_path) {
        Ok(text) => {
            tracing::debug!(path = %file_path.display(), "reading config file");
            builder = builder.merge_file(ConfigFile::parse(&text)?);
        }
        Err(e) if e.kind() == ErrorKind::NotFound => {}
        Err(e) => return Err(ConfigError::InvalidFile(e.to_string())),
    }

    builder.build()
}
