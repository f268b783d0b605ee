use crate::errors::BridgeError;
use std::fs;
use std::path::Path;

#[derive(Deserialize, Debug, PartialEq)]
pub struct Config {
    pub auth_token: String,
    pub build_url: String,
    #[serde(default)]
    pub mappings: Vec<BuildMapping>,

    pub notif_url: String,
    pub notif_token: String,
    pub notif_user: String,
}

/// Human-readable build name (as it appears in trigger sources) to TeamCity buildTypeId.
#[derive(Deserialize, Debug, PartialEq)]
pub struct BuildMapping {
    #[serde(alias = "string")]
    pub name: String,
    pub id: String,
}

impl Config {
    /// First mapping wins if a name is listed twice.
    pub fn build_type_id(&self, build_name: &str) -> Option<&str> {
        self.mappings
            .iter()
            .find(|mapping| mapping.name == build_name)
            .map(|mapping| mapping.id.as_str())
    }
}

pub fn parse_config(contents: &str) -> Result<Config, toml::de::Error> {
    toml::from_str::<Config>(contents)
}

pub fn load_config(path: &Path) -> Result<Config, BridgeError> {
    let to_load_error = |reason: String| BridgeError::ConfigLoad {
        path: path.display().to_string(),
        reason: reason,
    };

    let contents = fs::read_to_string(path).map_err(|e| to_load_error(e.to_string()))?;
    let config = parse_config(&contents).map_err(|e| to_load_error(e.to_string()))?;
    debug!(
        "--Config--: Loaded {} build mapping(s) from {}",
        config.mappings.len(),
        path.display()
    );
    Ok(config)
}
