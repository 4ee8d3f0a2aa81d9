use std::{
    collections::BTreeMap,
    fs,
    path::{Path, PathBuf},
};

use serde_json::Value;
use tracing::debug;

use super::{Layer, LayerObject};
use crate::{error::ConfigError, presets, registry::RuleRegistry, shape::Shape};

pub const CONFIG_FILE_NAME: &str = "flatconf.config.json";

/// Prefix of a config entry that pulls in a built-in preset, e.g. `"flatconf:node"`.
pub const PRESET_PREFIX: &str = "flatconf:";

/// Find the configuration file starting from the given directory and traversing up.
pub fn find_config_file(start_dir: &Path) -> Option<PathBuf> {
    let mut current = start_dir;
    loop {
        let config_path = current.join(CONFIG_FILE_NAME);
        if config_path.exists() {
            debug!("Found config: {}", config_path.display());
            return Some(config_path);
        }

        match current.parent() {
            Some(parent) => current = parent,
            None => break,
        }
    }
    None
}

/// Read and validate the layer list stored at `path`.
pub fn load_layers(path: &Path, registry: &RuleRegistry) -> Result<Vec<Layer>, ConfigError> {
    let content =
        fs::read_to_string(path).map_err(|err| ConfigError::Io(path.to_path_buf(), err))?;
    parse_layers(&content, path, registry)
}

/// Parse a layer list. `origin` is only used in error messages.
///
/// The document is a JSON array. Each entry is either a layer object or a
/// preset reference, which is expanded in place.
pub fn parse_layers(
    content: &str,
    origin: &Path,
    registry: &RuleRegistry,
) -> Result<Vec<Layer>, ConfigError> {
    let entries: Vec<Value> =
        serde_json::from_str(content).map_err(|err| ConfigError::Json(origin.to_path_buf(), err))?;

    let mut layers = Vec::new();
    for (index, entry) in entries.into_iter().enumerate() {
        for object in expand_entry(entry, origin, index)? {
            layers.push(Layer::new(object, registry)?);
        }
    }

    debug!(path = %origin.display(), layers = layers.len(), "loaded layers");
    Ok(layers)
}

fn expand_entry(
    entry: Value,
    origin: &Path,
    index: usize,
) -> Result<Vec<LayerObject>, ConfigError> {
    match entry {
        Value::String(reference) => {
            let name = reference
                .strip_prefix(PRESET_PREFIX)
                .ok_or_else(|| ConfigError::UnknownPreset(reference.clone()))?;
            presets::preset(name).ok_or_else(|| ConfigError::UnknownPreset(reference.clone()))
        }
        Value::Object(_) => serde_json::from_value(entry)
            .map(|object| vec![object])
            .map_err(|err| ConfigError::InvalidEntry {
                path: origin.to_path_buf(),
                index,
                reason: err.to_string(),
            }),
        other => Err(ConfigError::InvalidEntry {
            path: origin.to_path_buf(),
            index,
            reason: format!("expected a layer object or preset name, found {other}"),
        }),
    }
}

/// Register the rules listed in a JSON catalog (`{ "rule-id": <shape> }`).
///
/// Returns the number of entries read.
pub fn load_rule_catalog(path: &Path, registry: &mut RuleRegistry) -> Result<usize, ConfigError> {
    let content =
        fs::read_to_string(path).map_err(|err| ConfigError::Io(path.to_path_buf(), err))?;
    let catalog: BTreeMap<String, Shape> =
        serde_json::from_str(&content).map_err(|err| ConfigError::Json(path.to_path_buf(), err))?;

    let count = catalog.len();
    for (id, shape) in catalog {
        registry.register(id, shape)?;
    }
    debug!(path = %path.display(), rules = count, "loaded rule catalog");
    Ok(count)
}
