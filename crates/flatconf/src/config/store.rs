use std::path::{Path, PathBuf};

use crate::{
    error::ConfigError,
    registry::RuleRegistry,
    resolver::{self, EffectiveConfig},
};

use super::{loader, Layer};

/// An ordered layer list anchored at the directory its patterns are relative to.
#[derive(Debug, Clone)]
pub struct ConfigStore {
    root_dir: PathBuf,
    config_path: Option<PathBuf>,
    layers: Vec<Layer>,
}

impl ConfigStore {
    /// Loads `config_path` if given, otherwise the nearest config file at or
    /// above `root_dir`. Without any config file the store has no layers.
    ///
    /// Patterns of an explicit `config_path` stay relative to `root_dir`,
    /// wherever the file lives. A discovered file re-anchors the store at its
    /// own directory.
    pub fn new(
        root_dir: impl Into<PathBuf>,
        config_path: Option<PathBuf>,
        registry: &RuleRegistry,
    ) -> Result<Self, ConfigError> {
        let root_dir = root_dir.into();

        let (root_dir, config_path) = match config_path {
            Some(path) => (root_dir, Some(path)),
            None => match loader::find_config_file(&root_dir) {
                Some(found) => {
                    let base = found
                        .parent()
                        .map(Path::to_path_buf)
                        .unwrap_or_else(|| root_dir.clone());
                    (base, Some(found))
                }
                None => (root_dir, None),
            },
        };

        let layers = match &config_path {
            Some(path) => loader::load_layers(path, registry)?,
            None => Vec::new(),
        };

        Ok(Self {
            root_dir,
            config_path,
            layers,
        })
    }

    pub fn from_layers(root_dir: impl Into<PathBuf>, layers: Vec<Layer>) -> Self {
        Self {
            root_dir: root_dir.into(),
            config_path: None,
            layers,
        }
    }

    pub fn resolve(&self, file: &Path) -> EffectiveConfig {
        resolver::resolve(&self.layers, &self.relative_path(file))
    }

    pub fn is_ignored(&self, file: &Path) -> bool {
        resolver::is_ignored(&self.layers, &self.relative_path(file))
    }

    pub fn root_dir(&self) -> &Path {
        &self.root_dir
    }

    pub fn config_path(&self) -> Option<&Path> {
        self.config_path.as_deref()
    }

    pub fn layers(&self) -> &[Layer] {
        &self.layers
    }

    fn relative_path(&self, file: &Path) -> String {
        let rel_path = file.strip_prefix(&self.root_dir).unwrap_or(file);
        rel_path.to_string_lossy().into_owned()
    }
}
