use std::collections::BTreeMap;

use serde::Serialize;
use serde_json::{Map, Value};
use tracing::trace;

use crate::{
    config::Layer,
    glob::normalize_path,
    rule::{RuleLevel, RuleSetting},
};

/// The merged configuration that applies to one file.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EffectiveConfig {
    pub path: String,
    pub ignored: bool,
    pub language_options: Map<String, Value>,
    pub settings: Map<String, Value>,
    pub plugins: Vec<String>,
    pub rules: BTreeMap<String, RuleSetting>,
}

impl EffectiveConfig {
    fn empty(path: &str) -> Self {
        Self {
            path: path.to_string(),
            ..Default::default()
        }
    }

    pub fn rule(&self, id: &str) -> Option<&RuleSetting> {
        self.rules.get(id)
    }

    pub fn severity(&self, id: &str) -> Option<RuleLevel> {
        self.rules.get(id).map(|setting| setting.level)
    }

    /// Rules whose level is not `off`.
    pub fn enabled_rules(&self) -> impl Iterator<Item = (&str, &RuleSetting)> {
        self.rules
            .iter()
            .filter(|(_, setting)| setting.is_enabled())
            .map(|(id, setting)| (id.as_str(), setting))
    }

    /// Later layers replace earlier values key by key; nested objects are
    /// replaced whole.
    fn merge_layer(&mut self, layer: &Layer) {
        for (key, value) in layer.language_options() {
            self.language_options.insert(key.clone(), value.clone());
        }
        for (key, value) in layer.settings() {
            self.settings.insert(key.clone(), value.clone());
        }
        for plugin in layer.plugins() {
            if !self.plugins.contains(plugin) {
                self.plugins.push(plugin.clone());
            }
        }
        for (id, setting) in layer.rules() {
            self.rules.insert(id.clone(), setting.clone());
        }
    }
}

/// Whether any layer's ignore patterns match `path`.
pub fn is_ignored(layers: &[Layer], path: &str) -> bool {
    let path = normalize_path(path);
    layers.iter().any(|layer| layer.ignores(&path))
}

/// Computes the effective configuration of `path` from an ordered layer list.
///
/// An ignored path resolves to an empty configuration with `ignored` set.
/// A path no layer selects resolves to an empty configuration as well.
pub fn resolve(layers: &[Layer], path: &str) -> EffectiveConfig {
    let path = normalize_path(path);
    let mut config = EffectiveConfig::empty(&path);

    if layers.iter().any(|layer| layer.ignores(&path)) {
        trace!(%path, "path is ignored");
        config.ignored = true;
        return config;
    }

    for (index, layer) in layers.iter().enumerate() {
        if !layer.matches(&path) {
            continue;
        }
        trace!(%path, index, layer = layer.name().unwrap_or_default(), "applying layer");
        config.merge_layer(layer);
    }

    config
}
