use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::{error::ConfigError, glob::PatternSet, registry::RuleRegistry, rule::RuleSetting};

/// A layer as written in a config file, before validation.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct LayerObject {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub files: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub ignores: Vec<String>,
    #[serde(default, skip_serializing_if = "Map::is_empty")]
    pub language_options: Map<String, Value>,
    #[serde(default, skip_serializing_if = "Map::is_empty")]
    pub settings: Map<String, Value>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub plugins: Vec<String>,
    #[serde(default, skip_serializing_if = "Map::is_empty")]
    pub rules: Map<String, Value>,
}

/// A validated, immutable configuration layer.
///
/// A layer without `files` applies to every path. Its `ignores` remove
/// matching paths from every layer of the list it belongs to.
#[derive(Debug, Clone)]
pub struct Layer {
    name: Option<String>,
    files: Option<PatternSet>,
    ignores: PatternSet,
    language_options: Map<String, Value>,
    settings: Map<String, Value>,
    plugins: Vec<String>,
    rules: BTreeMap<String, RuleSetting>,
}

impl Layer {
    pub fn new(object: LayerObject, registry: &RuleRegistry) -> Result<Self, ConfigError> {
        let rules = parse_rules_map(object.rules)?;
        LayerParts {
            name: object.name,
            files: object.files,
            ignores: object.ignores,
            language_options: object.language_options,
            settings: object.settings,
            plugins: object.plugins,
            rules,
        }
        .validate(registry)
    }

    pub fn builder() -> LayerBuilder {
        LayerBuilder::default()
    }

    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// Whether this layer's file patterns select `path`.
    pub fn matches(&self, path: &str) -> bool {
        match &self.files {
            Some(files) => files.is_match(path),
            None => true,
        }
    }

    /// Whether one of this layer's ignore patterns matches `path`.
    pub fn ignores(&self, path: &str) -> bool {
        self.ignores.is_match(path)
    }

    /// A layer that carries only ignore patterns.
    pub fn is_global_ignore(&self) -> bool {
        self.files.is_none()
            && !self.ignores.is_empty()
            && self.rules.is_empty()
            && self.language_options.is_empty()
            && self.settings.is_empty()
            && self.plugins.is_empty()
    }

    pub fn file_patterns(&self) -> Option<&[String]> {
        self.files.as_ref().map(PatternSet::patterns)
    }

    pub fn ignore_patterns(&self) -> &[String] {
        self.ignores.patterns()
    }

    pub fn language_options(&self) -> &Map<String, Value> {
        &self.language_options
    }

    pub fn settings(&self) -> &Map<String, Value> {
        &self.settings
    }

    pub fn plugins(&self) -> &[String] {
        &self.plugins
    }

    pub fn rules(&self) -> &BTreeMap<String, RuleSetting> {
        &self.rules
    }

    fn label(&self) -> String {
        label(self.name.as_deref())
    }
}

/// Builds a [`Layer`] in code. `build` validates exactly like [`Layer::new`].
#[derive(Debug, Clone, Default)]
pub struct LayerBuilder {
    parts: LayerParts,
}

impl LayerBuilder {
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.parts.name = Some(name.into());
        self
    }

    pub fn files<I, S>(mut self, patterns: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.parts
            .files
            .get_or_insert_with(Vec::new)
            .extend(patterns.into_iter().map(Into::into));
        self
    }

    pub fn ignores<I, S>(mut self, patterns: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.parts
            .ignores
            .extend(patterns.into_iter().map(Into::into));
        self
    }

    pub fn language_option(mut self, key: impl Into<String>, value: Value) -> Self {
        self.parts.language_options.insert(key.into(), value);
        self
    }

    pub fn setting(mut self, key: impl Into<String>, value: Value) -> Self {
        self.parts.settings.insert(key.into(), value);
        self
    }

    pub fn plugin(mut self, name: impl Into<String>) -> Self {
        self.parts.plugins.push(name.into());
        self
    }

    pub fn rule(mut self, id: impl Into<String>, setting: RuleSetting) -> Self {
        self.parts.rules.insert(id.into(), setting);
        self
    }

    pub fn build(self, registry: &RuleRegistry) -> Result<Layer, ConfigError> {
        self.parts.validate(registry)
    }
}

#[derive(Debug, Clone, Default)]
struct LayerParts {
    name: Option<String>,
    files: Option<Vec<String>>,
    ignores: Vec<String>,
    language_options: Map<String, Value>,
    settings: Map<String, Value>,
    plugins: Vec<String>,
    rules: BTreeMap<String, RuleSetting>,
}

impl LayerParts {
    fn validate(self, registry: &RuleRegistry) -> Result<Layer, ConfigError> {
        let layer = label(self.name.as_deref());

        if matches!(&self.files, Some(files) if files.is_empty()) {
            return Err(ConfigError::InvalidLayer {
                layer,
                reason: "`files` must not be empty".to_string(),
            });
        }

        if self.files.is_none()
            && self.ignores.is_empty()
            && self.rules.is_empty()
            && self.language_options.is_empty()
            && self.settings.is_empty()
            && self.plugins.is_empty()
        {
            return Err(ConfigError::InvalidLayer {
                layer,
                reason: "layer has no patterns and nothing to apply".to_string(),
            });
        }

        for (id, setting) in &self.rules {
            registry.validate(id, setting)?;
        }

        let mut plugins = Vec::with_capacity(self.plugins.len());
        for plugin in self.plugins {
            if !plugins.contains(&plugin) {
                plugins.push(plugin);
            }
        }

        let layer = Layer {
            name: self.name,
            files: self.files.map(PatternSet::new),
            ignores: PatternSet::new(self.ignores),
            language_options: self.language_options,
            settings: self.settings,
            plugins,
            rules: self.rules,
        };
        tracing::trace!(layer = %layer.label(), rules = layer.rules.len(), "built layer");
        Ok(layer)
    }
}

fn label(name: Option<&str>) -> String {
    name.unwrap_or("<unnamed>").to_string()
}

fn parse_rules_map(
    rules: Map<String, Value>,
) -> Result<BTreeMap<String, RuleSetting>, ConfigError> {
    let mut parsed = BTreeMap::new();
    for (name, value) in rules {
        let setting = parse_rule_setting(&name, &value)?;
        parsed.insert(name, setting);
    }
    Ok(parsed)
}

fn parse_rule_setting(name: &str, value: &Value) -> Result<RuleSetting, ConfigError> {
    RuleSetting::from_value(value).ok_or_else(|| ConfigError::InvalidRuleSetting {
        rule: name.to_string(),
        value: value.clone(),
    })
}
