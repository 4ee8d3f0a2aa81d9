//! Formatter options shared by every project that uses the presets.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::fs::File;
use std::io::BufReader;
use std::path::Path;
use tracing::debug;

use crate::{error::StyleError, glob};

/// Style file looked up in the working directory by the CLI.
pub const STYLE_FILE_NAME: &str = ".flatconf-stylerc.json";

fn default_semi() -> bool {
    true
}

fn default_single_quote() -> bool {
    false
}

fn default_print_width() -> usize {
    100
}

fn default_tab_width() -> usize {
    2
}

fn default_use_tabs() -> bool {
    false
}

fn default_bracket_spacing() -> bool {
    true
}

/// Markdown keeps its line breaks.
fn default_overrides() -> Vec<StyleOverride> {
    let mut options = Map::new();
    options.insert("proseWrap".to_string(), Value::from("preserve"));
    vec![StyleOverride {
        files: OverrideFiles::One("*.md".to_string()),
        options,
    }]
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum TrailingComma {
    All,
    #[default]
    Es5,
    None,
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum ArrowParens {
    #[default]
    Always,
    Avoid,
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum EndOfLine {
    #[default]
    Lf,
    Crlf,
    Cr,
    Auto,
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum ProseWrap {
    Always,
    Never,
    #[default]
    Preserve,
}

/// Resolved formatter options for one file.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct StyleOptions {
    /// Terminate statements with a semicolon.
    #[serde(default = "default_semi")]
    pub semi: bool,
    #[serde(default = "default_single_quote")]
    pub single_quote: bool,
    /// Line length the printer wraps at.
    #[serde(default = "default_print_width")]
    pub print_width: usize,
    #[serde(default = "default_tab_width")]
    pub tab_width: usize,
    #[serde(default = "default_use_tabs")]
    pub use_tabs: bool,
    #[serde(default = "TrailingComma::default")]
    pub trailing_comma: TrailingComma,
    #[serde(default = "default_bracket_spacing")]
    pub bracket_spacing: bool,
    #[serde(default = "ArrowParens::default")]
    pub arrow_parens: ArrowParens,
    #[serde(default = "EndOfLine::default")]
    pub end_of_line: EndOfLine,
    #[serde(default = "ProseWrap::default")]
    pub prose_wrap: ProseWrap,
}

impl Default for StyleOptions {
    fn default() -> Self {
        Self {
            semi: default_semi(),
            single_quote: default_single_quote(),
            print_width: default_print_width(),
            tab_width: default_tab_width(),
            use_tabs: default_use_tabs(),
            trailing_comma: TrailingComma::default(),
            bracket_spacing: default_bracket_spacing(),
            arrow_parens: ArrowParens::default(),
            end_of_line: EndOfLine::default(),
            prose_wrap: ProseWrap::default(),
        }
    }
}

/// `files` of an override: a single pattern or a list of them.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(untagged)]
pub enum OverrideFiles {
    One(String),
    Many(Vec<String>),
}

impl OverrideFiles {
    fn patterns(&self) -> &[String] {
        match self {
            OverrideFiles::One(pattern) => std::slice::from_ref(pattern),
            OverrideFiles::Many(patterns) => patterns,
        }
    }
}

/// Options applied on top of the base options for matching files.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct StyleOverride {
    pub files: OverrideFiles,
    #[serde(default)]
    pub options: Map<String, Value>,
}

impl StyleOverride {
    /// Patterns without a `/` are matched against the file name only.
    fn applies_to(&self, path: &str) -> bool {
        let path = glob::normalize_path(path);
        let file_name = path.rsplit('/').next().unwrap_or_default();
        self.files.patterns().iter().any(|pattern| {
            if pattern.contains('/') {
                glob::matches(pattern, &path)
            } else {
                glob::matches(pattern, file_name)
            }
        })
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct StyleConfig {
    #[serde(flatten)]
    options: StyleOptions,
    #[serde(default = "default_overrides")]
    overrides: Vec<StyleOverride>,
}

impl Default for StyleConfig {
    fn default() -> Self {
        Self {
            options: StyleOptions::default(),
            overrides: default_overrides(),
        }
    }
}

impl StyleConfig {
    /// Builds the config from an optional style file, then overlays a JSON
    /// string of settings that take priority over the file.
    pub fn new(
        settings_json: Option<&str>,
        config_path: Option<&Path>,
    ) -> Result<StyleConfig, StyleError> {
        let mut config = Map::new();

        if let Some(path) = config_path {
            let file = File::open(path).map_err(|_| {
                StyleError::FileNotFound(format!("Style file not found: {}", path.display()))
            })?;

            let reader = BufReader::new(file);

            let file_config: Map<_, _> = serde_json::from_reader(reader)
                .map_err(|e| StyleError::IllegalSettingFile(e.to_string()))?;

            debug!(path = %path.display(), "loaded style file");
            config.extend(file_config);
        }

        if let Some(settings_json) = settings_json {
            let settings: Map<_, _> = serde_json::from_str(settings_json).map_err(|e| {
                StyleError::InvalidSettings(format!("Setting json is invalid. {e}"))
            })?;

            config.extend(settings);
        }

        let style: StyleConfig = serde_json::from_value(Value::Object(config))
            .map_err(|e| StyleError::InvalidSettings(e.to_string()))?;

        // overrides are only applied per file, so check them up front
        for item in &style.overrides {
            apply(&style.options, item)?;
        }

        Ok(style)
    }

    pub fn options(&self) -> &StyleOptions {
        &self.options
    }

    pub fn overrides(&self) -> &[StyleOverride] {
        &self.overrides
    }

    /// The options for `path` after every matching override. Later overrides win.
    pub fn options_for(&self, path: &str) -> Result<StyleOptions, StyleError> {
        self.overrides
            .iter()
            .filter(|item| item.applies_to(path))
            .try_fold(self.options.clone(), |options, item| apply(&options, item))
    }
}

fn apply(options: &StyleOptions, item: &StyleOverride) -> Result<StyleOptions, StyleError> {
    let mut merged = match serde_json::to_value(options) {
        Ok(Value::Object(map)) => map,
        Ok(_) => Map::new(),
        Err(e) => return Err(StyleError::InvalidSettings(e.to_string())),
    };
    merged.extend(item.options.clone());

    serde_json::from_value(Value::Object(merged)).map_err(|e| {
        StyleError::InvalidSettings(format!(
            "override for {:?} is invalid. {e}",
            item.files.patterns()
        ))
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn style_file(content: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file
    }

    #[test]
    fn defaults() {
        let config = StyleConfig::new(None, None).unwrap();
        let options = config.options();
        assert!(options.semi);
        assert!(!options.single_quote);
        assert_eq!(options.print_width, 100);
        assert_eq!(options.tab_width, 2);
        assert!(!options.use_tabs);
        assert_eq!(options.trailing_comma, TrailingComma::Es5);
        assert!(options.bracket_spacing);
        assert_eq!(options.arrow_parens, ArrowParens::Always);
        assert_eq!(options.end_of_line, EndOfLine::Lf);
        assert_eq!(options.prose_wrap, ProseWrap::Preserve);
        assert_eq!(config.overrides().len(), 1);
        assert_eq!(config, StyleConfig::default());
    }

    #[test]
    fn settings_json_takes_priority_over_file() {
        let file = style_file(r#"{ "semi": false, "printWidth": 80 }"#);
        let config =
            StyleConfig::new(Some(r#"{ "printWidth": 120 }"#), Some(file.path())).unwrap();
        assert!(!config.options().semi);
        assert_eq!(config.options().print_width, 120);
    }

    #[test]
    fn missing_and_broken_files() {
        let missing = Path::new("/non-existent/style.json");
        let err = StyleConfig::new(None, Some(missing)).unwrap_err();
        assert!(matches!(err, StyleError::FileNotFound(_)));

        let file = style_file("{ semi: ");
        let err = StyleConfig::new(None, Some(file.path())).unwrap_err();
        assert!(matches!(err, StyleError::IllegalSettingFile(_)));
    }

    #[test]
    fn invalid_values() {
        let err = StyleConfig::new(Some(r#"{ "trailingComma": "sometimes" }"#), None).unwrap_err();
        assert!(matches!(err, StyleError::InvalidSettings(_)));

        let err = StyleConfig::new(Some("not json"), None).unwrap_err();
        assert!(matches!(err, StyleError::InvalidSettings(_)));

        let err = StyleConfig::new(
            Some(r#"{ "overrides": [{ "files": "*.ts", "options": { "tabWidth": "wide" } }] }"#),
            None,
        )
        .unwrap_err();
        assert!(matches!(err, StyleError::InvalidSettings(_)));
    }

    #[test]
    fn markdown_override_matches_file_name() {
        let config = StyleConfig::new(Some(r#"{ "proseWrap": "always" }"#), None).unwrap();
        assert_eq!(config.options_for("src/a.ts").unwrap().prose_wrap, ProseWrap::Always);
        assert_eq!(
            config.options_for("docs/readme.md").unwrap().prose_wrap,
            ProseWrap::Preserve
        );
    }

    #[test]
    fn later_overrides_win() {
        let config = StyleConfig::new(
            Some(
                r#"{
                    "overrides": [
                        { "files": ["*.ts", "*.tsx"], "options": { "printWidth": 80 } },
                        {
                            "files": "legacy/**/*.ts",
                            "options": { "printWidth": 120, "semi": false }
                        }
                    ]
                }"#,
            ),
            None,
        )
        .unwrap();

        let options = config.options_for("src/a.ts").unwrap();
        assert_eq!(options.print_width, 80);
        assert!(options.semi);

        let options = config.options_for("legacy/old/a.ts").unwrap();
        assert_eq!(options.print_width, 120);
        assert!(!options.semi);

        // path patterns are anchored at the root
        assert_eq!(config.options_for("src/legacy/a.ts").unwrap().print_width, 80);
        assert_eq!(config.options_for("a.js").unwrap().print_width, 100);
    }
}
