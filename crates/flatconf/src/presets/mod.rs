//! Built-in layer lists.
//!
//! `base` targets generic TypeScript/JavaScript projects, `node` server-side
//! code, and `nextjs` React applications. All three start from
//! `recommended`.

mod base;
mod nextjs;
mod node;
mod recommended;

use serde_json::{json, Map, Value};

use crate::{
    config::{Layer, LayerObject},
    error::ConfigError,
    registry::RuleRegistry,
};

const PRESETS: &[&str] = &["recommended", "base", "node", "nextjs"];

pub fn names() -> &'static [&'static str] {
    PRESETS
}

/// The raw layer objects of a preset, in order.
pub fn preset(name: &str) -> Option<Vec<LayerObject>> {
    match name {
        "recommended" => Some(vec![recommended::layer()]),
        "base" => Some(base::layers()),
        "node" => Some(node::layers()),
        "nextjs" => Some(nextjs::layers()),
        _ => None,
    }
}

/// The validated layers of a preset.
pub fn preset_layers(name: &str, registry: &RuleRegistry) -> Result<Vec<Layer>, ConfigError> {
    preset(name)
        .ok_or_else(|| ConfigError::UnknownPreset(name.to_string()))?
        .into_iter()
        .map(|object| Layer::new(object, registry))
        .collect()
}

fn object(value: Value) -> Map<String, Value> {
    match value {
        Value::Object(map) => map,
        _ => Map::new(),
    }
}

fn strings(values: &[&str]) -> Vec<String> {
    values.iter().map(|value| value.to_string()).collect()
}

fn merged(parts: impl IntoIterator<Item = Map<String, Value>>) -> Map<String, Value> {
    parts.into_iter().flatten().collect()
}

const TS_FILES: &[&str] = &["**/*.{ts,tsx}"];

const TS_PARSER: &str = "@typescript-eslint/parser";

const TS_PLUGIN: &str = "@typescript-eslint";

/// Build output, dependencies and tool config files shared by every preset.
const COMMON_IGNORES: &[&str] = &[
    "**/node_modules/**",
    "**/dist/**",
    "**/build/**",
    "**/.next/**",
    "**/coverage/**",
    "**/scripts/**",
    "**/*.config.js",
    "**/*.config.mjs",
    "**/*.config.cjs",
    "eslint.config.*",
    "prettier.config.*",
];

fn ignores_layer(name: &str, extra: &[&str]) -> LayerObject {
    let mut ignores = strings(COMMON_IGNORES);
    ignores.extend(strings(extra));
    LayerObject {
        name: Some(name.to_string()),
        ignores,
        ..Default::default()
    }
}

fn browser_globals() -> Map<String, Value> {
    object(json!({
        "window": "readonly",
        "document": "readonly",
        "navigator": "readonly",
        "console": "readonly",
    }))
}

fn node_globals() -> Map<String, Value> {
    object(json!({
        "process": "readonly",
        "__dirname": "readonly",
        "__filename": "readonly",
        "Buffer": "readonly",
        "global": "readonly",
        "module": "readonly",
        "require": "readonly",
        "exports": "readonly",
    }))
}

fn es2021_globals() -> Map<String, Value> {
    object(json!({
        "Promise": "readonly",
        "Symbol": "readonly",
    }))
}

fn typescript_parser_options(extra: Map<String, Value>) -> Value {
    let mut options = object(json!({
        "ecmaVersion": "latest",
        "sourceType": "module",
        "project": true,
    }));
    options.extend(extra);
    Value::Object(options)
}

fn unused_vars_ignoring_underscore() -> Value {
    json!(["error", { "argsIgnorePattern": "^_", "varsIgnorePattern": "^_" }])
}

/// Type-aware rules every TypeScript layer enables.
fn typescript_rules() -> Map<String, Value> {
    object(json!({
        "@typescript-eslint/no-explicit-any": "error",
        "@typescript-eslint/no-floating-promises": "error",
        "@typescript-eslint/no-misused-promises": "error",
        "@typescript-eslint/await-thenable": "error",
        "@typescript-eslint/no-unnecessary-type-assertion": "error",
        "@typescript-eslint/prefer-optional-chain": "error",
        "@typescript-eslint/consistent-type-imports": ["error", { "prefer": "type-imports" }],
    }))
}

fn size_limits(max_function_lines: u32, max_complexity: u32) -> Map<String, Value> {
    object(json!({
        "max-lines": ["error", { "max": 300, "skipBlankLines": true, "skipComments": true }],
        "max-lines-per-function": [
            "error",
            { "max": max_function_lines, "skipBlankLines": true, "skipComments": true }
        ],
        "complexity": ["error", max_complexity],
        "max-classes-per-file": ["error", 2],
        "camelcase": ["error", { "properties": "never", "ignoreDestructuring": false }],
    }))
}

fn code_quality_rules() -> Map<String, Value> {
    object(json!({
        "no-debugger": "error",
        "no-var": "error",
        "prefer-const": "error",
        "prefer-template": "error",
        "prefer-arrow-callback": "error",
        "prefer-spread": "error",
        "prefer-rest-params": "error",
        "no-param-reassign": "error",
    }))
}

fn magic_numbers(ignore: &[i64]) -> Value {
    json!([
        "warn",
        { "ignore": ignore, "ignoreArrayIndexes": true, "enforceConst": true }
    ])
}

fn console_warn_and_error_only() -> Value {
    json!(["warn", { "allow": ["warn", "error"] }])
}

fn error_handling_rules() -> Map<String, Value> {
    object(json!({
        "no-throw-literal": "error",
        "prefer-promise-reject-errors": "error",
    }))
}

fn best_practice_rules() -> Map<String, Value> {
    object(json!({
        "eqeqeq": ["error", "always"],
        "curly": ["error", "all"],
        "no-eval": "error",
        "no-implied-eval": "error",
        "no-return-await": "error",
        "no-async-promise-executor": "error",
    }))
}

fn code_style_rules() -> Map<String, Value> {
    object(json!({
        "no-duplicate-imports": "error",
        "no-useless-rename": "error",
        "object-shorthand": ["error", "always"],
        "prefer-destructuring": [
            "error",
            { "array": true, "object": true },
            { "enforceForRenamedProperties": false }
        ],
        "no-restricted-syntax": [
            "error",
            {
                "selector": "ForInStatement",
                "message": "for..in loops iterate over the entire prototype chain, which is \
                    virtually never what you want. Use Object.{keys,values,entries}, \
                    and iterate over the resulting array."
            }
        ],
    }))
}

/// Layer for plain JavaScript files, which skip the TypeScript parser.
fn javascript_layer(
    name: &str,
    files: &[&str],
    language_options: Map<String, Value>,
    rules: Map<String, Value>,
) -> LayerObject {
    let mut options = object(json!({
        "ecmaVersion": "latest",
        "sourceType": "module",
    }));
    options.extend(language_options);
    LayerObject {
        name: Some(name.to_string()),
        files: Some(strings(files)),
        language_options: options,
        rules,
        ..Default::default()
    }
}
