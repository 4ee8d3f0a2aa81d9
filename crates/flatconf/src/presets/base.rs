use serde_json::{json, Value};

use super::*;

pub(super) fn layers() -> Vec<LayerObject> {
    vec![
        recommended::layer(),
        ignores_layer(
            "flatconf/base/ignores",
            &[
                "**/.docusaurus/**",
                "**/.expo/**",
                "**/android/**",
                "**/ios/**",
                "**/*.config.ts",
                "**/metro.config.js",
                "**/babel.config.js",
            ],
        ),
        typescript_layer(),
        javascript_layer(
            "flatconf/base/javascript",
            &["**/*.{js,mjs,cjs}"],
            object(json!({ "globals": Value::Object(globals()) })),
            object(json!({ "no-magic-numbers": "off" })),
        ),
    ]
}

fn globals() -> Map<String, Value> {
    merged([browser_globals(), es2021_globals(), node_globals()])
}

fn typescript_layer() -> LayerObject {
    let rules = merged([
        object(json!({
            "@typescript-eslint/explicit-function-return-type": [
                "error",
                {
                    "allowExpressions": false,
                    "allowTypedFunctionExpressions": true,
                    "allowHigherOrderFunctions": true
                }
            ],
            "@typescript-eslint/no-unused-vars": unused_vars_ignoring_underscore(),
            "@typescript-eslint/prefer-nullish-coalescing": "error",
        })),
        typescript_rules(),
        size_limits(50, 10),
        code_quality_rules(),
        object(json!({
            "no-console": console_warn_and_error_only(),
            "no-alert": "error",
            "no-magic-numbers": magic_numbers(&[0, 1, -1]),
            "require-await": "error",
            "sort-imports": [
                "error",
                {
                    "ignoreCase": false,
                    "ignoreDeclarationSort": true,
                    "ignoreMemberSort": false,
                    "memberSyntaxSortOrder": ["none", "all", "multiple", "single"],
                    "allowSeparatedGroups": true
                }
            ],
        })),
        error_handling_rules(),
        best_practice_rules(),
        code_style_rules(),
    ]);

    LayerObject {
        name: Some("flatconf/base/typescript".to_string()),
        files: Some(strings(TS_FILES)),
        language_options: object(json!({
            "parser": TS_PARSER,
            "parserOptions": typescript_parser_options(Map::new()),
            "globals": Value::Object(globals()),
        })),
        plugins: strings(&[TS_PLUGIN]),
        rules,
        ..Default::default()
    }
}
