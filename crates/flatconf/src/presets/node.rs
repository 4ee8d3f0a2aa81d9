use serde_json::{json, Value};

use super::*;

pub(super) fn layers() -> Vec<LayerObject> {
    vec![
        recommended::layer(),
        ignores_layer("flatconf/node/ignores", &["**/seeds/**"]),
        typescript_layer(),
        test_layer(),
        javascript_layer(
            "flatconf/node/javascript",
            &["**/*.{js,mjs,cjs}"],
            object(json!({ "globals": Value::Object(globals()) })),
            object(json!({
                "no-console": "off",
                "no-magic-numbers": "off",
            })),
        ),
    ]
}

fn globals() -> Map<String, Value> {
    let mut globals = merged([node_globals(), es2021_globals()]);
    globals.insert("console".to_string(), json!("readonly"));
    globals
}

fn typescript_layer() -> LayerObject {
    let rules = merged([
        object(json!({
            "@typescript-eslint/explicit-function-return-type": [
                "error",
                {
                    "allowExpressions": true,
                    "allowTypedFunctionExpressions": true,
                    "allowHigherOrderFunctions": true
                }
            ],
            "@typescript-eslint/no-unused-vars": [
                "error",
                {
                    "args": "after-used",
                    "argsIgnorePattern": "^_",
                    "varsIgnorePattern": "^_",
                    "caughtErrors": "all",
                    "caughtErrorsIgnorePattern": "^_"
                }
            ],
        })),
        typescript_rules(),
        object(json!({
            "no-process-exit": "error",
            "no-process-env": "off",
            "no-sync": "warn",
        })),
        size_limits(200, 15),
        code_quality_rules(),
        object(json!({
            "no-console": "off",
            "no-magic-numbers": magic_numbers(&[0, 1, -1, 200, 201, 400, 401, 403, 404, 500]),
        })),
        error_handling_rules(),
        best_practice_rules(),
        code_style_rules(),
    ]);

    LayerObject {
        name: Some("flatconf/node/typescript".to_string()),
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

/// Jest globals for `*.spec.*` and `*.test.*` files.
fn test_layer() -> LayerObject {
    LayerObject {
        name: Some("flatconf/node/tests".to_string()),
        files: Some(strings(&[
            "**/*.spec.{js,ts,tsx}",
            "**/*.test.{js,ts,tsx}",
            "test/**/*.{js,ts,tsx}",
        ])),
        language_options: object(json!({
            "globals": {
                "describe": "readonly",
                "it": "readonly",
                "test": "readonly",
                "expect": "readonly",
                "beforeEach": "readonly",
                "afterEach": "readonly",
                "beforeAll": "readonly",
                "afterAll": "readonly",
                "jest": "readonly",
            }
        })),
        ..Default::default()
    }
}
