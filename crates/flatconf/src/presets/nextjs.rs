use serde_json::{json, Value};

use super::*;

const REACT_PLUGINS: &[&str] = &["react", "react-hooks"];

pub(super) fn layers() -> Vec<LayerObject> {
    vec![
        recommended::layer(),
        ignores_layer(
            "flatconf/nextjs/ignores",
            &["**/components/ui/**", "next.config.ts"],
        ),
        typescript_layer(),
        javascript_layer(),
    ]
}

fn jsx_parser_options() -> Map<String, Value> {
    object(json!({ "ecmaFeatures": { "jsx": true } }))
}

fn react_settings() -> Map<String, Value> {
    object(json!({ "react": { "version": "detect" } }))
}

fn typescript_layer() -> LayerObject {
    let mut globals = browser_globals();
    globals.extend(object(json!({
        "fetch": "readonly",
        "Headers": "readonly",
        "Request": "readonly",
        "Response": "readonly",
        "setTimeout": "readonly",
        "clearTimeout": "readonly",
        "setInterval": "readonly",
        "clearInterval": "readonly",
        "queueMicrotask": "readonly",
        "crypto": "readonly",
    })));
    globals.extend(es2021_globals());
    globals.extend(node_globals());

    let rules = merged([
        object(json!({
            "@typescript-eslint/no-unused-vars": unused_vars_ignoring_underscore(),
            "@typescript-eslint/prefer-nullish-coalescing": "error",
        })),
        typescript_rules(),
        object(json!({
            // the new JSX transform does not need React in scope
            "react/react-in-jsx-scope": "off",
            "react/prop-types": "off",
            "react/jsx-uses-react": "off",
            "react/jsx-uses-vars": "error",
            "react/jsx-key": "error",
            "react/jsx-no-duplicate-props": "error",
            "react/jsx-no-undef": "error",
            "react/no-children-prop": "error",
            "react/no-danger-with-children": "error",
            "react/no-deprecated": "error",
            "react/no-direct-mutation-state": "error",
            "react/no-find-dom-node": "error",
            "react/no-is-mounted": "error",
            "react/no-render-return-value": "error",
            "react/no-string-refs": "error",
            "react/no-unescaped-entities": "error",
            "react/no-unknown-property": "error",
            "react/require-render-return": "error",
            "react/self-closing-comp": "error",
            "react-hooks/rules-of-hooks": "error",
            "react-hooks/exhaustive-deps": "warn",
            "react/jsx-filename-extension": ["error", { "extensions": [".jsx", ".tsx"] }],
        })),
        size_limits(200, 15),
        code_quality_rules(),
        object(json!({
            "no-console": console_warn_and_error_only(),
            "no-alert": "error",
            "no-magic-numbers": magic_numbers(&[0, 1, -1, 200, 404, 500]),
            "require-await": "error",
        })),
        error_handling_rules(),
        best_practice_rules(),
        code_style_rules(),
    ]);

    let mut plugins = strings(&[TS_PLUGIN]);
    plugins.extend(strings(REACT_PLUGINS));

    LayerObject {
        name: Some("flatconf/nextjs/typescript".to_string()),
        files: Some(strings(TS_FILES)),
        language_options: object(json!({
            "parser": TS_PARSER,
            "parserOptions": typescript_parser_options(jsx_parser_options()),
            "globals": Value::Object(globals),
        })),
        settings: react_settings(),
        plugins,
        rules,
        ..Default::default()
    }
}

fn javascript_layer() -> LayerObject {
    let globals = merged([
        browser_globals(),
        object(json!({ "fetch": "readonly" })),
        node_globals(),
        es2021_globals(),
    ]);

    let mut layer = super::javascript_layer(
        "flatconf/nextjs/javascript",
        &["**/*.{js,mjs,cjs,jsx}"],
        object(json!({
            "parserOptions": Value::Object(jsx_parser_options()),
            "globals": Value::Object(globals),
        })),
        object(json!({
            "no-magic-numbers": "off",
            "react/jsx-uses-react": "error",
            "react/jsx-uses-vars": "error",
        })),
    );
    layer.settings = react_settings();
    layer.plugins = strings(REACT_PLUGINS);
    layer
}
