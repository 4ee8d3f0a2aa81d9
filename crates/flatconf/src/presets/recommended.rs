use serde_json::Value;

use crate::config::LayerObject;

/// Core rules that report likely bugs.
const RECOMMENDED: &[&str] = &[
    "constructor-super",
    "for-direction",
    "getter-return",
    "no-async-promise-executor",
    "no-case-declarations",
    "no-class-assign",
    "no-compare-neg-zero",
    "no-cond-assign",
    "no-const-assign",
    "no-constant-binary-expression",
    "no-constant-condition",
    "no-control-regex",
    "no-debugger",
    "no-delete-var",
    "no-dupe-args",
    "no-dupe-class-members",
    "no-dupe-else-if",
    "no-dupe-keys",
    "no-duplicate-case",
    "no-empty",
    "no-empty-character-class",
    "no-empty-pattern",
    "no-empty-static-block",
    "no-ex-assign",
    "no-extra-boolean-cast",
    "no-fallthrough",
    "no-func-assign",
    "no-global-assign",
    "no-import-assign",
    "no-invalid-regexp",
    "no-irregular-whitespace",
    "no-loss-of-precision",
    "no-misleading-character-class",
    "no-new-native-nonconstructor",
    "no-nonoctal-decimal-escape",
    "no-obj-calls",
    "no-octal",
    "no-prototype-builtins",
    "no-redeclare",
    "no-regex-spaces",
    "no-self-assign",
    "no-setter-return",
    "no-shadow-restricted-names",
    "no-sparse-arrays",
    "no-this-before-super",
    "no-undef",
    "no-unexpected-multiline",
    "no-unreachable",
    "no-unsafe-finally",
    "no-unsafe-negation",
    "no-unsafe-optional-chaining",
    "no-unused-labels",
    "no-unused-private-class-members",
    "no-unused-vars",
    "no-useless-backreference",
    "no-useless-catch",
    "no-useless-escape",
    "no-with",
    "require-yield",
    "use-isnan",
    "valid-typeof",
];

/// Enables every recommended rule at `error`. Applies to every file.
pub(super) fn layer() -> LayerObject {
    LayerObject {
        name: Some("flatconf/recommended".to_string()),
        rules: RECOMMENDED
            .iter()
            .map(|id| (id.to_string(), Value::from("error")))
            .collect(),
        ..Default::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{registry::RuleRegistry, resolver::resolve, rule::RuleLevel, Layer};

    #[test]
    fn every_recommended_rule_is_an_error_everywhere() {
        let registry = RuleRegistry::with_builtin_rules();
        let layer = Layer::new(layer(), &registry).unwrap();
        assert_eq!(layer.rules().len(), RECOMMENDED.len());

        let config = resolve(&[layer], "lib/deep/index.mjs");
        for id in RECOMMENDED {
            assert_eq!(config.severity(id), Some(RuleLevel::Error), "{id}");
        }
    }
}
