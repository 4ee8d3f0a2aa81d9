use std::{sync::Arc, thread};

use flatconf::{
    is_ignored, matches, resolve, ConfigError, Layer, RuleError, RuleLevel, RuleRegistry,
    RuleSetting, Shape,
};
use serde_json::json;

fn registry() -> RuleRegistry {
    let mut registry = RuleRegistry::new();
    registry.register("no-var", Shape::no_options()).unwrap();
    registry
        .register(
            "max-lines",
            Shape::one_of([Shape::Number, Shape::object([("max", Shape::Number)])]),
        )
        .unwrap();
    registry
}

fn layers(registry: &RuleRegistry) -> Vec<Layer> {
    vec![
        Layer::builder()
            .name("global ignores")
            .ignores(["**/node_modules/**", "dist/**"])
            .build(registry)
            .unwrap(),
        Layer::builder()
            .name("all")
            .rule("no-var", RuleSetting::warn())
            .rule("max-lines", RuleSetting::error().with_option(json!(300)))
            .build(registry)
            .unwrap(),
        Layer::builder()
            .name("typescript")
            .files(["**/*.{ts,tsx}"])
            .language_option("parser", json!("@typescript-eslint/parser"))
            .rule("max-lines", RuleSetting::error().with_option(json!({ "max": 100 })))
            .build(registry)
            .unwrap(),
    ]
}

#[test]
fn resolution_is_deterministic() {
    let registry = registry();
    let layers = layers(&registry);
    for path in ["src/a.ts", "src/a.js", "dist/a.js", "README.md"] {
        assert_eq!(resolve(&layers, path), resolve(&layers, path), "{path}");
    }
}

#[test]
fn later_layers_win() {
    let registry = registry();
    let layers = layers(&registry);

    let ts = resolve(&layers, "src/a.ts");
    let max_lines = ts.rule("max-lines").unwrap();
    assert_eq!(max_lines.level, RuleLevel::Error);
    assert_eq!(max_lines.options, vec![json!({ "max": 100 })]);
    assert_eq!(ts.severity("no-var"), Some(RuleLevel::Warn));
    assert_eq!(ts.language_options["parser"], json!("@typescript-eslint/parser"));

    let js = resolve(&layers, "src/a.js");
    assert_eq!(js.rule("max-lines").unwrap().options, vec![json!(300)]);
    assert!(js.language_options.is_empty());
}

#[test]
fn ignores_empty_the_result() {
    let registry = registry();
    let layers = layers(&registry);

    for path in ["packages/a/node_modules/b/c.ts", "dist/index.ts"] {
        let config = resolve(&layers, path);
        assert!(config.ignored, "{path}");
        assert!(config.rules.is_empty(), "{path}");
        assert!(is_ignored(&layers, path), "{path}");
    }
}

#[test]
fn ignores_in_later_layers_still_apply() {
    let registry = registry();
    let mut layers = layers(&registry);
    layers.push(
        Layer::builder()
            .ignores(["generated/**"])
            .build(&registry)
            .unwrap(),
    );

    let config = resolve(&layers, "generated/api.ts");
    assert!(config.ignored);
    assert!(config.rules.is_empty());
}

#[test]
fn glob_semantics() {
    assert!(matches("**/node_modules/**", "a/node_modules/b/c.js"));
    assert!(!matches("*.ts", "a/b.ts"));
    assert!(matches("*.ts", "b.ts"));
    assert!(matches("src/**/*.{ts,tsx}", "src/a/b/c.tsx"));
    assert!(!matches("*.TS", "b.ts"));
    assert!(!matches("src/{a,b", "src/a"));
}

#[test]
fn unknown_rules_are_rejected() {
    let err = Layer::builder()
        .rule("made-up-rule", RuleSetting::error())
        .build(&RuleRegistry::new())
        .unwrap_err();
    assert!(matches!(
        err,
        ConfigError::Rule(RuleError::UnknownRule(ref id)) if id == "made-up-rule"
    ));
}

#[test]
fn no_layers_means_no_rules() {
    let config = resolve(&[], "anything.ts");
    assert!(!config.ignored);
    assert!(config.rules.is_empty());
    assert_eq!(config.path, "anything.ts");
}

#[test]
fn registration_is_idempotent_for_identical_shapes() {
    let mut registry = RuleRegistry::new();
    let shape = Shape::object([("max", Shape::Number)]);
    assert!(registry.register("max-depth", shape.clone()).is_ok());
    assert!(registry.register("max-depth", shape).is_ok());
    assert_eq!(
        registry.register("max-depth", Shape::Number),
        Err(RuleError::ConflictingRegistration("max-depth".to_string()))
    );
}

#[test]
fn parallel_resolution_over_shared_layers() {
    let registry = registry();
    let layers = Arc::new(layers(&registry));
    let expected = resolve(&layers, "src/a.ts");

    let handles: Vec<_> = (0..4)
        .map(|_| {
            let layers = Arc::clone(&layers);
            thread::spawn(move || resolve(&layers, "src/a.ts"))
        })
        .collect();

    for handle in handles {
        assert_eq!(handle.join().unwrap(), expected);
    }
}
