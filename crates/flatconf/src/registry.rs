use std::collections::HashMap;

use tracing::debug;

use crate::{catalog, error::RuleError, rule::RuleSetting, shape::Shape};

/// Known rule identifiers and the shape of their options.
#[derive(Debug, Clone, Default)]
pub struct RuleRegistry {
    rules: HashMap<String, Shape>,
}

impl RuleRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// A registry seeded with every rule the built-in presets reference.
    pub fn with_builtin_rules() -> Self {
        let rules = catalog::builtin_rules()
            .into_iter()
            .map(|(id, shape)| (id.to_string(), shape))
            .collect();
        Self { rules }
    }

    /// Registering the same id twice is fine as long as the shape is identical.
    pub fn register(&mut self, id: impl Into<String>, shape: Shape) -> Result<(), RuleError> {
        let id = id.into();
        match self.rules.get(&id) {
            Some(existing) if *existing == shape => Ok(()),
            Some(_) => Err(RuleError::ConflictingRegistration(id)),
            None => {
                debug!(rule = %id, "registered rule");
                self.rules.insert(id, shape);
                Ok(())
            }
        }
    }

    pub fn validate(&self, id: &str, setting: &RuleSetting) -> Result<(), RuleError> {
        let shape = self
            .rules
            .get(id)
            .ok_or_else(|| RuleError::UnknownRule(id.to_string()))?;

        shape
            .check_options(&setting.options)
            .map_err(|reason| RuleError::InvalidOptions {
                rule: id.to_string(),
                reason,
            })
    }

    pub fn contains(&self, id: &str) -> bool {
        self.rules.contains_key(id)
    }

    pub fn shape(&self, id: &str) -> Option<&Shape> {
        self.rules.get(id)
    }

    /// Rule identifiers in sorted order.
    pub fn ids(&self) -> Vec<&str> {
        let mut ids: Vec<&str> = self.rules.keys().map(String::as_str).collect();
        ids.sort_unstable();
        ids
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn registration_is_idempotent_for_identical_shapes() {
        let mut registry = RuleRegistry::new();
        let shape = Shape::object([("max", Shape::Number)]);

        assert_eq!(registry.register("max-lines", shape.clone()), Ok(()));
        assert_eq!(registry.register("max-lines", shape), Ok(()));
        assert_eq!(registry.len(), 1);

        assert_eq!(
            registry.register("max-lines", Shape::Number),
            Err(RuleError::ConflictingRegistration("max-lines".to_string()))
        );
        assert_eq!(
            registry.shape("max-lines"),
            Some(&Shape::object([("max", Shape::Number)]))
        );
    }

    #[test]
    fn validate_rejects_unknown_rules() {
        let registry = RuleRegistry::new();
        assert_eq!(
            registry.validate("made-up-rule", &RuleSetting::error()),
            Err(RuleError::UnknownRule("made-up-rule".to_string()))
        );
    }

    #[test]
    fn validate_checks_option_shape() {
        let mut registry = RuleRegistry::new();
        let shape = Shape::one_of([Shape::Number, Shape::object([("max", Shape::Number)])]);
        registry.register("complexity", shape).unwrap();

        assert!(registry
            .validate("complexity", &RuleSetting::error().with_option(json!(10)))
            .is_ok());
        assert!(registry.validate("complexity", &RuleSetting::off()).is_ok());

        let err = registry
            .validate("complexity", &RuleSetting::error().with_option(json!("ten")))
            .unwrap_err();
        assert!(matches!(err, RuleError::InvalidOptions { ref rule, .. } if rule == "complexity"));
    }

    #[test]
    fn ids_are_sorted() {
        let mut registry = RuleRegistry::new();
        registry.register("no-var", Shape::no_options()).unwrap();
        registry.register("eqeqeq", Shape::Any).unwrap();
        assert_eq!(registry.ids(), vec!["eqeqeq", "no-var"]);
        assert!(registry.contains("no-var"));
        assert!(!registry.is_empty());
    }

    #[test]
    fn builtin_rules_are_registered() {
        let registry = RuleRegistry::with_builtin_rules();
        assert!(registry.contains("no-console"));
        assert!(registry.contains("@typescript-eslint/no-explicit-any"));
        assert!(registry.contains("react-hooks/exhaustive-deps"));
        assert_eq!(registry.len(), catalog::builtin_rules().len());
    }
}
