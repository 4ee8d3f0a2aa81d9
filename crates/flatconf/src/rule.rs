use serde::ser::{Serialize, SerializeSeq, Serializer};
use serde_json::Value;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, serde::Serialize)]
#[serde(rename_all = "lowercase")]
pub enum RuleLevel {
    Off,
    Warn,
    Error,
}

impl RuleLevel {
    /// Accepts the named levels and their numeric forms (`0`, `1`, `2`).
    pub fn from_value(value: &Value) -> Option<Self> {
        match value {
            Value::String(text) => match text.as_str() {
                "off" => Some(RuleLevel::Off),
                "warn" | "warning" => Some(RuleLevel::Warn),
                "error" => Some(RuleLevel::Error),
                "0" => Some(RuleLevel::Off),
                "1" => Some(RuleLevel::Warn),
                "2" => Some(RuleLevel::Error),
                _ => None,
            },
            Value::Number(num) => match num.as_i64()? {
                0 => Some(RuleLevel::Off),
                1 => Some(RuleLevel::Warn),
                2 => Some(RuleLevel::Error),
                _ => None,
            },
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            RuleLevel::Off => "off",
            RuleLevel::Warn => "warn",
            RuleLevel::Error => "error",
        }
    }
}

/// A rule's severity plus the positional options that follow it.
///
/// `"error"` has no options; `["error", { "max": 300 }]` has one.
#[derive(Debug, Clone, PartialEq)]
pub struct RuleSetting {
    pub level: RuleLevel,
    pub options: Vec<Value>,
}

impl RuleSetting {
    pub fn new(level: RuleLevel) -> Self {
        Self {
            level,
            options: Vec::new(),
        }
    }

    pub fn off() -> Self {
        Self::new(RuleLevel::Off)
    }

    pub fn warn() -> Self {
        Self::new(RuleLevel::Warn)
    }

    pub fn error() -> Self {
        Self::new(RuleLevel::Error)
    }

    pub fn with_option(mut self, option: Value) -> Self {
        self.options.push(option);
        self
    }

    pub fn is_enabled(&self) -> bool {
        self.level != RuleLevel::Off
    }

    /// Parses either a bare level or an array whose head is the level.
    pub fn from_value(value: &Value) -> Option<Self> {
        match value {
            Value::Array(items) => {
                let (head, options) = items.split_first()?;
                Some(Self {
                    level: RuleLevel::from_value(head)?,
                    options: options.to_vec(),
                })
            }
            other => RuleLevel::from_value(other).map(Self::new),
        }
    }
}

impl Serialize for RuleSetting {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        if self.options.is_empty() {
            return self.level.serialize(serializer);
        }

        let mut seq = serializer.serialize_seq(Some(self.options.len() + 1))?;
        seq.serialize_element(&self.level)?;
        for option in &self.options {
            seq.serialize_element(option)?;
        }
        seq.end()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn parses_levels() {
        assert_eq!(RuleLevel::from_value(&json!("off")), Some(RuleLevel::Off));
        assert_eq!(RuleLevel::from_value(&json!("warning")), Some(RuleLevel::Warn));
        assert_eq!(RuleLevel::from_value(&json!(2)), Some(RuleLevel::Error));
        assert_eq!(RuleLevel::from_value(&json!("1")), Some(RuleLevel::Warn));
        assert_eq!(RuleLevel::from_value(&json!(3)), None);
        assert_eq!(RuleLevel::from_value(&json!("fatal")), None);
        assert_eq!(RuleLevel::from_value(&json!(true)), None);
    }

    #[test]
    fn parses_settings_with_options() {
        let setting =
            RuleSetting::from_value(&json!(["error", { "max": 300 }, { "x": true }])).unwrap();
        assert_eq!(setting.level, RuleLevel::Error);
        assert_eq!(setting.options, vec![json!({ "max": 300 }), json!({ "x": true })]);

        assert_eq!(
            RuleSetting::from_value(&json!(["warn"])),
            Some(RuleSetting::warn())
        );
        assert_eq!(RuleSetting::from_value(&json!([])), None);
        assert_eq!(RuleSetting::from_value(&json!([{ "max": 1 }])), None);
    }

    #[test]
    fn serializes_in_config_form() {
        assert_eq!(serde_json::to_value(RuleSetting::off()).unwrap(), json!("off"));
        assert_eq!(
            serde_json::to_value(RuleSetting::error().with_option(json!(10))).unwrap(),
            json!(["error", 10])
        );
    }
}
