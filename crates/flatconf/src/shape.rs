//! Structural descriptors for rule options.
//!
//! A shape only checks that values have the expected JSON type and that
//! required object fields are present. Object fields that a shape does not
//! declare are accepted.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum Shape {
    Any,
    Null,
    Bool,
    Number,
    String,
    Array {
        items: Box<Shape>,
    },
    Object {
        #[serde(default)]
        fields: BTreeMap<String, Field>,
    },
    /// Positional values; trailing positions may be omitted.
    Tuple {
        #[serde(default)]
        items: Vec<Shape>,
    },
    /// Any number of positional values sharing one shape.
    ///
    /// Below the top level of a rule's options this behaves like `Array`.
    Repeated {
        item: Box<Shape>,
    },
    OneOf {
        variants: Vec<Shape>,
    },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Field {
    pub shape: Shape,
    #[serde(default)]
    pub required: bool,
}

impl Shape {
    /// Shape of a rule that takes no options at all.
    pub fn no_options() -> Self {
        Shape::Tuple { items: Vec::new() }
    }

    pub fn array(items: Shape) -> Self {
        Shape::Array {
            items: Box::new(items),
        }
    }

    pub fn repeated(item: Shape) -> Self {
        Shape::Repeated {
            item: Box::new(item),
        }
    }

    pub fn tuple(items: impl IntoIterator<Item = Shape>) -> Self {
        Shape::Tuple {
            items: items.into_iter().collect(),
        }
    }

    pub fn one_of(variants: impl IntoIterator<Item = Shape>) -> Self {
        Shape::OneOf {
            variants: variants.into_iter().collect(),
        }
    }

    /// An object whose fields are all optional.
    pub fn object<'a>(fields: impl IntoIterator<Item = (&'a str, Shape)>) -> Self {
        Shape::Object {
            fields: fields
                .into_iter()
                .map(|(name, shape)| {
                    (
                        name.to_string(),
                        Field {
                            shape,
                            required: false,
                        },
                    )
                })
                .collect(),
        }
    }

    /// Marks an object field as required. Other shapes are returned unchanged.
    pub fn require(mut self, name: &str) -> Self {
        if let Shape::Object { fields } = &mut self {
            if let Some(field) = fields.get_mut(name) {
                field.required = true;
            }
        }
        self
    }

    /// Checks a rule's option list against this shape.
    ///
    /// `Tuple` and `Repeated` describe the list itself; any other shape
    /// describes a single optional value.
    pub fn check_options(&self, options: &[Value]) -> Result<(), String> {
        match self {
            Shape::Tuple { items } => check_positional(items, options, ""),
            Shape::Repeated { item } => options
                .iter()
                .enumerate()
                .try_for_each(|(index, value)| item.check_at(value, &format!("[{index}]"))),
            single => match options {
                [] => Ok(()),
                [value] => single.check_at(value, "[0]"),
                _ => Err(format!("expected at most 1 option, found {}", options.len())),
            },
        }
    }

    pub fn check(&self, value: &Value) -> Result<(), String> {
        self.check_at(value, "")
    }

    fn check_at(&self, value: &Value, at: &str) -> Result<(), String> {
        let ok = match self {
            Shape::Any => true,
            Shape::Null => value.is_null(),
            Shape::Bool => value.is_boolean(),
            Shape::Number => value.is_number(),
            Shape::String => value.is_string(),
            Shape::Array { items } | Shape::Repeated { item: items } => {
                let Some(values) = value.as_array() else {
                    return Err(mismatch(self, value, at));
                };
                return values.iter().enumerate().try_for_each(|(index, value)| {
                    items.check_at(value, &format!("{at}[{index}]"))
                });
            }
            Shape::Tuple { items } => {
                let Some(values) = value.as_array() else {
                    return Err(mismatch(self, value, at));
                };
                return check_positional(items, values, at);
            }
            Shape::Object { fields } => {
                let Some(object) = value.as_object() else {
                    return Err(mismatch(self, value, at));
                };
                for (name, field) in fields {
                    match object.get(name) {
                        Some(value) => field.shape.check_at(value, &format!("{at}.{name}"))?,
                        None if field.required => {
                            return Err(format!("{at}.{name}: missing required field"));
                        }
                        None => {}
                    }
                }
                return Ok(());
            }
            Shape::OneOf { variants } => variants
                .iter()
                .any(|variant| variant.check_at(value, at).is_ok()),
        };

        if ok {
            Ok(())
        } else {
            Err(mismatch(self, value, at))
        }
    }

    fn describe(&self) -> &'static str {
        match self {
            Shape::Any => "any value",
            Shape::Null => "null",
            Shape::Bool => "a boolean",
            Shape::Number => "a number",
            Shape::String => "a string",
            Shape::Array { .. } | Shape::Repeated { .. } | Shape::Tuple { .. } => "an array",
            Shape::Object { .. } => "an object",
            Shape::OneOf { .. } => "one of the allowed shapes",
        }
    }
}

fn check_positional(items: &[Shape], values: &[Value], at: &str) -> Result<(), String> {
    if values.len() > items.len() {
        return Err(format!(
            "{}: expected at most {} values, found {}",
            location(at),
            items.len(),
            values.len()
        ));
    }
    items
        .iter()
        .zip(values)
        .enumerate()
        .try_for_each(|(index, (shape, value))| shape.check_at(value, &format!("{at}[{index}]")))
}

fn mismatch(shape: &Shape, value: &Value, at: &str) -> String {
    format!(
        "{}: expected {}, found {}",
        location(at),
        shape.describe(),
        kind_of(value)
    )
}

fn location(at: &str) -> &str {
    if at.is_empty() {
        "options"
    } else {
        at
    }
}

fn kind_of(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
