//! Layered lint configuration.
//!
//! A configuration is an ordered list of [`Layer`]s. Each layer is scoped by
//! glob patterns and carries rule settings, language options, settings and
//! plugins. [`resolve`] merges every layer that applies to a path, later
//! layers winning, into an [`EffectiveConfig`].

pub mod catalog;
pub mod config;
pub mod error;
pub mod glob;
pub mod presets;
pub mod registry;
pub mod resolver;
pub mod rule;
pub mod shape;
pub mod style;

pub use config::{ConfigStore, Layer, LayerBuilder, LayerObject};
pub use error::{ConfigError, RuleError, StyleError};
pub use glob::{matches, PatternSet};
pub use registry::RuleRegistry;
pub use resolver::{is_ignored, resolve, EffectiveConfig};
pub use rule::{RuleLevel, RuleSetting};
pub use shape::Shape;
pub use style::{StyleConfig, StyleOptions};
