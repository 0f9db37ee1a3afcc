//! YAML configuration for the string values of a graph.
//!
//! ```yaml
//! values:
//!   InfoStr1: Kotlin
//!   InfoStr2: Scala
//! ```

use crate::error::{Error, Result};
use crate::qualifier::{Qualifier, ValueRegistry};
use serde::Deserialize;
use std::collections::BTreeMap;

#[derive(Debug, Deserialize, PartialEq, Default)]
#[serde(deny_unknown_fields)]
pub struct ValuesConfig {
  #[serde(default)]
  pub values: BTreeMap<String, String>,
}

impl ValuesConfig {
  pub fn from_yaml_str(source: &str) -> Result<Self> {
    serde_yaml::from_str(source).map_err(|e| Error::ConfigParse(e.to_string()))
  }

  /// Registers every configured value as a `String` under its qualifier.
  pub fn apply(&self, registry: &mut ValueRegistry) {
    for (name, value) in &self.values {
      registry.provide(Qualifier::owned(name.as_str()), value.clone());
    }
  }
}

impl ValueRegistry {
  pub fn from_yaml_str(source: &str) -> Result<Self> {
    let config = ValuesConfig::from_yaml_str(source)?;
    let mut registry = ValueRegistry::new();
    config.apply(&mut registry);
    Ok(registry)
  }
}
