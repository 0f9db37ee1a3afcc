//! Builds plain domain values out of the registry's qualified values.

use crate::error::Result;
use crate::qualifier::{Qualifier, ValueRegistry};
use std::any::Any;

/// A value holder wrapping one qualified string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Info {
  text: String,
}

impl Info {
  pub fn new(text: impl Into<String>) -> Self {
    Self { text: text.into() }
  }

  pub fn text(&self) -> &str {
    &self.text
  }
}

/// Read-only view over a `ValueRegistry` handed to binding constructors.
///
/// Every method is a pure lookup; calling it twice with the same qualifier
/// yields equal results.
#[derive(Clone, Copy)]
pub struct InstanceFactory<'a> {
  registry: &'a ValueRegistry,
}

impl<'a> InstanceFactory<'a> {
  pub fn new(registry: &'a ValueRegistry) -> Self {
    Self { registry }
  }

  /// Builds an `Info` from the string registered under `qualifier`.
  pub fn build(&self, qualifier: &Qualifier) -> Result<Info> {
    self.registry.get::<String>(qualifier).map(Info::new)
  }

  /// Typed access for constructors that take inputs other than strings.
  pub fn value<T: Any>(&self, qualifier: &Qualifier) -> Result<&'a T> {
    self.registry.get::<T>(qualifier)
  }
}
