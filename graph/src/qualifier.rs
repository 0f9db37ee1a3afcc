//! Qualifier tags and the registry of qualified values.

use crate::error::{Error, Result};
use std::any::{type_name, Any, TypeId};
use std::borrow::Cow;
use std::collections::HashMap;
use std::fmt;
use tracing::debug;

pub const INFO_STR_1: Qualifier = Qualifier::new("InfoStr1");
pub const INFO_STR_2: Qualifier = Qualifier::new("InfoStr2");
pub const INFO_STR_3: Qualifier = Qualifier::new("InfoStr3");

/// A tag that tells apart values of the same type.
///
/// Two `String` values registered under `InfoStr1` and `InfoStr2` are distinct
/// dependencies even though their types are identical.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Qualifier(Cow<'static, str>);

impl Qualifier {
  pub const fn new(name: &'static str) -> Self {
    Self(Cow::Borrowed(name))
  }

  pub fn owned(name: impl Into<String>) -> Self {
    Self(Cow::Owned(name.into()))
  }

  pub fn name(&self) -> &str {
    &self.0
  }
}

impl fmt::Display for Qualifier {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "@{}", self.0)
  }
}

/// A (value type, qualifier) pair. This is the lookup key of the registry and
/// the unit a binding rule declares as one of its inputs.
#[derive(Clone)]
pub struct Dependency {
  type_id: TypeId,
  type_name: &'static str,
  qualifier: Qualifier,
}

impl Dependency {
  pub fn of<T: Any>(qualifier: Qualifier) -> Self {
    Self {
      type_id: TypeId::of::<T>(),
      type_name: type_name::<T>(),
      qualifier,
    }
  }

  pub fn qualifier(&self) -> &Qualifier {
    &self.qualifier
  }

  pub fn type_name(&self) -> &'static str {
    self.type_name
  }

  pub(crate) fn missing(&self) -> Error {
    Error::UnknownQualifier {
      qualifier: self.qualifier.clone(),
      type_name: self.type_name,
    }
  }
}

// `type_name` is derived from `type_id`, so it takes no part in identity.
impl PartialEq for Dependency {
  fn eq(&self, other: &Self) -> bool {
    self.type_id == other.type_id && self.qualifier == other.qualifier
  }
}

impl Eq for Dependency {}

impl std::hash::Hash for Dependency {
  fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
    self.type_id.hash(state);
    self.qualifier.hash(state);
  }
}

impl fmt::Debug for Dependency {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "Dependency({} {})", self.qualifier, self.type_name)
  }
}

/// Holds the primitive configuration values of a graph, each under its qualifier.
///
/// Registration happens before the graph is built. Registering a second value
/// for the same type and qualifier replaces the first, so a key always resolves
/// to exactly one value.
#[derive(Default)]
pub struct ValueRegistry {
  values: HashMap<Dependency, Box<dyn Any + Send + Sync>>,
}

impl ValueRegistry {
  /// Creates a new, empty `ValueRegistry`.
  pub fn new() -> Self {
    Self::default()
  }

  /// A registry holding the three demo strings.
  pub fn with_defaults() -> Self {
    let mut registry = Self::new();
    registry.provide(INFO_STR_1, String::from("Kotlin"));
    registry.provide(INFO_STR_2, String::from("Scala"));
    registry.provide(INFO_STR_3, String::from("Java"));
    registry
  }

  pub fn provide<T: Any + Send + Sync>(&mut self, qualifier: Qualifier, value: T) {
    let key = Dependency::of::<T>(qualifier);
    debug!(dependency = ?key, "registering qualified value");
    self.values.insert(key, Box::new(value));
  }

  /// Looks up the value registered for `T` under `qualifier`.
  pub fn get<T: Any>(&self, qualifier: &Qualifier) -> Result<&T> {
    let key = Dependency::of::<T>(qualifier.clone());
    self
      .values
      .get(&key)
      .and_then(|value| value.downcast_ref::<T>())
      .ok_or_else(|| key.missing())
  }

  pub fn contains(&self, dependency: &Dependency) -> bool {
    self.values.contains_key(dependency)
  }

  /// Removes a registration, returning whether one existed.
  pub fn remove<T: Any>(&mut self, qualifier: &Qualifier) -> bool {
    self
      .values
      .remove(&Dependency::of::<T>(qualifier.clone()))
      .is_some()
  }

  pub fn len(&self) -> usize {
    self.values.len()
  }

  pub fn is_empty(&self) -> bool {
    self.values.is_empty()
  }
}
