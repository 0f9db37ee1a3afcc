//! Accumulates constructed implementations into the set and map aggregates.

use std::sync::Arc;
use tracing::debug;

/// A string-keyed aggregate that remembers the order keys were first inserted.
///
/// Inserting an existing key replaces its value in place; the key keeps the
/// position of its first insertion.
pub struct KeyedBindings<C: ?Sized> {
  entries: Vec<(String, Arc<C>)>,
}

impl<C: ?Sized> Default for KeyedBindings<C> {
  fn default() -> Self {
    Self {
      entries: Vec::new(),
    }
  }
}

impl<C: ?Sized> KeyedBindings<C> {
  pub fn new() -> Self {
    Self::default()
  }

  /// Inserts `instance` under `key`, returning the instance it replaced.
  pub fn insert(&mut self, key: impl Into<String>, instance: Arc<C>) -> Option<Arc<C>> {
    let key = key.into();
    match self.entries.iter_mut().find(|(k, _)| *k == key) {
      Some((_, slot)) => Some(std::mem::replace(slot, instance)),
      None => {
        self.entries.push((key, instance));
        None
      }
    }
  }

  pub fn get(&self, key: &str) -> Option<&Arc<C>> {
    self
      .entries
      .iter()
      .find(|(k, _)| k == key)
      .map(|(_, instance)| instance)
  }

  pub fn contains_key(&self, key: &str) -> bool {
    self.get(key).is_some()
  }

  pub fn keys(&self) -> impl Iterator<Item = &str> {
    self.entries.iter().map(|(k, _)| k.as_str())
  }

  /// Iterates entries in key-insertion order.
  pub fn iter(&self) -> impl Iterator<Item = (&str, &Arc<C>)> {
    self.entries.iter().map(|(k, v)| (k.as_str(), v))
  }

  pub fn len(&self) -> usize {
    self.entries.len()
  }

  pub fn is_empty(&self) -> bool {
    self.entries.is_empty()
  }
}

/// The finished, read-only result of a graph build.
pub struct Aggregates<C: ?Sized> {
  /// Every set contribution, in construction order. Duplicates are kept.
  pub set: Vec<Arc<C>>,
  pub map: KeyedBindings<C>,
}

/// Transient construction state for one capability.
///
/// Only the resolver writes to a table; it is consumed by [`BindingTable::finish`]
/// once every rule has been evaluated.
pub struct BindingTable<C: ?Sized> {
  set: Vec<Arc<C>>,
  map: KeyedBindings<C>,
}

impl<C: ?Sized> Default for BindingTable<C> {
  fn default() -> Self {
    Self {
      set: Vec::new(),
      map: KeyedBindings::new(),
    }
  }
}

impl<C: ?Sized> BindingTable<C> {
  pub fn new() -> Self {
    Self::default()
  }

  pub fn add_to_set(&mut self, instance: Arc<C>) {
    self.set.push(instance);
  }

  /// Last registration wins. Which one that is gets fixed when the graph is
  /// assembled, since rules are evaluated in declaration order.
  pub fn add_to_map(&mut self, key: impl Into<String>, instance: Arc<C>) {
    let key = key.into();
    if self.map.insert(key.clone(), instance).is_some() {
      debug!(key = %key, "map binding overwritten by a later rule");
    }
  }

  pub fn finish(self) -> Aggregates<C> {
    Aggregates {
      set: self.set,
      map: self.map,
    }
  }
}
