//! The consumer of a resolved decorator graph.

use crate::binding::{Aggregates, KeyedBindings};
use crate::decorator::Decorator;
use crate::error::Result;
use crate::modules::app_module;
use crate::qualifier::ValueRegistry;
use crate::resolver::ObjectGraph;
use once_cell::unsync::OnceCell;
use std::fmt;
use std::sync::Arc;

/// Holds both decorator aggregates of a built graph.
///
/// A `Consumer` only exists for a graph that built successfully, and nothing
/// can add bindings to it afterwards.
pub struct Consumer {
  decorators: Vec<Arc<dyn Decorator>>,
  decorators_by_key: KeyedBindings<dyn Decorator>,
  rendered: OnceCell<String>,
}

impl Consumer {
  /// Builds the default graph (demo values, [`app_module`]) and injects it.
  pub fn create() -> Result<Self> {
    let mut graph = ObjectGraph::new(ValueRegistry::with_defaults(), app_module());
    Self::from_graph(&mut graph)
  }

  pub fn from_graph(graph: &mut ObjectGraph<dyn Decorator>) -> Result<Self> {
    graph.build().map(Self::inject)
  }

  pub fn inject(aggregates: Aggregates<dyn Decorator>) -> Self {
    Self {
      decorators: aggregates.set,
      decorators_by_key: aggregates.map,
      rendered: OnceCell::new(),
    }
  }

  pub fn decorators(&self) -> &[Arc<dyn Decorator>] {
    &self.decorators
  }

  pub fn decorators_by_key(&self) -> &KeyedBindings<dyn Decorator> {
    &self.decorators_by_key
  }

  /// Renders the set on one line, in construction order, followed by one
  /// `key -> value` line per map entry in key-insertion order.
  pub fn present(&self) -> String {
    self.rendered.get_or_init(|| self.render()).clone()
  }

  fn render(&self) -> String {
    let mut out: String = self.decorators.iter().map(|d| d.decorate()).collect();
    out.push('\n');
    for (key, decorator) in self.decorators_by_key.iter() {
      out.push_str(&format!("{} -> {}\n", key, decorator.decorate().trim_start()));
    }
    out
  }
}

impl fmt::Debug for Consumer {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    let names: Vec<&str> = self.decorators.iter().map(|d| d.name()).collect();
    let entries: Vec<(&str, &str)> = self
      .decorators_by_key
      .iter()
      .map(|(key, d)| (key, d.name()))
      .collect();
    f.debug_struct("Consumer")
      .field("decorators", &names)
      .field("decorators_by_key", &entries)
      .finish()
  }
}
