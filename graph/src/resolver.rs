//! Binding rules, modules and the one-shot graph build.

use crate::binding::{Aggregates, BindingTable};
use crate::error::{Error, Result};
use crate::factory::InstanceFactory;
use crate::qualifier::{Dependency, ValueRegistry};
use std::any::type_name;
use std::fmt;
use std::sync::Arc;
use tracing::{debug, error, info};

type SetConstructor<C> = Box<dyn Fn(&InstanceFactory<'_>) -> Result<Vec<Arc<C>>>>;
type MapConstructor<C> = Box<dyn Fn(&InstanceFactory<'_>) -> Result<Arc<C>>>;

enum Contribution<C: ?Sized> {
  Set(SetConstructor<C>),
  Map { key: String, build: MapConstructor<C> },
}

/// A declarative instruction for constructing implementations of `C`.
///
/// A rule lists the qualified values it consumes so the resolver can check
/// them before anything is constructed.
pub struct BindingRule<C: ?Sized> {
  name: String,
  requires: Vec<Dependency>,
  contribution: Contribution<C>,
}

impl<C: ?Sized + 'static> BindingRule<C> {
  /// Contributes a single element to the set aggregate.
  pub fn into_set<F>(
    name: impl Into<String>,
    requires: impl IntoIterator<Item = Dependency>,
    build: F,
  ) -> Self
  where
    F: Fn(&InstanceFactory<'_>) -> Result<Arc<C>> + 'static,
  {
    Self {
      name: name.into(),
      requires: requires.into_iter().collect(),
      contribution: Contribution::Set(Box::new(
        move |factory: &InstanceFactory<'_>| -> Result<Vec<Arc<C>>> { Ok(vec![build(factory)?]) },
      )),
    }
  }

  /// Contributes every element `build` returns to the set aggregate.
  pub fn elements_into_set<F>(
    name: impl Into<String>,
    requires: impl IntoIterator<Item = Dependency>,
    build: F,
  ) -> Self
  where
    F: Fn(&InstanceFactory<'_>) -> Result<Vec<Arc<C>>> + 'static,
  {
    Self {
      name: name.into(),
      requires: requires.into_iter().collect(),
      contribution: Contribution::Set(Box::new(build)),
    }
  }

  /// Contributes one element to the map aggregate under `key`. The key doubles
  /// as the rule's name.
  pub fn into_map<F>(
    key: impl Into<String>,
    requires: impl IntoIterator<Item = Dependency>,
    build: F,
  ) -> Self
  where
    F: Fn(&InstanceFactory<'_>) -> Result<Arc<C>> + 'static,
  {
    let key = key.into();
    Self {
      name: key.clone(),
      requires: requires.into_iter().collect(),
      contribution: Contribution::Map {
        key,
        build: Box::new(build),
      },
    }
  }
}

impl<C: ?Sized> BindingRule<C> {
  pub fn name(&self) -> &str {
    &self.name
  }

  pub fn requires(&self) -> &[Dependency] {
    &self.requires
  }

  /// The map key, or `None` for set contributions.
  pub fn key(&self) -> Option<&str> {
    match &self.contribution {
      Contribution::Map { key, .. } => Some(key),
      Contribution::Set(_) => None,
    }
  }

  fn unresolved(&self, cause: Error) -> Error {
    Error::UnresolvedDependency {
      binding: self.name.clone(),
      capability: type_name::<C>(),
      source: Box::new(cause),
    }
  }
}

/// An ordered list of binding rules. Declaration order is evaluation order.
pub struct Module<C: ?Sized> {
  rules: Vec<BindingRule<C>>,
}

impl<C: ?Sized> Default for Module<C> {
  fn default() -> Self {
    Self { rules: Vec::new() }
  }
}

impl<C: ?Sized> Module<C> {
  pub fn new() -> Self {
    Self::default()
  }

  pub fn bind(mut self, rule: BindingRule<C>) -> Self {
    self.rules.push(rule);
    self
  }

  /// Appends every rule of `other` after the rules already declared.
  pub fn include(mut self, other: Module<C>) -> Self {
    self.rules.extend(other.rules);
    self
  }

  pub fn rules(&self) -> &[BindingRule<C>] {
    &self.rules
  }

  pub fn len(&self) -> usize {
    self.rules.len()
  }

  pub fn is_empty(&self) -> bool {
    self.rules.is_empty()
  }
}

/// Lifecycle of an [`ObjectGraph`]. `Built` and `Failed` are terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GraphState {
  Unbuilt,
  Building,
  Built,
  Failed,
}

impl fmt::Display for GraphState {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    let label = match self {
      GraphState::Unbuilt => "unbuilt",
      GraphState::Building => "building",
      GraphState::Built => "built",
      GraphState::Failed => "failed",
    };
    f.write_str(label)
  }
}

/// Owns the values and rules of one graph and evaluates them exactly once.
pub struct ObjectGraph<C: ?Sized> {
  registry: ValueRegistry,
  module: Module<C>,
  state: GraphState,
}

impl<C: ?Sized> ObjectGraph<C> {
  pub fn new(registry: ValueRegistry, module: Module<C>) -> Self {
    Self {
      registry,
      module,
      state: GraphState::Unbuilt,
    }
  }

  pub fn state(&self) -> GraphState {
    self.state
  }

  /// Evaluates every rule and returns both aggregates.
  ///
  /// The build is all-or-nothing: on the first failure the partially filled
  /// table is dropped and the graph moves to `Failed`. Only an `Unbuilt` graph
  /// can be built.
  pub fn build(&mut self) -> Result<Aggregates<C>> {
    if self.state != GraphState::Unbuilt {
      return Err(Error::InvalidState { state: self.state });
    }
    self.state = GraphState::Building;

    let outcome = self.resolve();
    match &outcome {
      Ok(aggregates) => {
        self.state = GraphState::Built;
        info!(
          capability = type_name::<C>(),
          set = aggregates.set.len(),
          map = aggregates.map.len(),
          "object graph built"
        );
      }
      Err(err) => {
        self.state = GraphState::Failed;
        error!(error = %err.diagnostic(), "object graph build failed");
      }
    }
    outcome
  }

  fn resolve(&self) -> Result<Aggregates<C>> {
    // Every declared input has to be present before anything is constructed.
    for rule in &self.module.rules {
      if let Some(missing) = rule.requires.iter().find(|dep| !self.registry.contains(dep)) {
        return Err(rule.unresolved(missing.missing()));
      }
    }

    let factory = InstanceFactory::new(&self.registry);
    let mut table = BindingTable::new();

    for rule in &self.module.rules {
      if let Contribution::Set(build) = &rule.contribution {
        debug!(binding = %rule.name, "evaluating set binding");
        for instance in build(&factory).map_err(|err| rule.unresolved(err))? {
          table.add_to_set(instance);
        }
      }
    }

    for rule in &self.module.rules {
      if let Contribution::Map { key, build } = &rule.contribution {
        debug!(binding = %rule.name, "evaluating map binding");
        let instance = build(&factory).map_err(|err| rule.unresolved(err))?;
        table.add_to_map(key.as_str(), instance);
      }
    }

    Ok(table.finish())
  }
}
