//! Binding rules of the decorator graph.
//!
//! Each decorator reads its own qualifier: `Hi` takes `@InfoStr1`, `Bye` takes
//! `@InfoStr2` and `Namaste` takes `@InfoStr3`, in both aggregates.

use crate::decorator::{ByeDecorator, Decorator, HiDecorator, NamasteDecorator};
use crate::error::Result;
use crate::factory::InstanceFactory;
use crate::qualifier::{Dependency, Qualifier, INFO_STR_1, INFO_STR_2, INFO_STR_3};
use crate::resolver::{BindingRule, Module};
use std::sync::Arc;

fn hi(factory: &InstanceFactory<'_>) -> Result<Arc<dyn Decorator>> {
  Ok(Arc::new(HiDecorator::new(factory.build(&INFO_STR_1)?)))
}

fn bye(factory: &InstanceFactory<'_>) -> Result<Arc<dyn Decorator>> {
  Ok(Arc::new(ByeDecorator::new(factory.build(&INFO_STR_2)?)))
}

fn namaste(factory: &InstanceFactory<'_>) -> Result<Arc<dyn Decorator>> {
  Ok(Arc::new(NamasteDecorator::new(factory.build(&INFO_STR_3)?)))
}

fn strings<const N: usize>(qualifiers: [Qualifier; N]) -> Vec<Dependency> {
  qualifiers.into_iter().map(Dependency::of::<String>).collect()
}

/// One rule contributing all three decorators to the set.
pub fn decorator_set_module() -> Module<dyn Decorator> {
  Module::new().bind(BindingRule::elements_into_set(
    "decorators",
    strings([INFO_STR_1, INFO_STR_2, INFO_STR_3]),
    |factory: &InstanceFactory<'_>| -> Result<Vec<Arc<dyn Decorator>>> {
      Ok(vec![hi(factory)?, bye(factory)?, namaste(factory)?])
    },
  ))
}

/// One keyed rule per decorator, keyed by the decorator's type name.
pub fn decorator_map_module() -> Module<dyn Decorator> {
  Module::new()
    .bind(BindingRule::into_map("HiDecorator", strings([INFO_STR_1]), hi))
    .bind(BindingRule::into_map("ByeDecorator", strings([INFO_STR_2]), bye))
    .bind(BindingRule::into_map(
      "NamasteDecorator",
      strings([INFO_STR_3]),
      namaste,
    ))
}

pub fn app_module() -> Module<dyn Decorator> {
  decorator_set_module().include(decorator_map_module())
}
