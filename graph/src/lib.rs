//! # Fibre Graph
//!
//! A small, statically wired dependency graph for Rust.
//!
//! Values are registered under qualifiers, binding rules describe how to build
//! implementations of a capability from those values, and a one-shot build
//! collects the implementations into two aggregates: a set (every contribution,
//! in construction order) and a string-keyed map (last registration for a key
//! wins). There is no reflection and no global container; the graph is an
//! ordinary value owned by whoever builds it.
//!
//! ## Core Concepts
//!
//! - **ValueRegistry**: qualified values, looked up by type and [`Qualifier`].
//! - **BindingRule** / **Module**: declared contributions, evaluated in order.
//! - **ObjectGraph**: runs the build exactly once, all-or-nothing.
//! - **Consumer**: owns the decorator aggregates and renders them.
//!
//! ## Quick Start
//!
//! ```
//! use fibre_graph::{
//!   BindingRule, Decorator, Dependency, HiDecorator, Module, ObjectGraph, Qualifier, ValueRegistry,
//! };
//! use std::sync::Arc;
//!
//! const GREETEE: Qualifier = Qualifier::new("Greetee");
//!
//! let mut registry = ValueRegistry::new();
//! registry.provide(GREETEE, String::from("Rust"));
//!
//! let module: Module<dyn Decorator> = Module::new().bind(BindingRule::into_map(
//!   "hi",
//!   [Dependency::of::<String>(GREETEE)],
//!   |factory| {
//!     let decorator: Arc<dyn Decorator> = Arc::new(HiDecorator::new(factory.build(&GREETEE)?));
//!     Ok(decorator)
//!   },
//! ));
//!
//! let aggregates = ObjectGraph::new(registry, module).build().unwrap();
//! assert_eq!(aggregates.map.get("hi").unwrap().decorate(), " Hi Rust!!");
//! ```

mod binding;
mod config;
mod consumer;
mod decorator;
pub mod error;
mod factory;
mod modules;
mod qualifier;
mod resolver;

pub use binding::{Aggregates, BindingTable, KeyedBindings};
pub use config::ValuesConfig;
pub use consumer::Consumer;
pub use decorator::{ByeDecorator, Decorator, HiDecorator, NamasteDecorator};
pub use error::{Error, Result};
pub use factory::{Info, InstanceFactory};
pub use modules::{app_module, decorator_map_module, decorator_set_module};
pub use qualifier::{Dependency, Qualifier, ValueRegistry, INFO_STR_1, INFO_STR_2, INFO_STR_3};
pub use resolver::{BindingRule, GraphState, Module, ObjectGraph};
