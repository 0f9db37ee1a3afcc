use fibre_graph::{
  BindingRule, ByeDecorator, Consumer, Decorator, Dependency, HiDecorator, InstanceFactory, Module,
  ObjectGraph, Qualifier, Result, ValueRegistry,
};
use std::sync::Arc;

const MORNING: Qualifier = Qualifier::new("Morning");
const EVENING: Qualifier = Qualifier::new("Evening");

fn greet(factory: &InstanceFactory<'_>) -> Result<Arc<dyn Decorator>> {
  Ok(Arc::new(HiDecorator::new(factory.build(&MORNING)?)))
}

fn farewell(factory: &InstanceFactory<'_>) -> Result<Arc<dyn Decorator>> {
  Ok(Arc::new(ByeDecorator::new(factory.build(&EVENING)?)))
}

fn main() {
  // --- Registration ---
  let mut registry = ValueRegistry::new();
  registry.provide(MORNING, String::from("sunrise"));
  registry.provide(EVENING, String::from("sunset"));

  let module: Module<dyn Decorator> = Module::new()
    .bind(BindingRule::into_set("greet", [Dependency::of::<String>(MORNING)], greet))
    .bind(BindingRule::into_map("greet", [Dependency::of::<String>(MORNING)], greet))
    .bind(BindingRule::into_map("farewell", [Dependency::of::<String>(EVENING)], farewell));

  // --- Resolution ---
  let mut graph = ObjectGraph::new(registry, module);
  let consumer = match Consumer::from_graph(&mut graph) {
    Ok(consumer) => consumer,
    Err(err) => {
      eprintln!("{}", err);
      return;
    }
  };

  let farewell = consumer.decorators_by_key().get("farewell").map(|d| d.decorate());
  println!("{}", consumer.present());
  assert_eq!(farewell.as_deref(), Some(" Bye sunset!!"));
}
