use fibre_graph::{app_module, Consumer, ObjectGraph, ValueRegistry, INFO_STR_2};
use std::error::Error as _;

fn main() {
  // --- A graph whose registry lacks one qualified value ---
  let mut registry = ValueRegistry::with_defaults();
  registry.remove::<String>(&INFO_STR_2);
  let mut graph = ObjectGraph::new(registry, app_module());

  println!("Attempting to build a graph without a value for {}...", INFO_STR_2);

  match Consumer::from_graph(&mut graph) {
    Ok(_) => panic!("The build should have failed!"),
    Err(err) => {
      println!("Build failed as expected: {}", err);
      if let Some(cause) = err.source() {
        println!("  caused by: {}", cause);
      }
    }
  }

  println!("Graph state is now '{}'.", graph.state());
}
