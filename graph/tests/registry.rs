use fibre_graph::{
  BindingRule, Decorator, Dependency, Error, HiDecorator, Info, InstanceFactory, Module,
  ObjectGraph, Qualifier, Result, ValueRegistry, INFO_STR_1, INFO_STR_2, INFO_STR_3,
};
use std::sync::Arc;

#[test]
fn test_defaults_resolve_each_qualifier() {
  let registry = ValueRegistry::with_defaults();

  assert_eq!(registry.get::<String>(&INFO_STR_1).unwrap(), "Kotlin");
  assert_eq!(registry.get::<String>(&INFO_STR_2).unwrap(), "Scala");
  assert_eq!(registry.get::<String>(&INFO_STR_3).unwrap(), "Java");
  assert_eq!(registry.len(), 3);
}

#[test]
fn test_unknown_qualifier_is_reported_with_type() {
  let registry = ValueRegistry::new();

  let err = registry.get::<String>(&INFO_STR_1).unwrap_err();

  match &err {
    Error::UnknownQualifier {
      qualifier,
      type_name,
    } => {
      assert_eq!(qualifier, &INFO_STR_1);
      assert!(type_name.contains("String"));
    }
    other => panic!("unexpected error: {:?}", other),
  }
  assert!(err.to_string().contains("@InfoStr1"));
}

#[test]
fn test_same_qualifier_different_types_are_distinct() {
  // Arrange
  const PORT: Qualifier = Qualifier::new("Port");
  let mut registry = ValueRegistry::new();
  registry.provide(PORT, String::from("eighty"));
  registry.provide(PORT, 80_u16);

  // Act & Assert
  assert_eq!(registry.get::<String>(&PORT).unwrap(), "eighty");
  assert_eq!(*registry.get::<u16>(&PORT).unwrap(), 80);
  assert!(registry.get::<u32>(&PORT).is_err());
  assert_eq!(registry.len(), 2);
}

#[test]
fn test_reregistering_replaces_value() {
  let mut registry = ValueRegistry::with_defaults();

  registry.provide(INFO_STR_1, String::from("Rust"));

  assert_eq!(registry.get::<String>(&INFO_STR_1).unwrap(), "Rust");
  assert_eq!(registry.len(), 3);
}

#[test]
fn test_owned_and_static_qualifiers_are_equal() {
  let mut registry = ValueRegistry::new();
  registry.provide(Qualifier::owned("InfoStr2"), String::from("Scala"));

  assert!(registry.contains(&Dependency::of::<String>(INFO_STR_2)));
  assert_eq!(INFO_STR_2.to_string(), "@InfoStr2");
}

#[test]
fn test_remove_makes_qualifier_unknown() {
  let mut registry = ValueRegistry::with_defaults();

  assert!(registry.remove::<String>(&INFO_STR_3));
  assert!(!registry.remove::<String>(&INFO_STR_3));
  assert!(registry.get::<String>(&INFO_STR_3).is_err());
}

#[test]
fn test_factory_builds_info_deterministically() {
  let registry = ValueRegistry::with_defaults();
  let factory = InstanceFactory::new(&registry);

  let first = factory.build(&INFO_STR_2).unwrap();
  let second = factory.build(&INFO_STR_2).unwrap();

  assert_eq!(first, Info::new("Scala"));
  assert_eq!(first, second);
  assert!(factory.build(&Qualifier::new("Missing")).is_err());
}

#[test]
fn test_factory_value_returns_typed_values() {
  // Arrange
  const PORT: Qualifier = Qualifier::new("Port");
  let mut registry = ValueRegistry::new();
  registry.provide(PORT, 8080_u16);
  let factory = InstanceFactory::new(&registry);

  // Act & Assert
  assert_eq!(*factory.value::<u16>(&PORT).unwrap(), 8080);
  match factory.value::<u32>(&PORT) {
    Err(Error::UnknownQualifier {
      qualifier,
      type_name,
    }) => {
      assert_eq!(qualifier, PORT);
      assert!(type_name.contains("u32"));
    }
    other => panic!("unexpected result: {:?}", other),
  }
}

#[test]
fn test_constructor_reads_typed_value_during_build() {
  // Arrange: the greetee is built from a numeric value, not a string.
  const VERSION: Qualifier = Qualifier::new("Version");
  let mut registry = ValueRegistry::new();
  registry.provide(VERSION, 2021_u16);

  let module: Module<dyn Decorator> = Module::new().bind(BindingRule::into_map(
    "edition",
    [Dependency::of::<u16>(VERSION)],
    |factory: &InstanceFactory<'_>| -> Result<Arc<dyn Decorator>> {
      let edition = factory.value::<u16>(&VERSION)?;
      Ok(Arc::new(HiDecorator::new(Info::new(format!("edition {}", edition)))))
    },
  ));

  // Act
  let aggregates = ObjectGraph::new(registry, module).build().unwrap();

  // Assert
  assert_eq!(aggregates.map.get("edition").unwrap().decorate(), " Hi edition 2021!!");
}
