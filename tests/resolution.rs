use depwire::prelude::*;
use depwire_testing::{SimpleContainer, TestHelper};

struct Foo;
struct Bar;

fn extractor() -> DefinitionExtractor {
    TestHelper::extractor([
        ClassSignature::builder("Foo").build(),
        ClassSignature::builder("Bar").build(),
        ClassSignature::builder("Service")
            .constructor(
                FunctionSignature::constructor()
                    .param(
                        ParameterSignature::new("dependency")
                            .typed(ParameterType::parse("Foo|Bar")),
                    )
                    .param(ParameterSignature::new("foo").typed(ParameterType::class("Foo")))
                    .param(
                        ParameterSignature::new("retries")
                            .typed(ParameterType::builtin(BuiltinType::Int))
                            .default_value(3),
                    )
                    .param(ParameterSignature::new("untyped")),
            )
            .build(),
    ])
}

#[test]
fn test_union_takes_first_registered_member() {
    TestHelper::init_tracing();
    let extractor = extractor();
    let bar = extractor.registry().object("Bar", Bar).unwrap();
    let resolver = TestHelper::create_dependency_resolver(SimpleContainer::new([("Bar", bar)]));

    let definitions = extractor.from_class_name("Service").unwrap();
    let value = definitions["dependency"].resolve(resolver.as_ref()).unwrap();
    assert_eq!(value.type_name(), "Bar");
}

#[test]
fn test_wrong_type_names_actual_type() {
    let extractor = extractor();
    let container = SimpleContainer::new([("Foo", 42)]);

    let definitions = extractor.from_class_name("Service").unwrap();
    let error = definitions["foo"].resolve(&container).unwrap_err();
    assert!(matches!(error, DepwireError::InvalidConfig { .. }));
    let message = error.to_string();
    assert!(message.contains("\"integer\""));
    assert!(message.contains("\"Foo\""));
}

#[test]
fn test_default_returned_exactly() {
    let definitions = extractor().from_class_name("Service").unwrap();
    let container = SimpleContainer::empty();
    assert_eq!(
        definitions["retries"].resolve(&container).unwrap(),
        Value::Integer(3)
    );
}

#[test]
fn test_untyped_without_default_fails() {
    let definitions = extractor().from_class_name("Service").unwrap();
    let error = definitions["untyped"]
        .resolve(&SimpleContainer::empty())
        .unwrap_err();
    assert_eq!(
        error.to_string(),
        "Can not determine value of the \"untyped\" parameter of type \"undefined\" when \
         instantiating \"Service::__construct()\". Please specify argument explicitly."
    );
}

#[test]
fn test_resolve_is_idempotent() {
    let extractor = extractor();
    let foo = extractor.registry().object("Foo", Foo).unwrap();
    let container = SimpleContainer::new([("Foo", foo)]);
    let definitions = extractor.from_class_name("Service").unwrap();

    let first = definitions["foo"].resolve(&container).unwrap();
    let second = definitions["foo"].resolve(&container).unwrap();
    assert_eq!(first, second);
}

#[test]
fn test_factory_backed_container() {
    let extractor = extractor();
    let registry = TestHelper::registry([ClassSignature::builder("Foo").build()]);
    let container = SimpleContainer::empty().with_factory(move |id| {
        registry.object(id, Foo).map(Value::from)
    });

    let definitions = extractor.from_class_name("Service").unwrap();
    let value = definitions["dependency"].resolve(&container).unwrap();
    assert_eq!(value.type_name(), "Foo");
}

#[test]
fn test_definitions_behind_trait_objects() {
    let extractor = extractor();
    let foo = extractor.registry().object("Foo", Foo).unwrap();
    let container = SimpleContainer::new([("Foo", foo)]);

    let definitions = extractor.from_class_name("Service").unwrap();
    let boxed: Vec<Box<dyn Definition>> = vec![
        Box::new(definitions["foo"].clone()),
        Box::new(ClassDefinition::new("Bar", true)),
        Box::new(ValueDefinition::new("fixed")),
    ];
    let values: Vec<Value> = boxed
        .iter()
        .map(|definition| definition.resolve(&container))
        .collect::<Result<_>>()
        .unwrap();
    assert_eq!(values[0].type_name(), "Foo");
    assert_eq!(values[1], Value::Null);
    assert_eq!(values[2], Value::from("fixed"));
}

#[test]
fn test_factory_failure_is_not_replaced_by_default() {
    let extractor = TestHelper::extractor([ClassSignature::builder("Pump")
        .constructor(
            FunctionSignature::constructor().param(
                ParameterSignature::new("engine")
                    .typed(ParameterType::class("Engine"))
                    .default_value(7),
            ),
        )
        .build()]);
    let container = SimpleContainer::empty()
        .with_factory(|_| Err(DepwireError::invalid_config("broken factory")));

    let definitions = extractor.from_class_name("Pump").unwrap();
    let error = definitions["engine"].resolve(&container).unwrap_err();
    assert_eq!(error.to_string(), "broken factory");
}
