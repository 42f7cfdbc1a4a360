use propgen_core::{Component, MetadataTree, fields};
use propgen_generate::{
    ExhaustiveOptions, Props, Value, count_combinations, exhaustive, exhaustive_with,
};

fn bools(pairs: &[(&str, bool)]) -> Props {
    let mut props = Props::new();
    for (name, value) in pairs {
        props.insert(*name, Some(Value::Bool(*value)));
    }
    props
}

#[test]
fn two_required_bools_enumerate_in_order() {
    let tree = MetadataTree::new()
        .with_field("a", fields::bool().required())
        .with_field("b", fields::bool().required());

    let combinations = exhaustive(&tree);
    assert_eq!(
        combinations,
        vec![
            bools(&[("a", true), ("b", true)]),
            bools(&[("a", true), ("b", false)]),
            bools(&[("a", false), ("b", true)]),
            bools(&[("a", false), ("b", false)]),
        ]
    );
}

#[test]
fn optional_bools_multiply_with_absent_slot() {
    let tree = MetadataTree::new()
        .with_field("a", fields::bool())
        .with_field("b", fields::bool())
        .with_field("c", fields::bool().required());

    let combinations = exhaustive(&tree);
    assert_eq!(combinations.len(), 18);
    assert_eq!(count_combinations(&tree), 18);
    assert!(combinations.iter().all(|props| props.get("c").is_some()));
    assert!(combinations.iter().any(|props| props.is_absent("a")));
    assert!(combinations.iter().any(|props| props.is_absent("b")));
    // The first field varies slowest, so absence of `a` fills the tail.
    assert!(combinations[12..].iter().all(|props| props.is_absent("a")));
    assert!(combinations[..12].iter().all(|props| !props.is_absent("a")));
}

#[test]
fn nested_record_is_enumerated_as_one_field() {
    let tree = MetadataTree::new()
        .with_field(
            "a",
            fields::shape(
                MetadataTree::new()
                    .with_field("b", fields::bool().required())
                    .with_field("c", fields::one_of(["d", "e", "f"]).required()),
            )
            .required(),
        )
        .with_field("g", fields::bool().required());

    let combinations = exhaustive(&tree);
    assert_eq!(combinations.len(), 12);

    let first = combinations[0].get("a").and_then(Value::as_record).expect("record");
    assert_eq!(first.get("b"), Some(&Value::Bool(true)));
    assert_eq!(first.get("c"), Some(&Value::Text("d".into())));
    assert_eq!(combinations[0].get("g"), Some(&Value::Bool(true)));
    assert_eq!(combinations[1].get("g"), Some(&Value::Bool(false)));

    let mut seen: Vec<String> = combinations
        .iter()
        .map(|props| serde_json::to_string(props).expect("serialize"))
        .collect();
    seen.sort();
    seen.dedup();
    assert_eq!(seen.len(), 12, "combinations must be distinct");
}

#[test]
fn optional_union_contributes_flattened_representatives() {
    let tree = MetadataTree::new()
        .with_field(
            "choice",
            fields::one_of_type([fields::bool(), fields::one_of(["b", "c"])]),
        )
        .with_field("flag", fields::bool().required());

    let combinations = exhaustive(&tree);
    assert_eq!(combinations.len(), 10);

    let choices: Vec<Option<Value>> = combinations
        .iter()
        .step_by(2)
        .map(|props| props.get("choice").cloned())
        .collect();
    assert_eq!(
        choices,
        vec![
            Some(Value::Bool(true)),
            Some(Value::Bool(false)),
            Some(Value::Text("b".into())),
            Some(Value::Text("c".into())),
            None,
        ]
    );
}

#[test]
fn unbounded_kinds_contribute_one_witness() {
    let tree = MetadataTree::new()
        .with_field("count", fields::number().required())
        .with_field("label", fields::string().required())
        .with_field("payload", fields::any().required())
        .with_field("child", fields::node().required())
        .with_field("onClick", fields::func().required())
        .with_field("icon", fields::element().required())
        .with_field("flag", fields::bool().required());

    let combinations = exhaustive(&tree);
    assert_eq!(combinations.len(), 2);
    assert_eq!(combinations[0].get("count"), combinations[1].get("count"));
    assert!(combinations[0].get("count").and_then(Value::as_i64).is_some());
    assert!(combinations[0].get("label").and_then(Value::as_str).is_some());
    assert!(matches!(combinations[0].get("onClick"), Some(Value::Func(_))));
    assert!(matches!(combinations[0].get("icon"), Some(Value::Element(_))));
}

#[test]
fn component_combinations_are_wrapped_as_instances() {
    let button = Component::new(
        "Button",
        MetadataTree::new()
            .with_field("disabled", fields::bool())
            .with_field("size", fields::one_of(["small", "large"]).required()),
    );
    let tree = MetadataTree::new().with_field("action", fields::instance_of(&button).required());

    let combinations = exhaustive(&tree);
    assert_eq!(combinations.len(), 6);
    for props in &combinations {
        let instance = props
            .get("action")
            .and_then(Value::as_instance)
            .expect("instance");
        assert_eq!(instance.component, "Button");
        assert!(instance.props.get("size").is_some());
    }
    let last = combinations[5]
        .get("action")
        .and_then(Value::as_instance)
        .expect("instance");
    assert!(last.props.is_absent("disabled"));
}

#[test]
fn enumeration_is_deterministic() {
    let tree = MetadataTree::new()
        .with_field("name", fields::string().with_template("{{name.findName}}").expect("bind"))
        .with_field("count", fields::number())
        .with_field("tags", fields::map_of(&fields::one_of(["x", "y"])).required())
        .with_field("mode", fields::one_of(["on", "off"]).required());

    assert_eq!(exhaustive(&tree), exhaustive(&tree));

    let options = ExhaustiveOptions {
        seed: 17,
        ..ExhaustiveOptions::default()
    };
    assert_eq!(exhaustive_with(&tree, &options), exhaustive_with(&tree, &options));
}

#[test]
fn list_witness_is_a_single_list_of_representatives() {
    let tree = MetadataTree::new()
        .with_field("flags", fields::list_of(&fields::bool()).required());
    let combinations = exhaustive(&tree);
    assert_eq!(combinations.len(), 1);
    assert_eq!(
        combinations[0].get("flags"),
        Some(&Value::List(vec![Value::Bool(true), Value::Bool(false)]))
    );
}

#[test]
fn overlapping_union_variants_keep_every_representative() {
    let tree = MetadataTree::new().with_field(
        "u",
        fields::one_of_type([fields::bool(), fields::one_of([true, false])]).required(),
    );

    let combinations = exhaustive(&tree);
    assert_eq!(count_combinations(&tree), 4);
    assert_eq!(
        combinations,
        vec![
            bools(&[("u", true)]),
            bools(&[("u", false)]),
            bools(&[("u", true)]),
            bools(&[("u", false)]),
        ]
    );
}
