use std::fs;
use std::path::Path;

use propgen_core::{MetadataTree, metadata_of};
use propgen_generate::{SampleOptions, Value, count_combinations, exhaustive, sample};

fn load(name: &str) -> MetadataTree {
    let path = Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("../../fixtures")
        .join(name);
    let contents = fs::read_to_string(&path)
        .unwrap_or_else(|_| panic!("missing fixture at {}", path.display()));
    let document: serde_json::Value = serde_json::from_str(&contents).expect("parse fixture");
    metadata_of(&document)
        .expect("metadata")
        .into_tree()
        .expect("field mapping")
}

#[test]
fn button_fixture_enumerates_every_combination() {
    let tree = load("button.fields.json");
    assert_eq!(count_combinations(&tree), 216);

    let combinations = exhaustive(&tree);
    assert_eq!(combinations.len(), 216);
    assert!(combinations.iter().all(|props| props.get("label").is_some()));
    assert!(combinations.iter().all(|props| props.get("size").is_some()));
    assert!(
        combinations
            .iter()
            .any(|props| props.get("icon") == Some(&Value::Text("none".into())))
    );
}

#[test]
fn person_fixture_samples_templated_names() {
    let tree = load("person.fields.json");
    let options = SampleOptions {
        times: 25,
        seed: Some(99),
        ..SampleOptions::default()
    };

    let instances = sample(&tree, &options).expect("sample");
    assert_eq!(instances.len(), 25);
    for props in &instances {
        let name = props.get("name").and_then(Value::as_str).expect("name");
        assert!(name.contains(' '), "rendered full name: {name}");
        assert!(!name.contains("{{"));
        let shirt = props.get("shirt").and_then(Value::as_record).expect("shirt");
        assert!(shirt.get("color").is_some());
    }
}
