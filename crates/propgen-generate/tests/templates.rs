use propgen_core::{Error, MetadataTree, fields};
use propgen_generate::{SampleOptions, Value, exhaustive, sample};

#[test]
fn templated_strings_are_rendered_on_every_draw() {
    let tree = MetadataTree::new().with_field(
        "name",
        fields::string()
            .required()
            .with_template("{{name.firstName}} {{name.lastName}} {{random.number}}")
            .expect("bind template"),
    );
    let options = SampleOptions {
        max_size: 10,
        times: 2,
        seed: Some(21),
    };

    let instances = sample(&tree, &options).expect("sample");
    let first = instances[0].get("name").and_then(Value::as_str).expect("first");
    let second = instances[1].get("name").and_then(Value::as_str).expect("second");
    assert!(!first.contains("{{"));
    assert_ne!(first, second);
}

#[test]
fn templated_witness_is_rendered_text() {
    let tree = MetadataTree::new().with_field(
        "email",
        fields::string()
            .required()
            .with_template("{{internet.email}}")
            .expect("bind template"),
    );
    let combinations = exhaustive(&tree);
    assert_eq!(combinations.len(), 1);
    let email = combinations[0].get("email").and_then(Value::as_str).expect("email");
    assert!(email.contains('@'));
}

#[test]
fn template_on_number_fails_naming_number() {
    let err = fields::number()
        .with_template("{{name.firstName}}")
        .expect_err("number rejects templates");
    assert!(matches!(err, Error::InvalidConfiguration { .. }));
    assert!(err.to_string().contains("number"));
}
