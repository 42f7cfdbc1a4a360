use propgen_core::{Extra, Metadata, MetadataTree, fields, metadata_of};
use serde_json::json;

fn annotated(pairs: &[(&str, &str)]) -> Extra {
    pairs
        .iter()
        .map(|(key, value)| (key.to_string(), json!(value)))
        .collect()
}

#[test]
fn serializes_documentation_metadata() {
    let props = MetadataTree::new()
        .with_field("name", fields::string())
        .with_field(
            "age",
            fields::number()
                .required()
                .meta(annotated(&[("description", "The aim of the game")]))
                .expect("annotate age"),
        )
        .with_field(
            "isCool",
            fields::bool()
                .meta(annotated(&[("description", "Whether someone is cool or something")]))
                .expect("annotate isCool"),
        )
        .with_field(
            "shirt",
            fields::shape(
                MetadataTree::new()
                    .with_field("color", fields::one_of(["red", "blue", "green"]).required())
                    .with_field("sleeveLength", fields::number()),
            )
            .required()
            .meta(annotated(&[
                ("description", "The dimensions of your shirt"),
                ("madeIn", "China"),
            ]))
            .expect("annotate shirt"),
        );

    let json = serde_json::to_value(&props).expect("serialize metadata");
    let expected = json!({
        "name": { "kind": { "type": "string" }, "required": false },
        "age": {
            "kind": { "type": "number" },
            "required": true,
            "extra": { "description": "The aim of the game" }
        },
        "isCool": {
            "kind": { "type": "bool" },
            "required": false,
            "extra": { "description": "Whether someone is cool or something" }
        },
        "shirt": {
            "kind": {
                "type": "record",
                "fields": {
                    "color": {
                        "kind": { "type": "enum", "values": ["red", "blue", "green"] },
                        "required": true
                    },
                    "sleeveLength": { "kind": { "type": "number" }, "required": false }
                }
            },
            "required": true,
            "extra": { "description": "The dimensions of your shirt", "madeIn": "China" }
        }
    });
    assert_eq!(json, expected);
}

#[test]
fn metadata_round_trips_through_json_document() {
    let props = MetadataTree::new()
        .with_field("title", fields::string().with_template("{{lorem.word}}").expect("bind"))
        .with_field(
            "choice",
            fields::one_of_type([fields::bool(), fields::one_of(["b", "c"])]),
        )
        .with_field("tags", fields::list_of(&fields::string()).required());

    let document = serde_json::to_value(&props).expect("serialize metadata");
    let parsed = metadata_of(&document).expect("metadata_of");
    assert_eq!(parsed, Metadata::Tree(props));
}

#[test]
fn metadata_of_is_stable_across_calls() {
    let document = json!({
        "choice": {
            "kind": {
                "type": "union",
                "variants": [
                    { "kind": { "type": "enum", "values": [3, 1, 2] } },
                    { "kind": { "type": "bool" } }
                ]
            }
        }
    });
    let first = metadata_of(&document).expect("first");
    let second = metadata_of(&document).expect("second");
    assert_eq!(first, second);
}
