//! Representative values used by exhaustive enumeration.
//!
//! Finite-choice kinds (`bool`, `enum`, `union`, and structurally `record`
//! and `component`) list every choice. Every other kind contributes a single
//! witness value drawn from a seeded generator.

use indexmap::IndexMap;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use propgen_core::{FieldDescriptor, FieldKind, MetadataTree};

use crate::exhaustive::enumerate;
use crate::generators::{Gen, MAP_KEY_SIZE, primitives};
use crate::model::ExhaustiveOptions;
use crate::value::{Instance, Value};

/// Seeded source of witness values.
pub struct Witnesses {
    rng: ChaCha8Rng,
    size: usize,
}

impl Witnesses {
    pub fn new(options: &ExhaustiveOptions) -> Self {
        Self {
            rng: ChaCha8Rng::seed_from_u64(options.seed),
            size: options.witness_size,
        }
    }

    fn draw(&mut self, generator: &Gen) -> Value {
        generator.draw(&mut self.rng, self.size)
    }

    fn unused_key(&mut self, taken: &IndexMap<String, Value>) -> String {
        loop {
            let key = primitives::alphanumeric(&mut self.rng, MAP_KEY_SIZE);
            if !key.is_empty() && !taken.contains_key(&key) {
                return key;
            }
        }
    }
}

/// Representative set of a field, not counting absence.
pub fn representatives(descriptor: &FieldDescriptor, witnesses: &mut Witnesses) -> Vec<Value> {
    kind_representatives(descriptor.kind(), descriptor.template_text(), witnesses)
}

fn kind_representatives(
    kind: &FieldKind,
    template: Option<&str>,
    witnesses: &mut Witnesses,
) -> Vec<Value> {
    match kind {
        FieldKind::Bool => vec![Value::Bool(true), Value::Bool(false)],
        FieldKind::Enum { values } => values.iter().map(Value::from_literal).collect(),
        FieldKind::Union { variants } => {
            let mut flattened = Vec::new();
            for variant in variants {
                flattened.extend(representatives(variant, witnesses));
            }
            flattened
        }
        FieldKind::Record { fields } => enumerate(fields, witnesses)
            .into_iter()
            .map(Value::Record)
            .collect(),
        FieldKind::Component(component) => enumerate(&component.fields, witnesses)
            .into_iter()
            .map(|props| {
                Value::Instance(Instance {
                    component: component.name.clone(),
                    props,
                })
            })
            .collect(),
        FieldKind::Number => vec![witnesses.draw(&Gen::Int)],
        FieldKind::String => match template {
            Some(template) => vec![witnesses.draw(&Gen::Template(template.to_string()))],
            None => vec![witnesses.draw(&Gen::AlphaNumeric)],
        },
        FieldKind::Any => vec![witnesses.draw(&Gen::Any)],
        FieldKind::Element => vec![witnesses.draw(&Gen::Element)],
        FieldKind::Node => vec![witnesses.draw(&Gen::Node)],
        FieldKind::Func => vec![witnesses.draw(&Gen::Func)],
        FieldKind::List { of } => vec![Value::List(kind_representatives(of, None, witnesses))],
        FieldKind::Map { of } => {
            let mut map = IndexMap::new();
            for value in kind_representatives(of, None, witnesses) {
                let key = witnesses.unused_key(&map);
                map.insert(key, value);
            }
            vec![Value::Map(map)]
        }
    }
}

/// Size of a field's representative set, including the absent slot of an
/// optional field.
pub fn count_slot(descriptor: &FieldDescriptor) -> u128 {
    let count = count_kind(descriptor.kind());
    if descriptor.is_required() {
        count
    } else {
        count.saturating_add(1)
    }
}

fn count_kind(kind: &FieldKind) -> u128 {
    match kind {
        FieldKind::Bool => 2,
        FieldKind::Enum { values } => values.len() as u128,
        FieldKind::Union { variants } => variants
            .iter()
            .fold(0_u128, |sum, variant| sum.saturating_add(count_kind(variant.kind()))),
        FieldKind::Record { fields } => count_combinations(fields),
        FieldKind::Component(component) => count_combinations(&component.fields),
        FieldKind::Number
        | FieldKind::String
        | FieldKind::Any
        | FieldKind::Element
        | FieldKind::Node
        | FieldKind::Func
        | FieldKind::List { .. }
        | FieldKind::Map { .. } => 1,
    }
}

/// Number of combinations [`crate::exhaustive`] produces for `tree`,
/// computed without building them. Saturates at `u128::MAX`.
pub fn count_combinations(tree: &MetadataTree) -> u128 {
    tree.iter()
        .fold(1_u128, |product, (_, descriptor)| {
            product.saturating_mul(count_slot(descriptor))
        })
}
