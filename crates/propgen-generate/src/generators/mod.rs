//! Composable random generators.
//!
//! A [`Gen`] is a closed description of how to draw one value; composite
//! generators own their children, so a compiled tree can be drawn from any
//! number of times.

pub mod primitives;

use indexmap::IndexMap;
use rand::Rng;

use crate::faker_rs::FakeText;
use crate::value::{Instance, Props, Value};

/// Maximum length of generated mapping keys.
pub const MAP_KEY_SIZE: usize = 50;

#[derive(Debug, Clone, PartialEq)]
pub enum Gen {
    /// Always the same value.
    Constant(Value),
    Bool,
    Int,
    AlphaNumeric,
    Any,
    Element,
    Node,
    Func,
    /// Freshly rendered fake text on every draw.
    Template(String),
    /// Sequence of `0..=size` independent draws.
    List(Box<Gen>),
    /// Mapping of `0..=size` random keys to independent draws.
    Map(Box<Gen>),
    /// Uniform pick among fixed values.
    Pick(Choices<Value>),
    /// Uniform pick of a generator, then a draw from it.
    OneOf(Choices<Gen>),
    Record(Vec<FieldGen>),
    Instance {
        component: String,
        fields: Vec<FieldGen>,
    },
}

/// Non-empty list of alternatives.
#[derive(Debug, Clone, PartialEq)]
pub struct Choices<T>(Vec<T>);

impl<T> Choices<T> {
    /// `None` when `items` is empty.
    pub fn new(items: Vec<T>) -> Option<Self> {
        if items.is_empty() {
            None
        } else {
            Some(Self(items))
        }
    }

    pub fn as_slice(&self) -> &[T] {
        &self.0
    }

    fn pick<R: Rng + ?Sized>(&self, rng: &mut R) -> &T {
        &self.0[rng.random_range(0..self.0.len())]
    }
}

/// Generator for one named field slot.
#[derive(Debug, Clone, PartialEq)]
pub struct FieldGen {
    pub name: String,
    pub slot: Slot,
}

/// Whether a slot can be left absent.
#[derive(Debug, Clone, PartialEq)]
pub enum Slot {
    Required(Gen),
    /// Present or absent with equal odds.
    Optional(Gen),
}

impl Gen {
    pub fn draw<R: Rng + ?Sized>(&self, rng: &mut R, size: usize) -> Value {
        match self {
            Gen::Constant(value) => value.clone(),
            Gen::Bool => primitives::bool(rng),
            Gen::Int => primitives::int(rng, size),
            Gen::AlphaNumeric => Value::Text(primitives::alphanumeric(rng, size)),
            Gen::Any => primitives::any(rng, size),
            Gen::Element => primitives::element(rng),
            Gen::Node => primitives::node(rng, size),
            Gen::Func => primitives::func(),
            Gen::Template(template) => Value::Text(FakeText::render(template, rng)),
            Gen::List(item) => {
                let len = rng.random_range(0..=size);
                Value::List((0..len).map(|_| item.draw(rng, size)).collect())
            }
            Gen::Map(entry) => {
                let len = rng.random_range(0..=size);
                let mut map = IndexMap::with_capacity(len);
                for _ in 0..len {
                    let key = primitives::alphanumeric(rng, size.min(MAP_KEY_SIZE));
                    map.insert(key, entry.draw(rng, size));
                }
                Value::Map(map)
            }
            Gen::Pick(values) => values.pick(rng).clone(),
            Gen::OneOf(gens) => gens.pick(rng).draw(rng, size),
            Gen::Record(fields) => Value::Record(draw_fields(fields, rng, size)),
            Gen::Instance { component, fields } => Value::Instance(Instance {
                component: component.clone(),
                props: draw_fields(fields, rng, size),
            }),
        }
    }
}

impl Slot {
    pub fn draw<R: Rng + ?Sized>(&self, rng: &mut R, size: usize) -> Option<Value> {
        match self {
            Slot::Required(generator) => Some(generator.draw(rng, size)),
            Slot::Optional(generator) => {
                if rng.random_bool(0.5) {
                    Some(generator.draw(rng, size))
                } else {
                    None
                }
            }
        }
    }
}

/// Draw every field independently into one props mapping.
pub fn draw_fields<R: Rng + ?Sized>(fields: &[FieldGen], rng: &mut R, size: usize) -> Props {
    let mut props = Props::new();
    for field in fields {
        props.insert(field.name.clone(), field.slot.draw(rng, size));
    }
    props
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    #[test]
    fn list_length_is_bounded_by_size() {
        let mut rng = ChaCha8Rng::seed_from_u64(11);
        let generator = Gen::List(Box::new(Gen::Bool));
        for _ in 0..50 {
            let value = generator.draw(&mut rng, 4);
            let items = value.as_list().expect("list");
            assert!(items.len() <= 4);
            assert!(items.iter().all(|item| item.as_bool().is_some()));
        }
    }

    #[test]
    fn optional_slot_is_sometimes_absent() {
        let mut rng = ChaCha8Rng::seed_from_u64(12);
        let slot = Slot::Optional(Gen::Int);
        let draws: Vec<Option<Value>> = (0..200).map(|_| slot.draw(&mut rng, 10)).collect();
        assert!(draws.iter().any(Option::is_none));
        assert!(draws.iter().any(Option::is_some));
    }

    #[test]
    fn pick_only_returns_listed_values() {
        let mut rng = ChaCha8Rng::seed_from_u64(13);
        let values = vec![Value::Text("a".into()), Value::Text("b".into())];
        let generator = Gen::Pick(Choices::new(values.clone()).expect("non-empty"));
        for _ in 0..50 {
            assert!(values.contains(&generator.draw(&mut rng, 10)));
        }
    }

    #[test]
    fn choices_reject_empty_lists() {
        assert!(Choices::<Value>::new(Vec::new()).is_none());
        let single = Choices::new(vec![Gen::Bool]).expect("one choice");
        assert_eq!(single.as_slice(), &[Gen::Bool]);
    }
}
