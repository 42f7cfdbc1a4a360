//! Draw functions for the primitive generators.
//!
//! `size` bounds text length, collection length and integer magnitude.

use indexmap::IndexMap;
use rand::Rng;
use rand::seq::IndexedRandom;

use crate::value::{Element, Value};

const ALPHANUMERIC: &[u8] = b"abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789";
const FUNC_STAND_IN: &str = "noop";

/// Tag names used for synthetic elements.
///
/// A fixed subset of the standard HTML element names, not the full set.
pub const HTML_TAGS: &[&str] = &[
    "a", "abbr", "address", "article", "aside", "audio", "b", "blockquote", "body", "br",
    "button", "canvas", "caption", "code", "div", "dl", "em", "fieldset", "figure", "footer",
    "form", "h1", "h2", "h3", "header", "hr", "i", "iframe", "img", "input", "label", "li",
    "main", "nav", "ol", "option", "p", "pre", "section", "select", "small", "span", "strong",
    "table", "td", "textarea", "th", "tr", "ul", "video",
];

pub fn bool<R: Rng + ?Sized>(rng: &mut R) -> Value {
    Value::Bool(rng.random_bool(0.5))
}

/// Integer in `-size..=size`.
pub fn int<R: Rng + ?Sized>(rng: &mut R, size: usize) -> Value {
    let bound = i64::try_from(size).unwrap_or(i64::MAX);
    Value::Int(rng.random_range(-bound..=bound))
}

/// Alphanumeric text of length `0..=size`.
pub fn alphanumeric<R: Rng + ?Sized>(rng: &mut R, size: usize) -> String {
    let len = rng.random_range(0..=size);
    (0..len)
        .map(|_| ALPHANUMERIC[rng.random_range(0..ALPHANUMERIC.len())] as char)
        .collect()
}

pub fn element<R: Rng + ?Sized>(rng: &mut R) -> Value {
    let tag = HTML_TAGS.choose(rng).copied().unwrap_or("div");
    Value::Element(Element {
        tag: tag.to_string(),
    })
}

/// Renderable node: text, an integer or an element.
pub fn node<R: Rng + ?Sized>(rng: &mut R, size: usize) -> Value {
    match rng.random_range(0..3) {
        0 => Value::Text(alphanumeric(rng, size)),
        1 => int(rng, size),
        _ => element(rng),
    }
}

pub fn func() -> Value {
    Value::Func(FUNC_STAND_IN)
}

/// Arbitrary structurally valid value: a scalar, or a list or mapping of
/// scalars.
pub fn any<R: Rng + ?Sized>(rng: &mut R, size: usize) -> Value {
    match rng.random_range(0..7) {
        0..=4 => scalar(rng, size),
        5 => {
            let len = rng.random_range(0..=size);
            Value::List((0..len).map(|_| scalar(rng, size)).collect())
        }
        _ => {
            let len = rng.random_range(0..=size);
            let mut map = IndexMap::with_capacity(len);
            for _ in 0..len {
                let key = alphanumeric(rng, size);
                let value = scalar(rng, size);
                map.insert(key, value);
            }
            Value::Map(map)
        }
    }
}

fn scalar<R: Rng + ?Sized>(rng: &mut R, size: usize) -> Value {
    match rng.random_range(0..5) {
        0 => Value::Null,
        1 => bool(rng),
        2 => int(rng, size),
        3 => {
            let bound = size as f64;
            if bound > 0.0 {
                Value::Float(rng.random_range(-bound..bound))
            } else {
                Value::Float(0.0)
            }
        }
        _ => Value::Text(alphanumeric(rng, size)),
    }
}
