//! Fake-text rendering for templated string fields.

mod adapter;
mod catalog;

pub use adapter::FakeText;
pub use catalog::ALL_IDS;
