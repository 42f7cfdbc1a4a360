//! Test-data generation engines for propgen.
//!
//! Both engines consume a [`propgen_core::MetadataTree`]: [`sample`] draws
//! independent random instances, [`exhaustive`] enumerates every
//! representative combination in a fixed order.

pub mod errors;
pub mod exhaustive;
pub mod faker_rs;
pub mod generators;
pub mod model;
pub mod representative;
pub mod sample;
pub mod value;

pub use errors::GenerationError;
pub use exhaustive::{exhaustive, exhaustive_bounded, exhaustive_with};
pub use faker_rs::FakeText;
pub use model::{ExhaustiveOptions, SampleOptions};
pub use representative::count_combinations;
pub use sample::{Sampler, sample};
pub use value::{Element, Instance, Props, Value};
