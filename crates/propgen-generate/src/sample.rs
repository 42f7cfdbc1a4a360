//! Random sampling of field mappings.

use std::time::Instant;

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use tracing::{debug, info};

use propgen_core::{Error, FieldDescriptor, FieldKind, MetadataTree};

use crate::errors::GenerationError;
use crate::generators::{Choices, FieldGen, Gen, Slot, draw_fields};
use crate::model::SampleOptions;
use crate::value::{Props, Value};

/// Compiled generator for one field mapping.
#[derive(Debug, Clone, PartialEq)]
pub struct Sampler {
    fields: Vec<FieldGen>,
}

impl Sampler {
    /// Compile `tree`. Fails when a descriptor cannot produce any value,
    /// such as an `enum` without values.
    pub fn new(tree: &MetadataTree) -> Result<Self, GenerationError> {
        tree.validate()?;
        let fields = compile_fields(tree)?;
        debug!(fields = fields.len(), "compiled sampler");
        Ok(Self { fields })
    }

    /// Draw one instance at the given size.
    pub fn draw<R: Rng + ?Sized>(&self, rng: &mut R, size: usize) -> Props {
        draw_fields(&self.fields, rng, size)
    }

    /// Draw `options.times` independent instances.
    pub fn sample(&self, options: &SampleOptions) -> Vec<Props> {
        let seed = options.seed.unwrap_or_else(rand::random::<u64>);
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let start = Instant::now();
        let instances = self.sample_with_rng(options, &mut rng);
        info!(
            times = options.times,
            max_size = options.max_size,
            seed,
            duration_ms = start.elapsed().as_millis() as u64,
            "sampling finished"
        );
        instances
    }

    /// Draw `options.times` instances from `rng`; `options.seed` is ignored.
    pub fn sample_with_rng<R: Rng + ?Sized>(
        &self,
        options: &SampleOptions,
        rng: &mut R,
    ) -> Vec<Props> {
        (0..options.times)
            .map(|index| self.draw(&mut *rng, options.size_for(index)))
            .collect()
    }
}

/// Draw `options.times` random instances of `tree`.
pub fn sample(
    tree: &MetadataTree,
    options: &SampleOptions,
) -> Result<Vec<Props>, GenerationError> {
    Ok(Sampler::new(tree)?.sample(options))
}

fn compile_fields(tree: &MetadataTree) -> Result<Vec<FieldGen>, GenerationError> {
    tree.iter()
        .map(|(name, descriptor)| {
            Ok(FieldGen {
                name: name.to_string(),
                slot: compile_slot(descriptor)?,
            })
        })
        .collect()
}

fn compile_slot(descriptor: &FieldDescriptor) -> Result<Slot, GenerationError> {
    let generator = compile_descriptor(descriptor)?;
    Ok(if descriptor.is_required() {
        Slot::Required(generator)
    } else {
        Slot::Optional(generator)
    })
}

fn compile_descriptor(descriptor: &FieldDescriptor) -> Result<Gen, GenerationError> {
    compile_kind(descriptor.kind(), descriptor.template_text())
}

fn choices<T>(kind: &FieldKind, items: Vec<T>) -> Result<Choices<T>, GenerationError> {
    Choices::new(items).ok_or_else(|| {
        GenerationError::Metadata(Error::InvalidConfiguration {
            kind: kind.name().to_string(),
            message: "nothing to choose from".to_string(),
        })
    })
}

fn compile_kind(kind: &FieldKind, template: Option<&str>) -> Result<Gen, GenerationError> {
    let generator = match kind {
        FieldKind::Bool => Gen::Bool,
        FieldKind::Number => Gen::Int,
        FieldKind::String => match template {
            Some(template) => Gen::Template(template.to_string()),
            None => Gen::AlphaNumeric,
        },
        FieldKind::Any => Gen::Any,
        FieldKind::Element => Gen::Element,
        FieldKind::Node => Gen::Node,
        FieldKind::Func => Gen::Func,
        FieldKind::List { of } => Gen::List(Box::new(compile_kind(of, None)?)),
        FieldKind::Map { of } => Gen::Map(Box::new(compile_kind(of, None)?)),
        FieldKind::Enum { values } => Gen::Pick(choices(
            kind,
            values.iter().map(Value::from_literal).collect(),
        )?),
        FieldKind::Union { variants } => {
            let gens = variants
                .iter()
                .map(compile_descriptor)
                .collect::<Result<Vec<_>, _>>()?;
            Gen::OneOf(choices(kind, gens)?)
        }
        FieldKind::Record { fields } => Gen::Record(compile_fields(fields)?),
        FieldKind::Component(component) => Gen::Instance {
            component: component.name.clone(),
            fields: compile_fields(&component.fields)?,
        },
    };
    Ok(generator)
}
