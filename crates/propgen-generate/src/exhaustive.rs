//! Exhaustive enumeration of representative combinations.
//!
//! Fields are processed in declaration order; the accumulator is replaced by
//! its product with each field's representative set, so the first field
//! varies slowest. An optional field adds an absent slot after its
//! representatives. Combination counts multiply quickly: callers bound the
//! input, for example with [`crate::count_combinations`].

use std::time::Instant;

use tracing::{debug, info};

use propgen_core::MetadataTree;

use crate::errors::GenerationError;
use crate::model::ExhaustiveOptions;
use crate::representative::{Witnesses, count_combinations, representatives};
use crate::value::{Props, Value};

/// Every representative combination of `tree`, with default options.
pub fn exhaustive(tree: &MetadataTree) -> Vec<Props> {
    exhaustive_with(tree, &ExhaustiveOptions::default())
}

/// Every representative combination of `tree`.
///
/// The result is fully determined by `tree` and `options.seed`, and its
/// length is always [`count_combinations`]. Representatives are not
/// deduplicated: a union whose variants share values, such as `bool` next
/// to `enum [true, false]`, yields those values once per variant. An `enum`
/// or `union` with nothing to choose from makes the product empty; use
/// [`exhaustive_bounded`] to have such trees rejected instead.
pub fn exhaustive_with(tree: &MetadataTree, options: &ExhaustiveOptions) -> Vec<Props> {
    let start = Instant::now();
    let finite = tree
        .iter()
        .filter(|(_, descriptor)| descriptor.kind().is_finite_choice())
        .count();
    debug!(
        fields = tree.len(),
        finite_fields = finite,
        expected = %count_combinations(tree),
        seed = options.seed,
        "enumerating combinations"
    );

    let mut witnesses = Witnesses::new(options);
    let combinations = enumerate(tree, &mut witnesses);

    info!(
        fields = tree.len(),
        combinations = combinations.len(),
        duration_ms = start.elapsed().as_millis() as u64,
        "exhaustive enumeration finished"
    );
    combinations
}

/// Like [`exhaustive_with`], but validates `tree` first and refuses trees
/// whose combination count exceeds `limit` before building anything.
pub fn exhaustive_bounded(
    tree: &MetadataTree,
    options: &ExhaustiveOptions,
    limit: u128,
) -> Result<Vec<Props>, GenerationError> {
    tree.validate()?;
    let count = count_combinations(tree);
    if count > limit {
        return Err(GenerationError::TooManyCombinations { count, limit });
    }
    Ok(exhaustive_with(tree, options))
}

pub(crate) fn enumerate(tree: &MetadataTree, witnesses: &mut Witnesses) -> Vec<Props> {
    let mut accumulator = vec![Props::new()];

    for (name, descriptor) in tree.iter() {
        let mut slots: Vec<Option<Value>> = representatives(descriptor, witnesses)
            .into_iter()
            .map(Some)
            .collect();
        if !descriptor.is_required() {
            slots.push(None);
        }

        let mut next = Vec::with_capacity(accumulator.len().saturating_mul(slots.len()));
        for partial in &accumulator {
            for slot in &slots {
                let mut extended = partial.clone();
                extended.insert(name, slot.clone());
                next.push(extended);
            }
        }
        accumulator = next;
    }

    accumulator
}

#[cfg(test)]
mod tests {
    use super::*;
    use propgen_core::fields;

    #[test]
    fn empty_tree_yields_one_empty_combination() {
        let combinations = exhaustive(&MetadataTree::new());
        assert_eq!(combinations, vec![Props::new()]);
    }

    #[test]
    fn optional_field_is_absent_last() {
        let tree = MetadataTree::new().with_field("flag", fields::bool());
        let combinations = exhaustive(&tree);
        assert_eq!(combinations.len(), 3);
        assert_eq!(combinations[0].get("flag"), Some(&Value::Bool(true)));
        assert_eq!(combinations[1].get("flag"), Some(&Value::Bool(false)));
        assert!(combinations[2].is_absent("flag"));
    }

    #[test]
    fn bounded_enumeration_rejects_large_trees() {
        let tree = (0..20)
            .map(|index| (format!("f{index}"), fields::bool().required()))
            .collect::<MetadataTree>();
        match exhaustive_bounded(&tree, &ExhaustiveOptions::default(), 1000) {
            Err(GenerationError::TooManyCombinations { count, limit }) => {
                assert_eq!(count, 1 << 20);
                assert_eq!(limit, 1000);
            }
            other => panic!("unexpected result: {other:?}"),
        }
    }

    #[test]
    fn empty_enum_yields_no_combinations() {
        let tree = MetadataTree::new()
            .with_field("never", fields::one_of(Vec::<String>::new()).required());
        assert!(exhaustive(&tree).is_empty());
        assert!(matches!(
            exhaustive_bounded(&tree, &ExhaustiveOptions::default(), 1000),
            Err(GenerationError::Metadata(_))
        ));
    }
}
