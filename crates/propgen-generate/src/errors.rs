use thiserror::Error;

/// Errors emitted by the generation engines.
#[derive(Debug, Error)]
pub enum GenerationError {
    #[error("metadata error: {0}")]
    Metadata(#[from] propgen_core::Error),
    #[error("exhaustive enumeration would produce {count} combinations (limit {limit})")]
    TooManyCombinations { count: u128, limit: u128 },
}
