use serde::{Deserialize, Serialize};

/// Options for random sampling.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SampleOptions {
    /// Upper bound of the size fed to size-sensitive generators.
    pub max_size: usize,
    /// Number of instances to draw.
    pub times: usize,
    /// Seed for reproducible draws; a random seed is used when unset.
    pub seed: Option<u64>,
}

impl Default for SampleOptions {
    fn default() -> Self {
        Self {
            max_size: 10,
            times: 20,
            seed: None,
        }
    }
}

impl SampleOptions {
    /// Size used for the draw at `index`: sizes cycle through
    /// `0..max_size`.
    pub fn size_for(&self, index: usize) -> usize {
        if self.max_size == 0 {
            0
        } else {
            index % self.max_size
        }
    }
}

/// Options for exhaustive enumeration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExhaustiveOptions {
    /// Seed for witness values of unbounded kinds.
    pub seed: u64,
    /// Size used when drawing witness values.
    pub witness_size: usize,
}

impl Default for ExhaustiveOptions {
    fn default() -> Self {
        Self {
            seed: 0,
            witness_size: 10,
        }
    }
}
