use serde::{Deserialize, Serialize};

/// Upper bound on generated vector length.
pub const MAX_VECTOR_LEN: usize = 1 << 20;

/// Options for the value generator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GenerateOptions {
    /// Seed for reproducible output. Unseeded runs draw from OS entropy.
    pub seed: Option<u64>,
    /// Length of generated vectors and of dictionary/table columns.
    pub vector_len: usize,
    /// Accept the uppercase temporal selectors (`P M D Z N U V T`).
    pub temporal_vectors: bool,
}

impl Default for GenerateOptions {
    fn default() -> Self {
        Self {
            seed: None,
            vector_len: 5,
            temporal_vectors: false,
        }
    }
}
