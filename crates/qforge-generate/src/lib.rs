//! Randomized value generation for qforge.
//!
//! A selector names the shape to build: a lowercase type code yields an
//! atom, an uppercase one a vector, and `dictionary` / `table` yield the
//! fixed nine-column fixtures. Every generated value satisfies the value
//! model invariants regardless of the random draw.

pub mod engine;
pub mod errors;
pub mod generators;
pub mod model;
pub mod selector;

pub use engine::{ValueGenerator, generate, generate_with};
pub use errors::GenerationError;
pub use model::GenerateOptions;
pub use selector::Selector;
