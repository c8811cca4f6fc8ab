//! Deterministic text rendering for qforge values.
//!
//! Rendering dispatches on the value's shape: atoms are formatted per base
//! type, vectors space-separate their elements, dictionaries print one
//! `key| value` line per entry and tables print a tab-separated grid.

pub mod atom;
pub mod csv;
pub mod errors;
pub mod render;

pub use atom::format_atom;
pub use errors::RenderError;
pub use render::{render, render_to};
