//! Value model for qforge.
//!
//! This crate defines the tagged value representation shared by the
//! generator and the renderer: atoms, homogeneous vectors, dictionaries and
//! tables, plus the numeric type-tag taxonomy that names their shapes.

pub mod error;
pub mod symbol;
pub mod table;
pub mod temporal;
pub mod types;
pub mod value;

pub use error::{Error, Result};
pub use symbol::Symbol;
pub use table::{Dictionary, Table};
pub use types::{BaseType, Shape, TypeTag};
pub use value::{Atom, Element, Value, Vector};
