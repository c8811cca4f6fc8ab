use std::collections::BTreeMap;

use rand::RngCore;

use qforge_core::{Atom, BaseType};

pub mod primitives;
pub mod temporal;

/// Draws random atoms of one base type.
pub trait AtomGenerator: Send + Sync {
    fn kind(&self) -> BaseType;

    fn id(&self) -> &'static str {
        self.kind().name()
    }

    /// Whether the uppercase selector builds a vector by default.
    fn vector_by_default(&self) -> bool {
        !self.kind().is_temporal()
    }

    fn sample(&self, rng: &mut dyn RngCore) -> Atom;
}

/// Per-kind generators, one per base type.
pub struct GeneratorRegistry {
    generators: BTreeMap<i16, Box<dyn AtomGenerator>>,
}

impl GeneratorRegistry {
    pub fn new() -> Self {
        let mut registry = Self {
            generators: BTreeMap::new(),
        };
        primitives::register(&mut registry);
        temporal::register(&mut registry);
        registry
    }

    pub fn register_generator(&mut self, generator: Box<dyn AtomGenerator>) {
        self.generators.insert(generator.kind().code(), generator);
    }

    pub fn generator(&self, kind: BaseType) -> Option<&dyn AtomGenerator> {
        let generator = self.generators.get(&kind.code())?;
        Some(generator.as_ref())
    }

    /// Registered generator ids in type-code order.
    pub fn generator_ids(&self) -> Vec<&'static str> {
        self.generators.values().map(|generator| generator.id()).collect()
    }
}

impl Default for GeneratorRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for GeneratorRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GeneratorRegistry")
            .field("generators", &self.generator_ids())
            .finish()
    }
}
