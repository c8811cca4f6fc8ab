use rand::{RngCore, SeedableRng};
use rand_chacha::ChaCha8Rng;
use tracing::debug;

use qforge_core::{BaseType, Dictionary, Symbol, Table, Value, Vector};

use crate::errors::GenerationError;
use crate::generators::{AtomGenerator, GeneratorRegistry};
use crate::model::{GenerateOptions, MAX_VECTOR_LEN};
use crate::selector::Selector;

/// Column kinds of the dictionary and table fixtures, in key order.
pub const FIXTURE_TYPES: &str = "bxhijefcs";
/// Prefix of fixture keys: `t_b`, `t_x`, ...
pub const FIXTURE_KEY_PREFIX: &str = "t_";

/// Generates one value with default options and thread-local randomness.
pub fn generate(selector: &str) -> Result<Value, GenerationError> {
    generate_with(selector, &GenerateOptions::default(), &mut rand::rng())
}

/// Generates one value drawing from the caller's random source. The
/// `seed` option is ignored here; the caller owns seeding.
pub fn generate_with(
    selector: &str,
    options: &GenerateOptions,
    rng: &mut dyn RngCore,
) -> Result<Value, GenerationError> {
    validate_options(options)?;
    let registry = GeneratorRegistry::new();
    build(&registry, options, selector, rng)
}

/// Reusable generator owning its registry and random source.
#[derive(Debug)]
pub struct ValueGenerator {
    options: GenerateOptions,
    registry: GeneratorRegistry,
    rng: ChaCha8Rng,
}

impl ValueGenerator {
    pub fn new(options: GenerateOptions) -> Result<Self, GenerationError> {
        validate_options(&options)?;
        let rng = match options.seed {
            Some(seed) => ChaCha8Rng::seed_from_u64(seed),
            None => ChaCha8Rng::from_rng(&mut rand::rng()),
        };
        Ok(Self {
            options,
            registry: GeneratorRegistry::new(),
            rng,
        })
    }

    pub fn options(&self) -> &GenerateOptions {
        &self.options
    }

    pub fn registry(&self) -> &GeneratorRegistry {
        &self.registry
    }

    pub fn generate(&mut self, selector: &str) -> Result<Value, GenerationError> {
        build(&self.registry, &self.options, selector, &mut self.rng)
    }
}

fn validate_options(options: &GenerateOptions) -> Result<(), GenerationError> {
    if options.vector_len > MAX_VECTOR_LEN {
        return Err(GenerationError::InvalidOptions(format!(
            "vector_len {} exceeds {MAX_VECTOR_LEN}",
            options.vector_len
        )));
    }
    Ok(())
}

fn build(
    registry: &GeneratorRegistry,
    options: &GenerateOptions,
    selector: &str,
    rng: &mut dyn RngCore,
) -> Result<Value, GenerationError> {
    let value = match Selector::parse(selector)? {
        Selector::Atom(kind) => Value::Atom(generator(registry, kind)?.sample(rng)),
        Selector::Vector(kind) => {
            let generator = generator(registry, kind)?;
            if !generator.vector_by_default() && !options.temporal_vectors {
                return Err(GenerationError::unimplemented(format!(
                    "vector selector '{selector}'"
                )));
            }
            Value::Vector(vector(generator, options.vector_len, rng)?)
        }
        Selector::Dictionary => Value::Dictionary(fixture(registry, options, rng)?),
        Selector::Table => Value::Table(Table::flip(fixture(registry, options, rng)?)?),
    };

    debug!(
        selector,
        type_tag = %value.type_tag(),
        len = value.len().ok(),
        "value generated"
    );
    Ok(value)
}

fn generator(
    registry: &GeneratorRegistry,
    kind: BaseType,
) -> Result<&dyn AtomGenerator, GenerationError> {
    registry
        .generator(kind)
        .ok_or_else(|| GenerationError::unimplemented(format!("{kind} generator")))
}

fn vector(
    generator: &dyn AtomGenerator,
    len: usize,
    rng: &mut dyn RngCore,
) -> Result<Vector, GenerationError> {
    let atoms = (0..len).map(|_| generator.sample(rng)).collect::<Vec<_>>();
    Ok(Vector::from_atoms(generator.kind(), atoms)?)
}

/// The nine-entry dictionary keyed `t_<code>` with one vector per kind.
fn fixture(
    registry: &GeneratorRegistry,
    options: &GenerateOptions,
    rng: &mut dyn RngCore,
) -> Result<Dictionary, GenerationError> {
    let mut keys = Vec::with_capacity(FIXTURE_TYPES.len());
    let mut values = Vec::with_capacity(FIXTURE_TYPES.len());
    for ch in FIXTURE_TYPES.chars() {
        let kind = BaseType::from_type_char(ch)
            .ok_or_else(|| GenerationError::unimplemented(format!("type code '{ch}'")))?;
        keys.push(Symbol::from(format!("{FIXTURE_KEY_PREFIX}{ch}")));
        values.push(Value::Vector(vector(
            generator(registry, kind)?,
            options.vector_len,
            rng,
        )?));
    }
    Ok(Dictionary::from_symbols(keys, Vector::List(values))?)
}
