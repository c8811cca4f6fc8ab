use rand::{Rng, RngCore};

use qforge_core::{Atom, BaseType, Symbol};

use crate::generators::{AtomGenerator, GeneratorRegistry};

/// Exclusive bound for short/int/long draws.
const INT_BOUND: i64 = 100;
/// Floats are drawn as hundredths below this bound.
const FLOAT_HUNDREDTHS_BOUND: u32 = 10_000;
/// Exclusive bound on generated symbol length.
const SYMBOL_LEN_BOUND: usize = 32;
const ALPHABET: &[u8] = b"abcdefghijklmnopqrstuvwxyz";

pub fn register(registry: &mut GeneratorRegistry) {
    registry.register_generator(Box::new(BoolGenerator));
    registry.register_generator(Box::new(ByteGenerator));
    registry.register_generator(Box::new(IntGenerator {
        kind: BaseType::Short,
    }));
    registry.register_generator(Box::new(IntGenerator {
        kind: BaseType::Int,
    }));
    registry.register_generator(Box::new(IntGenerator {
        kind: BaseType::Long,
    }));
    registry.register_generator(Box::new(FloatGenerator {
        kind: BaseType::Real,
    }));
    registry.register_generator(Box::new(FloatGenerator {
        kind: BaseType::Float,
    }));
    registry.register_generator(Box::new(CharGenerator));
    registry.register_generator(Box::new(SymbolGenerator));
}

pub(crate) fn random_letter(rng: &mut dyn RngCore) -> u8 {
    ALPHABET[rng.random_range(0..ALPHABET.len())]
}

/// Random lowercase string, `0..32` characters long.
pub(crate) fn random_symbol(rng: &mut dyn RngCore) -> Symbol {
    let len = rng.random_range(0..SYMBOL_LEN_BOUND);
    let text: String = (0..len).map(|_| random_letter(rng) as char).collect();
    Symbol::from(text)
}

struct BoolGenerator;

impl AtomGenerator for BoolGenerator {
    fn kind(&self) -> BaseType {
        BaseType::Boolean
    }

    fn sample(&self, rng: &mut dyn RngCore) -> Atom {
        Atom::Boolean(rng.random_bool(0.5))
    }
}

struct ByteGenerator;

impl AtomGenerator for ByteGenerator {
    fn kind(&self) -> BaseType {
        BaseType::Byte
    }

    fn sample(&self, rng: &mut dyn RngCore) -> Atom {
        Atom::Byte(rng.random())
    }
}

struct IntGenerator {
    kind: BaseType,
}

impl AtomGenerator for IntGenerator {
    fn kind(&self) -> BaseType {
        self.kind
    }

    fn sample(&self, rng: &mut dyn RngCore) -> Atom {
        let value = rng.random_range(0..INT_BOUND);
        match self.kind {
            BaseType::Short => Atom::Short(value as i16),
            BaseType::Int => Atom::Int(value as i32),
            _ => Atom::Long(value),
        }
    }
}

struct FloatGenerator {
    kind: BaseType,
}

impl AtomGenerator for FloatGenerator {
    fn kind(&self) -> BaseType {
        self.kind
    }

    fn sample(&self, rng: &mut dyn RngCore) -> Atom {
        let hundredths = rng.random_range(0..FLOAT_HUNDREDTHS_BOUND);
        match self.kind {
            BaseType::Real => Atom::Real(hundredths as f32 / 100.0),
            _ => Atom::Float(f64::from(hundredths) / 100.0),
        }
    }
}

struct CharGenerator;

impl AtomGenerator for CharGenerator {
    fn kind(&self) -> BaseType {
        BaseType::Char
    }

    fn sample(&self, rng: &mut dyn RngCore) -> Atom {
        Atom::Char(random_letter(rng))
    }
}

struct SymbolGenerator;

impl AtomGenerator for SymbolGenerator {
    fn kind(&self) -> BaseType {
        BaseType::Symbol
    }

    fn sample(&self, rng: &mut dyn RngCore) -> Atom {
        Atom::Symbol(random_symbol(rng))
    }
}

#[cfg(test)]
mod tests {
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    use super::*;

    #[test]
    fn draws_stay_in_range() {
        let registry = GeneratorRegistry::new();
        let mut rng = ChaCha8Rng::seed_from_u64(7);
        for _ in 0..500 {
            for kind in [BaseType::Short, BaseType::Int, BaseType::Long] {
                let atom = registry.generator(kind).unwrap().sample(&mut rng);
                let value = match atom {
                    Atom::Short(v) => i64::from(v),
                    Atom::Int(v) => i64::from(v),
                    Atom::Long(v) => v,
                    other => panic!("unexpected atom {other:?}"),
                };
                assert!((0..100).contains(&value));
            }
            match registry.generator(BaseType::Float).unwrap().sample(&mut rng) {
                Atom::Float(v) => assert!((0.0..100.0).contains(&v)),
                other => panic!("unexpected atom {other:?}"),
            }
            match registry.generator(BaseType::Char).unwrap().sample(&mut rng) {
                Atom::Char(c) => assert!(c.is_ascii_lowercase()),
                other => panic!("unexpected atom {other:?}"),
            }
        }
    }

    #[test]
    fn symbols_are_short_lowercase_words() {
        let mut rng = ChaCha8Rng::seed_from_u64(11);
        for _ in 0..200 {
            let symbol = random_symbol(&mut rng);
            assert!(symbol.len() < 32);
            assert!(symbol.chars().all(|c| c.is_ascii_lowercase()));
        }
    }
}
