use std::collections::HashSet;

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use qforge_core::{Atom, BaseType, Element, TypeTag, Value, Vector};
use qforge_generate::{GenerateOptions, GenerationError, ValueGenerator, generate, generate_with};

const ATOM_CODES: &str = "bxhijefcspmdznuvt";
const VECTOR_CODES: &str = "BXHIJEFCS";

fn seeded(seed: u64) -> ValueGenerator {
    ValueGenerator::new(GenerateOptions {
        seed: Some(seed),
        ..GenerateOptions::default()
    })
    .expect("valid options")
}

fn vector(value: &Value) -> &Vector {
    value.as_vector().expect("vector value")
}

#[test]
fn lowercase_selectors_yield_atoms_with_negative_tags() {
    let mut generator = seeded(1);
    for ch in ATOM_CODES.chars() {
        let kind = BaseType::from_type_char(ch).expect("known code");
        let value = generator.generate(&ch.to_string()).expect("atom");
        assert_eq!(value.type_tag(), TypeTag::new(-kind.code()), "selector {ch}");
        assert_eq!(value.as_atom().map(Atom::base_type), Some(kind));
    }
}

#[test]
fn boolean_atoms_are_zero_or_one() {
    for _ in 0..20 {
        let value = generate("b").expect("boolean atom");
        assert_eq!(value.type_tag(), TypeTag::new(-1));
        assert!(matches!(value, Value::Atom(Atom::Boolean(_))));
    }
}

#[test]
fn uppercase_selectors_yield_five_element_vectors() {
    let mut generator = seeded(2);
    for ch in VECTOR_CODES.chars() {
        let kind = BaseType::from_type_char(ch.to_ascii_lowercase()).expect("known code");
        let value = generator.generate(&ch.to_string()).expect("vector");
        assert_eq!(value.type_tag(), TypeTag::new(kind.code()), "selector {ch}");
        let vector = vector(&value);
        assert_eq!(vector.len(), 5);
        for element in vector.elements() {
            match element {
                Element::Atom(atom) => assert_eq!(atom.base_type(), kind),
                Element::Value(other) => panic!("typed vector yielded {other:?}"),
            }
        }
    }
}

#[test]
fn temporal_vectors_require_opt_in() {
    let mut generator = seeded(3);
    for selector in ["P", "M", "D", "Z", "N", "U", "V", "T"] {
        let err = generator.generate(selector).expect_err("temporal vector");
        assert!(err.is_unimplemented(), "{selector}");
    }

    let mut generator = ValueGenerator::new(GenerateOptions {
        seed: Some(3),
        temporal_vectors: true,
        ..GenerateOptions::default()
    })
    .expect("valid options");
    let value = generator.generate("P").expect("timestamp vector");
    assert_eq!(value.type_tag(), TypeTag::new(12));
    assert_eq!(value.len(), Ok(5));
}

#[test]
fn dictionary_has_nine_distinct_keys_in_canonical_order() {
    let value = generate("dictionary").expect("dictionary");
    assert_eq!(value.type_tag(), TypeTag::DICTIONARY);
    let dictionary = value.as_dictionary().expect("dictionary value");

    let keys: Vec<&str> = dictionary.keys().iter().map(|k| k.as_str()).collect();
    assert_eq!(
        keys,
        ["t_b", "t_x", "t_h", "t_i", "t_j", "t_e", "t_f", "t_c", "t_s"]
    );
    let distinct: HashSet<&str> = keys.iter().copied().collect();
    assert_eq!(distinct.len(), 9);

    for (key, element) in dictionary.entries() {
        let Element::Value(Value::Vector(column)) = element else {
            panic!("{key} is not a vector");
        };
        assert_eq!(column.len(), 5);
        let code = key.trim_start_matches("t_").chars().next().expect("code");
        assert_eq!(column.base_type().map(BaseType::type_char), Some(code));
    }
}

#[test]
fn table_flips_the_dictionary() {
    let value = generate("table").expect("table");
    assert_eq!(value.type_tag(), TypeTag::TABLE);
    let table = value.as_table().expect("table value");
    assert_eq!(table.column_count(), 9);
    assert_eq!(table.row_count(), 5);
    assert!(table.data().iter().all(|column| column.len() == 5));

    let dictionary = generate("dictionary").expect("dictionary");
    let keys = dictionary.as_dictionary().expect("dictionary value").keys();
    assert_eq!(table.columns(), keys);
}

#[test]
fn unrecognized_selectors_are_unimplemented() {
    for selector in ["", "a", "A", "Q", "bb", "atom", "Dictionary", "tables", " "] {
        let err = generate(selector).expect_err("unrecognized selector");
        assert!(
            matches!(
                err,
                GenerationError::Value(qforge_core::Error::Unimplemented(_))
            ),
            "{selector:?}"
        );
    }
}

#[test]
fn same_seed_same_value() {
    let first = seeded(42).generate("table").expect("table");
    let second = seeded(42).generate("table").expect("table");
    assert_eq!(first, second);
}

#[test]
fn caller_supplied_rng_and_length() {
    let options = GenerateOptions {
        vector_len: 1,
        ..GenerateOptions::default()
    };
    let mut rng = ChaCha8Rng::seed_from_u64(9);
    let value = generate_with("J", &options, &mut rng).expect("long vector");
    assert_eq!(value.len(), Ok(1));

    let options = GenerateOptions {
        vector_len: 0,
        ..GenerateOptions::default()
    };
    let value = generate_with("table", &options, &mut rng).expect("empty table");
    assert_eq!(value.len(), Ok(0));
}

#[test]
fn rejects_oversized_vectors() {
    let options = GenerateOptions {
        vector_len: usize::MAX,
        ..GenerateOptions::default()
    };
    assert!(matches!(
        ValueGenerator::new(options),
        Err(GenerationError::InvalidOptions(_))
    ));
}
