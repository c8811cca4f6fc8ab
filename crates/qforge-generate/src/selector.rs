use std::fmt;

use qforge_core::BaseType;

use crate::errors::GenerationError;

pub const DICTIONARY: &str = "dictionary";
pub const TABLE: &str = "table";

/// Parsed form of a generation request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Selector {
    /// Lowercase type code.
    Atom(BaseType),
    /// Uppercase type code.
    Vector(BaseType),
    Dictionary,
    Table,
}

impl Selector {
    /// Parses a selector string. Anything other than a single type-code
    /// letter or one of the two keywords is `Unimplemented`.
    pub fn parse(input: &str) -> Result<Self, GenerationError> {
        match input {
            DICTIONARY => return Ok(Selector::Dictionary),
            TABLE => return Ok(Selector::Table),
            _ => {}
        }

        let mut chars = input.chars();
        let ch = match (chars.next(), chars.next()) {
            (Some(ch), None) if ch.is_ascii_alphabetic() => ch,
            _ => return Err(GenerationError::unimplemented(format!("selector '{input}'"))),
        };

        let kind = BaseType::from_type_char(ch.to_ascii_lowercase())
            .ok_or_else(|| GenerationError::unimplemented(format!("selector '{input}'")))?;
        if ch.is_ascii_uppercase() {
            Ok(Selector::Vector(kind))
        } else {
            Ok(Selector::Atom(kind))
        }
    }

    /// Every selector the parser accepts, atoms first.
    pub fn all() -> Vec<Selector> {
        BaseType::ALL
            .into_iter()
            .map(Selector::Atom)
            .chain(BaseType::ALL.into_iter().map(Selector::Vector))
            .chain([Selector::Dictionary, Selector::Table])
            .collect()
    }
}

impl fmt::Display for Selector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Selector::Atom(kind) => write!(f, "{}", kind.type_char()),
            Selector::Vector(kind) => write!(f, "{}", kind.type_char().to_ascii_uppercase()),
            Selector::Dictionary => f.write_str(DICTIONARY),
            Selector::Table => f.write_str(TABLE),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_letters_and_keywords() {
        assert_eq!(Selector::parse("j").unwrap(), Selector::Atom(BaseType::Long));
        assert_eq!(Selector::parse("S").unwrap(), Selector::Vector(BaseType::Symbol));
        assert_eq!(Selector::parse("P").unwrap(), Selector::Vector(BaseType::Timestamp));
        assert_eq!(Selector::parse("table").unwrap(), Selector::Table);
        assert_eq!(Selector::parse("dictionary").unwrap(), Selector::Dictionary);
    }

    #[test]
    fn rejects_unknown_selectors() {
        for input in ["", "a", "g", "Q", "jj", "Table", "dict", "1", "é"] {
            let err = Selector::parse(input).unwrap_err();
            assert!(err.is_unimplemented(), "{input} should be unimplemented");
        }
    }

    #[test]
    fn display_round_trips() {
        for selector in Selector::all() {
            assert_eq!(Selector::parse(&selector.to_string()).unwrap(), selector);
        }
    }
}
