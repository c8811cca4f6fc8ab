use std::fmt;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Primitive element kind of atoms and vectors.
///
/// Variant order follows the numeric codes so the lookup table below can be
/// indexed directly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum BaseType {
    Boolean,
    Byte,
    Short,
    Int,
    Long,
    Real,
    Float,
    Char,
    Symbol,
    Timestamp,
    Month,
    Date,
    Datetime,
    Timespan,
    Minute,
    Second,
    Time,
}

struct BaseTypeInfo {
    code: i16,
    type_char: char,
    name: &'static str,
    temporal: bool,
}

const BASE_TYPES: [BaseTypeInfo; 17] = [
    BaseTypeInfo { code: 1, type_char: 'b', name: "boolean", temporal: false },
    BaseTypeInfo { code: 4, type_char: 'x', name: "byte", temporal: false },
    BaseTypeInfo { code: 5, type_char: 'h', name: "short", temporal: false },
    BaseTypeInfo { code: 6, type_char: 'i', name: "int", temporal: false },
    BaseTypeInfo { code: 7, type_char: 'j', name: "long", temporal: false },
    BaseTypeInfo { code: 8, type_char: 'e', name: "real", temporal: false },
    BaseTypeInfo { code: 9, type_char: 'f', name: "float", temporal: false },
    BaseTypeInfo { code: 10, type_char: 'c', name: "char", temporal: false },
    BaseTypeInfo { code: 11, type_char: 's', name: "symbol", temporal: false },
    BaseTypeInfo { code: 12, type_char: 'p', name: "timestamp", temporal: true },
    BaseTypeInfo { code: 13, type_char: 'm', name: "month", temporal: true },
    BaseTypeInfo { code: 14, type_char: 'd', name: "date", temporal: true },
    BaseTypeInfo { code: 15, type_char: 'z', name: "datetime", temporal: true },
    BaseTypeInfo { code: 16, type_char: 'n', name: "timespan", temporal: true },
    BaseTypeInfo { code: 17, type_char: 'u', name: "minute", temporal: true },
    BaseTypeInfo { code: 18, type_char: 'v', name: "second", temporal: true },
    BaseTypeInfo { code: 19, type_char: 't', name: "time", temporal: true },
];

impl BaseType {
    /// Every base type in code order.
    pub const ALL: [BaseType; 17] = [
        BaseType::Boolean,
        BaseType::Byte,
        BaseType::Short,
        BaseType::Int,
        BaseType::Long,
        BaseType::Real,
        BaseType::Float,
        BaseType::Char,
        BaseType::Symbol,
        BaseType::Timestamp,
        BaseType::Month,
        BaseType::Date,
        BaseType::Datetime,
        BaseType::Timespan,
        BaseType::Minute,
        BaseType::Second,
        BaseType::Time,
    ];

    fn info(self) -> &'static BaseTypeInfo {
        &BASE_TYPES[self as usize]
    }

    /// Numeric code, positive (the vector tag of this kind).
    pub fn code(self) -> i16 {
        self.info().code
    }

    /// Lowercase type-code character (`b`, `x`, `h`, ...).
    pub fn type_char(self) -> char {
        self.info().type_char
    }

    pub fn name(self) -> &'static str {
        self.info().name
    }

    /// True for the calendar and duration kinds (`p` through `t`).
    pub fn is_temporal(self) -> bool {
        self.info().temporal
    }

    pub fn from_code(code: i16) -> Result<Self> {
        Self::ALL
            .into_iter()
            .find(|kind| kind.code() == code)
            .ok_or_else(|| Error::Unimplemented(format!("base type code {code}")))
    }

    /// Looks up a kind by its lowercase type-code character.
    pub fn from_type_char(ch: char) -> Option<Self> {
        Self::ALL.into_iter().find(|kind| kind.type_char() == ch)
    }

    pub fn atom_tag(self) -> TypeTag {
        TypeTag(-self.code())
    }

    pub fn vector_tag(self) -> TypeTag {
        TypeTag(self.code())
    }
}

impl fmt::Display for BaseType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Signed numeric tag identifying a value's shape and element kind.
///
/// Negative tags are atoms, `0` is a heterogeneous list, `1..=19` are typed
/// vectors, `98` is a table and `99` a dictionary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TypeTag(i16);

impl TypeTag {
    pub const LIST: TypeTag = TypeTag(0);
    pub const TABLE: TypeTag = TypeTag(98);
    pub const DICTIONARY: TypeTag = TypeTag(99);

    pub const fn new(raw: i16) -> Self {
        Self(raw)
    }

    pub const fn raw(self) -> i16 {
        self.0
    }

    pub fn is_atom(self) -> bool {
        self.0 < 0
    }

    /// Classifies the tag, in the same priority order the renderer uses.
    pub fn shape(self) -> Result<Shape> {
        match self.0 {
            raw if raw < 0 => raw
                .checked_neg()
                .and_then(|code| BaseType::from_code(code).ok())
                .map(Shape::Atom)
                .ok_or_else(|| Error::Unimplemented(format!("type tag {raw}"))),
            0 => Ok(Shape::List),
            raw @ 1..=19 => BaseType::from_code(raw)
                .map(Shape::Vector)
                .map_err(|_| Error::Unimplemented(format!("type tag {raw}"))),
            98 => Ok(Shape::Table),
            99 => Ok(Shape::Dictionary),
            raw => Err(Error::Unimplemented(format!("type tag {raw}"))),
        }
    }
}

impl From<TypeTag> for i16 {
    fn from(tag: TypeTag) -> Self {
        tag.0
    }
}

impl fmt::Display for TypeTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Decoded form of a [`TypeTag`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Shape {
    Atom(BaseType),
    List,
    Vector(BaseType),
    Table,
    Dictionary,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lookup_table_matches_variant_order() {
        for (index, kind) in BaseType::ALL.into_iter().enumerate() {
            assert_eq!(kind as usize, index);
            assert_eq!(BaseType::from_code(kind.code()), Ok(kind));
            assert_eq!(BaseType::from_type_char(kind.type_char()), Some(kind));
        }
    }

    #[test]
    fn codes_two_and_three_are_unassigned() {
        assert!(matches!(BaseType::from_code(2), Err(Error::Unimplemented(_))));
        assert!(matches!(BaseType::from_code(3), Err(Error::Unimplemented(_))));
    }

    #[test]
    fn classifies_tags() {
        assert_eq!(TypeTag::new(-7).shape(), Ok(Shape::Atom(BaseType::Long)));
        assert_eq!(TypeTag::new(0).shape(), Ok(Shape::List));
        assert_eq!(TypeTag::new(11).shape(), Ok(Shape::Vector(BaseType::Symbol)));
        assert_eq!(TypeTag::TABLE.shape(), Ok(Shape::Table));
        assert_eq!(TypeTag::DICTIONARY.shape(), Ok(Shape::Dictionary));
        for raw in [-20, -2, 2, 20, 97, 100] {
            assert!(matches!(
                TypeTag::new(raw).shape(),
                Err(Error::Unimplemented(_))
            ));
        }
    }
}
