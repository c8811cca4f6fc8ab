use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::symbol::Symbol;
use crate::table::{Dictionary, Table};
use crate::types::{BaseType, TypeTag};

/// A single scalar. The payload width is fixed by the variant.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(tag = "type", content = "value", rename_all = "snake_case")]
pub enum Atom {
    Boolean(bool),
    Byte(u8),
    Short(i16),
    Int(i32),
    Long(i64),
    Real(f32),
    Float(f64),
    Char(u8),
    Symbol(Symbol),
    /// Nanoseconds since 2000-01-01.
    Timestamp(i64),
    /// Months since 2000-01.
    Month(i32),
    /// Days since 2000-01-01.
    Date(i32),
    /// Fractional days since 2000-01-01.
    Datetime(f64),
    /// Nanosecond duration.
    Timespan(i64),
    Minute(i32),
    Second(i32),
    /// Milliseconds.
    Time(i32),
}

impl Atom {
    pub fn base_type(&self) -> BaseType {
        match self {
            Atom::Boolean(_) => BaseType::Boolean,
            Atom::Byte(_) => BaseType::Byte,
            Atom::Short(_) => BaseType::Short,
            Atom::Int(_) => BaseType::Int,
            Atom::Long(_) => BaseType::Long,
            Atom::Real(_) => BaseType::Real,
            Atom::Float(_) => BaseType::Float,
            Atom::Char(_) => BaseType::Char,
            Atom::Symbol(_) => BaseType::Symbol,
            Atom::Timestamp(_) => BaseType::Timestamp,
            Atom::Month(_) => BaseType::Month,
            Atom::Date(_) => BaseType::Date,
            Atom::Datetime(_) => BaseType::Datetime,
            Atom::Timespan(_) => BaseType::Timespan,
            Atom::Minute(_) => BaseType::Minute,
            Atom::Second(_) => BaseType::Second,
            Atom::Time(_) => BaseType::Time,
        }
    }

    pub fn type_tag(&self) -> TypeTag {
        self.base_type().atom_tag()
    }

    pub fn symbol(text: impl AsRef<str>) -> Self {
        Atom::Symbol(Symbol::new(text))
    }
}

/// An ordered, homogeneous sequence. `List` holds arbitrary values (tag 0);
/// every other variant stores elements of exactly one base type.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(tag = "type", content = "items", rename_all = "snake_case")]
pub enum Vector {
    List(Vec<Value>),
    Boolean(Vec<bool>),
    Byte(Vec<u8>),
    Short(Vec<i16>),
    Int(Vec<i32>),
    Long(Vec<i64>),
    Real(Vec<f32>),
    Float(Vec<f64>),
    Char(Vec<u8>),
    Symbol(Vec<Symbol>),
    Timestamp(Vec<i64>),
    Month(Vec<i32>),
    Date(Vec<i32>),
    Datetime(Vec<f64>),
    Timespan(Vec<i64>),
    Minute(Vec<i32>),
    Second(Vec<i32>),
    Time(Vec<i32>),
}

/// Borrowed view of one vector element.
#[derive(Debug, Clone, PartialEq)]
pub enum Element<'a> {
    Atom(Atom),
    Value(&'a Value),
}

impl Element<'_> {
    pub fn to_value(&self) -> Value {
        match self {
            Element::Atom(atom) => Value::Atom(atom.clone()),
            Element::Value(value) => (*value).clone(),
        }
    }
}

impl Vector {
    /// An empty vector of the given kind, or an empty list for `None`.
    pub fn empty(kind: Option<BaseType>) -> Self {
        match kind {
            None => Vector::List(Vec::new()),
            Some(BaseType::Boolean) => Vector::Boolean(Vec::new()),
            Some(BaseType::Byte) => Vector::Byte(Vec::new()),
            Some(BaseType::Short) => Vector::Short(Vec::new()),
            Some(BaseType::Int) => Vector::Int(Vec::new()),
            Some(BaseType::Long) => Vector::Long(Vec::new()),
            Some(BaseType::Real) => Vector::Real(Vec::new()),
            Some(BaseType::Float) => Vector::Float(Vec::new()),
            Some(BaseType::Char) => Vector::Char(Vec::new()),
            Some(BaseType::Symbol) => Vector::Symbol(Vec::new()),
            Some(BaseType::Timestamp) => Vector::Timestamp(Vec::new()),
            Some(BaseType::Month) => Vector::Month(Vec::new()),
            Some(BaseType::Date) => Vector::Date(Vec::new()),
            Some(BaseType::Datetime) => Vector::Datetime(Vec::new()),
            Some(BaseType::Timespan) => Vector::Timespan(Vec::new()),
            Some(BaseType::Minute) => Vector::Minute(Vec::new()),
            Some(BaseType::Second) => Vector::Second(Vec::new()),
            Some(BaseType::Time) => Vector::Time(Vec::new()),
        }
    }

    /// Collects atoms into a typed vector of `kind`. Fails with
    /// `TypeMismatch` on the first atom of a different kind.
    pub fn from_atoms(kind: BaseType, atoms: impl IntoIterator<Item = Atom>) -> Result<Self> {
        let mut vector = Vector::empty(Some(kind));
        for atom in atoms {
            vector.push_atom(atom)?;
        }
        Ok(vector)
    }

    fn push_atom(&mut self, atom: Atom) -> Result<()> {
        match (self, atom) {
            (Vector::List(items), atom) => items.push(Value::Atom(atom)),
            (Vector::Boolean(items), Atom::Boolean(v)) => items.push(v),
            (Vector::Byte(items), Atom::Byte(v)) => items.push(v),
            (Vector::Short(items), Atom::Short(v)) => items.push(v),
            (Vector::Int(items), Atom::Int(v)) => items.push(v),
            (Vector::Long(items), Atom::Long(v)) => items.push(v),
            (Vector::Real(items), Atom::Real(v)) => items.push(v),
            (Vector::Float(items), Atom::Float(v)) => items.push(v),
            (Vector::Char(items), Atom::Char(v)) => items.push(v),
            (Vector::Symbol(items), Atom::Symbol(v)) => items.push(v),
            (Vector::Timestamp(items), Atom::Timestamp(v)) => items.push(v),
            (Vector::Month(items), Atom::Month(v)) => items.push(v),
            (Vector::Date(items), Atom::Date(v)) => items.push(v),
            (Vector::Datetime(items), Atom::Datetime(v)) => items.push(v),
            (Vector::Timespan(items), Atom::Timespan(v)) => items.push(v),
            (Vector::Minute(items), Atom::Minute(v)) => items.push(v),
            (Vector::Second(items), Atom::Second(v)) => items.push(v),
            (Vector::Time(items), Atom::Time(v)) => items.push(v),
            (vector, atom) => {
                return Err(Error::type_mismatch(
                    vector.type_name(),
                    atom.base_type().name(),
                ));
            }
        }
        Ok(())
    }

    /// Element kind, `None` for a heterogeneous list.
    pub fn base_type(&self) -> Option<BaseType> {
        match self {
            Vector::List(_) => None,
            Vector::Boolean(_) => Some(BaseType::Boolean),
            Vector::Byte(_) => Some(BaseType::Byte),
            Vector::Short(_) => Some(BaseType::Short),
            Vector::Int(_) => Some(BaseType::Int),
            Vector::Long(_) => Some(BaseType::Long),
            Vector::Real(_) => Some(BaseType::Real),
            Vector::Float(_) => Some(BaseType::Float),
            Vector::Char(_) => Some(BaseType::Char),
            Vector::Symbol(_) => Some(BaseType::Symbol),
            Vector::Timestamp(_) => Some(BaseType::Timestamp),
            Vector::Month(_) => Some(BaseType::Month),
            Vector::Date(_) => Some(BaseType::Date),
            Vector::Datetime(_) => Some(BaseType::Datetime),
            Vector::Timespan(_) => Some(BaseType::Timespan),
            Vector::Minute(_) => Some(BaseType::Minute),
            Vector::Second(_) => Some(BaseType::Second),
            Vector::Time(_) => Some(BaseType::Time),
        }
    }

    pub fn type_tag(&self) -> TypeTag {
        self.base_type()
            .map(BaseType::vector_tag)
            .unwrap_or(TypeTag::LIST)
    }

    fn type_name(&self) -> String {
        match self.base_type() {
            Some(kind) => format!("{kind} vector"),
            None => "list".to_string(),
        }
    }

    pub fn len(&self) -> usize {
        match self {
            Vector::List(items) => items.len(),
            Vector::Boolean(items) => items.len(),
            Vector::Byte(items) | Vector::Char(items) => items.len(),
            Vector::Short(items) => items.len(),
            Vector::Int(items)
            | Vector::Month(items)
            | Vector::Date(items)
            | Vector::Minute(items)
            | Vector::Second(items)
            | Vector::Time(items) => items.len(),
            Vector::Long(items) | Vector::Timestamp(items) | Vector::Timespan(items) => {
                items.len()
            }
            Vector::Real(items) => items.len(),
            Vector::Float(items) | Vector::Datetime(items) => items.len(),
            Vector::Symbol(items) => items.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Element at `index`, bounds checked.
    pub fn element(&self, index: usize) -> Result<Element<'_>> {
        let len = self.len();
        if index >= len {
            return Err(Error::IndexOutOfRange { index, len });
        }
        let atom = match self {
            Vector::List(items) => return Ok(Element::Value(&items[index])),
            Vector::Boolean(items) => Atom::Boolean(items[index]),
            Vector::Byte(items) => Atom::Byte(items[index]),
            Vector::Short(items) => Atom::Short(items[index]),
            Vector::Int(items) => Atom::Int(items[index]),
            Vector::Long(items) => Atom::Long(items[index]),
            Vector::Real(items) => Atom::Real(items[index]),
            Vector::Float(items) => Atom::Float(items[index]),
            Vector::Char(items) => Atom::Char(items[index]),
            Vector::Symbol(items) => Atom::Symbol(items[index].clone()),
            Vector::Timestamp(items) => Atom::Timestamp(items[index]),
            Vector::Month(items) => Atom::Month(items[index]),
            Vector::Date(items) => Atom::Date(items[index]),
            Vector::Datetime(items) => Atom::Datetime(items[index]),
            Vector::Timespan(items) => Atom::Timespan(items[index]),
            Vector::Minute(items) => Atom::Minute(items[index]),
            Vector::Second(items) => Atom::Second(items[index]),
            Vector::Time(items) => Atom::Time(items[index]),
        };
        Ok(Element::Atom(atom))
    }

    /// Atom at `index`. List elements must themselves be atoms.
    pub fn atom(&self, index: usize) -> Result<Atom> {
        match self.element(index)? {
            Element::Atom(atom) => Ok(atom),
            Element::Value(Value::Atom(atom)) => Ok(atom.clone()),
            Element::Value(other) => Err(Error::type_mismatch("atom", other.type_name())),
        }
    }

    pub fn elements(&self) -> impl Iterator<Item = Element<'_>> + '_ {
        (0..self.len()).filter_map(move |index| self.element(index).ok())
    }

    pub fn as_symbols(&self) -> Option<&[Symbol]> {
        match self {
            Vector::Symbol(items) => Some(items),
            _ => None,
        }
    }

    pub fn as_list(&self) -> Option<&[Value]> {
        match self {
            Vector::List(items) => Some(items),
            _ => None,
        }
    }
}

impl FromIterator<Value> for Vector {
    fn from_iter<I: IntoIterator<Item = Value>>(iter: I) -> Self {
        Vector::List(iter.into_iter().collect())
    }
}

/// Any value the generator can build and the renderer can print.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum Value {
    Atom(Atom),
    Vector(Vector),
    Dictionary(Dictionary),
    Table(Table),
}

impl Value {
    pub fn type_tag(&self) -> TypeTag {
        match self {
            Value::Atom(atom) => atom.type_tag(),
            Value::Vector(vector) => vector.type_tag(),
            Value::Dictionary(_) => TypeTag::DICTIONARY,
            Value::Table(_) => TypeTag::TABLE,
        }
    }

    /// Element count: vector length, dictionary entries or table rows.
    pub fn len(&self) -> Result<usize> {
        match self {
            Value::Atom(atom) => Err(Error::type_mismatch(
                "container",
                format!("{} atom", atom.base_type()),
            )),
            Value::Vector(vector) => Ok(vector.len()),
            Value::Dictionary(dictionary) => Ok(dictionary.len()),
            Value::Table(table) => Ok(table.row_count()),
        }
    }

    pub fn type_name(&self) -> String {
        match self {
            Value::Atom(atom) => format!("{} atom", atom.base_type()),
            Value::Vector(vector) => vector.type_name(),
            Value::Dictionary(_) => "dictionary".to_string(),
            Value::Table(_) => "table".to_string(),
        }
    }

    pub fn as_atom(&self) -> Option<&Atom> {
        match self {
            Value::Atom(atom) => Some(atom),
            _ => None,
        }
    }

    pub fn as_vector(&self) -> Option<&Vector> {
        match self {
            Value::Vector(vector) => Some(vector),
            _ => None,
        }
    }

    pub fn as_dictionary(&self) -> Option<&Dictionary> {
        match self {
            Value::Dictionary(dictionary) => Some(dictionary),
            _ => None,
        }
    }

    pub fn as_table(&self) -> Option<&Table> {
        match self {
            Value::Table(table) => Some(table),
            _ => None,
        }
    }
}

impl From<Atom> for Value {
    fn from(atom: Atom) -> Self {
        Value::Atom(atom)
    }
}

impl From<Vector> for Value {
    fn from(vector: Vector) -> Self {
        Value::Vector(vector)
    }
}

impl From<Dictionary> for Value {
    fn from(dictionary: Dictionary) -> Self {
        Value::Dictionary(dictionary)
    }
}

impl From<Table> for Value {
    fn from(table: Table) -> Self {
        Value::Table(table)
    }
}
