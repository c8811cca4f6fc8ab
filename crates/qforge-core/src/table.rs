use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::symbol::Symbol;
use crate::value::{Element, Value, Vector};

/// Ordered mapping from symbol keys to the positions of a values vector.
///
/// Keys and values always have the same length. Keys are not required to be
/// unique; lookups return the first match.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(try_from = "RawDictionary")]
pub struct Dictionary {
    keys: Vec<Symbol>,
    values: Vector,
}

#[derive(Deserialize, JsonSchema)]
struct RawDictionary {
    keys: Vec<Symbol>,
    values: Vector,
}

impl TryFrom<RawDictionary> for Dictionary {
    type Error = Error;

    fn try_from(raw: RawDictionary) -> Result<Self> {
        Dictionary::from_symbols(raw.keys, raw.values)
    }
}

impl Dictionary {
    /// Builds a dictionary from a symbol vector of keys and a values vector.
    pub fn new(keys: Vector, values: Vector) -> Result<Self> {
        match keys {
            Vector::Symbol(keys) => Self::from_symbols(keys, values),
            other => Err(Error::type_mismatch(
                "symbol vector",
                Value::Vector(other).type_name(),
            )),
        }
    }

    pub fn from_symbols(keys: Vec<Symbol>, values: Vector) -> Result<Self> {
        if keys.len() != values.len() {
            return Err(Error::ShapeMismatch(format!(
                "dictionary has {} keys but {} values",
                keys.len(),
                values.len()
            )));
        }
        Ok(Self { keys, values })
    }

    pub fn keys(&self) -> &[Symbol] {
        &self.keys
    }

    pub fn values(&self) -> &Vector {
        &self.values
    }

    pub fn len(&self) -> usize {
        self.keys.len()
    }

    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }

    /// Key and value at position `index`, in insertion order.
    pub fn entry(&self, index: usize) -> Result<(&Symbol, Element<'_>)> {
        let key = self.keys.get(index).ok_or(Error::IndexOutOfRange {
            index,
            len: self.keys.len(),
        })?;
        Ok((key, self.values.element(index)?))
    }

    pub fn entries(&self) -> impl Iterator<Item = (&Symbol, Element<'_>)> + '_ {
        self.keys.iter().zip(self.values.elements())
    }

    /// Value for the first occurrence of `key`.
    pub fn get(&self, key: &str) -> Option<Element<'_>> {
        let index = self.keys.iter().position(|k| k.as_str() == key)?;
        self.values.element(index).ok()
    }

    pub fn into_parts(self) -> (Vec<Symbol>, Vector) {
        (self.keys, self.values)
    }
}

/// Column-oriented table: named, equal-length column vectors.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(try_from = "RawTable")]
pub struct Table {
    columns: Vec<Symbol>,
    data: Vec<Vector>,
    #[serde(skip)]
    rows: usize,
}

#[derive(Deserialize, JsonSchema)]
struct RawTable {
    columns: Vec<Symbol>,
    data: Vec<Vector>,
}

impl TryFrom<RawTable> for Table {
    type Error = Error;

    fn try_from(raw: RawTable) -> Result<Self> {
        Table::new(raw.columns, raw.data)
    }
}

impl Table {
    pub fn new(columns: Vec<Symbol>, data: Vec<Vector>) -> Result<Self> {
        if columns.len() != data.len() {
            return Err(Error::ShapeMismatch(format!(
                "table has {} column names but {} columns",
                columns.len(),
                data.len()
            )));
        }
        let rows = data.first().map(Vector::len).unwrap_or(0);
        if let Some((name, column)) = columns
            .iter()
            .zip(&data)
            .find(|(_, column)| column.len() != rows)
        {
            return Err(Error::ShapeMismatch(format!(
                "column '{name}' has {} rows, expected {rows}",
                column.len()
            )));
        }
        Ok(Self {
            columns,
            data,
            rows,
        })
    }

    /// Reinterprets a dictionary of column vectors as a table. The values
    /// must be a list whose every element is a vector.
    pub fn flip(dictionary: Dictionary) -> Result<Self> {
        let (columns, values) = dictionary.into_parts();
        let items = match values {
            Vector::List(items) => items,
            other => {
                return Err(Error::type_mismatch(
                    "list of column vectors",
                    Value::Vector(other).type_name(),
                ));
            }
        };
        let data = items
            .into_iter()
            .map(|item| match item {
                Value::Vector(column) => Ok(column),
                other => Err(Error::type_mismatch("column vector", other.type_name())),
            })
            .collect::<Result<Vec<_>>>()?;
        Self::new(columns, data)
    }

    /// Turns the table back into a dictionary of column vectors.
    pub fn unflip(self) -> Dictionary {
        let values = self.data.into_iter().map(Value::Vector).collect();
        Dictionary {
            keys: self.columns,
            values,
        }
    }

    pub fn columns(&self) -> &[Symbol] {
        &self.columns
    }

    pub fn data(&self) -> &[Vector] {
        &self.data
    }

    pub fn column(&self, name: &str) -> Option<&Vector> {
        let index = self.columns.iter().position(|c| c.as_str() == name)?;
        self.data.get(index)
    }

    pub fn column_count(&self) -> usize {
        self.columns.len()
    }

    pub fn row_count(&self) -> usize {
        self.rows
    }

    pub fn cell(&self, row: usize, column: usize) -> Result<Element<'_>> {
        let data = self.data.get(column).ok_or(Error::IndexOutOfRange {
            index: column,
            len: self.data.len(),
        })?;
        data.element(row)
    }

    /// One row as a dictionary keyed by column name.
    pub fn row(&self, row: usize) -> Result<Dictionary> {
        if row >= self.rows {
            return Err(Error::IndexOutOfRange {
                index: row,
                len: self.rows,
            });
        }
        let values = self
            .data
            .iter()
            .map(|column| column.element(row).map(|element| element.to_value()))
            .collect::<Result<Vector>>()?;
        Dictionary::from_symbols(self.columns.clone(), values)
    }
}
