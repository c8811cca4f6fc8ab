use std::io::Write;

use tracing::debug;

use qforge_core::{Dictionary, Element, Table, Value, Vector};

use crate::atom::write_atom;
use crate::errors::RenderError;

/// Renders a value to text, terminated by a single line break.
pub fn render(value: &Value) -> Result<String, RenderError> {
    let mut out = String::new();
    write_value(&mut out, value)?;
    out.push('\n');
    Ok(out)
}

/// Renders a value into `writer` and returns the number of bytes written.
/// The writer is flushed but not closed.
pub fn render_to<W: Write>(writer: W, value: &Value) -> Result<u64, RenderError> {
    let text = render(value)?;
    let mut counting = CountingWriter::new(writer);
    counting.write_all(text.as_bytes())?;
    counting.flush()?;
    debug!(
        type_tag = %value.type_tag(),
        bytes_written = counting.bytes_written(),
        "value rendered"
    );
    Ok(counting.bytes_written())
}

fn write_value(out: &mut String, value: &Value) -> Result<(), RenderError> {
    match value {
        Value::Atom(atom) => write_atom(out, atom),
        Value::Vector(vector) => write_vector(out, vector),
        Value::Dictionary(dictionary) => write_dictionary(out, dictionary),
        Value::Table(table) => write_table(out, table),
    }
}

fn write_element(out: &mut String, element: &Element<'_>) -> Result<(), RenderError> {
    match element {
        Element::Atom(atom) => write_atom(out, atom),
        Element::Value(value) => write_value(out, value),
    }
}

/// Space-separated elements; a single element gets a leading comma so it
/// reads differently from an atom.
fn write_vector(out: &mut String, vector: &Vector) -> Result<(), RenderError> {
    if vector.len() == 1 {
        out.push(',');
    }
    for index in 0..vector.len() {
        if index > 0 {
            out.push(' ');
        }
        write_element(out, &vector.element(index)?)?;
    }
    Ok(())
}

fn write_dictionary(out: &mut String, dictionary: &Dictionary) -> Result<(), RenderError> {
    for index in 0..dictionary.len() {
        if index > 0 {
            out.push('\n');
        }
        let (key, value) = dictionary.entry(index)?;
        out.push_str(key);
        out.push_str("| ");
        write_element(out, &value)?;
    }
    Ok(())
}

fn write_table(out: &mut String, table: &Table) -> Result<(), RenderError> {
    out.push_str(&table.columns().join("\t"));
    for row in 0..table.row_count() {
        out.push('\n');
        for column in 0..table.column_count() {
            if column > 0 {
                out.push('\t');
            }
            write_element(out, &table.cell(row, column)?)?;
        }
    }
    Ok(())
}

pub(crate) struct CountingWriter<W: Write> {
    inner: W,
    bytes: u64,
}

impl<W: Write> CountingWriter<W> {
    pub(crate) fn new(inner: W) -> Self {
        Self { inner, bytes: 0 }
    }

    pub(crate) fn bytes_written(&self) -> u64 {
        self.bytes
    }
}

impl<W: Write> Write for CountingWriter<W> {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        let size = self.inner.write(buf)?;
        self.bytes = self.bytes.saturating_add(size as u64);
        Ok(size)
    }

    fn flush(&mut self) -> std::io::Result<()> {
        self.inner.flush()
    }
}
