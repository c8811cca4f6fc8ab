use std::io::Write;

use qforge_core::{Element, Table};

use crate::atom::format_atom;
use crate::errors::RenderError;
use crate::render::{CountingWriter, render};

/// Writes a table as CSV: a header of column names, then one record per
/// row with cells formatted as in text rendering. Returns bytes written.
pub fn write_table_csv<W: Write>(writer: W, table: &Table) -> Result<u64, RenderError> {
    let counting = CountingWriter::new(writer);
    let mut writer = ::csv::WriterBuilder::new()
        .has_headers(false)
        .from_writer(counting);

    let header: Vec<&str> = table.columns().iter().map(|name| name.as_str()).collect();
    writer.write_record(&header)?;

    for row in 0..table.row_count() {
        let record = (0..table.column_count())
            .map(|column| cell_text(&table.cell(row, column)?))
            .collect::<Result<Vec<_>, RenderError>>()?;
        writer.write_record(&record)?;
    }

    writer.flush()?;
    let counting = writer.into_inner().map_err(|err| err.into_error())?;
    Ok(counting.bytes_written())
}

fn cell_text(element: &Element<'_>) -> Result<String, RenderError> {
    match element {
        Element::Atom(atom) => format_atom(atom),
        Element::Value(value) => {
            let mut text = render(value)?;
            text.pop();
            Ok(text)
        }
    }
}

#[cfg(test)]
mod tests {
    use qforge_core::{Symbol, Vector};

    use super::*;

    #[test]
    fn writes_header_and_rows() {
        let table = Table::new(
            vec![Symbol::new("t_b"), Symbol::new("t_s")],
            vec![
                Vector::Boolean(vec![true, false]),
                Vector::Symbol(vec![Symbol::new("ab"), Symbol::new("c")]),
            ],
        )
        .unwrap();

        let mut buffer = Vec::new();
        let bytes = write_table_csv(&mut buffer, &table).unwrap();
        let text = String::from_utf8(buffer).unwrap();
        assert_eq!(text, "t_b,t_s\n1b,`ab\n0b,`c\n");
        assert_eq!(bytes, text.len() as u64);
    }
}
