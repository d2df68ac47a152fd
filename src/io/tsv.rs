//! The tab-separated text form of a [`TsvUnit`].
//!
//! The first line holds the column labels and every following line holds one row. Fields
//! are separated by a single tab and lines by a single newline. There is no quoting or
//! escaping: fields containing a tab, a newline or a double quote cannot be written.
//!
//! A table without columns is written as an empty header line followed by one empty line
//! per row, so the empty table is the empty string.
//!
//! [`TsvUnit`]: crate::TsvUnit

use crate::error::Result;
use crate::table::column::validate_labels;
use crate::{TableData, UnitError};
use csv::{QuoteStyle, Terminator, WriterBuilder};
use std::io;

const FORBIDDEN: [char; 3] = ['"', '\t', '\n'];

const SEPARATOR: char = '\t';

/// Fails if the field cannot be stored in the text form.
pub fn check_field(field: &str) -> Result<()> {
    match field.chars().find(|c| FORBIDDEN.contains(c)) {
        Some(ch) => Err(UnitError::ForbiddenCharacter {
            ch,
            field: field.to_string(),
        }),
        None => Ok(()),
    }
}

/// Renders the header and rows, without a trailing newline.
pub fn write(columns: &[String], rows: &[Vec<String>]) -> Result<String> {
    let mut writer = WriterBuilder::new()
        .delimiter(SEPARATOR as u8)
        .quote_style(QuoteStyle::Never)
        .terminator(Terminator::Any(b'\n'))
        .flexible(true)
        .from_writer(vec![]);
    for line in std::iter::once(columns).chain(rows.iter().map(Vec::as_slice)) {
        for field in line {
            check_field(field)?;
        }
        if line.iter().all(String::is_empty) && line.len() <= 1 {
            // csv quotes a record without any bytes
            writer.flush()?;
            writer.get_mut().push(b'\n');
        } else {
            writer.write_record(line)?;
        }
    }

    let bytes = writer
        .into_inner()
        .map_err(|e| UnitError::Io(e.into_error()))?;
    let mut text =
        String::from_utf8(bytes).map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;
    text.pop();
    Ok(text)
}

fn split(line: &str) -> Vec<String> {
    if line.is_empty() {
        Vec::new()
    } else {
        line.split(SEPARATOR).map(str::to_string).collect()
    }
}

/// Parses the text form. `text` carries no trailing newline.
///
/// Lines are split by hand: a csv reader skips blank lines, which would drop the rows of a
/// single-column table whose cell is empty.
pub fn read(text: &str) -> Result<TableData> {
    if text.contains('"') {
        let line = text
            .split('\n')
            .find(|l| l.contains('"'))
            .unwrap_or_default();
        return Err(UnitError::ForbiddenCharacter {
            ch: '"',
            field: line.to_string(),
        });
    }

    let mut lines = text.split('\n');
    let columns = lines.next().map(split).unwrap_or_default();
    validate_labels(&columns)?;

    let rows = lines
        .enumerate()
        .map(|(i, line)| {
            // A single empty field and no field at all look the same
            let row = if line.is_empty() && !columns.is_empty() {
                vec![String::new()]
            } else {
                split(line)
            };
            if row.len() != columns.len() {
                return Err(UnitError::RaggedRow {
                    row: i,
                    expected: columns.len(),
                    found: row.len(),
                });
            }
            Ok(row)
        })
        .collect::<Result<_>>()?;

    Ok(TableData { columns, rows })
}
