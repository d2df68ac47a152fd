use std::collections::BTreeSet;

use super::column::retain_positions;
use super::selection::Assignment;
use super::TsvUnit;
use crate::error::Result;
use crate::key::resolve_rows;
use crate::{ColumnSelector, Key, ResolvedKey, RowSelector, UnitError};

fn check_lengths(targets: usize, values: usize) -> Result<()> {
    if targets != values {
        return Err(UnitError::LengthMismatch { targets, values });
    }
    Ok(())
}

fn unsupported(target: &'static str, value: &Assignment) -> UnitError {
    UnitError::UnsupportedValue {
        target,
        found: value.shape(),
    }
}

impl TsvUnit {
    /// Writes `value` into the cells selected by `key`.
    ///
    /// | Columns | One row | Row list |
    /// |---|---|---|
    /// | all | [`Assignment::Record`], see [`TsvUnit::update_row`] | unsupported |
    /// | one label | [`Assignment::Value`] | [`Assignment::Values`] |
    /// | label list | [`Assignment::Values`] | [`Assignment::Table`] |
    ///
    /// Bulk writes are not atomic: if one cell fails, the cells written before it keep
    /// their new value.
    pub fn set(&mut self, key: impl Into<Key>, value: impl Into<Assignment>) -> Result<()> {
        let ResolvedKey { columns, rows } = key.into().resolve(self.height())?;
        let value = value.into();
        match (columns, rows) {
            (ColumnSelector::All, RowSelector::One(row)) => match value {
                Assignment::Record(updates) => self.update_row(row, updates),
                other => Err(unsupported("row", &other)),
            },
            (ColumnSelector::All, RowSelector::Many(_)) => Err(UnitError::MultiRowReplace),
            (ColumnSelector::One(column), RowSelector::One(row)) => match value {
                Assignment::Value(v) => self.set_cell(&column, row, v),
                other => Err(unsupported("cell", &other)),
            },
            (ColumnSelector::One(column), RowSelector::Many(rows)) => match value {
                Assignment::Values(values) => self.set_column_elements(&column, &rows, &values),
                other => Err(unsupported("column", &other)),
            },
            (ColumnSelector::Many(columns), RowSelector::One(row)) => match value {
                Assignment::Values(values) => self.set_row_elements(&columns, row, &values),
                other => Err(unsupported("row", &other)),
            },
            (ColumnSelector::Many(columns), RowSelector::Many(rows)) => match value {
                Assignment::Table(block) => self.set_block(&columns, &rows, &block),
                other => Err(unsupported("block", &other)),
            },
        }
    }

    /// Stores the text of `value` at the given column and row.
    pub fn set_cell(&mut self, column: &str, row: usize, value: impl ToString) -> Result<()> {
        let pos = self.columns.require(column)?;
        let len = self.height();
        let cells = self
            .rows
            .get_mut(row)
            .ok_or(UnitError::IndexOutOfRange { index: row, len })?;
        cells[pos] = value.to_string();
        Ok(())
    }

    /// Writes `values[n]` into `(column, rows[n])` for every `n`.
    ///
    /// Both lists must have the same length.
    pub fn set_column_elements<V: ToString>(
        &mut self,
        column: &str,
        rows: &[usize],
        values: &[V],
    ) -> Result<()> {
        check_lengths(rows.len(), values.len())?;
        for (&row, value) in rows.iter().zip(values) {
            self.set_cell(column, row, value.to_string())?;
        }
        Ok(())
    }

    /// Writes `values[n]` into `(columns[n], row)` for every `n`.
    ///
    /// Both lists must have the same length.
    pub fn set_row_elements<S: AsRef<str>, V: ToString>(
        &mut self,
        columns: &[S],
        row: usize,
        values: &[V],
    ) -> Result<()> {
        check_lengths(columns.len(), values.len())?;
        for (column, value) in columns.iter().zip(values) {
            self.set_cell(column.as_ref(), row, value.to_string())?;
        }
        Ok(())
    }

    /// Copies a rectangular block into this table.
    ///
    /// Row `n` of `block` lands on row `rows[n]`. Only the listed `columns` are written,
    /// each taking its value from the column of the same label in `block`. The block must
    /// have one row per target row and contain every listed column; both are checked
    /// before anything is written.
    pub fn set_block<S: AsRef<str>>(
        &mut self,
        columns: &[S],
        rows: &[usize],
        block: &TsvUnit,
    ) -> Result<()> {
        check_lengths(rows.len(), block.height())?;
        let sources = block.positions(columns)?;
        for (src_row, &row) in block.rows.iter().zip(rows) {
            for (column, &src) in columns.iter().zip(&sources) {
                self.set_cell(column.as_ref(), row, &src_row[src])?;
            }
        }
        Ok(())
    }

    /// Sets one cell per entry of `updates` in the given row, in iteration order.
    /// Columns not named in `updates` keep their value.
    pub fn update_row<I, K, V>(&mut self, row: usize, updates: I) -> Result<()>
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: ToString,
    {
        for (column, value) in updates {
            self.set_cell(column.as_ref(), row, value)?;
        }
        Ok(())
    }

    /// Removes the columns and rows selected by `key`.
    ///
    /// Only restricted axes are removed from: a column key keeps every row, a row key
    /// keeps every column, and [`Key::All`] empties the table. Everything is validated
    /// before the first removal.
    pub fn delete(&mut self, key: impl Into<Key>) -> Result<()> {
        let (columns, rows) = key.into().split()?;
        let every_row = rows.is_none();
        let every_column = columns == ColumnSelector::All;

        let drop_columns: BTreeSet<usize> = match columns {
            ColumnSelector::All if every_row => (0..self.width()).collect(),
            ColumnSelector::All => BTreeSet::new(),
            ColumnSelector::One(column) => [self.columns.require(&column)?].into(),
            ColumnSelector::Many(columns) => self.positions(&columns)?.into_iter().collect(),
        };
        let drop_rows: BTreeSet<usize> = if every_row && !every_column {
            BTreeSet::new()
        } else {
            match resolve_rows(rows, self.height())? {
                RowSelector::One(row) => [row].into(),
                RowSelector::Many(rows) => rows.into_iter().collect(),
            }
        };
        if let Some(&last) = drop_rows.last() {
            if last >= self.height() {
                return Err(UnitError::IndexOutOfRange {
                    index: last,
                    len: self.height(),
                });
            }
        }

        log::trace!(
            "dropping {} columns and {} rows",
            drop_columns.len(),
            drop_rows.len()
        );
        self.columns.remove_positions(&drop_columns);
        for cells in &mut self.rows {
            retain_positions(cells, &drop_columns);
        }
        retain_positions(&mut self.rows, &drop_rows);
        Ok(())
    }
}
