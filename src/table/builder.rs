use crate::error::Result;
use crate::{TableData, TsvUnit, Unit};

/// A builder interface for [`TsvUnit`].
///
/// Labels and rows are only checked on [`TableBuilder::build`].
#[derive(Debug, Clone, Default)]
pub struct TableBuilder {
    columns: Vec<String>,
    rows: Vec<Vec<String>>,
}

impl TableBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_columns<I, S>(columns: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            columns: columns.into_iter().map(Into::into).collect(),
            rows: vec![],
        }
    }

    pub fn add_column(mut self, label: impl Into<String>) -> Self {
        self.columns.push(label.into());
        self
    }

    /// Adds a new row at the end of the table. Cells are stored as text.
    pub fn add_row<I, V>(mut self, row: I) -> Self
    where
        I: IntoIterator<Item = V>,
        V: ToString,
    {
        self.rows
            .push(row.into_iter().map(|v| v.to_string()).collect());
        self
    }

    /// Sets the entire row list for the table.
    pub fn set_rows(mut self, rows: Vec<Vec<String>>) -> Self {
        self.rows = rows;
        self
    }

    pub fn build(self) -> Result<TsvUnit> {
        TsvUnit::from_data(TableData {
            columns: self.columns,
            rows: self.rows,
        })
    }
}

impl From<TsvUnit> for TableBuilder {
    fn from(table: TsvUnit) -> Self {
        let TableData { columns, rows } = table.into_data();
        Self { columns, rows }
    }
}
