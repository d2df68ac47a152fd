use crate::error::Result;
use crate::io::tsv;
use crate::{ColumnSelector, Key, ResolvedKey, RowSelector, Unit, UnitError};

pub mod builder;
pub mod column;
pub mod row;
pub mod selection;

mod write;

use column::ColumnMap;
use row::{to_record, Record};
use selection::Selection;

/// The plain container behind a [`TsvUnit`]: column labels and rows of cell text.
///
/// This is what [`Unit::data`] hands out and [`Unit::set_data`] takes in. It is a plain
/// owned value, so changes to it never reach the unit it was read from.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TableData {
    pub columns: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

/// A table of text cells with labeled columns and positional rows, stored as
/// tab-separated text.
///
/// Every row has one cell per column, column labels are unique and non-empty, and every
/// cell is text. Row positions are not identifiers: deleting a row renumbers the rows after
/// it.
///
/// ## Accessing cells
/// [`TsvUnit::get`], [`TsvUnit::set`] and [`TsvUnit::delete`] take any [`Key`]. Labels
/// select columns, positions and ranges select rows, and tuples select both:
///
/// ```
/// use fileunity::{TsvUnit, Unit, Selection};
///
/// let mut table = TsvUnit::by_str("name\tage\nAnn\t30\nBo\t40").unwrap();
///
/// assert_eq!(Some("30"), table.get(("age", 0_usize)).unwrap().as_value());
/// assert_eq!(
///     Selection::Values(vec!["30".into(), "40".into()]),
///     table.get("age").unwrap()
/// );
///
/// table.set(("age", 1_usize), 41).unwrap();
/// assert_eq!("41", table.cell("age", 1).unwrap());
/// ```
///
/// ## Text form
/// The first line holds the column labels, every following line one row, with fields
/// separated by tabs. Fields may not contain tabs, newlines or double quotes.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct TsvUnit {
    pub(crate) columns: ColumnMap,
    pub(crate) rows: Vec<Vec<String>>,
}

impl TsvUnit {
    /// Builds a unit from parts that only need the label check, e.g. sub-tables of an
    /// existing unit.
    fn from_parts(columns: Vec<String>, rows: Vec<Vec<String>>) -> Result<Self> {
        Ok(Self {
            columns: ColumnMap::new(columns)?,
            rows,
        })
    }

    /// Consumes the unit, returning its container.
    pub fn into_data(self) -> TableData {
        TableData {
            columns: self.columns.into_raw(),
            rows: self.rows,
        }
    }

    /// Returns the column labels, in order.
    pub fn fieldnames(&self) -> Vec<String> {
        self.columns.as_slice().to_vec()
    }

    pub fn columns(&self) -> &ColumnMap {
        &self.columns
    }

    /// Renames every column at once. The new labels must match the table width, and be
    /// non-empty and unique.
    pub fn set_fieldnames<I, S>(&mut self, names: I) -> Result<()>
    where
        I: IntoIterator<Item = S>,
        S: ToString,
    {
        let names: Vec<String> = names.into_iter().map(|n| n.to_string()).collect();
        if names.len() != self.width() {
            return Err(UnitError::LengthMismatch {
                targets: self.width(),
                values: names.len(),
            });
        }
        self.columns = ColumnMap::new(names)?;
        Ok(())
    }

    /// Returns `(height, width)`.
    pub fn shape(&self) -> (usize, usize) {
        (self.height(), self.width())
    }

    pub fn width(&self) -> usize {
        self.columns.len()
    }

    pub fn height(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.columns.is_empty() && self.rows.is_empty()
    }

    fn row_at(&self, index: usize) -> Result<&[String]> {
        self.rows
            .get(index)
            .map(Vec::as_slice)
            .ok_or(UnitError::IndexOutOfRange {
                index,
                len: self.height(),
            })
    }

    fn positions<S: AsRef<str>>(&self, labels: &[S]) -> Result<Vec<usize>> {
        labels
            .iter()
            .map(|l| self.columns.require(l.as_ref()))
            .collect()
    }

    /// Returns the cell at the given column and row.
    pub fn cell(&self, column: &str, row: usize) -> Result<&str> {
        let pos = self.columns.require(column)?;
        Ok(&self.row_at(row)?[pos])
    }

    /// Returns a whole row as a column → value mapping.
    pub fn row(&self, index: usize) -> Result<Record> {
        self.row_at(index).map(|cells| to_record(&self.columns, cells))
    }

    /// Gets an iterator that visits every row as a [`Record`].
    pub fn records(&self) -> impl Iterator<Item = Record> + '_ {
        self.rows.iter().map(|cells| to_record(&self.columns, cells))
    }

    /// Reads the cells selected by `key`. See [`Selection`] for the shape of the result.
    ///
    /// Repeated row positions in the key are repeated in the result.
    pub fn get(&self, key: impl Into<Key>) -> Result<Selection> {
        let ResolvedKey { columns, rows } = key.into().resolve(self.height())?;
        match (columns, rows) {
            (ColumnSelector::All, RowSelector::One(row)) => self.row(row).map(Selection::Record),
            (ColumnSelector::All, RowSelector::Many(rows)) => {
                self.select(self.columns.as_slice(), &rows).map(Selection::Table)
            }
            (ColumnSelector::One(column), RowSelector::One(row)) => self
                .cell(&column, row)
                .map(|cell| Selection::Value(cell.to_string())),
            (ColumnSelector::One(column), RowSelector::Many(rows)) => {
                let pos = self.columns.require(&column)?;
                rows.iter()
                    .map(|&row| self.row_at(row).map(|cells| cells[pos].clone()))
                    .collect::<Result<_>>()
                    .map(Selection::Values)
            }
            (ColumnSelector::Many(columns), RowSelector::One(row)) => {
                let positions = self.positions(&columns)?;
                let cells = self.row_at(row)?;
                Ok(Selection::Values(
                    positions.into_iter().map(|pos| cells[pos].clone()).collect(),
                ))
            }
            (ColumnSelector::Many(columns), RowSelector::Many(rows)) => {
                self.select(&columns, &rows).map(Selection::Table)
            }
        }
    }

    /// Builds a new unit from the given columns and rows, in the given order.
    pub fn select<S: AsRef<str>>(&self, columns: &[S], rows: &[usize]) -> Result<TsvUnit> {
        let positions = self.positions(columns)?;
        let rows = rows
            .iter()
            .map(|&row| {
                self.row_at(row)
                    .map(|cells| positions.iter().map(|&pos| cells[pos].clone()).collect())
            })
            .collect::<Result<_>>()?;
        Self::from_parts(
            columns.iter().map(|c| c.as_ref().to_string()).collect(),
            rows,
        )
    }
}

impl Unit for TsvUnit {
    type Data = TableData;

    const NAME: &'static str = "TsvUnit";

    fn data_by_str(text: &str) -> Result<TableData> {
        tsv::read(text)
    }

    fn str_by_data(data: &TableData) -> Result<String> {
        tsv::write(&data.columns, &data.rows)
    }

    fn from_data(data: TableData) -> Result<Self> {
        let TableData { columns, rows } = data;
        let columns = ColumnMap::new(columns)?;
        for (i, row) in rows.iter().enumerate() {
            if row.len() != columns.len() {
                return Err(UnitError::RaggedRow {
                    row: i,
                    expected: columns.len(),
                    found: row.len(),
                });
            }
        }
        columns
            .iter()
            .chain(rows.iter().flatten().map(String::as_str))
            .try_for_each(tsv::check_field)?;
        Ok(Self { columns, rows })
    }

    fn data(&self) -> TableData {
        self.clone().into_data()
    }

    fn to_text(&self) -> Result<String> {
        tsv::write(self.columns.as_slice(), &self.rows)
    }
}

impl TryFrom<TableData> for TsvUnit {
    type Error = UnitError;

    fn try_from(data: TableData) -> Result<Self> {
        Self::from_data(data)
    }
}
