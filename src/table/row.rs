use crate::ColumnMap;
use indexmap::IndexMap;

/// A single table row as an ordered mapping of column label to cell text.
///
/// Reading a whole row returns a `Record`, and writing a `Record` into a row only touches
/// the columns it names:
///
/// ```
/// use fileunity::{Record, TableBuilder};
///
/// let mut table = TableBuilder::with_columns(["name", "age"])
///     .add_row(["Ann", "30"])
///     .build()
///     .unwrap();
///
/// let mut update = Record::new();
/// update.insert("age".to_string(), "31".to_string());
/// table.update_row(0, &update).unwrap();
///
/// let row = table.row(0).unwrap();
/// assert_eq!(Some("31"), row.get("age").map(String::as_str));
/// assert_eq!(vec!["name", "age"], row.keys().collect::<Vec<_>>());
/// ```
pub type Record = IndexMap<String, String>;

pub(crate) fn to_record(columns: &ColumnMap, cells: &[String]) -> Record {
    columns
        .iter()
        .zip(cells)
        .map(|(label, cell)| (label.to_string(), cell.clone()))
        .collect()
}
