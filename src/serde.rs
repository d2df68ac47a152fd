//! Serde support for units.
//!
//! [`TsvUnit`] serializes as its [`TableData`] (`{"columns": [...], "rows": [[...]]}`),
//! [`TextUnit`] as its list of lines and [`TomlUnit`] as its top-level table. Deserializing checks the same invariants as
//! [`Unit::from_data`].
//!
//! For a record-oriented form, where every row is a map of column label to value, use
//! [`TsvUnit::records_serializer`].

use serde::ser::{SerializeMap, SerializeSeq, SerializeStruct};
use serde::{de, Deserialize, Deserializer, Serialize, Serializer};

use crate::{TableData, TextUnit, TomlUnit, TsvUnit, Unit};

/// Serializes a [`TsvUnit`] as a sequence of `{label: value}` maps, one per row.
pub struct SerializeRecords<'a>(&'a TsvUnit);

/// Serializes a single row of a [`SerializeRecords`].
struct SerializeRow<'a> {
    table: &'a TsvUnit,
    cells: &'a [String],
}

impl TsvUnit {
    pub fn records_serializer(&self) -> SerializeRecords<'_> {
        SerializeRecords(self)
    }
}

impl<'a> Serialize for SerializeRecords<'a> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut seq = serializer.serialize_seq(Some(self.0.height()))?;
        for cells in &self.0.rows {
            seq.serialize_element(&SerializeRow {
                table: self.0,
                cells,
            })?;
        }
        seq.end()
    }
}

impl<'a> Serialize for SerializeRow<'a> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut map = serializer.serialize_map(Some(self.cells.len()))?;
        for (label, cell) in self.table.columns.iter().zip(self.cells) {
            map.serialize_entry(label, cell)?;
        }
        map.end()
    }
}

impl Serialize for TsvUnit {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut table = serializer.serialize_struct("TableData", 2)?;
        table.serialize_field("columns", self.columns.as_slice())?;
        table.serialize_field("rows", &self.rows)?;
        table.end()
    }
}

impl<'de> Deserialize<'de> for TsvUnit {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let data = TableData::deserialize(deserializer)?;
        TsvUnit::from_data(data).map_err(de::Error::custom)
    }
}

impl Serialize for TextUnit {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.as_slice().serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for TextUnit {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        Vec::<String>::deserialize(deserializer).map(TextUnit::from)
    }
}

impl Serialize for TomlUnit {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.as_table().serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for TomlUnit {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        toml::Table::deserialize(deserializer).map(TomlUnit::from)
    }
}
