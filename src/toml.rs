use crate::error::Result;
use crate::{Unit, UnitError};
use toml::{Table, Value};

/// A table of TOML values, stored as a TOML document.
///
/// Values are addressed by a key path: `["server", "port"]` is the `port` key of the
/// `server` table. Every key before the last must name a table.
///
/// ```
/// use fileunity::{TomlUnit, Unit};
///
/// let mut config = TomlUnit::by_str("[server]\nport = 80").unwrap();
/// config.set(&["server", "port"], 8080).unwrap();
/// assert_eq!(Some(8080), config.get(&["server", "port"]).unwrap().as_integer());
/// ```
#[derive(Debug, Clone, PartialEq, Default)]
pub struct TomlUnit {
    table: Table,
}

fn dotted<K: AsRef<str>>(path: &[K]) -> String {
    path.iter()
        .map(AsRef::as_ref)
        .collect::<Vec<_>>()
        .join(".")
}

fn descend<'a, K: AsRef<str>>(mut table: &'a Table, path: &[K]) -> Result<&'a Table> {
    for (depth, key) in path.iter().enumerate() {
        table = match table.get(key.as_ref()) {
            Some(Value::Table(inner)) => inner,
            Some(_) => return Err(UnitError::NotATable(dotted(&path[..=depth]))),
            None => return Err(UnitError::UnknownKey(dotted(&path[..=depth]))),
        };
    }
    Ok(table)
}

fn descend_mut<'a, K: AsRef<str>>(mut table: &'a mut Table, path: &[K]) -> Result<&'a mut Table> {
    for (depth, key) in path.iter().enumerate() {
        table = match table.get_mut(key.as_ref()) {
            Some(Value::Table(inner)) => inner,
            Some(_) => return Err(UnitError::NotATable(dotted(&path[..=depth]))),
            None => return Err(UnitError::UnknownKey(dotted(&path[..=depth]))),
        };
    }
    Ok(table)
}

impl TomlUnit {
    pub fn len(&self) -> usize {
        self.table.len()
    }

    pub fn is_empty(&self) -> bool {
        self.table.is_empty()
    }

    pub fn clear(&mut self) {
        self.table.clear();
    }

    pub fn as_table(&self) -> &Table {
        &self.table
    }

    /// Top-level keys, in document order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.table.keys().map(String::as_str)
    }

    pub fn values(&self) -> impl Iterator<Item = &Value> {
        self.table.values()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.table.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.table.contains_key(key)
    }

    /// Returns the value at `path`.
    pub fn get<K: AsRef<str>>(&self, path: &[K]) -> Result<&Value> {
        let (last, parents) = path.split_last().ok_or(UnitError::EmptyPath)?;
        descend(&self.table, parents)?
            .get(last.as_ref())
            .ok_or_else(|| UnitError::UnknownKey(dotted(path)))
    }

    /// Stores `value` under `path`, replacing any previous value.
    ///
    /// Only the last key may be new; the tables leading up to it must already exist.
    pub fn set<K: AsRef<str>>(&mut self, path: &[K], value: impl Into<Value>) -> Result<()> {
        let (last, parents) = path.split_last().ok_or(UnitError::EmptyPath)?;
        descend_mut(&mut self.table, parents)?.insert(last.as_ref().to_string(), value.into());
        Ok(())
    }

    /// Removes and returns the value at `path`.
    pub fn remove<K: AsRef<str>>(&mut self, path: &[K]) -> Result<Value> {
        let (last, parents) = path.split_last().ok_or(UnitError::EmptyPath)?;
        descend_mut(&mut self.table, parents)?
            .remove(last.as_ref())
            .ok_or_else(|| UnitError::UnknownKey(dotted(path)))
    }

    /// Returns a new unit with the top-level entries of `self` followed by those of
    /// `other`. Fails if both define the same top-level key.
    pub fn merge(&self, other: &TomlUnit) -> Result<TomlUnit> {
        if let Some(key) = other.keys().find(|k| self.contains_key(k)) {
            return Err(UnitError::DuplicateKey(key.to_string()));
        }
        let mut table = self.table.clone();
        for (key, value) in &other.table {
            table.insert(key.clone(), value.clone());
        }
        Ok(Self { table })
    }
}

impl Unit for TomlUnit {
    type Data = Table;

    const NAME: &'static str = "TomlUnit";

    fn data_by_str(text: &str) -> Result<Table> {
        Ok(toml::from_str(text)?)
    }

    fn str_by_data(data: &Table) -> Result<String> {
        let mut text = toml::to_string(data)?;
        if text.ends_with('\n') {
            text.pop();
        }
        Ok(text)
    }

    fn from_data(data: Table) -> Result<Self> {
        Ok(Self { table: data })
    }

    fn data(&self) -> Table {
        self.table.clone()
    }

    fn to_text(&self) -> Result<String> {
        Self::str_by_data(&self.table)
    }
}

impl From<Table> for TomlUnit {
    fn from(table: Table) -> Self {
        Self { table }
    }
}
