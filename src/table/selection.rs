use crate::{Record, TsvUnit};

/// The result of reading a [`TsvUnit`] through a key.
///
/// | Columns | One row | Row list |
/// |---|---|---|
/// | all | [`Selection::Record`] | [`Selection::Table`] |
/// | one label | [`Selection::Value`] | [`Selection::Values`] (one per row) |
/// | label list | [`Selection::Values`] (one per column) | [`Selection::Table`] |
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Selection {
    Value(String),
    Values(Vec<String>),
    Record(Record),
    Table(TsvUnit),
}

/// A value written into a [`TsvUnit`] through a key.
///
/// Scalars are stored as their textual representation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Assignment {
    Value(String),
    Values(Vec<String>),
    Record(Record),
    Table(TsvUnit),
}

impl Selection {
    pub fn as_value(&self) -> Option<&str> {
        match self {
            Self::Value(v) => Some(v),
            _ => None,
        }
    }

    pub fn into_value(self) -> Option<String> {
        match self {
            Self::Value(v) => Some(v),
            _ => None,
        }
    }

    pub fn into_values(self) -> Option<Vec<String>> {
        match self {
            Self::Values(v) => Some(v),
            _ => None,
        }
    }

    pub fn into_record(self) -> Option<Record> {
        match self {
            Self::Record(r) => Some(r),
            _ => None,
        }
    }

    pub fn into_table(self) -> Option<TsvUnit> {
        match self {
            Self::Table(t) => Some(t),
            _ => None,
        }
    }
}

impl Assignment {
    pub(crate) fn shape(&self) -> &'static str {
        match self {
            Self::Value(_) => "value",
            Self::Values(_) => "value list",
            Self::Record(_) => "record",
            Self::Table(_) => "table",
        }
    }
}

impl From<&str> for Assignment {
    fn from(value: &str) -> Self {
        Self::Value(value.to_string())
    }
}

impl From<String> for Assignment {
    fn from(value: String) -> Self {
        Self::Value(value)
    }
}

impl From<&String> for Assignment {
    fn from(value: &String) -> Self {
        Self::Value(value.clone())
    }
}

macro_rules! scalar_assignment {
    ($($ty:ty),*) => {
        $(
            impl From<$ty> for Assignment {
                fn from(value: $ty) -> Self {
                    Self::Value(value.to_string())
                }
            }
        )*
    };
}

scalar_assignment!(i8, i16, i32, i64, isize, u8, u16, u32, u64, usize, f32, f64, bool, char);

impl From<Vec<&str>> for Assignment {
    fn from(values: Vec<&str>) -> Self {
        Self::Values(values.into_iter().map(str::to_string).collect())
    }
}

impl From<Vec<String>> for Assignment {
    fn from(values: Vec<String>) -> Self {
        Self::Values(values)
    }
}

impl From<Record> for Assignment {
    fn from(record: Record) -> Self {
        Self::Record(record)
    }
}

impl<K, V, const N: usize> From<[(K, V); N]> for Assignment
where
    K: Into<String>,
    V: ToString,
{
    fn from(pairs: [(K, V); N]) -> Self {
        Self::Record(
            pairs
                .into_iter()
                .map(|(k, v)| (k.into(), v.to_string()))
                .collect(),
        )
    }
}

impl From<TsvUnit> for Assignment {
    fn from(table: TsvUnit) -> Self {
        Self::Table(table)
    }
}

impl From<&TsvUnit> for Assignment {
    fn from(table: &TsvUnit) -> Self {
        Self::Table(table.clone())
    }
}
