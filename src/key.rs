use crate::error::Result;
use crate::UnitError;
use enum_kinds::EnumKind;
use std::ops::{Range, RangeFrom, RangeFull, RangeInclusive, RangeTo};

/// An index expression over a [`TsvUnit`].
///
/// Keys address the table along two axes: columns, by label, and rows, by position.
/// Every key is first resolved into a [`ResolvedKey`] against the current table height.
///
/// | Key | Columns | Rows |
/// |---|---|---|
/// | [`Key::All`] | all | all |
/// | [`Key::Label`] | one | all |
/// | [`Key::Index`] | all | one |
/// | [`Key::Slice`] | all | expanded slice |
/// | [`Key::List`] of labels only | listed | all |
/// | [`Key::List`] of indices/slices | all | flattened list |
/// | [`Key::Pair`] | first component | second component |
///
/// Row lists keep their order and repetitions, so `(vec!["name"], vec![0, 0])` selects
/// row 0 twice.
///
/// ```
/// use fileunity::{Key, ColumnSelector, RowSelector};
///
/// let resolved = Key::from(("age", 1_usize..)).resolve(3).unwrap();
/// assert_eq!(resolved.columns, ColumnSelector::One("age".to_string()));
/// assert_eq!(resolved.rows, RowSelector::Many(vec![1, 2]));
/// ```
///
/// [`TsvUnit`]: crate::TsvUnit
#[derive(EnumKind, Debug, Clone, PartialEq, Eq)]
#[enum_kind(KeyKind)]
pub enum Key {
    /// The whole axis.
    All,
    /// A single column label.
    Label(String),
    /// A single row position.
    Index(usize),
    /// A range of row positions.
    Slice(RowSlice),
    /// Either a list of column labels, or a list of row positions and slices.
    List(Vec<Key>),
    /// Explicit column selector and row selector.
    Pair(Box<Key>, Box<Key>),
}

/// A slice over row positions, with the usual sequence-slicing semantics: negative
/// bounds count from the end and out-of-range bounds are clamped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RowSlice {
    pub start: Option<isize>,
    pub stop: Option<isize>,
    pub step: Option<isize>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ColumnSelector {
    All,
    One(String),
    Many(Vec<String>),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RowSelector {
    One(usize),
    Many(Vec<usize>),
}

/// The canonical (columns, rows) form of a [`Key`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedKey {
    pub columns: ColumnSelector,
    pub rows: RowSelector,
}

impl RowSlice {
    pub fn new(start: Option<isize>, stop: Option<isize>, step: Option<isize>) -> Self {
        Self { start, stop, step }
    }

    /// Returns a copy of this slice with the given step.
    pub fn step_by(self, step: isize) -> Self {
        Self {
            step: Some(step),
            ..self
        }
    }

    /// Expands the slice into row positions for a sequence of length `len`.
    pub fn indices(&self, len: usize) -> Result<Vec<usize>> {
        let step = self.step.unwrap_or(1);
        if step == 0 {
            return Err(UnitError::ZeroSliceStep);
        }
        let len = len as isize;
        let (lower, upper) = if step < 0 { (-1, len - 1) } else { (0, len) };
        let clamp = |bound: isize| {
            if bound < 0 {
                (bound + len).max(lower)
            } else {
                bound.min(upper)
            }
        };
        let start = self
            .start
            .map(clamp)
            .unwrap_or(if step < 0 { upper } else { lower });
        let stop = self
            .stop
            .map(clamp)
            .unwrap_or(if step < 0 { lower } else { upper });

        let mut out = Vec::new();
        let mut i = start;
        while (step > 0 && i < stop) || (step < 0 && i > stop) {
            out.push(i as usize);
            match i.checked_add(step) {
                Some(next) => i = next,
                None => break,
            }
        }
        Ok(out)
    }
}

impl Key {
    /// Builds a pairing of a column selector and a row selector.
    pub fn pair(columns: impl Into<Key>, rows: impl Into<Key>) -> Self {
        Self::Pair(Box::new(columns.into()), Box::new(rows.into()))
    }

    pub fn kind(&self) -> KeyKind {
        self.into()
    }

    /// Resolves the key against a table with `height` rows.
    pub fn resolve(self, height: usize) -> Result<ResolvedKey> {
        let (columns, rows) = self.split()?;
        let rows = resolve_rows(rows, height)?;
        log::trace!("resolved key: columns {columns:?}, rows {rows:?}");
        Ok(ResolvedKey { columns, rows })
    }

    /// Splits the key into its column selector and its (unexpanded) row component.
    /// A `None` row component stands for every row.
    pub(crate) fn split(self) -> Result<(ColumnSelector, Option<Key>)> {
        match self {
            Key::All => Ok((ColumnSelector::All, None)),
            Key::Label(label) => Ok((ColumnSelector::One(label), None)),
            rows @ (Key::Index(_) | Key::Slice(_)) => Ok((ColumnSelector::All, Some(rows))),
            Key::List(items) => match labels(&items) {
                Some(labels) => Ok((ColumnSelector::Many(labels), None)),
                None => Ok((ColumnSelector::All, Some(Key::List(items)))),
            },
            Key::Pair(columns, rows) => {
                let columns = column_selector(*columns)?;
                let rows = match *rows {
                    Key::All => None,
                    rows => Some(rows),
                };
                Ok((columns, rows))
            }
        }
    }
}

/// Returns the labels if every item of the list is a label.
fn labels(items: &[Key]) -> Option<Vec<String>> {
    items
        .iter()
        .map(|k| match k {
            Key::Label(l) => Some(l.clone()),
            _ => None,
        })
        .collect()
}

fn column_selector(key: Key) -> Result<ColumnSelector> {
    match key {
        Key::All => Ok(ColumnSelector::All),
        Key::Label(label) => Ok(ColumnSelector::One(label)),
        Key::List(items) => labels(&items)
            .map(ColumnSelector::Many)
            .ok_or(UnitError::UnsupportedKey(KeyKind::List)),
        other => Err(UnitError::UnsupportedKey(other.kind())),
    }
}

pub(crate) fn resolve_rows(key: Option<Key>, height: usize) -> Result<RowSelector> {
    match key {
        None => Ok(RowSelector::Many((0..height).collect())),
        Some(Key::Index(i)) => Ok(RowSelector::One(i)),
        Some(Key::Slice(slice)) => slice.indices(height).map(RowSelector::Many),
        Some(Key::List(items)) => {
            let mut out = Vec::with_capacity(items.len());
            for item in items {
                match item {
                    Key::Index(i) => out.push(i),
                    Key::Slice(slice) => out.extend(slice.indices(height)?),
                    other => return Err(UnitError::UnsupportedKey(other.kind())),
                }
            }
            Ok(RowSelector::Many(out))
        }
        Some(other) => Err(UnitError::UnsupportedKey(other.kind())),
    }
}

impl From<&str> for Key {
    fn from(label: &str) -> Self {
        Self::Label(label.to_string())
    }
}

impl From<String> for Key {
    fn from(label: String) -> Self {
        Self::Label(label)
    }
}

impl From<&String> for Key {
    fn from(label: &String) -> Self {
        Self::Label(label.clone())
    }
}

impl From<usize> for Key {
    fn from(index: usize) -> Self {
        Self::Index(index)
    }
}

impl From<RowSlice> for Key {
    fn from(slice: RowSlice) -> Self {
        Self::Slice(slice)
    }
}

/// Converts a range bound, saturating bounds past `isize::MAX`.
fn bound(position: usize) -> isize {
    isize::try_from(position).unwrap_or(isize::MAX)
}

impl From<Range<usize>> for RowSlice {
    fn from(range: Range<usize>) -> Self {
        Self::new(Some(bound(range.start)), Some(bound(range.end)), None)
    }
}

impl From<RangeFrom<usize>> for RowSlice {
    fn from(range: RangeFrom<usize>) -> Self {
        Self::new(Some(bound(range.start)), None, None)
    }
}

impl From<RangeTo<usize>> for RowSlice {
    fn from(range: RangeTo<usize>) -> Self {
        Self::new(None, Some(bound(range.end)), None)
    }
}

impl From<RangeInclusive<usize>> for RowSlice {
    fn from(range: RangeInclusive<usize>) -> Self {
        Self::new(
            Some(bound(*range.start())),
            Some(bound(*range.end()).saturating_add(1)),
            None,
        )
    }
}

impl From<RangeFull> for RowSlice {
    fn from(_: RangeFull) -> Self {
        Self::default()
    }
}

macro_rules! key_from_range {
    ($($range:ty),*) => {
        $(
            impl From<$range> for Key {
                fn from(range: $range) -> Self {
                    Self::Slice(range.into())
                }
            }
        )*
    };
}

key_from_range!(
    Range<usize>,
    RangeFrom<usize>,
    RangeTo<usize>,
    RangeInclusive<usize>,
    RangeFull
);

impl From<Vec<Key>> for Key {
    fn from(items: Vec<Key>) -> Self {
        Self::List(items)
    }
}

impl From<Vec<&str>> for Key {
    fn from(labels: Vec<&str>) -> Self {
        Self::List(labels.into_iter().map(Key::from).collect())
    }
}

impl From<Vec<String>> for Key {
    fn from(labels: Vec<String>) -> Self {
        Self::List(labels.into_iter().map(Key::from).collect())
    }
}

impl From<Vec<usize>> for Key {
    fn from(indices: Vec<usize>) -> Self {
        Self::List(indices.into_iter().map(Key::from).collect())
    }
}

impl<C, R> From<(C, R)> for Key
where
    C: Into<Key>,
    R: Into<Key>,
{
    fn from((columns, rows): (C, R)) -> Self {
        Self::pair(columns, rows)
    }
}
