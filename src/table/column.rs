use crate::error::Result;
use crate::UnitError;
use std::collections::{BTreeSet, HashSet};

/// The ordered set of column labels of a [`TsvUnit`].
///
/// Labels are non-empty and pairwise unique; every constructor checks this.
///
/// [`TsvUnit`]: crate::TsvUnit
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ColumnMap {
    labels: Vec<String>,
}

impl ColumnMap {
    pub fn new(labels: Vec<String>) -> Result<Self> {
        validate_labels(&labels)?;
        Ok(Self { labels })
    }

    pub fn position(&self, label: &str) -> Option<usize> {
        self.labels.iter().position(|l| l == label)
    }

    pub fn contains(&self, label: &str) -> bool {
        self.position(label).is_some()
    }

    /// Like [`ColumnMap::position`], but fails with [`UnitError::UnknownColumn`].
    pub(crate) fn require(&self, label: &str) -> Result<usize> {
        self.position(label)
            .ok_or_else(|| UnitError::UnknownColumn(label.to_string()))
    }

    pub fn len(&self) -> usize {
        self.labels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    pub fn as_slice(&self) -> &[String] {
        &self.labels
    }

    pub fn into_raw(self) -> Vec<String> {
        self.labels
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.labels.iter().map(String::as_str)
    }

    pub(crate) fn remove_positions(&mut self, positions: &BTreeSet<usize>) {
        retain_positions(&mut self.labels, positions);
    }
}

/// Checks that labels are non-empty and unique.
pub(crate) fn validate_labels(labels: &[String]) -> Result<()> {
    let mut seen = HashSet::with_capacity(labels.len());
    for (i, label) in labels.iter().enumerate() {
        if label.is_empty() {
            return Err(UnitError::EmptyColumn(i));
        }
        if !seen.insert(label.as_str()) {
            return Err(UnitError::DuplicateColumn(label.clone()));
        }
    }
    Ok(())
}

/// Removes the elements at the given positions, shifting the rest down.
pub(crate) fn retain_positions<T>(items: &mut Vec<T>, positions: &BTreeSet<usize>) {
    let mut i = 0;
    items.retain(|_| {
        let keep = !positions.contains(&i);
        i += 1;
        keep
    });
}

impl<'a> IntoIterator for &'a ColumnMap {
    type Item = &'a String;
    type IntoIter = std::slice::Iter<'a, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.labels.iter()
    }
}

impl TryFrom<Vec<String>> for ColumnMap {
    type Error = UnitError;

    fn try_from(labels: Vec<String>) -> Result<Self> {
        Self::new(labels)
    }
}
