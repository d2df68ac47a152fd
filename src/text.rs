use crate::error::Result;
use crate::table::column::retain_positions;
use crate::{RowSlice, Unit, UnitError};
use std::collections::BTreeSet;
use std::fmt::Display;
use std::ops::{Add, Mul};

/// A list of text lines, stored as the lines joined by newlines.
///
/// Lines never contain a newline: storing one that does splits it into several lines.
///
/// ```
/// use fileunity::{TextUnit, Unit};
///
/// let mut text = TextUnit::by_str("one\ntwo").unwrap();
/// text.set(1, "2\n3").unwrap();
/// assert_eq!(3, text.len());
/// assert_eq!("one\n2\n3", text.to_string());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct TextUnit {
    lines: Vec<String>,
}

impl TextUnit {
    fn normalized(lines: Vec<String>) -> Vec<String> {
        if lines.iter().any(|l| l.contains('\n')) {
            split_lines(&lines.join("\n"))
        } else {
            lines
        }
    }

    fn out_of_range(&self, index: usize) -> UnitError {
        UnitError::IndexOutOfRange {
            index,
            len: self.len(),
        }
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    pub fn clear(&mut self) {
        self.lines.clear();
    }

    pub fn get(&self, index: usize) -> Option<&str> {
        self.lines.get(index).map(String::as_str)
    }

    pub fn as_slice(&self) -> &[String] {
        &self.lines
    }

    /// Replaces the line at `index`.
    pub fn set(&mut self, index: usize, line: impl ToString) -> Result<()> {
        if index >= self.len() {
            return Err(self.out_of_range(index));
        }
        let line = line.to_string();
        if line.contains('\n') {
            self.lines.splice(index..=index, split_lines(&line));
        } else {
            self.lines[index] = line;
        }
        Ok(())
    }

    /// Removes and returns the line at `index`.
    pub fn remove(&mut self, index: usize) -> Result<String> {
        if index >= self.len() {
            return Err(self.out_of_range(index));
        }
        Ok(self.lines.remove(index))
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.lines.iter().map(String::as_str)
    }

    pub fn contains(&self, line: &str) -> bool {
        self.lines.iter().any(|l| l == line)
    }

    /// Returns a new unit holding the lines of `self` followed by the lines of `other`.
    pub fn concat(&self, other: &TextUnit) -> TextUnit {
        Self {
            lines: [self.lines.as_slice(), other.lines.as_slice()].concat(),
        }
    }

    /// Returns a new unit holding the lines of `self` `times` times over.
    pub fn repeat(&self, times: usize) -> TextUnit {
        Self {
            lines: std::iter::repeat(self.lines.iter().cloned())
                .take(times)
                .flatten()
                .collect(),
        }
    }

    /// Returns the lines selected by `slice`, in slice order.
    ///
    /// Negative bounds count from the end, so `RowSlice::new(Some(-1), None, None)` is the
    /// last line.
    pub fn slice(&self, slice: impl Into<RowSlice>) -> Result<TextUnit> {
        let slice: RowSlice = slice.into();
        let lines = slice
            .indices(self.len())?
            .into_iter()
            .map(|i| self.lines[i].clone())
            .collect();
        Ok(Self { lines })
    }

    /// Removes every line selected by `slice`.
    pub fn remove_slice(&mut self, slice: impl Into<RowSlice>) -> Result<()> {
        let slice: RowSlice = slice.into();
        let positions: BTreeSet<usize> = slice.indices(self.len())?.into_iter().collect();
        retain_positions(&mut self.lines, &positions);
        Ok(())
    }
}

fn split_lines(text: &str) -> Vec<String> {
    text.split('\n').map(str::to_string).collect()
}

impl Unit for TextUnit {
    type Data = Vec<String>;

    const NAME: &'static str = "TextUnit";

    fn data_by_str(text: &str) -> Result<Vec<String>> {
        Ok(split_lines(text))
    }

    fn str_by_data(data: &Vec<String>) -> Result<String> {
        Ok(data.join("\n"))
    }

    fn from_data(data: Vec<String>) -> Result<Self> {
        Ok(Self {
            lines: Self::normalized(data),
        })
    }

    fn data(&self) -> Vec<String> {
        self.lines.clone()
    }

    fn to_text(&self) -> Result<String> {
        Ok(self.to_string())
    }
}

impl Display for TextUnit {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (i, line) in self.lines.iter().enumerate() {
            if i != 0 {
                f.write_str("\n")?;
            }
            f.write_str(line)?;
        }
        Ok(())
    }
}

impl From<Vec<String>> for TextUnit {
    fn from(lines: Vec<String>) -> Self {
        Self {
            lines: Self::normalized(lines),
        }
    }
}

impl<S: ToString> FromIterator<S> for TextUnit {
    fn from_iter<T: IntoIterator<Item = S>>(iter: T) -> Self {
        iter.into_iter()
            .map(|s| s.to_string())
            .collect::<Vec<_>>()
            .into()
    }
}

impl<'a> IntoIterator for &'a TextUnit {
    type Item = &'a String;
    type IntoIter = std::slice::Iter<'a, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.lines.iter()
    }
}

impl Add for TextUnit {
    type Output = TextUnit;

    fn add(mut self, rhs: TextUnit) -> TextUnit {
        self.lines.extend(rhs.lines);
        self
    }
}

impl Add<&TextUnit> for &TextUnit {
    type Output = TextUnit;

    fn add(self, rhs: &TextUnit) -> TextUnit {
        self.concat(rhs)
    }
}

impl Mul<usize> for &TextUnit {
    type Output = TextUnit;

    fn mul(self, rhs: usize) -> TextUnit {
        self.repeat(rhs)
    }
}

impl Mul<&TextUnit> for usize {
    type Output = TextUnit;

    fn mul(self, rhs: &TextUnit) -> TextUnit {
        rhs.repeat(self)
    }
}
