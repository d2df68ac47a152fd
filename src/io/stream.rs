use crate::error::Result;
use crate::{Unit, UnitError};
use std::fmt::Display;
use std::marker::PhantomData;
use std::path::{Path, PathBuf};

/// A file that holds a unit of kind `U`.
///
/// A stream without a file can be written to (the unit is printed to the standard output)
/// but not read from.
///
/// ```no_run
/// use fileunity::{TextUnit, Unit};
///
/// let stream = TextUnit::stream(Some("notes.txt".into()));
/// let mut notes = stream.read().unwrap();
/// notes.set(0, "first line").unwrap();
/// stream.write(&notes).unwrap();
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Stream<U> {
    file: Option<PathBuf>,
    _unit: PhantomData<U>,
}

impl<U: Unit> Stream<U> {
    pub fn new(file: Option<PathBuf>) -> Self {
        Self {
            file,
            _unit: PhantomData,
        }
    }

    pub fn file(&self) -> Option<&Path> {
        self.file.as_deref()
    }

    pub fn read(&self) -> Result<U> {
        let path = self.file.as_deref().ok_or(UnitError::NoReadSource)?;
        U::load(path)
    }

    pub fn write(&self, unit: &U) -> Result<()> {
        unit.save(self.file.as_deref())
    }
}

impl<U: Unit> Display for Stream<U> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.file {
            Some(file) => write!(f, "Stream<{}>(file={})", U::NAME, file.display()),
            None => write!(f, "Stream<{}>(file=None)", U::NAME),
        }
    }
}
