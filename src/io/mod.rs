pub mod stream;
pub mod tsv;

use crate::error::Result;
use std::fs::File;
use std::io::Write;
use std::path::{Path, PathBuf};

pub use stream::Stream;

/// An in-memory value together with its canonical text form.
///
/// Implementors provide the codec ([`Unit::data_by_str`], [`Unit::str_by_data`]) and the
/// conversion to and from their plain container ([`Unit::Data`]). Loading, saving and
/// streaming are shared.
///
/// The container crosses the unit boundary by value only: [`Unit::data`] returns an
/// independent copy, and [`Unit::from_data`] / [`Unit::set_data`] take ownership of theirs.
pub trait Unit: Clone + Default {
    /// The plain container the unit wraps.
    type Data: Clone;

    /// Name used when displaying streams of this unit.
    const NAME: &'static str;

    /// Parses the text form. `text` carries no trailing newline.
    fn data_by_str(text: &str) -> Result<Self::Data>;

    /// Renders the text form, without a trailing newline.
    fn str_by_data(data: &Self::Data) -> Result<String>;

    /// Builds a unit, checking the container's invariants.
    fn from_data(data: Self::Data) -> Result<Self>;

    /// Returns a copy of the unit's container.
    fn data(&self) -> Self::Data;

    /// Replaces the unit's container. On error, the unit is left unchanged.
    fn set_data(&mut self, data: Self::Data) -> Result<()> {
        *self = Self::from_data(data)?;
        Ok(())
    }

    fn by_str(text: &str) -> Result<Self> {
        Self::data_by_str(text).and_then(Self::from_data)
    }

    fn to_text(&self) -> Result<String> {
        Self::str_by_data(&self.data())
    }

    /// Reads a unit from a file. A single trailing newline is ignored.
    fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path)?;
        log::debug!("loaded {} bytes from {}", text.len(), path.display());
        Self::by_str(text.strip_suffix('\n').unwrap_or(&text))
    }

    /// Writes the unit's text form followed by a newline to `path`, or to the standard
    /// output if `path` is `None`.
    ///
    /// The text is rendered before the target is opened, so a unit that cannot be
    /// rendered leaves the target untouched.
    fn save(&self, path: Option<&Path>) -> Result<()> {
        let text = self.to_text()?;
        match path {
            Some(path) => {
                let mut file = File::create(path)?;
                file.write_all(text.as_bytes())?;
                file.write_all(b"\n")?;
                log::debug!("saved {} bytes to {}", text.len() + 1, path.display());
            }
            None => {
                let mut out = std::io::stdout().lock();
                writeln!(out, "{text}")?;
            }
        }
        Ok(())
    }

    /// Returns a [`Stream`] of this unit kind over `file`.
    fn stream(file: Option<PathBuf>) -> Stream<Self> {
        Stream::new(file)
    }
}
