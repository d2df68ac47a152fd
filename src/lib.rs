//! # fileunity
//!
//! Units are in-memory values paired with a canonical text form, so they can be loaded from
//! and saved to files without losing anything on the way. This crate provides two of them:
//!
//! * [`TextUnit`], a list of text lines.
//! * [`TsvUnit`], a table of text cells with labeled columns, stored as tab-separated
//!   values.
//! * [`TomlUnit`], a table of nested values addressed by key path, stored as a TOML
//!   document.
//!
//! Both implement [`Unit`], which supplies [`Unit::load`], [`Unit::save`] and
//! [`Unit::stream`] on top of a per-kind text codec. A unit owns its data exclusively:
//! [`Unit::data`] hands out a copy, and nothing read out of a unit can change it.
//!
//! ## Tables
//! [`TsvUnit`] is indexed with a [`Key`], which selects columns by label and rows by
//! position, range or list:
//!
//! ```
//! use fileunity::{Key, Selection, TsvUnit, Unit, UnitResult};
//!
//! fn raise_ages() -> UnitResult<()> {
//!     let mut table = TsvUnit::by_str("name\tage\nAnn\t30\nBo\t40")?;
//!
//!     // one cell, one column, one row
//!     assert_eq!(Some("30"), table.get(("age", 0_usize))?.as_value());
//!     let ages = table.get("age")?.into_values().unwrap_or_default();
//!     assert_eq!(vec!["30", "40"], ages);
//!
//!     table.set(("age", vec![0_usize, 1]), vec!["31", "41"])?;
//!     table.delete(Key::Index(0))?;
//!     assert_eq!("name\tage\nBo\t41", table.to_text()?);
//!     Ok(())
//! }
//! # raise_ages().unwrap();
//! ```
//!
//! The text form is strict: the first line holds the labels, fields are separated by tabs,
//! and fields containing tabs, newlines or double quotes are rejected instead of escaped.
//! See [`io::tsv`].
//!
//! ## Serde support
//! When the `serde` feature flag is enabled, units implement `Serialize` and `Deserialize`.


#[cfg(feature = "serde")]
pub mod serde;

pub mod io;

pub(crate) mod error;
pub(crate) mod key;
pub(crate) mod table;
pub(crate) mod text;
pub(crate) mod toml;

pub use error::ErrorKind;
pub use error::Result as UnitResult;
pub use error::UnitError;
pub use io::{Stream, Unit};
pub use key::*;
pub use text::TextUnit;
pub use crate::toml::TomlUnit;

pub use table::builder::TableBuilder;
pub use table::column::ColumnMap;
pub use table::row::Record;
pub use table::selection::*;
pub use table::*;
