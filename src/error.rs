use crate::KeyKind;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, UnitError>;

#[derive(Error, Debug)]
pub enum UnitError {
    #[error(transparent)]
    Io(#[from] std::io::Error),
    #[error(transparent)]
    Csv(#[from] csv::Error),
    #[error(transparent)]
    TomlParse(#[from] toml::de::Error),
    #[error(transparent)]
    TomlRender(#[from] toml::ser::Error),
    #[error("Stream has no file to read from")]
    NoReadSource,
    #[error("Unsupported key type: {0:?}")]
    UnsupportedKey(KeyKind),
    #[error("Cannot assign {found} to a {target} selection")]
    UnsupportedValue {
        target: &'static str,
        found: &'static str,
    },
    #[error("Unknown column: {0:?}")]
    UnknownColumn(String),
    #[error("Unknown key: {0:?}")]
    UnknownKey(String),
    #[error("Value at {0:?} is not a table")]
    NotATable(String),
    #[error("Key path cannot be empty")]
    EmptyPath,
    #[error("Duplicate key: {0:?}")]
    DuplicateKey(String),
    #[error("Index {index} out of range for length {len}")]
    IndexOutOfRange { index: usize, len: usize },
    #[error("Forbidden character {ch:?} in field {field:?}")]
    ForbiddenCharacter { ch: char, field: String },
    #[error("Duplicate column label: {0:?}")]
    DuplicateColumn(String),
    #[error("Empty column label at position {0}")]
    EmptyColumn(usize),
    #[error("Row {row} has {found} fields, expected {expected}")]
    RaggedRow {
        row: usize,
        expected: usize,
        found: usize,
    },
    #[error("Length mismatch: {targets} targets, {values} values")]
    LengthMismatch { targets: usize, values: usize },
    #[error("Slice step cannot be zero")]
    ZeroSliceStep,
    #[error("Replacing several whole rows at once is not supported")]
    MultiRowReplace,
}

/// Coarse classification of [`UnitError`]s.
///
/// Callers that only care about the class of failure (an unknown column versus a row
/// out of range, for example) should match on this instead of the full error.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// The key or value has a shape the operation does not accept.
    Type,
    /// A column label or key is not part of the unit.
    Key,
    /// A position lies outside the container.
    Index,
    /// A value is malformed: forbidden characters, duplicate labels, length mismatches.
    Value,
    /// The operation is deliberately unsupported.
    NotImplemented,
    /// Reading or writing the backing file failed.
    Io,
}

impl UnitError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::Io(_) | Self::Csv(_) | Self::NoReadSource => ErrorKind::Io,
            Self::UnsupportedKey(_) | Self::UnsupportedValue { .. } | Self::NotATable(_) => {
                ErrorKind::Type
            }
            Self::UnknownColumn(_) | Self::UnknownKey(_) => ErrorKind::Key,
            Self::IndexOutOfRange { .. } => ErrorKind::Index,
            Self::ForbiddenCharacter { .. }
            | Self::DuplicateColumn(_)
            | Self::EmptyColumn(_)
            | Self::RaggedRow { .. }
            | Self::LengthMismatch { .. }
            | Self::ZeroSliceStep
            | Self::TomlParse(_)
            | Self::TomlRender(_)
            | Self::EmptyPath
            | Self::DuplicateKey(_) => ErrorKind::Value,
            Self::MultiRowReplace => ErrorKind::NotImplemented,
        }
    }
}
