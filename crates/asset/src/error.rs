//! Errors produced while loading OBJ meshes.

use std::{fmt, io, path::PathBuf};

use thiserror::Error;

/// Which raw attribute table a face index points into.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum AttributeTable {
    Position,
    TexCoord,
    Normal,
}

impl fmt::Display for AttributeTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            AttributeTable::Position => "position",
            AttributeTable::TexCoord => "texture coordinate",
            AttributeTable::Normal => "normal",
        };
        f.write_str(name)
    }
}

/// Failure while loading an OBJ file. Line numbers are 1-based.
#[derive(Debug, Error)]
pub enum ObjError {
    /// The file could not be opened.
    #[error("Failed to open OBJ file: {}", path.display())]
    FileNotFound {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Reading from an already opened source failed.
    #[error("Failed to read line {line}")]
    Read {
        line: usize,
        #[source]
        source: io::Error,
    },

    /// A face line is not exactly three `i/i/i` corners.
    #[error("Malformed face on line {line}: '{text}' (expected 'f i/i/i i/i/i i/i/i')")]
    MalformedFace { line: usize, text: String },

    /// A `v`, `vt` or `vn` line has a missing or non-numeric field.
    #[error("Malformed '{directive}' attribute on line {line}: '{text}'")]
    MalformedAttribute {
        line: usize,
        directive: &'static str,
        text: String,
    },

    /// A face corner references an entry its table does not have.
    #[error(
        "Face {face} (line {line}) references {table} index {index}, but only {len} declared"
    )]
    IndexOutOfRange {
        table: AttributeTable,
        index: i64,
        len: usize,
        face: usize,
        line: usize,
    },
}

impl ObjError {
    /// Source line the error refers to, if any.
    pub fn line(&self) -> Option<usize> {
        match self {
            ObjError::FileNotFound { .. } => None,
            ObjError::Read { line, .. }
            | ObjError::MalformedFace { line, .. }
            | ObjError::MalformedAttribute { line, .. }
            | ObjError::IndexOutOfRange { line, .. } => Some(*line),
        }
    }
}

/// Convenience alias for `Result<T, ObjError>`.
pub type ObjResult<T> = Result<T, ObjError>;
