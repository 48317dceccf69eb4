//! Error type for the backend.

use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    /// The SQLite file could not be opened or created.
    #[error("failed to open database at {path}: {source}")]
    DatabaseOpen {
        path: PathBuf,
        #[source]
        source: rusqlite::Error,
    },

    #[error("database query failed: {0}")]
    DatabaseQuery(#[from] rusqlite::Error),

    /// A stored column held something that does not parse back into the model.
    #[error("stored {column} value '{value}' could not be parsed")]
    CorruptValue { column: &'static str, value: String },

    #[error("failed to load configuration: {0}")]
    ConfigLoad(Box<figment::Error>),

    #[error("invalid configuration: {message}")]
    ConfigValidation { message: String },

    #[error("failed to create directory {path}: {source}")]
    DirectoryCreate {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

pub type Result<T> = std::result::Result<T, Error>;

impl From<figment::Error> for Error {
    fn from(err: figment::Error) -> Self {
        Self::ConfigLoad(Box::new(err))
    }
}

impl Error {
    pub fn corrupt(column: &'static str, value: impl Into<String>) -> Self {
        Self::CorruptValue {
            column,
            value: value.into(),
        }
    }
}
