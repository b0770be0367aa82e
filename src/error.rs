//! Error type shared by the library.
//!
//! Only input acquisition can fail. Incomplete cross references (unknown
//! sections, aliases, superclasses) degrade to a smaller tree instead.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

pub type Result<T, E = Error> = std::result::Result<T, E>;

#[derive(Debug, Error)]
pub enum Error {
    /// A source file could not be read. Raised before any file is parsed.
    #[error("failed to read {}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The comment parser rejected a file.
    #[error("failed to parse records from {}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    #[error("no parser registered under {0:?}")]
    UnknownParser(String),

    #[error("failed to serialize documentation")]
    Serialize(#[from] serde_json::Error),
}
