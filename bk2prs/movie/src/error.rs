use std::io;

use thiserror::Error;

/// Raised when a core identifier is not one of the supported set.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unsupported core identifier: {0:?}")]
pub struct UnsupportedCore(pub String);

/// Error that may occur while assembling a movie artifact.
#[derive(Debug, Error)]
pub enum BuildError {
    /// The ROM could not be read for hashing. Surfaced before any log
    /// construction begins.
    #[error("failed to read ROM for hashing: {0}")]
    Rom(#[source] io::Error),
    /// An I/O error occurred while staging or renaming movie members.
    #[error("failed to write movie member: {0}")]
    Io(#[from] io::Error),
    /// The archive step failed.
    #[error("failed to package .bk2 archive: {0}")]
    Zip(#[from] zip::result::ZipError),
}
