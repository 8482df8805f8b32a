//! Error types

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Errors reported by the hashing API and the `sha2sum` glue.
///
/// Hashing itself cannot fail; the only hashing error is a caller-supplied
/// digest buffer that is too short. The remaining variants come from reading
/// input.
#[derive(Error, Debug)]
pub enum Error {
    /// Digest output buffer too small
    #[error("digest buffer too small: need {needed} bytes, got {got}")]
    BufferTooSmall {
        /// Digest length of the variant
        needed: usize,
        /// Length of the supplied buffer
        got: usize,
    },

    /// Input file could not be opened
    #[error("Error opening {}: {source}", .path.display())]
    Open {
        /// Operand as given on the command line
        path: PathBuf,
        /// Underlying cause
        #[source]
        source: io::Error,
    },

    /// Input could not be read to the end
    #[error("Error reading from {name}: {source}")]
    Read {
        /// Display name of the input (`stdin` for standard input)
        name: String,
        /// Underlying cause
        #[source]
        source: io::Error,
    },

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] io::Error),
}

/// Result type alias
pub type Result<T> = std::result::Result<T, Error>;
