//! Run configuration for `sha2sum`.

use std::env;

use super::mode::Mode;

/// Environment variable overriding [`SumConfig::read_buffer_size`].
pub const READ_BUFFER_ENV: &str = "SHA2SUM_READ_BUFFER";

/// Default read buffer size (1 MiB).
pub const DEFAULT_READ_BUFFER: usize = 1 << 20;

/// Options for one `sha2sum` run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SumConfig {
    /// Digests to compute.
    pub mode: Mode,
    /// Size of the reusable read buffer in bytes.
    pub read_buffer_size: usize,
}

impl Default for SumConfig {
    fn default() -> Self {
        Self {
            mode: Mode::All,
            read_buffer_size: DEFAULT_READ_BUFFER,
        }
    }
}

impl SumConfig {
    /// Configuration for `mode`, reading the buffer size from
    /// [`READ_BUFFER_ENV`] when it holds a positive integer.
    #[must_use]
    pub fn from_env(mode: Mode) -> Self {
        Self::with_buffer_override(mode, env::var(READ_BUFFER_ENV).ok().as_deref())
    }

    fn with_buffer_override(mode: Mode, raw: Option<&str>) -> Self {
        let read_buffer_size = raw
            .and_then(|raw| raw.trim().parse::<usize>().ok())
            .filter(|size| *size > 0)
            .unwrap_or(DEFAULT_READ_BUFFER);
        Self {
            mode,
            read_buffer_size,
        }
    }
}
