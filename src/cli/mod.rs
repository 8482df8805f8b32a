//! `sha2sum` command-line glue: algorithm selection, input reading and
//! report formatting around the hashing core.

mod config;
mod mode;
mod process;

pub use config::{DEFAULT_READ_BUFFER, READ_BUFFER_ENV, SumConfig};
pub use mode::Mode;
pub use process::{STDIN_OPERAND, Summer, write_report};
