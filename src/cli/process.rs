//! Reading inputs, hashing them and printing the report.

use std::ffi::OsStr;
use std::fs::File;
use std::io::{self, ErrorKind, Read, Write};
use std::path::Path;

use tracing::{debug, instrument, warn};

use crate::hash::{AnyDigest, AnyHasher, Error, Result};

use super::config::SumConfig;
use super::mode::Mode;

/// Operand naming standard input.
pub const STDIN_OPERAND: &str = "-";

/// Drives one `sha2sum` run with a single reusable read buffer.
#[derive(Debug)]
pub struct Summer {
    mode: Mode,
    buffer: Vec<u8>,
}

impl Summer {
    /// Allocate the read buffer described by `config`.
    #[must_use]
    pub fn new(config: &SumConfig) -> Self {
        Self {
            mode: config.mode,
            buffer: vec![0u8; config.read_buffer_size.max(1)],
        }
    }

    /// Mode this run reports in.
    #[must_use]
    pub fn mode(&self) -> Mode {
        self.mode
    }

    /// Hash `reader` to the end with every algorithm of the mode.
    ///
    /// `name` only labels the error when reading fails.
    pub fn hash_reader<R: Read>(&mut self, mut reader: R, name: &str) -> Result<Vec<AnyDigest>> {
        let mut hashers: Vec<AnyHasher> = self
            .mode
            .algorithms()
            .iter()
            .map(|&algorithm| AnyHasher::new(algorithm))
            .collect();

        let mut total: u64 = 0;
        loop {
            let len = match reader.read(&mut self.buffer) {
                Ok(0) => break,
                Ok(len) => len,
                Err(err) if err.kind() == ErrorKind::Interrupted => continue,
                Err(source) => {
                    return Err(Error::Read {
                        name: name.to_owned(),
                        source,
                    });
                }
            };
            for hasher in &mut hashers {
                hasher.update(&self.buffer[..len]);
            }
            total += len as u64;
        }

        debug!(input = name, bytes = total, "input hashed");
        Ok(hashers.into_iter().map(AnyHasher::finalize).collect())
    }

    /// Hash one operand (`-` is standard input) and print its report to `out`.
    #[instrument(level = "debug", skip(self, out))]
    pub fn process_operand<W: Write>(&mut self, operand: &OsStr, out: &mut W) -> Result<()> {
        let digests = if operand == STDIN_OPERAND {
            let stdin = io::stdin();
            self.hash_reader(stdin.lock(), "stdin")?
        } else {
            let path = Path::new(operand);
            let file = File::open(path).map_err(|source| Error::Open {
                path: path.to_path_buf(),
                source,
            })?;
            self.hash_reader(file, &path.display().to_string())?
        };

        write_report(out, self.mode, &operand.to_string_lossy(), &digests)?;
        Ok(())
    }

    /// Process every operand, or standard input when there are none.
    ///
    /// Per-input failures are written to `err` and do not stop the run.
    /// Returns `Ok(true)` when every input was hashed; errors writing the
    /// report itself are returned.
    pub fn run<I, S, W, E>(&mut self, operands: I, out: &mut W, err: &mut E) -> io::Result<bool>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<OsStr>,
        W: Write,
        E: Write,
    {
        let mut operands = operands.into_iter().peekable();
        if operands.peek().is_none() {
            return self.run_one(OsStr::new(STDIN_OPERAND), out, err);
        }

        let mut all_ok = true;
        for operand in operands {
            all_ok &= self.run_one(operand.as_ref(), out, err)?;
        }
        Ok(all_ok)
    }

    fn run_one<W: Write, E: Write>(
        &mut self,
        operand: &OsStr,
        out: &mut W,
        err: &mut E,
    ) -> io::Result<bool> {
        match self.process_operand(operand, out) {
            Ok(()) => Ok(true),
            Err(Error::Io(io_err)) => Err(io_err),
            Err(failure) => {
                warn!(error = %failure, "skipping input");
                writeln!(err, "{failure}")?;
                Ok(false)
            }
        }
    }
}

/// Print the digests of one input.
///
/// Single-algorithm modes print `<hex>  <name>`. [`Mode::All`] prints
/// `<name>:`, one `<ALGORITHM>: <hex>` line per digest and a blank line.
pub fn write_report<W: Write>(
    out: &mut W,
    mode: Mode,
    name: &str,
    digests: &[AnyDigest],
) -> io::Result<()> {
    if mode == Mode::All {
        writeln!(out, "{name}:")?;
        for digest in digests {
            writeln!(out, "{}: {digest:x}", digest.algorithm())?;
        }
        writeln!(out)?;
    } else {
        for digest in digests {
            writeln!(out, "{digest:x}  {name}")?;
        }
    }
    Ok(())
}
