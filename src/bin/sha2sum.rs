//! `sha2sum`: print SHA-2 digests of files or standard input.
//!
//! Invoked as `sha256`/`sha256sum` (or the 224, 512 and 384 equivalents) it
//! prints a single digest per input; under any other name it prints all four.
//! Set `SHA2SUM_READ_BUFFER` to change the read buffer size.

use std::env;
use std::io::{self, Write};
use std::process::ExitCode;

use shakit::cli::{Mode, SumConfig, Summer};

fn main() -> ExitCode {
    let mut args = env::args_os();
    let program = args.next().unwrap_or_default();
    let mode = Mode::from_program_name(&program);

    let mut summer = Summer::new(&SumConfig::from_env(mode));
    let stdout = io::stdout();
    let stderr = io::stderr();
    let mut out = stdout.lock();
    let mut err = stderr.lock();

    let result = summer.run(args, &mut out, &mut err).and_then(|ok| {
        out.flush()?;
        Ok(ok)
    });

    match result {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::FAILURE,
        Err(error) => {
            let _ = writeln!(err, "sha2sum: {error}");
            ExitCode::FAILURE
        }
    }
}
