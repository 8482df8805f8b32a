//! Algorithm selection for `sha2sum`.

use std::path::Path;

use crate::hash::Algorithm;

/// Which digests to compute for every input.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Mode {
    /// All four algorithms, reported in labelled blocks.
    #[default]
    All,
    /// SHA-256 only
    Sha256,
    /// SHA-224 only
    Sha224,
    /// SHA-512 only
    Sha512,
    /// SHA-384 only
    Sha384,
}

impl Mode {
    /// Select a mode from the name the program was invoked as.
    ///
    /// Only the basename counts: `sha256`/`sha256sum` and the other three
    /// pairs pick a single algorithm, anything else computes all of them.
    #[must_use]
    pub fn from_program_name(program: impl AsRef<Path>) -> Self {
        let name = program
            .as_ref()
            .file_name()
            .and_then(|name| name.to_str())
            .unwrap_or_default();

        match name {
            "sha256" | "sha256sum" => Self::Sha256,
            "sha224" | "sha224sum" => Self::Sha224,
            "sha512" | "sha512sum" => Self::Sha512,
            "sha384" | "sha384sum" => Self::Sha384,
            _ => Self::All,
        }
    }

    /// Algorithms to run, in report order.
    #[must_use]
    pub fn algorithms(self) -> &'static [Algorithm] {
        match self {
            Self::All => &Algorithm::ALL,
            Self::Sha256 => &[Algorithm::Sha256],
            Self::Sha224 => &[Algorithm::Sha224],
            Self::Sha512 => &[Algorithm::Sha512],
            Self::Sha384 => &[Algorithm::Sha384],
        }
    }
}

impl From<Algorithm> for Mode {
    fn from(algorithm: Algorithm) -> Self {
        match algorithm {
            Algorithm::Sha256 => Self::Sha256,
            Algorithm::Sha224 => Self::Sha224,
            Algorithm::Sha512 => Self::Sha512,
            Algorithm::Sha384 => Self::Sha384,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn single_algorithm_names() {
        assert_eq!(Mode::from_program_name("sha256"), Mode::Sha256);
        assert_eq!(Mode::from_program_name("sha256sum"), Mode::Sha256);
        assert_eq!(Mode::from_program_name("sha224sum"), Mode::Sha224);
        assert_eq!(Mode::from_program_name("sha512"), Mode::Sha512);
        assert_eq!(Mode::from_program_name("sha384sum"), Mode::Sha384);
    }

    #[test]
    fn only_basename_is_considered() {
        assert_eq!(Mode::from_program_name("/usr/local/bin/sha384"), Mode::Sha384);
        assert_eq!(Mode::from_program_name("./target/release/sha224"), Mode::Sha224);
        assert_eq!(Mode::from_program_name("/opt/sha256sum/sha2sum"), Mode::All);
    }

    #[test]
    fn unknown_names_select_all() {
        assert_eq!(Mode::from_program_name("sha2sum"), Mode::All);
        assert_eq!(Mode::from_program_name(""), Mode::All);
        assert_eq!(Mode::from_program_name("SHA256"), Mode::All);
    }

    #[test]
    fn algorithms_in_report_order() {
        assert_eq!(Mode::All.algorithms(), &Algorithm::ALL);
        assert_eq!(Mode::Sha512.algorithms(), &[Algorithm::Sha512]);
        assert_eq!(Mode::from(Algorithm::Sha224), Mode::Sha224);
    }
}
