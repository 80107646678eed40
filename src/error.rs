// SPDX-License-Identifier: MPL-2.0
use std::fmt;

/// Errors surfaced by the gallery.
///
/// The interactive surface is total over its inputs, so the only runtime
/// failure is asking for a section that is not part of the configured set
/// (e.g. a typo in the `--section` flag).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// A section id outside the enumerated set was requested.
    InvalidSelection(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::InvalidSelection(id) => write!(f, "unknown section id: {id:?}"),
        }
    }
}

impl std::error::Error for Error {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_names_the_offending_id() {
        let err = Error::InvalidSelection("galery".to_string());
        assert!(err.to_string().contains("galery"));
    }
}
