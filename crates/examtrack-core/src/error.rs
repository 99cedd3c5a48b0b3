//! Configuration error types.
//!
//! Raw answer counts are never rejected by the scoring core. The only failure
//! the core reports is an identifier outside one of its closed enumerations,
//! which is a defect in the caller's configuration rather than user input.

use thiserror::Error;

/// An identifier that does not name a known track, selector or subject.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// The track kind is not one of the recognized subject combinations.
    #[error("unknown track kind: {0}")]
    UnknownTrackKind(String),

    /// The selector is not one of the recognized exam selectors.
    #[error("unknown selector: {0}")]
    UnknownSelector(String),

    /// The subject name does not exist on the scale.
    #[error("unknown subject: {0}")]
    UnknownSubject(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_names_the_identifier() {
        let err = ConfigError::UnknownSelector("medicine".into());
        assert_eq!(err.to_string(), "unknown selector: medicine");
        let err = ConfigError::UnknownSubject("physics (in first half)".into());
        assert_eq!(err.to_string(), "unknown subject: physics (in first half)");
    }
}
