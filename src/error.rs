//! Error types for the scytale library.

use std::fmt;

/// Errors produced by the scytale library.
///
/// All errors are raised synchronously at the point of violation and are
/// never retried or recovered internally. The message text is advisory;
/// callers should match on the variant, not parse the string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScytaleError {
    /// A key failed structural validation at construction.
    InvalidKey(String),
    /// A geometric invariant was violated (square side does not divide
    /// evenly, dimensionality mismatch).
    StructuralMismatch(String),
    /// A runtime lookup missed in a square or tabula recta.
    KeyNotFound(String),
    /// Ciphertext is structurally invalid for decryption.
    MalformedInput(String),
    /// A modular inverse was requested but does not exist.
    NotInvertible(String),
    /// Matrix operands have incompatible dimensions.
    DimensionMismatch(String),
    /// The requested operation is not supported in this form.
    UnsupportedOperation(String),
    /// An argument is outside the operation's domain.
    InvalidArgument(String),
    /// A square index does not decompose into in-range coordinates.
    IndexOutOfRange(usize),
}

impl fmt::Display for ScytaleError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ScytaleError::InvalidKey(msg) => write!(f, "invalid key: {}", msg),
            ScytaleError::StructuralMismatch(msg) => {
                write!(f, "structural mismatch: {}", msg)
            }
            ScytaleError::KeyNotFound(what) => {
                write!(f, "{} is not in the alphabet", what)
            }
            ScytaleError::MalformedInput(msg) => write!(f, "malformed input: {}", msg),
            ScytaleError::NotInvertible(msg) => write!(f, "not invertible: {}", msg),
            ScytaleError::DimensionMismatch(msg) => {
                write!(f, "dimension mismatch: {}", msg)
            }
            ScytaleError::UnsupportedOperation(msg) => {
                write!(f, "unsupported operation: {}", msg)
            }
            ScytaleError::InvalidArgument(msg) => write!(f, "invalid argument: {}", msg),
            ScytaleError::IndexOutOfRange(index) => {
                write!(f, "index {} is out of range", index)
            }
        }
    }
}

impl ScytaleError {
    /// Shorthand for the common "character missed a lookup" case.
    pub(crate) fn unknown_char(c: char) -> Self {
        ScytaleError::KeyNotFound(format!("character {:?}", c))
    }

    /// Shorthand for a failed coordinate lookup.
    pub(crate) fn unknown_coordinate(coord: &[usize]) -> Self {
        ScytaleError::KeyNotFound(format!("coordinate {:?}", coord))
    }
}

impl std::error::Error for ScytaleError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_invalid_key() {
        let err = ScytaleError::InvalidKey("key characters must be unique".into());
        assert_eq!(
            format!("{}", err),
            "invalid key: key characters must be unique"
        );
    }

    #[test]
    fn test_display_key_not_found() {
        let err = ScytaleError::unknown_char('!');
        assert_eq!(format!("{}", err), "character '!' is not in the alphabet");
    }

    #[test]
    fn test_display_index_out_of_range() {
        let err = ScytaleError::IndexOutOfRange(25);
        assert_eq!(format!("{}", err), "index 25 is out of range");
    }

    #[test]
    fn test_error_equality() {
        assert_eq!(
            ScytaleError::unknown_char('a'),
            ScytaleError::unknown_char('a')
        );
        assert_ne!(
            ScytaleError::unknown_char('a'),
            ScytaleError::unknown_char('b')
        );
        assert_ne!(
            ScytaleError::InvalidKey("x".into()),
            ScytaleError::MalformedInput("x".into())
        );
    }

    #[test]
    fn test_error_clone() {
        let err = ScytaleError::NotInvertible("2 is not prime relative to 4".into());
        let cloned = err.clone();
        assert_eq!(err, cloned);
    }
}
