use super::Error;

/// Error when the number of supplied arguments does not match a function's
/// parameter list.
///
/// This occurs when:
/// - A binding supplies a different number of replacements than the function declares
/// - A referenced mapping does not take exactly one parameter
/// - A function is called with the wrong number of arguments
#[derive(Debug)]
pub(super) struct ArityMismatch {
    expected: usize,
    actual: usize,
}

impl std::error::Error for ArityMismatch {}

impl core::fmt::Display for ArityMismatch {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(
            f,
            "arity mismatch: expected {} argument(s), found {}",
            self.expected, self.actual
        )
    }
}

impl Error {
    /// Creates an arity mismatch error.
    pub fn arity_mismatch(expected: usize, actual: usize) -> Error {
        Error::from(super::ErrorKind::ArityMismatch(ArityMismatch {
            expected,
            actual,
        }))
    }

    /// Returns `true` if this error is an arity mismatch.
    pub fn is_arity_mismatch(&self) -> bool {
        matches!(self.kind(), super::ErrorKind::ArityMismatch(_))
    }
}
