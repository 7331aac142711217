use super::Error;
use crate::stmt::Type;

/// Error when an inlined mapping produces a type the marker did not declare.
#[derive(Debug)]
pub(super) struct TypeMismatch {
    expected: Type,
    actual: Type,
}

impl std::error::Error for TypeMismatch {}

impl core::fmt::Display for TypeMismatch {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(
            f,
            "type mismatch: expected {:?}, found {:?}",
            self.expected, self.actual
        )
    }
}

impl Error {
    /// Creates a type mismatch error.
    pub fn type_mismatch(expected: Type, actual: Type) -> Error {
        Error::from(super::ErrorKind::TypeMismatch(TypeMismatch {
            expected,
            actual,
        }))
    }

    /// Returns `true` if this error is a type mismatch.
    pub fn is_type_mismatch(&self) -> bool {
        matches!(self.kind(), super::ErrorKind::TypeMismatch(_))
    }
}
