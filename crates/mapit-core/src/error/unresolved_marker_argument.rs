use super::Error;

/// Error when the mapping argument of an include marker cannot be resolved
/// to a mapping ahead of time.
///
/// The underlying evaluation failure, if any, is attached as the cause.
#[derive(Debug)]
pub(super) struct UnresolvedMarkerArgument {
    message: Box<str>,
}

impl std::error::Error for UnresolvedMarkerArgument {}

impl core::fmt::Display for UnresolvedMarkerArgument {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(f, "unresolved marker argument: {}", self.message)
    }
}

impl Error {
    /// Creates an unresolved marker argument error.
    pub fn unresolved_marker_argument(message: impl Into<String>) -> Error {
        Error::from(super::ErrorKind::UnresolvedMarkerArgument(
            UnresolvedMarkerArgument {
                message: message.into().into(),
            },
        ))
    }

    /// Returns `true` if this error is an unresolved marker argument error.
    pub fn is_unresolved_marker_argument(&self) -> bool {
        matches!(
            self.kind(),
            super::ErrorKind::UnresolvedMarkerArgument(_)
        )
    }
}
