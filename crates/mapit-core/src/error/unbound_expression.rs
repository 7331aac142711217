use super::Error;

/// Error when an expression references a parameter that has no value.
///
/// Raised when evaluating or compiling an expression that was expected to be
/// closed but depends on per-record input.
#[derive(Debug)]
pub(super) struct UnboundExpression {
    param: Box<str>,
}

impl std::error::Error for UnboundExpression {}

impl core::fmt::Display for UnboundExpression {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(
            f,
            "expression depends on unbound parameter `{}`",
            self.param
        )
    }
}

impl Error {
    /// Creates an unbound expression error naming the open parameter.
    pub fn unbound_expression(param: impl Into<String>) -> Error {
        Error::from(super::ErrorKind::UnboundExpression(UnboundExpression {
            param: param.into().into(),
        }))
    }

    /// Returns `true` if this error is an unbound expression error.
    pub fn is_unbound_expression(&self) -> bool {
        matches!(self.kind(), super::ErrorKind::UnboundExpression(_))
    }
}
