mod adhoc;
mod arity_mismatch;
mod expression_evaluation_failed;
mod invalid_schema;
mod type_mismatch;
mod unbound_expression;
mod unresolved_marker_argument;

use adhoc::AdhocError;
use arity_mismatch::ArityMismatch;
use expression_evaluation_failed::ExpressionEvaluationFailed;
use invalid_schema::InvalidSchema;
use std::sync::Arc;
use type_mismatch::TypeMismatch;
use unbound_expression::UnboundExpression;
use unresolved_marker_argument::UnresolvedMarkerArgument;

/// Returns early with an ad-hoc error built from a format string.
#[macro_export]
macro_rules! bail {
    ($($arg:tt)*) => {
        return Err($crate::Error::from_args(format_args!($($arg)*)))
    };
}

/// Builds an ad-hoc error from a format string.
#[macro_export]
macro_rules! err {
    ($($arg:tt)*) => {
        $crate::Error::from_args(format_args!($($arg)*))
    };
}

/// An error that can occur while building, composing or evaluating mappings.
#[derive(Clone)]
pub struct Error {
    inner: Option<Arc<ErrorInner>>,
}

#[derive(Debug)]
struct ErrorInner {
    kind: ErrorKind,
    cause: Option<Error>,
}

impl Error {
    /// Adds context to this error.
    ///
    /// Context is displayed in reverse order: the most recently added context is shown first,
    /// followed by earlier context, ending with the root cause.
    #[inline(always)]
    pub fn context(self, consequent: impl IntoError) -> Error {
        self.context_impl(consequent.into_error())
    }

    #[inline(never)]
    #[cold]
    fn context_impl(self, consequent: Error) -> Error {
        let mut err = consequent;
        if err.inner.is_none() {
            err = Error::from(ErrorKind::Unknown);
        }
        let Some(inner) = err.inner.as_mut() else {
            unreachable!()
        };
        assert!(
            inner.cause.is_none(),
            "consequent error must not already have a cause"
        );
        match Arc::get_mut(inner) {
            Some(inner) => inner.cause = Some(self),
            None => {
                // The consequent is shared; rebuild it so the cause can be attached.
                let kind = ErrorKind::Adhoc(AdhocError::new(inner.kind.to_string()));
                return Error {
                    inner: Some(Arc::new(ErrorInner {
                        kind,
                        cause: Some(self),
                    })),
                };
            }
        }
        err
    }

    /// Returns the error this one was caused by, if any.
    pub fn cause(&self) -> Option<&Error> {
        self.inner.as_ref().and_then(|inner| inner.cause.as_ref())
    }

    fn chain(&self) -> impl Iterator<Item = &Error> {
        let mut err = self;
        core::iter::once(err).chain(core::iter::from_fn(move || {
            err = err.cause()?;
            Some(err)
        }))
    }

    fn kind(&self) -> &ErrorKind {
        self.inner
            .as_ref()
            .map(|inner| &inner.kind)
            .unwrap_or(&ErrorKind::Unknown)
    }

    #[doc(hidden)]
    pub fn from_args(args: core::fmt::Arguments<'_>) -> Error {
        Error::from(ErrorKind::Adhoc(AdhocError::new(args.to_string())))
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        self.cause().map(|cause| cause as &(dyn std::error::Error + 'static))
    }
}

impl core::fmt::Display for Error {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        let mut it = self.chain().peekable();
        while let Some(err) = it.next() {
            core::fmt::Display::fmt(err.kind(), f)?;
            if it.peek().is_some() {
                f.write_str(": ")?;
            }
        }
        Ok(())
    }
}

impl core::fmt::Debug for Error {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        if !f.alternate() {
            core::fmt::Display::fmt(self, f)
        } else {
            let Some(ref inner) = self.inner else {
                return f.debug_struct("Error").field("kind", &"None").finish();
            };
            f.debug_struct("Error")
                .field("kind", &inner.kind)
                .field("cause", &inner.cause)
                .finish()
        }
    }
}

#[derive(Debug)]
enum ErrorKind {
    Adhoc(AdhocError),
    ArityMismatch(ArityMismatch),
    ExpressionEvaluationFailed(ExpressionEvaluationFailed),
    InvalidSchema(InvalidSchema),
    TypeMismatch(TypeMismatch),
    UnboundExpression(UnboundExpression),
    UnresolvedMarkerArgument(UnresolvedMarkerArgument),
    Unknown,
}

impl core::fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        use self::ErrorKind::*;

        match self {
            Adhoc(err) => core::fmt::Display::fmt(err, f),
            ArityMismatch(err) => core::fmt::Display::fmt(err, f),
            ExpressionEvaluationFailed(err) => core::fmt::Display::fmt(err, f),
            InvalidSchema(err) => core::fmt::Display::fmt(err, f),
            TypeMismatch(err) => core::fmt::Display::fmt(err, f),
            UnboundExpression(err) => core::fmt::Display::fmt(err, f),
            UnresolvedMarkerArgument(err) => core::fmt::Display::fmt(err, f),
            Unknown => f.write_str("unknown mapit error"),
        }
    }
}

impl From<ErrorKind> for Error {
    fn from(kind: ErrorKind) -> Error {
        Error {
            inner: Some(Arc::new(ErrorInner { kind, cause: None })),
        }
    }
}

/// Trait for types that can be converted into an Error.
pub trait IntoError {
    /// Converts this type into an Error.
    fn into_error(self) -> Error;
}

impl IntoError for Error {
    #[inline(always)]
    fn into_error(self) -> Error {
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::stmt::Type;

    #[test]
    fn error_size() {
        // Ensure Error stays at one word (size of pointer/Arc)
        let expected_size = core::mem::size_of::<usize>();
        assert_eq!(expected_size, core::mem::size_of::<Error>());
    }

    #[test]
    fn error_from_args() {
        let err = Error::from_args(format_args!("test error: {}", 42));
        assert_eq!(err.to_string(), "test error: 42");
    }

    #[test]
    fn error_chain_display() {
        let root = err!("root cause");
        let mid = err!("middle context");
        let top = err!("top context");

        let chained = root.context(mid).context(top);
        assert_eq!(
            chained.to_string(),
            "top context: middle context: root cause"
        );
    }

    #[test]
    fn context_on_shared_consequent() {
        let consequent = err!("while composing");
        let _shared = consequent.clone();
        let err = err!("root").context(consequent);
        assert_eq!(err.to_string(), "while composing: root");
    }

    #[test]
    fn arity_mismatch_display() {
        let err = Error::arity_mismatch(1, 2);
        assert!(err.is_arity_mismatch());
        assert_eq!(
            err.to_string(),
            "arity mismatch: expected 1 argument(s), found 2"
        );
    }

    #[test]
    fn unresolved_marker_argument_wraps_cause() {
        let err = Error::unbound_expression("row")
            .context(Error::unresolved_marker_argument("mapping argument of include"));

        assert!(err.is_unresolved_marker_argument());
        assert!(err.cause().unwrap().is_unbound_expression());
        assert_eq!(
            err.to_string(),
            "unresolved marker argument: mapping argument of include: \
             expression depends on unbound parameter `row`"
        );
    }

    #[test]
    fn type_mismatch_display() {
        let err = Error::type_mismatch(Type::String, Type::I64);
        assert!(err.is_type_mismatch());
        assert_eq!(err.to_string(), "type mismatch: expected String, found I64");
    }

    #[test]
    fn invalid_schema_display() {
        let err = Error::invalid_schema("duplicate model `User`");
        assert!(err.is_invalid_schema());
        assert_eq!(err.to_string(), "invalid schema: duplicate model `User`");
    }

    #[test]
    fn expression_evaluation_failed_display() {
        let err = Error::expression_evaluation_failed("null dereference");
        assert!(err.is_expression_evaluation_failed());
        assert!(!err.is_type_mismatch());
        assert_eq!(
            err.to_string(),
            "expression evaluation failed: null dereference"
        );
    }
}
