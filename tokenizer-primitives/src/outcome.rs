//! Single-state container holding either a value or an [`ErrorKind`].

use std::fmt;

use crate::error::ErrorKind;

/// Outcome of a fallible tokenizer operation.
///
/// An outcome is born in exactly one state and never changes it: it either
/// holds a value, in which case [`Outcome::error_code`] reports
/// [`ErrorKind::Ok`], or it holds an error code that is never
/// [`ErrorKind::Ok`]. The type is move-only and has no valueless default.
///
/// # Examples
///
/// ```
/// use tokenizer_primitives::{ErrorKind, Outcome};
///
/// let decoded = Outcome::from_value("hello".to_owned());
/// assert!(decoded.is_ok());
/// assert_eq!(decoded.value(), "hello");
///
/// let failed: Outcome<String> = Outcome::from_error(ErrorKind::DecodeFailure);
/// assert_eq!(failed.error_code(), ErrorKind::DecodeFailure);
/// ```
#[must_use = "an outcome may hold an error that should be inspected"]
pub struct Outcome<T> {
    state: State<T>,
}

enum State<T> {
    Value(T),
    Failed(ErrorKind),
}

impl<T> Outcome<T> {
    /// Creates a successful outcome holding `value`.
    pub const fn from_value(value: T) -> Self {
        Self {
            state: State::Value(value),
        }
    }

    /// Creates a failed outcome.
    ///
    /// [`ErrorKind::Ok`] is not a failure code; it is stored as
    /// [`ErrorKind::Internal`] so that `is_ok()` and `error_code()` always
    /// agree.
    pub const fn from_error(error: ErrorKind) -> Self {
        let error = match error {
            ErrorKind::Ok => ErrorKind::Internal,
            other => other,
        };
        Self {
            state: State::Failed(error),
        }
    }

    /// Returns `true` if the outcome holds a value.
    #[must_use]
    pub const fn is_ok(&self) -> bool {
        matches!(self.state, State::Value(_))
    }

    /// Returns the error code, [`ErrorKind::Ok`] if and only if the outcome
    /// holds a value.
    #[must_use]
    pub const fn error_code(&self) -> ErrorKind {
        match self.state {
            State::Value(_) => ErrorKind::Ok,
            State::Failed(error) => error,
        }
    }

    /// Returns a reference to the held value.
    ///
    /// # Panics
    ///
    /// Panics if the outcome is a failure.
    #[must_use]
    #[track_caller]
    pub fn value(&self) -> &T {
        match &self.state {
            State::Value(value) => value,
            State::Failed(error) => not_ok(*error),
        }
    }

    /// Returns a mutable reference to the held value.
    ///
    /// # Panics
    ///
    /// Panics if the outcome is a failure.
    #[must_use]
    #[track_caller]
    pub fn value_mut(&mut self) -> &mut T {
        match &mut self.state {
            State::Value(value) => value,
            State::Failed(error) => not_ok(*error),
        }
    }

    /// Consumes the outcome and returns the held value.
    ///
    /// # Panics
    ///
    /// Panics if the outcome is a failure.
    #[track_caller]
    pub fn into_value(self) -> T {
        match self.state {
            State::Value(value) => value,
            State::Failed(error) => not_ok(error),
        }
    }

    /// Converts into a standard [`Result`].
    ///
    /// # Errors
    ///
    /// Returns the stored error code when the outcome is a failure.
    pub fn into_result(self) -> Result<T, ErrorKind> {
        match self.state {
            State::Value(value) => Ok(value),
            State::Failed(error) => Err(error),
        }
    }

    /// Returns the value if present, discarding the error code.
    #[must_use]
    pub fn ok(self) -> Option<T> {
        self.into_result().ok()
    }

    /// Borrows the held value without consuming the outcome.
    pub const fn as_ref(&self) -> Outcome<&T> {
        match &self.state {
            State::Value(value) => Outcome::from_value(value),
            State::Failed(error) => Outcome {
                state: State::Failed(*error),
            },
        }
    }

    /// Maps the held value, passing failures through unchanged.
    pub fn map<U, F>(self, op: F) -> Outcome<U>
    where
        F: FnOnce(T) -> U,
    {
        match self.state {
            State::Value(value) => Outcome::from_value(op(value)),
            State::Failed(error) => Outcome {
                state: State::Failed(error),
            },
        }
    }

    /// Chains another fallible step onto a successful outcome.
    pub fn and_then<U, F>(self, op: F) -> Outcome<U>
    where
        F: FnOnce(T) -> Outcome<U>,
    {
        match self.state {
            State::Value(value) => op(value),
            State::Failed(error) => Outcome {
                state: State::Failed(error),
            },
        }
    }
}

#[cold]
#[track_caller]
fn not_ok(error: ErrorKind) -> ! {
    panic!("outcome must be ok to access its value (error: {error}, code {:#04x})", error.code())
}

impl<T, E> From<Result<T, E>> for Outcome<T>
where
    E: Into<ErrorKind>,
{
    fn from(result: Result<T, E>) -> Self {
        match result {
            Ok(value) => Self::from_value(value),
            Err(error) => Self::from_error(error.into()),
        }
    }
}

impl<T> From<Outcome<T>> for Result<T, ErrorKind> {
    fn from(outcome: Outcome<T>) -> Self {
        outcome.into_result()
    }
}

impl<T: fmt::Debug> fmt::Debug for Outcome<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.state {
            State::Value(value) => f.debug_tuple("Outcome::Value").field(value).finish(),
            State::Failed(error) => f.debug_tuple("Outcome::Failed").field(error).finish(),
        }
    }
}

impl<T: PartialEq> PartialEq for Outcome<T> {
    fn eq(&self, other: &Self) -> bool {
        match (&self.state, &other.state) {
            (State::Value(lhs), State::Value(rhs)) => lhs == rhs,
            (State::Failed(lhs), State::Failed(rhs)) => lhs == rhs,
            _ => false,
        }
    }
}
