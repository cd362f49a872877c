//! Uniform outcome of a typed call against the passport service.

use std::fmt;

/// Success/failure outcome returned in place of an error.
///
/// ## Invariants
/// - Exactly one arm is populated.
/// - `Failure` always carries a human-readable diagnostic.
///
/// # Examples
/// ```
/// use passport_client::domain::ApiResult;
///
/// let ok: ApiResult<u32> = ApiResult::Success(7);
/// assert_eq!(ok.value(), Some(&7));
///
/// let failed: ApiResult<u32> = ApiResult::failure("request failed with status 404: missing");
/// assert!(failed.message().is_some_and(|m| m.contains("404")));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
#[must_use]
pub enum ApiResult<T> {
    /// The call completed and the body decoded into `T`.
    Success(T),
    /// The call failed; the message explains why.
    Failure(String),
}

impl<T> ApiResult<T> {
    /// Build a failure, substituting a placeholder for a blank message.
    pub fn failure(message: impl Into<String>) -> Self {
        let text = message.into();
        if text.trim().is_empty() {
            Self::Failure("unknown failure".to_owned())
        } else {
            Self::Failure(text)
        }
    }

    /// Whether the call succeeded.
    #[must_use]
    pub const fn is_success(&self) -> bool {
        matches!(self, Self::Success(_))
    }

    /// Whether the call failed.
    #[must_use]
    pub const fn is_failure(&self) -> bool {
        !self.is_success()
    }

    /// Borrow the decoded value, if any.
    #[must_use]
    pub const fn value(&self) -> Option<&T> {
        match self {
            Self::Success(value) => Some(value),
            Self::Failure(_) => None,
        }
    }

    /// Borrow the failure diagnostic, if any.
    #[must_use]
    pub fn message(&self) -> Option<&str> {
        match self {
            Self::Success(_) => None,
            Self::Failure(message) => Some(message.as_str()),
        }
    }

    /// Take the decoded value, discarding any diagnostic.
    #[must_use]
    pub fn into_value(self) -> Option<T> {
        match self {
            Self::Success(value) => Some(value),
            Self::Failure(_) => None,
        }
    }

    /// Transform the success value.
    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> ApiResult<U> {
        match self {
            Self::Success(value) => ApiResult::Success(f(value)),
            Self::Failure(message) => ApiResult::Failure(message),
        }
    }

    /// Convert into a standard `Result` for `?`-style composition.
    ///
    /// # Errors
    ///
    /// Returns the failure diagnostic when the call failed.
    pub fn into_result(self) -> Result<T, String> {
        match self {
            Self::Success(value) => Ok(value),
            Self::Failure(message) => Err(message),
        }
    }
}

impl<T, E: fmt::Display> From<Result<T, E>> for ApiResult<T> {
    fn from(result: Result<T, E>) -> Self {
        match result {
            Ok(value) => Self::Success(value),
            Err(error) => Self::failure(error.to_string()),
        }
    }
}
