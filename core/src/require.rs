use std::borrow::Cow;

use thiserror::Error;

/// An expected value was absent.
#[derive(Clone, Eq, PartialEq, Hash, Debug, Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[error("{what} is absent")]
pub struct AbsentError {
  what: Cow<'static, str>,
}

impl AbsentError {
  #[inline]
  pub fn new(what: impl Into<Cow<'static, str>>) -> Self {
    Self { what: what.into() }
  }

  /// Description of the value that was absent.
  #[inline]
  pub fn what(&self) -> &str { &self.what }
}

/// Turns an absent [`Option`] into an [`AbsentError`] for callers that need error semantics.
pub trait RequireExt<T> {
  fn require(self, what: impl Into<Cow<'static, str>>) -> Result<T, AbsentError>;

  /// Like [`require`](Self::require), but only creates the description when the value is absent.
  fn require_with(self, what: impl FnOnce() -> String) -> Result<T, AbsentError>;
}

impl<T> RequireExt<T> for Option<T> {
  #[inline]
  fn require(self, what: impl Into<Cow<'static, str>>) -> Result<T, AbsentError> {
    self.ok_or_else(|| AbsentError::new(what))
  }

  #[inline]
  fn require_with(self, what: impl FnOnce() -> String) -> Result<T, AbsentError> {
    self.ok_or_else(|| AbsentError::new(what()))
  }
}

#[cfg(feature = "http_status_code")]
pub mod http_status_code {
  use crate::util::http_status_code::{AsStatusCode, StatusCode};

  use super::AbsentError;

  impl AsStatusCode for AbsentError {
    #[inline]
    fn as_status_code(&self) -> StatusCode { StatusCode::NOT_FOUND }
  }
}
