use std::fmt::Debug;

use crate::option::OptionExt;

/// Side-effect combinators that report the state of an [`Option`] as `tracing` events, returning it unchanged.
///
/// `what` names the value in the emitted event.
pub trait OptionTraceExt<T>: Sized {
  fn debug_none(self, what: &str) -> Option<T>;
  fn warn_none(self, what: &str) -> Option<T>;
  fn debug_some(self, what: &str) -> Option<T> where
    T: Debug;
}

impl<T> OptionTraceExt<T> for Option<T> {
  #[inline]
  fn debug_none(self, what: &str) -> Option<T> {
    self.on_none(|| tracing::debug!(what, "value is absent"))
  }

  #[inline]
  fn warn_none(self, what: &str) -> Option<T> {
    self.on_none(|| tracing::warn!(what, "value is absent"))
  }

  #[inline]
  fn debug_some(self, what: &str) -> Option<T> where
    T: Debug
  {
    self.on_some(|value| tracing::debug!(what, ?value, "value is present"))
  }
}
