use std::future::Future;

use futures::future::{Either, OptionFuture, ready};
use futures::FutureExt;

/// Combinators on optional futures.
pub trait OptFutureExt {
  type Output;

  /// Maps the output of the future when present; an absent future stays absent.
  fn opt_map<U>(self, f: impl FnOnce(Self::Output) -> U) -> Option<impl Future<Output=U>>;
  /// Converts the output of the future with [`Into`] when present.
  fn opt_map_into<U>(self) -> Option<impl Future<Output=U>> where
    Self::Output: Into<U>;

  /// Future that resolves to the output of the inner future when present, and immediately to `None` when absent.
  fn into_opt_future(self) -> impl Future<Output=Option<Self::Output>>;
}

impl<F: Future> OptFutureExt for Option<F> {
  type Output = F::Output;

  #[inline]
  fn opt_map<U>(self, f: impl FnOnce(Self::Output) -> U) -> Option<impl Future<Output=U>> {
    self.map(|fut| fut.map(f))
  }

  #[inline]
  fn opt_map_into<U>(self) -> Option<impl Future<Output=U>> where
    Self::Output: Into<U>
  {
    self.map(|fut| fut.map_into())
  }

  #[inline]
  fn into_opt_future(self) -> impl Future<Output=Option<Self::Output>> {
    OptionFuture::from(self)
  }
}

/// Asynchronous fallbacks for absent options.
///
/// The producer is called synchronously, at most once, and only when the option is absent; the future it returns
/// is driven by whoever awaits the result.
pub trait OptionAsyncExt<T> {
  fn map_nil_async<F: Future<Output=T>>(self, producer: impl FnOnce() -> F) -> impl Future<Output=Option<T>>;

  fn flat_map_nil_async<F: Future<Output=Option<T>>>(self, producer: impl FnOnce() -> F) -> impl Future<Output=Option<T>>;
}

impl<T> OptionAsyncExt<T> for Option<T> {
  #[inline]
  fn map_nil_async<F: Future<Output=T>>(self, producer: impl FnOnce() -> F) -> impl Future<Output=Option<T>> {
    match self {
      Some(value) => Either::Left(ready(Some(value))),
      None => Either::Right(producer().map(Some)),
    }
  }

  #[inline]
  fn flat_map_nil_async<F: Future<Output=Option<T>>>(self, producer: impl FnOnce() -> F) -> impl Future<Output=Option<T>> {
    match self {
      Some(value) => Either::Left(ready(Some(value))),
      None => Either::Right(producer()),
    }
  }
}
