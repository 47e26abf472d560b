pub use http::StatusCode;

/// Types that correspond to an HTTP response status.
pub trait AsStatusCode {
  fn as_status_code(&self) -> StatusCode;
}

impl AsStatusCode for StatusCode {
  #[inline]
  fn as_status_code(&self) -> StatusCode { *self }
}

/// `200 OK` for success, the error's own status otherwise. Lets `option.require(..)` results be turned into a
/// response status directly.
impl<T, E: AsStatusCode> AsStatusCode for Result<T, E> {
  #[inline]
  fn as_status_code(&self) -> StatusCode {
    match self {
      Ok(_) => StatusCode::OK,
      Err(e) => e.as_status_code(),
    }
  }
}
