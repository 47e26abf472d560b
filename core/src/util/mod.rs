#[cfg(feature = "future")]
pub mod future;
#[cfg(feature = "http_status_code")]
pub mod http_status_code;
