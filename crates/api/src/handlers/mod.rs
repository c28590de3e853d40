//! Request handlers.
//!
//! Core operations (file reads, parsing, the cache guard) are synchronous,
//! so handlers run them through [`run_blocking`] instead of on the async
//! executor.

pub mod admin;
pub mod pages;
pub mod presence;
pub mod users;

use presence_core::error::CoreError;

use crate::error::{AppError, AppResult};

/// Run a blocking core operation on the blocking thread pool.
pub(crate) async fn run_blocking<T, F>(f: F) -> AppResult<T>
where
    F: FnOnce() -> Result<T, CoreError> + Send + 'static,
    T: Send + 'static,
{
    tokio::task::spawn_blocking(f)
        .await
        .map_err(|e| AppError::InternalError(format!("Blocking task failed: {e}")))?
        .map_err(AppError::from)
}
