//! Command handlers for both binaries.

pub mod peers;
pub mod register;

use std::future::Future;

use crate::{Error, Result};

/// Drives `future` to completion on a single-threaded runtime.
pub(crate) fn block_on<F: Future>(future: F) -> Result<F::Output> {
    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .map_err(Error::Runtime)?;
    Ok(runtime.block_on(future))
}
