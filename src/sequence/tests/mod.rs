mod access;
mod equality;
mod logging;
mod render;

use crate::error::Error;

/// Recovers the typed out-of-range error from an `anyhow` error.
fn out_of_range(error: &anyhow::Error) -> &Error {
    error.downcast_ref::<Error>().expect("expected an out-of-range error")
}
