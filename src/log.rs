//! Crate-internal logging.
//!
//! With the `tracing` feature, `debug!` and `warn!` are tracing's own macros.
//! Without it they swallow their arguments, so call sites need no `cfg`.

#[cfg(feature = "tracing")]
pub(crate) use tracing::{debug, warn};

#[cfg(not(feature = "tracing"))]
macro_rules! debug {
    ($($arg:tt)*) => {};
}

#[cfg(not(feature = "tracing"))]
macro_rules! log_warn {
    ($($arg:tt)*) => {};
}

#[cfg(not(feature = "tracing"))]
pub(crate) use {debug, log_warn as warn};
