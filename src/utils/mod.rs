//! Utility functions.

mod shutdown;

pub use shutdown::shutdown_signal;
