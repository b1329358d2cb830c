//! Small helpers shared across the crate: hex formatting for logs and
//! transfer timeout defaults.

pub mod hex;
pub mod timeout;

pub use hex::*;
pub use timeout::*;
