// rcs380/rcs380/src/device/mod.rs
//! Opened readers and the per-card-type configuration session.

pub mod handle;
pub mod session;

pub use handle::Device;
pub use session::Session;
