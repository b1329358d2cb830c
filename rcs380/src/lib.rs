// rcs380/rcs380/src/lib.rs

//! rcs380
//!
//! Pure Rust driver for the Sony RC-S380 NFC reader: frame codec, command
//! catalog and the configuration sequence that brings the chip from
//! power-up to polling for a card.
#![warn(missing_docs)]

pub mod constants;
pub mod device;
pub mod error;
pub mod prelude;
pub mod protocol;
pub mod test_support;
pub mod transport;
pub mod types;
pub mod utils;

// Re-export common types at crate root so `crate::Error`, `crate::Result`,
// `CardType` and `SessionState` are available for consumers.
pub use crate::error::*;
pub use crate::types::*;

pub use prelude::*;
