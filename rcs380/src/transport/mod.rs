// rcs380/rcs380/src/transport/mod.rs
//! Byte transports: the USB bulk pipe and an in-memory mock.

pub mod mock;
pub mod traits;
#[cfg(feature = "usb")]
pub mod usb;

pub use mock::MockTransport;
pub use traits::Transport;
#[cfg(feature = "usb")]
pub use usb::UsbTransport;
