// rcs380/rcs380/src/prelude.rs
//! Common imports: `use rcs380::prelude::*;`

pub use crate::device::{Device, Session};
pub use crate::protocol::{Frame, Response};
pub use crate::transport::Transport;
pub use crate::{CardType, Error, Result, SessionState};

pub use crate::utils::{bytes_to_hex, default_read_timeout, ms};
