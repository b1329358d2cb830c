// rcs380/rcs380/src/constants.rs
//! Wire format and USB identity constants for the RC-S380

/// Header of every command/response frame: 0x00 0x00 0xFF 0xFF 0xFF
pub const FRAME_HEADER: [u8; 5] = [0x00, 0x00, 0xFF, 0xFF, 0xFF];

/// Trailing byte of every frame
pub const FRAME_POSTAMBLE: u8 = 0x00;

/// header(5) + len(2) + lcs(1) + dcs(1) + postamble(1)
pub const FRAME_OVERHEAD: usize = 10;

/// Offset of the little-endian body length inside a frame
pub const LENGTH_OFFSET: usize = 5;

/// Offset of the body inside a frame
pub const BODY_OFFSET: usize = 8;

/// Command-class prefix of host -> chip bodies
pub const CMD_PREFIX_HOST: u8 = 0xD6;
/// Prefix of chip -> host bodies
pub const CMD_PREFIX_DEVICE: u8 = 0xD7;

/// Wake-up frame sent once at session start. The chip's ACK frame has the
/// same bytes.
pub const POWER_UP_FRAME: [u8; 6] = [0x00, 0x00, 0xFF, 0x00, 0xFF, 0x00];
/// Acknowledgement the chip sends after each command frame
pub const ACK_FRAME: [u8; 6] = POWER_UP_FRAME;

/// Sony
pub const USB_VENDOR_ID: u16 = 0x054c;
/// RC-S380/S
pub const USB_PRODUCT_ID: u16 = 0x06c1;

/// Configuration value selected at open
pub const USB_CONFIGURATION: u8 = 1;
/// Interface carrying the bulk endpoints
pub const USB_INTERFACE: u8 = 0;
/// Alternate setting of `USB_INTERFACE`
pub const USB_ALT_SETTING: u8 = 0;

/// Fallback read buffer size when the endpoint does not report one
pub const DEFAULT_MAX_PACKET_SIZE: usize = 512;
