//! Run the full configuration sequence against an attached RC-S380 and print
//! the raw sense response.
//!
//! Usage:
//!   cargo run -p rcs380 --example read --features usb -- [A|B|F]
//!
//! Set `RUST_LOG=rcs380=trace` to see every frame on the wire.

use anyhow::Context;
use rcs380::prelude::*;

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let card_type: CardType = match std::env::args().nth(1) {
        Some(arg) => arg.parse()?,
        None => CardType::TypeF,
    };

    let mut device = Device::open().context("opening RC-S380")?;

    let resp = {
        let mut session = device.session(card_type);
        match session.run().map(|r| r.clone()) {
            Ok(resp) => resp,
            Err(e) => {
                return Err(e).with_context(|| {
                    format!("{} session failed in state {}", card_type, session.state())
                });
            }
        }
    };

    let len = resp.length().context("response too short")?;
    println!("{}, {}", len, resp.to_hex());

    device.close();
    Ok(())
}
