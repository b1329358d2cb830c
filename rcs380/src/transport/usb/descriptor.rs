// rcs380/rcs380/src/transport/usb/descriptor.rs

use rusb::{Device, Direction, TransferType, UsbContext};

/// Bulk endpoint pair of the reader interface.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BulkEndpoints {
    pub in_ep: u8,
    pub out_ep: u8,
    /// wMaxPacketSize of the IN endpoint
    pub max_packet_size: usize,
}

/// Inspect the device descriptors and return the bulk IN/OUT endpoints of
/// `interface`/`alt_setting` within configuration value `configuration`.
pub fn find_bulk_endpoints<T: UsbContext>(
    device: &Device<T>,
    configuration: u8,
    interface: u8,
    alt_setting: u8,
) -> Option<BulkEndpoints> {
    let num_configs = device.device_descriptor().ok()?.num_configurations();

    for index in 0..num_configs {
        let config = match device.config_descriptor(index) {
            Ok(c) => c,
            Err(_) => continue,
        };
        if config.number() != configuration {
            continue;
        }

        for iface in config.interfaces() {
            for desc in iface.descriptors() {
                if desc.interface_number() != interface || desc.setting_number() != alt_setting {
                    continue;
                }

                let mut in_ep = None;
                let mut out_ep = None;
                for ep in desc.endpoint_descriptors() {
                    if ep.transfer_type() != TransferType::Bulk {
                        continue;
                    }
                    match ep.direction() {
                        Direction::In if in_ep.is_none() => {
                            in_ep = Some((ep.address(), ep.max_packet_size() as usize))
                        }
                        Direction::Out if out_ep.is_none() => out_ep = Some(ep.address()),
                        _ => {}
                    }
                }

                if let (Some((in_ep, max_packet_size)), Some(out_ep)) = (in_ep, out_ep) {
                    return Some(BulkEndpoints {
                        in_ep,
                        out_ep,
                        max_packet_size,
                    });
                }
            }
        }
    }

    None
}
