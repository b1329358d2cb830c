// rcs380/rcs380/src/transport/usb/mod.rs
//! USB bulk transport (feature `usb`).

#![cfg(feature = "usb")]

use std::time::Duration;

use log::{debug, warn};
use rusb::{Context, DeviceHandle, UsbContext};

use crate::constants::{
    DEFAULT_MAX_PACKET_SIZE, USB_ALT_SETTING, USB_CONFIGURATION, USB_INTERFACE, USB_PRODUCT_ID,
    USB_VENDOR_ID,
};
use crate::transport::traits::Transport;
use crate::utils::{bytes_to_hex, default_read_timeout};
use crate::{Error, Result};

mod descriptor;
use descriptor::{BulkEndpoints, find_bulk_endpoints};

/// Bulk transport for the RC-S380. It is feature-gated behind
/// `--features usb` and requires the `rusb` crate.
pub struct UsbTransport {
    handle: DeviceHandle<Context>,
    endpoints: BulkEndpoints,
    timeout: Duration,
}

impl UsbTransport {
    /// Open the first RC-S380 found on the bus.
    pub fn open() -> Result<Self> {
        Self::open_with_ids(USB_VENDOR_ID, USB_PRODUCT_ID)
    }

    /// Open the first device matching `vendor_id`/`product_id`.
    pub fn open_with_ids(vendor_id: u16, product_id: u16) -> Result<Self> {
        let ctx = Context::new()?;
        for device in ctx.devices()?.iter() {
            let dd = device.device_descriptor()?;
            if dd.vendor_id() != vendor_id || dd.product_id() != product_id {
                continue;
            }

            debug!(
                "found reader {:04x}:{:04x} on bus {} address {}",
                vendor_id,
                product_id,
                device.bus_number(),
                device.address()
            );

            let endpoints =
                find_bulk_endpoints(&device, USB_CONFIGURATION, USB_INTERFACE, USB_ALT_SETTING)
                    .ok_or(Error::DeviceNotFound)?;

            let mut handle = device.open()?;

            // On Linux a kernel driver (port100) may own the interface.
            if let Ok(true) = handle.kernel_driver_active(USB_INTERFACE) {
                if let Err(e) = handle.detach_kernel_driver(USB_INTERFACE) {
                    warn!("failed to detach kernel driver: {}", e);
                }
            }

            if handle.active_configuration()? != USB_CONFIGURATION {
                handle.set_active_configuration(USB_CONFIGURATION)?;
            }
            handle.claim_interface(USB_INTERFACE)?;
            handle.set_alternate_setting(USB_INTERFACE, USB_ALT_SETTING)?;

            debug!(
                "bulk endpoints: IN={:#04x} OUT={:#04x} max packet {}",
                endpoints.in_ep, endpoints.out_ep, endpoints.max_packet_size
            );

            return Ok(UsbTransport {
                handle,
                endpoints,
                timeout: default_read_timeout(),
            });
        }

        Err(Error::DeviceNotFound)
    }

    /// Override the per-transfer timeout.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Bulk IN endpoint address
    pub fn in_endpoint(&self) -> u8 {
        self.endpoints.in_ep
    }

    /// Bulk OUT endpoint address
    pub fn out_endpoint(&self) -> u8 {
        self.endpoints.out_ep
    }
}

impl Transport for UsbTransport {
    fn write(&mut self, data: &[u8]) -> Result<usize> {
        let n = self
            .handle
            .write_bulk(self.endpoints.out_ep, data, self.timeout)?;
        log::trace!("bulk out {}", bytes_to_hex(&data[..n]));
        Ok(n)
    }

    fn read(&mut self, buf: &mut [u8]) -> Result<usize> {
        let n = self
            .handle
            .read_bulk(self.endpoints.in_ep, buf, self.timeout)?;
        log::trace!("bulk in {}", bytes_to_hex(&buf[..n]));
        Ok(n)
    }

    fn max_packet_size(&self) -> usize {
        match self.endpoints.max_packet_size {
            0 => DEFAULT_MAX_PACKET_SIZE,
            n => n,
        }
    }
}

impl Drop for UsbTransport {
    fn drop(&mut self) {
        if let Err(e) = self.handle.release_interface(USB_INTERFACE) {
            debug!("release_interface failed: {}", e);
        }
    }
}
