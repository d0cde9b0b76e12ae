use crate::{Error, Transport};
use log::warn;
use rusb::{Context, DeviceHandle, Direction, TransferType, UsbContext};
use std::time::Duration;

/// Live claim on the printer's usb interface
struct UsbConnection {
    /// Bulk write endpoint
    endpoint: u8,
    /// Device handle, keeps the libusb context alive
    dh: DeviceHandle<Context>,
    /// Time to wait before giving up writing to the bulk endpoint
    timeout: Duration
}

/// Usb printer transport
///
/// Scans the usb bus for the given vendor and product id, detaches the
/// kernel driver if one is attached, claims interface 0 and locates the
/// bulk write endpoint.
/// ```rust,no_run
/// use escpos_driver::UsbTransport;
///
/// let transport = UsbTransport::open(0x0416, 0x5011)?;
/// # Ok::<(), escpos_driver::Error>(())
/// ```
pub struct UsbTransport {
    connection: Option<UsbConnection>
}

impl UsbTransport {
    /// Opens the first device matching the vendor and product id, with the
    /// default two second bulk write timeout.
    pub fn open(vendor_id: u16, product_id: u16) -> Result<UsbTransport, Error> {
        UsbTransport::open_with_timeout(vendor_id, product_id, Duration::from_secs(2))
    }

    /// Same as [open](UsbTransport::open) with an explicit bulk write timeout.
    pub fn open_with_timeout(vendor_id: u16, product_id: u16, timeout: Duration) -> Result<UsbTransport, Error> {
        let context = Context::new()?;
        let devices = context.devices()?;
        for device in devices.iter() {
            let descriptor = device.device_descriptor()?;
            if descriptor.vendor_id() != vendor_id || descriptor.product_id() != product_id {
                continue;
            }
            // Before opening the device, we must find the bulk endpoint
            let config_descriptor = device.active_config_descriptor()?;
            let mut detected_endpoint: Option<u8> = None;
            for interface in config_descriptor.interfaces() {
                for descriptor in interface.descriptors() {
                    for endpoint in descriptor.endpoint_descriptors() {
                        if let (TransferType::Bulk, Direction::Out) = (endpoint.transfer_type(), endpoint.direction()) {
                            detected_endpoint = Some(endpoint.address());
                        }
                    }
                }
            }
            let endpoint = match detected_endpoint {
                Some(endpoint) => endpoint,
                None => return Err(Error::NoBulkEndpoint)
            };

            let mut dh = device.open()?;
            if let Ok(active) = dh.kernel_driver_active(0) {
                if active {
                    // The kernel is active, we have to detach it
                    dh.detach_kernel_driver(0)?;
                }
            } else {
                warn!("Could not find out if kernel driver is active, might encounter a problem soon.");
            }
            dh.claim_interface(0)?;
            return Ok(UsbTransport{
                connection: Some(UsbConnection{endpoint, dh, timeout})
            });
        }
        // No device carried the requested vid and pid
        Err(Error::PrinterNotFound)
    }
}

impl Transport for UsbTransport {
    fn write(&mut self, bytes: &[u8]) -> Result<(), Error> {
        let connection = self.connection.as_mut().ok_or(Error::TransportClosed)?;
        let mut remaining = bytes;
        // write_bulk may send fewer bytes than supplied
        while !remaining.is_empty() {
            let written = connection.dh.write_bulk(connection.endpoint, remaining, connection.timeout)?;
            remaining = &remaining[written..];
        }
        Ok(())
    }

    fn close(&mut self) -> Result<(), Error> {
        if let Some(mut connection) = self.connection.take() {
            connection.dh.release_interface(0)?;
            // A failure to re-attach the kernel driver leaves the device
            // usable, so it is only logged.
            if let Err(e) = connection.dh.attach_kernel_driver(0) {
                warn!("Could not re-attach the kernel driver: {}", e);
            }
        }
        Ok(())
    }
}

impl Drop for UsbTransport {
    fn drop(&mut self) {
        if let Err(e) = self.close() {
            warn!("Failed to release the usb interface: {}", e);
        }
    }
}
