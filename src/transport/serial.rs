use crate::{Error, Transport};
use log::warn;
use serialport::{DataBits, Parity, SerialPort, StopBits};
use std::io::Write;
use std::time::Duration;

/// Serial printer transport
///
/// Configures the port for 8 data bits, no parity and one stop bit, the
/// wiring virtually every serial esc/pos printer expects.
/// ```rust,no_run
/// use escpos_driver::SerialTransport;
///
/// let transport = SerialTransport::open("/dev/ttyS0", 9600)?;
/// # Ok::<(), escpos_driver::Error>(())
/// ```
pub struct SerialTransport {
    port: Option<Box<dyn SerialPort>>
}

impl SerialTransport {
    /// Opens the port with a one second read/write timeout.
    pub fn open(path: &str, baud_rate: u32) -> Result<SerialTransport, Error> {
        SerialTransport::open_with_timeout(path, baud_rate, Duration::from_secs(1))
    }

    /// Same as [open](SerialTransport::open) with an explicit timeout.
    pub fn open_with_timeout(path: &str, baud_rate: u32, timeout: Duration) -> Result<SerialTransport, Error> {
        let port = serialport::new(path, baud_rate)
            .data_bits(DataBits::Eight)
            .parity(Parity::None)
            .stop_bits(StopBits::One)
            .timeout(timeout)
            .open()?;
        Ok(SerialTransport{port: Some(port)})
    }
}

impl Transport for SerialTransport {
    fn write(&mut self, bytes: &[u8]) -> Result<(), Error> {
        let port = self.port.as_mut().ok_or(Error::TransportClosed)?;
        port.write_all(bytes)?;
        Ok(())
    }

    fn close(&mut self) -> Result<(), Error> {
        if let Some(mut port) = self.port.take() {
            port.flush()?;
        }
        Ok(())
    }
}

impl Drop for SerialTransport {
    fn drop(&mut self) {
        if let Err(e) = self.close() {
            warn!("Failed to close the serial port: {}", e);
        }
    }
}
