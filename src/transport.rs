pub use self::file::FileTransport;
pub use self::network::NetworkTransport;
pub use self::serial::SerialTransport;
pub use self::usb::UsbTransport;

mod file;
mod network;
mod serial;
mod usb;

use crate::Error;

/// Byte sink connected to a physical printer
///
/// A transport is opened by its concrete constructor, owns the underlying
/// os resource exclusively, and hands it back on [close](Transport::close).
/// Writes are blocking and carry no framing; the [Printer](crate::Printer)
/// funnels every command sequence through [write](Transport::write) in one
/// call.
///
/// All implementations in this crate also close themselves on drop, so a
/// panic or early return does not leak the usb interface, serial descriptor
/// or socket.
pub trait Transport {
    /// Sends raw bytes to the device, blocking until the write completes.
    fn write(&mut self, bytes: &[u8]) -> Result<(), Error>;

    /// Releases the underlying resource. Calling it twice is fine; writes
    /// after closing fail with [Error::TransportClosed](crate::Error::TransportClosed).
    fn close(&mut self) -> Result<(), Error>;
}
