use crate::{Error, Transport};
use log::warn;
use std::io::Write;
use std::net::{Shutdown, TcpStream};

/// Network printer transport
///
/// Plain tcp connection to the raw printing port, usually 9100.
/// ```rust,no_run
/// use escpos_driver::NetworkTransport;
///
/// let transport = NetworkTransport::open("192.168.1.87", 9100)?;
/// # Ok::<(), escpos_driver::Error>(())
/// ```
pub struct NetworkTransport {
    stream: Option<TcpStream>
}

impl NetworkTransport {
    pub fn open(host: &str, port: u16) -> Result<NetworkTransport, Error> {
        let stream = TcpStream::connect((host, port))?;
        Ok(NetworkTransport{stream: Some(stream)})
    }
}

impl Transport for NetworkTransport {
    fn write(&mut self, bytes: &[u8]) -> Result<(), Error> {
        let stream = self.stream.as_mut().ok_or(Error::TransportClosed)?;
        stream.write_all(bytes)?;
        Ok(())
    }

    fn close(&mut self) -> Result<(), Error> {
        if let Some(stream) = self.stream.take() {
            stream.shutdown(Shutdown::Both)?;
        }
        Ok(())
    }
}

impl Drop for NetworkTransport {
    fn drop(&mut self) {
        if let Err(e) = self.close() {
            warn!("Failed to shut the printer socket down: {}", e);
        }
    }
}
