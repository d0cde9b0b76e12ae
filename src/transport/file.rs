use crate::{Error, Transport};
use log::warn;
use std::fs::{File, OpenOptions};
use std::io::Write;
use std::path::Path;

/// Device file transport
///
/// Writes straight to a character device such as `/dev/usb/lp0`, or to a
/// regular file for capturing the byte stream.
/// ```rust,no_run
/// use escpos_driver::FileTransport;
///
/// let transport = FileTransport::open("/dev/usb/lp0")?;
/// # Ok::<(), escpos_driver::Error>(())
/// ```
pub struct FileTransport {
    file: Option<File>
}

impl FileTransport {
    pub fn open<P: AsRef<Path>>(path: P) -> Result<FileTransport, Error> {
        let file = OpenOptions::new()
            .write(true)
            .create(true)
            .truncate(true)
            .open(path)?;
        Ok(FileTransport{file: Some(file)})
    }
}

impl Transport for FileTransport {
    fn write(&mut self, bytes: &[u8]) -> Result<(), Error> {
        let file = self.file.as_mut().ok_or(Error::TransportClosed)?;
        file.write_all(bytes)?;
        Ok(())
    }

    fn close(&mut self) -> Result<(), Error> {
        if let Some(mut file) = self.file.take() {
            file.flush()?;
        }
        Ok(())
    }
}

impl Drop for FileTransport {
    fn drop(&mut self) {
        if let Err(e) = self.close() {
            warn!("Failed to flush the printer file: {}", e);
        }
    }
}
