//! Library for driving esc/pos thermal receipt printers with rust
//!
//! The [Printer](crate::Printer) structure translates semantic operations
//! (text, formatting, barcodes, qr codes, images, paper cuts) into esc/pos
//! byte sequences and pushes them through a [Transport](crate::Transport).
//! Four transports ship with the crate: usb, serial, network socket, and
//! raw device file. All of them boil down to the same capability, a single
//! blocking raw write.
//!
//! ```rust,no_run
//! use escpos_driver::{Printer, PrinterProfile, UsbTransport, CutMode};
//!
//! let transport = UsbTransport::open(0x0416, 0x5011)?;
//! let mut printer = Printer::new(transport, PrinterProfile::default())?;
//! printer.text("Hello, world!\n")?;
//! printer.cut(CutMode::Full)?;
//! printer.close()?;
//! # Ok::<(), escpos_driver::Error>(())
//! ```
//!
//! ## Printer details
//!
//! The [PrinterProfile](crate::PrinterProfile) structure carries what the
//! driver must know about the paper: the printable width in pixels (for
//! images) and the characters per line of each font (for column-aligned
//! text through [write](crate::Printer::write)). The defaults match a
//! common 58mm printer; adjust them with the builder for anything else.
//!
//! ## Images and qr codes
//!
//! Bitmaps are converted to the printer's raster format in bands of 8 or 24
//! vertical dots, depending on the selected [Resolution](crate::command::Resolution).
//! An optional scaling factor resizes images against the full paper width,
//! so `1.0` always spans the printable area regardless of resolution.
//!
//! ```rust,no_run
//! use escpos_driver::{Printer, PrinterProfile, FileTransport, command::{Resolution, Justification}};
//!
//! let transport = FileTransport::open("/dev/usb/lp0")?;
//! let mut printer = Printer::new(transport, PrinterProfile::default())?;
//! printer.image("logo.png", Resolution::High, Justification::Center, Some(0.5))?;
//! printer.qr("https://example.com")?;
//! # Ok::<(), escpos_driver::Error>(())
//! ```
//!
//! Validation always happens before transmission: an image wider than the
//! paper, an out-of-range barcode dimension or a malformed column write
//! fails without a single byte reaching the printer, so the command stream
//! never carries a half-emitted sequence.

pub use error::Error;
pub use printer::{CutMode, Printer, PrinterProfile, PrinterProfileBuilder};
pub use transport::{FileTransport, NetworkTransport, SerialTransport, Transport, UsbTransport};

/// Contains raw esc/pos commands
pub mod command;
/// Bitmap to raster bit-image conversion
pub mod raster;

mod error;
mod printer;
mod transport;
