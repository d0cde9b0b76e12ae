/// Errors that this crate throws.
#[derive(Debug)]
pub enum Error {
    /// Error related to rusb
    RusbError(rusb::Error),
    /// Error coming from the serialport crate
    SerialError(serialport::Error),
    /// I/O error from the network or file transports
    IoError(std::io::Error),
    /// Error regarding image treatment
    ImageError(image::ImageError),
    /// The qr code payload could not be encoded
    QrError(qrcode::types::QrError),
    /// This means no bulk write endpoint could be found
    NoBulkEndpoint,
    /// No usb device matched the requested vendor and product id
    PrinterNotFound,
    /// The image exceeds the addressable dots of the selected resolution
    ImageTooWide {
        /// Width of the offending image, in pixels
        width: u32,
        /// Maximum width for the selected resolution, in pixels
        max_width: u32
    },
    /// A zero-width or zero-height image cannot be rasterized
    EmptyImage,
    /// Scaling factor outside of (0.0, 1.0]
    InvalidScale(f64),
    /// Barcode module width or bar height out of range
    BarcodeSize {
        /// Module width, valid range 1 to 255
        width: u8,
        /// Bar height, valid range 2 to 6
        height: u8
    },
    /// An empty barcode payload was given
    EmptyBarcode,
    /// The string does not name any of the supported barcode symbologies
    UnknownBarcodeSystem(String),
    /// An empty string was passed for text printing
    EmptyText,
    /// Only pins 2 and 5 can kick the cash drawer
    InvalidCashDrawerPin(u8),
    /// A newline appeared where the column-aligned write does not allow one
    StrayNewline,
    /// The selected font has no column width in the printer profile
    UnsupportedFont,
    /// The transport was already closed
    TransportClosed
}

impl std::fmt::Display for Error {
    fn fmt(&self, formatter: &mut std::fmt::Formatter) -> Result<(), std::fmt::Error> {
        let content = match self {
            Error::RusbError(e) => format!("rusb error: {}", e),
            Error::SerialError(e) => format!("serial port error: {}", e),
            Error::IoError(e) => format!("i/o error: {}", e),
            Error::ImageError(e) => format!("image error: {}", e),
            Error::QrError(e) => format!("qr encoding error: {:?}", e),
            Error::NoBulkEndpoint => "no bulk write endpoint could be found".to_string(),
            Error::PrinterNotFound => "no usb device with the given vendor and product id".to_string(),
            Error::ImageTooWide{width, max_width} => format!("image too wide, maximum width is {} pixels but the image is {} pixels wide", max_width, width),
            Error::EmptyImage => "the image has no printable pixels".to_string(),
            Error::InvalidScale(scale) => format!("scaling factor must be greater than 0.0 and at most 1.0, got {}", scale),
            Error::BarcodeSize{width, height} => format!("barcode dimensions out of range, width {} (1-255) height {} (2-6)", width, height),
            Error::EmptyBarcode => "barcode payload must not be empty".to_string(),
            Error::UnknownBarcodeSystem(system) => format!("unknown barcode symbology \"{}\"", system),
            Error::EmptyText => "text content must not be empty".to_string(),
            Error::InvalidCashDrawerPin(pin) => format!("cash drawer pin must be 2 or 5, got {}", pin),
            Error::StrayNewline => "newlines are only allowed at the very end of the right column string".to_string(),
            Error::UnsupportedFont => "the selected font has no column width in the printer profile".to_string(),
            Error::TransportClosed => "the transport was already closed".to_string()
        };
        write!(formatter, "{}", content)
    }
}

impl std::error::Error for Error{}

impl From<rusb::Error> for Error {
    fn from(e: rusb::Error) -> Error {
        Error::RusbError(e)
    }
}

impl From<serialport::Error> for Error {
    fn from(e: serialport::Error) -> Error {
        Error::SerialError(e)
    }
}

impl From<std::io::Error> for Error {
    fn from(e: std::io::Error) -> Error {
        Error::IoError(e)
    }
}

impl From<image::ImageError> for Error {
    fn from(e: image::ImageError) -> Error {
        Error::ImageError(e)
    }
}

impl From<qrcode::types::QrError> for Error {
    fn from(e: qrcode::types::QrError) -> Error {
        Error::QrError(e)
    }
}
