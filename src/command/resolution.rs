use serde::{Serialize, Deserialize};

/// Raster density for bit-image printing
///
/// Low resolution transfers 8 dots per column (roughly 60 dpi), high
/// resolution 24 dots per column (roughly 180 dpi). High resolution doubles
/// the addressable width of the printer.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Hash)]
pub enum Resolution {
    Low,
    High
}

impl Eq for Resolution{}

impl Resolution {
    /// Dots carried by one raster column, which is also the height of one
    /// row band.
    pub fn band_height(&self) -> u32 {
        match self {
            Resolution::Low => 8,
            Resolution::High => 24
        }
    }

    /// Data bytes per raster column.
    pub fn bytes_per_column(&self) -> u32 {
        match self {
            Resolution::Low => 1,
            Resolution::High => 3
        }
    }

    /// Mode argument of the ESC * bit-image command, 8-dot single density
    /// or 24-dot triple density.
    pub fn mode_byte(&self) -> u8 {
        match self {
            Resolution::Low => 0x00,
            Resolution::High => 0x21
        }
    }

    /// Maximum printable width in pixels, given the printer's base width.
    pub fn max_width(&self, base_width: u16) -> u32 {
        match self {
            Resolution::Low => base_width as u32,
            Resolution::High => 2 * base_width as u32
        }
    }
}
