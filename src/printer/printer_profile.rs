use crate::command::Font;
use std::collections::HashMap;

/// Static facts about the connected printer
///
/// The encoder needs to know how wide the paper is, both in pixels (for
/// image printing) and in characters per font (for column-aligned text).
/// The defaults fit a common 58mm printer: 384 addressable dots, 32
/// columns in font A and 42 in font B.
#[derive(Clone, Debug)]
pub struct PrinterProfile {
    /// Characters per line, per font
    pub(crate) columns_per_font: HashMap<Font, u8>,
    /// Base printable width in pixels, at low resolution
    pub(crate) width: u16
}

impl PrinterProfile {
    /// Creates a [PrinterProfileBuilder](crate::PrinterProfileBuilder) loaded
    /// with the 58mm defaults.
    /// ```rust
    /// use escpos_driver::PrinterProfile;
    /// let printer_profile = PrinterProfile::builder().build();
    /// ```
    pub fn builder() -> PrinterProfileBuilder {
        PrinterProfileBuilder::new()
    }
}

impl Default for PrinterProfile {
    fn default() -> PrinterProfile {
        PrinterProfile::builder().build()
    }
}

/// Helper structure to create a [PrinterProfile](crate::PrinterProfile)
pub struct PrinterProfileBuilder {
    columns_per_font: HashMap<Font, u8>,
    width: u16
}

impl PrinterProfileBuilder {
    pub fn new() -> PrinterProfileBuilder {
        PrinterProfileBuilder {
            columns_per_font: vec![(Font::FontA, 32), (Font::FontB, 42)].into_iter().collect(),
            width: 384
        }
    }

    /// Sets the printable width in pixels
    ///
    /// 384 covers most 58mm printers, 576 the 80mm ones.
    /// ```rust
    /// use escpos_driver::PrinterProfile;
    /// let printer_profile = PrinterProfile::builder()
    ///     .with_pixel_width(576)
    ///     .build();
    /// ```
    pub fn with_pixel_width(mut self, width: u16) -> PrinterProfileBuilder {
        self.width = width;
        self
    }

    /// Sets the character columns available to a font
    ///
    /// ```rust
    /// use escpos_driver::{PrinterProfile, command::Font};
    /// let printer_profile = PrinterProfile::builder()
    ///     .with_font_width(Font::FontA, 48)
    ///     .build();
    /// ```
    pub fn with_font_width(mut self, font: Font, columns: u8) -> PrinterProfileBuilder {
        self.columns_per_font.insert(font, columns);
        self
    }

    pub fn build(self) -> PrinterProfile {
        PrinterProfile {
            columns_per_font: self.columns_per_font,
            width: self.width
        }
    }
}

impl Default for PrinterProfileBuilder {
    fn default() -> PrinterProfileBuilder {
        PrinterProfileBuilder::new()
    }
}
