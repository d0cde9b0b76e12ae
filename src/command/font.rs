use serde::{Serialize, Deserialize};

/// Fonts available on the printers this crate targets
///
/// Font A is the wide 12x24 glyph set, font B the narrow 9x17 one. How many
/// characters of each fit on a line is part of the [PrinterProfile](crate::PrinterProfile).
#[derive(Serialize, Deserialize, Clone, Copy, Debug, Hash, PartialEq)]
pub enum Font {
    FontA,
    FontB
}

impl Eq for Font{}

impl Font {
    /// Byte representation of each font.
    pub fn as_byte(&self) -> u8 {
        match self {
            Font::FontA => 0x00,
            Font::FontB => 0x01
        }
    }
}
