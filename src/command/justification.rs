use serde::{Serialize, Deserialize};

/// Horizontal alignment for text and images
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq)]
pub enum Justification {
    Left,
    Center,
    Right
}

impl Eq for Justification{}

impl Justification {
    /// Byte argument for the ESC a alignment command.
    pub fn as_byte(&self) -> u8 {
        match self {
            Justification::Left => 0x00,
            Justification::Center => 0x01,
            Justification::Right => 0x02
        }
    }
}
