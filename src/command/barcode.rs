use crate::Error;
use serde::{Serialize, Deserialize};
use std::str::FromStr;

/// Barcode symbologies understood by the GS k select command
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq)]
pub enum BarcodeSystem {
    UpcA,
    UpcE,
    Ean13,
    Ean8,
    Code39,
    Itf,
    Nw7
}

impl Eq for BarcodeSystem{}

impl BarcodeSystem {
    /// Byte argument for the GS k symbology select command.
    pub fn as_byte(&self) -> u8 {
        match self {
            BarcodeSystem::UpcA => 0x00,
            BarcodeSystem::UpcE => 0x01,
            BarcodeSystem::Ean13 => 0x02,
            BarcodeSystem::Ean8 => 0x03,
            BarcodeSystem::Code39 => 0x04,
            BarcodeSystem::Itf => 0x05,
            BarcodeSystem::Nw7 => 0x06
        }
    }
}

impl FromStr for BarcodeSystem {
    type Err = Error;

    fn from_str(source: &str) -> Result<BarcodeSystem, Error> {
        match source.to_uppercase().as_str() {
            "UPC-A" => Ok(BarcodeSystem::UpcA),
            "UPC-E" => Ok(BarcodeSystem::UpcE),
            "EAN13" => Ok(BarcodeSystem::Ean13),
            "EAN8" => Ok(BarcodeSystem::Ean8),
            "CODE39" => Ok(BarcodeSystem::Code39),
            "ITF" => Ok(BarcodeSystem::Itf),
            "NW7" => Ok(BarcodeSystem::Nw7),
            _other => Err(Error::UnknownBarcodeSystem(source.to_string()))
        }
    }
}

/// Placement of the human readable interpretation of a barcode
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq)]
pub enum BarcodeTextPosition {
    Off,
    Above,
    Below,
    Both
}

impl Eq for BarcodeTextPosition{}

impl BarcodeTextPosition {
    /// Byte argument for the GS H text position command.
    pub fn as_byte(&self) -> u8 {
        match self {
            BarcodeTextPosition::Off => 0x00,
            BarcodeTextPosition::Above => 0x01,
            BarcodeTextPosition::Below => 0x02,
            BarcodeTextPosition::Both => 0x03
        }
    }
}
