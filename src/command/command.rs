use super::{BarcodeSystem, BarcodeTextPosition, ControlCode, Font, HardwareOp, Justification, Resolution};
use serde::{Serialize, Deserialize};

/// Raw esc/pos command sequences
///
/// Every semantic operation of the [Printer](crate::Printer) resolves to one
/// or more of these before anything reaches the transport. Byte values come
/// from the esc/pos command reference.
#[derive(Serialize, Deserialize, Clone, Debug)]
pub enum Command {
    /// Character size back to 1x1. Equivalent to ESC ! 0
    SizeNormal,
    /// Double width characters, ESC ! 32
    DoubleWidth,
    /// Double height characters, ESC ! 16
    DoubleHeight,
    BoldOn,
    BoldOff,
    UnderlineOff,
    Underline1Dot,
    Underline2Dot,
    /// Font selection through the print mode command, ESC !
    TextFont {
        font: Font
    },
    /// Font selection through ESC M
    SelectFont {
        font: Font
    },
    /// Horizontal alignment, ESC a
    Justify {
        justification: Justification
    },
    /// Cuts the paper completely, GS V 0
    CutFull,
    /// Leaves a small paper bridge, GS V 1
    CutPartial,
    /// Cash drawer pulse on pin 2, ESC p 0
    CashDrawerPin2,
    /// Cash drawer pulse on pin 5, ESC p 1
    CashDrawerPin5,
    Hardware {
        op: HardwareOp
    },
    Control {
        code: ControlCode
    },
    /// Bar height in dots, GS h
    BarcodeHeight {
        height: u8
    },
    /// Module width in dots, GS w
    BarcodeWidth {
        width: u8
    },
    /// Font for the human readable text, GS f
    BarcodeFont {
        font: Font
    },
    /// Placement of the human readable text, GS H
    BarcodeTextPosition {
        position: BarcodeTextPosition
    },
    /// Symbology selection, GS k. The code payload follows separately
    BarcodeSelect {
        system: BarcodeSystem
    },
    /// Prefix of one raster band, ESC * with the density mode
    RasterMode {
        resolution: Resolution
    }
}

impl Command {
    pub fn as_bytes(&self) -> Vec<u8> {
        match self {
            Command::SizeNormal => vec![0x1b, 0x21, 0x00],
            Command::DoubleWidth => vec![0x1b, 0x21, 0x20],
            Command::DoubleHeight => vec![0x1b, 0x21, 0x10],
            Command::BoldOn => vec![0x1b, 0x45, 0x01],
            Command::BoldOff => vec![0x1b, 0x45, 0x00],
            Command::UnderlineOff => vec![0x1b, 0x2d, 0x00],
            Command::Underline1Dot => vec![0x1b, 0x2d, 0x01],
            Command::Underline2Dot => vec![0x1b, 0x2d, 0x02],
            Command::TextFont{font} => vec![0x1b, 0x21, font.as_byte()],
            Command::SelectFont{font} => vec![0x1b, 0x4d, font.as_byte()],
            Command::Justify{justification} => vec![0x1b, 0x61, justification.as_byte()],
            Command::CutFull => vec![0x1d, 0x56, 0x00],
            Command::CutPartial => vec![0x1d, 0x56, 0x01],
            Command::CashDrawerPin2 => vec![0x1b, 0x70, 0x00],
            Command::CashDrawerPin5 => vec![0x1b, 0x70, 0x01],
            Command::Hardware{op} => match op {
                HardwareOp::Init => vec![0x1b, 0x40],
                HardwareOp::Select => vec![0x1b, 0x3d, 0x01],
                HardwareOp::Reset => vec![0x1b, 0x3f, 0x0a, 0x00]
            },
            Command::Control{code} => vec![code.as_byte()],
            Command::BarcodeHeight{height} => vec![0x1d, 0x68, *height],
            Command::BarcodeWidth{width} => vec![0x1d, 0x77, *width],
            Command::BarcodeFont{font} => vec![0x1d, 0x66, font.as_byte()],
            Command::BarcodeTextPosition{position} => vec![0x1d, 0x48, position.as_byte()],
            Command::BarcodeSelect{system} => vec![0x1d, 0x6b, system.as_byte()],
            Command::RasterMode{resolution} => vec![0x1b, 0x2a, resolution.mode_byte()]
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sizing_commands() {
        assert_eq!(Command::SizeNormal.as_bytes(), vec![0x1b, 0x21, 0x00]);
        assert_eq!(Command::DoubleWidth.as_bytes(), vec![0x1b, 0x21, 0x20]);
        assert_eq!(Command::DoubleHeight.as_bytes(), vec![0x1b, 0x21, 0x10]);
    }

    #[test]
    fn emphasis_commands() {
        assert_eq!(Command::BoldOn.as_bytes(), vec![0x1b, 0x45, 0x01]);
        assert_eq!(Command::BoldOff.as_bytes(), vec![0x1b, 0x45, 0x00]);
        assert_eq!(Command::UnderlineOff.as_bytes(), vec![0x1b, 0x2d, 0x00]);
        assert_eq!(Command::Underline1Dot.as_bytes(), vec![0x1b, 0x2d, 0x01]);
        assert_eq!(Command::Underline2Dot.as_bytes(), vec![0x1b, 0x2d, 0x02]);
    }

    #[test]
    fn font_commands() {
        assert_eq!(Command::TextFont{font: Font::FontB}.as_bytes(), vec![0x1b, 0x21, 0x01]);
        assert_eq!(Command::SelectFont{font: Font::FontA}.as_bytes(), vec![0x1b, 0x4d, 0x00]);
        assert_eq!(Command::SelectFont{font: Font::FontB}.as_bytes(), vec![0x1b, 0x4d, 0x01]);
    }

    #[test]
    fn alignment_commands() {
        assert_eq!(Command::Justify{justification: Justification::Left}.as_bytes(), vec![0x1b, 0x61, 0x00]);
        assert_eq!(Command::Justify{justification: Justification::Center}.as_bytes(), vec![0x1b, 0x61, 0x01]);
        assert_eq!(Command::Justify{justification: Justification::Right}.as_bytes(), vec![0x1b, 0x61, 0x02]);
    }

    #[test]
    fn paper_and_drawer_commands() {
        assert_eq!(Command::CutFull.as_bytes(), vec![0x1d, 0x56, 0x00]);
        assert_eq!(Command::CutPartial.as_bytes(), vec![0x1d, 0x56, 0x01]);
        assert_eq!(Command::CashDrawerPin2.as_bytes(), vec![0x1b, 0x70, 0x00]);
        assert_eq!(Command::CashDrawerPin5.as_bytes(), vec![0x1b, 0x70, 0x01]);
    }

    #[test]
    fn hardware_commands() {
        assert_eq!(Command::Hardware{op: HardwareOp::Init}.as_bytes(), vec![0x1b, 0x40]);
        assert_eq!(Command::Hardware{op: HardwareOp::Select}.as_bytes(), vec![0x1b, 0x3d, 0x01]);
        assert_eq!(Command::Hardware{op: HardwareOp::Reset}.as_bytes(), vec![0x1b, 0x3f, 0x0a, 0x00]);
    }

    #[test]
    fn control_commands() {
        assert_eq!(Command::Control{code: ControlCode::LineFeed}.as_bytes(), vec![0x0a]);
        assert_eq!(Command::Control{code: ControlCode::FormFeed}.as_bytes(), vec![0x0c]);
        assert_eq!(Command::Control{code: ControlCode::CarriageReturn}.as_bytes(), vec![0x0d]);
        assert_eq!(Command::Control{code: ControlCode::HorizontalTab}.as_bytes(), vec![0x09]);
        assert_eq!(Command::Control{code: ControlCode::VerticalTab}.as_bytes(), vec![0x0b]);
    }

    #[test]
    fn barcode_commands() {
        assert_eq!(Command::BarcodeHeight{height: 5}.as_bytes(), vec![0x1d, 0x68, 0x05]);
        assert_eq!(Command::BarcodeWidth{width: 2}.as_bytes(), vec![0x1d, 0x77, 0x02]);
        assert_eq!(Command::BarcodeFont{font: Font::FontA}.as_bytes(), vec![0x1d, 0x66, 0x00]);
        assert_eq!(Command::BarcodeTextPosition{position: BarcodeTextPosition::Below}.as_bytes(), vec![0x1d, 0x48, 0x02]);
        assert_eq!(Command::BarcodeSelect{system: BarcodeSystem::Ean13}.as_bytes(), vec![0x1d, 0x6b, 0x02]);
    }

    #[test]
    fn raster_mode_commands() {
        assert_eq!(Command::RasterMode{resolution: Resolution::Low}.as_bytes(), vec![0x1b, 0x2a, 0x00]);
        assert_eq!(Command::RasterMode{resolution: Resolution::High}.as_bytes(), vec![0x1b, 0x2a, 0x21]);
    }
}
