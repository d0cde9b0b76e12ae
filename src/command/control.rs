use serde::{Serialize, Deserialize};

/// Hardware level operations
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq)]
pub enum HardwareOp {
    /// Clears buffers and restores default settings, ESC @
    Init,
    /// Selects the printer as active peripheral, ESC =
    Select,
    /// Full hardware reset, ESC ?
    Reset
}

impl Eq for HardwareOp{}

impl HardwareOp {
    /// Parses the spelled-out operation names. Anything unrecognized gives
    /// `None`, which callers treat as a no-op rather than an error.
    pub fn parse(source: &str) -> Option<HardwareOp> {
        match source.to_uppercase().as_str() {
            "INIT" => Some(HardwareOp::Init),
            "SELECT" => Some(HardwareOp::Select),
            "RESET" => Some(HardwareOp::Reset),
            _other => None
        }
    }
}

/// Single byte feed control sequences
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq)]
pub enum ControlCode {
    LineFeed,
    FormFeed,
    CarriageReturn,
    HorizontalTab,
    VerticalTab
}

impl Eq for ControlCode{}

impl ControlCode {
    /// Parses the two-letter control names. Anything unrecognized gives
    /// `None`, which callers treat as a no-op rather than an error.
    pub fn parse(source: &str) -> Option<ControlCode> {
        match source.to_uppercase().as_str() {
            "LF" => Some(ControlCode::LineFeed),
            "FF" => Some(ControlCode::FormFeed),
            "CR" => Some(ControlCode::CarriageReturn),
            "HT" => Some(ControlCode::HorizontalTab),
            "VT" => Some(ControlCode::VerticalTab),
            _other => None
        }
    }

    pub fn as_byte(&self) -> u8 {
        match self {
            ControlCode::LineFeed => 0x0a,
            ControlCode::FormFeed => 0x0c,
            ControlCode::CarriageReturn => 0x0d,
            ControlCode::HorizontalTab => 0x09,
            ControlCode::VerticalTab => 0x0b
        }
    }
}
