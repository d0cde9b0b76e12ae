pub use self::barcode::{BarcodeSystem, BarcodeTextPosition};
pub use self::command::Command;
pub use self::control::{ControlCode, HardwareOp};
pub use self::emphasis::Emphasis;
pub use self::font::Font;
pub use self::justification::Justification;
pub use self::resolution::Resolution;

mod barcode;
mod command;
mod control;
mod emphasis;
mod font;
mod justification;
mod resolution;
