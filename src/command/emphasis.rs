use serde::{Serialize, Deserialize};

/// Emphasis combinations accepted by [set](crate::Printer::set)
///
/// `Normal` deliberately emits no bytes, leaving whatever emphasis the
/// printer currently holds untouched. Use [Printer::bold](crate::Printer::bold)
/// or a reset to clear it explicitly.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq)]
pub enum Emphasis {
    Normal,
    Bold,
    Underline,
    Underline2,
    BoldUnderline,
    BoldUnderline2
}

impl Eq for Emphasis{}
