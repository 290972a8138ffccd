use core::ops::BitOr;

use bitfield_struct::bitfield;
use serde::{Deserialize, Serialize};

/// To represent all combinations of modifiers, at least 5 bits are needed.
/// 1 bit for Left/Right, 4 bits for modifier type. Represented in LSB format.
///
/// | bit4 | bit3 | bit2 | bit1 | bit0 |
/// | --- | --- | --- | --- | --- |
/// | L/R | GUI | ALT |SHIFT| CTRL|
#[bitfield(u8, order = Lsb, defmt = cfg(feature = "defmt"))]
#[derive(Serialize, Deserialize, Eq, PartialEq)]
pub struct ModifierCombination {
    #[bits(1)]
    pub ctrl: bool,
    #[bits(1)]
    pub shift: bool,
    #[bits(1)]
    pub alt: bool,
    #[bits(1)]
    pub gui: bool,
    #[bits(1)]
    pub right: bool,
    #[bits(3)]
    _reserved: u8,
}

impl BitOr for ModifierCombination {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self::Output {
        Self::from_bits(self.into_bits() | rhs.into_bits())
    }
}

impl ModifierCombination {
    pub const NONE: Self = Self::new();
    pub const CTRL: Self = Self::new().with_ctrl(true);
    pub const SHIFT: Self = Self::new().with_shift(true);
    pub const CTRL_SHIFT: Self = Self::new().with_ctrl(true).with_shift(true);
    pub const CTRL_GUI: Self = Self::new().with_ctrl(true).with_gui(true);

    pub const fn new_from(right: bool, gui: bool, alt: bool, shift: bool, ctrl: bool) -> Self {
        ModifierCombination::new()
            .with_right(right)
            .with_gui(gui)
            .with_alt(alt)
            .with_shift(shift)
            .with_ctrl(ctrl)
    }

    /// Returns `true` if no modifier is set
    pub const fn is_empty(self) -> bool {
        !(self.ctrl() || self.shift() || self.alt() || self.gui())
    }

    /// Get the modifier byte of a HID keyboard report.
    ///
    /// Bits 0..=3 are the left modifiers, bits 4..=7 the right ones.
    pub const fn to_hid_modifier_bits(self) -> u8 {
        let mut bits = 0;
        if self.ctrl() {
            bits |= 1 << 0;
        }
        if self.shift() {
            bits |= 1 << 1;
        }
        if self.alt() {
            bits |= 1 << 2;
        }
        if self.gui() {
            bits |= 1 << 3;
        }
        if self.right() { bits << 4 } else { bits }
    }
}
