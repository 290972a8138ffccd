use vimode_types::keycode::HidKeyCode;
use vimode_types::modifier::ModifierCombination;

/// A single injected keystroke.
///
/// A `Tap` presses the modifiers and the key together, then releases them.
/// A `Text` is typed byte by byte using the en-US layout.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Stroke {
    Tap(ModifierCombination, HidKeyCode),
    Text(&'static str),
}

impl Stroke {
    /// Tap a key without modifiers
    pub const fn tap(key: HidKeyCode) -> Self {
        Stroke::Tap(ModifierCombination::NONE, key)
    }

    /// Tap a key with the given modifiers held
    pub const fn chord(modifiers: ModifierCombination, key: HidKeyCode) -> Self {
        Stroke::Tap(modifiers, key)
    }

    pub const fn ctrl(key: HidKeyCode) -> Self {
        Stroke::Tap(ModifierCombination::CTRL, key)
    }

    pub const fn shift(key: HidKeyCode) -> Self {
        Stroke::Tap(ModifierCombination::SHIFT, key)
    }

    pub const fn ctrl_shift(key: HidKeyCode) -> Self {
        Stroke::Tap(ModifierCombination::CTRL_SHIFT, key)
    }
}
