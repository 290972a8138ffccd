use serde::{Deserialize, Serialize};
use strum::FromRepr;

/// First keycode of the user range, everything below belongs to the host firmware.
pub const USER_KEYCODE_START: u16 = 0x7E00;

/// Keycodes handled by the modal dispatcher.
///
/// They are encoded as consecutive values starting at [`USER_KEYCODE_START`].
#[repr(u16)]
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize, PartialOrd, Ord, FromRepr)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum CustomKeyCode {
    /// Type the greeting text
    Greeting = USER_KEYCODE_START,
    /// Move to the virtual desktop on the right
    DesktopRight,
    /// Move to the virtual desktop on the left
    DesktopLeft,
    /// Move to the browser tab on the right
    TabRight,
    /// Move to the browser tab on the left
    TabLeft,

    /// Enter vim mode
    VimMode,
    /// Re-apply the vim lighting and re-enter vim mode, only used in the vim layer
    VimReset,
    /// Back to regular (insert) mode
    RegularMode,
    /// Enter number mode
    NumMode,
    /// Number mode toggle
    NumToggle,
    /// Aux mode toggle, new lines use `Enter` instead of `Shift+Enter`
    AuxToggle,
    /// Move right (or to the line end when shifted), then regular mode
    Append,
    /// Type `Enter`, then regular mode
    VimEnter,

    /// `Ctrl+Z`
    Undo,
    /// Next word, `w` in vim
    NextWord,
    /// Back to the last word, `b` in vim
    BackWord,
    /// Vim right shift
    RightShift,
    /// Vim left shift
    LeftShift,

    /// `d` in vim, starts the delete sub-mode
    VimDelete,
    /// `y` in vim, starts the yank sub-mode
    VimYank,
    /// Delete/yank next word, `dw`
    SubNextWord,
    /// Delete/yank back word, `db`
    SubBackWord,
    /// Delete/yank until the end of line, `d$`
    SubLineEnd,
    /// Delete/yank until the beginning of line, `d0`
    SubLineStart,
    /// Delete current line, `dd`
    DeleteLine,
    /// Yank current line, `yy`
    YankLine,
    /// Leave the delete/yank sub-mode without any command
    SubCancel,

    /// Open a new line below, or above when shifted
    NewLine,
    /// Paste in vim
    Paste,

    PresetWhite,
    PresetDracula,
    PresetRed,
    PresetFractal,
    PresetHeatmap,
}

impl CustomKeyCode {
    /// Decode a raw host keycode, `None` if it's not in the custom range
    pub fn from_keycode(keycode: u16) -> Option<Self> {
        Self::from_repr(keycode)
    }

    /// The raw host keycode
    pub const fn to_keycode(self) -> u16 {
        self as u16
    }
}
