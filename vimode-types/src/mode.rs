use serde::{Deserialize, Serialize};

/// The modal input state of the keyboard, exactly one is active at a time.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Mode {
    /// Plain typing
    #[default]
    Regular,
    /// The number layer is active
    Number,
    /// Vim-like navigation and editing
    Vim,
    /// Vim `y` was pressed, waiting for a motion
    Yank,
    /// Vim `d` was pressed, waiting for a motion
    Delete,
}

impl Mode {
    /// Returns `true` in the delete or yank sub-mode
    pub fn is_delete_yank(self) -> bool {
        matches!(self, Mode::Delete | Mode::Yank)
    }
}
