//! Keystroke sequences approximating editor commands in a plain text field.

use vimode_types::keycode::HidKeyCode::*;
use vimode_types::mode::Mode;
use vimode_types::modifier::ModifierCombination;

use crate::keystroke::Stroke;

/// Selection target of a partial delete/yank
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Motion {
    NextWord,
    BackWord,
    LineEnd,
    LineStart,
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Operator {
    Delete,
    Yank,
}

impl Operator {
    /// The operator pending in given mode, if any
    pub fn from_mode(mode: Mode) -> Option<Self> {
        match mode {
            Mode::Delete => Some(Operator::Delete),
            Mode::Yank => Some(Operator::Yank),
            _ => None,
        }
    }

    /// The sub-mode this operator waits in
    pub fn mode(self) -> Mode {
        match self {
            Operator::Delete => Mode::Delete,
            Operator::Yank => Mode::Yank,
        }
    }
}

pub const GREETING: &[Stroke] = &[Stroke::Text("vimode is the best thing ever!")];
pub const DESKTOP_RIGHT: &[Stroke] = &[Stroke::chord(ModifierCombination::CTRL_GUI, Right)];
pub const DESKTOP_LEFT: &[Stroke] = &[Stroke::chord(ModifierCombination::CTRL_GUI, Left)];
pub const TAB_RIGHT: &[Stroke] = &[Stroke::ctrl(Tab)];
pub const TAB_LEFT: &[Stroke] = &[Stroke::ctrl_shift(Tab)];
pub const UNDO: &[Stroke] = &[Stroke::ctrl(Z)];
pub const NEXT_WORD: &[Stroke] = &[Stroke::ctrl(Right)];
pub const BACK_WORD: &[Stroke] = &[Stroke::ctrl(Left)];

/// `A`: append at line end
pub const APPEND_LINE_END: &[Stroke] = &[Stroke::tap(End)];
/// `a`: append after the cursor
pub const APPEND_CURSOR: &[Stroke] = &[Stroke::tap(Right)];
pub const ENTER: &[Stroke] = &[Stroke::tap(Enter)];

const DELETE_NEXT_WORD: &[Stroke] = &[Stroke::ctrl_shift(Right), Stroke::ctrl(X)];
const DELETE_BACK_WORD: &[Stroke] = &[Stroke::ctrl_shift(Left), Stroke::ctrl(X)];
const DELETE_LINE_END: &[Stroke] = &[Stroke::shift(End), Stroke::ctrl(X)];
const DELETE_LINE_START: &[Stroke] = &[Stroke::shift(Home), Stroke::ctrl(X)];
// Copying leaves a selection, collapse it back to the cursor's side
const YANK_NEXT_WORD: &[Stroke] = &[Stroke::ctrl_shift(Right), Stroke::ctrl(C), Stroke::tap(Left)];
const YANK_BACK_WORD: &[Stroke] = &[Stroke::ctrl_shift(Left), Stroke::ctrl(C), Stroke::tap(Right)];
const YANK_LINE_END: &[Stroke] = &[Stroke::shift(End), Stroke::ctrl(C), Stroke::tap(Left)];
const YANK_LINE_START: &[Stroke] = &[Stroke::shift(Home), Stroke::ctrl(C), Stroke::tap(Right)];

const DELETE_LINE: &[Stroke] = &[
    Stroke::tap(Home),
    Stroke::shift(End),
    Stroke::ctrl(X),
    Stroke::shift(Down),
    Stroke::shift(Home),
    Stroke::tap(Backspace),
];
const YANK_LINE: &[Stroke] = &[Stroke::tap(Home), Stroke::shift(End), Stroke::ctrl(C), Stroke::tap(Left)];

const NEW_LINE_ABOVE_AUX: &[Stroke] = &[Stroke::tap(Home), Stroke::tap(Enter), Stroke::tap(Up)];
const NEW_LINE_ABOVE: &[Stroke] = &[Stroke::tap(Home), Stroke::shift(Enter), Stroke::tap(Up)];
const NEW_LINE_BELOW_AUX: &[Stroke] = &[Stroke::tap(End), Stroke::tap(Enter)];
const NEW_LINE_BELOW: &[Stroke] = &[Stroke::tap(End), Stroke::shift(Enter)];

const PASTE_LINE_ABOVE_AUX: &[Stroke] = &[Stroke::tap(Home), Stroke::tap(Enter), Stroke::tap(Up), Stroke::ctrl(V)];
const PASTE_LINE_ABOVE: &[Stroke] = &[Stroke::tap(Home), Stroke::shift(Enter), Stroke::tap(Up), Stroke::ctrl(V)];
const PASTE_LINE_BELOW_AUX: &[Stroke] = &[Stroke::tap(End), Stroke::tap(Enter), Stroke::ctrl(V)];
const PASTE_LINE_BELOW: &[Stroke] = &[Stroke::tap(End), Stroke::shift(Enter), Stroke::ctrl(V)];
const PASTE_BEFORE: &[Stroke] = &[Stroke::ctrl(V)];
const PASTE_AFTER: &[Stroke] = &[Stroke::tap(Right), Stroke::ctrl(V)];

/// Select with the motion, then cut (delete) or copy (yank)
pub fn motion_sequence(operator: Operator, motion: Motion) -> &'static [Stroke] {
    match (operator, motion) {
        (Operator::Delete, Motion::NextWord) => DELETE_NEXT_WORD,
        (Operator::Delete, Motion::BackWord) => DELETE_BACK_WORD,
        (Operator::Delete, Motion::LineEnd) => DELETE_LINE_END,
        (Operator::Delete, Motion::LineStart) => DELETE_LINE_START,
        (Operator::Yank, Motion::NextWord) => YANK_NEXT_WORD,
        (Operator::Yank, Motion::BackWord) => YANK_BACK_WORD,
        (Operator::Yank, Motion::LineEnd) => YANK_LINE_END,
        (Operator::Yank, Motion::LineStart) => YANK_LINE_START,
    }
}

/// `dd` removes the whole line including its break, `yy` copies it
pub fn line_sequence(operator: Operator) -> &'static [Stroke] {
    match operator {
        Operator::Delete => DELETE_LINE,
        Operator::Yank => YANK_LINE,
    }
}

/// `O` (shift) opens a line above, `o` below.
///
/// Aux mode breaks lines with a plain Enter, otherwise Shift+Enter is used.
pub fn new_line_sequence(shift: bool, aux: bool) -> &'static [Stroke] {
    match (shift, aux) {
        (true, true) => NEW_LINE_ABOVE_AUX,
        (true, false) => NEW_LINE_ABOVE,
        (false, true) => NEW_LINE_BELOW_AUX,
        (false, false) => NEW_LINE_BELOW,
    }
}

/// `P` (shift) pastes before the cursor, `p` after it.
///
/// A clipboard holding a whole line is pasted on a new line.
pub fn paste_sequence(clipboard_holds_line: bool, shift: bool, aux: bool) -> &'static [Stroke] {
    match (clipboard_holds_line, shift, aux) {
        (true, true, true) => PASTE_LINE_ABOVE_AUX,
        (true, true, false) => PASTE_LINE_ABOVE,
        (true, false, true) => PASTE_LINE_BELOW_AUX,
        (true, false, false) => PASTE_LINE_BELOW,
        (false, true, _) => PASTE_BEFORE,
        (false, false, _) => PASTE_AFTER,
    }
}
