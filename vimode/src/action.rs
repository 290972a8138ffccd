use vimode_types::custom::CustomKeyCode;
use vimode_types::keycode::HidKeyCode;
use vimode_types::light::RgbKeyCode;
use vimode_types::mode::Mode;

use crate::command::{self, Motion, Operator};
use crate::keystroke::Stroke;
use crate::light::{LightPreset, SnapshotSlot};

/// A KeyAction is the action at a keyboard position, stored in keymap.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum KeyAction {
    /// No action
    No,
    /// Transparent action, next layer will be checked
    Transparent,
    /// A normal key stroke, forwarded to the host
    Key(HidKeyCode),
    /// Handled by the modal dispatcher
    Custom(CustomKeyCode),
    /// Activate a layer while the key is held
    LayerOn(u8),
    /// Lighting driver keycode, forwarded to the host
    Rgb(RgbKeyCode),
    /// Jump to the bootloader, forwarded to the host
    Bootloader,
}

/// What to type after the vim lighting is restored on the way back to regular mode
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ExitStroke {
    None,
    /// `a`/`A`, depends on the vim shift
    Append,
    Enter,
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ShiftSide {
    Left,
    Right,
}

/// A command key of the delete/yank layer
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum SubCommand {
    /// Runs the pending operator over a motion
    Motion(Motion),
    /// `dd` or `yy`, only runs when the pending operator matches
    Line(Operator),
}

/// The behavior of a custom keycode.
///
/// Every variant is one category of keys, interpreted by one handler of the dispatcher.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ModalAction {
    /// Send a fixed sequence on press
    Immediate(&'static [Stroke]),
    /// Light up on press, switch mode on release
    EnterMode {
        save: Option<SnapshotSlot>,
        preset: LightPreset,
        mode: Mode,
    },
    /// Restore the vim lighting on press, return to regular mode on release
    ExitToRegular(ExitStroke),
    NumToggle,
    AuxToggle,
    /// Held while the key is down
    Shift(ShiftSide),
    EnterSubMode(Operator),
    SubCommand(SubCommand),
    CancelSubMode,
    NewLine,
    Paste,
    Preset(LightPreset),
}

impl From<CustomKeyCode> for ModalAction {
    fn from(key: CustomKeyCode) -> Self {
        match key {
            CustomKeyCode::Greeting => ModalAction::Immediate(command::GREETING),
            CustomKeyCode::DesktopRight => ModalAction::Immediate(command::DESKTOP_RIGHT),
            CustomKeyCode::DesktopLeft => ModalAction::Immediate(command::DESKTOP_LEFT),
            CustomKeyCode::TabRight => ModalAction::Immediate(command::TAB_RIGHT),
            CustomKeyCode::TabLeft => ModalAction::Immediate(command::TAB_LEFT),
            CustomKeyCode::Undo => ModalAction::Immediate(command::UNDO),
            CustomKeyCode::NextWord => ModalAction::Immediate(command::NEXT_WORD),
            CustomKeyCode::BackWord => ModalAction::Immediate(command::BACK_WORD),
            CustomKeyCode::VimMode => ModalAction::EnterMode {
                save: Some(SnapshotSlot::Vim),
                preset: LightPreset::Vim,
                mode: Mode::Vim,
            },
            CustomKeyCode::VimReset => ModalAction::EnterMode {
                save: None,
                preset: LightPreset::Vim,
                mode: Mode::Vim,
            },
            // Shares the vim slot, leaving number mode restores the lighting from before it
            CustomKeyCode::NumMode => ModalAction::EnterMode {
                save: Some(SnapshotSlot::Vim),
                preset: LightPreset::Cyan,
                mode: Mode::Number,
            },
            CustomKeyCode::RegularMode => ModalAction::ExitToRegular(ExitStroke::None),
            CustomKeyCode::Append => ModalAction::ExitToRegular(ExitStroke::Append),
            CustomKeyCode::VimEnter => ModalAction::ExitToRegular(ExitStroke::Enter),
            CustomKeyCode::NumToggle => ModalAction::NumToggle,
            CustomKeyCode::AuxToggle => ModalAction::AuxToggle,
            CustomKeyCode::LeftShift => ModalAction::Shift(ShiftSide::Left),
            CustomKeyCode::RightShift => ModalAction::Shift(ShiftSide::Right),
            CustomKeyCode::VimDelete => ModalAction::EnterSubMode(Operator::Delete),
            CustomKeyCode::VimYank => ModalAction::EnterSubMode(Operator::Yank),
            CustomKeyCode::SubNextWord => ModalAction::SubCommand(SubCommand::Motion(Motion::NextWord)),
            CustomKeyCode::SubBackWord => ModalAction::SubCommand(SubCommand::Motion(Motion::BackWord)),
            CustomKeyCode::SubLineEnd => ModalAction::SubCommand(SubCommand::Motion(Motion::LineEnd)),
            CustomKeyCode::SubLineStart => ModalAction::SubCommand(SubCommand::Motion(Motion::LineStart)),
            CustomKeyCode::DeleteLine => ModalAction::SubCommand(SubCommand::Line(Operator::Delete)),
            CustomKeyCode::YankLine => ModalAction::SubCommand(SubCommand::Line(Operator::Yank)),
            CustomKeyCode::SubCancel => ModalAction::CancelSubMode,
            CustomKeyCode::NewLine => ModalAction::NewLine,
            CustomKeyCode::Paste => ModalAction::Paste,
            CustomKeyCode::PresetWhite => ModalAction::Preset(LightPreset::White),
            CustomKeyCode::PresetDracula => ModalAction::Preset(LightPreset::Dracula),
            CustomKeyCode::PresetRed => ModalAction::Preset(LightPreset::Red),
            CustomKeyCode::PresetFractal => ModalAction::Preset(LightPreset::Fractal),
            CustomKeyCode::PresetHeatmap => ModalAction::Preset(LightPreset::Heatmap),
        }
    }
}
