//! The modal input dispatcher.
//!
//! Custom keycodes are decoded into a [`ModalAction`] and handed to the
//! interpreter of its category. Everything the interpreters remember between
//! events lives in [`ModalState`].

use vimode_types::custom::CustomKeyCode;
use vimode_types::light::LightingSnapshot;
use vimode_types::mode::Mode;

use crate::action::{ExitStroke, ModalAction, ShiftSide, SubCommand};
use crate::command::{self, Operator};
use crate::config::DispatcherConfig;
use crate::host::Host;
use crate::light::{LightPreset, SnapshotSlot, SnapshotSlots};

/// State of the modal keymap
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ModalState {
    mode: Mode,
    /// The mode to go back to when the delete/yank sub-mode exits
    sub_mode_return: Mode,
    snapshots: SnapshotSlots,
    left_shift: bool,
    right_shift: bool,
    /// The last delete/yank captured a whole line
    clipboard_holds_line: bool,
    aux: bool,
    /// Mode the number toggle switches to on release
    pending_toggle: Option<Mode>,
}

impl ModalState {
    pub const fn new() -> Self {
        Self {
            mode: Mode::Regular,
            sub_mode_return: Mode::Regular,
            snapshots: SnapshotSlots::new(),
            left_shift: false,
            right_shift: false,
            clipboard_holds_line: false,
            aux: false,
            pending_toggle: None,
        }
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    /// Either vim shift key is held
    pub fn vim_shift(&self) -> bool {
        self.left_shift || self.right_shift
    }

    pub fn clipboard_holds_line(&self) -> bool {
        self.clipboard_holds_line
    }

    pub fn aux_enabled(&self) -> bool {
        self.aux
    }

    pub fn snapshot(&self, slot: SnapshotSlot) -> &LightingSnapshot {
        self.snapshots.get(slot)
    }

    fn clear_shift(&mut self) {
        self.left_shift = false;
        self.right_shift = false;
    }
}

pub struct ModalDispatcher {
    state: ModalState,
    config: DispatcherConfig,
}

impl Default for ModalDispatcher {
    fn default() -> Self {
        Self::new(DispatcherConfig::default())
    }
}

impl ModalDispatcher {
    pub fn new(config: DispatcherConfig) -> Self {
        Self {
            state: ModalState::new(),
            config,
        }
    }

    pub fn state(&self) -> &ModalState {
        &self.state
    }

    pub fn config(&self) -> &DispatcherConfig {
        &self.config
    }

    /// Process a raw keycode from the host.
    ///
    /// Keycodes outside the custom range are ignored. Always returns `true`, the
    /// host continues its default processing of the event.
    pub fn process<H: Host + ?Sized>(&mut self, host: &mut H, keycode: u16, pressed: bool) -> bool {
        if let Some(key) = CustomKeyCode::from_keycode(keycode) {
            self.process_custom(host, key, pressed);
        }
        true
    }

    pub fn process_custom<H: Host + ?Sized>(&mut self, host: &mut H, key: CustomKeyCode, pressed: bool) {
        trace!("Custom key {:?}, pressed: {}", key, pressed);
        match ModalAction::from(key) {
            ModalAction::Immediate(sequence) => {
                if pressed {
                    host.send(sequence);
                }
            }
            ModalAction::EnterMode { save, preset, mode } => self.process_enter_mode(host, save, preset, mode, pressed),
            ModalAction::ExitToRegular(exit) => self.process_exit_to_regular(host, exit, pressed),
            ModalAction::NumToggle => self.process_num_toggle(host, pressed),
            ModalAction::AuxToggle => self.process_aux_toggle(host, pressed),
            ModalAction::Shift(side) => match side {
                ShiftSide::Left => self.state.left_shift = pressed,
                ShiftSide::Right => self.state.right_shift = pressed,
            },
            ModalAction::EnterSubMode(operator) => {
                if pressed {
                    self.enter_sub_mode(host, operator);
                }
            }
            ModalAction::SubCommand(sub_command) => self.process_sub_command(host, sub_command, pressed),
            ModalAction::CancelSubMode => {
                if pressed {
                    self.state.snapshots.load(SnapshotSlot::DeleteYank, host);
                } else {
                    self.exit_sub_mode(host);
                }
            }
            ModalAction::NewLine => {
                if pressed {
                    host.send(command::new_line_sequence(self.state.vim_shift(), self.state.aux));
                }
            }
            ModalAction::Paste => {
                if pressed {
                    host.send(command::paste_sequence(
                        self.state.clipboard_holds_line,
                        self.state.vim_shift(),
                        self.state.aux,
                    ));
                }
            }
            ModalAction::Preset(preset) => {
                if pressed {
                    preset.apply(host, &self.config.light);
                }
            }
        }
    }

    fn process_enter_mode<H: Host + ?Sized>(
        &mut self,
        host: &mut H,
        save: Option<SnapshotSlot>,
        preset: LightPreset,
        mode: Mode,
        pressed: bool,
    ) {
        if pressed {
            if let Some(slot) = save {
                self.state.snapshots.save(slot, &*host);
            }
            preset.apply(host, &self.config.light);
        } else {
            self.enter_mode(host, mode);
        }
    }

    fn process_exit_to_regular<H: Host + ?Sized>(&mut self, host: &mut H, exit: ExitStroke, pressed: bool) {
        if !pressed {
            self.regular_mode_on(host);
            return;
        }
        self.state.snapshots.load(SnapshotSlot::Vim, host);
        match exit {
            ExitStroke::None => (),
            ExitStroke::Append => {
                if self.state.vim_shift() {
                    host.send(command::APPEND_LINE_END);
                } else {
                    host.send(command::APPEND_CURSOR);
                }
            }
            ExitStroke::Enter => host.send(command::ENTER),
        }
    }

    fn process_num_toggle<H: Host + ?Sized>(&mut self, host: &mut H, pressed: bool) {
        if pressed {
            self.state.pending_toggle = match self.state.mode {
                Mode::Number => {
                    self.state.snapshots.load(SnapshotSlot::Number, host);
                    Some(Mode::Regular)
                }
                Mode::Regular => {
                    self.state.snapshots.save(SnapshotSlot::Number, &*host);
                    LightPreset::Cyan.apply(host, &self.config.light);
                    Some(Mode::Number)
                }
                _ => None,
            };
            return;
        }
        match self.state.pending_toggle.take() {
            Some(Mode::Regular) => self.regular_mode_on(host),
            Some(mode) => self.enter_mode(host, mode),
            None => (),
        }
    }

    fn process_aux_toggle<H: Host + ?Sized>(&mut self, host: &mut H, pressed: bool) {
        if pressed {
            if self.state.aux {
                self.state.snapshots.load(SnapshotSlot::Aux, host);
            } else {
                self.state.snapshots.save(SnapshotSlot::Aux, &*host);
                LightPreset::Gold.apply(host, &self.config.light);
            }
        } else {
            self.state.aux = !self.state.aux;
            debug!("Aux mode: {}", self.state.aux);
        }
    }

    fn process_sub_command<H: Host + ?Sized>(&mut self, host: &mut H, sub_command: SubCommand, pressed: bool) {
        let pending = Operator::from_mode(self.state.mode);
        match sub_command {
            SubCommand::Motion(motion) => {
                if !pressed {
                    self.exit_sub_mode(host);
                    return;
                }
                if let Some(operator) = pending {
                    debug!("Run {:?} over {:?}", operator, motion);
                    host.send(command::motion_sequence(operator, motion));
                }
                self.state.clipboard_holds_line = false;
                self.state.snapshots.load(SnapshotSlot::DeleteYank, host);
            }
            SubCommand::Line(operator) => {
                if !pressed {
                    return;
                }
                if pending == Some(operator) {
                    debug!("Run {:?} over the line", operator);
                    host.send(command::line_sequence(operator));
                    self.state.clipboard_holds_line = true;
                }
                self.state.snapshots.load(SnapshotSlot::DeleteYank, host);
                self.exit_sub_mode(host);
            }
        }
    }

    /// Switch to number or vim mode, the other one's layer is turned off
    fn enter_mode<H: Host + ?Sized>(&mut self, host: &mut H, mode: Mode) {
        let layers = self.config.layers;
        let (on, off) = match mode {
            Mode::Number => (layers.number, layers.vim),
            Mode::Vim => (layers.vim, layers.number),
            _ => {
                warn!("{:?} is not entered with a mode key", mode);
                return;
            }
        };
        debug!("Enter {:?} mode", mode);
        self.state.mode = mode;
        host.layer_off(off);
        host.layer_on(on);
        self.state.clear_shift();
    }

    fn regular_mode_on<H: Host + ?Sized>(&mut self, host: &mut H) {
        debug!("Enter Regular mode");
        self.state.mode = Mode::Regular;
        host.layer_off(self.config.layers.number);
        host.layer_off(self.config.layers.vim);
        self.state.clear_shift();
    }

    fn enter_sub_mode<H: Host + ?Sized>(&mut self, host: &mut H, operator: Operator) {
        // Switching operators keeps the lighting and mode from before the first one
        if !self.state.mode.is_delete_yank() {
            self.state.snapshots.save(SnapshotSlot::DeleteYank, &*host);
            self.state.sub_mode_return = self.state.mode;
        }
        let preset = match operator {
            Operator::Delete => LightPreset::VimDelete,
            Operator::Yank => LightPreset::VimYank,
        };
        preset.apply(host, &self.config.light);
        self.state.mode = operator.mode();
        debug!("Enter {:?} sub-mode, return to {:?}", self.state.mode, self.state.sub_mode_return);
        host.layer_on(self.config.layers.delete_yank);
    }

    fn exit_sub_mode<H: Host + ?Sized>(&mut self, host: &mut H) {
        if !self.state.mode.is_delete_yank() {
            return;
        }
        debug!("Leave {:?} sub-mode", self.state.mode);
        self.state.mode = self.state.sub_mode_return;
        host.layer_off(self.config.layers.delete_yank);
    }
}
