use vimode_types::light::Hsv;

use crate::action::KeyAction;
use crate::config::DispatcherConfig;
use crate::dispatcher::ModalDispatcher;
use crate::event::KeyEvent;
use crate::host::{KeystrokeSender, LayerControl, RgbMatrix};
use crate::keymap::KeyMap;
use crate::keystroke::Stroke;

/// Result of a key event
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum KeyOutcome {
    /// Consumed by the keymap or the modal dispatcher
    Handled,
    /// The host should process the action, with the key state
    Forward(KeyAction, bool),
}

/// The keymap and the modal dispatcher wired together.
///
/// The keymap's layer stack takes the layer calls of the dispatcher, lighting
/// and keystrokes still go to the host.
pub struct Keyboard<'a, const ROW: usize, const COL: usize, const NUM_LAYER: usize> {
    pub keymap: KeyMap<'a, ROW, COL, NUM_LAYER>,
    pub dispatcher: ModalDispatcher,
}

impl<'a, const ROW: usize, const COL: usize, const NUM_LAYER: usize> Keyboard<'a, ROW, COL, NUM_LAYER> {
    pub fn new(keymap: KeyMap<'a, ROW, COL, NUM_LAYER>, config: DispatcherConfig) -> Self {
        if !config.layers.fits(NUM_LAYER) {
            warn!("Layers {:?} don't fit a keymap of {} layers", config.layers, NUM_LAYER);
        }
        Self {
            keymap,
            dispatcher: ModalDispatcher::new(config),
        }
    }

    pub fn process_key_event<H: RgbMatrix + KeystrokeSender>(&mut self, host: &mut H, event: KeyEvent) -> KeyOutcome {
        let action = self.keymap.get_action_with_layer_cache(event);
        debug!("Process key {:?}: {:?}", event, action);
        match action {
            KeyAction::No | KeyAction::Transparent => KeyOutcome::Handled,
            KeyAction::Custom(key) => {
                let mut host = KeyboardHost {
                    layers: &mut self.keymap,
                    host,
                };
                self.dispatcher.process_custom(&mut host, key, event.pressed);
                KeyOutcome::Handled
            }
            KeyAction::LayerOn(layer) => {
                if event.pressed {
                    self.keymap.activate_layer(layer);
                } else {
                    self.keymap.deactivate_layer(layer);
                }
                KeyOutcome::Handled
            }
            KeyAction::Key(_) | KeyAction::Rgb(_) | KeyAction::Bootloader => KeyOutcome::Forward(action, event.pressed),
        }
    }
}

/// Host view of the dispatcher, with layers redirected to the keymap
struct KeyboardHost<'k, L: LayerControl, H: RgbMatrix + KeystrokeSender> {
    layers: &'k mut L,
    host: &'k mut H,
}

impl<L: LayerControl, H: RgbMatrix + KeystrokeSender> LayerControl for KeyboardHost<'_, L, H> {
    fn layer_on(&mut self, layer: u8) {
        self.layers.layer_on(layer);
    }

    fn layer_off(&mut self, layer: u8) {
        self.layers.layer_off(layer);
    }
}

impl<L: LayerControl, H: RgbMatrix + KeystrokeSender> RgbMatrix for KeyboardHost<'_, L, H> {
    fn is_enabled(&self) -> bool {
        self.host.is_enabled()
    }

    fn mode(&self) -> u8 {
        self.host.mode()
    }

    fn hue(&self) -> u8 {
        self.host.hue()
    }

    fn sat(&self) -> u8 {
        self.host.sat()
    }

    fn val(&self) -> u8 {
        self.host.val()
    }

    fn set_mode(&mut self, mode: u8) {
        self.host.set_mode(mode);
    }

    fn set_hsv(&mut self, hsv: Hsv) {
        self.host.set_hsv(hsv);
    }

    fn enable(&mut self) {
        self.host.enable();
    }

    fn disable(&mut self) {
        self.host.disable();
    }
}

impl<L: LayerControl, H: RgbMatrix + KeystrokeSender> KeystrokeSender for KeyboardHost<'_, L, H> {
    fn send(&mut self, sequence: &[Stroke]) {
        self.host.send(sequence);
    }
}
