//! Calls into the host firmware.
//!
//! The dispatcher never owns the layer stack, the lighting driver or the
//! report pipeline. All effects go through these traits, which keeps every
//! call infallible and synchronous.

use vimode_types::light::{Hsv, LightingSnapshot};

use crate::keystroke::Stroke;

/// The host's layer stack
pub trait LayerControl {
    /// Activate given layer
    fn layer_on(&mut self, layer: u8);
    /// Deactivate given layer
    fn layer_off(&mut self, layer: u8);
}

/// The host's RGB matrix driver
pub trait RgbMatrix {
    fn is_enabled(&self) -> bool;
    /// Raw effect id of the running effect
    fn mode(&self) -> u8;
    fn hue(&self) -> u8;
    fn sat(&self) -> u8;
    fn val(&self) -> u8;

    fn set_mode(&mut self, mode: u8);
    fn set_hsv(&mut self, hsv: Hsv);
    fn enable(&mut self);
    fn disable(&mut self);

    /// Current color
    fn hsv(&self) -> Hsv {
        Hsv::new(self.hue(), self.sat(), self.val())
    }

    /// Copy the current lighting configuration out of the driver
    fn capture(&self) -> LightingSnapshot {
        LightingSnapshot::new(self.is_enabled(), self.mode(), self.hsv())
    }

    /// Write a snapshot back: mode first, then color, then the on/off state
    fn restore(&mut self, snapshot: &LightingSnapshot) {
        self.set_mode(snapshot.mode);
        self.set_hsv(snapshot.hsv);
        if snapshot.enabled {
            self.enable();
        } else {
            self.disable();
        }
    }
}

/// Keystroke injection into the host's report pipeline
pub trait KeystrokeSender {
    /// Send every stroke of the sequence, in order
    fn send(&mut self, sequence: &[Stroke]);
}

/// Everything the dispatcher needs from the host
pub trait Host: LayerControl + RgbMatrix + KeystrokeSender {}

impl<T: LayerControl + RgbMatrix + KeystrokeSender + ?Sized> Host for T {}
