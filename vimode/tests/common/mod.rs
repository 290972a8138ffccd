#![allow(dead_code)]

use vimode::keystroke::Stroke;
use vimode::types::light::{Hsv, LightingSnapshot};
use vimode::{KeystrokeSender, LayerControl, RgbMatrix};

// Init logger for tests
#[ctor::ctor]
pub fn init_log() {
    let _ = env_logger::builder()
        .filter_level(log::LevelFilter::Debug)
        .is_test(true)
        .try_init();
}

/// A host that records every call of the dispatcher
#[derive(Debug, Default)]
pub struct RecordingHost {
    pub layers: [bool; 32],
    pub enabled: bool,
    pub mode: u8,
    pub hsv: Hsv,
    pub strokes: Vec<Stroke>,
}

impl RecordingHost {
    pub fn new() -> Self {
        Self::default()
    }

    /// A host with the lighting already configured
    pub fn with_lighting(snapshot: LightingSnapshot) -> Self {
        Self {
            enabled: snapshot.enabled,
            mode: snapshot.mode,
            hsv: snapshot.hsv,
            ..Default::default()
        }
    }

    pub fn lighting(&self) -> LightingSnapshot {
        LightingSnapshot::new(self.enabled, self.mode, self.hsv)
    }

    pub fn active_layers(&self) -> Vec<u8> {
        (0..32).filter(|l| self.layers[*l as usize]).collect()
    }

    /// Take the strokes sent so far
    pub fn take_strokes(&mut self) -> Vec<Stroke> {
        std::mem::take(&mut self.strokes)
    }
}

impl LayerControl for RecordingHost {
    fn layer_on(&mut self, layer: u8) {
        self.layers[layer as usize] = true;
    }

    fn layer_off(&mut self, layer: u8) {
        self.layers[layer as usize] = false;
    }
}

impl RgbMatrix for RecordingHost {
    fn is_enabled(&self) -> bool {
        self.enabled
    }

    fn mode(&self) -> u8 {
        self.mode
    }

    fn hue(&self) -> u8 {
        self.hsv.h
    }

    fn sat(&self) -> u8 {
        self.hsv.s
    }

    fn val(&self) -> u8 {
        self.hsv.v
    }

    fn set_mode(&mut self, mode: u8) {
        self.mode = mode;
    }

    fn set_hsv(&mut self, hsv: Hsv) {
        self.hsv = hsv;
    }

    fn enable(&mut self) {
        self.enabled = true;
    }

    fn disable(&mut self) {
        self.enabled = false;
    }
}

impl KeystrokeSender for RecordingHost {
    fn send(&mut self, sequence: &[Stroke]) {
        self.strokes.extend_from_slice(sequence);
    }
}
