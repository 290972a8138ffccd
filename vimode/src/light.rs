//! Lighting presets and the snapshot slots that undo them.

use vimode_types::light::{Hsv, LightingSnapshot, RgbEffect};

use crate::config::VimLightConfig;
use crate::host::RgbMatrix;

/// A lighting configuration applied when a mode is entered or a preset key is pressed
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum LightPreset {
    White,
    Red,
    Dracula,
    Cyan,
    Gold,
    Fractal,
    /// Keeps the current hue, depends on the current brightness
    Vim,
    VimDelete,
    VimYank,
    Heatmap,
}

impl LightPreset {
    /// Effect and color of presets that don't depend on the current lighting
    const fn fixed(self) -> Option<(RgbEffect, Hsv)> {
        match self {
            LightPreset::White => Some((RgbEffect::SolidColor, Hsv::WHITE)),
            LightPreset::Red => Some((RgbEffect::SolidColor, Hsv::RED)),
            LightPreset::Dracula => Some((RgbEffect::SolidColor, Hsv::new(187, 105, 249))),
            LightPreset::Cyan => Some((RgbEffect::SolidColor, Hsv::CYAN)),
            LightPreset::Gold => Some((RgbEffect::SolidColor, Hsv::GOLDENROD)),
            LightPreset::Fractal => Some((RgbEffect::PixelFractal, Hsv::RED)),
            LightPreset::VimDelete => Some((RgbEffect::BandSpiralVal, Hsv::RED)),
            LightPreset::VimYank => Some((RgbEffect::BandSpiralVal, Hsv::SPRING_GREEN)),
            LightPreset::Heatmap => Some((RgbEffect::TypingHeatmap, Hsv::RED)),
            LightPreset::Vim => None,
        }
    }

    /// Set the effect, then the color, then turn the matrix on
    pub fn apply<R: RgbMatrix + ?Sized>(self, rgb: &mut R, config: &VimLightConfig) {
        match self.fixed() {
            Some((effect, hsv)) => {
                rgb.set_mode(effect as u8);
                rgb.set_hsv(hsv);
            }
            None => {
                rgb.set_mode(RgbEffect::CycleOutIn as u8);
                let hsv = Hsv::new(rgb.hue(), config.saturation, rgb.val().max(config.min_brightness));
                rgb.set_hsv(hsv);
            }
        }
        rgb.enable();
    }
}

/// Owner of a saved lighting configuration
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum SnapshotSlot {
    /// Saved by vim and number mode entry
    Vim = 0,
    DeleteYank = 1,
    /// Saved by the number toggle
    Number = 2,
    Aux = 3,
}

/// Independent saved lighting configurations, one per [`SnapshotSlot`].
///
/// Every slot starts as the all-zero snapshot.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SnapshotSlots {
    slots: [LightingSnapshot; 4],
}

impl SnapshotSlots {
    pub const fn new() -> Self {
        Self {
            slots: [LightingSnapshot::new(false, 0, Hsv::new(0, 0, 0)); 4],
        }
    }

    pub fn get(&self, slot: SnapshotSlot) -> &LightingSnapshot {
        &self.slots[slot as usize]
    }

    /// Overwrite the slot with the driver's current configuration
    pub fn save<R: RgbMatrix + ?Sized>(&mut self, slot: SnapshotSlot, rgb: &R) {
        self.slots[slot as usize] = rgb.capture();
        debug!("Saved lighting to {:?}: {:?}", slot, self.slots[slot as usize]);
    }

    /// Write the slot back to the driver, the slot itself is kept
    pub fn load<R: RgbMatrix + ?Sized>(&self, slot: SnapshotSlot, rgb: &mut R) {
        debug!("Restore lighting from {:?}: {:?}", slot, self.slots[slot as usize]);
        rgb.restore(&self.slots[slot as usize]);
    }
}
