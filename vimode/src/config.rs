//! Runtime configuration of the modal dispatcher.
//!
//! The defaults come from the `[vim]` table of `keyboard.toml`, which the
//! build script turns into constants.

use crate::constants::{
    CONTROL_LAYER, DELETE_YANK_LAYER, FUNCTION_LAYER, NUMBER_LAYER, VIM_LAYER, VIM_MIN_BRIGHTNESS, VIM_SATURATION,
};

/// Layer ids of the modal keymap
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct LayerConfig {
    pub number: u8,
    pub function: u8,
    pub control: u8,
    pub vim: u8,
    pub delete_yank: u8,
}

impl Default for LayerConfig {
    fn default() -> Self {
        Self {
            number: NUMBER_LAYER,
            function: FUNCTION_LAYER,
            control: CONTROL_LAYER,
            vim: VIM_LAYER,
            delete_yank: DELETE_YANK_LAYER,
        }
    }
}

impl LayerConfig {
    const fn ids(&self) -> [u8; 5] {
        [self.number, self.function, self.control, self.vim, self.delete_yank]
    }

    /// Whether a keymap of `num_layer` layers can hold these layers.
    ///
    /// Every layer must be above the base layer and used once, and the
    /// delete/yank layer must be the highest.
    pub fn fits(&self, num_layer: usize) -> bool {
        let ids = self.ids();
        ids.iter()
            .enumerate()
            .all(|(i, id)| *id != 0 && (*id as usize) < num_layer && !ids[..i].contains(id))
            && ids[..4].iter().all(|id| *id < self.delete_yank)
    }
}

/// Parameters of the vim lighting preset
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct VimLightConfig {
    /// The preset never dims the matrix below this value
    pub min_brightness: u8,
    pub saturation: u8,
}

impl Default for VimLightConfig {
    fn default() -> Self {
        Self {
            min_brightness: VIM_MIN_BRIGHTNESS,
            saturation: VIM_SATURATION,
        }
    }
}

#[derive(Debug, Copy, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct DispatcherConfig {
    pub layers: LayerConfig,
    pub light: VimLightConfig,
}
