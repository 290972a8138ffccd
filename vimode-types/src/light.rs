use serde::{Deserialize, Serialize};

/// RGB matrix effects used by the lighting presets.
///
/// The discriminant is the effect id the lighting driver understands.
#[repr(u8)]
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum RgbEffect {
    None = 0,
    SolidColor = 1,
    BandSpiralVal = 9,
    CycleOutIn = 18,
    TypingHeatmap = 38,
    PixelFractal = 41,
}

/// Lighting driver keycodes, handled by the host firmware
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum RgbKeyCode {
    Toggle,
    ModeForward,
    ModeReverse,
    HueUp,
    HueDown,
    SatUp,
    SatDown,
    ValUp,
    ValDown,
}

/// A color in the lighting driver's HSV space, 0 ~ 255 for each channel
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Hsv {
    pub h: u8,
    pub s: u8,
    pub v: u8,
}

impl Hsv {
    pub const WHITE: Self = Self::new(0, 0, 255);
    pub const RED: Self = Self::new(0, 255, 255);
    pub const CYAN: Self = Self::new(128, 255, 255);
    pub const GOLDENROD: Self = Self::new(30, 218, 218);
    pub const SPRING_GREEN: Self = Self::new(106, 255, 255);

    pub const fn new(h: u8, s: u8, v: u8) -> Self {
        Self { h, s, v }
    }
}

/// Lighting configuration copied out of the driver, written back when a mode exits.
///
/// `mode` is kept as the raw effect id, the driver may run effects that are
/// not listed in [`RgbEffect`].
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct LightingSnapshot {
    pub enabled: bool,
    pub mode: u8,
    pub hsv: Hsv,
}

impl LightingSnapshot {
    pub const fn new(enabled: bool, mode: u8, hsv: Hsv) -> Self {
        Self { enabled, mode, hsv }
    }
}
