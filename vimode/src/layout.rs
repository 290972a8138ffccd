//! The default keymap of a TKL (tenkeyless) tsangan keyboard.
//!
//! Positions that don't exist on the board are `No` on every layer. The
//! layers are placed at the ids of the `[vim]` table, the base layer is 0.

use crate::action::KeyAction;
use crate::config::LayerConfig;
use crate::constants::{CONTROL_LAYER, DELETE_YANK_LAYER, FUNCTION_LAYER, NUMBER_LAYER, VIM_LAYER};
use crate::{a, c, k, layer, mo, rgb};

pub(crate) const COL: usize = 17;
pub(crate) const ROW: usize = 6;
pub(crate) const NUM_LAYER: usize = 6;

const ____: KeyAction = a!(Transparent);
const XXXX: KeyAction = a!(No);
const DY__: KeyAction = c!(SubCancel);

/// The keymap with the layer ids of `keyboard.toml`
pub const fn default_keymap() -> [[[KeyAction; COL]; ROW]; NUM_LAYER] {
    arrange(NUMBER_LAYER, FUNCTION_LAYER, CONTROL_LAYER, VIM_LAYER, DELETE_YANK_LAYER)
}

/// The keymap with the layers placed at given ids, `None` if they don't fit
pub fn keymap(layers: &LayerConfig) -> Option<[[[KeyAction; COL]; ROW]; NUM_LAYER]> {
    if !layers.fits(NUM_LAYER) {
        warn!("Layers {:?} don't fit the default keymap", layers);
        return None;
    }
    Some(arrange(
        layers.number,
        layers.function,
        layers.control,
        layers.vim,
        layers.delete_yank,
    ))
}

const fn arrange(
    number: u8,
    function: u8,
    control: u8,
    vim: u8,
    delete_yank: u8,
) -> [[[KeyAction; COL]; ROW]; NUM_LAYER] {
    let mut keymap = [[[XXXX; COL]; ROW]; NUM_LAYER];
    keymap[0] = base_layer(function, control);
    keymap[number as usize] = NUMBER;
    keymap[function as usize] = FUNCTION;
    keymap[control as usize] = CONTROL;
    keymap[vim as usize] = VIM;
    keymap[delete_yank as usize] = DELETE_YANK;
    keymap
}

#[rustfmt::skip]
const fn base_layer(function: u8, control: u8) -> [[KeyAction; COL]; ROW] {
    layer!([
    [k!(Escape), k!(F1), k!(F2), k!(F3), k!(F4), k!(F5), k!(F6), k!(F7), k!(F8), k!(F9), k!(F10), k!(F11), k!(F12), XXXX, k!(PrintScreen), k!(ScrollLock), k!(MediaPlayPause)],
    [k!(Grave), k!(Kc1), k!(Kc2), k!(Kc3), k!(Kc4), k!(Kc5), k!(Kc6), k!(Kc7), k!(Kc8), k!(Kc9), k!(Kc0), k!(Minus), k!(Equal), k!(Backspace), k!(Insert), k!(Home), k!(AudioVolUp)],
    [k!(Tab), k!(Q), k!(W), k!(E), k!(R), k!(T), k!(Y), k!(U), k!(I), k!(O), k!(P), k!(LeftBracket), k!(RightBracket), k!(Backslash), k!(Delete), k!(End), k!(AudioVolDown)],
    [k!(Escape), k!(A), k!(S), k!(D), k!(F), k!(G), k!(H), k!(J), k!(K), k!(L), k!(Semicolon), k!(Quote), XXXX, k!(Enter), XXXX, XXXX, XXXX],
    [k!(LShift), k!(Z), k!(X), k!(C), k!(V), k!(B), k!(N), k!(M), k!(Comma), k!(Dot), k!(Slash), k!(RShift), XXXX, XXXX, XXXX, k!(Up), XXXX],
    [k!(LCtrl), k!(LGui), k!(LAlt), XXXX, XXXX, XXXX, k!(Space), XXXX, XXXX, XXXX, mo!(function), mo!(function), mo!(control), XXXX, k!(Left), k!(Down), k!(Right)]
])
}

/// Numpad on the navigation cluster
#[rustfmt::skip]
const NUMBER: [[KeyAction; COL]; ROW] = layer!([
    [____, ____, ____, ____, ____, ____, ____, ____, ____, ____, ____, ____, ____, XXXX, k!(Kc7), k!(Kc8), k!(Kc9)],
    [____, ____, ____, ____, ____, ____, ____, ____, ____, ____, ____, ____, ____, ____, k!(Kc4), k!(Kc5), k!(Kc6)],
    [____, ____, ____, ____, ____, ____, ____, ____, ____, ____, ____, ____, ____, ____, k!(Kc1), k!(Kc2), k!(Kc3)],
    [____, ____, ____, ____, ____, ____, ____, ____, ____, ____, ____, ____, XXXX, ____, XXXX, XXXX, XXXX],
    [____, ____, ____, ____, ____, ____, ____, ____, ____, ____, ____, ____, XXXX, XXXX, XXXX, ____, XXXX],
    [____, ____, ____, XXXX, XXXX, XXXX, ____, XXXX, XXXX, XXXX, ____, k!(Dot), k!(Kc0), XXXX, ____, ____, ____]
]);

/// Held with Fn: lighting, vim mode entry and editing shortcuts
#[rustfmt::skip]
const FUNCTION: [[KeyAction; COL]; ROW] = layer!([
    [a!(Bootloader), c!(PresetHeatmap), c!(PresetWhite), c!(PresetDracula), c!(PresetRed), c!(PresetFractal), ____, ____, ____, ____, ____, ____, ____, XXXX, ____, ____, ____],
    [____, ____, ____, ____, ____, ____, ____, ____, ____, ____, k!(Home), ____, ____, ____, rgb!(Toggle), rgb!(HueUp), rgb!(SatUp)],
    [k!(Enter), ____, c!(NextWord), ____, ____, ____, c!(VimYank), c!(Undo), ____, c!(NewLine), c!(Paste), ____, ____, ____, rgb!(ModeForward), rgb!(HueDown), rgb!(SatDown)],
    [c!(VimMode), k!(End), ____, c!(VimDelete), ____, ____, k!(Left), k!(Down), k!(Up), k!(Right), ____, ____, XXXX, c!(AuxToggle), XXXX, XXXX, XXXX],
    [c!(LeftShift), k!(Backspace), k!(Delete), ____, ____, c!(BackWord), ____, ____, c!(TabLeft), c!(TabRight), ____, c!(RightShift), XXXX, XXXX, XXXX, rgb!(ValUp), XXXX],
    [____, ____, ____, XXXX, XXXX, XXXX, ____, XXXX, XXXX, XXXX, ____, ____, c!(NumToggle), XXXX, rgb!(ModeReverse), rgb!(ValDown), rgb!(ModeForward)]
]);

/// Held with the right Ctrl position: media and desktops
#[rustfmt::skip]
const CONTROL: [[KeyAction; COL]; ROW] = layer!([
    [a!(Bootloader), ____, ____, ____, ____, ____, ____, ____, ____, ____, ____, ____, ____, XXXX, ____, ____, k!(AudioMute)],
    [____, ____, ____, ____, ____, ____, ____, ____, ____, ____, ____, ____, ____, ____, ____, ____, k!(MediaNextTrack)],
    [____, ____, ____, ____, ____, ____, ____, ____, ____, ____, ____, ____, ____, ____, k!(SystemSleep), ____, k!(MediaPrevTrack)],
    [____, ____, ____, ____, ____, ____, ____, ____, ____, ____, ____, ____, XXXX, c!(AuxToggle), XXXX, XXXX, XXXX],
    [____, ____, ____, ____, ____, ____, ____, ____, ____, ____, ____, ____, XXXX, XXXX, XXXX, k!(PageUp), XXXX],
    [____, ____, ____, XXXX, XXXX, XXXX, ____, XXXX, XXXX, XXXX, XXXX, XXXX, ____, XXXX, c!(DesktopLeft), k!(PageDown), c!(DesktopRight)]
]);

/// Vim mode
#[rustfmt::skip]
const VIM: [[KeyAction; COL]; ROW] = layer!([
    [c!(RegularMode), ____, ____, ____, ____, ____, ____, ____, ____, ____, ____, ____, ____, XXXX, ____, ____, ____],
    [____, ____, ____, ____, ____, ____, ____, ____, ____, ____, k!(Home), ____, ____, ____, ____, ____, ____],
    [____, ____, c!(NextWord), ____, ____, ____, c!(VimYank), c!(Undo), c!(RegularMode), c!(NewLine), c!(Paste), ____, ____, ____, ____, ____, ____],
    [c!(VimReset), c!(Append), ____, c!(VimDelete), ____, ____, k!(Left), k!(Down), k!(Up), k!(Right), ____, ____, XXXX, ____, XXXX, XXXX, XXXX],
    [c!(LeftShift), ____, k!(Delete), ____, ____, c!(BackWord), ____, ____, ____, ____, ____, c!(RightShift), XXXX, XXXX, XXXX, ____, XXXX],
    [____, ____, ____, XXXX, XXXX, XXXX, ____, XXXX, XXXX, XXXX, ____, ____, ____, XXXX, ____, ____, ____]
]);

/// Every key cancels the pending operator, except the motions
#[rustfmt::skip]
const DELETE_YANK: [[KeyAction; COL]; ROW] = layer!([
    [DY__, DY__, DY__, DY__, DY__, DY__, DY__, DY__, DY__, DY__, DY__, DY__, DY__, XXXX, DY__, DY__, DY__],
    [DY__, DY__, DY__, DY__, c!(SubLineEnd), DY__, DY__, DY__, DY__, DY__, c!(SubLineStart), DY__, DY__, DY__, DY__, DY__, DY__],
    [DY__, DY__, c!(SubNextWord), DY__, DY__, DY__, c!(YankLine), DY__, DY__, DY__, DY__, DY__, DY__, DY__, DY__, DY__, DY__],
    [DY__, DY__, DY__, c!(DeleteLine), DY__, DY__, DY__, DY__, DY__, DY__, DY__, DY__, XXXX, DY__, XXXX, XXXX, XXXX],
    [XXXX, DY__, DY__, DY__, DY__, c!(SubBackWord), DY__, DY__, DY__, DY__, DY__, XXXX, XXXX, XXXX, XXXX, DY__, XXXX],
    [DY__, DY__, DY__, XXXX, XXXX, XXXX, DY__, XXXX, XXXX, XXXX, DY__, DY__, DY__, XXXX, DY__, DY__, DY__]
]);
