/// Create a layer in keymap
#[macro_export]
macro_rules! layer {
    ([$([$($x: expr), +]), +]) => {
        [$([$($x), +]),+]
    };
}

/// Create a normal key. For example, `k!(A)` represents `KeyAction::Key(HidKeyCode::A)`
#[macro_export]
macro_rules! k {
    ($k: ident) => {
        $crate::action::KeyAction::Key($crate::types::keycode::HidKeyCode::$k)
    };
}

/// Create a normal action: `KeyAction`
#[macro_export]
macro_rules! a {
    ($a: ident) => {
        $crate::action::KeyAction::$a
    };
}

/// Create a layer activate action. For example, `mo!(1)` activates layer 1.
#[macro_export]
macro_rules! mo {
    ($x: expr) => {
        $crate::action::KeyAction::LayerOn($x)
    };
}

/// Create a custom key handled by the modal dispatcher. For example, `c!(VimMode)`
#[macro_export]
macro_rules! c {
    ($c: ident) => {
        $crate::action::KeyAction::Custom($crate::types::custom::CustomKeyCode::$c)
    };
}

/// Create a lighting driver key. For example, `rgb!(HueUp)`
#[macro_export]
macro_rules! rgb {
    ($r: ident) => {
        $crate::action::KeyAction::Rgb($crate::types::light::RgbKeyCode::$r)
    };
}
