use std::path::Path;
use std::{env, fs};

use const_gen::*;
use vimode_config::{KeyboardTomlConfig, VimConfig};

/// Layers of `layout::default_keymap`
const LAYOUT_LAYER_NUM: u8 = 6;

fn main() {
    println!("cargo:rerun-if-changed=build.rs");
    println!("cargo:rerun-if-env-changed=KEYBOARD_TOML_PATH");

    // Read keyboard.toml if it's present
    let user_toml = if let Ok(toml_path) = env::var("KEYBOARD_TOML_PATH") {
        println!("cargo:rerun-if-changed={toml_path}");
        KeyboardTomlConfig::load(&toml_path).unwrap_or_else(|e| panic!("Invalid KEYBOARD_TOML_PATH file: {e}"))
    } else {
        KeyboardTomlConfig::default()
    };

    // The default layout places its layers at the configured ids
    user_toml
        .vim
        .validate_layer_num(LAYOUT_LAYER_NUM)
        .unwrap_or_else(|e| panic!("Invalid KEYBOARD_TOML_PATH file: {e}"));

    let constants = get_constants_str(user_toml.vim);

    // Write to constants.rs file
    let out_dir = env::var("OUT_DIR").expect("OUT_DIR is set by cargo");
    let dest_path = Path::new(&out_dir).join("constants.rs");
    fs::write(&dest_path, constants).expect("Failed to write constants.rs file");
}

fn get_constants_str(vim: VimConfig) -> String {
    [
        const_declaration!(pub(crate) NUMBER_LAYER = vim.number_layer),
        const_declaration!(pub(crate) FUNCTION_LAYER = vim.function_layer),
        const_declaration!(pub(crate) CONTROL_LAYER = vim.control_layer),
        const_declaration!(pub(crate) VIM_LAYER = vim.vim_layer),
        const_declaration!(pub(crate) DELETE_YANK_LAYER = vim.delete_yank_layer),
        const_declaration!(pub(crate) VIM_MIN_BRIGHTNESS = vim.min_brightness),
        const_declaration!(pub(crate) VIM_SATURATION = vim.saturation),
    ]
    .map(|s| "#[allow(clippy::redundant_static_lifetimes)]\n".to_owned() + s.as_str())
    .join("\n")
}
