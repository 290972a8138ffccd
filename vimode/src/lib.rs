//! # vimode
//!
//! A vim-like modal keymap for keyboard firmware. Custom keycodes switch
//! between regular, number and vim modes, every mode carries its own RGB
//! lighting preset, and editor commands are approximated by injecting
//! keystroke sequences into the host.
//!
//! The host firmware is reached through the traits in [`host`]. Events enter
//! either through [`dispatcher::ModalDispatcher`] directly, or through
//! [`keyboard::Keyboard`] which also owns the layer stack.

#![cfg_attr(not(test), no_std)]

// This mod MUST go first, so that the others see its macros.
#[macro_use]
pub(crate) mod fmt;

pub mod action;
pub mod command;
pub mod config;
pub mod dispatcher;
pub mod event;
pub mod host;
pub mod keyboard;
pub mod keymap;
pub mod keystroke;
pub mod layout;
pub mod layout_macro;
pub mod light;
pub mod report;

pub use vimode_types as types;

pub use crate::config::DispatcherConfig;
pub use crate::dispatcher::{ModalDispatcher, ModalState};
pub use crate::host::{Host, KeystrokeSender, LayerControl, RgbMatrix};
pub use crate::keyboard::{KeyOutcome, Keyboard};

pub(crate) mod constants {
    include!(concat!(env!("OUT_DIR"), "/constants.rs"));
}
