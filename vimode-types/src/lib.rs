//! # vimode types
//!
//! Fundamental type definitions shared by the vimode crates.
//!
//! ## Modules
//!
//! - [`keycode`] - HID keycodes and the en-US ascii table
//! - [`modifier`] - Modifier key combinations
//! - [`custom`] - Custom keycodes handled by the modal dispatcher
//! - [`mode`] - The modal input state
//! - [`light`] - RGB matrix effects, colors, driver keycodes and lighting snapshots

#![no_std]

pub mod custom;
pub mod keycode;
pub mod light;
pub mod mode;
pub mod modifier;
