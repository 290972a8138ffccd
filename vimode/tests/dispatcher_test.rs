pub mod common;

use vimode::keystroke::Stroke;
use vimode::light::SnapshotSlot;
use vimode::types::modifier::ModifierCombination;
use vimode::{ModalDispatcher, RgbMatrix};
use vimode::types::custom::CustomKeyCode;
use vimode::types::keycode::HidKeyCode;
use vimode::types::light::{Hsv, LightingSnapshot, RgbEffect};
use vimode::types::mode::Mode;

use crate::common::RecordingHost;

const INITIAL: LightingSnapshot = LightingSnapshot::new(true, 1, Hsv::new(10, 20, 30));
const VIM_LIGHTING: LightingSnapshot = LightingSnapshot::new(true, RgbEffect::CycleOutIn as u8, Hsv::new(10, 240, 150));

const NUMBER_LAYER: u8 = 1;
const VIM_LAYER: u8 = 4;
const DELETE_YANK_LAYER: u8 = 5;

fn setup() -> (ModalDispatcher, RecordingHost) {
    (ModalDispatcher::default(), RecordingHost::with_lighting(INITIAL))
}

fn press(dispatcher: &mut ModalDispatcher, host: &mut RecordingHost, key: CustomKeyCode) {
    assert!(dispatcher.process(host, key.to_keycode(), true));
}

fn release(dispatcher: &mut ModalDispatcher, host: &mut RecordingHost, key: CustomKeyCode) {
    assert!(dispatcher.process(host, key.to_keycode(), false));
}

fn tap(dispatcher: &mut ModalDispatcher, host: &mut RecordingHost, key: CustomKeyCode) {
    press(dispatcher, host, key);
    release(dispatcher, host, key);
}

#[test]
fn test_non_custom_keycode_falls_through() {
    let (mut dispatcher, mut host) = setup();
    assert!(dispatcher.process(&mut host, HidKeyCode::A as u16, true));
    assert!(dispatcher.process(&mut host, 0xFFFF, false));
    assert_eq!(host.lighting(), INITIAL);
    assert!(host.active_layers().is_empty());
    assert!(host.strokes.is_empty());
    assert_eq!(dispatcher.state().mode(), Mode::Regular);
}

#[test]
fn test_vim_mode_round_trip() {
    let (mut dispatcher, mut host) = setup();

    press(&mut dispatcher, &mut host, CustomKeyCode::VimMode);
    // The lighting changes on press, the mode on release
    assert_eq!(host.lighting(), VIM_LIGHTING);
    assert_eq!(dispatcher.state().mode(), Mode::Regular);
    release(&mut dispatcher, &mut host, CustomKeyCode::VimMode);
    assert_eq!(dispatcher.state().mode(), Mode::Vim);
    assert_eq!(host.active_layers(), vec![VIM_LAYER]);
    assert_eq!(*dispatcher.state().snapshot(SnapshotSlot::Vim), INITIAL);

    tap(&mut dispatcher, &mut host, CustomKeyCode::RegularMode);
    assert_eq!(dispatcher.state().mode(), Mode::Regular);
    assert!(host.active_layers().is_empty());
    assert_eq!(host.lighting(), INITIAL);
    assert!(host.strokes.is_empty());
}

#[test]
fn test_vim_reset_does_not_save() {
    let (mut dispatcher, mut host) = setup();
    tap(&mut dispatcher, &mut host, CustomKeyCode::VimMode);
    host.hsv = Hsv::new(99, 0, 200);
    tap(&mut dispatcher, &mut host, CustomKeyCode::VimReset);
    assert_eq!(host.hsv, Hsv::new(99, 240, 200));
    assert_eq!(*dispatcher.state().snapshot(SnapshotSlot::Vim), INITIAL);
    assert_eq!(host.active_layers(), vec![VIM_LAYER]);
}

#[test]
fn test_number_mode_replaces_vim_layer() {
    let (mut dispatcher, mut host) = setup();
    tap(&mut dispatcher, &mut host, CustomKeyCode::NumMode);
    assert_eq!(dispatcher.state().mode(), Mode::Number);
    assert_eq!(host.active_layers(), vec![NUMBER_LAYER]);
    assert_eq!(host.mode, RgbEffect::SolidColor as u8);
    assert_eq!(host.hsv, Hsv::CYAN);

    tap(&mut dispatcher, &mut host, CustomKeyCode::VimMode);
    assert_eq!(dispatcher.state().mode(), Mode::Vim);
    assert_eq!(host.active_layers(), vec![VIM_LAYER]);

    tap(&mut dispatcher, &mut host, CustomKeyCode::NumMode);
    assert_eq!(host.active_layers(), vec![NUMBER_LAYER]);
}

#[test]
fn test_number_mode_shares_vim_slot() {
    let (mut dispatcher, mut host) = setup();
    tap(&mut dispatcher, &mut host, CustomKeyCode::NumMode);
    assert_eq!(*dispatcher.state().snapshot(SnapshotSlot::Vim), INITIAL);
    tap(&mut dispatcher, &mut host, CustomKeyCode::RegularMode);
    assert_eq!(host.lighting(), INITIAL);
    assert_eq!(dispatcher.state().mode(), Mode::Regular);
}

#[test]
fn test_num_toggle_twice() {
    let (mut dispatcher, mut host) = setup();

    press(&mut dispatcher, &mut host, CustomKeyCode::NumToggle);
    assert_eq!(host.hsv, Hsv::CYAN);
    assert_eq!(dispatcher.state().mode(), Mode::Regular);
    release(&mut dispatcher, &mut host, CustomKeyCode::NumToggle);
    assert_eq!(dispatcher.state().mode(), Mode::Number);
    assert_eq!(host.active_layers(), vec![NUMBER_LAYER]);

    tap(&mut dispatcher, &mut host, CustomKeyCode::NumToggle);
    assert_eq!(dispatcher.state().mode(), Mode::Regular);
    assert!(host.active_layers().is_empty());
    assert_eq!(host.lighting(), INITIAL);
}

#[test]
fn test_num_toggle_in_vim_mode_does_nothing() {
    let (mut dispatcher, mut host) = setup();
    tap(&mut dispatcher, &mut host, CustomKeyCode::VimMode);
    tap(&mut dispatcher, &mut host, CustomKeyCode::NumToggle);
    assert_eq!(dispatcher.state().mode(), Mode::Vim);
    assert_eq!(host.active_layers(), vec![VIM_LAYER]);
    assert_eq!(host.lighting(), VIM_LIGHTING);
}

#[test]
fn test_aux_toggle_twice() {
    let (mut dispatcher, mut host) = setup();

    press(&mut dispatcher, &mut host, CustomKeyCode::AuxToggle);
    assert_eq!(host.hsv, Hsv::GOLDENROD);
    assert!(!dispatcher.state().aux_enabled());
    release(&mut dispatcher, &mut host, CustomKeyCode::AuxToggle);
    assert!(dispatcher.state().aux_enabled());

    tap(&mut dispatcher, &mut host, CustomKeyCode::AuxToggle);
    assert!(!dispatcher.state().aux_enabled());
    assert_eq!(host.lighting(), INITIAL);
    assert_eq!(dispatcher.state().mode(), Mode::Regular);
}

#[test]
fn test_shift_flags() {
    let (mut dispatcher, mut host) = setup();
    tap(&mut dispatcher, &mut host, CustomKeyCode::VimMode);

    press(&mut dispatcher, &mut host, CustomKeyCode::LeftShift);
    press(&mut dispatcher, &mut host, CustomKeyCode::RightShift);
    release(&mut dispatcher, &mut host, CustomKeyCode::LeftShift);
    assert!(dispatcher.state().vim_shift());
    release(&mut dispatcher, &mut host, CustomKeyCode::RightShift);
    assert!(!dispatcher.state().vim_shift());

    // Entering a mode clears a held shift
    press(&mut dispatcher, &mut host, CustomKeyCode::RightShift);
    tap(&mut dispatcher, &mut host, CustomKeyCode::VimReset);
    assert!(!dispatcher.state().vim_shift());
}

#[test]
fn test_append_and_enter() {
    let (mut dispatcher, mut host) = setup();

    tap(&mut dispatcher, &mut host, CustomKeyCode::VimMode);
    tap(&mut dispatcher, &mut host, CustomKeyCode::Append);
    assert_eq!(host.take_strokes(), vec![Stroke::tap(HidKeyCode::Right)]);
    assert_eq!(dispatcher.state().mode(), Mode::Regular);
    assert_eq!(host.lighting(), INITIAL);

    tap(&mut dispatcher, &mut host, CustomKeyCode::VimMode);
    press(&mut dispatcher, &mut host, CustomKeyCode::LeftShift);
    tap(&mut dispatcher, &mut host, CustomKeyCode::Append);
    assert_eq!(host.take_strokes(), vec![Stroke::tap(HidKeyCode::End)]);
    assert!(!dispatcher.state().vim_shift());

    tap(&mut dispatcher, &mut host, CustomKeyCode::VimMode);
    tap(&mut dispatcher, &mut host, CustomKeyCode::VimEnter);
    assert_eq!(host.take_strokes(), vec![Stroke::tap(HidKeyCode::Enter)]);
    assert!(host.active_layers().is_empty());
}

#[test]
fn test_delete_to_line_end() {
    let (mut dispatcher, mut host) = setup();
    tap(&mut dispatcher, &mut host, CustomKeyCode::VimMode);

    tap(&mut dispatcher, &mut host, CustomKeyCode::VimDelete);
    assert_eq!(dispatcher.state().mode(), Mode::Delete);
    assert_eq!(host.active_layers(), vec![VIM_LAYER, DELETE_YANK_LAYER]);
    assert_eq!(
        host.lighting(),
        LightingSnapshot::new(true, RgbEffect::BandSpiralVal as u8, Hsv::RED)
    );

    press(&mut dispatcher, &mut host, CustomKeyCode::SubLineEnd);
    assert_eq!(
        host.take_strokes(),
        vec![Stroke::shift(HidKeyCode::End), Stroke::ctrl(HidKeyCode::X)]
    );
    assert!(!dispatcher.state().clipboard_holds_line());
    assert_eq!(host.lighting(), VIM_LIGHTING);
    // Still in the sub-mode until the key is released
    assert_eq!(dispatcher.state().mode(), Mode::Delete);

    release(&mut dispatcher, &mut host, CustomKeyCode::SubLineEnd);
    assert_eq!(dispatcher.state().mode(), Mode::Vim);
    assert_eq!(host.active_layers(), vec![VIM_LAYER]);
    assert!(host.strokes.is_empty());
}

#[test]
fn test_yank_word_collapses_selection() {
    let (mut dispatcher, mut host) = setup();
    tap(&mut dispatcher, &mut host, CustomKeyCode::VimMode);
    tap(&mut dispatcher, &mut host, CustomKeyCode::VimYank);
    assert_eq!(host.hsv, Hsv::SPRING_GREEN);
    tap(&mut dispatcher, &mut host, CustomKeyCode::SubBackWord);
    assert_eq!(
        host.take_strokes(),
        vec![
            Stroke::ctrl_shift(HidKeyCode::Left),
            Stroke::ctrl(HidKeyCode::C),
            Stroke::tap(HidKeyCode::Right)
        ]
    );
    assert_eq!(dispatcher.state().mode(), Mode::Vim);
}

#[test]
fn test_cancel_restores_lighting() {
    let (mut dispatcher, mut host) = setup();
    tap(&mut dispatcher, &mut host, CustomKeyCode::VimMode);
    let before = host.lighting();

    tap(&mut dispatcher, &mut host, CustomKeyCode::VimYank);
    assert_ne!(host.lighting(), before);
    tap(&mut dispatcher, &mut host, CustomKeyCode::SubCancel);
    assert_eq!(host.lighting(), before);
    assert_eq!(host.active_layers(), vec![VIM_LAYER]);
    assert_eq!(dispatcher.state().mode(), Mode::Vim);
    assert!(host.strokes.is_empty());
}

#[test]
fn test_switching_operator_keeps_lighting_before_sub_mode() {
    let (mut dispatcher, mut host) = setup();
    tap(&mut dispatcher, &mut host, CustomKeyCode::VimMode);

    press(&mut dispatcher, &mut host, CustomKeyCode::VimDelete);
    press(&mut dispatcher, &mut host, CustomKeyCode::VimYank);
    assert_eq!(dispatcher.state().mode(), Mode::Yank);
    assert_eq!(*dispatcher.state().snapshot(SnapshotSlot::DeleteYank), VIM_LIGHTING);
    release(&mut dispatcher, &mut host, CustomKeyCode::VimYank);
    release(&mut dispatcher, &mut host, CustomKeyCode::VimDelete);

    tap(&mut dispatcher, &mut host, CustomKeyCode::SubCancel);
    assert_eq!(host.lighting(), VIM_LIGHTING);
    assert_eq!(dispatcher.state().mode(), Mode::Vim);
    assert_eq!(host.active_layers(), vec![VIM_LAYER]);
}

fn assert_single_mode_layer(dispatcher: &ModalDispatcher, host: &RecordingHost, keys: &[CustomKeyCode]) {
    let expected = match dispatcher.state().mode() {
        Mode::Regular => vec![],
        Mode::Number => vec![NUMBER_LAYER],
        Mode::Vim => vec![VIM_LAYER],
        other => panic!("{:?} after {:?}", other, keys),
    };
    assert_eq!(host.active_layers(), expected, "after {:?}", keys);
    assert!(!host.active_layers().contains(&DELETE_YANK_LAYER));
}

#[test]
fn test_mode_keys_leave_one_mode_layer() {
    let keys = [
        CustomKeyCode::VimMode,
        CustomKeyCode::VimReset,
        CustomKeyCode::NumMode,
        CustomKeyCode::NumToggle,
    ];
    for first in keys {
        for second in keys {
            for third in keys {
                let (mut dispatcher, mut host) = setup();
                let sequence = [first, second, third];
                for (i, key) in sequence.iter().enumerate() {
                    tap(&mut dispatcher, &mut host, *key);
                    assert_single_mode_layer(&dispatcher, &host, &sequence[..=i]);
                }
            }
        }
    }
}

#[test]
fn test_stray_release_outside_sub_mode() {
    let (mut dispatcher, mut host) = setup();
    tap(&mut dispatcher, &mut host, CustomKeyCode::VimMode);
    release(&mut dispatcher, &mut host, CustomKeyCode::SubCancel);
    release(&mut dispatcher, &mut host, CustomKeyCode::SubNextWord);
    assert_eq!(dispatcher.state().mode(), Mode::Vim);
    assert_eq!(host.active_layers(), vec![VIM_LAYER]);
}

#[test]
fn test_line_exits_on_press() {
    let (mut dispatcher, mut host) = setup();
    tap(&mut dispatcher, &mut host, CustomKeyCode::VimMode);
    tap(&mut dispatcher, &mut host, CustomKeyCode::VimDelete);

    press(&mut dispatcher, &mut host, CustomKeyCode::DeleteLine);
    assert_eq!(
        host.take_strokes(),
        vec![
            Stroke::tap(HidKeyCode::Home),
            Stroke::shift(HidKeyCode::End),
            Stroke::ctrl(HidKeyCode::X),
            Stroke::shift(HidKeyCode::Down),
            Stroke::shift(HidKeyCode::Home),
            Stroke::tap(HidKeyCode::Backspace),
        ]
    );
    assert!(dispatcher.state().clipboard_holds_line());
    assert_eq!(dispatcher.state().mode(), Mode::Vim);
    assert_eq!(host.active_layers(), vec![VIM_LAYER]);
    assert_eq!(host.lighting(), VIM_LIGHTING);

    release(&mut dispatcher, &mut host, CustomKeyCode::DeleteLine);
    assert_eq!(dispatcher.state().mode(), Mode::Vim);
}

#[test]
fn test_line_command_of_other_operator() {
    let (mut dispatcher, mut host) = setup();
    tap(&mut dispatcher, &mut host, CustomKeyCode::VimMode);
    tap(&mut dispatcher, &mut host, CustomKeyCode::VimYank);

    tap(&mut dispatcher, &mut host, CustomKeyCode::DeleteLine);
    assert!(host.strokes.is_empty());
    assert!(!dispatcher.state().clipboard_holds_line());
    assert_eq!(dispatcher.state().mode(), Mode::Vim);
    assert_eq!(host.active_layers(), vec![VIM_LAYER]);
}

#[test]
fn test_paste_follows_clipboard_kind() {
    let (mut dispatcher, mut host) = setup();
    tap(&mut dispatcher, &mut host, CustomKeyCode::VimMode);

    tap(&mut dispatcher, &mut host, CustomKeyCode::VimYank);
    tap(&mut dispatcher, &mut host, CustomKeyCode::YankLine);
    assert!(dispatcher.state().clipboard_holds_line());
    host.take_strokes();

    tap(&mut dispatcher, &mut host, CustomKeyCode::Paste);
    assert_eq!(
        host.take_strokes(),
        vec![
            Stroke::tap(HidKeyCode::End),
            Stroke::shift(HidKeyCode::Enter),
            Stroke::ctrl(HidKeyCode::V)
        ]
    );

    press(&mut dispatcher, &mut host, CustomKeyCode::LeftShift);
    tap(&mut dispatcher, &mut host, CustomKeyCode::Paste);
    release(&mut dispatcher, &mut host, CustomKeyCode::LeftShift);
    assert_eq!(
        host.take_strokes(),
        vec![
            Stroke::tap(HidKeyCode::Home),
            Stroke::shift(HidKeyCode::Enter),
            Stroke::tap(HidKeyCode::Up),
            Stroke::ctrl(HidKeyCode::V)
        ]
    );

    tap(&mut dispatcher, &mut host, CustomKeyCode::VimYank);
    tap(&mut dispatcher, &mut host, CustomKeyCode::SubNextWord);
    assert!(!dispatcher.state().clipboard_holds_line());
    host.take_strokes();

    tap(&mut dispatcher, &mut host, CustomKeyCode::Paste);
    assert_eq!(
        host.take_strokes(),
        vec![Stroke::tap(HidKeyCode::Right), Stroke::ctrl(HidKeyCode::V)]
    );
}

#[test]
fn test_new_line_in_aux_mode() {
    let (mut dispatcher, mut host) = setup();
    tap(&mut dispatcher, &mut host, CustomKeyCode::AuxToggle);
    tap(&mut dispatcher, &mut host, CustomKeyCode::VimMode);

    tap(&mut dispatcher, &mut host, CustomKeyCode::NewLine);
    assert_eq!(
        host.take_strokes(),
        vec![Stroke::tap(HidKeyCode::End), Stroke::tap(HidKeyCode::Enter)]
    );

    press(&mut dispatcher, &mut host, CustomKeyCode::RightShift);
    tap(&mut dispatcher, &mut host, CustomKeyCode::NewLine);
    assert_eq!(
        host.take_strokes(),
        vec![
            Stroke::tap(HidKeyCode::Home),
            Stroke::tap(HidKeyCode::Enter),
            Stroke::tap(HidKeyCode::Up)
        ]
    );
}

#[test]
fn test_immediate_keys_and_presets() {
    let (mut dispatcher, mut host) = setup();

    tap(&mut dispatcher, &mut host, CustomKeyCode::TabLeft);
    tap(&mut dispatcher, &mut host, CustomKeyCode::DesktopRight);
    tap(&mut dispatcher, &mut host, CustomKeyCode::Undo);
    assert_eq!(
        host.take_strokes(),
        vec![
            Stroke::ctrl_shift(HidKeyCode::Tab),
            Stroke::chord(ModifierCombination::CTRL_GUI, HidKeyCode::Right),
            Stroke::ctrl(HidKeyCode::Z),
        ]
    );

    host.disable();
    tap(&mut dispatcher, &mut host, CustomKeyCode::PresetHeatmap);
    assert_eq!(
        host.lighting(),
        LightingSnapshot::new(true, RgbEffect::TypingHeatmap as u8, Hsv::RED)
    );
    tap(&mut dispatcher, &mut host, CustomKeyCode::PresetWhite);
    assert_eq!(
        host.lighting(),
        LightingSnapshot::new(true, RgbEffect::SolidColor as u8, Hsv::WHITE)
    );
    assert_eq!(dispatcher.state().mode(), Mode::Regular);
}
