//! Keystroke sequences as HID keyboard reports.

use embassy_sync::blocking_mutex::raw::RawMutex;
use embassy_sync::channel::{Channel, TrySendError};
use vimode_types::keycode::{HidKeyCode, from_ascii};
use vimode_types::modifier::ModifierCombination;

use crate::host::KeystrokeSender;
use crate::keystroke::Stroke;

/// Boot protocol keyboard input report
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct KeyboardReport {
    pub modifier: u8,
    pub reserved: u8,
    pub leds: u8,
    pub keycodes: [u8; 6],
}

impl KeyboardReport {
    /// Report with the modifiers and the key held
    pub fn pressed(modifiers: ModifierCombination, key: HidKeyCode) -> Self {
        let mut report = KeyboardReport {
            modifier: modifiers.to_hid_modifier_bits(),
            ..Default::default()
        };
        if key.is_modifier() {
            report.modifier |= key.to_modifier_combination().to_hid_modifier_bits();
        } else if key != HidKeyCode::No {
            report.keycodes[0] = key as u8;
        }
        report
    }

    /// All keys released
    pub fn released() -> Self {
        KeyboardReport::default()
    }
}

/// Expand a sequence into press/release report pairs.
///
/// Text is typed with the en-US layout, shifted characters hold Left Shift.
/// Bytes without a key and system or consumer keys are skipped.
pub fn sequence_to_reports(sequence: &[Stroke], mut emit: impl FnMut(KeyboardReport)) {
    let mut tap = |modifiers: ModifierCombination, key: HidKeyCode| {
        if key.is_system_or_consumer() {
            warn!("{:?} can't be sent in a keyboard report", key);
            return;
        }
        emit(KeyboardReport::pressed(modifiers, key));
        emit(KeyboardReport::released());
    };
    for stroke in sequence {
        match *stroke {
            Stroke::Tap(modifiers, key) => tap(modifiers, key),
            Stroke::Text(text) => {
                for byte in text.bytes() {
                    let (key, shifted) = from_ascii(byte);
                    if key == HidKeyCode::No {
                        warn!("No key for ascii {}", byte);
                        continue;
                    }
                    let modifiers = if shifted {
                        ModifierCombination::SHIFT
                    } else {
                        ModifierCombination::NONE
                    };
                    tap(modifiers, key);
                }
            }
        }
    }
}

/// A [`KeystrokeSender`] feeding the host's report channel.
///
/// Never blocks, reports are dropped when the channel is full.
pub struct ReportChannelSender<'ch, M: RawMutex, const N: usize> {
    channel: &'ch Channel<M, KeyboardReport, N>,
}

impl<'ch, M: RawMutex, const N: usize> ReportChannelSender<'ch, M, N> {
    pub fn new(channel: &'ch Channel<M, KeyboardReport, N>) -> Self {
        Self { channel }
    }
}

impl<M: RawMutex, const N: usize> KeystrokeSender for ReportChannelSender<'_, M, N> {
    fn send(&mut self, sequence: &[Stroke]) {
        sequence_to_reports(sequence, |report| {
            if let Err(TrySendError::Full(report)) = self.channel.try_send(report) {
                warn!("Report channel is full, dropping {:?}", report);
            }
        });
    }
}
