use chip8_core::keyboard::{KeyId, KEY_ID_COUNT};
use sdl2::event::Event;
use sdl2::keyboard::{Keycode, Scancode};

use crate::machine::Machine;

/// Physical key to keypad mapping. Scancodes keep the layout positional across
/// keyboard layouts:
///
/// ```text
/// 1 2 3 4      1 2 3 C
/// Q W E R  ->  4 5 6 D
/// A S D F      7 8 9 E
/// Z X C V      A 0 B F
/// ```
pub const KEY_MAP: [(Scancode, KeyId); KEY_ID_COUNT as usize] = [
    (Scancode::Num1, 0x1),
    (Scancode::Num2, 0x2),
    (Scancode::Num3, 0x3),
    (Scancode::Num4, 0xC),
    (Scancode::Q, 0x4),
    (Scancode::W, 0x5),
    (Scancode::E, 0x6),
    (Scancode::R, 0xD),
    (Scancode::A, 0x7),
    (Scancode::S, 0x8),
    (Scancode::D, 0x9),
    (Scancode::F, 0xE),
    (Scancode::Z, 0xA),
    (Scancode::X, 0x0),
    (Scancode::C, 0xB),
    (Scancode::V, 0xF),
];

pub fn scancode_to_key(scancode: Scancode) -> Option<KeyId> {
    KEY_MAP
        .iter()
        .find(|(sc, _)| *sc == scancode)
        .map(|&(_, key)| key)
}

#[cfg(test)]
pub fn key_to_scancode(key: KeyId) -> Option<Scancode> {
    KEY_MAP
        .iter()
        .find(|(_, k)| *k == key)
        .map(|&(sc, _)| sc)
}

/// Copies the physical keyboard snapshot onto all 16 keypad keys.
pub fn sample_keypad<M, F>(machine: &mut M, is_pressed: F)
where
    M: Machine + ?Sized,
    F: Fn(Scancode) -> bool,
{
    for &(scancode, key) in &KEY_MAP {
        machine.set_key_pressed(key, is_pressed(scancode));
    }
}

/// Window close, or Escape pressed.
pub fn is_quit_event(event: &Event) -> bool {
    matches!(
        event,
        Event::Quit { .. }
            | Event::KeyDown {
                keycode: Some(Keycode::Escape),
                ..
            }
    )
}
