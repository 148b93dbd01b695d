use bitflags::bitflags;

use crate::cpu::Chip8State;

// Original keypad layout:
// 1  2  3  C
// 4  5  6  D
// 7  8  9  E
// A  0  B  F
pub type KeyId = u8;

pub const KEY_ID_COUNT: u8 = 16;

bitflags! {
    /// Pressed state of the 16 keypad keys; bit `n` is key `0xn`.
    #[derive(Copy, Clone, Debug, Default, Eq, PartialEq)]
    pub struct Keys: u16 {
        const KEY_0 = 1 << 0x0;
        const KEY_1 = 1 << 0x1;
        const KEY_2 = 1 << 0x2;
        const KEY_3 = 1 << 0x3;
        const KEY_4 = 1 << 0x4;
        const KEY_5 = 1 << 0x5;
        const KEY_6 = 1 << 0x6;
        const KEY_7 = 1 << 0x7;
        const KEY_8 = 1 << 0x8;
        const KEY_9 = 1 << 0x9;
        const KEY_A = 1 << 0xA;
        const KEY_B = 1 << 0xB;
        const KEY_C = 1 << 0xC;
        const KEY_D = 1 << 0xD;
        const KEY_E = 1 << 0xE;
        const KEY_F = 1 << 0xF;
    }
}

impl Keys {
    /// Flag for a single key, or `None` when `key` is outside the keypad.
    #[inline]
    pub fn from_id(key: KeyId) -> Option<Self> {
        if key < KEY_ID_COUNT {
            Some(Self::from_bits_retain(1 << key))
        } else {
            None
        }
    }
}

impl Chip8State {
    #[inline]
    pub fn is_key_pressed(&self, key: KeyId) -> bool {
        Keys::from_id(key).is_some_and(|flag| self.keys.contains(flag))
    }

    pub fn set_key(&mut self, key: KeyId, pressed: bool) {
        match Keys::from_id(key) {
            Some(flag) => self.keys.set(flag, pressed),
            None => log::warn!("ignoring state change for invalid key 0x{key:X}"),
        }
    }

    /// Lowest pressed key id. When several keys are held only one is reported.
    pub fn first_pressed_key(&self) -> Option<KeyId> {
        if self.keys.is_empty() {
            return None;
        }
        Some(self.keys.bits().trailing_zeros() as KeyId)
    }
}
