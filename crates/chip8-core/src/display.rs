use crate::cpu::{Chip8State, SCREEN_HEIGHT, SCREEN_LINE_SIZE_IN_BYTES};

impl Chip8State {
    /// Whether logical pixel `(x, y)` is lit. `x < SCREEN_WIDTH`, `y < SCREEN_HEIGHT`.
    #[inline]
    pub fn pixel(&self, x: usize, y: usize) -> bool {
        let (byte, bit) = (x / 8, x % 8);
        (self.screen[y][byte] >> bit) & 0x1 != 0
    }

    #[inline]
    pub fn set_pixel(&mut self, x: usize, y: usize, value: bool) {
        let (byte, bit) = (x / 8, x % 8);
        let mask = 1u8 << bit;
        let line = &mut self.screen[y][byte];
        *line = (*line & !mask) | ((value as u8) << bit);
    }

    pub fn clear_screen(&mut self) {
        self.screen = [[0; SCREEN_LINE_SIZE_IN_BYTES]; SCREEN_HEIGHT];
    }
}
