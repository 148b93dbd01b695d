use chip8_core::config::EmuConfig;
use chip8_core::cpu::Chip8State;
use chip8_core::execution;
use chip8_core::keyboard::KeyId;

/// What the frontend needs from the virtual machine.
///
/// Calls are never reentrant; the loop holds the machine exclusively for each one.
pub trait Machine {
    /// Advances the machine by `elapsed_ms` of wall-clock time.
    fn execute_step(&mut self, config: &EmuConfig, elapsed_ms: u32);

    /// `x < SCREEN_WIDTH`, `y < SCREEN_HEIGHT`.
    fn read_screen_pixel(&self, x: usize, y: usize) -> bool;

    /// `key` is in `0x0..=0xF`.
    fn set_key_pressed(&mut self, key: KeyId, pressed: bool);
}

impl Machine for Chip8State {
    fn execute_step(&mut self, config: &EmuConfig, elapsed_ms: u32) {
        execution::execute_step(config, self, elapsed_ms);
    }

    #[inline]
    fn read_screen_pixel(&self, x: usize, y: usize) -> bool {
        self.pixel(x, y)
    }

    #[inline]
    fn set_key_pressed(&mut self, key: KeyId, pressed: bool) {
        self.set_key(key, pressed);
    }
}
