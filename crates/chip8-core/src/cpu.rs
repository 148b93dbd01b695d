use crate::keyboard::Keys;

pub const V_REGISTER_COUNT: usize = 16;
pub const STACK_SIZE: usize = 16;
pub const MEMORY_SIZE_IN_BYTES: usize = 0x1000;

// Fonts
pub const FONT_TABLE_GLYPH_COUNT: usize = 16;
pub const GLYPH_SIZE_IN_BYTES: usize = 5;
const FONT_TABLE_OFFSET_IN_BYTES: usize = 0x0000;

// Display
pub const SCREEN_WIDTH: usize = 64;
pub const SCREEN_HEIGHT: usize = 32;
pub const SCREEN_LINE_SIZE_IN_BYTES: usize = SCREEN_WIDTH / 8;

// Memory
pub const MIN_PROGRAM_ADDRESS: u16 = 0x0200;
pub const MAX_PROGRAM_ADDRESS: u16 = 0x0FFF;

// Timings
pub const DELAY_TIMER_FREQUENCY: u32 = 60;
pub const INSTRUCTION_EXECUTION_FREQUENCY: u32 = 500;
pub const DELAY_TIMER_PERIOD_MS: u32 = 1000 / DELAY_TIMER_FREQUENCY;
pub const INSTRUCTION_EXECUTION_PERIOD_MS: u32 = 1000 / INSTRUCTION_EXECUTION_FREQUENCY;

const FONT_TABLE: [u8; GLYPH_SIZE_IN_BYTES * FONT_TABLE_GLYPH_COUNT] = [
    0xF0, 0x90, 0x90, 0x90, 0xF0, // 0
    0x20, 0x60, 0x20, 0x20, 0x70, // 1
    0xF0, 0x10, 0xF0, 0x80, 0xF0, // 2
    0xF0, 0x10, 0xF0, 0x10, 0xF0, // 3
    0x90, 0x90, 0xF0, 0x10, 0x10, // 4
    0xF0, 0x80, 0xF0, 0x10, 0xF0, // 5
    0xF0, 0x80, 0xF0, 0x90, 0xF0, // 6
    0xF0, 0x10, 0x20, 0x40, 0x40, // 7
    0xF0, 0x90, 0xF0, 0x90, 0xF0, // 8
    0xF0, 0x90, 0xF0, 0x10, 0xF0, // 9
    0xF0, 0x90, 0xF0, 0x90, 0x90, // A
    0xE0, 0x90, 0xE0, 0x90, 0xE0, // B
    0xF0, 0x80, 0x80, 0x80, 0xF0, // C
    0xE0, 0x90, 0x90, 0x90, 0xE0, // D
    0xF0, 0x80, 0xF0, 0x80, 0xF0, // E
    0xF0, 0x80, 0xF0, 0x80, 0x80, // F
];

pub type Screen = [[u8; SCREEN_LINE_SIZE_IN_BYTES]; SCREEN_HEIGHT];

pub struct Chip8State {
    pub pc: u16,
    pub sp: u8,
    pub stack: [u16; STACK_SIZE],
    pub v: [u8; V_REGISTER_COUNT],
    pub i: u16,

    pub delay_timer: u8,
    pub sound_timer: u8,

    /// Milliseconds not yet consumed by a 60 Hz timer tick.
    pub timer_accumulator_ms: u32,
    /// Milliseconds not yet consumed by a 500 Hz instruction slot.
    pub execution_accumulator_ms: u32,

    pub memory: [u8; MEMORY_SIZE_IN_BYTES],

    pub keys: Keys,
    /// Key set sampled when the last instruction retired.
    pub keys_prev: Keys,

    pub font_table_offsets: [u16; FONT_TABLE_GLYPH_COUNT],
    /// One bit per pixel, least significant bit is the leftmost pixel of each byte.
    pub screen: Screen,
}

impl Chip8State {
    pub fn new() -> Self {
        let mut state = Self {
            pc: MIN_PROGRAM_ADDRESS,
            sp: 0,
            stack: [0; STACK_SIZE],
            v: [0; V_REGISTER_COUNT],
            i: 0,
            delay_timer: 0,
            sound_timer: 0,
            timer_accumulator_ms: 0,
            execution_accumulator_ms: 0,
            memory: [0; MEMORY_SIZE_IN_BYTES],
            keys: Keys::empty(),
            keys_prev: Keys::empty(),
            font_table_offsets: [0; FONT_TABLE_GLYPH_COUNT],
            screen: [[0; SCREEN_LINE_SIZE_IN_BYTES]; SCREEN_HEIGHT],
        };
        state.load_font_table();
        state
    }

    fn load_font_table(&mut self) {
        let table_end = FONT_TABLE_OFFSET_IN_BYTES + FONT_TABLE.len();

        // The font must not spill into program addressable space.
        debug_assert!(table_end <= MIN_PROGRAM_ADDRESS as usize);

        self.memory[FONT_TABLE_OFFSET_IN_BYTES..table_end].copy_from_slice(&FONT_TABLE);

        for (glyph, offset) in self.font_table_offsets.iter_mut().enumerate() {
            *offset = (FONT_TABLE_OFFSET_IN_BYTES + GLYPH_SIZE_IN_BYTES * glyph) as u16;
        }
    }
}

impl Default for Chip8State {
    fn default() -> Self {
        Self::new()
    }
}
