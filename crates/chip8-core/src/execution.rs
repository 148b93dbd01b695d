use crate::config::EmuConfig;
use crate::cpu::{
    Chip8State, DELAY_TIMER_PERIOD_MS, INSTRUCTION_EXECUTION_PERIOD_MS, MAX_PROGRAM_ADDRESS,
    MEMORY_SIZE_IN_BYTES, MIN_PROGRAM_ADDRESS,
};
use crate::memory::{is_valid_memory_range, MemoryUsage};
use crate::opcode::decode_instruction;

const ADDRESS_MASK: u16 = 0x0FFF;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProgramError {
    Empty,
    TooLarge { size: usize, max: usize },
}

/// Copies `program` into memory at the start of program space.
pub fn load_program(state: &mut Chip8State, program: &[u8]) -> Result<(), ProgramError> {
    if program.is_empty() {
        return Err(ProgramError::Empty);
    }

    let max = (MAX_PROGRAM_ADDRESS - MIN_PROGRAM_ADDRESS) as usize + 1;
    let fits = u16::try_from(program.len())
        .is_ok_and(|size| is_valid_memory_range(MIN_PROGRAM_ADDRESS, size, MemoryUsage::Write));
    if !fits {
        return Err(ProgramError::TooLarge {
            size: program.len(),
            max,
        });
    }

    let begin = MIN_PROGRAM_ADDRESS as usize;
    state.memory[begin..begin + program.len()].copy_from_slice(program);
    Ok(())
}

/// Fetches the big-endian instruction word at PC.
pub fn load_next_instruction(state: &Chip8State) -> u16 {
    let pc = (state.pc & ADDRESS_MASK) as usize;
    let hi = state.memory[pc] as u16;
    let lo = state.memory[(pc + 1) % MEMORY_SIZE_IN_BYTES] as u16;
    (hi << 8) | lo
}

/// Advances the machine by `delta_time_ms` of wall-clock time.
pub fn execute_step(config: &EmuConfig, state: &mut Chip8State, delta_time_ms: u32) {
    let instructions_to_execute = update_timers(state, delta_time_ms);

    for _ in 0..instructions_to_execute {
        let instruction = load_next_instruction(state);
        execute_instruction(config, state, instruction);
    }
}

/// Ticks the 60 Hz timers and returns how many 500 Hz instruction slots elapsed.
fn update_timers(state: &mut Chip8State, delta_time_ms: u32) -> u32 {
    state.timer_accumulator_ms = state.timer_accumulator_ms.saturating_add(delta_time_ms);

    let ticks = state.timer_accumulator_ms / DELAY_TIMER_PERIOD_MS;
    let ticks = u8::try_from(ticks).unwrap_or(u8::MAX);
    state.delay_timer = state.delay_timer.saturating_sub(ticks);
    state.sound_timer = state.sound_timer.saturating_sub(ticks);
    state.timer_accumulator_ms %= DELAY_TIMER_PERIOD_MS;

    state.execution_accumulator_ms = state
        .execution_accumulator_ms
        .saturating_add(delta_time_ms);

    let slots = state.execution_accumulator_ms / INSTRUCTION_EXECUTION_PERIOD_MS;
    state.execution_accumulator_ms %= INSTRUCTION_EXECUTION_PERIOD_MS;
    slots
}

fn execute_instruction(config: &EmuConfig, state: &mut Chip8State, instruction: u16) {
    let pc = state.pc;

    match decode_instruction(instruction) {
        Ok(op) => {
            if config.debug_mode {
                log::debug!("0x{pc:03X}: {instruction:04X}  {op}");
            }
        }
        Err(e) => log::error!("0x{pc:03X}: {e}"),
    }

    state.pc = pc.wrapping_add(2) & ADDRESS_MASK;
    state.keys_prev = state.keys;
}
