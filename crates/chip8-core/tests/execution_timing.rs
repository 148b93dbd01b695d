use chip8_core::config::EmuConfig;
use chip8_core::cpu::{Chip8State, MIN_PROGRAM_ADDRESS};
use chip8_core::execution::execute_step;
use chip8_core::keyboard::Keys;

fn make_state() -> Chip8State {
    let mut state = Chip8State::new();
    // Fill program space with 6xkk (LD Vx, byte) so every fetch decodes.
    for addr in (MIN_PROGRAM_ADDRESS as usize..state.memory.len()).step_by(2) {
        state.memory[addr] = 0x60;
        state.memory[addr + 1] = 0x2A;
    }
    state
}

#[test]
fn retires_one_instruction_every_two_milliseconds() {
    let config = EmuConfig::default();
    let mut state = make_state();

    execute_step(&config, &mut state, 10);

    assert_eq!(state.pc, MIN_PROGRAM_ADDRESS + 5 * 2);
    assert_eq!(state.execution_accumulator_ms, 0);
}

#[test]
fn execution_remainder_carries_over_between_steps() {
    let config = EmuConfig::default();
    let mut state = make_state();

    execute_step(&config, &mut state, 3);
    assert_eq!(state.pc, MIN_PROGRAM_ADDRESS + 2);
    assert_eq!(state.execution_accumulator_ms, 1);

    execute_step(&config, &mut state, 1);
    assert_eq!(state.pc, MIN_PROGRAM_ADDRESS + 4);
    assert_eq!(state.execution_accumulator_ms, 0);
}

#[test]
fn zero_elapsed_time_is_a_no_op() {
    let config = EmuConfig::default();
    let mut state = make_state();
    state.delay_timer = 5;

    execute_step(&config, &mut state, 0);

    assert_eq!(state.pc, MIN_PROGRAM_ADDRESS);
    assert_eq!(state.delay_timer, 5);
}

#[test]
fn timers_tick_at_sixty_hertz() {
    let config = EmuConfig::default();
    let mut state = make_state();
    state.delay_timer = 10;
    state.sound_timer = 1;

    execute_step(&config, &mut state, 15);
    assert_eq!(state.delay_timer, 10);

    execute_step(&config, &mut state, 1);
    assert_eq!(state.delay_timer, 9);
    assert_eq!(state.sound_timer, 0);

    execute_step(&config, &mut state, 32);
    assert_eq!(state.delay_timer, 7);
    assert_eq!(state.sound_timer, 0);
}

#[test]
fn large_deltas_saturate_timers_at_zero() {
    let config = EmuConfig::default();
    let mut state = make_state();
    state.delay_timer = 200;

    execute_step(&config, &mut state, 60_000);

    assert_eq!(state.delay_timer, 0);
}

#[test]
fn pc_wraps_within_address_space() {
    let config = EmuConfig::default();
    let mut state = make_state();
    state.pc = 0x0FFE;

    execute_step(&config, &mut state, 2);

    assert_eq!(state.pc, 0x0000);
}

#[test]
fn retired_instruction_latches_previous_keys() {
    let config = EmuConfig::default();
    let mut state = make_state();
    state.set_key(0x7, true);

    execute_step(&config, &mut state, 1);
    assert_eq!(state.keys_prev, Keys::empty());

    execute_step(&config, &mut state, 1);
    assert_eq!(state.keys_prev, Keys::KEY_7);
}

#[test]
fn invalid_opcode_does_not_stop_execution() {
    let config = EmuConfig::default();
    let mut state = make_state();
    let pc = MIN_PROGRAM_ADDRESS as usize;
    state.memory[pc] = 0xFF;
    state.memory[pc + 1] = 0xFF;

    execute_step(&config, &mut state, 4);

    assert_eq!(state.pc, MIN_PROGRAM_ADDRESS + 4);
}
