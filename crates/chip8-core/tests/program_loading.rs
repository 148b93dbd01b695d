use chip8_core::cpu::{Chip8State, MAX_PROGRAM_ADDRESS, MIN_PROGRAM_ADDRESS};
use chip8_core::execution::{load_next_instruction, load_program, ProgramError};

#[test]
fn program_is_copied_to_program_space() {
    let mut state = Chip8State::new();

    load_program(&mut state, &[0x12, 0x34, 0xAB]).unwrap();

    let base = MIN_PROGRAM_ADDRESS as usize;
    assert_eq!(&state.memory[base..base + 3], &[0x12, 0x34, 0xAB]);
    assert_eq!(state.memory[base + 3], 0x00);
}

#[test]
fn instructions_are_fetched_big_endian() {
    let mut state = Chip8State::new();
    load_program(&mut state, &[0xA2, 0xF0]).unwrap();

    assert_eq!(load_next_instruction(&state), 0xA2F0);
}

#[test]
fn rejects_empty_program() {
    let mut state = Chip8State::new();

    assert_eq!(load_program(&mut state, &[]), Err(ProgramError::Empty));
}

#[test]
fn accepts_program_filling_all_of_program_space() {
    let mut state = Chip8State::new();
    let size = (MAX_PROGRAM_ADDRESS - MIN_PROGRAM_ADDRESS) as usize + 1;

    load_program(&mut state, &vec![0xEE; size]).unwrap();

    assert_eq!(state.memory[MAX_PROGRAM_ADDRESS as usize], 0xEE);
}

#[test]
fn rejects_program_larger_than_program_space() {
    let mut state = Chip8State::new();
    let max = (MAX_PROGRAM_ADDRESS - MIN_PROGRAM_ADDRESS) as usize + 1;

    match load_program(&mut state, &vec![0u8; max + 1]) {
        Err(ProgramError::TooLarge { size, max: reported }) => {
            assert_eq!(size, max + 1);
            assert_eq!(reported, max);
        }
        other => panic!("expected size error, got {other:?}"),
    }
}

#[test]
fn rejects_program_longer_than_address_width() {
    let mut state = Chip8State::new();

    assert!(matches!(
        load_program(&mut state, &vec![0u8; 0x1_0000]),
        Err(ProgramError::TooLarge { .. })
    ));
}
