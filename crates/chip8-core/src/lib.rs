pub mod config;
pub mod cpu;
pub mod display;
pub mod execution;
pub mod keyboard;
pub mod memory;
pub mod opcode;

pub use config::{Color, EmuConfig, Palette};
pub use cpu::Chip8State;
pub use keyboard::KeyId;
