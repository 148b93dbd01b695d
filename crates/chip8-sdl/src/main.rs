mod clock;
mod error;
mod frame;
mod input;
mod machine;
mod main_loop;
mod palette;
mod platform;
#[cfg(test)]
mod testing;
mod video;

use std::path::PathBuf;

use chip8_core::config::{EmuConfig, DEFAULT_SCREEN_SCALE};
use chip8_core::cpu::Chip8State;
use chip8_core::execution::load_program;
use clap::Parser;

#[derive(Parser, Debug)]
#[command(name = "chip8-sdl", version, about = "CHIP-8 emulator")]
struct Args {
    /// Path of the CHIP-8 ROM to load. A file picker opens when omitted.
    rom_path: Option<PathBuf>,

    /// Enable debug mode (per-instruction trace)
    #[arg(short, long)]
    debug: bool,

    /// Screen upscale factor
    #[arg(
        short,
        long,
        default_value_t = DEFAULT_SCREEN_SCALE,
        value_parser = clap::value_parser!(u32).range(1..=64)
    )]
    scale: u32,
}

fn init_logging(debug: bool) {
    let level = if debug {
        log::LevelFilter::Debug
    } else {
        log::LevelFilter::Info
    };
    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .init();
}

fn pick_rom() -> Option<PathBuf> {
    rfd::FileDialog::new()
        .set_title("Open CHIP-8 ROM")
        .add_filter("CHIP-8 ROM", &["ch8", "c8"])
        .pick_file()
}

fn main() -> Result<(), String> {
    let args = Args::parse();
    init_logging(args.debug);

    let rom_path = match args.rom_path {
        Some(path) => path,
        None => pick_rom().ok_or_else(|| "no ROM selected".to_string())?,
    };

    let rom = std::fs::read(&rom_path)
        .map_err(|e| format!("failed to read ROM {}: {e}", rom_path.display()))?;

    let config = EmuConfig {
        debug_mode: args.debug,
        screen_scale: args.scale,
        ..EmuConfig::default()
    };

    let mut state = Chip8State::new();
    load_program(&mut state, &rom).map_err(|e| format!("invalid ROM: {e:?}"))?;
    log::info!(
        "loaded {} ({} bytes), scale {}",
        rom_path.display(),
        rom.len(),
        config.screen_scale
    );

    main_loop::execute_main_loop(&mut state, &config).map_err(|e| e.to_string())
}
