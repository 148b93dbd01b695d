use chip8_core::config::EmuConfig;
use sdl2::event::Event;

use crate::clock::FrameClock;
use crate::error::PresentError;
use crate::frame::{fill_image_buffer, image_len};
use crate::input::{is_quit_event, sample_keypad, scancode_to_key};
use crate::machine::Machine;
use crate::palette::{resolve_palette, ResolvedPalette};
use crate::platform::{Platform, SdlPlatform};

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum LoopState {
    Initializing,
    Running,
    ShuttingDown,
    Terminated,
}

/// Fixed-order frame loop: events, keypad, clock, execution step, synthesis, present.
pub struct MainLoop<'c> {
    config: &'c EmuConfig,
    colors: ResolvedPalette,
    clock: FrameClock,
    state: LoopState,
    should_exit: bool,
    frames: u64,
}

impl<'c> MainLoop<'c> {
    pub fn new(config: &'c EmuConfig) -> Self {
        Self {
            config,
            colors: resolve_palette(&config.palette),
            clock: FrameClock::new(0),
            state: LoopState::Initializing,
            should_exit: false,
            frames: 0,
        }
    }

    pub fn state(&self) -> LoopState {
        self.state
    }

    pub fn frames(&self) -> u64 {
        self.frames
    }

    fn transition(&mut self, next: LoopState) {
        log::debug!("main loop: {:?} -> {:?}", self.state, next);
        self.state = next;
    }

    /// Records the reference timestamp once every resource is acquired.
    pub fn start(&mut self, start_ms: u32) {
        debug_assert_eq!(self.state(), LoopState::Initializing);
        self.clock = FrameClock::new(start_ms);
        self.transition(LoopState::Running);
    }

    /// Runs frames until a quit trigger is seen. The frame that sees it still
    /// completes; the exit check happens at the top of the next iteration.
    pub fn run<M, P>(&mut self, machine: &mut M, platform: &mut P) -> Result<(), PresentError>
    where
        M: Machine + ?Sized,
        P: Platform,
    {
        while !self.should_exit {
            self.run_frame(machine, platform)?;
        }
        self.transition(LoopState::ShuttingDown);
        Ok(())
    }

    pub fn run_frame<M, P>(&mut self, machine: &mut M, platform: &mut P) -> Result<(), PresentError>
    where
        M: Machine + ?Sized,
        P: Platform,
    {
        // Drain the whole queue so the keyboard snapshot below sees every event.
        while let Some(event) = platform.poll_event() {
            if is_quit_event(&event) {
                self.should_exit = true;
            } else if let Event::KeyDown {
                scancode: Some(scancode),
                repeat: false,
                ..
            } = event
            {
                if let Some(key) = scancode_to_key(scancode) {
                    log::trace!("keypad 0x{key:X} down");
                }
            }
        }

        sample_keypad(machine, |scancode| platform.is_scancode_pressed(scancode));

        let elapsed_ms = self.clock.tick(platform.ticks_ms());
        machine.execute_step(self.config, elapsed_ms);

        let scale = self.config.screen_scale as usize;
        let colors = &self.colors;
        platform.with_image_mut(|image| fill_image_buffer(image, &*machine, colors, scale));
        platform.present()?;

        self.frames += 1;
        Ok(())
    }

    pub fn finish(&mut self) {
        debug_assert_eq!(self.state(), LoopState::ShuttingDown);
        self.transition(LoopState::Terminated);
        log::info!("stopped after {} frames", self.frames());
    }
}

/// Opens the window and runs `machine` until the user quits.
///
/// The image buffer is owned here and outlives the platform, whose surface views it.
pub fn execute_main_loop<M>(machine: &mut M, config: &EmuConfig) -> Result<(), PresentError>
where
    M: Machine + ?Sized,
{
    let mut image = vec![0u8; image_len(config.screen_scale as usize)];
    let mut main_loop = MainLoop::new(config);

    let mut platform = SdlPlatform::new(&mut image, config.screen_scale)?;
    main_loop.start(platform.ticks_ms());

    main_loop.run(machine, &mut platform)?;

    platform.shutdown();
    main_loop.finish();
    Ok(())
}
