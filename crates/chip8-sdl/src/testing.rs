//! In-memory `Machine` and `Platform` used by the unit tests.

use std::collections::{HashSet, VecDeque};

use chip8_core::config::EmuConfig;
use chip8_core::cpu::{SCREEN_HEIGHT, SCREEN_WIDTH};
use chip8_core::keyboard::{KeyId, KEY_ID_COUNT};
use sdl2::event::Event;
use sdl2::keyboard::{Keycode, Mod, Scancode};

use crate::error::PresentError;
use crate::frame::image_len;
use crate::machine::Machine;
use crate::platform::Platform;

pub fn key_down(keycode: Keycode, scancode: Scancode) -> Event {
    Event::KeyDown {
        timestamp: 0,
        window_id: 0,
        keycode: Some(keycode),
        scancode: Some(scancode),
        keymod: Mod::NOMOD,
        repeat: false,
    }
}

pub struct FakeMachine {
    pub screen: [[bool; SCREEN_WIDTH]; SCREEN_HEIGHT],
    pub keys: [bool; KEY_ID_COUNT as usize],
    /// Elapsed milliseconds passed to each execution step.
    pub steps: Vec<u32>,
    /// Pressed-key bitmask observed by each execution step.
    pub keys_at_step: Vec<u16>,
    /// Pixel to light when the next step runs.
    pub light_on_step: Option<(usize, usize)>,
}

impl FakeMachine {
    pub fn new() -> Self {
        Self {
            screen: [[false; SCREEN_WIDTH]; SCREEN_HEIGHT],
            keys: [false; KEY_ID_COUNT as usize],
            steps: Vec::new(),
            keys_at_step: Vec::new(),
            light_on_step: None,
        }
    }

    pub fn set_lit(&mut self, x: usize, y: usize, lit: bool) {
        self.screen[y][x] = lit;
    }
}

impl Machine for FakeMachine {
    fn execute_step(&mut self, _config: &EmuConfig, elapsed_ms: u32) {
        self.steps.push(elapsed_ms);
        let mask = self
            .keys
            .iter()
            .enumerate()
            .filter(|&(_, &pressed)| pressed)
            .fold(0u16, |mask, (key, _)| mask | (1 << key));
        self.keys_at_step.push(mask);
        if let Some((x, y)) = self.light_on_step.take() {
            self.set_lit(x, y, true);
        }
    }

    fn read_screen_pixel(&self, x: usize, y: usize) -> bool {
        self.screen[y][x]
    }

    fn set_key_pressed(&mut self, key: KeyId, pressed: bool) {
        self.keys[key as usize] = pressed;
    }
}

pub struct FakePlatform {
    events: VecDeque<Event>,
    pressed: HashSet<Scancode>,
    /// Scripted tick values; once exhausted the clock advances 1 ms per read.
    pub ticks: VecDeque<u32>,
    now: u32,
    pub image: Vec<u8>,
    pub presented: usize,
    /// Queue a window-close event after this many presents.
    pub quit_after_frames: Option<usize>,
    pub fail_present: Option<PresentError>,
}

impl FakePlatform {
    pub fn new(scale: u32) -> Self {
        Self {
            events: VecDeque::new(),
            pressed: HashSet::new(),
            ticks: VecDeque::new(),
            now: 0,
            image: vec![0; image_len(scale as usize)],
            presented: 0,
            quit_after_frames: None,
            fail_present: None,
        }
    }

    pub fn push_event(&mut self, event: Event) {
        self.events.push_back(event);
    }

    pub fn pending_events(&self) -> usize {
        self.events.len()
    }
}

impl Platform for FakePlatform {
    fn poll_event(&mut self) -> Option<Event> {
        let event = self.events.pop_front()?;
        match event {
            Event::KeyDown {
                scancode: Some(sc), ..
            } => {
                self.pressed.insert(sc);
            }
            Event::KeyUp {
                scancode: Some(sc), ..
            } => {
                self.pressed.remove(&sc);
            }
            _ => {}
        }
        Some(event)
    }

    fn is_scancode_pressed(&self, scancode: Scancode) -> bool {
        self.pressed.contains(&scancode)
    }

    fn ticks_ms(&mut self) -> u32 {
        self.now = self.ticks.pop_front().unwrap_or(self.now + 1);
        self.now
    }

    fn with_image_mut<R>(&mut self, f: impl FnOnce(&mut [u8]) -> R) -> R {
        f(&mut self.image)
    }

    fn present(&mut self) -> Result<(), PresentError> {
        if let Some(e) = self.fail_present.take() {
            return Err(e);
        }
        self.presented += 1;
        if self.quit_after_frames == Some(self.presented) {
            self.push_event(Event::Quit { timestamp: 0 });
        }
        Ok(())
    }
}
