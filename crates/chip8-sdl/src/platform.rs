use sdl2::event::Event;
use sdl2::keyboard::Scancode;
use sdl2::{EventPump, Sdl, TimerSubsystem, VideoSubsystem};

use crate::error::PresentError;
use crate::video::Presenter;

/// Everything the main loop touches outside the machine: events, keyboard,
/// monotonic time and the presentation surface.
pub trait Platform {
    /// Next pending event, or `None` once the queue is drained.
    fn poll_event(&mut self) -> Option<Event>;

    /// Current keyboard snapshot, reflecting every event polled so far.
    fn is_scancode_pressed(&self, scancode: Scancode) -> bool;

    /// Monotonic milliseconds; wraps at `u32::MAX`.
    fn ticks_ms(&mut self) -> u32;

    /// Gives `f` mutable access to the image buffer behind the surface.
    fn with_image_mut<R>(&mut self, f: impl FnOnce(&mut [u8]) -> R) -> R;

    fn present(&mut self) -> Result<(), PresentError>;
}

/// SDL-backed platform. Owns the SDL context and tears it down last.
pub struct SdlPlatform<'a> {
    presenter: Presenter<'a>,
    event_pump: EventPump,
    timer: TimerSubsystem,
    video: VideoSubsystem,
    sdl: Sdl,
}

impl<'a> SdlPlatform<'a> {
    /// Initializes SDL and creates window, renderer and surface, in that order.
    pub fn new(image: &'a mut [u8], scale: u32) -> Result<Self, PresentError> {
        let sdl = sdl2::init().map_err(PresentError::Init)?;
        let video = sdl.video().map_err(PresentError::Init)?;
        let timer = sdl.timer().map_err(PresentError::Init)?;
        let presenter = Presenter::new(&video, image, scale)?;
        let event_pump = sdl.event_pump().map_err(PresentError::Init)?;

        log::info!("video driver: {}", video.current_video_driver());

        Ok(Self {
            presenter,
            event_pump,
            timer,
            video,
            sdl,
        })
    }

    /// Releases surface, renderer and window, then quits SDL.
    pub fn shutdown(self) {
        let Self {
            presenter,
            event_pump,
            timer,
            video,
            sdl,
        } = self;

        presenter.shutdown();
        drop(event_pump);
        drop(timer);
        drop(video);
        drop(sdl);
        log::debug!("SDL shut down");
    }
}

impl Platform for SdlPlatform<'_> {
    fn poll_event(&mut self) -> Option<Event> {
        self.event_pump.poll_event()
    }

    fn is_scancode_pressed(&self, scancode: Scancode) -> bool {
        self.event_pump
            .keyboard_state()
            .is_scancode_pressed(scancode)
    }

    fn ticks_ms(&mut self) -> u32 {
        self.timer.ticks()
    }

    fn with_image_mut<R>(&mut self, f: impl FnOnce(&mut [u8]) -> R) -> R {
        self.presenter.with_image_mut(f)
    }

    fn present(&mut self) -> Result<(), PresentError> {
        self.presenter.present()
    }
}
