use sdl2::pixels::PixelFormatEnum;
use sdl2::render::{Canvas, TextureCreator};
use sdl2::surface::Surface;
use sdl2::video::{Window, WindowContext};
use sdl2::VideoSubsystem;

use crate::error::PresentError;
use crate::frame::{output_size, BYTES_PER_PIXEL};

pub const WINDOW_TITLE: &str = "CHIP-8 Emulator";
const WINDOW_X: i32 = 100;
const WINDOW_Y: i32 = 100;

/// 32-bit B, G, R, A in memory; resolves to the matching packed format for the
/// target's endianness.
const SURFACE_FORMAT: PixelFormatEnum = PixelFormatEnum::BGRA32;

/// Window, renderer and a surface viewing the caller's image buffer.
///
/// The surface borrows the image for `'a` and never copies it, so the buffer can
/// neither move nor be freed while the presenter is alive. Fields drop in
/// declaration order: surface, then renderer, then window.
pub struct Presenter<'a> {
    surface: Surface<'a>,
    texture_creator: TextureCreator<WindowContext>,
    canvas: Canvas<Window>,
}

impl<'a> Presenter<'a> {
    pub fn new(
        video: &VideoSubsystem,
        image: &'a mut [u8],
        scale: u32,
    ) -> Result<Self, PresentError> {
        let (width, height) = output_size(scale as usize);
        let (width, height) = (width as u32, height as u32);

        let window = video
            .window(WINDOW_TITLE, width, height)
            .position(WINDOW_X, WINDOW_Y)
            .build()
            .map_err(|e| PresentError::Window(e.to_string()))?;

        let canvas = window
            .into_canvas()
            .accelerated()
            .build()
            .map_err(|e| PresentError::Renderer(e.to_string()))?;
        let texture_creator = canvas.texture_creator();

        let pitch = width * BYTES_PER_PIXEL as u32;
        let surface = Surface::from_data(image, width, height, pitch, SURFACE_FORMAT)
            .map_err(PresentError::Surface)?;

        log::debug!(
            "presenter ready: {width}x{height} window, {:?} surface",
            SURFACE_FORMAT
        );

        Ok(Self {
            surface,
            texture_creator,
            canvas,
        })
    }

    /// Gives `f` the surface's backing bytes.
    pub fn with_image_mut<R>(&mut self, f: impl FnOnce(&mut [u8]) -> R) -> R {
        self.surface.with_lock_mut(f)
    }

    /// Uploads the surface to a fresh texture, draws it over the whole target and
    /// presents. The texture is destroyed before returning.
    pub fn present(&mut self) -> Result<(), PresentError> {
        let texture = self
            .texture_creator
            .create_texture_from_surface(&self.surface)
            .map_err(|e| PresentError::Texture(e.to_string()))?;

        self.canvas.clear();
        self.canvas
            .copy(&texture, None, None)
            .map_err(PresentError::Render)?;
        self.canvas.present();

        drop(texture);
        Ok(())
    }

    pub fn shutdown(self) {
        let Self {
            surface,
            texture_creator,
            canvas,
        } = self;

        drop(surface);
        log::debug!("surface released");
        drop(texture_creator);
        drop(canvas);
        log::debug!("renderer and window released");
    }
}
