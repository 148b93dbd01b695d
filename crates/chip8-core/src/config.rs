pub const DEFAULT_SCREEN_SCALE: u32 = 16;

/// Normalized RGB color; channels are expected in `[0, 1]`.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
}

impl Color {
    pub const fn rgb(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b }
    }
}

/// Two-color palette. `primary` is used for lit pixels, `secondary` for the background.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Palette {
    pub primary: Color,
    pub secondary: Color,
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            primary: Color::rgb(1.0, 1.0, 1.0),
            secondary: Color::rgb(0.14, 0.14, 0.14),
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct EmuConfig {
    /// Trace every retired instruction at debug level.
    pub debug_mode: bool,
    pub palette: Palette,
    /// Integer upscale factor applied to both screen dimensions. Must be positive.
    pub screen_scale: u32,
}

impl Default for EmuConfig {
    fn default() -> Self {
        Self {
            debug_mode: false,
            palette: Palette::default(),
            screen_scale: DEFAULT_SCREEN_SCALE,
        }
    }
}
