use chip8_core::config::{Color, Palette};

/// One output pixel in surface byte order (B, G, R, A).
pub type PixelBytes = [u8; 4];

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct ResolvedPalette {
    pub primary: PixelBytes,
    pub secondary: PixelBytes,
}

impl ResolvedPalette {
    #[inline]
    pub fn color_for(&self, lit: bool) -> &PixelBytes {
        if lit {
            &self.primary
        } else {
            &self.secondary
        }
    }
}

/// Converts a normalized channel to a byte. Out-of-range inputs saturate; callers
/// are expected to pass values in `[0, 1]`.
#[inline]
fn channel_to_u8(channel: f32) -> u8 {
    (channel * 255.0).round() as u8
}

pub fn color_to_bgra(color: &Color) -> PixelBytes {
    [
        channel_to_u8(color.b),
        channel_to_u8(color.g),
        channel_to_u8(color.r),
        u8::MAX,
    ]
}

pub fn resolve_palette(palette: &Palette) -> ResolvedPalette {
    ResolvedPalette {
        primary: color_to_bgra(&palette.primary),
        secondary: color_to_bgra(&palette.secondary),
    }
}
