use chip8_core::cpu::{SCREEN_HEIGHT, SCREEN_WIDTH};

use crate::machine::Machine;
use crate::palette::ResolvedPalette;

pub const BYTES_PER_PIXEL: usize = 4;

/// Output image size in pixels for an upscale factor.
pub fn output_size(scale: usize) -> (usize, usize) {
    (SCREEN_WIDTH * scale, SCREEN_HEIGHT * scale)
}

/// Byte length of a tightly packed output image (no padding between rows).
pub fn image_len(scale: usize) -> usize {
    let (width, height) = output_size(scale);
    width * height * BYTES_PER_PIXEL
}

/// Upscales the machine screen into `out` with nearest-neighbor sampling.
///
/// Output pixel `(i, j)` takes the color of logical pixel `(i / scale, j / scale)`
/// and lives at byte offset `(j * width + i) * 4`. Every byte of `out` is rewritten.
pub fn fill_image_buffer<M: Machine + ?Sized>(
    out: &mut [u8],
    machine: &M,
    colors: &ResolvedPalette,
    scale: usize,
) {
    assert!(scale > 0, "upscale factor must be positive");
    assert_eq!(out.len(), image_len(scale));

    let (width, _) = output_size(scale);
    for (row_index, row) in out.chunks_exact_mut(width * BYTES_PER_PIXEL).enumerate() {
        let y = row_index / scale;
        for (i, pixel) in row.chunks_exact_mut(BYTES_PER_PIXEL).enumerate() {
            let lit = machine.read_screen_pixel(i / scale, y);
            pixel.copy_from_slice(colors.color_for(lit));
        }
    }
}
