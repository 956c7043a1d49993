//! Drawing helpers for `pixels`' RGBA framebuffer.

use crate::core::data::colour::Colour;
use crate::core::data::pixel_rect::PixelRect;

pub const RGBA_CHANNELS: usize = 4;

/// Fills `rect`, clipped to the frame, with an opaque `colour`.
///
/// Does nothing if `frame` is shorter than `frame_width * frame_height`
/// pixels, which happens for one event while a resize is in flight.
pub fn fill_rgba_rect(
    frame: &mut [u8],
    frame_width: u32,
    frame_height: u32,
    rect: PixelRect,
    colour: Colour,
) {
    let rect = rect.clipped_to(frame_width, frame_height);
    let stride = frame_width as usize * RGBA_CHANNELS;
    if rect.is_empty() || frame.len() < stride * frame_height as usize {
        return;
    }

    let left = rect.top_left().x as usize * RGBA_CHANNELS;
    let right = rect.right() as usize * RGBA_CHANNELS;
    let [r, g, b] = colour.to_rgb();
    let rgba = [r, g, b, 255];

    for row in frame
        .chunks_exact_mut(stride)
        .skip(rect.top_left().y as usize)
        .take(rect.height() as usize)
    {
        for pixel in row[left..right].chunks_exact_mut(RGBA_CHANNELS) {
            pixel.copy_from_slice(&rgba);
        }
    }
}
