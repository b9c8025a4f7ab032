use pixel_probe::{ChannelsAlpha, PixelBuffer};

/// Buffer filled with a single opaque color (`0xRRGGBB`).
pub fn uniform_rgba(width: usize, height: usize, color: u32) -> PixelBuffer {
    assert!(width > 0 && height > 0, "buffer dimensions must be positive");

    let mut buf = PixelBuffer::new(width, height);
    buf.fill(ChannelsAlpha::from_packed(0xFF00_0000 | color));
    buf
}

/// Raw RGBA bytes for a horizontal black-to-white gray ramp.
pub fn ramp_rgba(width: usize, height: usize) -> Vec<u8> {
    assert!(width > 1, "ramp needs at least two columns");

    let mut data = Vec::with_capacity(width * height * 4);
    for _y in 0..height {
        for x in 0..width {
            let v = (x * 255 / (width - 1)) as u8;
            data.extend_from_slice(&[v, v, v, 255]);
        }
    }
    data
}
