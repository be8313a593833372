use gradient_fill::image::GrayImageU8;

/// Filled disc of value `fg` on a `bg` background; a pixel is inside when
/// `(x - cx)² + (y - cy)² <= r²`.
pub fn disc_u8(
    width: usize,
    height: usize,
    center: (usize, usize),
    radius: usize,
    fg: u8,
    bg: u8,
) -> GrayImageU8 {
    assert!(width > 0 && height > 0, "image dimensions must be positive");
    let (cx, cy) = (center.0 as i64, center.1 as i64);
    let r2 = (radius * radius) as i64;
    let mut img = GrayImageU8::filled(width, height, bg);
    for y in 0..height {
        for x in 0..width {
            let dx = x as i64 - cx;
            let dy = y as i64 - cy;
            if dx * dx + dy * dy <= r2 {
                img.set(x, y, fg);
            }
        }
    }
    img
}

/// The 10×10 reference disc: radius 4 at (5, 5), white on black.
#[allow(dead_code)]
pub fn reference_disc() -> GrayImageU8 {
    disc_u8(10, 10, (5, 5), 4, 255, 0)
}
