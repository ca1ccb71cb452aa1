use image::Rgb;
use image::RgbImage;

/// Sets a pixel if (x, y) lies inside the image.
pub fn put_pixel_clipped(
    img: &mut RgbImage,
    x: i64,
    y: i64,
    color: Rgb<u8>,
) {
    if x >= 0 && y >= 0 && (x as u64) < img.width() as u64 && (y as u64) < img.height() as u64 {
        img.put_pixel(x as u32, y as u32, color);
    }
}

pub fn fill_rect(
    img: &mut RgbImage,
    x: i64,
    y: i64,
    width: u32,
    height: u32,
    color: Rgb<u8>,
) {
    for dy in 0..height as i64 {
        for dx in 0..width as i64 {
            put_pixel_clipped(img, x + dx, y + dy, color);
        }
    }
}

/// Bresenham line between two points, endpoints included.
pub fn draw_line(
    img: &mut RgbImage,
    (x0, y0): (i64, i64),
    (x1, y1): (i64, i64),
    color: Rgb<u8>,
) {
    let dx = (x1 - x0).abs();
    let dy = -(y1 - y0).abs();
    let step_x = if x0 < x1 { 1 } else { -1 };
    let step_y = if y0 < y1 { 1 } else { -1 };
    let mut err = dx + dy;
    let (mut x, mut y) = (x0, y0);

    loop {
        put_pixel_clipped(img, x, y, color);
        if x == x1 && y == y1 {
            break;
        }
        let doubled = 2 * err;
        if doubled >= dy {
            err += dy;
            x += step_x;
        }
        if doubled <= dx {
            err += dx;
            y += step_y;
        }
    }
}

/// A line `thickness` pixels wide, grown downward and rightward from the
/// ideal path.
pub fn draw_thick_line(
    img: &mut RgbImage,
    from: (i64, i64),
    to: (i64, i64),
    color: Rgb<u8>,
    thickness: u32,
) {
    for offset in 0..thickness.max(1) as i64 {
        draw_line(img, (from.0, from.1 + offset), (to.0, to.1 + offset), color);
        draw_line(img, (from.0 + offset, from.1), (to.0 + offset, to.1), color);
    }
}

/// Square marker centred on (x, y).
pub fn draw_marker(
    img: &mut RgbImage,
    (x, y): (i64, i64),
    radius: u32,
    color: Rgb<u8>,
) {
    let r = radius as i64;
    fill_rect(img, x - r, y - r, radius * 2 + 1, radius * 2 + 1, color);
}

pub fn draw_horizontal_line(
    img: &mut RgbImage,
    y: i64,
    x0: i64,
    x1: i64,
    color: Rgb<u8>,
) {
    let (start, end) = if x0 < x1 { (x0, x1) } else { (x1, x0) };
    for x in start..=end {
        put_pixel_clipped(img, x, y, color);
    }
}

pub fn draw_vertical_line(
    img: &mut RgbImage,
    x: i64,
    y0: i64,
    y1: i64,
    color: Rgb<u8>,
) {
    let (start, end) = if y0 < y1 { (y0, y1) } else { (y1, y0) };
    for y in start..=end {
        put_pixel_clipped(img, x, y, color);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const RED: Rgb<u8> = Rgb([255, 0, 0]);

    #[test]
    fn line_includes_both_endpoints() {
        let mut img = RgbImage::new(10, 10);
        draw_line(&mut img, (1, 8), (7, 2), RED);
        assert_eq!(img.get_pixel(1, 8), &RED);
        assert_eq!(img.get_pixel(7, 2), &RED);
    }

    #[test]
    fn out_of_bounds_pixels_are_ignored() {
        let mut img = RgbImage::new(4, 4);
        draw_line(&mut img, (-10, -10), (20, 20), RED);
        assert_eq!(img.get_pixel(3, 3), &RED);
    }
}
