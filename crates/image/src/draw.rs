use {crate::*, base::Vec2};

/// Radius of a keypoint marker, in pixels.
pub const MARKER_RADIUS: i32 = 4;

/// Fill color of a keypoint marker.
pub const MARKER_COLOR: [u8; 3] = [0, 255, 0];

fn set_pixel(image: &mut Image, x: usize, y: usize, color: [u8; 3]) {
    let i = (y * image.size.x + x) * 3;
    image.data[i..i + 3].copy_from_slice(&color);
}

/// Draw a filled circle on an `Rgb8` image, clipped to its bounds.
pub fn draw_filled_circle(image: &mut Image, center: Vec2<i32>, radius: i32, color: [u8; 3]) {
    if image.format != PixelFormat::Rgb8 || image.data.len() < image.size.area() * 3 {
        return;
    }
    let (width, height) = (image.size.x as i32, image.size.y as i32);
    let r2 = radius * radius;
    for dy in -radius..=radius {
        for dx in -radius..=radius {
            if dx * dx + dy * dy > r2 {
                continue;
            }
            let x = center.x.saturating_add(dx);
            let y = center.y.saturating_add(dy);
            if x >= 0 && x < width && y >= 0 && y < height {
                set_pixel(image, x as usize, y as usize, color);
            }
        }
    }
}

/// Return a copy of `frame` with a marker at every pixel coordinate in `points`.
///
/// The caller has already dropped low-confidence points and mapped the rest
/// into pixel space. A frame that is not `Rgb8` is decoded first.
pub fn render_points(frame: &Image, points: &[Vec2<f32>]) -> Result<Image, ImageError> {
    let mut out = match frame.format {
        PixelFormat::Rgb8 => frame.clone(),
        format => decode_rgb(format, frame.size, &frame.data)?,
    };
    for point in points {
        draw_filled_circle(&mut out, point.round_i32(), MARKER_RADIUS, MARKER_COLOR);
    }
    Ok(out)
}
