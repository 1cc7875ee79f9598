use {
    base::Vec2,
    image::{Image, MARKER_COLOR, draw_filled_circle, render_points, rgb_to_u32},
};

#[test]
fn test_draw_filled_circle_basic() {
    let mut image = Image::filled(Vec2::new(20, 20), [0, 0, 0]);
    let blue = [0, 0, 255];
    draw_filled_circle(&mut image, Vec2::new(10, 10), 3, blue);

    assert_eq!(image.pixel(10, 10), Some(blue));
    assert_eq!(image.pixel(12, 10), Some(blue));
    assert_eq!(image.pixel(15, 10), Some([0, 0, 0]));
}

#[test]
fn test_draw_filled_circle_clips() {
    let mut image = Image::filled(Vec2::new(10, 10), [0, 0, 0]);
    draw_filled_circle(&mut image, Vec2::new(-2, 1), 5, [255, 0, 0]);
    assert_eq!(image.pixel(0, 1), Some([255, 0, 0]));
    assert_eq!(image.pixel(9, 9), Some([0, 0, 0]));
}

#[test]
fn test_render_points_leaves_input_untouched() {
    let frame = Image::filled(Vec2::new(32, 32), [10, 10, 10]);
    let out = render_points(&frame, &[Vec2::new(8.0, 8.0), Vec2::new(24.4, 20.6)]).unwrap();

    assert_eq!(frame.pixel(8, 8), Some([10, 10, 10]));
    assert_eq!(out.pixel(8, 8), Some(MARKER_COLOR));
    assert_eq!(out.pixel(24, 21), Some(MARKER_COLOR));
    // radius 4 marker does not reach 5 pixels away
    assert_eq!(out.pixel(13, 8), Some([10, 10, 10]));
    assert_eq!(out.size, frame.size);
}

#[test]
fn test_render_no_points_is_a_copy() {
    let frame = Image::filled(Vec2::new(4, 4), [1, 2, 3]);
    assert_eq!(render_points(&frame, &[]).unwrap(), frame);
}

#[test]
fn test_rgb_to_u32() {
    let rgb = [255, 0, 0, 0, 255, 0, 0, 0, 255, 128, 128, 128];
    let packed = rgb_to_u32(Vec2::new(2, 2), &rgb);
    assert_eq!(packed, vec![0x00FF0000, 0x0000FF00, 0x000000FF, 0x00808080]);
}

#[test]
fn test_far_out_of_range_centers_are_ignored() {
    let mut image = Image::filled(Vec2::new(8, 8), [0, 0, 0]);
    draw_filled_circle(&mut image, Vec2::new(i32::MAX, i32::MIN), 4, MARKER_COLOR);
    draw_filled_circle(&mut image, Vec2::new(i32::MIN, i32::MAX), 4, MARKER_COLOR);
    assert_eq!(image, Image::filled(Vec2::new(8, 8), [0, 0, 0]));

    // an infinite keypoint rounds to a saturated coordinate
    let rendered = render_points(&image, &[Vec2::new(f32::INFINITY, f32::NEG_INFINITY)]).unwrap();
    assert_eq!(rendered, image);
}
