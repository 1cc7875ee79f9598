use {
    base::Vec2,
    capture::{FrameBuffer, Orientation, Position},
    image::Image,
    pose::{Keypoint, PoseEstimate},
};

mod viewer {
    include!("../src/viewer.rs");
}

use viewer::*;

fn frame(value: u8) -> FrameBuffer {
    FrameBuffer {
        image: Image::filled(Vec2::new(16, 12), [value, value, value]),
        orientation: Orientation::Portrait,
        mirrored: true,
        position: Position::Front,
        sequence: value as u64,
    }
}

#[test]
fn test_missing_first_frame_fails() {
    let mut viewer = Viewer::default();
    assert!(viewer.on_frame(None).is_none());
    assert!(viewer.failed());
}

#[test]
fn test_missing_frame_after_good_one_is_ignored() {
    let mut viewer = Viewer::default();
    assert_eq!(viewer.on_frame(Some(frame(3))), Some(frame(3).image));
    assert!(viewer.on_frame(None).is_none());
    assert!(!viewer.failed());
}

#[test]
fn test_estimate_is_rendered_for_display() {
    let mut viewer = Viewer::default();
    assert!(viewer.take_display().is_none());

    viewer.on_estimate(PoseEstimate {
        frame: frame(0).image,
        keypoints: vec![Keypoint::new("nose", Vec2::new(0.5, 0.5), 1.0)],
    });

    let display = viewer.take_display().unwrap();
    assert_eq!(display.pixel(8, 6), Some(image::MARKER_COLOR));
    assert!(viewer.take_display().is_none());
}

#[test]
fn test_rotation_cycles_through_all_orientations() {
    let mut orientation = Orientation::Unknown;
    let mut seen = Vec::new();
    for _ in 0..4 {
        orientation = rotate(orientation);
        seen.push(orientation);
    }
    assert_eq!(
        seen,
        vec![
            Orientation::Portrait,
            Orientation::LandscapeLeft,
            Orientation::PortraitUpsideDown,
            Orientation::LandscapeRight,
        ]
    );
    assert_eq!(rotate(Orientation::LandscapeRight), Orientation::Portrait);
}
