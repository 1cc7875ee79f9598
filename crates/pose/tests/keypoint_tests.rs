use {base::Vec2, image::Image, pose::*};

#[test]
fn test_pixel_points_scale_by_frame_size() {
    let keypoints = vec![
        Keypoint::new("nose", Vec2::new(0.5, 0.25), 0.9),
        Keypoint::new("left_wrist", Vec2::new(1.0, 1.0), 0.1),
    ];
    let points = to_pixel_points(&keypoints, Vec2::new(640, 480));
    assert_eq!(points, vec![Vec2::new(320.0, 120.0), Vec2::new(640.0, 480.0)]);
}

#[test]
fn test_unconfident_points_are_dropped() {
    let keypoints = vec![
        Keypoint::new("nose", Vec2::new(0.5, 0.5), 0.0),
        Keypoint::new("neck", Vec2::new(0.5, 0.5), -1.0),
        Keypoint::new("root", Vec2::new(0.1, 0.2), 0.5),
    ];
    let points = to_pixel_points(&keypoints, Vec2::new(10, 10));
    assert_eq!(points, vec![Vec2::new(1.0, 2.0)]);
}

#[test]
fn test_null_estimator_finds_nobody() {
    let frame = Image::filled(Vec2::new(4, 4), [10, 20, 30]);
    assert!(NullEstimator.estimate(&frame).unwrap().is_empty());
}

#[test]
fn test_render_marks_confident_points_only() {
    let estimate = PoseEstimate {
        frame: Image::filled(Vec2::new(20, 20), [0, 0, 0]),
        keypoints: vec![
            Keypoint::new("nose", Vec2::new(0.5, 0.5), 0.8),
            Keypoint::new("ear", Vec2::new(0.0, 0.0), 0.0),
        ],
    };
    let rendered = estimate.render().unwrap();
    assert_eq!(rendered.pixel(10, 10), Some(image::MARKER_COLOR));
    assert_eq!(rendered.pixel(0, 0), Some([0, 0, 0]));
    // the frame itself is untouched
    assert_eq!(estimate.frame.pixel(10, 10), Some([0, 0, 0]));
}

#[test]
fn test_render_without_keypoints_is_the_frame() {
    let frame = Image::filled(Vec2::new(6, 4), [1, 2, 3]);
    let estimate = PoseEstimate {
        frame: frame.clone(),
        keypoints: Vec::new(),
    };
    assert_eq!(estimate.render().unwrap(), frame);
}

#[test]
fn test_error_display() {
    assert_eq!(
        PoseError::Backend("model missing".to_string()).to_string(),
        "backend error: model missing"
    );
    let error: PoseError = image::ImageError::Decode("bad".to_string()).into();
    assert!(matches!(error, PoseError::Input(_)));
}
