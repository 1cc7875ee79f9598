use {base::Vec2, capture::*, std::time::Duration};

#[test]
fn test_landscape_values_are_swapped() {
    assert_eq!(Orientation::LandscapeLeft.adjusted(), Orientation::LandscapeRight);
    assert_eq!(Orientation::LandscapeRight.adjusted(), Orientation::LandscapeLeft);
}

#[test]
fn test_other_orientations_pass_through() {
    for orientation in [
        Orientation::Portrait,
        Orientation::PortraitUpsideDown,
        Orientation::Unknown,
    ] {
        assert_eq!(orientation.adjusted(), orientation);
    }
}

#[test]
fn test_mirrored_iff_front() {
    let front = OutputOrientation::resolve(Orientation::Portrait, Position::Front);
    let back = OutputOrientation::resolve(Orientation::LandscapeLeft, Position::Back);
    assert!(front.mirrored);
    assert_eq!(front.orientation, Orientation::Portrait);
    assert!(!back.mirrored);
    assert_eq!(back.orientation, Orientation::LandscapeRight);
}

#[test]
fn test_position_flips_back_and_forth() {
    assert_eq!(Position::Front.flipped(), Position::Back);
    assert_eq!(Position::Back.flipped().flipped(), Position::Back);
    assert_eq!(Position::default(), Position::Front);
}

#[test]
fn test_shared_orientation_is_shared_between_clones() {
    let orientation = SharedOrientation::default();
    let ui = orientation.clone();
    assert_eq!(orientation.get(), Orientation::Unknown);
    ui.set(Orientation::PortraitUpsideDown);
    assert_eq!(orientation.get(), Orientation::PortraitUpsideDown);
    assert_eq!(
        SharedOrientation::new(Orientation::LandscapeRight).get(),
        Orientation::LandscapeRight
    );
}

#[test]
fn test_config_defaults_and_builder() {
    let config = CaptureConfig::default();
    assert_eq!(config.position(), Position::Front);
    assert_eq!(config.preset(), SessionPreset::Vga640x480);
    assert_eq!(config.reconnect_delay(), Duration::from_millis(100));

    let config = config
        .with_position(Position::Back)
        .with_preset(SessionPreset::Hd1280x720)
        .with_reconnect_delay(Duration::from_millis(10));
    assert_eq!(config.position(), Position::Back);
    assert_eq!(config.preset().size(), Vec2::new(1280, 720));
    assert_eq!(config.reconnect_delay(), Duration::from_millis(10));
}

#[test]
fn test_preset_sizes() {
    assert_eq!(SessionPreset::Vga640x480.size(), Vec2::new(640, 480));
    assert_eq!(SessionPreset::Hd1920x1080.size(), Vec2::new(1920, 1080));
}
