use base::Vec2;

/// One recognized body point.
#[derive(Debug, Clone, PartialEq)]
pub struct Keypoint {
    pub label: String,
    /// Normalized to [0, 1] in both axes.
    pub position: Vec2<f32>,
    pub confidence: f32,
}

impl Keypoint {
    pub fn new(label: impl Into<String>, position: Vec2<f32>, confidence: f32) -> Self {
        Self {
            label: label.into(),
            position,
            confidence,
        }
    }
}

/// Map keypoints into pixel coordinates of an image of `size`, skipping
/// the ones the estimator has no confidence in.
pub fn to_pixel_points(keypoints: &[Keypoint], size: Vec2<usize>) -> Vec<Vec2<f32>> {
    let scale = size.to_f32();
    keypoints
        .iter()
        .filter(|keypoint| keypoint.confidence > 0.0)
        .map(|keypoint| keypoint.position * scale)
        .collect()
}
