use {crate::*, image::Image};

/// Finds body keypoints in a frame.
pub trait PoseEstimator: Send {
    /// Estimate the pose in `image`. An empty result means nobody was found.
    fn estimate(&mut self, image: &Image) -> Result<Vec<Keypoint>, PoseError>;
}

impl<F> PoseEstimator for F
where
    F: FnMut(&Image) -> Result<Vec<Keypoint>, PoseError> + Send,
{
    fn estimate(&mut self, image: &Image) -> Result<Vec<Keypoint>, PoseError> {
        self(image)
    }
}

/// Never finds anyone; used when no estimator backend is linked in.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullEstimator;

impl PoseEstimator for NullEstimator {
    fn estimate(&mut self, _image: &Image) -> Result<Vec<Keypoint>, PoseError> {
        Ok(Vec::new())
    }
}
