use {
    capture::{FrameBuffer, Orientation},
    image::Image,
    pose::PoseEstimate,
};

/// What the window shows, fed from the capture delegate and the pose worker.
#[derive(Default)]
pub struct Viewer {
    current: Option<Image>,
    display: Option<Image>,
    failed: bool,
}

impl Viewer {
    /// Take a captured frame. Returns the image to estimate on, if any.
    ///
    /// A missing frame before any frame was seen marks the viewer failed.
    pub fn on_frame(&mut self, frame: Option<FrameBuffer>) -> Option<Image> {
        match frame {
            Some(frame) => {
                self.current = Some(frame.image.clone());
                Some(frame.image)
            }
            None => {
                if self.current.is_none() {
                    self.failed = true;
                }
                None
            }
        }
    }

    /// Take a finished estimate and render it for display.
    pub fn on_estimate(&mut self, estimate: PoseEstimate) {
        match estimate.render() {
            Ok(image) => self.display = Some(image),
            Err(error) => log::warn!("could not render pose overlay: {}", error),
        }
    }

    pub fn take_display(&mut self) -> Option<Image> {
        self.display.take()
    }

    pub fn failed(&self) -> bool {
        self.failed
    }
}

/// The orientation after rotating the device a quarter turn clockwise.
pub fn rotate(orientation: Orientation) -> Orientation {
    match orientation {
        Orientation::Unknown => Orientation::Portrait,
        Orientation::Portrait => Orientation::LandscapeLeft,
        Orientation::LandscapeLeft => Orientation::PortraitUpsideDown,
        Orientation::PortraitUpsideDown => Orientation::LandscapeRight,
        Orientation::LandscapeRight => Orientation::Portrait,
    }
}
