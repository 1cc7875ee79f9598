use {
    crate::*,
    base::Vec2,
    image::{Image, PixelFormat, decode_rgb, mirror_horizontal},
};

/// One undecoded sample as produced by a `CaptureDevice`.
#[derive(Debug, Clone)]
pub struct RawSample {
    pub size: Vec2<usize>,
    pub format: PixelFormat,
    pub data: Vec<u8>,
    pub sequence: u64,
}

/// What the device actually negotiated in `open`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DeviceFormat {
    pub size: Vec2<usize>,
    pub format: PixelFormat,
    pub frame_rate: f32,
}

/// A decoded frame, handed to the delegate by value.
#[derive(Debug, Clone)]
pub struct FrameBuffer {
    pub image: Image,
    pub orientation: Orientation,
    pub mirrored: bool,
    pub position: Position,
    pub sequence: u64,
}

impl FrameBuffer {
    pub fn width(&self) -> usize {
        self.image.width()
    }

    pub fn height(&self) -> usize {
        self.image.height()
    }

    /// Decode a raw sample into `Rgb8` pixels and tag it with the output
    /// settings it was produced under.
    ///
    /// Returns `None` when the sample cannot be decoded; the stream goes on.
    pub(crate) fn decode(sample: &RawSample, settings: &OutputSettings, position: Position) -> Option<Self> {
        let mut image = match decode_rgb(sample.format, sample.size, &sample.data) {
            Ok(image) => image,
            Err(error) => {
                log::warn!("sample {} could not be decoded: {}", sample.sequence, error);
                return None;
            }
        };
        if settings.orientation.mirrored {
            if let Err(error) = mirror_horizontal(&mut image) {
                log::warn!("sample {} could not be mirrored: {}", sample.sequence, error);
                return None;
            }
        }
        Some(Self {
            image,
            orientation: settings.orientation.orientation,
            mirrored: settings.orientation.mirrored,
            position,
            sequence: sample.sequence,
        })
    }
}
