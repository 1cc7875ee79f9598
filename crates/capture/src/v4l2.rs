use {
    crate::*,
    base::Vec2,
    image::PixelFormat,
    std::{io, path::PathBuf, time::Duration},
    v4l::{
        Device, Format, FourCC, buffer::Type, io::mmap::Stream as MmapStream,
        io::traits::CaptureStream, video::Capture,
    },
};

// formats to ask for, in order of preference
const PREFERRED_FOURCCS: [&[u8; 4]; 3] = [b"MJPG", b"YUYV", b"RGB3"];

const FRAME_RATE: u32 = 30;

const BUFFER_COUNT: u32 = 4;

// how long blocking_capture waits before reporting no sample
const POLL_TIMEOUT_MS: u64 = 100;

/// Maps positions to V4L2 device nodes.
#[derive(Debug, Clone)]
pub struct V4l2Provider {
    front: Option<PathBuf>,
    back: Option<PathBuf>,
}

impl Default for V4l2Provider {
    fn default() -> Self {
        Self {
            front: Some(PathBuf::from("/dev/video0")),
            back: Some(PathBuf::from("/dev/video1")),
        }
    }
}

impl V4l2Provider {
    pub fn with_front(mut self, path: Option<PathBuf>) -> Self {
        self.front = path;
        self
    }

    pub fn with_back(mut self, path: Option<PathBuf>) -> Self {
        self.back = path;
        self
    }

    pub fn path(&self, position: Position) -> Option<&PathBuf> {
        match position {
            Position::Front => self.front.as_ref(),
            Position::Back => self.back.as_ref(),
        }
    }
}

impl DeviceProvider for V4l2Provider {
    fn discover(&mut self, position: Position) -> Option<Box<dyn CaptureDevice>> {
        let path = self.path(position)?;
        if !path.exists() {
            log::info!("no {} camera at {}", position, path.display());
            return None;
        }
        Some(Box::new(V4l2Device::new(path.clone(), position)))
    }
}

/// A V4L2 camera streaming through mmap buffers.
pub struct V4l2Device {
    path: PathBuf,
    position: Position,
    stream: Option<MmapStream<'static>>,
    size: Vec2<usize>,
    format: PixelFormat,
    sequence: u64,
}

impl V4l2Device {
    pub fn new(path: PathBuf, position: Position) -> Self {
        Self {
            path,
            position,
            stream: None,
            size: Vec2::zero(),
            format: PixelFormat::Jpeg,
            sequence: 0,
        }
    }

    fn negotiate(device: &Device, size: Vec2<usize>) -> Result<(Vec2<usize>, PixelFormat), CaptureError> {
        for fourcc in PREFERRED_FOURCCS {
            let desired = Format::new(size.x as u32, size.y as u32, FourCC::new(fourcc));
            let actual = Capture::set_format(device, &desired)?;
            if let Some(format) = PixelFormat::from_fourcc(u32::from_le_bytes(actual.fourcc.repr)) {
                return Ok((
                    Vec2::new(actual.width as usize, actual.height as usize),
                    format,
                ));
            }
        }
        Err(CaptureError::InvalidInput(
            "device offers no supported pixel format".to_string(),
        ))
    }
}

impl CaptureDevice for V4l2Device {
    fn name(&self) -> String {
        self.path.display().to_string()
    }

    fn position(&self) -> Position {
        self.position
    }

    fn open(&mut self, preset: SessionPreset) -> Result<DeviceFormat, CaptureError> {
        self.stream.take();

        let device = Device::with_path(&self.path)
            .map_err(|error| CaptureError::InvalidInput(format!("{}: {}", self.path.display(), error)))?;
        let (size, format) = Self::negotiate(&device, preset.size()).map_err(CaptureError::or_input)?;

        // set the frame rate and get the actual frame rate back
        let params = Capture::set_params(&device, &v4l::video::capture::Parameters::with_fps(FRAME_RATE))?;
        let frame_rate = params.interval.denominator as f32 / params.interval.numerator.max(1) as f32;

        let mut stream = MmapStream::with_buffers(&device, Type::VideoCapture, BUFFER_COUNT)
            .map_err(|error| CaptureError::InvalidInput(error.to_string()))?;
        stream.set_timeout(Duration::from_millis(POLL_TIMEOUT_MS));
        self.stream = Some(stream);
        self.size = size;
        self.format = format;

        Ok(DeviceFormat {
            size,
            format,
            frame_rate,
        })
    }

    fn close(&mut self) {
        self.stream.take();
    }

    fn blocking_capture(&mut self) -> Result<Option<RawSample>, CaptureError> {
        let stream = self
            .stream
            .as_mut()
            .ok_or_else(|| CaptureError::Unknown("no stream".to_string()))?;
        match CaptureStream::next(stream) {
            Ok((data, _metadata)) => {
                self.sequence += 1;
                Ok(Some(RawSample {
                    size: self.size,
                    format: self.format,
                    data: data.to_vec(),
                    sequence: self.sequence,
                }))
            }
            Err(error) if error.kind() == io::ErrorKind::TimedOut => Ok(None),
            Err(error) => Err(CaptureError::Unknown(error.to_string())),
        }
    }
}
