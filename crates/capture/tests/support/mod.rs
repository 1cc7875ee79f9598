#![allow(dead_code)]

use {
    base::Vec2,
    capture::*,
    image::PixelFormat,
    std::{
        sync::{
            Arc, Mutex,
            atomic::{AtomicBool, AtomicUsize, Ordering},
            mpsc,
        },
        time::Duration,
    },
    tokio::sync::mpsc as tokio_mpsc,
};

pub const WAIT: Duration = Duration::from_secs(2);

/// Counts what happened to the devices of one camera.
#[derive(Default)]
pub struct Tracker {
    pub opens: AtomicUsize,
    pub closes: AtomicUsize,
    pub open_now: AtomicBool,
    pub fail_next: AtomicBool,
}

impl Tracker {
    pub fn opens(&self) -> usize {
        self.opens.load(Ordering::SeqCst)
    }

    pub fn closes(&self) -> usize {
        self.closes.load(Ordering::SeqCst)
    }

    pub fn is_open(&self) -> bool {
        self.open_now.load(Ordering::SeqCst)
    }
}

/// Test side of a mock camera: push samples in, look at the tracker.
#[derive(Clone)]
pub struct Feed {
    sender: mpsc::Sender<RawSample>,
    pub tracker: Arc<Tracker>,
}

impl Feed {
    /// Light hitting the sensor: lost unless the camera is open.
    pub fn push(&self, sample: RawSample) {
        if self.tracker.is_open() {
            self.sender.send(sample).unwrap();
        }
    }

    /// Make the next capture call fail, as an unplugged camera would.
    pub fn fail_next_capture(&self) {
        self.tracker.fail_next.store(true, Ordering::SeqCst);
    }
}

#[derive(Clone)]
pub struct MockCamera {
    position: Position,
    receiver: Arc<Mutex<mpsc::Receiver<RawSample>>>,
    tracker: Arc<Tracker>,
    fail_output: bool,
    size: Vec2<usize>,
}

impl MockCamera {
    pub fn new(position: Position) -> (Self, Feed) {
        let (sender, receiver) = mpsc::channel();
        let tracker = Arc::new(Tracker::default());
        (
            Self {
                position,
                receiver: Arc::new(Mutex::new(receiver)),
                tracker: Arc::clone(&tracker),
                fail_output: false,
                size: Vec2::new(2, 2),
            },
            Feed { sender, tracker },
        )
    }

    pub fn failing_output(mut self) -> Self {
        self.fail_output = true;
        self
    }
}

pub struct MockDevice {
    camera: MockCamera,
    open: bool,
}

impl CaptureDevice for MockDevice {
    fn name(&self) -> String {
        format!("mock-{}", self.camera.position)
    }

    fn position(&self) -> Position {
        self.camera.position
    }

    fn open(&mut self, _preset: SessionPreset) -> Result<DeviceFormat, CaptureError> {
        // a fresh stream starts without buffered samples
        while self.camera.receiver.lock().unwrap().try_recv().is_ok() {}
        self.open = true;
        self.camera.tracker.opens.fetch_add(1, Ordering::SeqCst);
        self.camera.tracker.open_now.store(true, Ordering::SeqCst);
        Ok(DeviceFormat {
            size: self.camera.size,
            format: PixelFormat::Rgb8,
            frame_rate: 30.0,
        })
    }

    fn configure_output(&mut self, _settings: &OutputSettings) -> Result<(), CaptureError> {
        if self.camera.fail_output {
            Err(CaptureError::InvalidOutput("mock output refused".to_string()))
        } else {
            Ok(())
        }
    }

    fn blocking_capture(&mut self) -> Result<Option<RawSample>, CaptureError> {
        if !self.open {
            return Err(CaptureError::Unknown("closed".to_string()));
        }
        if self.camera.tracker.fail_next.swap(false, Ordering::SeqCst) {
            return Err(CaptureError::Unknown("mock capture failed".to_string()));
        }
        let receiver = self.camera.receiver.lock().unwrap();
        match receiver.recv_timeout(Duration::from_millis(5)) {
            Ok(sample) => Ok(Some(sample)),
            Err(mpsc::RecvTimeoutError::Timeout) => Ok(None),
            Err(mpsc::RecvTimeoutError::Disconnected) => {
                std::thread::sleep(Duration::from_millis(5));
                Ok(None)
            }
        }
    }

    fn close(&mut self) {
        if self.open {
            self.open = false;
            self.camera.tracker.closes.fetch_add(1, Ordering::SeqCst);
            self.camera.tracker.open_now.store(false, Ordering::SeqCst);
        }
    }
}

#[derive(Default)]
pub struct MockProvider {
    pub front: Option<MockCamera>,
    pub back: Option<MockCamera>,
}

impl DeviceProvider for MockProvider {
    fn discover(&mut self, position: Position) -> Option<Box<dyn CaptureDevice>> {
        let camera = match position {
            Position::Front => self.front.clone(),
            Position::Back => self.back.clone(),
        }?;
        Some(Box::new(MockDevice {
            camera,
            open: false,
        }))
    }
}

/// 2x2 sample whose left column is `sequence` and right column black, so
/// mirroring is visible.
pub fn sample(sequence: u64) -> RawSample {
    let v = sequence as u8;
    RawSample {
        size: Vec2::new(2, 2),
        format: PixelFormat::Rgb8,
        data: vec![v, v, v, 0, 0, 0, v, v, v, 0, 0, 0],
        sequence,
    }
}

pub fn garbage(sequence: u64) -> RawSample {
    RawSample {
        size: Vec2::new(2, 2),
        format: PixelFormat::Jpeg,
        data: b"not a jpeg".to_vec(),
        sequence,
    }
}

/// A capture with its presentation loop running on its own thread.
pub fn capture_with(provider: MockProvider) -> VideoCapture {
    capture_with_config(provider, CaptureConfig::default())
}

pub fn capture_with_config(provider: MockProvider, config: CaptureConfig) -> VideoCapture {
    let (presenter, present_loop) = presentation_context();
    present_loop.spawn().unwrap();
    VideoCapture::new(provider, presenter, config).unwrap()
}

pub fn front_and_back() -> (VideoCapture, Feed, Feed) {
    let (front, front_feed) = MockCamera::new(Position::Front);
    let (back, back_feed) = MockCamera::new(Position::Back);
    let capture = capture_with(MockProvider {
        front: Some(front),
        back: Some(back),
    });
    (capture, front_feed, back_feed)
}

/// Install a delegate forwarding every frame into a channel.
pub fn collect_frames(capture: &VideoCapture) -> tokio_mpsc::UnboundedReceiver<Option<FrameBuffer>> {
    let (sender, receiver) = tokio_mpsc::unbounded_channel();
    capture.set_delegate(Some(Arc::new(move |frame: Option<FrameBuffer>| {
        let _ = sender.send(frame);
    })));
    receiver
}

pub async fn next_frame(frames: &mut tokio_mpsc::UnboundedReceiver<Option<FrameBuffer>>) -> Option<FrameBuffer> {
    tokio::time::timeout(WAIT, frames.recv())
        .await
        .expect("timed out waiting for a frame")
        .expect("delegate dropped")
}

pub async fn wait_until(condition: impl Fn() -> bool) {
    tokio::time::timeout(WAIT, async {
        while !condition() {
            tokio::time::sleep(Duration::from_millis(5)).await;
        }
    })
    .await
    .expect("timed out waiting for condition");
}

pub async fn perform(capture: &VideoCapture, request: Request) -> Result<(), CaptureError> {
    tokio::time::timeout(WAIT, capture.perform(request))
        .await
        .expect("timed out waiting for completion")
}
