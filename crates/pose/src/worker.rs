use {
    crate::*,
    capture::Presenter,
    image::{Image, ImageError, render_points},
    std::{
        sync::{
            Arc,
            atomic::{AtomicU64, Ordering},
        },
        thread::JoinHandle,
    },
    tokio::sync::mpsc,
};

/// A frame together with the keypoints found in it.
#[derive(Debug, Clone)]
pub struct PoseEstimate {
    pub frame: Image,
    pub keypoints: Vec<Keypoint>,
}

impl PoseEstimate {
    /// The frame with a marker on every confident keypoint.
    pub fn render(&self) -> Result<Image, ImageError> {
        render_points(&self.frame, &to_pixel_points(&self.keypoints, self.frame.size))
    }
}

enum Message {
    Frame(Image),
    Stop,
}

/// Queues frames for a `PoseWorker`. Cheap to clone.
#[derive(Clone)]
pub struct PoseSubmitter {
    sender: mpsc::UnboundedSender<Message>,
}

impl PoseSubmitter {
    /// Hand a frame to the estimator. Returns `false` once the worker is gone.
    pub fn submit(&self, frame: Image) -> bool {
        self.sender.send(Message::Frame(frame)).is_ok()
    }
}

/// Runs a `PoseEstimator` on its own thread.
///
/// Frames that pile up while an estimate is running are skipped in favor of
/// the newest one. Results are posted to the presentation context.
pub struct PoseWorker {
    submitter: PoseSubmitter,
    skipped: Arc<AtomicU64>,
    join_handle: Option<JoinHandle<()>>,
}

impl PoseWorker {
    pub fn spawn(
        mut estimator: impl PoseEstimator + 'static,
        presenter: Presenter,
        on_estimate: impl Fn(PoseEstimate) + Send + Sync + 'static,
    ) -> std::io::Result<Self> {
        let (sender, mut receiver) = mpsc::unbounded_channel::<Message>();
        let skipped = Arc::new(AtomicU64::new(0));
        let on_estimate = Arc::new(on_estimate);

        let join_handle = std::thread::Builder::new().name("pose".to_string()).spawn({
            let skipped = Arc::clone(&skipped);
            move || {
                'frames: while let Some(Message::Frame(mut frame)) = receiver.blocking_recv() {
                    while let Ok(message) = receiver.try_recv() {
                        match message {
                            Message::Frame(newer) => {
                                skipped.fetch_add(1, Ordering::Relaxed);
                                frame = newer;
                            }
                            Message::Stop => break 'frames,
                        }
                    }
                    match estimator.estimate(&frame) {
                        Ok(keypoints) => {
                            log::trace!("{} keypoints", keypoints.len());
                            let on_estimate = Arc::clone(&on_estimate);
                            let posted = presenter.post(move || on_estimate(PoseEstimate { frame, keypoints }));
                            if !posted {
                                break;
                            }
                        }
                        Err(error) => log::warn!("pose estimation failed: {}", error),
                    }
                }
                log::debug!("pose worker stopped");
            }
        })?;

        Ok(Self {
            submitter: PoseSubmitter { sender },
            skipped,
            join_handle: Some(join_handle),
        })
    }

    pub fn submit(&self, frame: Image) -> bool {
        self.submitter.submit(frame)
    }

    pub fn submitter(&self) -> PoseSubmitter {
        self.submitter.clone()
    }

    /// Frames replaced by a newer one before the estimator got to them.
    pub fn skipped_frames(&self) -> u64 {
        self.skipped.load(Ordering::Relaxed)
    }

    /// Whether the worker thread has exited.
    pub fn is_finished(&self) -> bool {
        self.join_handle.as_ref().is_none_or(|handle| handle.is_finished())
    }
}

impl Drop for PoseWorker {
    fn drop(&mut self) {
        // submitters may outlive the worker, so stop the thread explicitly
        let _ = self.submitter.sender.send(Message::Stop);
        self.join_handle.take();
    }
}
