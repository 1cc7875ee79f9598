use {crate::*, arc_swap::ArcSwapOption, std::sync::Arc};

/// Receives every frame of the running session on the presentation context.
///
/// `None` means a sample arrived but could not be turned into a frame.
pub trait CaptureDelegate: Send + Sync {
    fn did_capture_frame(&self, frame: Option<FrameBuffer>);
}

impl<F> CaptureDelegate for F
where
    F: Fn(Option<FrameBuffer>) + Send + Sync,
{
    fn did_capture_frame(&self, frame: Option<FrameBuffer>) {
        self(frame)
    }
}

// the one piece of session state written from outside the worker
#[derive(Default)]
pub(crate) struct DelegateSlot {
    slot: ArcSwapOption<Arc<dyn CaptureDelegate>>,
}

impl DelegateSlot {
    pub fn set(&self, delegate: Option<Arc<dyn CaptureDelegate>>) {
        self.slot.store(delegate.map(Arc::new));
    }

    pub fn snapshot(&self) -> Option<Arc<dyn CaptureDelegate>> {
        self.slot.load_full().map(|delegate| Arc::clone(&*delegate))
    }
}
