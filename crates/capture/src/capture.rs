use {
    crate::*,
    std::sync::Arc,
    tokio::sync::{mpsc, oneshot, watch},
};

/// Camera capture with a delegate receiving frames.
///
/// Every operation is queued onto the session worker and returns right
/// away; its completion runs later on the presentation context.
pub struct VideoCapture {
    events: mpsc::UnboundedSender<Event>,
    presenter: Presenter,
    delegate: Arc<DelegateSlot>,
    mailbox: Arc<SampleMailbox>,
    orientation: SharedOrientation,
    state: watch::Receiver<SessionState>,
}

impl VideoCapture {
    pub fn new(
        provider: impl DeviceProvider + 'static,
        presenter: Presenter,
        config: CaptureConfig,
    ) -> Result<Self, CaptureError> {
        let (events_tx, events_rx) = mpsc::unbounded_channel();
        let mailbox = Arc::new(SampleMailbox::default());
        let delegate = Arc::new(DelegateSlot::default());
        let orientation = SharedOrientation::default();
        let session = CaptureSession::new(
            Box::new(provider),
            orientation.clone(),
            config,
            Arc::clone(&mailbox),
            events_tx.clone(),
        );
        let (state_tx, state_rx) = watch::channel(session.state());

        Worker {
            session,
            events: events_rx,
            mailbox: Arc::clone(&mailbox),
            delegate: Arc::clone(&delegate),
            presenter: presenter.clone(),
            state: state_tx,
        }
        .spawn()?;

        Ok(Self {
            events: events_tx,
            presenter,
            delegate,
            mailbox,
            orientation,
            state: state_rx,
        })
    }

    /// Orientation handle read when the output gets wired; update it from
    /// the UI and re-run `set_up` to apply.
    pub fn orientation(&self) -> SharedOrientation {
        self.orientation.clone()
    }

    /// Replace the delegate. `None` makes the session drop samples.
    pub fn set_delegate(&self, delegate: Option<Arc<dyn CaptureDelegate>>) {
        self.delegate.set(delegate);
    }

    /// Queue `request`; `completion` runs on the presentation context.
    pub fn submit(&self, request: Request, completion: impl FnOnce(Result<(), CaptureError>) + Send + 'static) {
        let command = Command {
            request,
            completion: Box::new(completion),
        };
        if let Err(mpsc::error::SendError(event)) = self.events.send(Event::Command(command)) {
            log::error!("capture session is gone, failing {}", request);
            if let Event::Command(command) = event {
                let completion = command.completion;
                self.presenter.post(move || completion(Err(CaptureError::MissingSession)));
            }
        }
    }

    pub fn set_up(&self, completion: impl FnOnce(Result<(), CaptureError>) + Send + 'static) {
        self.submit(Request::SetUp, completion);
    }

    pub fn start(&self, completion: impl FnOnce(Result<(), CaptureError>) + Send + 'static) {
        self.submit(Request::Start, completion);
    }

    pub fn stop(&self, completion: impl FnOnce(Result<(), CaptureError>) + Send + 'static) {
        self.submit(Request::Stop, completion);
    }

    pub fn flip(&self, completion: impl FnOnce(Result<(), CaptureError>) + Send + 'static) {
        self.submit(Request::Flip, completion);
    }

    /// Run `request` and wait for its completion.
    ///
    /// Resolves only while the presentation loop is being driven.
    pub async fn perform(&self, request: Request) -> Result<(), CaptureError> {
        let (sender, receiver) = oneshot::channel();
        self.submit(request, move |result| {
            let _ = sender.send(result);
        });
        receiver
            .await
            .unwrap_or_else(|_| Err(CaptureError::Unknown("completion dropped".to_string())))
    }

    /// The state published after the last finished command.
    pub fn state(&self) -> SessionState {
        self.state.borrow().clone()
    }

    pub fn subscribe(&self) -> watch::Receiver<SessionState> {
        self.state.clone()
    }

    /// Number of samples replaced in the mailbox before the worker got to
    /// them.
    pub fn discarded_samples(&self) -> u64 {
        self.mailbox.discarded()
    }
}

impl Drop for VideoCapture {
    fn drop(&mut self) {
        // not joined: the worker may be waiting on the presentation thread
        let _ = self.events.send(Event::Shutdown);
    }
}
