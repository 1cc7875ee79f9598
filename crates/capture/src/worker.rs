use {
    crate::*,
    std::{fmt, sync::Arc, thread::JoinHandle},
    tokio::sync::{mpsc, watch},
};

/// A configuration or lifecycle request for the session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Request {
    SetUp,
    Start,
    Stop,
    Flip,
}

impl fmt::Display for Request {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Request::SetUp => write!(f, "set up"),
            Request::Start => write!(f, "start"),
            Request::Stop => write!(f, "stop"),
            Request::Flip => write!(f, "flip"),
        }
    }
}

/// Called exactly once, on the presentation context, with the outcome of a
/// request.
pub type Completion = Box<dyn FnOnce(Result<(), CaptureError>) + Send>;

pub(crate) struct Command {
    pub request: Request,
    pub completion: Completion,
}

pub(crate) enum Event {
    Command(Command),
    SampleReady,
    Shutdown,
}

/// The serial context: runs commands and sample deliveries one at a time,
/// in the order they were queued.
pub(crate) struct Worker {
    pub session: CaptureSession,
    pub events: mpsc::UnboundedReceiver<Event>,
    pub mailbox: Arc<SampleMailbox>,
    pub delegate: Arc<DelegateSlot>,
    pub presenter: Presenter,
    pub state: watch::Sender<SessionState>,
}

impl Worker {
    pub fn spawn(self) -> std::io::Result<JoinHandle<()>> {
        std::thread::Builder::new()
            .name("capture-session".to_string())
            .spawn(move || self.run())
    }

    fn run(mut self) {
        while let Some(event) = self.events.blocking_recv() {
            match event {
                Event::Command(command) => self.execute(command),
                Event::SampleReady => self.deliver_next_sample(),
                Event::Shutdown => break,
            }
        }
        self.session.teardown();
        self.state.send_replace(self.session.state());
        log::info!("capture session shut down");
    }

    fn execute(&mut self, command: Command) {
        let Command {
            request,
            completion,
        } = command;
        log::info!("{}", request);
        let result = match request {
            Request::SetUp => self.session.set_up(),
            Request::Start => self.session.start(),
            Request::Stop => {
                self.session.stop();
                Ok(())
            }
            Request::Flip => self.session.flip(),
        };
        if let Err(error) = &result {
            log::warn!("{} failed: {}", request, error);
        }
        self.state.send_replace(self.session.state());
        if !self.presenter.post(move || completion(result)) {
            log::warn!("presentation context is gone, dropping {} completion", request);
        }
    }

    fn deliver_next_sample(&mut self) {
        let Some(pending) = self.mailbox.take() else {
            return;
        };
        let Some((settings, position)) = self.session.accept(&pending) else {
            log::debug!("dropping stale sample {}", pending.sample.sequence);
            return;
        };
        let Some(delegate) = self.delegate.snapshot() else {
            log::debug!("no delegate, dropping sample {}", pending.sample.sequence);
            return;
        };
        let frame = FrameBuffer::decode(&pending.sample, &settings, position);
        if !self.presenter.sync(move || delegate.did_capture_frame(frame)) {
            log::warn!("presentation context is gone, dropping sample {}", pending.sample.sequence);
        }
    }
}
