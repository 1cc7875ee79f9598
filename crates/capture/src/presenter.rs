use {
    std::{
        sync::{Arc, Mutex},
        thread::{JoinHandle, ThreadId},
    },
    tokio::sync::{mpsc, oneshot},
};

type Job = Box<dyn FnOnce() + Send>;

/// Handle for running work on the presentation context.
///
/// Completions and frames from the capture worker are delivered through
/// this handle, so they only ever run on the thread driving the
/// `PresentLoop`.
#[derive(Clone)]
pub struct Presenter {
    sender: mpsc::UnboundedSender<Job>,
    loop_thread: Arc<Mutex<Option<ThreadId>>>,
}

/// Receiving end of the presentation context.
pub struct PresentLoop {
    receiver: mpsc::UnboundedReceiver<Job>,
    loop_thread: Arc<Mutex<Option<ThreadId>>>,
}

/// Create a presentation context.
pub fn presentation_context() -> (Presenter, PresentLoop) {
    let (sender, receiver) = mpsc::unbounded_channel();
    let loop_thread = Arc::new(Mutex::new(None));
    (
        Presenter {
            sender,
            loop_thread: Arc::clone(&loop_thread),
        },
        PresentLoop {
            receiver,
            loop_thread,
        },
    )
}

impl Presenter {
    /// Queue `job` on the presentation context and return immediately.
    ///
    /// Returns `false` if the loop is gone; the job is dropped.
    pub fn post(&self, job: impl FnOnce() + Send + 'static) -> bool {
        self.sender.send(Box::new(job)).is_ok()
    }

    /// Run `job` on the presentation context and wait until it finished.
    ///
    /// Runs inline when called from the loop thread itself. Returns `false`
    /// if the loop went away before running the job.
    pub fn sync(&self, job: impl FnOnce() + Send + 'static) -> bool {
        if self.is_loop_thread() {
            job();
            return true;
        }
        let (done_tx, done_rx) = oneshot::channel::<()>();
        let posted = self.post(move || {
            job();
            let _ = done_tx.send(());
        });
        posted && done_rx.blocking_recv().is_ok()
    }

    /// Whether the current thread is the one driving the loop.
    pub fn is_loop_thread(&self) -> bool {
        let loop_thread = self.loop_thread.lock().unwrap_or_else(|e| e.into_inner());
        *loop_thread == Some(std::thread::current().id())
    }
}

impl PresentLoop {
    fn claim_thread(&self) {
        *self.loop_thread.lock().unwrap_or_else(|e| e.into_inner()) = Some(std::thread::current().id());
    }

    /// Run every job queued so far and return how many ran.
    ///
    /// Meant to be pumped from a UI loop.
    pub fn run_pending(&mut self) -> usize {
        self.claim_thread();
        let mut count = 0;
        while let Ok(job) = self.receiver.try_recv() {
            job();
            count += 1;
        }
        count
    }

    /// Run jobs until every `Presenter` is dropped.
    ///
    /// Must not be called from within an async runtime.
    pub fn run_blocking(mut self) {
        self.claim_thread();
        while let Some(job) = self.receiver.blocking_recv() {
            job();
        }
    }

    /// Run jobs until every `Presenter` is dropped.
    ///
    /// Jobs run on the task's thread, so use a current-thread runtime or
    /// keep this as the only task on the thread.
    pub async fn run(mut self) {
        while let Some(job) = self.receiver.recv().await {
            self.claim_thread();
            job();
        }
    }

    /// Drive the loop on a dedicated `presentation` thread.
    pub fn spawn(self) -> std::io::Result<JoinHandle<()>> {
        std::thread::Builder::new()
            .name("presentation".to_string())
            .spawn(move || self.run_blocking())
    }
}
