use {
    crate::*,
    std::sync::{
        Mutex,
        atomic::{AtomicU64, Ordering},
    },
};

pub(crate) struct PendingSample {
    pub generation: u64,
    pub sample: RawSample,
}

/// Single-slot hand-off between a driver thread and the session worker.
///
/// Holds at most one sample; a newer sample replaces an older one that the
/// worker has not picked up yet.
#[derive(Default)]
pub(crate) struct SampleMailbox {
    slot: Mutex<Option<PendingSample>>,
    discarded: AtomicU64,
}

impl SampleMailbox {
    /// Store a sample. Returns `true` if the slot was empty, in which case
    /// the caller has to wake the worker.
    pub fn offer(&self, generation: u64, sample: RawSample) -> bool {
        let mut slot = self.slot.lock().unwrap_or_else(|e| e.into_inner());
        let replaced = slot.replace(PendingSample { generation, sample });
        match replaced {
            Some(old) => {
                self.discarded.fetch_add(1, Ordering::Relaxed);
                log::debug!("discarding late sample {}", old.sample.sequence);
                false
            }
            None => true,
        }
    }

    pub fn take(&self) -> Option<PendingSample> {
        self.slot.lock().unwrap_or_else(|e| e.into_inner()).take()
    }

    pub fn clear(&self) {
        self.take();
    }

    pub fn discarded(&self) -> u64 {
        self.discarded.load(Ordering::Relaxed)
    }
}
