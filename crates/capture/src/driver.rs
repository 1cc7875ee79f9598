use {
    crate::*,
    std::{
        sync::{
            Arc,
            atomic::{AtomicBool, Ordering},
        },
        thread::JoinHandle,
        time::Duration,
    },
    tokio::sync::mpsc,
};

/// Everything a driver thread needs besides the device itself.
pub(crate) struct DriverContext {
    pub preset: SessionPreset,
    pub settings: OutputSettings,
    pub generation: u64,
    pub mailbox: Arc<SampleMailbox>,
    pub events: mpsc::UnboundedSender<Event>,
    pub reconnect_delay: Duration,
}

/// Owns a streaming device on its own thread and feeds the mailbox.
pub(crate) struct Driver {
    cancel: Arc<AtomicBool>,
    join_handle: Option<JoinHandle<Box<dyn CaptureDevice>>>,
}

impl Driver {
    pub fn spawn(mut device: Box<dyn CaptureDevice>, context: DriverContext) -> Result<Self, CaptureError> {
        let cancel = Arc::new(AtomicBool::new(false));
        let join_handle = std::thread::Builder::new()
            .name("capture-driver".to_string())
            .spawn({
                let cancel = Arc::clone(&cancel);
                move || {
                    Self::pump(device.as_mut(), &context, &cancel);
                    device
                }
            })
            .map_err(CaptureError::from)?;
        Ok(Self {
            cancel,
            join_handle: Some(join_handle),
        })
    }

    fn pump(device: &mut dyn CaptureDevice, context: &DriverContext, cancel: &AtomicBool) {
        log::debug!(
            "driver for {} running generation {}",
            device.name(),
            context.generation
        );
        while !cancel.load(Ordering::Relaxed) {
            // keep pumping samples until capturing fails
            loop {
                if cancel.load(Ordering::Relaxed) {
                    return;
                }
                match device.blocking_capture() {
                    Ok(Some(sample)) => {
                        if context.mailbox.offer(context.generation, sample)
                            && context.events.send(Event::SampleReady).is_err()
                        {
                            // worker is gone
                            return;
                        }
                    }
                    Ok(None) => {}
                    Err(error) => {
                        log::error!("capture from {} failed: {}", device.name(), error);
                        break;
                    }
                }
            }

            // close, wait, and reopen the device
            while !cancel.load(Ordering::Relaxed) {
                log::warn!("reconnecting to {}", device.name());
                device.close();
                std::thread::sleep(context.reconnect_delay);
                if cancel.load(Ordering::Relaxed) {
                    return;
                }
                match device
                    .open(context.preset)
                    .and_then(|_| device.configure_output(&context.settings))
                {
                    Ok(()) => break,
                    Err(error) => log::warn!("reopening {} failed: {}", device.name(), error),
                }
            }
        }
    }

    /// Cancel the driver and wait for it, getting the device back.
    ///
    /// Returns `None` if the driver thread panicked and took the device
    /// with it.
    pub fn stop(mut self) -> Option<Box<dyn CaptureDevice>> {
        self.cancel.store(true, Ordering::Relaxed);
        let join_handle = self.join_handle.take()?;
        match join_handle.join() {
            Ok(device) => Some(device),
            Err(_) => {
                log::error!("capture driver panicked");
                None
            }
        }
    }
}

impl Drop for Driver {
    fn drop(&mut self) {
        self.cancel.store(true, Ordering::Relaxed);
    }
}
