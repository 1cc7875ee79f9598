use crate::*;

/// How the output of a session is wired to its input.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OutputSettings {
    pub orientation: OutputOrientation,
    /// Samples arriving while the worker is busy are replaced, never queued.
    pub discard_late_samples: bool,
}

/// A camera the session can stream from.
///
/// `open` and `close` run on the session worker; while streaming the device
/// is moved onto its driver thread and `blocking_capture` is called there.
pub trait CaptureDevice: Send {
    /// Human readable name, used in logs and `SessionState`.
    fn name(&self) -> String;

    fn position(&self) -> Position;

    /// Open the device at `preset`, returning what was actually negotiated.
    fn open(&mut self, preset: SessionPreset) -> Result<DeviceFormat, CaptureError>;

    /// Apply the output settings. Devices that rotate or mirror in hardware
    /// can do it here; the session mirrors in software either way.
    fn configure_output(&mut self, _settings: &OutputSettings) -> Result<(), CaptureError> {
        Ok(())
    }

    /// Wait for the next sample. `Ok(None)` means nothing arrived within the
    /// device's poll interval.
    fn blocking_capture(&mut self) -> Result<Option<RawSample>, CaptureError>;

    /// Release the device, if open.
    fn close(&mut self);
}

/// Finds the default camera for a position.
pub trait DeviceProvider: Send {
    fn discover(&mut self, position: Position) -> Option<Box<dyn CaptureDevice>>;
}
