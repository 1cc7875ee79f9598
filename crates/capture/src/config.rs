use {crate::*, base::Vec2, std::time::Duration};

// delay before reopening a device whose capture failed
const WAIT_BEFORE_RECONNECT_MS: u64 = 100;

/// Fixed resolution profiles a session can run at.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum SessionPreset {
    #[default]
    Vga640x480,
    Hd1280x720,
    Hd1920x1080,
}

impl SessionPreset {
    pub fn size(&self) -> Vec2<usize> {
        match self {
            SessionPreset::Vga640x480 => Vec2::new(640, 480),
            SessionPreset::Hd1280x720 => Vec2::new(1280, 720),
            SessionPreset::Hd1920x1080 => Vec2::new(1920, 1080),
        }
    }
}

/// Configuration for a capture session.
#[derive(Debug, Clone)]
pub struct CaptureConfig {
    position: Position,
    preset: SessionPreset,
    reconnect_delay: Duration,
}

impl Default for CaptureConfig {
    fn default() -> Self {
        Self {
            position: Position::Front,
            preset: SessionPreset::Vga640x480,
            reconnect_delay: Duration::from_millis(WAIT_BEFORE_RECONNECT_MS),
        }
    }
}

impl CaptureConfig {
    /// Set the camera position the session starts with.
    pub fn with_position(mut self, position: Position) -> Self {
        self.position = position;
        self
    }

    /// Set the resolution preset selected by `set_up`.
    pub fn with_preset(mut self, preset: SessionPreset) -> Self {
        self.preset = preset;
        self
    }

    /// Set how long the driver waits before reopening a failed device.
    pub fn with_reconnect_delay(mut self, delay: Duration) -> Self {
        self.reconnect_delay = delay;
        self
    }

    pub fn position(&self) -> Position {
        self.position
    }

    pub fn preset(&self) -> SessionPreset {
        self.preset
    }

    pub fn reconnect_delay(&self) -> Duration {
        self.reconnect_delay
    }
}
