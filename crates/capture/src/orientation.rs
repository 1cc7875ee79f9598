use std::{
    fmt,
    sync::{
        Arc,
        atomic::{AtomicU8, Ordering},
    },
};

/// Which camera the session is using.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Position {
    #[default]
    Front,
    Back,
}

impl Position {
    pub fn flipped(self) -> Self {
        match self {
            Position::Front => Position::Back,
            Position::Back => Position::Front,
        }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Position::Front => write!(f, "front"),
            Position::Back => write!(f, "back"),
        }
    }
}

/// Device/UI orientation as reported by the host.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Orientation {
    #[default]
    Unknown,
    Portrait,
    PortraitUpsideDown,
    LandscapeLeft,
    LandscapeRight,
}

impl Orientation {
    /// Orientation the output is tagged with for a raw reading.
    ///
    /// The sensor reports landscape the other way around, so the two
    /// landscape values are swapped; everything else passes through.
    pub fn adjusted(self) -> Self {
        match self {
            Orientation::LandscapeLeft => Orientation::LandscapeRight,
            Orientation::LandscapeRight => Orientation::LandscapeLeft,
            other => other,
        }
    }

    fn to_u8(self) -> u8 {
        match self {
            Orientation::Unknown => 0,
            Orientation::Portrait => 1,
            Orientation::PortraitUpsideDown => 2,
            Orientation::LandscapeLeft => 3,
            Orientation::LandscapeRight => 4,
        }
    }

    fn from_u8(value: u8) -> Self {
        match value {
            1 => Orientation::Portrait,
            2 => Orientation::PortraitUpsideDown,
            3 => Orientation::LandscapeLeft,
            4 => Orientation::LandscapeRight,
            _ => Orientation::Unknown,
        }
    }
}

/// Orientation and mirroring resolved for the output while wiring it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct OutputOrientation {
    pub orientation: Orientation,
    pub mirrored: bool,
}

impl OutputOrientation {
    pub fn resolve(raw: Orientation, position: Position) -> Self {
        Self {
            orientation: raw.adjusted(),
            mirrored: position == Position::Front,
        }
    }
}

/// Current device orientation, written by the UI and read by the session
/// when it wires its output.
#[derive(Debug, Clone, Default)]
pub struct SharedOrientation {
    value: Arc<AtomicU8>,
}

impl SharedOrientation {
    pub fn new(orientation: Orientation) -> Self {
        Self {
            value: Arc::new(AtomicU8::new(orientation.to_u8())),
        }
    }

    pub fn get(&self) -> Orientation {
        Orientation::from_u8(self.value.load(Ordering::Relaxed))
    }

    pub fn set(&self, orientation: Orientation) {
        self.value.store(orientation.to_u8(), Ordering::Relaxed);
    }
}
