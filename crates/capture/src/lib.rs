//! Camera capture session for the camera pose pipeline.
//!
//! One serial worker owns the session and runs configuration commands and
//! sample deliveries in order. Devices stream on their own driver threads
//! into a single-slot mailbox, and decoded frames are handed to the
//! delegate on the host's presentation context.

mod capture;
pub use capture::*;

mod config;
pub use config::*;

mod delegate;
pub use delegate::CaptureDelegate;
pub(crate) use delegate::DelegateSlot;

mod device;
pub use device::*;

mod driver;
pub(crate) use driver::*;

mod error;
pub use error::*;

mod frame;
pub use frame::*;

mod mailbox;
pub(crate) use mailbox::*;

mod orientation;
pub use orientation::*;

mod presenter;
pub use presenter::*;

mod session;
pub(crate) use session::CaptureSession;
pub use session::SessionState;

mod worker;
pub(crate) use worker::{Command, Event, Worker};
pub use worker::{Completion, Request};

#[cfg(feature = "v4l2")]
pub mod v4l2;
#[cfg(feature = "v4l2")]
pub use v4l2::{V4l2Device, V4l2Provider};
