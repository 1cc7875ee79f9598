//! Pose estimation on captured frames.

mod error;
pub use error::*;

mod estimator;
pub use estimator::*;

mod keypoint;
pub use keypoint::*;

mod worker;
pub use worker::*;
