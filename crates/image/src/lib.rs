//! Frame images for the capture pipeline.
//!
//! Raw device samples (JPEG, YUYV, RGB, ARGB) are decoded into packed `Rgb8`
//! images, which the overlay renderer draws on and the display code packs
//! into `u32` pixels.

pub mod convert;
pub mod draw;
pub mod error;
pub mod image;
pub mod pixelformat;
pub mod u32;

pub use convert::*;
pub use draw::*;
pub use error::ImageError;
pub use image::Image;
pub use pixelformat::*;
pub use u32::*;
