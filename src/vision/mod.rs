//! Image loading for vision requests.
//!
//! Reads an image from disk, identifies its format from magic bytes and
//! encodes it as Gemini `InlineData`. No resizing or conversion happens.
//!
//! # Submodules
//!
//! - `models`: Supported image formats and detection.
//! - `loader`: Reading and encoding an image file.
//!
//! Author: kelexine (<https://github.com/kelexine>)

pub mod loader;
pub mod models;

pub use loader::load_image;
pub use models::ImageFormat;
