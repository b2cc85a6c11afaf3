// gemini-image-translate - translate an image with Gemini, print JSON
// Author: kelexine (https://github.com/kelexine)

pub mod cli;
pub mod config;
pub mod error;
pub mod gemini;
pub mod language;
pub mod mock;
pub mod models;
pub mod output;
pub mod translator;
pub mod utils;
pub mod vision;
