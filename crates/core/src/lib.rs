#![forbid(unsafe_code)]

pub mod content;
pub mod error;
pub mod model;
pub mod scoring;
mod validate;

pub use content::{Content, ContentError};
pub use error::Error;
