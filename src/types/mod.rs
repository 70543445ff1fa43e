//! Domain types and HTTP request/response bodies

mod error;
mod image;
mod infographic;
mod research;

pub use error::*;
pub use image::*;
pub use infographic::*;
pub use research::*;
