//! HTTP handlers

pub mod health;
mod helpers;
pub mod image;
pub mod research;
