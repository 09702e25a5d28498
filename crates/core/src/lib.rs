#![forbid(unsafe_code)]

pub mod catalog;
pub mod layout;
pub mod model;

pub use layout::{Canvas, Connection, Point};
