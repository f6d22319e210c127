//! Small helpers shared across modules

pub mod shorten;

pub use shorten::{shorten, shorten_default, DEFAULT_NAME_WIDTH};
