#![forbid(unsafe_code)]

pub mod model;
pub mod shuffle;
pub mod time;
pub mod tree;

pub use time::Clock;
