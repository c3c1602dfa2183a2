#![forbid(unsafe_code)]

pub mod json;
pub mod ranking;
pub mod repository;

pub use repository::{InMemoryScoreRepository, ScoreRepository, Storage, StorageError};
