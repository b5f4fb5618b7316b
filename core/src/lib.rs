//! Core library for TaskMaster
//!
//! This crate contains the core business logic, including:
//! - Task management and persistence
//! - Key-value storage abstraction
//! - AI priority suggestion

pub mod ai;
pub mod error;
pub mod storage;
pub mod task;

pub use error::Error;
pub type Result<T> = std::result::Result<T, Error>;
