//! Task module
//!
//! This module contains task-related types and the persistent task store.

mod model;
mod store;

pub use model::*;
pub use store::{TaskStore, TASKS_KEY};
