//! API route modules

pub mod health;
pub mod suggest;
pub mod task;
