//! AI module for priority suggestion
//!
//! This module provides the round trip to a chat-completion model that
//! recommends a priority for a task description.

mod suggest;

pub use suggest::{SuggestClient, SuggestConfig};
