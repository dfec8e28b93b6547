//! Adapters for the [`crate::domain::ports::Transport`] port.

pub mod http;
pub mod in_memory;
