//! Shared helpers used across layers.

pub mod slug;
