//! Core domain entities.

mod location;

pub use location::{Location, LocationPatch, NewLocation};
