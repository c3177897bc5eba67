//! Adapter implementations of the user roster ports.

pub mod memory;
