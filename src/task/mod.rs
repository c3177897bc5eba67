//! Task tracking for Taskboard.
//!
//! This module implements the task store: materialising new task records
//! from draft input, listing and fetching them, overlaying typed patches
//! onto existing records, and deleting them. The nontrivial rules all
//! live in the domain layer: schedule (start/due date) consistency,
//! completion-timestamp derivation, and partial-update semantics. The
//! module follows hexagonal architecture:
//!
//! - Domain types in [`domain`]
//! - Port contracts in [`ports`]
//! - Adapter implementations in [`adapters`]
//! - Orchestration services in [`services`]

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod services;

#[cfg(test)]
mod tests;
