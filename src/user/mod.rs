//! User roster for Taskboard.
//!
//! A deliberately small context: roster entries carry an identifier and a
//! name, and the operation set is list, create, and delete. It follows
//! the same hexagonal shape as the task context:
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
