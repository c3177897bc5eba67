//! Unit tests for the user roster context.
