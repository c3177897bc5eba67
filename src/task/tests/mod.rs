//! Unit tests for the task tracking context.

mod service_tests;
