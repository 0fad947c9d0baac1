//! Unit tests for the task domain and wire codec.

mod wire_tests;
