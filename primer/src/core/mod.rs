//! Deterministic, pure logic.
//!
//! Core modules must be free of I/O side effects. They operate on in-memory
//! data and return deterministic outputs suitable for tests.

pub mod binary_table;
pub mod oldest;
pub mod person;
