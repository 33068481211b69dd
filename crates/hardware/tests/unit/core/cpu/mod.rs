//! Execution engine tests.
