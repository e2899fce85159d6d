//! Shared test fixtures for the repoma workspace.
//!
//! [`TestRepo`] is a throwaway repository checkout in a temporary directory.
//! It is removed when dropped.

mod fixtures;

pub use fixtures::*;
