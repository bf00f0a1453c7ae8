//! User module - stored users and the attribute profile used for
//! similarity search.
//!
//! # Domain Invariants
//!
//! 1. A `User` is identified by its `UserId`; one node per id
//! 2. Profile text attributes are non-blank and compared exactly
//! 3. Users are immutable once loaded

pub mod profile;

pub use profile::{User, UserProfile, MAX_AGE};
