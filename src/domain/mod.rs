//! Domain layer - Core business logic and entities.
//!
//! This module contains the pure domain model with no external dependencies
//! beyond serialization and randomness traits.

pub mod dataset;
pub mod foundation;
pub mod recommendation;
pub mod synthetic;
pub mod user;
