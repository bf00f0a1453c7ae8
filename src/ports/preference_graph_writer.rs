//! Preference graph writer port (load side).
//!
//! Defines the contract for populating the graph store with users,
//! preferences and weighted edges.
//!
//! # Design
//!
//! - **Destructive load**: callers wipe the store before writing
//! - **Merge-on-key**: preferences and edges are merged, so repeated writes
//!   of the same key never duplicate nodes or relationships

use crate::domain::foundation::{DomainError, PreferenceName, UserId};
use crate::domain::user::User;
use async_trait::async_trait;

/// Writer port for the preference graph.
#[async_trait]
pub trait PreferenceGraphWriter: Send + Sync {
    /// Delete every node and relationship.
    async fn clear(&self) -> Result<(), DomainError>;

    /// Declare uniqueness of `User.user_id` and `Preference.name`.
    ///
    /// Safe to call repeatedly.
    async fn ensure_constraints(&self) -> Result<(), DomainError>;

    /// Create a `User` node.
    ///
    /// # Errors
    ///
    /// - `ConstraintViolation` if a user with the same id exists
    /// - `DatabaseError` on persistence failure
    async fn create_user(&self, user: &User) -> Result<(), DomainError>;

    /// Create the `Preference` node if no node with this name exists.
    async fn merge_preference(&self, name: &PreferenceName) -> Result<(), DomainError>;

    /// Create or update the single edge between a user and a preference,
    /// setting its weight.
    ///
    /// # Errors
    ///
    /// - `UserNotFound` / `PreferenceNotFound` if either endpoint is missing
    /// - `DatabaseError` on persistence failure
    async fn merge_edge(
        &self,
        user_id: UserId,
        preference: &PreferenceName,
        weight: f64,
    ) -> Result<(), DomainError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    // Trait object safety test
    #[test]
    fn preference_graph_writer_is_object_safe() {
        fn _accepts_dyn(_writer: &dyn PreferenceGraphWriter) {}
    }
}
