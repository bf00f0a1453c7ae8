//! Preference graph reader port (query side).
//!
//! The two read queries of the recommendation pipeline. Both are pure reads
//! against the current snapshot of the store.

use crate::domain::foundation::{DomainError, UserId};
use crate::domain::recommendation::{SimilarityQuery, UserPreference};
use async_trait::async_trait;

/// Reader port for recommendation queries.
#[async_trait]
pub trait PreferenceGraphReader: Send + Sync {
    /// Ids of up to `query.limit` users matching the query, ascending by id.
    async fn find_similar_users(&self, query: &SimilarityQuery)
        -> Result<Vec<UserId>, DomainError>;

    /// Every (user, preference) link of the given users.
    ///
    /// Returns an empty list for an empty id slice.
    async fn preferences_of_users(
        &self,
        user_ids: &[UserId],
    ) -> Result<Vec<UserPreference>, DomainError>;
}
