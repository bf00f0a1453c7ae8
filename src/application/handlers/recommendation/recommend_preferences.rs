//! RecommendPreferencesHandler - Query handler recommending preferences for
//! a user who is not in the graph.

use std::sync::Arc;

use thiserror::Error;
use tracing::debug;

use crate::domain::foundation::DomainError;
use crate::domain::recommendation::{
    tally_preferences, Recommendation, RecommendationPolicy, SimilarityQuery,
};
use crate::domain::user::UserProfile;
use crate::ports::PreferenceGraphReader;

/// Query with the attributes of the new user.
#[derive(Debug, Clone)]
pub struct RecommendPreferencesQuery {
    pub profile: UserProfile,
}

/// Errors that can occur while computing recommendations.
#[derive(Debug, Error)]
pub enum RecommendError {
    /// The graph store could not answer a lookup.
    #[error("Domain error: {0}")]
    Domain(#[from] DomainError),
}

/// Handler for preference recommendations.
pub struct RecommendPreferencesHandler {
    reader: Arc<dyn PreferenceGraphReader>,
    policy: RecommendationPolicy,
}

impl RecommendPreferencesHandler {
    pub fn new(reader: Arc<dyn PreferenceGraphReader>, policy: RecommendationPolicy) -> Self {
        Self { reader, policy }
    }

    pub async fn handle(
        &self,
        query: RecommendPreferencesQuery,
    ) -> Result<Vec<Recommendation>, RecommendError> {
        // 1. Similar users
        let similarity = SimilarityQuery::new(query.profile, &self.policy);
        let similar_users = self.reader.find_similar_users(&similarity).await?;

        if similar_users.is_empty() {
            debug!("No similar users, nothing to recommend");
            return Ok(Vec::new());
        }

        // 2. Their preferences, counted
        let preferences = self.reader.preferences_of_users(&similar_users).await?;
        let recommendations = tally_preferences(&preferences, self.policy.top_n);

        debug!(
            similar_users = similar_users.len(),
            recommendations = recommendations.len(),
            "Ranked preferences of similar users"
        );
        Ok(recommendations)
    }
}
