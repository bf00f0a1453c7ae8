//! Recommendation tuning, read from `RECOMMENDER_*` variables

use serde::Deserialize;

use super::error::ValidationError;
use crate::domain::recommendation::RecommendationPolicy;

/// Recommender configuration
#[derive(Debug, Clone, Deserialize)]
pub struct RecommenderConfig {
    /// Years either side of the queried age
    #[serde(default = "default_age_window")]
    pub age_window: u32,

    /// How many similar users to consult
    #[serde(default = "default_similar_users")]
    pub similar_users: usize,

    /// How many preferences to return
    #[serde(default = "default_top_n")]
    pub top_n: usize,
}

impl RecommenderConfig {
    /// Domain policy for the recommendation handler
    pub fn policy(&self) -> RecommendationPolicy {
        RecommendationPolicy {
            age_window: self.age_window,
            max_similar_users: self.similar_users,
            top_n: self.top_n,
        }
    }

    /// Validate recommender configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.similar_users == 0 {
            return Err(ValidationError::InvalidLimit("RECOMMENDER_SIMILAR_USERS"));
        }
        if self.top_n == 0 {
            return Err(ValidationError::InvalidLimit("RECOMMENDER_TOP_N"));
        }
        Ok(())
    }
}

impl Default for RecommenderConfig {
    fn default() -> Self {
        Self {
            age_window: default_age_window(),
            similar_users: default_similar_users(),
            top_n: default_top_n(),
        }
    }
}

fn default_age_window() -> u32 {
    10
}

fn default_similar_users() -> usize {
    5
}

fn default_top_n() -> usize {
    5
}
