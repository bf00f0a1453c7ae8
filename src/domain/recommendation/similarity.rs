//! Similarity search parameters.

use crate::domain::user::{User, UserProfile};

/// Tunables of the recommendation pipeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RecommendationPolicy {
    /// Inclusive distance allowed between stored and queried age.
    pub age_window: u32,
    /// Maximum number of similar users consulted.
    pub max_similar_users: usize,
    /// Maximum number of recommendations returned.
    pub top_n: usize,
}

impl Default for RecommendationPolicy {
    fn default() -> Self {
        Self {
            age_window: 10,
            max_similar_users: 5,
            top_n: 5,
        }
    }
}

/// Query for users resembling a profile.
///
/// A stored user matches when occupation, location and language are equal
/// and `|stored_age - age| <= age_window`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SimilarityQuery {
    pub profile: UserProfile,
    pub age_window: u32,
    pub limit: usize,
}

impl SimilarityQuery {
    pub fn new(profile: UserProfile, policy: &RecommendationPolicy) -> Self {
        Self {
            profile,
            age_window: policy.age_window,
            limit: policy.max_similar_users,
        }
    }

    /// Inclusive `(min_age, max_age)` bounds. The lower bound may be negative.
    pub fn age_bounds(&self) -> (i64, i64) {
        let age = i64::from(self.profile.age());
        let window = i64::from(self.age_window);
        (age - window, age + window)
    }

    pub fn matches(&self, user: &User) -> bool {
        let (min_age, max_age) = self.age_bounds();
        let age = i64::from(user.profile().age());
        self.profile.same_background(user.profile()) && age >= min_age && age <= max_age
    }
}
