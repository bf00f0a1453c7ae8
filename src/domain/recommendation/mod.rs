//! Recommendation module - similarity search parameters and preference
//! tallying.
//!
//! The pipeline has two steps:
//!
//! 1. **Similarity search** - up to `max_similar_users` stored users with the
//!    same occupation, location and language, within `age_window` years
//! 2. **Aggregation** - count the preferences of those users and keep the
//!    `top_n` most common

mod similarity;
mod tally;

pub use similarity::{RecommendationPolicy, SimilarityQuery};
pub use tally::{format_recommendations, tally_preferences, Recommendation, UserPreference};
