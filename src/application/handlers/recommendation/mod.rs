//! Recommendation query handlers.

mod recommend_preferences;

pub use recommend_preferences::{
    RecommendError, RecommendPreferencesHandler, RecommendPreferencesQuery,
};
