//! In-Memory Preference Graph Adapter
//!
//! Holds users, preferences and edges in memory with the same key rules as
//! the Neo4j schema. Useful for testing and development.

use async_trait::async_trait;
use std::collections::{BTreeMap, BTreeSet, HashSet};
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::domain::foundation::{DomainError, ErrorCode, PreferenceName, UserId};
use crate::domain::recommendation::{SimilarityQuery, UserPreference};
use crate::domain::user::User;
use crate::ports::{PreferenceGraphReader, PreferenceGraphWriter};

#[derive(Debug, Default)]
struct GraphState {
    users: BTreeMap<UserId, User>,
    preferences: BTreeSet<PreferenceName>,
    edges: BTreeMap<(UserId, PreferenceName), f64>,
    constrained: bool,
}

/// In-memory graph implementing both graph ports
#[derive(Debug, Clone, Default)]
pub struct InMemoryPreferenceGraph {
    state: Arc<RwLock<GraphState>>,
}

impl InMemoryPreferenceGraph {
    /// Create an empty graph
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of stored users, ascending by id
    pub async fn users(&self) -> Vec<User> {
        self.state.read().await.users.values().cloned().collect()
    }

    /// Snapshot of stored preference names, ascending
    pub async fn preferences(&self) -> Vec<PreferenceName> {
        self.state.read().await.preferences.iter().cloned().collect()
    }

    /// Snapshot of stored edges as `(user, preference, weight)`
    pub async fn edges(&self) -> Vec<(UserId, PreferenceName, f64)> {
        self.state
            .read()
            .await
            .edges
            .iter()
            .map(|((user_id, name), weight)| (*user_id, name.clone(), *weight))
            .collect()
    }

    /// Whether uniqueness constraints have been declared
    pub async fn is_constrained(&self) -> bool {
        self.state.read().await.constrained
    }
}

#[async_trait]
impl PreferenceGraphWriter for InMemoryPreferenceGraph {
    async fn clear(&self) -> Result<(), DomainError> {
        let mut state = self.state.write().await;
        state.users.clear();
        state.preferences.clear();
        state.edges.clear();
        Ok(())
    }

    async fn ensure_constraints(&self) -> Result<(), DomainError> {
        self.state.write().await.constrained = true;
        Ok(())
    }

    async fn create_user(&self, user: &User) -> Result<(), DomainError> {
        let mut state = self.state.write().await;
        if state.constrained && state.users.contains_key(&user.id()) {
            return Err(DomainError::new(
                ErrorCode::ConstraintViolation,
                format!("User already exists: {}", user.id()),
            )
            .with_detail("label", "User")
            .with_detail("key", "user_id"));
        }
        state.users.insert(user.id(), user.clone());
        Ok(())
    }

    async fn merge_preference(&self, name: &PreferenceName) -> Result<(), DomainError> {
        self.state.write().await.preferences.insert(name.clone());
        Ok(())
    }

    async fn merge_edge(
        &self,
        user_id: UserId,
        preference: &PreferenceName,
        weight: f64,
    ) -> Result<(), DomainError> {
        let mut state = self.state.write().await;
        if !state.users.contains_key(&user_id) {
            return Err(DomainError::new(
                ErrorCode::UserNotFound,
                format!("User not found: {}", user_id),
            ));
        }
        if !state.preferences.contains(preference) {
            return Err(DomainError::new(
                ErrorCode::PreferenceNotFound,
                format!("Preference not found: {}", preference),
            ));
        }
        state.edges.insert((user_id, preference.clone()), weight);
        Ok(())
    }
}

#[async_trait]
impl PreferenceGraphReader for InMemoryPreferenceGraph {
    async fn find_similar_users(
        &self,
        query: &SimilarityQuery,
    ) -> Result<Vec<UserId>, DomainError> {
        let state = self.state.read().await;
        Ok(state
            .users
            .values()
            .filter(|user| query.matches(user))
            .map(|user| user.id())
            .take(query.limit)
            .collect())
    }

    async fn preferences_of_users(
        &self,
        user_ids: &[UserId],
    ) -> Result<Vec<UserPreference>, DomainError> {
        if user_ids.is_empty() {
            return Ok(Vec::new());
        }
        let wanted: HashSet<&UserId> = user_ids.iter().collect();
        let state = self.state.read().await;
        Ok(state
            .edges
            .keys()
            .filter(|(user_id, _)| wanted.contains(user_id))
            .map(|(user_id, preference)| UserPreference {
                user_id: *user_id,
                preference: preference.clone(),
            })
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::recommendation::RecommendationPolicy;
    use crate::domain::user::UserProfile;

    fn user(id: i64, age: u32) -> User {
        User::new(
            UserId::new(id),
            UserProfile::new(age, "lawyer", "Houston", "Arabic").unwrap(),
        )
    }

    fn name(value: &str) -> PreferenceName {
        PreferenceName::new(value).unwrap()
    }

    #[tokio::test]
    async fn duplicate_user_rejected_once_constrained() {
        let graph = InMemoryPreferenceGraph::new();
        graph.ensure_constraints().await.unwrap();
        graph.create_user(&user(1, 30)).await.unwrap();

        let err = graph.create_user(&user(1, 31)).await.unwrap_err();
        assert_eq!(err.code, ErrorCode::ConstraintViolation);
    }

    #[tokio::test]
    async fn merge_preference_is_idempotent() {
        let graph = InMemoryPreferenceGraph::new();
        graph.merge_preference(&name("Frequent examples")).await.unwrap();
        graph.merge_preference(&name("Frequent examples")).await.unwrap();

        assert_eq!(graph.preferences().await.len(), 1);
    }

    #[tokio::test]
    async fn merge_edge_updates_weight_in_place() {
        let graph = InMemoryPreferenceGraph::new();
        graph.create_user(&user(1, 30)).await.unwrap();
        graph.merge_preference(&name("Frequent examples")).await.unwrap();
        graph
            .merge_edge(UserId::new(1), &name("Frequent examples"), 0.2)
            .await
            .unwrap();
        graph
            .merge_edge(UserId::new(1), &name("Frequent examples"), 0.7)
            .await
            .unwrap();

        let edges = graph.edges().await;
        assert_eq!(edges.len(), 1);
        assert_eq!(edges[0].2, 0.7);
    }

    #[tokio::test]
    async fn merge_edge_requires_both_endpoints() {
        let graph = InMemoryPreferenceGraph::new();
        graph.create_user(&user(1, 30)).await.unwrap();

        let missing_pref = graph
            .merge_edge(UserId::new(1), &name("Minimal examples"), 0.5)
            .await
            .unwrap_err();
        assert_eq!(missing_pref.code, ErrorCode::PreferenceNotFound);

        let missing_user = graph
            .merge_edge(UserId::new(9), &name("Minimal examples"), 0.5)
            .await
            .unwrap_err();
        assert_eq!(missing_user.code, ErrorCode::UserNotFound);
    }

    #[tokio::test]
    async fn similar_users_are_limited_and_ordered() {
        let graph = InMemoryPreferenceGraph::new();
        for id in (1..=8).rev() {
            graph.create_user(&user(id, 30)).await.unwrap();
        }
        let query = SimilarityQuery::new(
            UserProfile::new(30, "lawyer", "Houston", "Arabic").unwrap(),
            &RecommendationPolicy::default(),
        );

        let ids = graph.find_similar_users(&query).await.unwrap();

        let expected: Vec<_> = (1..=5).map(UserId::new).collect();
        assert_eq!(ids, expected);
    }

    #[tokio::test]
    async fn clear_removes_everything() {
        let graph = InMemoryPreferenceGraph::new();
        graph.create_user(&user(1, 30)).await.unwrap();
        graph.merge_preference(&name("Simple language")).await.unwrap();
        graph
            .merge_edge(UserId::new(1), &name("Simple language"), 0.1)
            .await
            .unwrap();

        graph.clear().await.unwrap();

        assert!(graph.users().await.is_empty());
        assert!(graph.preferences().await.is_empty());
        assert!(graph.edges().await.is_empty());
    }
}
