//! Neo4j implementation of PreferenceGraphReader.

use async_trait::async_trait;
use neo4rs::{query, Graph};
use tracing::debug;

use crate::domain::foundation::{DomainError, PreferenceName, UserId};
use crate::domain::recommendation::{SimilarityQuery, UserPreference};
use crate::ports::PreferenceGraphReader;

/// Neo4j implementation of PreferenceGraphReader.
#[derive(Clone)]
pub struct Neo4jPreferenceReader {
    graph: Graph,
}

impl Neo4jPreferenceReader {
    /// Creates a new Neo4jPreferenceReader.
    pub fn new(graph: Graph) -> Self {
        Self { graph }
    }
}

#[async_trait]
impl PreferenceGraphReader for Neo4jPreferenceReader {
    async fn find_similar_users(
        &self,
        similarity: &SimilarityQuery,
    ) -> Result<Vec<UserId>, DomainError> {
        let (min_age, max_age) = similarity.age_bounds();
        let profile = &similarity.profile;
        let limit = i64::try_from(similarity.limit).unwrap_or(i64::MAX);

        let mut rows = self
            .graph
            .execute(
                query(
                    r#"
                    MATCH (u:User)
                    WHERE u.occupation = $occupation
                      AND u.location = $location
                      AND u.language = $language
                      AND u.age >= $min_age
                      AND u.age <= $max_age
                    RETURN u.user_id AS uid
                    ORDER BY uid
                    LIMIT $limit
                    "#,
                )
                .param("occupation", profile.occupation())
                .param("location", profile.location())
                .param("language", profile.language())
                .param("min_age", min_age)
                .param("max_age", max_age)
                .param("limit", limit),
            )
            .await
            .map_err(|e| DomainError::database("Failed to query similar users", e))?;

        let mut user_ids = Vec::new();
        while let Some(row) = rows
            .next()
            .await
            .map_err(|e| DomainError::database("Failed to read similar users", e))?
        {
            let uid: i64 = row
                .get("uid")
                .map_err(|e| DomainError::database("Malformed similar user row", e))?;
            user_ids.push(UserId::new(uid));
        }

        debug!(count = user_ids.len(), "Found similar users");
        Ok(user_ids)
    }

    async fn preferences_of_users(
        &self,
        user_ids: &[UserId],
    ) -> Result<Vec<UserPreference>, DomainError> {
        if user_ids.is_empty() {
            return Ok(Vec::new());
        }
        let ids: Vec<i64> = user_ids.iter().map(UserId::as_i64).collect();

        let mut rows = self
            .graph
            .execute(
                query(
                    r#"
                    MATCH (u:User)-[:HAS_PREFERENCE]->(p:Preference)
                    WHERE u.user_id IN $user_ids
                    RETURN u.user_id AS uid, p.name AS pref
                    ORDER BY uid, pref
                    "#,
                )
                .param("user_ids", ids),
            )
            .await
            .map_err(|e| DomainError::database("Failed to query user preferences", e))?;

        let mut preferences = Vec::new();
        while let Some(row) = rows
            .next()
            .await
            .map_err(|e| DomainError::database("Failed to read user preferences", e))?
        {
            let uid: i64 = row
                .get("uid")
                .map_err(|e| DomainError::database("Malformed preference row", e))?;
            let name: String = row
                .get("pref")
                .map_err(|e| DomainError::database("Malformed preference row", e))?;
            preferences.push(UserPreference {
                user_id: UserId::new(uid),
                preference: PreferenceName::new(name)?,
            });
        }

        debug!(count = preferences.len(), "Fetched preferences of similar users");
        Ok(preferences)
    }
}
