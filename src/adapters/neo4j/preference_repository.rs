//! Neo4j implementation of PreferenceGraphWriter.
//!
//! Persists users, preferences and `HAS_PREFERENCE` edges with Cypher.

use async_trait::async_trait;
use neo4rs::{query, Graph};

use crate::domain::foundation::{DomainError, ErrorCode, PreferenceName, UserId};
use crate::domain::user::User;
use crate::ports::PreferenceGraphWriter;

const USER_CONSTRAINT: &str =
    "CREATE CONSTRAINT user_id_unique IF NOT EXISTS FOR (u:User) REQUIRE u.user_id IS UNIQUE";

const PREFERENCE_CONSTRAINT: &str =
    "CREATE CONSTRAINT preference_name_unique IF NOT EXISTS FOR (p:Preference) REQUIRE p.name IS UNIQUE";

/// Neo4j implementation of PreferenceGraphWriter.
#[derive(Clone)]
pub struct Neo4jPreferenceRepository {
    graph: Graph,
}

impl Neo4jPreferenceRepository {
    /// Creates a new Neo4jPreferenceRepository.
    pub fn new(graph: Graph) -> Self {
        Self { graph }
    }
}

#[async_trait]
impl PreferenceGraphWriter for Neo4jPreferenceRepository {
    async fn clear(&self) -> Result<(), DomainError> {
        self.graph
            .run(query("MATCH (n) DETACH DELETE n"))
            .await
            .map_err(|e| DomainError::database("Failed to clear graph", e))
    }

    async fn ensure_constraints(&self) -> Result<(), DomainError> {
        for statement in [USER_CONSTRAINT, PREFERENCE_CONSTRAINT] {
            self.graph
                .run(query(statement))
                .await
                .map_err(|e| DomainError::database("Failed to create constraint", e))?;
        }
        Ok(())
    }

    async fn create_user(&self, user: &User) -> Result<(), DomainError> {
        let profile = user.profile();
        self.graph
            .run(
                query(
                    r#"
                    CREATE (u:User {
                        user_id: $user_id,
                        age: $age,
                        occupation: $occupation,
                        location: $location,
                        language: $language
                    })
                    "#,
                )
                .param("user_id", user.id().as_i64())
                .param("age", i64::from(profile.age()))
                .param("occupation", profile.occupation())
                .param("location", profile.location())
                .param("language", profile.language()),
            )
            .await
            .map_err(|e| {
                let message = e.to_string();
                if message.contains("ConstraintValidationFailed") || message.contains("already exists") {
                    DomainError::new(
                        ErrorCode::ConstraintViolation,
                        format!("User already exists: {}", user.id()),
                    )
                    .with_detail("label", "User")
                    .with_detail("key", "user_id")
                } else {
                    DomainError::database("Failed to create user", message)
                }
            })
    }

    async fn merge_preference(&self, name: &PreferenceName) -> Result<(), DomainError> {
        self.graph
            .run(query("MERGE (p:Preference {name: $name})").param("name", name.as_str()))
            .await
            .map_err(|e| DomainError::database("Failed to merge preference", e))
    }

    async fn merge_edge(
        &self,
        user_id: UserId,
        preference: &PreferenceName,
        weight: f64,
    ) -> Result<(), DomainError> {
        let mut rows = self
            .graph
            .execute(
                query(
                    r#"
                    OPTIONAL MATCH (u:User {user_id: $user_id})
                    OPTIONAL MATCH (p:Preference {name: $name})
                    FOREACH (_ IN CASE WHEN u IS NOT NULL AND p IS NOT NULL THEN [1] ELSE [] END |
                        MERGE (u)-[r:HAS_PREFERENCE]->(p)
                        SET r.weight = $weight
                    )
                    RETURN u IS NOT NULL AS user_found, p IS NOT NULL AS preference_found
                    "#,
                )
                .param("user_id", user_id.as_i64())
                .param("name", preference.as_str())
                .param("weight", weight),
            )
            .await
            .map_err(|e| DomainError::database("Failed to merge preference edge", e))?;

        let row = rows
            .next()
            .await
            .map_err(|e| DomainError::database("Failed to read edge merge result", e))?
            .ok_or_else(|| {
                DomainError::new(ErrorCode::DatabaseError, "Edge merge returned no result")
            })?;

        let user_found: bool = row
            .get("user_found")
            .map_err(|e| DomainError::database("Malformed edge merge result", e))?;
        let preference_found: bool = row
            .get("preference_found")
            .map_err(|e| DomainError::database("Malformed edge merge result", e))?;

        if !user_found {
            return Err(DomainError::new(
                ErrorCode::UserNotFound,
                format!("User not found: {}", user_id),
            ));
        }
        if !preference_found {
            return Err(DomainError::new(
                ErrorCode::PreferenceNotFound,
                format!("Preference not found: {}", preference),
            ));
        }
        Ok(())
    }
}
