//! User entity and attribute profile value object

use serde::Serialize;

use crate::domain::foundation::{UserId, ValidationError};

/// Upper bound accepted for an age attribute.
pub const MAX_AGE: u32 = 150;

/// Identity attributes shared by stored users and query profiles.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UserProfile {
    age: u32,
    occupation: String,
    location: String,
    language: String,
}

impl UserProfile {
    /// Create a profile, rejecting blank attributes and implausible ages.
    pub fn new(
        age: u32,
        occupation: impl Into<String>,
        location: impl Into<String>,
        language: impl Into<String>,
    ) -> Result<Self, ValidationError> {
        if age > MAX_AGE {
            return Err(ValidationError::out_of_range(
                "age",
                0,
                i64::from(MAX_AGE),
                i64::from(age),
            ));
        }
        let occupation = non_blank("occupation", occupation.into())?;
        let location = non_blank("location", location.into())?;
        let language = non_blank("language", language.into())?;

        Ok(Self {
            age,
            occupation,
            location,
            language,
        })
    }

    pub fn age(&self) -> u32 {
        self.age
    }

    pub fn occupation(&self) -> &str {
        &self.occupation
    }

    pub fn location(&self) -> &str {
        &self.location
    }

    pub fn language(&self) -> &str {
        &self.language
    }

    /// True when occupation, location and language are identical.
    pub fn same_background(&self, other: &UserProfile) -> bool {
        self.occupation == other.occupation
            && self.location == other.location
            && self.language == other.language
    }
}

fn non_blank(field: &str, value: String) -> Result<String, ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::empty_field(field));
    }
    Ok(value)
}

/// A user stored in the graph.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct User {
    id: UserId,
    profile: UserProfile,
}

impl User {
    pub fn new(id: UserId, profile: UserProfile) -> Self {
        Self { id, profile }
    }

    pub fn id(&self) -> UserId {
        self.id
    }

    pub fn profile(&self) -> &UserProfile {
        &self.profile
    }
}
