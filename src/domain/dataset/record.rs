//! One input row: a user's attributes plus one weighted preference.

use serde::Serialize;

use crate::domain::foundation::{PreferenceName, UserId, ValidationError};
use crate::domain::user::UserProfile;

/// A single (user, preference) row of the input data.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PreferenceRecord {
    pub user_id: UserId,
    pub profile: UserProfile,
    pub preference: PreferenceName,
    pub weight: f64,
}

impl PreferenceRecord {
    /// Create a record. The weight must be a finite number.
    pub fn new(
        user_id: UserId,
        profile: UserProfile,
        preference: PreferenceName,
        weight: f64,
    ) -> Result<Self, ValidationError> {
        if !weight.is_finite() {
            return Err(ValidationError::invalid_format(
                "preference_weight",
                "must be a finite number",
            ));
        }
        Ok(Self {
            user_id,
            profile,
            preference,
            weight,
        })
    }
}
