//! Randomized user/preference rows.

use rand::seq::SliceRandom;
use rand::Rng;

use crate::domain::dataset::PreferenceRecord;
use crate::domain::foundation::{PreferenceName, UserId, ValidationError};
use crate::domain::user::{UserProfile, MAX_AGE};

use super::catalog::{LANGUAGES, LOCATIONS, OCCUPATIONS, PREFERENCE_PAIRS, STANDALONE_PREFERENCE};

/// Shape of the generated population.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GeneratorSettings {
    pub users: u32,
    pub min_age: u32,
    pub max_age: u32,
    pub min_preferences: usize,
    pub max_preferences: usize,
    /// Chance that the standalone preference takes one of the slots.
    pub standalone_probability: f64,
}

impl Default for GeneratorSettings {
    fn default() -> Self {
        Self {
            users: 2000,
            min_age: 18,
            max_age: 70,
            min_preferences: 4,
            max_preferences: 7,
            standalone_probability: 0.3,
        }
    }
}

impl GeneratorSettings {
    /// Check that the ranges are non-empty and the probability lies in `[0, 1]`.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.min_age > self.max_age {
            return Err(ValidationError::invalid_format(
                "min_age",
                format!("must not exceed max_age ({})", self.max_age),
            ));
        }
        if self.max_age > MAX_AGE {
            return Err(ValidationError::out_of_range(
                "max_age",
                0,
                i64::from(MAX_AGE),
                i64::from(self.max_age),
            ));
        }
        if self.min_preferences > self.max_preferences {
            return Err(ValidationError::invalid_format(
                "min_preferences",
                format!("must not exceed max_preferences ({})", self.max_preferences),
            ));
        }
        if !(0.0..=1.0).contains(&self.standalone_probability) {
            return Err(ValidationError::invalid_format(
                "standalone_probability",
                "must be between 0 and 1",
            ));
        }
        Ok(())
    }
}

/// Generates preference rows for users `1..=settings.users`.
pub struct SyntheticGenerator<R: Rng> {
    rng: R,
    settings: GeneratorSettings,
}

impl<R: Rng> SyntheticGenerator<R> {
    /// Create a generator, rejecting settings that cannot be sampled.
    pub fn new(rng: R, settings: GeneratorSettings) -> Result<Self, ValidationError> {
        settings.validate()?;
        Ok(Self { rng, settings })
    }

    /// Generate every row for the configured population.
    pub fn generate(&mut self) -> Result<Vec<PreferenceRecord>, ValidationError> {
        let mut records = Vec::new();
        for id in 1..=i64::from(self.settings.users) {
            records.extend(self.generate_user(UserId::new(id))?);
        }
        Ok(records)
    }

    /// Generate the rows of a single user. May be empty when every pair
    /// happens to be skipped.
    pub fn generate_user(&mut self, id: UserId) -> Result<Vec<PreferenceRecord>, ValidationError> {
        let profile = self.random_profile()?;
        let names = self.choose_preferences();

        names
            .into_iter()
            .map(|name| {
                let weight = (self.rng.gen::<f64>() * 1000.0).round() / 1000.0;
                PreferenceRecord::new(id, profile.clone(), PreferenceName::new(name)?, weight)
            })
            .collect()
    }

    fn random_profile(&mut self) -> Result<UserProfile, ValidationError> {
        let age = self
            .rng
            .gen_range(self.settings.min_age..=self.settings.max_age);
        UserProfile::new(
            age,
            pick(&mut self.rng, OCCUPATIONS),
            pick(&mut self.rng, LOCATIONS),
            pick(&mut self.rng, LANGUAGES),
        )
    }

    fn choose_preferences(&mut self) -> Vec<&'static str> {
        let wanted = self
            .rng
            .gen_range(self.settings.min_preferences..=self.settings.max_preferences);
        let include_standalone = self.rng.gen_bool(self.settings.standalone_probability);
        let pair_slots = wanted.saturating_sub(usize::from(include_standalone));

        let mut pairs: Vec<(&'static str, &'static str)> = PREFERENCE_PAIRS.to_vec();
        pairs.shuffle(&mut self.rng);

        let mut chosen = Vec::with_capacity(wanted);
        for (first, second) in pairs {
            if chosen.len() >= pair_slots {
                break;
            }
            // first, second or neither with equal chance
            match self.rng.gen_range(0..3) {
                0 => chosen.push(first),
                1 => chosen.push(second),
                _ => {}
            }
        }

        if include_standalone && chosen.len() < wanted {
            chosen.push(STANDALONE_PREFERENCE);
        }
        chosen.truncate(wanted);
        chosen
    }
}

fn pick<R: Rng>(rng: &mut R, values: &[&'static str]) -> &'static str {
    values.choose(rng).copied().unwrap_or_default()
}
