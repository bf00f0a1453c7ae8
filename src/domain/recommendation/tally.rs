//! Preference frequency aggregation.

use std::collections::{HashMap, HashSet};
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{PreferenceName, UserId};

/// A preference held by one of the similar users.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct UserPreference {
    pub user_id: UserId,
    pub preference: PreferenceName,
}

/// A recommended preference and the number of similar users holding it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Recommendation {
    pub preference: PreferenceName,
    pub count: usize,
}

impl fmt::Display for Recommendation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({:?}, {})", self.preference.as_str(), self.count)
    }
}

/// Count how many distinct users hold each preference and keep the `top_n`
/// most frequent.
///
/// Ordered by descending count, then ascending name. Edge weights play no
/// part in the ranking.
pub fn tally_preferences(rows: &[UserPreference], top_n: usize) -> Vec<Recommendation> {
    let distinct: HashSet<&UserPreference> = rows.iter().collect();

    let mut counts: HashMap<&PreferenceName, usize> = HashMap::new();
    for row in distinct {
        *counts.entry(&row.preference).or_insert(0) += 1;
    }

    let mut ranked: Vec<Recommendation> = counts
        .into_iter()
        .map(|(preference, count)| Recommendation {
            preference: preference.clone(),
            count,
        })
        .collect();

    ranked.sort_by(|a, b| {
        b.count
            .cmp(&a.count)
            .then_with(|| a.preference.cmp(&b.preference))
    });
    ranked.truncate(top_n);
    ranked
}

/// Render recommendations as `[("name", count), ...]`.
pub fn format_recommendations(recommendations: &[Recommendation]) -> String {
    let items: Vec<String> = recommendations.iter().map(|r| r.to_string()).collect();
    format!("[{}]", items.join(", "))
}
