//! Dataset assembly: collapses input rows into the node and edge sets
//! written to the graph.

use std::collections::{BTreeSet, HashMap, HashSet};

use tracing::warn;

use crate::domain::foundation::{PreferenceName, UserId};
use crate::domain::user::User;

use super::PreferenceRecord;

/// A weighted `User -> Preference` relation.
#[derive(Debug, Clone, PartialEq)]
pub struct PreferenceEdge {
    pub user_id: UserId,
    pub preference: PreferenceName,
    pub weight: f64,
}

/// Deduplicated content of one load.
///
/// - one `User` per distinct id, attributes from its first row
/// - one preference per distinct name, sorted by name
/// - one edge per (user, preference) pair, weight from its first row
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Dataset {
    users: Vec<User>,
    preferences: Vec<PreferenceName>,
    edges: Vec<PreferenceEdge>,
}

impl Dataset {
    /// Build a dataset from input rows, keeping first-seen order for users
    /// and edges.
    pub fn from_records<I>(records: I) -> Self
    where
        I: IntoIterator<Item = PreferenceRecord>,
    {
        let mut users: Vec<User> = Vec::new();
        let mut user_index: HashMap<UserId, usize> = HashMap::new();
        let mut preferences: BTreeSet<PreferenceName> = BTreeSet::new();
        let mut edges: Vec<PreferenceEdge> = Vec::new();
        let mut seen_pairs: HashSet<(UserId, PreferenceName)> = HashSet::new();

        for record in records {
            match user_index.get(&record.user_id) {
                Some(&idx) => {
                    if users[idx].profile() != &record.profile {
                        warn!(
                            user_id = %record.user_id,
                            "Ignoring attributes that disagree with the first row for this user"
                        );
                    }
                }
                None => {
                    user_index.insert(record.user_id, users.len());
                    users.push(User::new(record.user_id, record.profile.clone()));
                }
            }

            preferences.insert(record.preference.clone());

            if !seen_pairs.insert((record.user_id, record.preference.clone())) {
                warn!(
                    user_id = %record.user_id,
                    preference = %record.preference,
                    "Ignoring repeated preference row for user"
                );
                continue;
            }

            edges.push(PreferenceEdge {
                user_id: record.user_id,
                preference: record.preference,
                weight: record.weight,
            });
        }

        Self {
            users,
            preferences: preferences.into_iter().collect(),
            edges,
        }
    }

    pub fn users(&self) -> &[User] {
        &self.users
    }

    pub fn preferences(&self) -> &[PreferenceName] {
        &self.preferences
    }

    pub fn edges(&self) -> &[PreferenceEdge] {
        &self.edges
    }

    pub fn is_empty(&self) -> bool {
        self.users.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::user::UserProfile;

    fn record(id: i64, age: u32, preference: &str, weight: f64) -> PreferenceRecord {
        PreferenceRecord::new(
            UserId::new(id),
            UserProfile::new(age, "banker", "Dallas", "English").unwrap(),
            PreferenceName::new(preference).unwrap(),
            weight,
        )
        .unwrap()
    }

    #[test]
    fn one_user_per_distinct_id() {
        let dataset = Dataset::from_records(vec![
            record(1, 30, "Short responses", 0.1),
            record(1, 30, "Bulleted lists", 0.2),
            record(2, 40, "Short responses", 0.3),
        ]);

        let ids: Vec<_> = dataset.users().iter().map(|u| u.id()).collect();
        assert_eq!(ids, vec![UserId::new(1), UserId::new(2)]);
    }

    #[test]
    fn first_seen_attributes_win() {
        let dataset = Dataset::from_records(vec![
            record(1, 30, "Short responses", 0.1),
            record(1, 55, "Bulleted lists", 0.2),
        ]);

        assert_eq!(dataset.users()[0].profile().age(), 30);
    }

    #[test]
    fn preferences_are_distinct_and_sorted() {
        let dataset = Dataset::from_records(vec![
            record(1, 30, "Short responses", 0.1),
            record(2, 30, "Bulleted lists", 0.2),
            record(3, 30, "Short responses", 0.3),
        ]);

        let names: Vec<_> = dataset.preferences().iter().map(|p| p.as_str()).collect();
        assert_eq!(names, vec!["Bulleted lists", "Short responses"]);
    }

    #[test]
    fn repeated_pair_keeps_first_weight() {
        let dataset = Dataset::from_records(vec![
            record(1, 30, "Short responses", 0.1),
            record(1, 30, "Short responses", 0.9),
        ]);

        assert_eq!(dataset.edges().len(), 1);
        assert_eq!(dataset.edges()[0].weight, 0.1);
    }

    #[test]
    fn empty_input_gives_empty_dataset() {
        let dataset = Dataset::from_records(Vec::new());
        assert!(dataset.is_empty());
        assert!(dataset.preferences().is_empty());
        assert!(dataset.edges().is_empty());
    }
}
