//! Integration tests for synthetic generation through the CSV adapters.

use std::collections::{BTreeMap, HashSet};

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use preference_graph::adapters::csv::{read_records, write_records};
use preference_graph::domain::dataset::Dataset;
use preference_graph::domain::synthetic::catalog::{PREFERENCE_PAIRS, STANDALONE_PREFERENCE};
use preference_graph::domain::synthetic::{GeneratorSettings, SyntheticGenerator};

fn generate(seed: u64, users: u32) -> Vec<preference_graph::domain::dataset::PreferenceRecord> {
    SyntheticGenerator::new(
        ChaCha8Rng::seed_from_u64(seed),
        GeneratorSettings {
            users,
            ..Default::default()
        },
    )
    .unwrap()
    .generate()
    .unwrap()
}

#[test]
fn generated_file_reads_back_identically() {
    let records = generate(42, 100);
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("user_preferences.csv");

    write_records(&path, &records).unwrap();
    let read_back = read_records(&path).unwrap();

    assert_eq!(read_back, records);
}

#[test]
fn generated_rows_form_a_consistent_dataset() {
    let records = generate(1, 500);
    let row_count = records.len();
    let dataset = Dataset::from_records(records);

    // one row per (user, preference) pair, so nothing is collapsed
    assert_eq!(dataset.edges().len(), row_count);
    assert!(dataset.users().len() <= 500);
    for user in dataset.users() {
        assert!((1..=500).contains(&user.id().as_i64()));
    }
}

#[test]
fn only_catalog_preferences_appear() {
    let mut known: HashSet<&str> = HashSet::new();
    for (first, second) in PREFERENCE_PAIRS {
        known.insert(*first);
        known.insert(*second);
    }
    known.insert(STANDALONE_PREFERENCE);

    for record in generate(8, 200) {
        assert!(known.contains(record.preference.as_str()));
    }
}

#[test]
fn per_user_counts_stay_within_bounds() {
    let mut per_user: BTreeMap<i64, usize> = BTreeMap::new();
    for record in generate(21, 400) {
        *per_user.entry(record.user_id.as_i64()).or_default() += 1;
    }

    assert!(per_user.values().all(|&n| (1..=7).contains(&n)));
}
