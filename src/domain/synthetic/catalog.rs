//! Attribute and preference vocabularies for synthetic users.

pub const OCCUPATIONS: &[&str] = &[
    "school teacher",
    "software engineer",
    "banker",
    "doctor",
    "lawyer",
    "military member",
];

pub const LANGUAGES: &[&str] = &["English", "Spanish", "Mandarin", "Arabic", "French"];

pub const LOCATIONS: &[&str] = &[
    "New York",
    "Los Angeles",
    "Chicago",
    "Houston",
    "Phoenix",
    "Philadelphia",
    "San Diego",
    "Dallas",
    "San Jose",
    "Austin",
];

/// Opposing preferences; a user holds at most one side of each pair.
pub const PREFERENCE_PAIRS: &[(&str, &str)] = &[
    ("Short responses", "Detailed explanations"),
    ("Bulleted lists", "Fully formed paragraphs"),
    ("Casual and conversational tone", "Formal and academic tone"),
    ("Simple language", "Technical and detailed language"),
    ("High-level overviews", "Context-rich details"),
    ("Frequent examples", "Minimal examples"),
    ("Lighthearted humor", "Strictly serious tone"),
];

/// Preference with no opposite.
pub const STANDALONE_PREFERENCE: &str = "Use of citations";
