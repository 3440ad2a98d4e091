//! Static fate tables.
//!
//! Keyword tables are ordered slices, not maps: the first keyword found in
//! the visitor's answer wins, so declaration order is match priority.
//! "engineer" is checked before "writer", for instance, so a "software
//! engineer and writer" gets engineering fates.

/// A keyword and the three fates it unlocks.
pub type KeywordFates = (&'static str, [&'static str; 3]);

/// Fates keyed by occupation keyword, in match priority order.
pub const OCCUPATION_FATES: &[KeywordFates] = &[
    (
        "programmer",
        ["Electrocution", "Brain Aneurysm", "Caffeine Overdose"],
    ),
    (
        "teacher",
        [
            "Chalk Dust Inhalation",
            "Student Uprising",
            "Grading Exhaustion",
        ],
    ),
    (
        "doctor",
        ["Hospital Superbug", "Surgical Mishap", "Prescription Error"],
    ),
    (
        "lawyer",
        [
            "Buried Under Paperwork",
            "Courtroom Cardiac Arrest",
            "Truth Overdose",
        ],
    ),
    (
        "artist",
        [
            "Toxic Paint Fumes",
            "Crushed by Sculpture",
            "Inspiration Overload",
        ],
    ),
    ("chef", ["Kitchen Fire", "Food Critic Revenge", "Knife Accident"]),
    (
        "accountant",
        [
            "Spreadsheet Hypnosis",
            "Tax Season Stress",
            "Calculator Explosion",
        ],
    ),
    (
        "engineer",
        [
            "Blueprint Avalanche",
            "Bridge Collapse",
            "Prototype Malfunction",
        ],
    ),
    (
        "writer",
        ["Deadline Stress", "Plot Hole Fall", "Character Rebellion"],
    ),
    (
        "scientist",
        [
            "Lab Explosion",
            "Experimental Mishap",
            "Theory Disproval Shock",
        ],
    ),
];

/// Occupation fates when no keyword matches.
pub const DEFAULT_OCCUPATION_FATES: [&str; 3] = [
    "Cosmic Alignment",
    "Statistical Inevitability",
    "Algorithm Fulfillment",
];

/// Fates keyed by hobby keyword, in match priority order.
pub const HOBBY_FATES: &[KeywordFates] = &[
    (
        "swimming",
        ["Whirlpool", "Kraken Attack", "Synchronized Drowning"],
    ),
    (
        "hiking",
        ["Mountain Collapse", "Wildlife Encounter", "GPS Failure"],
    ),
    (
        "reading",
        [
            "Paper Cut Infection",
            "Bookshelf Collapse",
            "Fiction-Reality Confusion",
        ],
    ),
    (
        "gaming",
        [
            "Reality Dissociation",
            "Game World Crossover",
            "Ragequit Cardiac Event",
        ],
    ),
    (
        "cooking",
        [
            "Food Poisoning Irony",
            "Kitchen Appliance Revolt",
            "Recipe Disaster",
        ],
    ),
    (
        "gardening",
        ["Exotic Plant Toxin", "Compost Collapse", "Mutant Vegetation"],
    ),
    (
        "music",
        [
            "Sonic Resonance",
            "Instrument Impalement",
            "Final Note Phenomenon",
        ],
    ),
    (
        "sports",
        [
            "Ball Trajectory Mishap",
            "Celebratory Accident",
            "Competitive Overexertion",
        ],
    ),
    (
        "painting",
        [
            "Toxic Color Combination",
            "Art Critics' Vengeance",
            "Canvas Void Portal",
        ],
    ),
    (
        "photography",
        [
            "Camera Soul Capture",
            "Flash Blindness Accident",
            "Forbidden Subject",
        ],
    ),
];

/// Hobby fates when no keyword matches.
pub const DEFAULT_HOBBY_FATES: [&str; 3] = [
    "Entropy Acceleration",
    "Quantum Uncertainty",
    "Probability Collapse",
];

/// Fates open to everyone.
pub const COMMON_FATES: [&str; 5] = [
    "Digital Data Corruption",
    "Virtual Reality Entrapment",
    "AI Uprising Casualty",
    "Identity Theft Completion",
    "Social Media Karma",
];

/// An ordered keyword table with a fallback row.
#[derive(Debug, Clone, Copy)]
pub struct KeywordTable {
    /// Keyword rows in priority order.
    pub entries: &'static [KeywordFates],
    /// Used when nothing matches.
    pub fallback: [&'static str; 3],
}

impl KeywordTable {
    /// The occupation table.
    pub const OCCUPATIONS: Self = Self {
        entries: OCCUPATION_FATES,
        fallback: DEFAULT_OCCUPATION_FATES,
    };

    /// The hobby table.
    pub const HOBBIES: Self = Self {
        entries: HOBBY_FATES,
        fallback: DEFAULT_HOBBY_FATES,
    };

    /// The first row whose keyword occurs in `text`, ignoring case.
    pub fn first_match(&self, text: &str) -> Option<&'static KeywordFates> {
        let text = text.to_lowercase();
        self.entries
            .iter()
            .find(|(keyword, _)| text.contains(keyword))
    }

    /// Whether any table, fallback included, can produce `fate`.
    pub fn contains_fate(&self, fate: &str) -> bool {
        self.fallback.contains(&fate)
            || self
                .entries
                .iter()
                .any(|(_, fates)| fates.contains(&fate))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tables_have_ten_keywords() {
        assert_eq!(OCCUPATION_FATES.len(), 10);
        assert_eq!(HOBBY_FATES.len(), 10);
    }

    #[test]
    fn keywords_are_lowercase() {
        for (keyword, _) in OCCUPATION_FATES.iter().chain(HOBBY_FATES) {
            assert_eq!(*keyword, keyword.to_lowercase());
        }
    }

    #[test]
    fn match_is_case_insensitive_substring() {
        let (keyword, fates) = KeywordTable::OCCUPATIONS
            .first_match("Senior PROGRAMMER, Backend")
            .unwrap();
        assert_eq!(*keyword, "programmer");
        assert_eq!(fates[0], "Electrocution");
    }

    #[test]
    fn declaration_order_breaks_ties() {
        let (keyword, _) = KeywordTable::OCCUPATIONS
            .first_match("writer and engineer")
            .unwrap();
        assert_eq!(*keyword, "engineer");

        let (keyword, _) = KeywordTable::HOBBIES
            .first_match("painting, music")
            .unwrap();
        assert_eq!(*keyword, "music");
    }

    #[test]
    fn no_match_returns_none() {
        assert!(KeywordTable::OCCUPATIONS.first_match("astronaut").is_none());
        assert!(KeywordTable::HOBBIES.first_match("").is_none());
    }

    #[test]
    fn contains_fate_sees_fallbacks() {
        assert!(KeywordTable::OCCUPATIONS.contains_fate("Cosmic Alignment"));
        assert!(KeywordTable::HOBBIES.contains_fate("GPS Failure"));
        assert!(!KeywordTable::HOBBIES.contains_fate("Electrocution"));
    }
}
