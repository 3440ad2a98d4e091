//! Candidate manners of death for a profile.

use crate::entropy::Entropy;
use crate::profile::UserProfile;
use crate::tables::{COMMON_FATES, KeywordTable};

/// Build the unshuffled candidate list for a profile.
///
/// Order: the fear-derived entry (if any), the occupation fates (matched or
/// default), the hobby fates (matched, plus the hobby defaults whenever the
/// list still holds three or fewer entries), then the common fates.
pub fn candidate_fates(profile: &UserProfile) -> Vec<String> {
    let mut fates: Vec<String> = Vec::with_capacity(15);

    let occupation = KeywordTable::OCCUPATIONS
        .first_match(&profile.occupation)
        .map_or(KeywordTable::OCCUPATIONS.fallback, |(_, row)| *row);
    fates.extend(occupation.iter().map(|s| (*s).to_string()));

    if let Some((_, hobby)) = KeywordTable::HOBBIES.first_match(&profile.hobbies) {
        fates.extend(hobby.iter().map(|s| (*s).to_string()));
    }
    if fates.len() <= 3 {
        fates.extend(KeywordTable::HOBBIES.fallback.iter().map(|s| (*s).to_string()));
    }

    fates.extend(COMMON_FATES.iter().map(|s| (*s).to_string()));

    if let Some(fear) = profile.fear() {
        fates.insert(0, format!("{fear}-Related Incident"));
    }

    fates
}

/// Fisher-Yates shuffle, walking from the last index down to 1.
pub fn shuffle<T>(items: &mut [T], entropy: &mut dyn Entropy) {
    for i in (1..items.len()).rev() {
        let j = entropy.below(i + 1);
        items.swap(i, j);
    }
}

/// Shuffle the candidates and take the first one.
pub fn choose_fate(profile: &UserProfile, entropy: &mut dyn Entropy) -> String {
    let mut fates = candidate_fates(profile);
    log::trace!("candidate fates: {fates:?}");
    shuffle(&mut fates, entropy);
    // never empty: the common fates are always present
    fates.swap_remove(0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entropy::ScriptedEntropy;

    fn profile(occupation: &str, hobbies: &str) -> UserProfile {
        UserProfile::new("Ann", "30", "Elm", occupation, hobbies)
    }

    #[test]
    fn both_matches_skip_the_hobby_default() {
        let fates = candidate_fates(&profile("programmer", "swimming"));
        assert_eq!(fates.len(), 11);
        assert_eq!(&fates[..3], ["Electrocution", "Brain Aneurysm", "Caffeine Overdose"]);
        assert_eq!(&fates[3..6], ["Whirlpool", "Kraken Attack", "Synchronized Drowning"]);
        assert_eq!(fates[6], "Digital Data Corruption");
        assert!(!fates.iter().any(|f| f == "Quantum Uncertainty"));
    }

    #[test]
    fn unmatched_hobby_adds_the_hobby_default() {
        let fates = candidate_fates(&profile("chef", "knitting"));
        assert_eq!(fates.len(), 11);
        assert_eq!(fates[0], "Kitchen Fire");
        assert_eq!(
            &fates[3..6],
            ["Entropy Acceleration", "Quantum Uncertainty", "Probability Collapse"]
        );
    }

    #[test]
    fn nothing_matches_uses_both_defaults() {
        let fates = candidate_fates(&profile("astronaut", "knitting"));
        assert_eq!(fates[0], "Cosmic Alignment");
        assert_eq!(fates[3], "Entropy Acceleration");
        assert_eq!(fates.len(), 11);
    }

    #[test]
    fn fear_goes_first() {
        let p = profile("programmer", "swimming").with_fears("Clowns");
        let fates = candidate_fates(&p);
        assert_eq!(fates.len(), 12);
        assert_eq!(fates[0], "Clowns-Related Incident");
        assert_eq!(fates[1], "Electrocution");
    }

    #[test]
    fn empty_fear_adds_nothing() {
        let p = profile("programmer", "swimming");
        assert_eq!(candidate_fates(&p).len(), 11);
    }

    #[test]
    fn padded_fear_is_used_as_typed() {
        let fates = candidate_fates(&profile("programmer", "swimming").with_fears(" clowns "));
        assert_eq!(fates.len(), 12);
        assert_eq!(fates[0], " clowns -Related Incident");

        let fates = candidate_fates(&profile("programmer", "swimming").with_fears("  "));
        assert_eq!(fates.len(), 12);
        assert_eq!(fates[0], "  -Related Incident");
    }

    #[test]
    fn shuffle_swaps_from_the_back() {
        let mut items = ['a', 'b', 'c'];
        let mut e = ScriptedEntropy::new("", [0, 0]);
        shuffle(&mut items, &mut e);
        // i=2 swaps with 0 -> c b a; i=1 swaps with 0 -> b c a
        assert_eq!(items, ['b', 'c', 'a']);
        assert_eq!(e.remaining(), 0);
    }

    #[test]
    fn identity_draws_keep_order() {
        let mut items = [1, 2, 3, 4];
        let mut e = ScriptedEntropy::new("", [3, 2, 1]);
        shuffle(&mut items, &mut e);
        assert_eq!(items, [1, 2, 3, 4]);
    }

    #[test]
    fn shuffle_of_one_draws_nothing() {
        let mut items = ["only"];
        let mut e = ScriptedEntropy::new("", [5]);
        shuffle(&mut items, &mut e);
        assert_eq!(e.remaining(), 1);
    }

    #[test]
    fn chosen_fate_is_a_candidate() {
        let p = profile("lawyer", "gaming").with_fears("spiders");
        let candidates = candidate_fates(&p);
        let mut e = ScriptedEntropy::new("", [4, 9, 0, 2]);
        let fate = choose_fate(&p, &mut e);
        assert!(candidates.contains(&fate));
    }
}
