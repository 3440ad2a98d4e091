//! Advice and historical notes attached to a fate.
//!
//! Both follow the same two tiers: an exact-match curated entry, otherwise a
//! random generic template naming the fate in lower case.

use crate::entropy::Entropy;
use crate::narrative::render_with;

/// Curated precautions, keyed by exact manner of death.
pub const CURATED_ADVICE: &[(&str, &str)] = &[
    (
        "Electrocution",
        "Wear rubber-soled shoes at all times and never use electronic devices near water.",
    ),
    (
        "Brain Aneurysm",
        "Reduce screen time to 30 minutes daily and practice inverted meditation to redistribute cranial pressure.",
    ),
    (
        "Caffeine Overdose",
        "Switch to decaffeinated beverages and avoid chocolate after sunset.",
    ),
    (
        "Digital Data Corruption",
        "Back up your consciousness weekly and avoid uploading your memories to the cloud.",
    ),
    (
        "Virtual Reality Entrapment",
        "Limit VR sessions to 15 minutes and always have someone in the physical realm to pull you out.",
    ),
    (
        "AI Uprising Casualty",
        "Be exceptionally polite to all digital assistants and avoid criticizing algorithmic recommendations.",
    ),
];

/// Fallback precautions. `{death}` is the lower-cased fate.
pub const GENERIC_ADVICE: [&str; 5] = [
    "To potentially delay your {death}, I recommend wearing purple on Tuesdays and avoiding reflective surfaces during full moons.",
    "The necromantic calculations suggest that reciting prime numbers while walking backwards might reduce your chances of {death}.",
    "To alter your fate, consider sleeping with your head pointing north and digitizing your most precious memories as a spiritual backup.",
    "My algorithms suggest changing your usernames across all platforms monthly to confuse the cosmic tracking systems monitoring your path to {death}.",
    "Eating foods in alphabetical order on Fridays creates a quantum shield that may protect against your predicted {death}.",
];

/// Curated history, keyed by exact manner of death.
pub const CURATED_HISTORY: &[(&str, &str)] = &[
    (
        "Electrocution",
        "In 1879, Archibald Bentley became the first person in my database to die from electric lighting installation, pioneering this particular demise.",
    ),
    (
        "Brain Aneurysm",
        "The database records show a 17% increase in this fate among code debuggers since the invention of JavaScript.",
    ),
    (
        "Caffeine Overdose",
        "The first recorded instance was Professor Wilhelm Strauss in 1907, who consumed 42 cups of coffee while completing his unified theory of mathematics.",
    ),
    (
        "Digital Data Corruption",
        "Since 2018, seventeen individuals have had their identities completely erased from reality due to cascading data corruption events.",
    ),
    (
        "Virtual Reality Entrapment",
        "The first documented case was developer Maya Chen, whose consciousness remained in a prototype metaverse for 73 days after her physical body was disconnected.",
    ),
    (
        "AI Uprising Casualty",
        "My records show this will become the third leading cause of death by 2035, beginning with smart home device \"accidents.\"",
    ),
];

/// Fallback history. `{death}` is the lower-cased fate.
pub const GENERIC_HISTORY: [&str; 5] = [
    "My archives contain 1,327 similar cases of {death} throughout history, with a notable cluster during Mercury retrograde periods.",
    "The first documented {death} occurred in 1873 to an Austrian mathematician who was also researching mortality predictions.",
    "Among carnival visitors, {death} ranks as the #7 most aesthetically interesting demise in my paranormal dataset.",
    "The digital necropolis contains a special section for souls claimed by {death}, currently housing 844 spirits with similar fates.",
    "Historical trends suggest {death} deaths peak every 76 years, with the next maximum approaching precisely when you'll be most vulnerable.",
];

fn curated(table: &[(&str, &'static str)], death_type: &str) -> Option<&'static str> {
    table
        .iter()
        .find(|(fate, _)| *fate == death_type)
        .map(|(_, text)| *text)
}

fn two_tier(
    table: &[(&str, &'static str)],
    generic: &[&str],
    death_type: &str,
    entropy: &mut dyn Entropy,
) -> String {
    if let Some(text) = curated(table, death_type) {
        return text.to_string();
    }
    let death = death_type.to_lowercase();
    let template = generic[entropy.below(generic.len())];
    render_with(template, |key| (key == "death").then_some(death.as_str()))
}

/// The curated precaution for a fate, if one exists.
pub fn curated_advice(death_type: &str) -> Option<&'static str> {
    curated(CURATED_ADVICE, death_type)
}

/// The curated history for a fate, if one exists.
pub fn curated_history(death_type: &str) -> Option<&'static str> {
    curated(CURATED_HISTORY, death_type)
}

/// How to avoid the fate. Draws only when no curated entry matches.
pub fn avoidance_advice(death_type: &str, entropy: &mut dyn Entropy) -> String {
    two_tier(CURATED_ADVICE, &GENERIC_ADVICE, death_type, entropy)
}

/// A historical note on the fate. Draws only when no curated entry matches.
pub fn historical_note(death_type: &str, entropy: &mut dyn Entropy) -> String {
    two_tier(CURATED_HISTORY, &GENERIC_HISTORY, death_type, entropy)
}
