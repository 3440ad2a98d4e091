//! Mortimer's prediction text.
//!
//! Templates are static strings with `{placeholder}` slots. Rendering is a
//! single left-to-right pass, so braces inside the visitor's own answers
//! are copied through verbatim and never expanded.

use crate::entropy::Entropy;

/// Opening lines.
pub const INTRODUCTIONS: [&str; 5] = [
    "The algorithms have calculated your demise with unsettling precision.",
    "The digital bones have spoken, revealing the manner of your inevitable end.",
    "I have communed with the spectral data streams, and they show your fate clearly.",
    "The necromantic neural networks have processed your mortal variables.",
    "Your digital footprint has revealed the path to your doom.",
];

/// Middle lines naming the fate.
pub const DETAILS: [&str; 5] = [
    "You will meet your end through {death}, a fate tied to your {occupation} profession.",
    "The spirits show {death} in your future, influenced by your interest in {hobbies}.",
    "Your soul will depart on {date} via {death}, a rare but statistically significant outcome.",
    "The cosmic algorithm predicts {death} will claim you in {location}.",
    "Your binary epitaph will read \"{name}, departed through {death}\".",
];

/// Closing lines.
pub const CONCLUSIONS: [&str; 5] = [
    "This prediction has a disturbing confidence interval. The math of mortality rarely lies.",
    "The quantum calculations suggest this outcome has unusual certainty.",
    "Few mortals receive such specific prophecies. Consider yourself noteworthy in my database.",
    "The spirit algorithms are particularly clear about this. Your death has... elegance.",
    "I have predicted millions of deaths, but yours has a certain digital poetry to it.",
];

/// Values available to templates.
///
/// `{death}` is always the lower-cased manner of death.
#[derive(Debug, Clone, Copy)]
pub struct NarrativeContext<'a> {
    /// Manner of death as chosen.
    pub death_type: &'a str,
    /// Visitor's name.
    pub name: &'a str,
    /// Visitor's occupation.
    pub occupation: &'a str,
    /// Visitor's hobbies.
    pub hobbies: &'a str,
    /// Visitor's location.
    pub location: &'a str,
    /// Formatted death date.
    pub date: &'a str,
}

impl NarrativeContext<'_> {
    /// Fill a template's placeholders. Unknown placeholders are kept as-is.
    pub fn render(&self, template: &str) -> String {
        let death = self.death_type.to_lowercase();
        render_with(template, |key| match key {
            "death" => Some(death.as_str()),
            "name" => Some(self.name),
            "occupation" => Some(self.occupation),
            "hobbies" => Some(self.hobbies),
            "location" => Some(self.location),
            "date" => Some(self.date),
            _ => None,
        })
    }
}

/// Single-pass `{key}` substitution.
pub fn render_with<'v>(template: &str, lookup: impl Fn(&str) -> Option<&'v str>) -> String {
    let mut out = String::with_capacity(template.len() + 32);
    let mut rest = template;
    while let Some(open) = rest.find('{') {
        out.push_str(&rest[..open]);
        let after = &rest[open + 1..];
        match after.find('}') {
            Some(close) => {
                let key = &after[..close];
                match lookup(key) {
                    Some(value) => out.push_str(value),
                    None => {
                        out.push('{');
                        out.push_str(key);
                        out.push('}');
                    }
                }
                rest = &after[close + 1..];
            }
            None => {
                out.push_str(&rest[open..]);
                rest = "";
            }
        }
    }
    out.push_str(rest);
    out
}

/// Pick one line from each set and join them with single spaces.
///
/// Draws introduction, detail, then conclusion.
pub fn compose(ctx: &NarrativeContext<'_>, entropy: &mut dyn Entropy) -> String {
    let intro = INTRODUCTIONS[entropy.below(INTRODUCTIONS.len())];
    let detail = DETAILS[entropy.below(DETAILS.len())];
    let conclusion = CONCLUSIONS[entropy.below(CONCLUSIONS.len())];
    format!("{} {} {}", ctx.render(intro), ctx.render(detail), ctx.render(conclusion))
}
