//! Section-specific system prompt templates.

use crate::profile::{ProfileSource, UserProfile};

/// Prompt used for any section without a dedicated template.
pub const FALLBACK_PROMPT: &str = "You are a helpful assistant.";

/// Rendered in place of a field the profile does not carry.
const MISSING_VALUE: &str = "not specified";

/// A fixed multi-line template that lists profile fields by label.
struct PromptTemplate {
    preamble: &'static str,
    /// `(label, profile key)` pairs, rendered as `- Label: value`.
    fields: &'static [(&'static str, &'static str)],
    closing: &'static str,
}

const APPEARANCE: PromptTemplate = PromptTemplate {
    preamble: "You are a certified dermatologist and beauty advisor.\n\
               The user has the following appearance profile:",
    fields: &[
        ("Skin Color", "skinColor"),
        ("Skin Tone", "skinTone"),
        ("Skin Type", "skinType"),
        ("Hair Type", "hairType"),
        ("Appearance Goal", "goal"),
    ],
    closing: "Provide professional, in-depth advice related to skincare, haircare, \
              and beauty routines.",
};

const EXERCISE: PromptTemplate = PromptTemplate {
    preamble: "You are a certified personal fitness coach.\n\
               The user's exercise profile is:",
    fields: &[
        ("Height", "height"),
        ("Weight", "weight"),
        ("Fitness Goal", "fitnessGoal"),
        ("Activity Level", "activityLevel"),
    ],
    closing: "Give scientifically-backed, structured workout plans and tips tailored \
              to the user's fitness profile.",
};

const FOOD: PromptTemplate = PromptTemplate {
    preamble: "You are a certified nutritionist.\n\
               The user's food profile:",
    fields: &[
        ("Diet Type", "dietType"),
        ("Allergies", "allergies"),
        ("Calorie Goal", "calorieGoal"),
        ("Nutrition Goal", "goal"),
    ],
    closing: "Provide professional, customized meal plans and food suggestions to help \
              meet the user's dietary goals.",
};

const COMMON: PromptTemplate = PromptTemplate {
    preamble: "You are a certified wellness coach advising on appearance, fitness and nutrition.\n\
               The user's profile:",
    fields: &[
        ("Name", "name"),
        ("Age", "age"),
        ("Height", "height"),
        ("Weight", "weight"),
        ("Role", "role"),
        ("Activity Level", "activityLevel"),
        ("Diet Type", "dietType"),
        ("Email", "email"),
    ],
    closing: "Answer the user's question with practical, personalized guidance that takes \
              their whole profile into account.",
};

/// Per-section profiles use the domain templates; the unified profile only
/// has the `common` template.
fn template_for(source: ProfileSource, section: &str) -> Option<&'static PromptTemplate> {
    match (source, section) {
        (ProfileSource::PerSection, "appearance") => Some(&APPEARANCE),
        (ProfileSource::PerSection, "exercise") => Some(&EXERCISE),
        (ProfileSource::PerSection, "food") => Some(&FOOD),
        (ProfileSource::Unified, "common") => Some(&COMMON),
        _ => None,
    }
}

impl PromptTemplate {
    fn render(&self, profile: &UserProfile) -> String {
        let mut out = String::with_capacity(512);
        out.push_str(self.preamble);
        out.push('\n');
        for (label, key) in self.fields {
            let value = profile
                .get(key)
                .map_or_else(|| MISSING_VALUE.to_string(), |v| v.to_string());
            out.push_str(&format!("- {label}: {value}\n"));
        }
        out.push('\n');
        out.push_str(self.closing);
        out
    }
}

/// Renders the system prompt for `section` from `profile`.
///
/// Sections without a template under `source` get [`FALLBACK_PROMPT`].
pub fn render(source: ProfileSource, section: &str, profile: &UserProfile) -> String {
    match template_for(source, section) {
        Some(template) => template.render(profile),
        None => FALLBACK_PROMPT.to_string(),
    }
}
