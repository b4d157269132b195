//! Static mock user profiles.
//!
//! Profiles are constant tables compiled into the binary. A profile is either
//! picked per section (`appearance`, `exercise`, `food`) or, in unified mode,
//! one profile is returned regardless of the section tag.

use std::fmt;

/// A single profile value: free text or a plain number.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProfileValue {
    Text(&'static str),
    Number(u32),
}

impl fmt::Display for ProfileValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ProfileValue::Text(s) => f.write_str(s),
            ProfileValue::Number(n) => write!(f, "{n}"),
        }
    }
}

/// One `key → value` attribute of a profile.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProfileField {
    pub key: &'static str,
    pub value: ProfileValue,
}

/// Immutable mock user profile.
#[derive(Debug, PartialEq, Eq)]
pub struct UserProfile {
    fields: &'static [ProfileField],
}

impl UserProfile {
    /// Looks up a field value by key.
    pub fn get(&self, key: &str) -> Option<ProfileValue> {
        self.fields.iter().find(|f| f.key == key).map(|f| f.value)
    }

    /// Iterates the fields in declaration order.
    pub fn fields(&self) -> impl Iterator<Item = &ProfileField> {
        self.fields.iter()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

/// Where the handler takes its profile from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProfileSource {
    /// One profile per named section; unknown sections get an empty profile.
    PerSection,
    /// A single profile, section tag ignored.
    Unified,
}

const fn text(key: &'static str, value: &'static str) -> ProfileField {
    ProfileField {
        key,
        value: ProfileValue::Text(value),
    }
}

pub static APPEARANCE: UserProfile = UserProfile {
    fields: &[
        text("skinColor", "medium brown"),
        text("skinTone", "warm"),
        text("skinType", "dry"),
        text("hairType", "curly"),
        text("goal", "reduce acne and brighten complexion"),
    ],
};

pub static EXERCISE: UserProfile = UserProfile {
    fields: &[
        text("height", "175 cm"),
        text("weight", "70 kg"),
        text("fitnessGoal", "build muscle and improve endurance"),
        text("activityLevel", "moderate"),
    ],
};

pub static FOOD: UserProfile = UserProfile {
    fields: &[
        text("dietType", "vegetarian"),
        text("allergies", "none"),
        text("calorieGoal", "2200 kcal/day"),
        text("goal", "balanced nutrition for active lifestyle"),
    ],
};

pub static UNIFIED: UserProfile = UserProfile {
    fields: &[
        text("name", "Alex Morgan"),
        ProfileField {
            key: "age",
            value: ProfileValue::Number(28),
        },
        text("height", "175 cm"),
        text("weight", "70 kg"),
        text("role", "software engineer"),
        text("activityLevel", "moderate"),
        text("dietType", "vegetarian"),
        text("email", "alex.morgan@example.com"),
    ],
};

pub static EMPTY: UserProfile = UserProfile { fields: &[] };

/// Resolves the profile for `section` under the given source.
pub fn resolve(source: ProfileSource, section: &str) -> &'static UserProfile {
    match source {
        ProfileSource::Unified => &UNIFIED,
        ProfileSource::PerSection => match section {
            "appearance" => &APPEARANCE,
            "exercise" => &EXERCISE,
            "food" => &FOOD,
            _ => &EMPTY,
        },
    }
}
