//! Chat handler settings and the built-in variant presets.

use std::fmt;
use std::str::FromStr;

use crate::config::ConfigError;
use crate::profile::ProfileSource;

/// Output token cap sent with every completion request.
pub const DEFAULT_MAX_TOKENS: u32 = 800;

/// Section tag required when section validation is strict.
pub const COMMON_SECTION: &str = "common";

/// Built-in handler presets.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ChatVariant {
    /// Per-section profiles, lenient section handling.
    #[default]
    Sectioned,
    /// Unified profile, only the `common` section accepted.
    Common,
    /// Per-section profiles, upstream error details returned to the caller.
    RawFetch,
}

impl ChatVariant {
    pub fn as_str(&self) -> &'static str {
        match self {
            ChatVariant::Sectioned => "sectioned",
            ChatVariant::Common => "common",
            ChatVariant::RawFetch => "raw-fetch",
        }
    }

    fn default_model(&self) -> &'static str {
        match self {
            ChatVariant::Sectioned => "openai/gpt-4o",
            ChatVariant::Common | ChatVariant::RawFetch => "openai/gpt-3.5-turbo",
        }
    }
}

impl fmt::Display for ChatVariant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ChatVariant {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "sectioned" => Ok(ChatVariant::Sectioned),
            "common" => Ok(ChatVariant::Common),
            "raw-fetch" | "raw_fetch" => Ok(ChatVariant::RawFetch),
            other => Err(ConfigError::UnknownVariant(other.to_string())),
        }
    }
}

/// Everything the chat handler needs to know about its behaviour.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChatSettings {
    /// Preset these settings were derived from.
    pub variant: ChatVariant,
    pub profile_source: ProfileSource,
    /// Model identifier passed through to the provider.
    pub model: String,
    pub max_tokens: u32,
    /// Reject any section other than [`COMMON_SECTION`].
    pub strict_sections: bool,
    /// Include the raw upstream error message in 500 responses.
    pub error_details: bool,
}

impl ChatSettings {
    /// Settings for a preset variant.
    pub fn for_variant(variant: ChatVariant) -> Self {
        let (profile_source, strict_sections, error_details) = match variant {
            ChatVariant::Sectioned => (ProfileSource::PerSection, false, false),
            ChatVariant::Common => (ProfileSource::Unified, true, false),
            ChatVariant::RawFetch => (ProfileSource::PerSection, false, true),
        };
        Self {
            variant,
            profile_source,
            model: variant.default_model().to_string(),
            max_tokens: DEFAULT_MAX_TOKENS,
            strict_sections,
            error_details,
        }
    }

    /// Overrides the model identifier.
    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    pub fn with_max_tokens(mut self, max_tokens: u32) -> Self {
        self.max_tokens = max_tokens;
        self
    }

    /// Returns true when `section` is acceptable under these settings.
    ///
    /// Emptiness is checked by the caller.
    pub fn accepts_section(&self, section: &str) -> bool {
        !self.strict_sections || section == COMMON_SECTION
    }
}

impl Default for ChatSettings {
    fn default() -> Self {
        Self::for_variant(ChatVariant::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn variants_parse() {
        assert_eq!("sectioned".parse::<ChatVariant>().unwrap(), ChatVariant::Sectioned);
        assert_eq!(" Common ".parse::<ChatVariant>().unwrap(), ChatVariant::Common);
        assert_eq!("raw-fetch".parse::<ChatVariant>().unwrap(), ChatVariant::RawFetch);
        assert_eq!("raw_fetch".parse::<ChatVariant>().unwrap(), ChatVariant::RawFetch);
    }

    #[test]
    fn unknown_variant_rejected() {
        let err = "streaming".parse::<ChatVariant>().unwrap_err();
        assert!(matches!(err, ConfigError::UnknownVariant(ref v) if v == "streaming"));
    }

    #[test]
    fn display_round_trips_through_parse() {
        for v in [ChatVariant::Sectioned, ChatVariant::Common, ChatVariant::RawFetch] {
            assert_eq!(v.to_string().parse::<ChatVariant>().unwrap(), v);
        }
    }

    #[test]
    fn sectioned_defaults() {
        let s = ChatSettings::default();
        assert_eq!(s.variant, ChatVariant::Sectioned);
        assert_eq!(s.profile_source, ProfileSource::PerSection);
        assert_eq!(s.model, "openai/gpt-4o");
        assert_eq!(s.max_tokens, 800);
        assert!(!s.strict_sections);
        assert!(!s.error_details);
    }

    #[test]
    fn common_is_strict_and_unified() {
        let s = ChatSettings::for_variant(ChatVariant::Common);
        assert_eq!(s.profile_source, ProfileSource::Unified);
        assert!(s.accepts_section("common"));
        assert!(!s.accepts_section("food"));
    }

    #[test]
    fn raw_fetch_exposes_details() {
        let s = ChatSettings::for_variant(ChatVariant::RawFetch);
        assert!(s.error_details);
        assert_eq!(s.model, "openai/gpt-3.5-turbo");
        assert!(s.accepts_section("anything"));
    }

    #[test]
    fn overrides_apply() {
        let s = ChatSettings::for_variant(ChatVariant::Common)
            .with_model("anthropic/claude-3-haiku")
            .with_max_tokens(256);
        assert_eq!(s.model, "anthropic/claude-3-haiku");
        assert_eq!(s.max_tokens, 256);
        assert!(s.strict_sections);
    }
}
