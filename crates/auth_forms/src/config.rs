//! Controller configuration: simulated backend delays and navigation targets.
//! The web app starts from [`FormsConfig::default`], applies build-time values,
//! then applies a runtime JSON override. Values are public; no secrets here.

use serde::Deserialize;

#[derive(Clone, Debug, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct FormsConfig {
    pub sign_in_delay_ms: u32,
    pub register_delay_ms: u32,
    pub social_delay_ms: u32,
    /// Where a successful sign-in lands.
    pub landing_path: String,
    /// Where a successful registration lands.
    pub sign_in_path: String,
    /// Makes the simulated backend reject every submission.
    pub fail_submissions: bool,
}

impl Default for FormsConfig {
    fn default() -> Self {
        Self {
            sign_in_delay_ms: 1_500,
            register_delay_ms: 2_000,
            social_delay_ms: 1_500,
            landing_path: "/".to_string(),
            sign_in_path: "/login".to_string(),
            fail_submissions: false,
        }
    }
}

/// Partial configuration; absent or blank values leave the base untouched.
#[derive(Debug, Default, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct ConfigOverrides {
    pub sign_in_delay_ms: Option<u32>,
    pub register_delay_ms: Option<u32>,
    pub social_delay_ms: Option<u32>,
    pub landing_path: Option<String>,
    pub sign_in_path: Option<String>,
    pub fail_submissions: Option<bool>,
}

impl ConfigOverrides {
    /// # Errors
    /// Returns the parse error when `raw` is not a JSON object of known fields.
    pub fn from_json(raw: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(raw)
    }
}

impl FormsConfig {
    pub fn apply(&mut self, overrides: ConfigOverrides) {
        if let Some(value) = overrides.sign_in_delay_ms {
            self.sign_in_delay_ms = value;
        }
        if let Some(value) = overrides.register_delay_ms {
            self.register_delay_ms = value;
        }
        if let Some(value) = overrides.social_delay_ms {
            self.social_delay_ms = value;
        }
        if let Some(value) = overrides.landing_path.as_deref().and_then(normalize_path) {
            self.landing_path = value;
        }
        if let Some(value) = overrides.sign_in_path.as_deref().and_then(normalize_path) {
            self.sign_in_path = value;
        }
        if let Some(value) = overrides.fail_submissions {
            self.fail_submissions = value;
        }
    }
}

/// Trims a navigation target; blank values are rejected.
#[must_use]
pub fn normalize_path(value: &str) -> Option<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}
