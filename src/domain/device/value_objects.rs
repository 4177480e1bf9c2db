//! Device Context - Value Objects

use serde::{Deserialize, Serialize};

/// Device lifecycle state
///
/// Parsed case-insensitively, always rendered in canonical lowercase.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DeviceState {
    #[default]
    #[serde(rename = "available")]
    Available,
    #[serde(rename = "in-use")]
    InUse,
    #[serde(rename = "inactive")]
    Inactive,
}

impl DeviceState {
    pub const ALL: [DeviceState; 3] = [Self::Available, Self::InUse, Self::Inactive];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Available => "available",
            Self::InUse => "in-use",
            Self::Inactive => "inactive",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "available" => Some(Self::Available),
            "in-use" => Some(Self::InUse),
            "inactive" => Some(Self::Inactive),
            _ => None,
        }
    }
}

impl std::fmt::Display for DeviceState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_is_case_insensitive() {
        assert_eq!(DeviceState::parse("available"), Some(DeviceState::Available));
        assert_eq!(DeviceState::parse("IN-USE"), Some(DeviceState::InUse));
        assert_eq!(DeviceState::parse("Inactive"), Some(DeviceState::Inactive));
        assert_eq!(DeviceState::parse("in_use"), None);
        assert_eq!(DeviceState::parse(""), None);
    }

    #[test]
    fn test_as_str_matches_parse() {
        for state in DeviceState::ALL {
            assert_eq!(DeviceState::parse(state.as_str()), Some(state));
        }
    }

    #[test]
    fn test_serde_uses_canonical_names() {
        let json = serde_json::to_string(&DeviceState::InUse).unwrap();
        assert_eq!(json, "\"in-use\"");
    }
}
