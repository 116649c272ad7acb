//! Licence record used in submission payloads.

use serde::{Deserialize, Serialize};

/// Short names MaveDB accepts for licences.
const VALID_SHORT_NAMES: &[&str] = &["CC0", "CC BY-NC-SA 4.0", "CC BY 4.0"];

/// Licence metadata attached to a score set on submission.
///
/// The `short_name` constraint is advisory-only: construction accepts any
/// value and the remote API is authoritative. Callers wanting to enforce it
/// check [`Licence::is_valid`] explicitly.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Licence {
    /// Short identifier, normally one of [`Licence::valid_short_names`].
    pub short_name: String,

    /// Full licence name, e.g. "CC0 (Public domain)".
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub long_name: Option<String>,

    /// Link to the licence text.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub link: Option<String>,

    /// Licence version, e.g. "4.0".
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,
}

impl Licence {
    /// Create a licence with only a short name; all other fields are unset.
    pub fn new(short_name: impl Into<String>) -> Self {
        Self {
            short_name: short_name.into(),
            long_name: None,
            link: None,
            version: None,
        }
    }

    /// Set the full licence name.
    pub fn with_long_name(mut self, long_name: impl Into<String>) -> Self {
        self.long_name = Some(long_name.into());
        self
    }

    /// Set the link to the licence text.
    pub fn with_link(mut self, link: impl Into<String>) -> Self {
        self.link = Some(link.into());
        self
    }

    /// Set the licence version.
    pub fn with_version(mut self, version: impl Into<String>) -> Self {
        self.version = Some(version.into());
        self
    }

    /// The short names MaveDB considers valid.
    pub fn valid_short_names() -> &'static [&'static str] {
        VALID_SHORT_NAMES
    }

    /// Whether `short_name` is one of the valid short names.
    pub fn is_valid(&self) -> bool {
        VALID_SHORT_NAMES.contains(&self.short_name.as_str())
    }

    /// CC0 1.0 Universal (public domain dedication).
    pub fn cc0() -> Self {
        Self::new("CC0")
            .with_long_name("CC0 (Public domain)")
            .with_link("https://creativecommons.org/publicdomain/zero/1.0/")
            .with_version("1.0")
    }

    /// Creative Commons Attribution 4.0 International.
    pub fn cc_by_4() -> Self {
        Self::new("CC BY 4.0")
            .with_long_name("CC BY 4.0 (Attribution)")
            .with_link("https://creativecommons.org/licenses/by/4.0/")
            .with_version("4.0")
    }

    /// Creative Commons Attribution-NonCommercial-ShareAlike 4.0.
    pub fn cc_by_nc_sa_4() -> Self {
        Self::new("CC BY-NC-SA 4.0")
            .with_long_name("CC BY-NC-SA 4.0 (Attribution-NonCommercial-ShareAlike)")
            .with_link("https://creativecommons.org/licenses/by-nc-sa/4.0/")
            .with_version("4.0")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_leaves_optional_fields_unset() {
        let licence = Licence::new("CC0");
        assert_eq!(licence.short_name, "CC0");
        assert_eq!(licence.long_name, None);
        assert_eq!(licence.link, None);
        assert_eq!(licence.version, None);
        assert!(Licence::valid_short_names().contains(&"CC0"));
    }

    #[test]
    fn test_is_valid_is_advisory() {
        assert!(Licence::new("CC BY 4.0").is_valid());
        // construction never rejects
        let odd = Licence::new("WTFPL");
        assert!(!odd.is_valid());
    }

    #[test]
    fn test_presets_are_valid() {
        for licence in [Licence::cc0(), Licence::cc_by_4(), Licence::cc_by_nc_sa_4()] {
            assert!(licence.is_valid());
            assert!(licence.link.is_some());
        }
    }

    #[test]
    fn test_serialization_skips_unset_fields() {
        let json = serde_json::to_value(Licence::new("CC0")).unwrap();
        assert_eq!(json, serde_json::json!({"short_name": "CC0"}));
    }
}
