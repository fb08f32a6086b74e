use std::collections::BTreeMap;
use std::fmt;

use crate::utils::error::{Result, ScaffoldError};

/// Canonical key of the license used when nothing else is configured
pub const NONE_KEY: &str = "none";

/// Placeholder in license texts replaced by the copyright line
pub const COPYRIGHT_PLACEHOLDER: &str = "{{ copyright }}";

/// A software license agreement: its display name, the aliases a user may
/// type to select it, the notice placed at the top of generated files and
/// the full text written to `LICENSE`.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct License {
    /// Display name of the license
    pub name: String,
    /// Case-insensitive aliases accepted on the command line or in config
    pub possible_matches: Vec<String>,
    /// Short notice for source file headers
    pub header: String,
    /// Full license text, may contain the copyright placeholder
    pub text: String,
}

impl License {
    pub fn new(name: &str, possible_matches: &[&str], header: &str, text: &str) -> Self {
        Self {
            name: name.to_string(),
            possible_matches: possible_matches.iter().map(|m| (*m).to_string()).collect(),
            header: header.to_string(),
            text: text.to_string(),
        }
    }

    /// License built from user-supplied header/text, outside the registry
    pub fn custom(header: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            header: header.into(),
            text: text.into(),
            ..Self::default()
        }
    }

    /// Whether `name` is one of this license's aliases, ignoring case
    pub fn matches(&self, name: &str) -> bool {
        self.possible_matches
            .iter()
            .any(|alias| alias.eq_ignore_ascii_case(name))
    }

    /// Full text with the copyright line filled in
    pub fn render_text(&self, copyright: &str) -> String {
        self.text.replace(COPYRIGHT_PLACEHOLDER, copyright)
    }
}

impl fmt::Display for License {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.name.is_empty() {
            write!(f, "custom license")
        } else {
            write!(f, "{}", self.name)
        }
    }
}

/// Catalog of built-in licenses keyed by canonical name.
///
/// Built once with [`LicenseRegistry::builtin`] and only read afterwards.
#[derive(Debug, Clone)]
pub struct LicenseRegistry {
    licenses: BTreeMap<String, License>,
}

impl LicenseRegistry {
    /// Registry holding only the `none` license
    pub fn new() -> Self {
        let mut licenses = BTreeMap::new();
        licenses.insert(
            NONE_KEY.to_string(),
            License::new("None", &["none", "false"], "", ""),
        );
        Self { licenses }
    }

    /// Registry with every built-in license.
    ///
    /// # Panics
    ///
    /// Panics if two built-in licenses share an alias.
    pub fn builtin() -> Self {
        let mut registry = Self::new();
        for (key, license) in super::license_texts::builtin_licenses() {
            if let Err(err) = registry.register(key, license) {
                panic!("built-in license table is inconsistent: {err}");
            }
        }
        registry
    }

    /// Add a license under `key`, rejecting aliases that would make lookup
    /// ambiguous. Re-registering an existing key replaces it.
    pub fn register(&mut self, key: &str, license: License) -> Result<()> {
        if license.possible_matches.is_empty() {
            return Err(ScaffoldError::EmptyAliases(key.to_string()));
        }

        for (existing_key, existing) in &self.licenses {
            if existing_key == key {
                continue;
            }
            if let Some(alias) = license
                .possible_matches
                .iter()
                .find(|alias| existing.matches(alias))
            {
                return Err(ScaffoldError::AliasCollision {
                    alias: alias.clone(),
                    existing: existing_key.clone(),
                    incoming: key.to_string(),
                });
            }
        }

        self.licenses.insert(key.to_string(), license);
        Ok(())
    }

    /// Exact lookup by canonical key
    pub fn get(&self, key: &str) -> Option<&License> {
        self.licenses.get(key)
    }

    /// Canonical key of the license that has `name` among its aliases
    pub fn find_by_alias(&self, name: &str) -> Option<&str> {
        if name.is_empty() {
            return None;
        }

        self.licenses
            .iter()
            .find(|(_, license)| license.matches(name))
            .map(|(key, _)| key.as_str())
    }

    /// The always-present `none` license
    pub fn none(&self) -> &License {
        &self.licenses[NONE_KEY]
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &License)> {
        self.licenses.iter().map(|(key, license)| (key.as_str(), license))
    }

    pub fn len(&self) -> usize {
        self.licenses.len()
    }

    pub fn is_empty(&self) -> bool {
        self.licenses.is_empty()
    }
}

impl Default for LicenseRegistry {
    fn default() -> Self {
        Self::builtin()
    }
}
