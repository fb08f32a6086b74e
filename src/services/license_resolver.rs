use chrono::{Datelike, Local};
use tracing::debug;

use crate::models::license::{License, LicenseRegistry};
use crate::utils::error::{Result, ScaffoldError};

/// The competing places a license can be chosen from.
///
/// Empty strings count as unset.
#[derive(Debug, Clone, Copy, Default)]
pub struct LicenseSources<'a> {
    /// Name given with `--license`
    pub explicit: Option<&'a str>,
    /// `license.header` from the config file
    pub custom_header: Option<&'a str>,
    /// `license.text` from the config file
    pub custom_text: Option<&'a str>,
    /// `license` from the config file
    pub configured: Option<&'a str>,
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.is_empty())
}

/// Picks the license for a project from the registry and user settings
pub struct LicenseResolver<'a> {
    registry: &'a LicenseRegistry,
}

impl<'a> LicenseResolver<'a> {
    pub fn new(registry: &'a LicenseRegistry) -> Self {
        Self { registry }
    }

    /// Resolve the license to use. The first source that is set wins:
    /// explicit name, custom header/text, configured name, then `none`.
    pub fn resolve(&self, sources: &LicenseSources<'_>) -> Result<License> {
        if let Some(name) = non_empty(sources.explicit) {
            debug!(license = name, "using license from flag");
            return self.find(name);
        }

        let header = non_empty(sources.custom_header);
        let text = non_empty(sources.custom_text);
        if header.is_some() || text.is_some() {
            debug!("using custom license from config");
            return Ok(License::custom(
                header.unwrap_or_default(),
                text.unwrap_or_default(),
            ));
        }

        if let Some(name) = non_empty(sources.configured) {
            debug!(license = name, "using license from config");
            return self.find(name);
        }

        debug!("no license configured");
        Ok(self.registry.none().clone())
    }

    /// Look up a built-in license by any of its aliases
    pub fn find(&self, name: &str) -> Result<License> {
        self.registry
            .find_by_alias(name)
            .and_then(|key| self.registry.get(key))
            .cloned()
            .ok_or_else(|| ScaffoldError::UnknownLicense {
                name: name.to_string(),
            })
    }
}

/// `Copyright © {year} {author}`, using the current year unless one is given
pub fn copyright_line(author: &str, year: Option<&str>) -> String {
    let year = non_empty(year).map_or_else(|| Local::now().year().to_string(), str::to_string);
    format!("Copyright © {year} {author}")
}
