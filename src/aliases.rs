use crate::config::{Aliases, Config};
use crate::platform::Platform;

/// Top-level aliases overlaid with the current platform's aliases.
#[derive(Debug, Clone, Default)]
pub struct EffectiveAliases {
    table: Aliases,
}

/// An app name as typed by the user, paired with the name it resolves to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppRequest {
    /// What the user typed; used in messages.
    pub given: String,
    /// What to look for on the filesystem.
    pub target: String,
}

impl EffectiveAliases {
    /// Platform-specific entries win on key collision.
    pub fn merge(config: &Config, platform: Platform) -> Self {
        let mut table = config.aliases.clone();
        if let Some(section) = config.section(platform) {
            table.extend(section.aliases.iter().map(|(k, v)| (k.clone(), v.clone())));
        }
        Self { table }
    }

    /// Exact, case-sensitive lookup; unknown names come back unchanged.
    pub fn resolve<'a>(&'a self, name: &'a str) -> &'a str {
        self.table.get(name).map(String::as_str).unwrap_or(name)
    }

    pub fn request(&self, name: &str) -> AppRequest {
        AppRequest {
            given: name.to_string(),
            target: self.resolve(name).to_string(),
        }
    }

    pub fn len(&self) -> usize {
        self.table.len()
    }
}

impl AppRequest {
    /// A request for `name` with no alias applied.
    pub fn verbatim(name: &str) -> Self {
        Self {
            given: name.to_string(),
            target: name.to_string(),
        }
    }
}
