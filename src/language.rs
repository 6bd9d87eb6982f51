//! Normalization of free-form language labels into canonical specs.
//!
//! The alias table is a closed enumeration: lookups are exact after
//! trimming and ASCII lowercasing, with no fuzzy or partial matching.
//! Extending the supported set means adding table entries, never logic.

use std::collections::HashMap;

/// Canonical representation of a supported language.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LanguageSpec {
    /// Display name used in log messages.
    pub display_name: &'static str,
    /// Stable key identifying the matching README marker region.
    pub marker_key:   &'static str
}

/// Immutable alias catalog injected into the orchestrator.
///
/// Constructed once at startup; tests substitute a smaller table through
/// [`LanguageCatalog::from_entries`].
#[derive(Debug, Clone)]
pub struct LanguageCatalog {
    aliases: HashMap<&'static str, LanguageSpec>
}

impl LanguageCatalog {
    /// Builds a catalog from explicit `(alias, display name, marker key)`
    /// triples. Aliases are expected in lowercase; repeated aliases keep the
    /// last entry.
    pub fn from_entries(entries: &[(&'static str, &'static str, &'static str)]) -> Self {
        let aliases = entries
            .iter()
            .map(|(alias, display_name, marker_key)| {
                (
                    *alias,
                    LanguageSpec {
                        display_name,
                        marker_key
                    }
                )
            })
            .collect();

        Self {
            aliases
        }
    }

    /// Resolves a raw language label to its canonical spec.
    ///
    /// The label is trimmed and ASCII lowercased before the exact lookup.
    /// Returns `None` for blank labels and for aliases outside the catalog.
    pub fn normalize(&self, raw: &str) -> Option<&LanguageSpec> {
        let key = raw.trim().to_ascii_lowercase();
        if key.is_empty() {
            return None;
        }

        self.aliases.get(key.as_str())
    }
}

impl Default for LanguageCatalog {
    /// Builds the catalog of languages recognized by the updater.
    fn default() -> Self {
        Self::from_entries(&[
            ("c", "C", "C"),
            ("c++", "C++", "cpp"),
            ("cpp", "C++", "cpp"),
            ("python", "Python", "python"),
            ("py", "Python", "python"),
            ("typescript", "TypeScript", "typescript"),
            ("ts", "TypeScript", "typescript"),
            ("shell", "Shell", "shell"),
            ("bash", "Shell", "shell"),
            ("sh", "Shell", "shell"),
            ("zsh", "Shell", "shell"),
            ("docker", "Docker", "docker"),
            ("git", "Git", "git")
        ])
    }
}
