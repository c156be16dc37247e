use std::collections::HashSet;
use std::path::Path;

use crate::error::Error;

/// Tokenizer configuration, captured once at construction and never mutated.
/// Every match made through one configured tokenizer shares these values,
/// which is what makes a tokenizer safe to reuse across scanning passes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Options {
    /// Character separating the page name from its display alias in a title.
    pub alias_divider: char,
    /// Permalinks of pages known to exist. Membership here is the only
    /// existence check — nothing is validated against disk.
    pub known_permalinks: HashSet<String>,
    /// Class appended (after the base class) when the resolved permalink is
    /// not a known page.
    pub new_class_name: String,
    /// Base class carried by every wikilink node.
    pub wiki_link_class_name: String,
}

/// Raw TOML structure for `.wikilinks.toml`.
#[derive(serde::Deserialize)]
struct WikilinksTomlOptions {
    #[serde(default)]
    alias_divider: Option<char>,
    #[serde(default)]
    new_class_name: Option<String>,
    #[serde(default)]
    permalinks: Vec<String>,
    #[serde(default)]
    wiki_link_class_name: Option<String>,
}

impl Default for Options {
    /// The defaults of the original syntax: `:` divider, `internal` base
    /// class, `new` marker class, no known pages.
    fn default() -> Self {
        return Self {
            alias_divider: ':',
            known_permalinks: HashSet::new(),
            new_class_name: "new".to_string(),
            wiki_link_class_name: "internal".to_string(),
        };
    }
}

impl Options {
    /// Compose the class string for a node: the base class, plus the "new"
    /// class separated by a single space iff the page does not exist. This
    /// happens before embed classification, which inherits the string as-is.
    pub fn class_names(&self, exists: bool) -> String {
        if exists {
            return self.wiki_link_class_name.clone();
        }
        return format!("{} {}", self.wiki_link_class_name, self.new_class_name);
    }

    /// Membership test against the known-permalink set.
    pub fn knows(&self, permalink: &str) -> bool {
        return self.known_permalinks.contains(permalink);
    }

    /// Load options from `.wikilinks.toml` in the given root directory.
    /// Returns the defaults if the file doesn't exist. Returns an error if
    /// the file exists but is malformed — never silently falls back to
    /// defaults when the user wrote an options file.
    ///
    /// # Errors
    ///
    /// Returns `Error::Io` if reading fails (other than not-found),
    /// or `Error::TomlDe` if the TOML is malformed.
    pub fn load(root: &Path) -> Result<Self, Error> {
        let path = root.join(".wikilinks.toml");
        let content = match std::fs::read_to_string(&path) {
            Ok(c) => c,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(Self::default()),
            Err(e) => return Err(Error::Io(e)),
        };
        return Self::parse(&content);
    }

    /// Parse options from TOML content. Absent keys keep their defaults.
    ///
    /// # Errors
    ///
    /// Returns `Error::TomlDe` if the content is not valid TOML.
    pub fn parse(content: &str) -> Result<Self, Error> {
        let raw: WikilinksTomlOptions = toml::from_str(content)?;
        let defaults = Self::default();
        return Ok(Self {
            alias_divider: raw.alias_divider.unwrap_or(defaults.alias_divider),
            known_permalinks: raw.permalinks.into_iter().collect(),
            new_class_name: raw.new_class_name.unwrap_or(defaults.new_class_name),
            wiki_link_class_name: raw
                .wiki_link_class_name
                .unwrap_or(defaults.wiki_link_class_name),
        });
    }
}

#[cfg(test)]
#[allow(clippy::missing_panics_doc)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_original_syntax() {
        let options = Options::default();
        assert_eq!(options.alias_divider, ':');
        assert_eq!(options.new_class_name, "new");
        assert_eq!(options.wiki_link_class_name, "internal");
        assert!(options.known_permalinks.is_empty());
    }

    #[test]
    fn parse_overrides_and_defaults() {
        let options = Options::parse(
            r#"
            permalinks = ["wiki_link", "real_page"]
            alias_divider = "|"
            "#,
        )
        .unwrap();
        assert_eq!(options.alias_divider, '|');
        assert!(options.knows("wiki_link"));
        assert!(!options.knows("missing_page"));
        assert_eq!(options.wiki_link_class_name, "internal");
    }

    #[test]
    fn malformed_toml_is_an_error() {
        assert!(Options::parse("permalinks = not-a-list").is_err());
    }

    #[test]
    fn class_string_appends_new_marker_only_when_missing() {
        let options = Options::default();
        assert_eq!(options.class_names(true), "internal");
        assert_eq!(options.class_names(false), "internal new");
    }
}
