/// Permalink resolution policy.
///
/// Both policies are injected at tokenizer construction so hosts can swap the
/// mapping from page names to site URLs without touching the tokenizer.
use std::collections::HashSet;

/// Link destination policy: permalink → href string.
pub trait HrefTemplate: Send + Sync {
    /// Build the link destination for a resolved permalink.
    fn href(&self, permalink: &str) -> String;
}

/// Permalink candidate policy: page name → ordered candidate permalinks.
/// Implementations should never return an empty list; `resolve_permalink`
/// guards against it anyway.
pub trait PageResolver: Send + Sync {
    /// All permalinks a page name could resolve to, in preference order.
    fn permalinks(&self, name: &str) -> Vec<String>;
}

/// Default destination: `#/page/<permalink>`.
#[derive(Debug, Clone, Copy, Default)]
pub struct DefaultHrefTemplate;

/// Default policy: a single candidate, lower-cased with spaces replaced by
/// underscores.
#[derive(Debug, Clone, Copy, Default)]
pub struct DefaultPageResolver;

impl HrefTemplate for DefaultHrefTemplate {
    fn href(&self, permalink: &str) -> String {
        return format!("#/page/{permalink}");
    }
}

impl PageResolver for DefaultPageResolver {
    fn permalinks(&self, name: &str) -> Vec<String> {
        return vec![default_permalink(name)];
    }
}

/// The deterministic default transform: lower-case, spaces to underscores.
/// Also the fallback when a misconfigured resolver returns no candidates.
pub fn default_permalink(name: &str) -> String {
    return name.replace(' ', "_").to_lowercase();
}

/// Pick a permalink for `name` from the resolver's candidates: the first
/// candidate present in the known set wins with `exists = true`; when none is
/// known, the first candidate with `exists = false`.
///
/// An empty candidate list is a configuration error, not a runtime failure —
/// it falls back to the deterministic default transform of the name so the
/// pair stays well-defined.
pub fn resolve_permalink(
    name: &str,
    candidates: Vec<String>,
    known: &HashSet<String>,
) -> (String, bool) {
    let candidates = if candidates.is_empty() {
        vec![default_permalink(name)]
    } else {
        candidates
    };

    if let Some(hit) = candidates.iter().find(|c| known.contains(c.as_str())) {
        return (hit.clone(), true);
    }

    let Some(first) = candidates.into_iter().next() else {
        // Unreachable: the list was made non-empty above.
        return (default_permalink(name), false);
    };
    return (first, false);
}
