/// Syntax layer: the bracketed link pattern and title parsing.
use regex::Regex;

/// The link form: optional embed marker, `[[`, a non-greedy title, `]]`.
/// Non-greedy matching means the first `]]` terminates the title, so a
/// literal `]]` can never appear inside one. `.` does not cross line breaks,
/// which rules out multi-line links.
const LINK_PATTERN: &str = r"^(!?)\[\[(.+?)\]\]";

/// Name and display alias parsed from a link title.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageTitle<'a> {
    /// Text shown to the reader; equals `name` when no alias was written.
    pub display_alias: &'a str,
    /// The page name being linked to.
    pub name: &'a str,
}

/// A raw syntax match before any resolution.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RawLink<'a> {
    /// Total bytes matched, including brackets and the optional `!`.
    pub consumed: usize,
    /// True when the match began with the embed marker.
    pub embed: bool,
    /// The trimmed text between the double brackets. Never empty.
    pub title: &'a str,
}

/// Compile the link pattern.
///
/// # Panics
///
/// Panics if the hardcoded link regex is invalid (compile-time invariant).
pub fn link_regex() -> Regex {
    return Regex::new(LINK_PATTERN).expect("valid regex");
}

/// Try to match the link form anchored exactly at `offset`.
///
/// The `regex` crate only honors `^` at the start of a haystack, so the text
/// is sliced at the offset rather than searched with `find_at`. A match whose
/// title trims to nothing is not a link — the text stays plain.
pub fn match_raw<'a>(regex: &Regex, text: &'a str, offset: usize) -> Option<RawLink<'a>> {
    let tail = text.get(offset..)?;
    let caps = regex.captures(tail)?;

    let full = caps.get(0)?;
    let embed = !caps.get(1)?.as_str().is_empty();
    let title = caps.get(2)?.as_str().trim();
    if title.is_empty() {
        return None;
    }

    return Some(RawLink {
        consumed: full.end(),
        embed,
        title,
    });
}

/// Split a trimmed title into name and display alias on the FIRST occurrence
/// of the divider only. A divider inside the alias stays part of the alias
/// and is never re-split. Without a divider, the name doubles as the alias.
///
/// A name left empty by the split (a title like `:Alias`) is rejected: a
/// wikilink node must always carry a non-empty page name.
pub fn parse_page_title(title: &str, divider: char) -> Option<PageTitle<'_>> {
    let Some((name, display_alias)) = title.split_once(divider) else {
        return Some(PageTitle {
            display_alias: title,
            name: title,
        });
    };
    if name.is_empty() {
        return None;
    }
    return Some(PageTitle {
        display_alias,
        name,
    });
}

#[cfg(test)]
#[allow(clippy::missing_panics_doc)]
mod tests {
    use super::*;

    #[test]
    fn matches_plain_link_at_offset() {
        let regex = link_regex();
        let raw = match_raw(&regex, "see [[Wiki Link]] here", 4).unwrap();
        assert_eq!(raw.title, "Wiki Link");
        assert!(!raw.embed);
        assert_eq!(raw.consumed, "[[Wiki Link]]".len());
    }

    #[test]
    fn embed_marker_counts_toward_consumed_length() {
        let regex = link_regex();
        let raw = match_raw(&regex, "![[photo.png]]", 0).unwrap();
        assert!(raw.embed);
        assert_eq!(raw.consumed, "![[photo.png]]".len());
    }

    #[test]
    fn anchored_match_does_not_skip_ahead() {
        let regex = link_regex();
        assert!(match_raw(&regex, "text [[Link]]", 0).is_none());
    }

    #[test]
    fn title_is_trimmed() {
        let regex = link_regex();
        let raw = match_raw(&regex, "[[  Padded  ]]", 0).unwrap();
        assert_eq!(raw.title, "Padded");
    }

    #[test]
    fn whitespace_only_title_is_not_a_link() {
        let regex = link_regex();
        assert!(match_raw(&regex, "[[   ]]", 0).is_none());
    }

    #[test]
    fn first_closing_brackets_terminate_the_title() {
        let regex = link_regex();
        let raw = match_raw(&regex, "[[a]]b]]", 0).unwrap();
        assert_eq!(raw.title, "a");
        assert_eq!(raw.consumed, 5);
    }

    #[test]
    fn title_cannot_cross_a_line_break() {
        let regex = link_regex();
        assert!(match_raw(&regex, "[[one\ntwo]]", 0).is_none());
    }

    #[test]
    fn no_divider_means_name_doubles_as_alias() {
        let title = parse_page_title("Real Page", ':').unwrap();
        assert_eq!(title.name, "Real Page");
        assert_eq!(title.display_alias, "Real Page");
    }

    #[test]
    fn splits_on_first_divider_only() {
        let title = parse_page_title("A:B:C", ':').unwrap();
        assert_eq!(title.name, "A");
        assert_eq!(title.display_alias, "B:C");
    }

    #[test]
    fn empty_name_after_split_is_rejected() {
        assert!(parse_page_title(":Alias", ':').is_none());
    }
}
