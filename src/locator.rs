/// Candidate-start location for the host scan loop.
///
/// Probing a regex at every byte of a document is wasteful; the locator lets
/// the host skip directly to offsets where a wikilink could plausibly begin.

/// Return the earliest byte offset at or after `from` holding either link
/// opener character: `[` for a plain link, `!` for an embed. `None` means
/// neither occurs and the host must stop scanning.
///
/// A missing character never wins the minimum — `[` absent with `!` present
/// reports the `!` position, and vice versa. `from` past the end of `text`
/// (or not on a char boundary) reports `None`.
pub fn locate(text: &str, from: usize) -> Option<usize> {
    let tail = text.get(from..)?;
    let link_start = tail.find('[');
    let embed_start = tail.find('!');

    let nearest = match (link_start, embed_start) {
        (Some(link), Some(embed)) => link.min(embed),
        (Some(link), None) => link,
        (None, Some(embed)) => embed,
        (None, None) => return None,
    };
    return Some(from + nearest);
}
