/// Reference scan driver: walk a text buffer with the locator/tokenizer pair.
///
/// Hosts with their own inline engines drive `WikiLinkTokenizer` directly;
/// this module is the loop for everyone else, and the harness the
/// integration tests run end to end.
use crate::node::WikiLinkNode;
use crate::tokenizer::WikiLinkTokenizer;

/// One segment of a scanned buffer, in document order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InlineEvent {
    /// A matched wikilink or embed.
    Link(WikiLinkNode),
    /// A run of plain text between matches. Never empty.
    Text(String),
}

/// Scan `text` start to end, yielding plain-text runs interleaved with
/// wikilink nodes. A located candidate that fails to match stays plain text
/// and scanning resumes one byte later; text after the last match is emitted
/// as a final text run.
pub fn scan(text: &str, tokenizer: &WikiLinkTokenizer) -> Vec<InlineEvent> {
    let mut events = Vec::new();
    let mut cursor = 0;
    let mut text_start = 0;

    while let Some(candidate) = tokenizer.locate(text, cursor) {
        let Some(m) = tokenizer.try_match(text, candidate) else {
            // A bare `[` or `!`; both are ASCII, so +1 stays on a boundary.
            cursor = candidate + 1;
            continue;
        };

        if let Some(pending) = text.get(text_start..candidate) {
            if !pending.is_empty() {
                events.push(InlineEvent::Text(pending.to_string()));
            }
        }
        events.push(InlineEvent::Link(m.node));

        cursor = candidate + m.consumed;
        text_start = cursor;
    }

    if let Some(rest) = text.get(text_start..) {
        if !rest.is_empty() {
            events.push(InlineEvent::Text(rest.to_string()));
        }
    }
    return events;
}
