/// Host engine integration.
///
/// A host engine owns an ordered list of named inline tokenizers and,
/// optionally, a map of per-kind stringify visitors in its compiler stage.
/// Rather than splicing into host-owned structures, the host implements the
/// two registry traits and calls `register` — plain dependency injection, no
/// shared mutable state.
use std::sync::Arc;

use crate::node::{NODE_KIND, WikiLinkNode};
use crate::serializer;
use crate::tokenizer::{TokenMatch, WikiLinkTokenizer};

/// Name of the host's generic link tokenizer. The wikilink tokenizer is
/// inserted immediately before it so `[[...]]` is attempted first and never
/// shadowed by plain `[...](...)` handling.
const LINK_ANCHOR: &str = "link";

/// A stringify visitor for one node kind.
pub type Visitor = Box<dyn Fn(&WikiLinkNode) -> String + Send + Sync>;

/// The inline tokenizer interface a host engine drives: ask `locate` where
/// the next candidate starts, then ask `try_match` to attempt a match there.
pub trait InlineTokenizer: Send + Sync {
    /// The earliest offset at or after `from` where a match could begin.
    fn locate(&self, text: &str, from: usize) -> Option<usize>;
    /// Attempt a match anchored exactly at `offset`.
    fn try_match(&self, text: &str, offset: usize) -> Option<TokenMatch>;
}

/// The host parser's ordered, named tokenizer list.
pub trait InlineRegistry {
    /// Insert `tokenizer` under `name`, immediately before the tokenizer
    /// registered as `anchor`.
    fn insert_before(&mut self, anchor: &str, name: &'static str, tokenizer: Arc<dyn InlineTokenizer>);
}

/// The host compiler's node-kind → stringify visitor map.
pub trait VisitorRegistry {
    /// Install the stringify visitor for a node kind.
    fn install(&mut self, kind: &'static str, visitor: Visitor);
}

impl InlineTokenizer for WikiLinkTokenizer {
    fn locate(&self, text: &str, from: usize) -> Option<usize> {
        return Self::locate(self, text, from);
    }

    fn try_match(&self, text: &str, offset: usize) -> Option<TokenMatch> {
        return Self::try_match(self, text, offset);
    }
}

/// Install the wikilink tokenizer into a host parser and, when the host has a
/// compiler stage, the stringify visitor into it. Serialization support is
/// optional — hosts without a compiler pass `None`.
pub fn register(
    parser: &mut dyn InlineRegistry,
    compiler: Option<&mut dyn VisitorRegistry>,
    tokenizer: Arc<WikiLinkTokenizer>,
) {
    let divider = tokenizer.options().alias_divider;
    parser.insert_before(LINK_ANCHOR, NODE_KIND, tokenizer);

    if let Some(compiler) = compiler {
        compiler.install(
            NODE_KIND,
            Box::new(move |node| return serializer::serialize(node, divider)),
        );
    }
}
