/// The configured tokenizer: match, parse, resolve, classify.
use regex::Regex;

use crate::config::Options;
use crate::embed::classify_embed;
use crate::grammar;
use crate::locator;
use crate::node::{RenderHint, WikiLinkNode};
use crate::resolver::{
    DefaultHrefTemplate, DefaultPageResolver, HrefTemplate, PageResolver, resolve_permalink,
};
use crate::serializer;

/// One successful match: the node plus how far the host should advance.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TokenMatch {
    /// Bytes consumed from the match offset, including brackets and the
    /// optional `!`. The host resumes scanning at `offset + consumed`.
    pub consumed: usize,
    /// The finished, immutable wikilink node.
    pub node: WikiLinkNode,
}

/// Wikilink tokenizer with its configuration captured at construction.
///
/// Nothing here mutates after `new`, so one tokenizer can be shared across
/// any number of concurrent scanning passes without coordination.
pub struct WikiLinkTokenizer {
    /// Link destination policy.
    href_template: Box<dyn HrefTemplate>,
    /// Compiled link pattern, built once.
    link_regex: Regex,
    /// Shared options: known permalinks, class names, alias divider.
    options: Options,
    /// Permalink candidate policy.
    page_resolver: Box<dyn PageResolver>,
}

impl WikiLinkTokenizer {
    /// Build a tokenizer with the default resolution policies.
    pub fn new(options: Options) -> Self {
        return Self::with_policies(
            options,
            Box::new(DefaultPageResolver),
            Box::new(DefaultHrefTemplate),
        );
    }

    /// Build a tokenizer with custom permalink and href policies.
    pub fn with_policies(
        options: Options,
        page_resolver: Box<dyn PageResolver>,
        href_template: Box<dyn HrefTemplate>,
    ) -> Self {
        return Self {
            href_template,
            link_regex: grammar::link_regex(),
            options,
            page_resolver,
        };
    }

    /// The earliest offset at or after `from` where a link could begin.
    /// Lets the host skip ahead instead of probing every byte.
    pub fn locate(&self, text: &str, from: usize) -> Option<usize> {
        return locator::locate(text, from);
    }

    /// The configuration this tokenizer was built with.
    pub fn options(&self) -> &Options {
        return &self.options;
    }

    /// Reconstruct the textual form of a node using the configured divider.
    pub fn serialize(&self, node: &WikiLinkNode) -> String {
        return serializer::serialize(node, self.options.alias_divider);
    }

    /// Attempt a full match anchored exactly at `offset`. `None` means the
    /// text there is not a wikilink and the host should retry further on.
    ///
    /// On success: the title is parsed into name and alias, the name is
    /// resolved to a permalink and existence flag, the class string and
    /// default link hint are built, and an embed match is reshaped into its
    /// media form.
    pub fn try_match(&self, text: &str, offset: usize) -> Option<TokenMatch> {
        let raw = grammar::match_raw(&self.link_regex, text, offset)?;
        let title = grammar::parse_page_title(raw.title, self.options.alias_divider)?;

        let candidates = self.page_resolver.permalinks(title.name);
        let (resolved_permalink, exists) =
            resolve_permalink(title.name, candidates, &self.options.known_permalinks);

        // Class composition happens before embed classification; the
        // classifier inherits this string unchanged.
        let class_names = self.options.class_names(exists);
        let href = self.href_template.href(&resolved_permalink);

        let node = WikiLinkNode {
            display_alias: title.display_alias.to_string(),
            exists,
            raw_name: title.name.to_string(),
            render_hint: RenderHint::Link {
                child_text: title.display_alias.to_string(),
                class_names,
                href,
            },
            resolved_permalink,
        };

        let node = if raw.embed {
            classify_embed(raw.title, node)
        } else {
            node
        };

        return Some(TokenMatch {
            consumed: raw.consumed,
            node,
        });
    }
}
