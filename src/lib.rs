//! Wiki-style `[[Page]]` links and `![[file]]` embeds for inline text
//! pipelines.
//!
//! The crate turns each occurrence of the bracketed link syntax into a
//! structured [`WikiLinkNode`] carrying both semantic data (page name,
//! display alias, resolved permalink, existence flag) and a rendering hint
//! (anchor, image, or video shape), and can serialize such nodes back to
//! their textual form. It does not parse the surrounding document or render
//! markup — a host engine drives it through [`locate`]/`try_match` and owns
//! the resulting tree.
//!
//! Syntax, bit-exact: `"!"? "[[" <title> "]]"` where the title is one or
//! more characters matched non-greedily up to the first `]]`. A `:` (by
//! default) splits the title into page name and display alias.
//!
//! ```
//! use wikilinks::{InlineEvent, Options, WikiLinkTokenizer, scan};
//!
//! let options = Options {
//!     known_permalinks: std::iter::once("real_page".to_string()).collect(),
//!     ..Options::default()
//! };
//! let tokenizer = WikiLinkTokenizer::new(options);
//!
//! let events = scan("see [[Real Page:the docs]]", &tokenizer);
//! let InlineEvent::Link(node) = &events[1] else { unreachable!() };
//! assert!(node.exists);
//! assert_eq!(node.display_alias, "the docs");
//! assert_eq!(tokenizer.serialize(node), "[[Real Page:the docs]]");
//! ```

pub mod config;
pub mod embed;
pub mod error;
pub mod grammar;
pub mod locator;
pub mod node;
pub mod registry;
pub mod resolver;
pub mod scanner;
pub mod serializer;
pub mod tokenizer;

pub use config::Options;
pub use error::Error;
pub use locator::locate;
pub use node::{NODE_KIND, RenderHint, WikiLinkNode};
pub use registry::{InlineRegistry, InlineTokenizer, VisitorRegistry, register};
pub use resolver::{
    DefaultHrefTemplate, DefaultPageResolver, HrefTemplate, PageResolver, default_permalink,
};
pub use scanner::{InlineEvent, scan};
pub use serializer::serialize;
pub use tokenizer::{TokenMatch, WikiLinkTokenizer};
