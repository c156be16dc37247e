/// The wikilink node and its rendering hints.
use serde_json::{Value, json};

/// Stable kind tag identifying wikilink nodes to the host tree and renderer.
pub const NODE_KIND: &str = "wikiLink";

/// How a node should be rendered. Exactly one variant is attached, chosen at
/// construction, and never changes afterward. A closed sum keeps invalid
/// shapes (a node carrying both an `href` and a `src`) unrepresentable.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RenderHint {
    /// An `<img>` element — an embed whose extension is not a video type.
    Image {
        /// Alternate text, taken from the display alias.
        alt_text: String,
        /// Space-separated class string inherited from the link form.
        class_names: String,
        /// Media source, taken from the link destination.
        src: String,
    },
    /// An `<a>` element — the default for every non-embed link.
    Link {
        /// Text child shown inside the anchor; equals the display alias.
        child_text: String,
        /// Space-separated class string.
        class_names: String,
        /// Link destination built by the href template.
        href: String,
    },
    /// A `<video>` element — an embed with a mov/mp4/webm extension.
    Video {
        /// Space-separated class string inherited from the link form.
        class_names: String,
        /// Media source, taken from the link destination.
        src: String,
    },
}

/// The product of one successful tokenization. Immutable once returned;
/// consumed by a downstream renderer (via `render_hint`) or the serializer
/// (via `raw_name`/`display_alias`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WikiLinkNode {
    /// Text shown to the reader; equals `raw_name` when no alias was given.
    pub display_alias: String,
    /// True iff `resolved_permalink` was in the known set at resolution time.
    /// Computed together with the permalink; the pair never diverges.
    pub exists: bool,
    /// The page name as written, after alias-splitting and trimming.
    /// Never empty.
    pub raw_name: String,
    /// How the downstream renderer should draw this node.
    pub render_hint: RenderHint,
    /// The candidate chosen by the resolver; the link destination is built
    /// from it.
    pub resolved_permalink: String,
}

impl WikiLinkNode {
    /// The payload a downstream renderer consumes: kind tag, raw value, and a
    /// data record with alias, permalink, existence flag, and the hName /
    /// hProperties / hChildren rendering fields. Media hints carry no
    /// children.
    pub fn to_payload(&self) -> Value {
        let data = match &self.render_hint {
            RenderHint::Image {
                alt_text,
                class_names,
                src,
            } => json!({
                "alias": self.display_alias,
                "permalink": self.resolved_permalink,
                "exists": self.exists,
                "hName": "img",
                "hProperties": {
                    "className": class_names,
                    "src": src,
                    "alt": alt_text,
                },
            }),
            RenderHint::Link {
                child_text,
                class_names,
                href,
            } => json!({
                "alias": self.display_alias,
                "permalink": self.resolved_permalink,
                "exists": self.exists,
                "hName": "a",
                "hProperties": {
                    "className": class_names,
                    "href": href,
                },
                "hChildren": [{ "type": "text", "value": child_text }],
            }),
            RenderHint::Video { class_names, src } => json!({
                "alias": self.display_alias,
                "permalink": self.resolved_permalink,
                "exists": self.exists,
                "hName": "video",
                "hProperties": {
                    "className": class_names,
                    "src": src,
                },
            }),
        };

        return json!({
            "type": NODE_KIND,
            "value": self.raw_name,
            "data": data,
        });
    }
}
