/// Embed classification: reshape a link node into its media rendering form.
use crate::node::{RenderHint, WikiLinkNode};

/// Reshape a fully-built link node into the embed rendering form implied by
/// `target`'s file extension. Embeds always render as media, never as a
/// clickable link: mov/mp4/webm become a video hint, everything else —
/// including an absent or unrecognized extension — degrades to an image hint
/// with the display alias as alt text.
///
/// `target` is the full trimmed title as written (before alias splitting).
/// Extension comparison is case-sensitive, so `clip.MP4` falls through to
/// the image branch. The extension is only what follows the last `.`; a bare
/// name like `mov` has no extension and is an image, not a video.
///
/// Only the render hint changes. Class names pass through untouched, as do
/// `raw_name`, `display_alias`, `exists`, and `resolved_permalink`.
pub fn classify_embed(target: &str, node: WikiLinkNode) -> WikiLinkNode {
    let extension = target.rsplit_once('.').map_or("", |(_, ext)| return ext);

    let WikiLinkNode {
        display_alias,
        exists,
        raw_name,
        render_hint,
        resolved_permalink,
    } = node;

    // The href of the link form becomes the media source.
    let (class_names, src) = match render_hint {
        RenderHint::Link {
            class_names, href, ..
        } => (class_names, href),
        RenderHint::Image {
            class_names, src, ..
        }
        | RenderHint::Video { class_names, src } => (class_names, src),
    };

    let render_hint = match extension {
        "mov" | "mp4" | "webm" => RenderHint::Video { class_names, src },
        _ => RenderHint::Image {
            alt_text: display_alias.clone(),
            class_names,
            src,
        },
    };

    return WikiLinkNode {
        display_alias,
        exists,
        raw_name,
        render_hint,
        resolved_permalink,
    };
}

#[cfg(test)]
#[allow(clippy::missing_panics_doc)]
mod tests {
    use super::*;

    fn link_node(name: &str) -> WikiLinkNode {
        return WikiLinkNode {
            display_alias: name.to_string(),
            exists: false,
            raw_name: name.to_string(),
            render_hint: RenderHint::Link {
                child_text: name.to_string(),
                class_names: "internal new".to_string(),
                href: format!("#/page/{name}"),
            },
            resolved_permalink: name.to_string(),
        };
    }

    #[test]
    fn video_extensions_become_video_hints() {
        for name in ["a.mov", "b.mp4", "c.webm"] {
            let node = classify_embed(name, link_node(name));
            let RenderHint::Video { class_names, src } = node.render_hint else {
                panic!("expected video hint for {name}");
            };
            assert_eq!(class_names, "internal new");
            assert_eq!(src, format!("#/page/{name}"));
        }
    }

    #[test]
    fn image_extensions_and_unknowns_become_image_hints() {
        for name in ["a.png", "b.jpg", "c.jpeg", "d.gif", "e.pdf"] {
            let node = classify_embed(name, link_node(name));
            let RenderHint::Image { alt_text, src, .. } = node.render_hint else {
                panic!("expected image hint for {name}");
            };
            assert_eq!(alt_text, name);
            assert_eq!(src, format!("#/page/{name}"));
        }
    }

    #[test]
    fn extension_comparison_is_case_sensitive() {
        let node = classify_embed("clip.MP4", link_node("clip.MP4"));
        assert!(matches!(node.render_hint, RenderHint::Image { .. }));
    }

    #[test]
    fn missing_extension_is_not_a_video_even_when_named_like_one() {
        let node = classify_embed("mov", link_node("mov"));
        assert!(matches!(node.render_hint, RenderHint::Image { .. }));
    }

    #[test]
    fn semantic_fields_are_untouched() {
        let node = classify_embed("photo.png", link_node("photo.png"));
        assert_eq!(node.raw_name, "photo.png");
        assert_eq!(node.display_alias, "photo.png");
        assert_eq!(node.resolved_permalink, "photo.png");
        assert!(!node.exists);
    }
}
