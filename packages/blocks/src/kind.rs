use serde::{Deserialize, Serialize};
use std::fmt;

/// The closed set of block types a page can be composed from.
///
/// Adding a kind here is a compile-time-checked change: the registry
/// defaults and every renderer match must be extended before the crate
/// builds again.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BlockKind {
    Hero,
    Features,
    Testimonials,
    Packages,
    Faq,
    Contact,
    Richtext,
    Gallery,
    Video,
}

impl BlockKind {
    /// Every kind, in editor palette order.
    pub const ALL: [BlockKind; 9] = [
        BlockKind::Hero,
        BlockKind::Features,
        BlockKind::Packages,
        BlockKind::Testimonials,
        BlockKind::Gallery,
        BlockKind::Video,
        BlockKind::Faq,
        BlockKind::Richtext,
        BlockKind::Contact,
    ];

    /// Stable string tag used in stored documents.
    pub fn tag(&self) -> &'static str {
        match self {
            BlockKind::Hero => "hero",
            BlockKind::Features => "features",
            BlockKind::Testimonials => "testimonials",
            BlockKind::Packages => "packages",
            BlockKind::Faq => "faq",
            BlockKind::Contact => "contact",
            BlockKind::Richtext => "richtext",
            BlockKind::Gallery => "gallery",
            BlockKind::Video => "video",
        }
    }

    pub fn from_tag(tag: &str) -> Option<BlockKind> {
        match tag {
            "hero" => Some(BlockKind::Hero),
            "features" => Some(BlockKind::Features),
            "testimonials" => Some(BlockKind::Testimonials),
            "packages" => Some(BlockKind::Packages),
            "faq" => Some(BlockKind::Faq),
            "contact" => Some(BlockKind::Contact),
            "richtext" => Some(BlockKind::Richtext),
            "gallery" => Some(BlockKind::Gallery),
            "video" => Some(BlockKind::Video),
            _ => None,
        }
    }

    /// Human label shown in the editor palette.
    pub fn label(&self) -> &'static str {
        match self {
            BlockKind::Hero => "Hero Banner",
            BlockKind::Features => "Feature Grid",
            BlockKind::Testimonials => "Testimonials",
            BlockKind::Packages => "Travel Packages",
            BlockKind::Faq => "FAQ",
            BlockKind::Contact => "Contact",
            BlockKind::Richtext => "Rich Text",
            BlockKind::Gallery => "Image Gallery",
            BlockKind::Video => "Video Embed",
        }
    }

    /// Icon name shown next to the label (lucide icon set).
    pub fn icon(&self) -> &'static str {
        match self {
            BlockKind::Hero => "image",
            BlockKind::Features => "layout-grid",
            BlockKind::Testimonials => "quote",
            BlockKind::Packages => "plane",
            BlockKind::Faq => "help-circle",
            BlockKind::Contact => "phone",
            BlockKind::Richtext => "text",
            BlockKind::Gallery => "images",
            BlockKind::Video => "video",
        }
    }
}

impl fmt::Display for BlockKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tag_round_trip() {
        for kind in BlockKind::ALL {
            assert_eq!(BlockKind::from_tag(kind.tag()), Some(kind));
        }
        assert_eq!(BlockKind::from_tag("carousel"), None);
    }

    #[test]
    fn test_serde_uses_lowercase_tags() {
        let json = serde_json::to_string(&BlockKind::Richtext).unwrap();
        assert_eq!(json, "\"richtext\"");

        let kind: BlockKind = serde_json::from_str("\"faq\"").unwrap();
        assert_eq!(kind, BlockKind::Faq);
    }

    #[test]
    fn test_palette_covers_every_kind() {
        assert_eq!(BlockKind::ALL.len(), 9);
        for kind in BlockKind::ALL {
            assert!(!kind.label().is_empty());
            assert!(!kind.icon().is_empty());
        }
    }
}
