use crate::content::BlockContent;
use crate::kind::BlockKind;
use serde::{Deserialize, Serialize};

/// Vertical padding tier applied above or below a block.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PaddingSize {
    None,
    Small,
    Medium,
    Large,
}

impl PaddingSize {
    /// Suffix of the shared stylesheet class (`pc-pad-top-{suffix}`).
    pub fn css_suffix(&self) -> &'static str {
        match self {
            PaddingSize::None => "none",
            PaddingSize::Small => "sm",
            PaddingSize::Medium => "md",
            PaddingSize::Large => "lg",
        }
    }
}

impl Default for PaddingSize {
    fn default() -> Self {
        PaddingSize::Medium
    }
}

/// Entrance animation kinds shipped by the shared stylesheet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum AnimationKind {
    FadeIn,
    FadeUp,
    ZoomIn,
}

impl AnimationKind {
    pub fn css_class(&self) -> &'static str {
        match self {
            AnimationKind::FadeIn => "pc-anim-fade-in",
            AnimationKind::FadeUp => "pc-anim-fade-up",
            AnimationKind::ZoomIn => "pc-anim-zoom-in",
        }
    }
}

/// Entrance animation for one block.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Animation {
    pub kind: AnimationKind,
    /// Rendered as an inline `animation-duration` override.
    pub duration_ms: u32,
}

/// Block-local presentation overrides.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct BlockSettings {
    pub padding_top: PaddingSize,
    pub padding_bottom: PaddingSize,
    /// Hex color painted behind the block, over the page background.
    pub background_color: Option<String>,
    /// Extra class appended to the section wrapper.
    pub custom_class: Option<String>,
    /// Hidden blocks stay in the document but are skipped by the assembler.
    pub is_visible: bool,
    pub animation: Option<Animation>,
}

impl Default for BlockSettings {
    fn default() -> Self {
        Self {
            padding_top: PaddingSize::Medium,
            padding_bottom: PaddingSize::Medium,
            background_color: None,
            custom_class: None,
            is_visible: true,
            animation: None,
        }
    }
}

/// One typed, reorderable unit of page content.
///
/// `id` and the content kind are fixed at creation; editors may only swap
/// `content` and `settings`. `order` always mirrors the block's index in
/// the document sequence - the sequencer renormalizes it after every
/// structural change.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Block {
    pub id: String,
    pub content: BlockContent,
    #[serde(default)]
    pub settings: BlockSettings,
    #[serde(default)]
    pub order: usize,
}

impl Block {
    /// Kind of this block; `None` for payloads preserved from newer builds.
    pub fn kind(&self) -> Option<BlockKind> {
        self.content.kind()
    }

    /// String tag of this block, including foreign tags.
    pub fn kind_tag(&self) -> &str {
        self.content.tag()
    }

    pub fn is_visible(&self) -> bool {
        self.settings.is_visible
    }
}
