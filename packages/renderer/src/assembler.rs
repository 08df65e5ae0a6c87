//! # Page Assembler
//!
//! Composes the visible block fragments into one standalone HTML document:
//! doctype, head with escaped metadata, a `<style>` carrying the page
//! theme as CSS custom properties next to the shared block rules, the
//! fragments in document order, and a fixed footer.
//!
//! The output is self-contained (no external stylesheet, no script) and
//! deterministic: nothing here reads a clock or a random source, so the
//! same input always assembles to the same bytes. That also keeps the
//! preview boundary safe - render the output with scripting disabled and
//! only the rich-text block can carry markup through.

use crate::escape::escape_html;
use crate::fragments::render_block;
use pagecraft_blocks::{Block, DesignSettings, PageDocument};
use serde::{Deserialize, Serialize};

/// Fixed footer on every assembled page. Carries no clock-derived text so
/// assembly stays a pure function of its input.
const FOOTER: &str = "<footer class=\"pc-footer\">\n  <p>Crafted with Pagecraft</p>\n</footer>\n";

/// Page-level metadata for the document head.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PageMeta {
    pub title: String,
    /// Rendered as the `description` meta tag; skipped when empty.
    pub description: String,
}

impl PageMeta {
    pub fn new(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
        }
    }
}

/// Build the document-scoped stylesheet for a page theme.
///
/// Design settings become CSS custom properties consumed by the shared
/// block classes. Animation rules are only emitted when the page has
/// animations enabled: a page with the toggle off ships no keyframes at
/// all.
pub fn theme_css(design: &DesignSettings) -> String {
    let mut css = String::new();

    css.push_str(":root {\n");
    css.push_str(&format!("  --pc-primary: {};\n", design.primary_color));
    css.push_str(&format!("  --pc-font: {};\n", design.font_family));
    css.push_str(&format!("  --pc-radius: {}px;\n", design.border_radius));
    css.push_str("}\n");

    css.push_str("* { box-sizing: border-box; }\n");
    css.push_str("body { margin: 0; font-family: var(--pc-font); color: #1f2937; }\n");
    css.push_str("h1, h2, h3 { line-height: 1.2; }\n");
    css.push_str("h2 { text-align: center; }\n");
    css.push_str(".pc-block { padding-left: 24px; padding-right: 24px; }\n");
    css.push_str(".pc-pad-top-none { padding-top: 0; }\n");
    css.push_str(".pc-pad-top-sm { padding-top: 24px; }\n");
    css.push_str(".pc-pad-top-md { padding-top: 56px; }\n");
    css.push_str(".pc-pad-top-lg { padding-top: 96px; }\n");
    css.push_str(".pc-pad-bottom-none { padding-bottom: 0; }\n");
    css.push_str(".pc-pad-bottom-sm { padding-bottom: 24px; }\n");
    css.push_str(".pc-pad-bottom-md { padding-bottom: 56px; }\n");
    css.push_str(".pc-pad-bottom-lg { padding-bottom: 96px; }\n");
    css.push_str(".pc-grid { display: grid; gap: 24px; grid-template-columns: repeat(auto-fit, minmax(260px, 1fr)); max-width: 1080px; margin: 0 auto; }\n");
    css.push_str(".pc-btn { display: inline-block; padding: 12px 28px; background: var(--pc-primary); color: #fff; text-decoration: none; border-radius: var(--pc-radius); }\n");
    css.push_str(".pc-hero-inner { max-width: 1080px; margin: 0 auto; padding: 64px 0; text-align: center; background-size: cover; background-position: center; }\n");
    css.push_str(".pc-card { border: 1px solid #e5e7eb; border-radius: var(--pc-radius); overflow: hidden; }\n");
    css.push_str(".pc-card img { width: 100%; display: block; }\n");
    css.push_str(".pc-card-body { padding: 16px; }\n");
    css.push_str(".pc-price { color: var(--pc-primary); font-weight: 600; }\n");
    css.push_str(".pc-testimonial { margin: 0; padding: 16px; border-left: 3px solid var(--pc-primary); }\n");
    css.push_str(".pc-avatar { width: 40px; height: 40px; border-radius: 50%; }\n");
    css.push_str(".pc-faq { max-width: 720px; margin: 0 auto; }\n");
    css.push_str(".pc-faq-item { border-bottom: 1px solid #e5e7eb; padding: 12px 0; }\n");
    css.push_str(".pc-contact-list { list-style: none; max-width: 720px; margin: 0 auto; padding: 0; }\n");
    css.push_str(".pc-contact-list a { color: var(--pc-primary); }\n");
    css.push_str(".pc-gallery { display: grid; gap: 12px; grid-template-columns: repeat(auto-fill, minmax(220px, 1fr)); max-width: 1080px; margin: 0 auto; }\n");
    css.push_str(".pc-gallery img { width: 100%; border-radius: var(--pc-radius); display: block; }\n");
    css.push_str(".pc-video-frame { position: relative; max-width: 860px; margin: 0 auto; aspect-ratio: 16 / 9; }\n");
    css.push_str(".pc-video-frame iframe { width: 100%; height: 100%; border: 0; border-radius: var(--pc-radius); }\n");
    css.push_str(".pc-richtext { max-width: 720px; margin: 0 auto; line-height: 1.6; }\n");
    css.push_str(".pc-footer { padding: 32px 24px; text-align: center; color: #6b7280; font-size: 14px; }\n");

    if design.animations_enabled {
        css.push_str("@keyframes pc-fade-in { from { opacity: 0; } to { opacity: 1; } }\n");
        css.push_str("@keyframes pc-fade-up { from { opacity: 0; transform: translateY(24px); } to { opacity: 1; transform: none; } }\n");
        css.push_str("@keyframes pc-zoom-in { from { opacity: 0; transform: scale(0.95); } to { opacity: 1; transform: none; } }\n");
        css.push_str(".pc-anim-fade-in { animation: pc-fade-in 0.6s ease-out both; }\n");
        css.push_str(".pc-anim-fade-up { animation: pc-fade-up 0.6s ease-out both; }\n");
        css.push_str(".pc-anim-zoom-in { animation: pc-zoom-in 0.6s ease-out both; }\n");
    }

    css
}

/// Compose visible blocks into a standalone HTML document.
///
/// Hidden blocks are skipped; everything else renders in document order.
pub fn assemble(blocks: &[Block], meta: &PageMeta, design: &DesignSettings) -> String {
    let mut html = String::new();

    html.push_str("<!DOCTYPE html>\n");
    html.push_str("<html lang=\"en\">\n");
    html.push_str("<head>\n");
    html.push_str("  <meta charset=\"UTF-8\">\n");
    html.push_str("  <meta name=\"viewport\" content=\"width=device-width, initial-scale=1.0\">\n");
    html.push_str(&format!("  <title>{}</title>\n", escape_html(&meta.title)));
    if !meta.description.is_empty() {
        html.push_str(&format!(
            "  <meta name=\"description\" content=\"{}\">\n",
            escape_html(&meta.description)
        ));
    }
    html.push_str("  <style>\n");
    html.push_str(&theme_css(design));
    html.push_str("  </style>\n");
    html.push_str("</head>\n");
    html.push_str("<body>\n");

    for block in blocks.iter().filter(|block| block.is_visible()) {
        let fragment = render_block(block, design);
        if fragment.is_empty() {
            continue;
        }
        html.push_str(&fragment);
        html.push('\n');
    }

    html.push_str(FOOTER);
    html.push_str("</body>\n");
    html.push_str("</html>\n");

    html
}

/// Assemble a whole page document under its own design settings.
pub fn render_page(document: &PageDocument, meta: &PageMeta) -> String {
    assemble(&document.blocks, meta, &document.design)
}
