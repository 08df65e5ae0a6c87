//! # Block Fragments
//!
//! One pure render function per block kind. Each fragment is a `<section>`
//! wrapper carrying the block's identity and presentation settings around
//! the kind-specific body. A kind preserved from a newer build renders as
//! an empty fragment, so one foreign block never takes down the page.
//!
//! Every plain-text field is entity-escaped on the way into the markup.
//! URL fields (image sources, links, embeds) and the rich-text block's
//! `html` are trusted verbatim; phone-shaped fields are reduced to digits
//! before they enter an `href`.

use crate::escape::escape_html;
use pagecraft_blocks::{
    Block, BlockContent, ContactContent, DesignSettings, FaqContent, FeaturesContent,
    GalleryContent, HeroContent, PackagesContent, RichtextContent, TestimonialsContent,
    VideoContent,
};
use tracing::warn;

/// Render one block to its markup fragment.
///
/// Pure and deterministic: the same block and design always produce the
/// same string. Visibility is the assembler's concern - this renders
/// whatever it is handed.
pub fn render_block(block: &Block, design: &DesignSettings) -> String {
    let body = match &block.content {
        BlockContent::Hero(content) => render_hero(content),
        BlockContent::Features(content) => render_features(content),
        BlockContent::Testimonials(content) => render_testimonials(content),
        BlockContent::Packages(content) => render_packages(content),
        BlockContent::Faq(content) => render_faq(content),
        BlockContent::Contact(content) => render_contact(content),
        BlockContent::Richtext(content) => render_richtext(content),
        BlockContent::Gallery(content) => render_gallery(content),
        BlockContent::Video(content) => render_video(content),
        BlockContent::Other(other) => {
            warn!(kind = %other.kind, block_id = %block.id, "Skipping block of unknown kind");
            return String::new();
        }
    };

    let mut section = String::new();
    section.push_str(&format!(
        "<section data-block-id=\"{}\" class=\"{}\"",
        escape_html(&block.id),
        section_classes(block, design)
    ));
    if let Some(style) = section_style(block, design) {
        section.push_str(&format!(" style=\"{}\"", style));
    }
    section.push_str(">\n");
    section.push_str(&body);
    section.push_str("\n</section>");
    section
}

fn section_classes(block: &Block, design: &DesignSettings) -> String {
    let mut classes = vec![
        "pc-block".to_string(),
        format!("pc-{}", block.kind_tag()),
        format!("pc-pad-top-{}", block.settings.padding_top.css_suffix()),
        format!(
            "pc-pad-bottom-{}",
            block.settings.padding_bottom.css_suffix()
        ),
    ];

    if design.animations_enabled {
        if let Some(animation) = &block.settings.animation {
            classes.push(animation.kind.css_class().to_string());
        }
    }

    if let Some(custom) = &block.settings.custom_class {
        if !custom.is_empty() {
            classes.push(escape_html(custom));
        }
    }

    classes.join(" ")
}

fn section_style(block: &Block, design: &DesignSettings) -> Option<String> {
    let mut declarations = Vec::new();

    if let Some(color) = &block.settings.background_color {
        if !color.is_empty() {
            declarations.push(format!("background-color:{}", escape_html(color)));
        }
    }

    if design.animations_enabled {
        if let Some(animation) = &block.settings.animation {
            declarations.push(format!("animation-duration:{}ms", animation.duration_ms));
        }
    }

    if declarations.is_empty() {
        None
    } else {
        Some(declarations.join(";"))
    }
}

fn render_hero(content: &HeroContent) -> String {
    let mut html = String::new();

    if content.background_image.is_empty() {
        html.push_str("  <div class=\"pc-hero-inner\">\n");
    } else {
        html.push_str(&format!(
            "  <div class=\"pc-hero-inner\" style=\"background-image:url('{}')\">\n",
            content.background_image
        ));
    }

    html.push_str(&format!("    <h1>{}</h1>\n", escape_html(&content.title)));
    if !content.subtitle.is_empty() {
        html.push_str(&format!(
            "    <p class=\"pc-hero-subtitle\">{}</p>\n",
            escape_html(&content.subtitle)
        ));
    }
    if !content.cta_label.is_empty() {
        html.push_str(&format!(
            "    <a class=\"pc-btn\" href=\"{}\">{}</a>\n",
            content.cta_link,
            escape_html(&content.cta_label)
        ));
    }
    html.push_str("  </div>");
    html
}

fn render_features(content: &FeaturesContent) -> String {
    let mut html = String::new();

    if !content.title.is_empty() {
        html.push_str(&format!("  <h2>{}</h2>\n", escape_html(&content.title)));
    }

    html.push_str("  <div class=\"pc-grid pc-features-grid\">\n");
    for item in &content.items {
        html.push_str("    <div class=\"pc-feature\">\n");
        if !item.icon.is_empty() {
            html.push_str(&format!(
                "      <span class=\"pc-icon\" data-icon=\"{}\"></span>\n",
                escape_html(&item.icon)
            ));
        }
        html.push_str(&format!("      <h3>{}</h3>\n", escape_html(&item.title)));
        html.push_str(&format!(
            "      <p>{}</p>\n",
            escape_html(&item.description)
        ));
        html.push_str("    </div>\n");
    }
    html.push_str("  </div>");
    html
}

fn render_testimonials(content: &TestimonialsContent) -> String {
    let mut html = String::new();

    if !content.title.is_empty() {
        html.push_str(&format!("  <h2>{}</h2>\n", escape_html(&content.title)));
    }

    html.push_str("  <div class=\"pc-grid pc-testimonials-grid\">\n");
    for item in &content.items {
        html.push_str("    <figure class=\"pc-testimonial\">\n");
        html.push_str(&format!(
            "      <blockquote>{}</blockquote>\n",
            escape_html(&item.quote)
        ));
        html.push_str("      <figcaption>\n");
        if !item.avatar.is_empty() {
            html.push_str(&format!(
                "        <img class=\"pc-avatar\" src=\"{}\" alt=\"{}\" />\n",
                item.avatar,
                escape_html(&item.author)
            ));
        }
        html.push_str(&format!(
            "        <span class=\"pc-author\">{}</span>\n",
            escape_html(&item.author)
        ));
        if !item.role.is_empty() {
            html.push_str(&format!(
                "        <span class=\"pc-role\">{}</span>\n",
                escape_html(&item.role)
            ));
        }
        html.push_str("      </figcaption>\n");
        html.push_str("    </figure>\n");
    }
    html.push_str("  </div>");
    html
}

fn render_packages(content: &PackagesContent) -> String {
    let mut html = String::new();

    if !content.title.is_empty() {
        html.push_str(&format!("  <h2>{}</h2>\n", escape_html(&content.title)));
    }
    if !content.subtitle.is_empty() {
        html.push_str(&format!(
            "  <p class=\"pc-subtitle\">{}</p>\n",
            escape_html(&content.subtitle)
        ));
    }

    html.push_str("  <div class=\"pc-grid pc-packages-grid\">\n");
    for card in &content.items {
        html.push_str("    <article class=\"pc-card\">\n");
        if !card.image.is_empty() {
            html.push_str(&format!(
                "      <img src=\"{}\" alt=\"{}\" />\n",
                card.image,
                escape_html(&card.name)
            ));
        }
        html.push_str("      <div class=\"pc-card-body\">\n");
        html.push_str(&format!("        <h3>{}</h3>\n", escape_html(&card.name)));
        html.push_str(&format!(
            "        <p class=\"pc-card-meta\"><span class=\"pc-price\">{}</span> <span class=\"pc-duration\">{}</span></p>\n",
            escape_html(&card.price),
            escape_html(&card.duration)
        ));
        if !card.description.is_empty() {
            html.push_str(&format!(
                "        <p>{}</p>\n",
                escape_html(&card.description)
            ));
        }
        if !card.highlights.is_empty() {
            html.push_str("        <ul class=\"pc-highlights\">\n");
            for highlight in &card.highlights {
                html.push_str(&format!("          <li>{}</li>\n", escape_html(highlight)));
            }
            html.push_str("        </ul>\n");
        }
        html.push_str("      </div>\n");
        html.push_str("    </article>\n");
    }
    html.push_str("  </div>");
    html
}

fn render_faq(content: &FaqContent) -> String {
    let mut html = String::new();

    if !content.title.is_empty() {
        html.push_str(&format!("  <h2>{}</h2>\n", escape_html(&content.title)));
    }

    html.push_str("  <div class=\"pc-faq\">\n");
    for item in &content.items {
        html.push_str("    <details class=\"pc-faq-item\">\n");
        html.push_str(&format!(
            "      <summary>{}</summary>\n",
            escape_html(&item.question)
        ));
        html.push_str(&format!("      <p>{}</p>\n", escape_html(&item.answer)));
        html.push_str("    </details>\n");
    }
    html.push_str("  </div>");
    html
}

fn render_contact(content: &ContactContent) -> String {
    let mut html = String::new();

    if !content.title.is_empty() {
        html.push_str(&format!("  <h2>{}</h2>\n", escape_html(&content.title)));
    }
    if !content.description.is_empty() {
        html.push_str(&format!(
            "  <p>{}</p>\n",
            escape_html(&content.description)
        ));
    }

    html.push_str("  <ul class=\"pc-contact-list\">\n");
    if !content.phone.is_empty() {
        html.push_str(&format!(
            "    <li><a href=\"tel:{}\">{}</a></li>\n",
            digits(&content.phone),
            escape_html(&content.phone)
        ));
    }
    if !content.email.is_empty() {
        html.push_str(&format!(
            "    <li><a href=\"mailto:{}\">{}</a></li>\n",
            escape_html(&content.email),
            escape_html(&content.email)
        ));
    }
    if !content.whatsapp.is_empty() {
        html.push_str(&format!(
            "    <li><a href=\"https://wa.me/{}\">{}</a></li>\n",
            digits(&content.whatsapp),
            escape_html(&content.whatsapp)
        ));
    }
    if !content.address.is_empty() {
        html.push_str(&format!(
            "    <li class=\"pc-address\">{}</li>\n",
            escape_html(&content.address)
        ));
    }
    html.push_str("  </ul>");
    html
}

fn render_richtext(content: &RichtextContent) -> String {
    // Trusted pass-through: this field only ever comes from the rich-text
    // editor boundary, never from a plain input.
    format!("  <div class=\"pc-richtext\">{}</div>", content.html)
}

fn render_gallery(content: &GalleryContent) -> String {
    let mut html = String::new();

    if !content.title.is_empty() {
        html.push_str(&format!("  <h2>{}</h2>\n", escape_html(&content.title)));
    }

    html.push_str("  <div class=\"pc-gallery\">\n");
    for image in &content.images {
        html.push_str("    <figure>\n");
        html.push_str(&format!(
            "      <img src=\"{}\" alt=\"{}\" loading=\"lazy\" />\n",
            image.url,
            escape_html(&image.caption)
        ));
        if !image.caption.is_empty() {
            html.push_str(&format!(
                "      <figcaption>{}</figcaption>\n",
                escape_html(&image.caption)
            ));
        }
        html.push_str("    </figure>\n");
    }
    html.push_str("  </div>");
    html
}

fn render_video(content: &VideoContent) -> String {
    let mut html = String::new();

    if !content.title.is_empty() {
        html.push_str(&format!("  <h2>{}</h2>\n", escape_html(&content.title)));
    }

    if content.embed_url.is_empty() {
        html.push_str("  <div class=\"pc-video-frame pc-video-empty\"></div>");
    } else {
        html.push_str(&format!(
            "  <div class=\"pc-video-frame\"><iframe src=\"{}\" title=\"{}\" allowfullscreen></iframe></div>",
            content.embed_url,
            escape_html(&content.title)
        ));
    }

    if !content.caption.is_empty() {
        html.push_str(&format!(
            "\n  <p class=\"pc-caption\">{}</p>",
            escape_html(&content.caption)
        ));
    }
    html
}

/// Keep only digits; `tel:` and `wa.me` links reject formatted numbers.
fn digits(number: &str) -> String {
    number.chars().filter(|c| c.is_ascii_digit()).collect()
}
