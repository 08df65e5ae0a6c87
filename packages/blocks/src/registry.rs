//! # Block Registry
//!
//! The catalog side of [`BlockKind`]: starter content for every kind plus
//! the factory that mints blocks with fresh ids. The kind set is closed,
//! so "unknown type at creation" is unrepresentable - a new kind must be
//! added to the enum, to [`default_content`] and to the renderer before
//! the workspace compiles again.

use crate::block::{Block, BlockSettings};
use crate::content::{
    BlockContent, ContactContent, FaqContent, FaqItem, FeatureItem, FeaturesContent,
    GalleryContent, HeroContent, PackageCard, PackagesContent, RichtextContent,
    TestimonialsContent, VideoContent,
};
use crate::id::IdGenerator;
use crate::kind::BlockKind;

/// Starter content for a freshly added block of the given kind.
///
/// Each kind ships with realistic placeholder copy so a new block looks
/// like something in the preview instead of an empty band.
pub fn default_content(kind: BlockKind) -> BlockContent {
    match kind {
        BlockKind::Hero => BlockContent::Hero(HeroContent {
            title: "Your Sacred Journey Starts Here".to_string(),
            subtitle: "Guided Umrah and Hajj packages with trusted local teams".to_string(),
            background_image: String::new(),
            cta_label: "Browse Packages".to_string(),
            cta_link: "#packages".to_string(),
        }),

        BlockKind::Features => BlockContent::Features(FeaturesContent {
            title: "Why Travel With Us".to_string(),
            items: vec![
                FeatureItem {
                    icon: "shield-check".to_string(),
                    title: "Licensed Operator".to_string(),
                    description: "Fully accredited with every ministry permit in place."
                        .to_string(),
                },
                FeatureItem {
                    icon: "map".to_string(),
                    title: "Experienced Guides".to_string(),
                    description: "Multilingual guides accompany every group, door to door."
                        .to_string(),
                },
                FeatureItem {
                    icon: "building".to_string(),
                    title: "Hotels Near the Haram".to_string(),
                    description: "Walkable accommodation so you spend time where it matters."
                        .to_string(),
                },
            ],
        }),

        BlockKind::Testimonials => BlockContent::Testimonials(TestimonialsContent {
            title: "What Our Pilgrims Say".to_string(),
            items: vec![],
        }),

        BlockKind::Packages => BlockContent::Packages(PackagesContent {
            title: "Popular Packages".to_string(),
            subtitle: "Departures every month, group and private options".to_string(),
            items: vec![PackageCard {
                name: "Umrah Essentials".to_string(),
                price: "from $1,950".to_string(),
                duration: "10 days".to_string(),
                description: "Flights, visa, transfers and hotels a short walk from the Haram."
                    .to_string(),
                image: String::new(),
                highlights: vec![
                    "Visa processing included".to_string(),
                    "Daily group transport".to_string(),
                ],
            }],
        }),

        BlockKind::Faq => BlockContent::Faq(FaqContent {
            title: "Frequently Asked Questions".to_string(),
            items: vec![FaqItem {
                question: "Is the visa included in the package price?".to_string(),
                answer: "Yes, we process the visa for every traveller on the booking."
                    .to_string(),
            }],
        }),

        BlockKind::Contact => BlockContent::Contact(ContactContent {
            title: "Talk to Our Team".to_string(),
            description: "Questions about dates, rooms or visas? We reply within the hour."
                .to_string(),
            phone: String::new(),
            email: String::new(),
            whatsapp: String::new(),
            address: String::new(),
        }),

        BlockKind::Richtext => BlockContent::Richtext(RichtextContent {
            html: "<p>Write something here...</p>".to_string(),
        }),

        BlockKind::Gallery => BlockContent::Gallery(GalleryContent {
            title: "Moments From Past Journeys".to_string(),
            images: vec![],
        }),

        BlockKind::Video => BlockContent::Video(VideoContent {
            title: String::new(),
            embed_url: String::new(),
            caption: String::new(),
        }),
    }
}

/// Creates blocks with fresh unique ids and default content.
#[derive(Debug, Clone)]
pub struct BlockFactory {
    ids: IdGenerator,
}

impl BlockFactory {
    pub fn new(page_id: &str) -> Self {
        Self {
            ids: IdGenerator::new(page_id),
        }
    }

    /// Reopen a stored page: the id counter continues past existing ids.
    pub fn resume<'a>(page_id: &str, existing: impl IntoIterator<Item = &'a str>) -> Self {
        Self {
            ids: IdGenerator::resume(page_id, existing),
        }
    }

    /// Build a fresh block: unique id, starter content, default settings.
    ///
    /// `order` is left at zero; the sequencer assigns the real position
    /// when the block enters a document.
    pub fn create(&mut self, kind: BlockKind) -> Block {
        Block {
            id: self.ids.new_id(),
            content: default_content(kind),
            settings: BlockSettings::default(),
            order: 0,
        }
    }

    /// Mint an id without building a block (duplication path).
    pub fn new_id(&mut self) -> String {
        self.ids.new_id()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_assigns_unique_ids() {
        let mut factory = BlockFactory::new("landing-home");
        let a = factory.create(BlockKind::Hero);
        let b = factory.create(BlockKind::Hero);

        assert_ne!(a.id, b.id);
        assert!(a.settings.is_visible);
        assert_eq!(a.kind(), Some(BlockKind::Hero));
    }

    #[test]
    fn test_every_kind_has_matching_default_content() {
        for kind in BlockKind::ALL {
            assert_eq!(default_content(kind).kind(), Some(kind));
        }
    }

    #[test]
    fn test_hero_default_has_a_call_to_action() {
        match default_content(BlockKind::Hero) {
            BlockContent::Hero(hero) => {
                assert!(!hero.title.is_empty());
                assert!(!hero.cta_label.is_empty());
            }
            _ => panic!("expected hero content"),
        }
    }
}
