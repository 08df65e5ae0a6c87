//! # Pagecraft Blocks
//!
//! Document model for the block-based page builder: the closed catalog of
//! block kinds, their content shapes, block and page-level settings, the
//! page document aggregate and the JSON payload the external page store
//! accepts.
//!
//! This crate owns data and invariants only. Editing flows live in
//! `pagecraft-editor`; HTML output lives in `pagecraft-renderer`.

pub mod block;
pub mod content;
pub mod design;
pub mod document;
pub mod id;
pub mod kind;
pub mod record;
pub mod registry;

pub use block::{Animation, AnimationKind, Block, BlockSettings, PaddingSize};
pub use content::{
    BlockContent, ContactContent, FaqContent, FaqItem, FeatureItem, FeaturesContent,
    GalleryContent, GalleryImage, HeroContent, OtherContent, PackageCard, PackagesContent,
    RichtextContent, Testimonial, TestimonialsContent, VideoContent,
};
pub use design::DesignSettings;
pub use document::{DocumentError, DocumentResult, PageDocument};
pub use id::{page_seed, IdGenerator};
pub use kind::BlockKind;
pub use record::PageRecord;
pub use registry::{default_content, BlockFactory};
