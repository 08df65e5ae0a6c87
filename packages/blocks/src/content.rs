//! # Block Content Shapes
//!
//! One payload struct per block kind, collected into the [`BlockContent`]
//! tagged union. The union serializes as an object carrying a `"type"` tag
//! next to the payload fields, matching the stored-page format:
//!
//! ```json
//! { "type": "hero", "title": "...", "subtitle": "...", ... }
//! ```
//!
//! Deserialization is tag-dispatched by hand so that a tag this build does
//! not know collapses into [`BlockContent::Other`] instead of failing the
//! whole page. `Other` keeps the raw payload and writes it back unchanged,
//! so opening a page written by a newer build loses nothing.

use crate::kind::BlockKind;
use serde::de::Error as DeError;
use serde::ser::Error as SerError;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::Value;

/// Hero banner: headline, supporting copy and one call to action.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct HeroContent {
    pub title: String,
    pub subtitle: String,
    /// Background image URL, passed to the fragment verbatim.
    pub background_image: String,
    pub cta_label: String,
    pub cta_link: String,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FeatureItem {
    pub icon: String,
    pub title: String,
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FeaturesContent {
    pub title: String,
    pub items: Vec<FeatureItem>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Testimonial {
    pub author: String,
    pub role: String,
    pub quote: String,
    /// Avatar URL, passed to the fragment verbatim.
    pub avatar: String,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct TestimonialsContent {
    pub title: String,
    pub items: Vec<Testimonial>,
}

/// One bookable travel package card.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct PackageCard {
    pub name: String,
    /// Display price, already formatted ("from $2,450").
    pub price: String,
    pub duration: String,
    pub description: String,
    pub image: String,
    pub highlights: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct PackagesContent {
    pub title: String,
    pub subtitle: String,
    pub items: Vec<PackageCard>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FaqItem {
    pub question: String,
    pub answer: String,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FaqContent {
    pub title: String,
    /// Rendered in list order.
    pub items: Vec<FaqItem>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ContactContent {
    pub title: String,
    pub description: String,
    pub phone: String,
    pub email: String,
    pub whatsapp: String,
    pub address: String,
}

/// Explicitly-trusted HTML, rendered verbatim.
///
/// This is the single escape-free content field in the model; it exists for
/// the rich-text editor boundary and must never receive raw user input.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct RichtextContent {
    pub html: String,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct GalleryImage {
    pub url: String,
    pub caption: String,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct GalleryContent {
    pub title: String,
    pub images: Vec<GalleryImage>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct VideoContent {
    pub title: String,
    /// Embed URL (player page), passed to the iframe verbatim.
    pub embed_url: String,
    pub caption: String,
}

/// Payload preserved for a block kind this build does not know.
///
/// Only deserialization produces this variant; the registry cannot create
/// one. `data` holds the full stored object including its tag.
#[derive(Debug, Clone, PartialEq)]
pub struct OtherContent {
    pub kind: String,
    pub data: Value,
}

/// Content payload of one block, discriminated by kind.
#[derive(Debug, Clone, PartialEq)]
pub enum BlockContent {
    Hero(HeroContent),
    Features(FeaturesContent),
    Testimonials(TestimonialsContent),
    Packages(PackagesContent),
    Faq(FaqContent),
    Contact(ContactContent),
    Richtext(RichtextContent),
    Gallery(GalleryContent),
    Video(VideoContent),
    Other(OtherContent),
}

impl BlockContent {
    /// The kind for known content; `None` for preserved foreign payloads.
    pub fn kind(&self) -> Option<BlockKind> {
        match self {
            BlockContent::Hero(_) => Some(BlockKind::Hero),
            BlockContent::Features(_) => Some(BlockKind::Features),
            BlockContent::Testimonials(_) => Some(BlockKind::Testimonials),
            BlockContent::Packages(_) => Some(BlockKind::Packages),
            BlockContent::Faq(_) => Some(BlockKind::Faq),
            BlockContent::Contact(_) => Some(BlockKind::Contact),
            BlockContent::Richtext(_) => Some(BlockKind::Richtext),
            BlockContent::Gallery(_) => Some(BlockKind::Gallery),
            BlockContent::Video(_) => Some(BlockKind::Video),
            BlockContent::Other(_) => None,
        }
    }

    /// String tag of this content, including foreign tags.
    pub fn tag(&self) -> &str {
        match self {
            BlockContent::Other(other) => other.kind.as_str(),
            _ => self.kind().expect("known content has a kind").tag(),
        }
    }

    fn to_tagged_value(&self) -> serde_json::Result<Value> {
        let (tag, payload) = match self {
            BlockContent::Hero(c) => (BlockKind::Hero.tag(), serde_json::to_value(c)?),
            BlockContent::Features(c) => (BlockKind::Features.tag(), serde_json::to_value(c)?),
            BlockContent::Testimonials(c) => {
                (BlockKind::Testimonials.tag(), serde_json::to_value(c)?)
            }
            BlockContent::Packages(c) => (BlockKind::Packages.tag(), serde_json::to_value(c)?),
            BlockContent::Faq(c) => (BlockKind::Faq.tag(), serde_json::to_value(c)?),
            BlockContent::Contact(c) => (BlockKind::Contact.tag(), serde_json::to_value(c)?),
            BlockContent::Richtext(c) => (BlockKind::Richtext.tag(), serde_json::to_value(c)?),
            BlockContent::Gallery(c) => (BlockKind::Gallery.tag(), serde_json::to_value(c)?),
            BlockContent::Video(c) => (BlockKind::Video.tag(), serde_json::to_value(c)?),
            BlockContent::Other(c) => (c.kind.as_str(), c.data.clone()),
        };

        let mut object = match payload {
            Value::Object(map) => map,
            _ => serde_json::Map::new(),
        };
        object.insert("type".to_string(), Value::String(tag.to_string()));

        Ok(Value::Object(object))
    }

    /// Rebuild content from a stored object carrying a `"type"` tag.
    ///
    /// Unknown tags are preserved as [`BlockContent::Other`]; a known tag
    /// with a malformed payload is a real decode error.
    pub fn from_tagged_value(value: Value) -> serde_json::Result<Self> {
        let tag = value
            .get("type")
            .and_then(Value::as_str)
            .ok_or_else(|| {
                <serde_json::Error as DeError>::custom("block content is missing a \"type\" tag")
            })?
            .to_string();

        let content = match BlockKind::from_tag(&tag) {
            Some(BlockKind::Hero) => BlockContent::Hero(serde_json::from_value(value)?),
            Some(BlockKind::Features) => BlockContent::Features(serde_json::from_value(value)?),
            Some(BlockKind::Testimonials) => {
                BlockContent::Testimonials(serde_json::from_value(value)?)
            }
            Some(BlockKind::Packages) => BlockContent::Packages(serde_json::from_value(value)?),
            Some(BlockKind::Faq) => BlockContent::Faq(serde_json::from_value(value)?),
            Some(BlockKind::Contact) => BlockContent::Contact(serde_json::from_value(value)?),
            Some(BlockKind::Richtext) => BlockContent::Richtext(serde_json::from_value(value)?),
            Some(BlockKind::Gallery) => BlockContent::Gallery(serde_json::from_value(value)?),
            Some(BlockKind::Video) => BlockContent::Video(serde_json::from_value(value)?),
            None => BlockContent::Other(OtherContent { kind: tag, data: value }),
        };

        Ok(content)
    }
}

impl Serialize for BlockContent {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let value = self.to_tagged_value().map_err(S::Error::custom)?;
        value.serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for BlockContent {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = Value::deserialize(deserializer)?;
        BlockContent::from_tagged_value(value).map_err(D::Error::custom)
    }
}
