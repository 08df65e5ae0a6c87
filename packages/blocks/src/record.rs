use crate::block::Block;
use crate::design::DesignSettings;
use serde::{Deserialize, Serialize};

/// Payload handed to the external page store on save.
///
/// Carries the raw block sequence and design settings for later re-editing
/// next to the assembled HTML the public site serves. The store's schema
/// beyond this shape is not ours.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageRecord {
    pub blocks: Vec<Block>,
    #[serde(default)]
    pub design_settings: DesignSettings,
    #[serde(default)]
    pub rendered_html: String,
}

impl PageRecord {
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }

    /// Decode a stored record.
    ///
    /// Stored `order` fields are not trusted: array position is the truth,
    /// and every block's `order` is rewritten to its index on the way in.
    pub fn from_json(json: &str) -> serde_json::Result<Self> {
        let mut record: Self = serde_json::from_str(json)?;
        for (index, block) in record.blocks.iter_mut().enumerate() {
            block.order = index;
        }
        Ok(record)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::block::BlockSettings;
    use crate::content::{BlockContent, ContactContent};

    #[test]
    fn test_record_uses_contract_field_names() {
        let record = PageRecord {
            blocks: vec![Block {
                id: "p-1".to_string(),
                content: BlockContent::Contact(ContactContent::default()),
                settings: BlockSettings::default(),
                order: 0,
            }],
            design_settings: DesignSettings::default(),
            rendered_html: "<!DOCTYPE html>".to_string(),
        };

        let json = record.to_json().unwrap();
        assert!(json.contains("\"designSettings\""));
        assert!(json.contains("\"renderedHtml\""));

        let back = PageRecord::from_json(&json).unwrap();
        assert_eq!(back, record);
    }

    #[test]
    fn test_record_tolerates_missing_optional_fields() {
        let record =
            PageRecord::from_json(r#"{ "blocks": [] }"#).unwrap();
        assert!(record.blocks.is_empty());
        assert!(record.rendered_html.is_empty());
        assert_eq!(record.design_settings, DesignSettings::default());
    }

    #[test]
    fn test_from_json_rewrites_stale_order() {
        let json = r#"{
            "blocks": [
                { "id": "p-1", "content": { "type": "richtext", "html": "" }, "order": 5 },
                { "id": "p-2", "content": { "type": "richtext", "html": "" }, "order": 0 }
            ]
        }"#;

        let record = PageRecord::from_json(json).unwrap();

        // Array position is the truth; ids keep their stored sequence
        let orders: Vec<_> = record.blocks.iter().map(|b| b.order).collect();
        assert_eq!(orders, vec![0, 1]);
        assert_eq!(record.blocks[0].id, "p-1");
        assert_eq!(record.blocks[1].id, "p-2");
    }
}
