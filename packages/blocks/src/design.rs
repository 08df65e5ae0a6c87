use serde::{Deserialize, Serialize};

/// Page-level theme applied to every block unless overridden locally.
///
/// Lives outside the undo history: tweaking the theme never competes with
/// structural edits for undo slots.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct DesignSettings {
    /// Brand color as a hex string.
    pub primary_color: String,
    pub font_family: String,
    /// Corner radius in pixels for buttons and cards.
    pub border_radius: u32,
    /// Gates the entrance-animation stylesheet for the whole page.
    pub animations_enabled: bool,
}

impl Default for DesignSettings {
    fn default() -> Self {
        Self {
            primary_color: "#0f766e".to_string(),
            font_family: "'Inter', system-ui, sans-serif".to_string(),
            border_radius: 12,
            animations_enabled: true,
        }
    }
}
