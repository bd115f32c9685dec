//! Legend configuration and the legend-title annotation.
//!
//! The engine has no legend-title option, so a requested title is carried as a
//! post-render annotation: the host draws it after the engine has laid out its
//! legend, `LEGEND_TITLE_OFFSET_PX` above the first legend entry.

use serde::{Deserialize, Serialize};

/// Vertical distance between the legend title baseline and the first entry.
pub const LEGEND_TITLE_OFFSET_PX: f64 = 20.0;

/// Font size of the legend title, in pixels.
pub const LEGEND_TITLE_FONT_PX: u32 = 12;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LegendPosition {
    #[default]
    Bottom,
    Right,
    Inset,
}

/// Legend settings after reshaping.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct LegendSpec {
    /// `None` leaves visibility to the engine.
    pub show: Option<bool>,
    pub position: Option<LegendPosition>,
    pub title: Option<LegendTitle>,
}

impl LegendSpec {
    /// Legend for single-series charts: nothing to tell apart, so it is hidden.
    pub fn hidden() -> Self {
        Self {
            show: Some(false),
            ..Default::default()
        }
    }

    /// Legend for multi-series charts. A title is only kept when the legend is shown.
    pub fn multi(show: bool, position: Option<LegendPosition>, title: Option<String>) -> Self {
        Self {
            show: Some(show),
            position,
            title: title.filter(|_| show).map(LegendTitle::new),
        }
    }
}

/// Engine-facing legend section.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub struct LegendConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub show: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub position: Option<LegendPosition>,
}

impl From<&LegendSpec> for LegendConfig {
    fn from(spec: &LegendSpec) -> Self {
        Self {
            show: spec.show,
            position: spec.position,
        }
    }
}

/// Text drawn above the first legend entry once the engine has rendered.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LegendTitle {
    pub text: String,
    pub offset_px: f64,
    pub font_size_px: u32,
}

impl LegendTitle {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            offset_px: LEGEND_TITLE_OFFSET_PX,
            font_size_px: LEGEND_TITLE_FONT_PX,
        }
    }

    /// Baseline of the title, given the baseline of the first legend entry's text.
    pub fn anchor_y(&self, first_entry_y: f64) -> f64 {
        first_entry_y - self.offset_px
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_title_sits_above_first_entry() {
        let title = LegendTitle::new("Species");
        assert_eq!(title.anchor_y(120.0), 100.0);
        assert_eq!(title.font_size_px, 12);
    }

    #[test]
    fn test_hidden_legend_has_no_title() {
        let spec = LegendSpec::multi(false, None, Some("Groups".into()));
        assert_eq!(spec.show, Some(false));
        assert!(spec.title.is_none());
    }

    #[test]
    fn test_legend_config_json() {
        let spec = LegendSpec::multi(true, Some(LegendPosition::Right), None);
        let json = serde_json::to_string(&LegendConfig::from(&spec)).unwrap();
        assert_eq!(json, r#"{"show":true,"position":"right"}"#);
    }

    #[test]
    fn test_position_from_json() {
        let pos: LegendPosition = serde_json::from_str(r#""inset""#).unwrap();
        assert_eq!(pos, LegendPosition::Inset);
        assert!(serde_json::from_str::<LegendPosition>(r#""left""#).is_err());
    }
}
