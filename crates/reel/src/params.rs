use crate::item::SlotItem;
use serde::Serialize;
use serde_with::DeserializeFromStr;
use std::time::Duration;
use strum::{Display as StrumDisplay, EnumIter, EnumString};

#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Default,
    Serialize,
    DeserializeFromStr,
    EnumString,
    EnumIter,
    StrumDisplay,
)]
#[strum(ascii_case_insensitive)]
#[serde(rename_all = "lowercase")]
pub enum Orientation {
    #[default]
    #[strum(to_string = "vertical", serialize = "v")]
    Vertical,
    #[strum(to_string = "horizontal", serialize = "h")]
    Horizontal,
}

/// Fade drawn over the edges of the reel.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Default,
    Serialize,
    DeserializeFromStr,
    EnumString,
    EnumIter,
    StrumDisplay,
)]
#[strum(ascii_case_insensitive)]
#[serde(rename_all = "kebab-case")]
pub enum OverlayGradient {
    #[default]
    #[strum(to_string = "top-bottom", serialize = "topbottom")]
    TopBottom,
    #[strum(to_string = "left-right", serialize = "leftright")]
    LeftRight,
    #[strum(to_string = "none")]
    None,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ReelParams {
    pub items: Vec<SlotItem>,
    pub orientation: Orientation,
    pub duration: Duration,
    pub twist_duration: Duration,
    /// Spacing between symbols, in pixels.
    pub item_gap: f64,
    pub overlay_gradient: OverlayGradient,
}

impl Default for ReelParams {
    fn default() -> Self {
        Self {
            items: Vec::new(),
            orientation: Orientation::default(),
            duration: Duration::from_millis(2500),
            twist_duration: Duration::from_millis(400),
            item_gap: 20.0,
            overlay_gradient: OverlayGradient::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_orientation_deserialization() {
        let cases = vec![
            ("\"vertical\"", Orientation::Vertical),
            ("\"Vertical\"", Orientation::Vertical),
            ("\"v\"", Orientation::Vertical),
            ("\"HORIZONTAL\"", Orientation::Horizontal),
            ("\"h\"", Orientation::Horizontal),
        ];

        for (json, expected) in cases {
            let deserialized: Orientation = serde_json::from_str(json).unwrap();
            assert_eq!(deserialized, expected);
        }
    }

    #[test]
    fn test_overlay_gradient_names() {
        let parsed: OverlayGradient = serde_json::from_str("\"left-right\"").unwrap();
        assert_eq!(parsed, OverlayGradient::LeftRight);
        assert_eq!(OverlayGradient::TopBottom.to_string(), "top-bottom");
        assert_eq!(
            serde_json::to_string(&OverlayGradient::None).unwrap(),
            "\"none\""
        );
        assert!(serde_json::from_str::<OverlayGradient>("\"diagonal\"").is_err());
    }
}
