use crate::catalog::{self, CatalogEntry};
use gtk4 as gtk;
use reel::{ItemId, ItemName, Orientation, OverlayGradient, ReelParams, SlotItem};
use std::time::Duration;

/// Shown when a spin result carries neither a name nor an id.
pub const RESULT_PLACEHOLDER: &str = "\u{2014}";

pub const VERTICAL_HEIGHT: i32 = 320;
pub const VERTICAL_MIN_WIDTH: i32 = 120;
pub const HORIZONTAL_HEIGHT: i32 = 160;
pub const HORIZONTAL_MIN_WIDTH: i32 = 320;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Settings {
    pub orientation: Orientation,
    pub duration_ms: u32,
    pub twist_duration_ms: u32,
    pub item_gap: u32,
    pub overlay_gradient: OverlayGradient,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            orientation: Orientation::Vertical,
            duration_ms: 2500,
            twist_duration_ms: 400,
            item_gap: 20,
            overlay_gradient: OverlayGradient::TopBottom,
        }
    }
}

/// A button press: one setting and the value it should take.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Selection {
    Orientation(Orientation),
    Duration(u32),
    TwistDuration(u32),
    ItemGap(u32),
    OverlayGradient(OverlayGradient),
}

pub struct SettingGroup {
    pub title: &'static str,
    pub options: Vec<(Selection, &'static str)>,
}

impl SettingGroup {
    fn from_catalog<T: Copy>(
        title: &'static str,
        catalog: &[CatalogEntry<T>],
        select: fn(T) -> Selection,
    ) -> Self {
        Self {
            title,
            options: catalog
                .iter()
                .map(|entry| (select(entry.value), entry.label))
                .collect(),
        }
    }
}

/// Button groups in display order.
pub fn setting_groups() -> Vec<SettingGroup> {
    vec![
        SettingGroup::from_catalog("Orientation", catalog::ORIENTATIONS, Selection::Orientation),
        SettingGroup::from_catalog("Spin duration", catalog::DURATIONS, Selection::Duration),
        SettingGroup::from_catalog(
            "Twist duration",
            catalog::TWIST_DURATIONS,
            Selection::TwistDuration,
        ),
        SettingGroup::from_catalog("Item gap", catalog::ITEM_GAPS, Selection::ItemGap),
        SettingGroup::from_catalog(
            "Overlay gradient",
            catalog::OVERLAYS,
            Selection::OverlayGradient,
        ),
    ]
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WidthPolicy {
    Auto,
    Fill,
}

/// How the box around the reel is sized.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WrapperSize {
    pub height: i32,
    pub min_width: i32,
    pub width: WidthPolicy,
}

impl WrapperSize {
    pub fn hexpand(&self) -> bool {
        self.width == WidthPolicy::Fill
    }

    /// Height is fixed: the box never takes spare vertical space, even when
    /// the reel inside it asks to expand.
    pub fn vexpand(&self) -> bool {
        false
    }

    pub fn halign(&self) -> gtk::Align {
        match self.width {
            WidthPolicy::Fill => gtk::Align::Fill,
            WidthPolicy::Auto => gtk::Align::Start,
        }
    }

    pub fn valign(&self) -> gtk::Align {
        gtk::Align::Start
    }
}

/// Label for a finished spin: name, then id, then the placeholder.
pub fn result_label(item: &SlotItem) -> String {
    item.name
        .as_ref()
        .map(ItemName::to_string)
        .or_else(|| item.id.as_ref().map(ItemId::to_string))
        .unwrap_or_else(|| RESULT_PLACEHOLDER.to_string())
}

#[derive(Debug, Clone, Default)]
pub struct Screen {
    settings: Settings,
    last_result: Option<String>,
}

impl Screen {
    pub fn new(settings: Settings) -> Self {
        Self {
            settings,
            last_result: None,
        }
    }

    pub fn settings(&self) -> Settings {
        self.settings
    }

    /// Replaces every setting at once; the last result is kept.
    pub fn reset(&mut self, settings: Settings) {
        self.settings = settings;
    }

    pub fn select(&mut self, selection: Selection) {
        let s = &mut self.settings;
        match selection {
            Selection::Orientation(v) => s.orientation = v,
            Selection::Duration(v) => s.duration_ms = v,
            Selection::TwistDuration(v) => s.twist_duration_ms = v,
            Selection::ItemGap(v) => s.item_gap = v,
            Selection::OverlayGradient(v) => s.overlay_gradient = v,
        }
    }

    pub fn is_selected(&self, selection: &Selection) -> bool {
        let s = &self.settings;
        match *selection {
            Selection::Orientation(v) => s.orientation == v,
            Selection::Duration(v) => s.duration_ms == v,
            Selection::TwistDuration(v) => s.twist_duration_ms == v,
            Selection::ItemGap(v) => s.item_gap == v,
            Selection::OverlayGradient(v) => s.overlay_gradient == v,
        }
    }

    pub fn spin_started(&mut self) {
        self.last_result = None;
    }

    pub fn spin_ended(&mut self, item: &SlotItem) {
        self.last_result = Some(result_label(item));
    }

    pub fn last_result(&self) -> Option<&str> {
        self.last_result.as_deref()
    }

    pub fn result_line(&self) -> Option<String> {
        self.last_result
            .as_ref()
            .map(|label| format!("Last result: {label}"))
    }

    pub fn wrapper_size(&self) -> WrapperSize {
        match self.settings.orientation {
            Orientation::Vertical => WrapperSize {
                height: VERTICAL_HEIGHT,
                min_width: VERTICAL_MIN_WIDTH,
                width: WidthPolicy::Auto,
            },
            Orientation::Horizontal => WrapperSize {
                height: HORIZONTAL_HEIGHT,
                min_width: HORIZONTAL_MIN_WIDTH,
                width: WidthPolicy::Fill,
            },
        }
    }

    pub fn reel_params(&self, items: &[SlotItem]) -> ReelParams {
        let s = &self.settings;
        ReelParams {
            items: items.to_vec(),
            orientation: s.orientation,
            duration: Duration::from_millis(s.duration_ms.into()),
            twist_duration: Duration::from_millis(s.twist_duration_ms.into()),
            item_gap: s.item_gap.into(),
            overlay_gradient: s.overlay_gradient,
        }
    }
}
