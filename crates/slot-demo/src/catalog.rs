//! Selectable values for each reel setting, in display order.

use reel::{Orientation, OverlayGradient};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CatalogEntry<T> {
    pub value: T,
    pub label: &'static str,
}

impl<T> CatalogEntry<T> {
    pub const fn new(value: T, label: &'static str) -> Self {
        Self { value, label }
    }
}

pub const ORIENTATIONS: &[CatalogEntry<Orientation>] = &[
    CatalogEntry::new(Orientation::Vertical, "Vertical"),
    CatalogEntry::new(Orientation::Horizontal, "Horizontal"),
];

/// Spin durations in milliseconds.
pub const DURATIONS: &[CatalogEntry<u32>] = &[
    CatalogEntry::new(1500, "1.5s"),
    CatalogEntry::new(2500, "2.5s"),
    CatalogEntry::new(3500, "3.5s"),
];

/// Twist (settle) durations in milliseconds.
pub const TWIST_DURATIONS: &[CatalogEntry<u32>] = &[
    CatalogEntry::new(200, "0.2s"),
    CatalogEntry::new(400, "0.4s"),
    CatalogEntry::new(600, "0.6s"),
];

/// Gaps between symbols in pixels.
pub const ITEM_GAPS: &[CatalogEntry<u32>] = &[
    CatalogEntry::new(8, "8px"),
    CatalogEntry::new(20, "20px"),
    CatalogEntry::new(32, "32px"),
];

pub const OVERLAYS: &[CatalogEntry<OverlayGradient>] = &[
    CatalogEntry::new(OverlayGradient::TopBottom, "Top/Bottom"),
    CatalogEntry::new(OverlayGradient::LeftRight, "Left/Right"),
    CatalogEntry::new(OverlayGradient::None, "None"),
];

pub fn contains<T: PartialEq>(catalog: &[CatalogEntry<T>], value: &T) -> bool {
    catalog.iter().any(|entry| entry.value == *value)
}
