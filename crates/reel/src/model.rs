use crate::image;
use crate::item::SlotItem;
use crate::motion::SpinPlan;
use crate::params::ReelParams;
use gdk_pixbuf::Pixbuf;
use std::time::Instant;

pub const ICON_SIZE: i32 = 160;

#[derive(Debug, Clone)]
struct ActiveSpin {
    plan: SpinPlan,
    started: Instant,
}

/// Position and spin progress of a reel, independent of any widget.
#[derive(Debug, Clone)]
pub struct ReelState {
    params: ReelParams,
    position: f64,
    spin: Option<ActiveSpin>,
}

impl ReelState {
    pub fn new(params: ReelParams) -> Self {
        Self {
            params,
            position: 0.0,
            spin: None,
        }
    }

    pub fn params(&self) -> &ReelParams {
        &self.params
    }

    pub fn position(&self) -> f64 {
        self.position
    }

    pub fn is_spinning(&self) -> bool {
        self.spin.is_some()
    }

    /// Applies new parameters. A different item list invalidates the
    /// current position, so any spin in flight is dropped. Returns whether
    /// the items changed.
    pub fn configure(&mut self, params: ReelParams) -> bool {
        let items_changed = params.items != self.params.items;
        if items_changed {
            if self.spin.take().is_some() {
                log::warn!("Reel items replaced mid-spin; spin abandoned");
            }
            self.position = 0.0;
        }
        self.params = params;
        items_changed
    }

    /// Starts a spin that will land on `target`. Refused while another spin
    /// is running or when there is nothing to land on.
    pub fn begin_spin(&mut self, target: usize, now: Instant) -> bool {
        let count = self.params.items.len();
        if self.spin.is_some() || target >= count {
            return false;
        }

        let plan = SpinPlan::new(
            self.position,
            target,
            count,
            self.params.duration,
            self.params.twist_duration,
        );
        self.spin = Some(ActiveSpin { plan, started: now });
        true
    }

    /// Moves the reel to where it should be at `now`. Yields the winning
    /// item exactly once, on the tick that completes the spin.
    pub fn advance(&mut self, now: Instant) -> Option<SlotItem> {
        let spin = self.spin.as_ref()?;
        let elapsed = now.saturating_duration_since(spin.started);
        self.position = spin.plan.position_at(elapsed);

        if !spin.plan.is_finished(elapsed) {
            return None;
        }

        self.spin = None;
        self.centered_index()
            .and_then(|i| self.params.items.get(i))
            .cloned()
    }

    pub fn centered_index(&self) -> Option<usize> {
        let count = self.params.items.len();
        (count > 0).then(|| (self.position.round() as i64).rem_euclid(count as i64) as usize)
    }

    /// Items within `half_span` slots of the center line, as
    /// `(item index, offset from center in slots)`.
    pub fn visible_slots(&self, half_span: usize) -> Vec<(usize, f64)> {
        let count = self.params.items.len() as i64;
        if count == 0 {
            return Vec::new();
        }

        let anchor = self.position.round() as i64;
        let span = half_span as i64;
        (-span..=span)
            .map(|k| {
                let slot = anchor + k;
                (slot.rem_euclid(count) as usize, slot as f64 - self.position)
            })
            .collect()
    }
}

/// Reel state plus the rasterized symbols it draws.
pub struct Scene {
    pub reel: ReelState,
    pub icons: Vec<Option<Pixbuf>>,
}

impl Scene {
    pub fn new(params: ReelParams) -> Self {
        let icons = Self::load_icons(&params.items);
        Self {
            reel: ReelState::new(params),
            icons,
        }
    }

    pub fn configure(&mut self, params: ReelParams) {
        let items = params.items.clone();
        if self.reel.configure(params) {
            self.icons = Self::load_icons(&items);
        }
    }

    fn load_icons(items: &[SlotItem]) -> Vec<Option<Pixbuf>> {
        items
            .iter()
            .map(|item| match image::load_pixbuf(&item.image, ICON_SIZE) {
                Ok(pixbuf) => Some(pixbuf),
                Err(e) => {
                    log::warn!("Failed to load image for '{}': {}", item.caption(), e);
                    None
                }
            })
            .collect()
    }
}
