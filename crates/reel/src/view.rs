use crate::model::Scene;
use crate::params::{Orientation, OverlayGradient};
use crate::theme::ThemeColors;
use cairo::{Context, LinearGradient};
use gdk_pixbuf::Pixbuf;
use gdk4::prelude::*;
use palette::Srgba;
use std::f64::consts::PI;

pub const MAX_SYMBOL_SIZE: f64 = 96.0;
pub const MIN_SYMBOL_SIZE: f64 = 24.0;
/// Share of the reel's length covered by each edge fade.
pub const FADE_FRACTION: f64 = 0.3;

/// Lays the reel out along its main axis. `main` runs in the spin direction,
/// `cross` across it.
#[derive(Debug, Clone, Copy)]
struct Layout {
    orientation: Orientation,
    main: f64,
    cross: f64,
    symbol: f64,
    pitch: f64,
}

impl Layout {
    fn new(orientation: Orientation, width: f64, height: f64, gap: f64) -> Self {
        let (main, cross) = match orientation {
            Orientation::Vertical => (height, width),
            Orientation::Horizontal => (width, height),
        };
        let symbol = (cross * 0.8).clamp(MIN_SYMBOL_SIZE, MAX_SYMBOL_SIZE);
        Self {
            orientation,
            main,
            cross,
            symbol,
            pitch: symbol + gap,
        }
    }

    /// Slots needed on each side of the center to cover the reel.
    fn half_span(&self) -> usize {
        (self.main / 2.0 / self.pitch).ceil() as usize + 1
    }

    /// Center point of a symbol `offset` slots away from the center line.
    fn point(&self, offset: f64) -> (f64, f64) {
        let along = self.main / 2.0 + offset * self.pitch;
        match self.orientation {
            Orientation::Vertical => (self.cross / 2.0, along),
            Orientation::Horizontal => (along, self.cross / 2.0),
        }
    }
}

pub fn draw(
    cr: &Context,
    scene: &Scene,
    width: f64,
    height: f64,
    colors: &ThemeColors,
) -> Result<(), cairo::Error> {
    let params = scene.reel.params();
    let layout = Layout::new(params.orientation, width, height, params.item_gap);

    set_color(cr, colors.background);
    cr.paint()?;

    for (index, offset) in scene.reel.visible_slots(layout.half_span()) {
        let (x, y) = layout.point(offset);
        match scene.icons.get(index).and_then(Option::as_ref) {
            Some(pixbuf) => draw_icon(cr, pixbuf, x, y, layout.symbol)?,
            None => {
                let caption = params.items.get(index).map(|i| i.caption()).unwrap_or("?");
                draw_placeholder(cr, caption, x, y, layout.symbol, colors)?;
            }
        }
    }

    draw_markers(cr, &layout, colors)?;
    draw_overlay(cr, params.overlay_gradient, width, height, colors.background)
}

fn set_color(cr: &Context, color: Srgba<f64>) {
    let (r, g, b, a) = color.into_components();
    cr.set_source_rgba(r, g, b, a);
}

fn draw_icon(cr: &Context, pixbuf: &Pixbuf, x: f64, y: f64, size: f64) -> Result<(), cairo::Error> {
    let scale = size / pixbuf.width().max(1) as f64;

    cr.save()?;
    cr.translate(x - size / 2.0, y - size / 2.0);
    cr.scale(scale, scale);
    cr.set_source_pixbuf(pixbuf, 0.0, 0.0);
    cr.paint()?;
    cr.restore()
}

fn draw_placeholder(
    cr: &Context,
    caption: &str,
    x: f64,
    y: f64,
    size: f64,
    colors: &ThemeColors,
) -> Result<(), cairo::Error> {
    set_color(cr, colors.symbol);
    cr.arc(x, y, size / 2.0, 0.0, 2.0 * PI);
    cr.fill()?;

    set_color(cr, colors.text);
    cr.select_font_face("Sans", cairo::FontSlant::Normal, cairo::FontWeight::Bold);
    cr.set_font_size(size * 0.2);
    if let Ok(ext) = cr.text_extents(caption) {
        cr.move_to(x - ext.width() / 2.0, y + ext.height() / 2.0);
        cr.show_text(caption)?;
    }
    Ok(())
}

/// Two thin lines bracketing the winning slot.
fn draw_markers(cr: &Context, layout: &Layout, colors: &ThemeColors) -> Result<(), cairo::Error> {
    set_color(cr, colors.marker);
    cr.set_line_width(2.0);

    let half = layout.pitch / 2.0;
    for edge in [layout.main / 2.0 - half, layout.main / 2.0 + half] {
        match layout.orientation {
            Orientation::Vertical => {
                cr.move_to(0.0, edge);
                cr.line_to(layout.cross, edge);
            }
            Orientation::Horizontal => {
                cr.move_to(edge, 0.0);
                cr.line_to(edge, layout.cross);
            }
        }
    }
    cr.stroke()
}

fn draw_overlay(
    cr: &Context,
    overlay: OverlayGradient,
    width: f64,
    height: f64,
    base: Srgba<f64>,
) -> Result<(), cairo::Error> {
    let (r, g, b, _) = base.into_components();

    let bands = match overlay {
        OverlayGradient::None => return Ok(()),
        OverlayGradient::TopBottom => {
            let band = height * FADE_FRACTION;
            [
                ((0.0, 0.0, 0.0, band), (0.0, 0.0, width, band)),
                ((0.0, height, 0.0, height - band), (0.0, height - band, width, band)),
            ]
        }
        OverlayGradient::LeftRight => {
            let band = width * FADE_FRACTION;
            [
                ((0.0, 0.0, band, 0.0), (0.0, 0.0, band, height)),
                ((width, 0.0, width - band, 0.0), (width - band, 0.0, band, height)),
            ]
        }
    };

    for ((x0, y0, x1, y1), (rx, ry, rw, rh)) in bands {
        let gradient = LinearGradient::new(x0, y0, x1, y1);
        gradient.add_color_stop_rgba(0.0, r, g, b, 1.0);
        gradient.add_color_stop_rgba(1.0, r, g, b, 0.0);
        cr.set_source(&gradient)?;
        cr.rectangle(rx, ry, rw, rh);
        cr.fill()?;
    }
    Ok(())
}
