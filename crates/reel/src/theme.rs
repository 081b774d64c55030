use gtk::prelude::*;
use gtk4 as gtk;
use palette::Srgba;

pub struct ThemeColors {
    pub background: Srgba<f64>,
    pub symbol: Srgba<f64>,
    pub marker: Srgba<f64>,
    pub text: Srgba<f64>,
}

impl ThemeColors {
    pub fn from_context(context: &gtk::StyleContext) -> Self {
        Self {
            background: Self::lookup_color(
                context,
                "theme_base_color",
                Srgba::new(0.1, 0.1, 0.12, 1.0),
                Some(1.0),
            ),
            symbol: Self::lookup_color(
                context,
                "theme_selected_bg_color",
                Srgba::new(0.4, 0.4, 0.8, 0.9),
                Some(0.9),
            ),
            marker: Self::lookup_color(
                context,
                "accent_color",
                Srgba::new(0.96, 0.62, 0.04, 0.8),
                Some(0.8),
            ),
            text: Srgba::new(1.0, 1.0, 1.0, 1.0),
        }
    }

    #[allow(deprecated)]
    fn lookup_color(
        context: &gtk::StyleContext,
        name: &str,
        fallback: Srgba<f64>,
        alpha_override: Option<f64>,
    ) -> Srgba<f64> {
        context
            .lookup_color(name)
            .map(|c| {
                let (r, g, b, a) = (
                    c.red() as f64,
                    c.green() as f64,
                    c.blue() as f64,
                    c.alpha() as f64,
                );
                Srgba::new(r, g, b, alpha_override.unwrap_or(a))
            })
            .unwrap_or(fallback)
    }
}
