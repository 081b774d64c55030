use gtk::gdk;
use gtk4 as gtk;

pub fn load_css() {
    let provider = gtk::CssProvider::new();
    let css_data = "
.app {
    padding: 24px;
}
.subtitle {
    opacity: 0.7;
}
.config {
    min-width: 260px;
}
.button-group button.active {
    background: alpha(@accent_bg_color, 0.85);
    color: @accent_fg_color;
}
.slot-wrapper {
    border-radius: 12px;
}
.spin-btn {
    padding: 8px 32px;
    font-weight: bold;
}
";
    provider.load_from_data(css_data);

    if let Some(display) = gdk::Display::default() {
        gtk::style_context_add_provider_for_display(
            &display,
            &provider,
            gtk::STYLE_PROVIDER_PRIORITY_APPLICATION,
        );
    }
}
