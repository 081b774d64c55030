use relm4::prelude::*;
use slot_demo::config;
use slot_demo::gui::app::AppModel;
use slot_demo::sys::runtime;

fn main() {
    env_logger::init();

    let settings = config::load_or_default().settings();

    let (tx, rx) = async_channel::bounded(32);

    // Start Background Services
    runtime::start_background_services(tx);

    let app = RelmApp::new("org.example.SlotDemo");

    app.run::<AppModel>((settings, rx));
}
