use crate::config;
use crate::data;
use crate::events::AppEvent;
use crate::gui::screen::{Screen, Selection, SettingGroup, Settings};
use crate::gui::{screen, theme};
use gtk::prelude::*;
use gtk4 as gtk;
use reel::{ReelHandle, ReelInput, ReelOutput, SlotItem, SlotMachine};
use relm4::prelude::*;

pub struct AppModel {
    pub screen: Screen,
    pub items: Vec<SlotItem>,
    pub reel: Controller<SlotMachine>,
    pub handle: ReelHandle,
    pub buttons: Vec<(gtk::Button, Selection)>,
}

#[derive(Debug)]
pub enum AppMsg {
    Select(Selection),
    Spin,
    SpinStarted,
    SpinEnded(SlotItem),
    ConfigReload,
}

impl From<AppEvent> for AppMsg {
    fn from(event: AppEvent) -> Self {
        match event {
            AppEvent::ConfigReload => AppMsg::ConfigReload,
        }
    }
}

impl From<ReelOutput> for AppMsg {
    fn from(output: ReelOutput) -> Self {
        match output {
            ReelOutput::SpinStarted => AppMsg::SpinStarted,
            ReelOutput::SpinEnded(item) => AppMsg::SpinEnded(item),
        }
    }
}

impl AppModel {
    fn result_markup(&self) -> String {
        self.screen
            .last_result()
            .map(|label| {
                format!(
                    "Last result: <b>{}</b>",
                    glib::markup_escape_text(label)
                )
            })
            .unwrap_or_default()
    }

    fn sync_buttons(&self) {
        for (button, selection) in &self.buttons {
            if self.screen.is_selected(selection) {
                button.add_css_class("active");
            } else {
                button.remove_css_class("active");
            }
        }
    }

    /// Pushes the current settings to the reel and refreshes the buttons.
    fn apply_settings(&self) {
        self.reel
            .emit(ReelInput::Configure(self.screen.reel_params(&self.items)));
        self.sync_buttons();
    }
}

fn build_group(
    group: &SettingGroup,
    sender: &ComponentSender<AppModel>,
) -> (gtk::Box, Vec<(gtk::Button, Selection)>) {
    let container = gtk::Box::new(gtk::Orientation::Vertical, 6);
    container.add_css_class("config-group");

    let title = gtk::Label::new(Some(group.title));
    title.set_xalign(0.0);
    container.append(&title);

    let row = gtk::Box::new(gtk::Orientation::Horizontal, 0);
    row.add_css_class("button-group");
    row.add_css_class("linked");

    let buttons = group
        .options
        .iter()
        .map(|&(selection, label)| {
            let button = gtk::Button::with_label(label);
            let sender = sender.clone();
            button.connect_clicked(move |_| sender.input(AppMsg::Select(selection)));
            row.append(&button);
            (button, selection)
        })
        .collect();

    container.append(&row);
    (container, buttons)
}

#[relm4::component(pub)]
impl SimpleComponent for AppModel {
    type Init = (Settings, async_channel::Receiver<AppEvent>);
    type Input = AppMsg;
    type Output = ();

    view! {
        #[root]
        gtk::ApplicationWindow {
            set_title: Some("Slot Machine Example"),
            set_default_size: (960, 600),

            gtk::Box {
                set_orientation: gtk::Orientation::Vertical,
                set_spacing: 24,
                add_css_class: "app",

                gtk::Box {
                    set_orientation: gtk::Orientation::Vertical,
                    set_spacing: 4,
                    add_css_class: "header",

                    gtk::Label {
                        set_label: "Slot Machine Example",
                        set_xalign: 0.0,
                        add_css_class: "title-1",
                    },
                    gtk::Label {
                        set_label: "Configurable reel with basic settings and example view",
                        set_xalign: 0.0,
                        add_css_class: "subtitle",
                    },
                },

                gtk::Box {
                    set_orientation: gtk::Orientation::Horizontal,
                    set_spacing: 32,
                    add_css_class: "layout",

                    #[name = "config_panel"]
                    gtk::Box {
                        set_orientation: gtk::Orientation::Vertical,
                        set_spacing: 16,
                        add_css_class: "config",

                        gtk::Label {
                            set_label: "Config",
                            set_xalign: 0.0,
                            add_css_class: "title-3",
                        },
                    },

                    gtk::Box {
                        set_orientation: gtk::Orientation::Vertical,
                        set_spacing: 16,
                        set_hexpand: true,
                        add_css_class: "demo",

                        gtk::Box {
                            add_css_class: "slot-wrapper",
                            #[watch]
                            set_size_request: (
                                model.screen.wrapper_size().min_width,
                                model.screen.wrapper_size().height,
                            ),
                            #[watch]
                            set_hexpand: model.screen.wrapper_size().hexpand(),
                            #[watch]
                            set_vexpand: model.screen.wrapper_size().vexpand(),
                            #[watch]
                            set_halign: model.screen.wrapper_size().halign(),
                            #[watch]
                            set_valign: model.screen.wrapper_size().valign(),

                            #[local_ref]
                            reel_widget -> gtk::Box {},
                        },

                        gtk::Box {
                            add_css_class: "actions",

                            gtk::Button {
                                set_label: "Spin",
                                add_css_class: "spin-btn",
                                add_css_class: "suggested-action",
                                connect_clicked => AppMsg::Spin,
                            },
                        },

                        gtk::Label {
                            set_xalign: 0.0,
                            add_css_class: "result",
                            #[watch]
                            set_visible: model.screen.last_result().is_some(),
                            #[watch]
                            set_markup: &model.result_markup(),
                        },
                    },
                },
            },
        }
    }

    fn init(
        init: Self::Init,
        root: Self::Root,
        sender: ComponentSender<Self>,
    ) -> ComponentParts<Self> {
        let (settings, rx) = init;

        theme::load_css();

        let screen = Screen::new(settings);
        let items = data::sample_items();

        let reel = SlotMachine::builder()
            .launch(screen.reel_params(&items))
            .forward(sender.input_sender(), AppMsg::from);

        let mut handle = ReelHandle::default();
        handle.attach(reel.sender().clone());

        let model = AppModel {
            screen,
            items,
            reel,
            handle,
            buttons: Vec::new(),
        };

        let reel_widget = model.reel.widget();
        let widgets = view_output!();

        let mut model = model;
        for group in screen::setting_groups() {
            let (container, buttons) = build_group(&group, &sender);
            widgets.config_panel.append(&container);
            model.buttons.extend(buttons);
        }
        model.sync_buttons();

        let sender_clone = sender.clone();
        relm4::spawn(async move {
            while let Ok(event) = rx.recv().await {
                sender_clone.input(AppMsg::from(event));
            }
        });

        ComponentParts { model, widgets }
    }

    fn update(&mut self, msg: Self::Input, _sender: ComponentSender<Self>) {
        match msg {
            AppMsg::Select(selection) => {
                self.screen.select(selection);
                self.apply_settings();
            }
            AppMsg::Spin => {
                self.handle.spin();
            }
            AppMsg::SpinStarted => self.screen.spin_started(),
            AppMsg::SpinEnded(item) => {
                self.screen.spin_ended(&item);
                log::info!("Last result: {}", screen::result_label(&item));
            }
            AppMsg::ConfigReload => match config::load_config() {
                Ok(new_config) => {
                    self.screen.reset(new_config.settings());
                    self.apply_settings();
                    log::info!("Configuration reloaded");
                }
                Err(e) => log::error!("Failed to reload config: {}", e),
            },
        }
    }
}
