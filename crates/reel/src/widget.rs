use crate::item::SlotItem;
use crate::model::Scene;
use crate::params::ReelParams;
use crate::theme::ThemeColors;
use crate::view;
use gtk::prelude::*;
use gtk4 as gtk;
use rand::Rng;
use relm4::prelude::*;
use std::cell::RefCell;
use std::rc::Rc;
use std::time::Instant;

pub struct SlotMachine {
    scene: Rc<RefCell<Scene>>,
    drawing_area: gtk::DrawingArea,
}

#[derive(Debug)]
pub enum ReelInput {
    Spin,
    Configure(ReelParams),
    Tick,
}

#[derive(Debug, Clone)]
pub enum ReelOutput {
    SpinStarted,
    SpinEnded(SlotItem),
}

#[relm4::component(pub)]
impl SimpleComponent for SlotMachine {
    type Init = ReelParams;
    type Input = ReelInput;
    type Output = ReelOutput;

    view! {
        #[root]
        gtk::Box {
            set_hexpand: true,
            set_vexpand: true,
            set_overflow: gtk::Overflow::Hidden,
            add_css_class: "slot-machine",

            #[name = "drawing_area"]
            gtk::DrawingArea {
                set_hexpand: true,
                set_vexpand: true,
                add_css_class: "slot-machine-canvas",
            }
        }
    }

    fn init(
        params: Self::Init,
        root: Self::Root,
        sender: ComponentSender<Self>,
    ) -> ComponentParts<Self> {
        let scene = Rc::new(RefCell::new(Scene::new(params)));

        let model = SlotMachine {
            scene: scene.clone(),
            drawing_area: gtk::DrawingArea::default(),
        };

        let widgets = view_output!();

        let mut model = model;
        model.drawing_area = widgets.drawing_area.clone();

        let scene_draw = scene.clone();
        widgets
            .drawing_area
            .set_draw_func(move |drawing_area, cr, width, height| {
                #[allow(deprecated)]
                let style_context = drawing_area.style_context();
                let colors = ThemeColors::from_context(&style_context);
                if let Err(e) = view::draw(
                    cr,
                    &scene_draw.borrow(),
                    width as f64,
                    height as f64,
                    &colors,
                ) {
                    log::error!("Drawing error: {}", e);
                }
            });

        // Frame clock drives the animation; idle reels send nothing.
        let scene_tick = scene;
        widgets.drawing_area.add_tick_callback(move |_, _| {
            if scene_tick.borrow().reel.is_spinning() {
                sender.input(ReelInput::Tick);
            }
            glib::ControlFlow::Continue
        });

        ComponentParts { model, widgets }
    }

    fn update(&mut self, msg: Self::Input, sender: ComponentSender<Self>) {
        match msg {
            ReelInput::Spin => {
                let started = {
                    let mut scene = self.scene.borrow_mut();
                    let count = scene.reel.params().items.len();
                    if count == 0 {
                        log::warn!("Spin requested on a reel with no items");
                        return;
                    }
                    let target = rand::rng().random_range(0..count);
                    scene.reel.begin_spin(target, Instant::now())
                };

                if started {
                    let _ = sender.output(ReelOutput::SpinStarted);
                } else {
                    log::debug!("Spin ignored, reel already spinning");
                }
            }
            ReelInput::Configure(params) => {
                self.scene.borrow_mut().configure(params);
                self.drawing_area.queue_draw();
            }
            ReelInput::Tick => {
                let outcome = self.scene.borrow_mut().reel.advance(Instant::now());
                self.drawing_area.queue_draw();

                if let Some(item) = outcome {
                    log::debug!("Reel stopped on '{}'", item.caption());
                    let _ = sender.output(ReelOutput::SpinEnded(item));
                }
            }
        }
    }
}
