use std::cell::RefCell;
use std::f64::consts::TAU;
use std::rc::Rc;

use gloo::events::EventListener;
use gloo::render::{request_animation_frame, AnimationFrame};
use glam::DVec2;
use rand_pcg::Pcg32;
use wasm_bindgen::JsCast;
use web_sys::{window, CanvasRenderingContext2d, HtmlCanvasElement};
use yew::prelude::*;

use crate::config::ParticleSettings;
use crate::effects::frame_loop::{FrameLoop, Scheduler};
use crate::effects::particles::{ParticleField, Surface};
use crate::error::{Error, Result};

use super::{seeded_rng, viewport_size};

struct CanvasSurface {
    context: CanvasRenderingContext2d,
}

impl CanvasSurface {
    fn new(canvas: &HtmlCanvasElement, settings: &ParticleSettings) -> Result<Self> {
        let context = canvas
            .get_context("2d")
            .map_err(|err| Error::dom("getContext", err))?
            .ok_or(Error::MissingContext)?
            .dyn_into::<CanvasRenderingContext2d>()
            .map_err(|_| Error::MissingContext)?;

        let surface = Self { context };
        surface.apply_style(settings);
        Ok(surface)
    }

    /// Resizing a canvas resets its context state, so this runs again after
    /// every resize.
    fn apply_style(&self, settings: &ParticleSettings) {
        self.context.set_fill_style_str(&settings.fill);
        self.context.set_stroke_style_str(&settings.stroke);
    }
}

impl Surface for CanvasSurface {
    fn clear(&mut self, width: f64, height: f64) {
        self.context.clear_rect(0.0, 0.0, width, height);
    }

    fn fill_circle(&mut self, center: DVec2, radius: f64) {
        self.context.begin_path();
        if self.context.arc(center.x, center.y, radius, 0.0, TAU).is_ok() {
            self.context.fill();
        }
    }

    fn stroke_line(&mut self, from: DVec2, to: DVec2, width: f64) {
        self.context.set_line_width(width);
        self.context.begin_path();
        self.context.move_to(from.x, from.y);
        self.context.line_to(to.x, to.y);
        self.context.stroke();
    }
}

/// Browser animation frames. Dropping the `AnimationFrame` cancels it.
struct AnimationFrames;

impl Scheduler for AnimationFrames {
    type Handle = AnimationFrame;

    fn request(&self, callback: Box<dyn FnOnce()>) -> AnimationFrame {
        request_animation_frame(move |_| callback())
    }
}

/// The particle simulation bound to its canvas.
struct ParticleScene {
    canvas: HtmlCanvasElement,
    settings: ParticleSettings,
    surface: RefCell<CanvasSurface>,
    field: RefCell<ParticleField>,
    rng: RefCell<Pcg32>,
}

impl ParticleScene {
    fn new(canvas: HtmlCanvasElement, settings: ParticleSettings) -> Result<Rc<Self>> {
        let surface = CanvasSurface::new(&canvas, &settings)?;
        let mut rng = seeded_rng();
        let (width, height) = viewport_size();
        let field = ParticleField::new(width, height, settings.clone(), &mut rng);

        let scene = Rc::new(Self {
            canvas,
            settings,
            surface: RefCell::new(surface),
            field: RefCell::new(field),
            rng: RefCell::new(rng),
        });
        scene.fit_canvas(width, height);
        Ok(scene)
    }

    fn fit_canvas(&self, width: f64, height: f64) {
        self.canvas.set_width(width as u32);
        self.canvas.set_height(height as u32);
        self.surface.borrow().apply_style(&self.settings);
    }

    fn resize(&self) {
        let (width, height) = viewport_size();
        self.fit_canvas(width, height);
        self.field
            .borrow_mut()
            .resize(width, height, &mut *self.rng.borrow_mut());
    }

    fn render(&self) {
        self.field
            .borrow_mut()
            .frame(&mut *self.surface.borrow_mut());
    }
}

#[derive(Properties, PartialEq)]
pub struct ParticleNetworkProps {
    #[prop_or_default]
    pub settings: ParticleSettings,
}

#[function_component(ParticleNetwork)]
pub fn particle_network(props: &ParticleNetworkProps) -> Html {
    let canvas_ref = use_node_ref();

    {
        let canvas_ref = canvas_ref.clone();
        let settings = props.settings.clone();
        use_effect_with((), move |_| {
            let scene = canvas_ref.cast::<HtmlCanvasElement>().and_then(|canvas| {
                match ParticleScene::new(canvas, settings) {
                    Ok(scene) => Some(scene),
                    Err(err) => {
                        log::warn!("particle background disabled: {err}");
                        None
                    }
                }
            });

            let frames = scene.as_ref().map(|scene| {
                let scene = Rc::clone(scene);
                FrameLoop::start(AnimationFrames, move || scene.render())
            });

            let on_resize = scene.and_then(|scene| {
                let win = window()?;
                Some(EventListener::new(&win, "resize", move |_| scene.resize()))
            });

            move || {
                drop(on_resize);
                if let Some(frames) = frames {
                    log::debug!("particle loop stopped after {} frames", frames.frames());
                    frames.stop();
                }
            }
        });
    }

    html! {
        <canvas
            ref={canvas_ref}
            class="fixed top-0 left-0 w-full h-full -z-10 pointer-events-none"
        />
    }
}
