use std::cell::RefCell;
use std::rc::Rc;

use gloo::events::EventListener;
use gloo::timers::callback::{Interval, Timeout};
use js_sys::Array;
use wasm_bindgen::{closure::Closure, JsCast, JsValue};
use web_sys::{
    window, Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit,
    MouseEvent,
};
use yew::prelude::*;

use crate::config::{
    RevealSettings, ScrambleSettings, SpotlightSettings, TiltSettings, TypewriterSettings,
};
use crate::effects::reveal::{transition_delay_style, Intersection, Observation, Reveal};
use crate::effects::scramble::Scramble;
use crate::effects::spotlight::Spotlight;
use crate::effects::tilt::{Bounds, Tilt};
use crate::effects::typewriter::Typewriter;
use crate::error::{Error, Result};

use super::seeded_rng;

pub enum PointerAction {
    Moved { x: f64, y: f64 },
    Left,
}

impl Reducible for Spotlight {
    type Action = PointerAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = *self;
        match action {
            PointerAction::Moved { x, y } => next.pointer_moved(x, y),
            PointerAction::Left => next.pointer_left(),
        }
        Rc::new(next)
    }
}

#[derive(Properties, PartialEq)]
pub struct MouseSpotlightProps {
    #[prop_or_default]
    pub settings: SpotlightSettings,
}

#[function_component(MouseSpotlight)]
pub fn mouse_spotlight(props: &MouseSpotlightProps) -> Html {
    let spotlight = use_reducer(Spotlight::default);

    {
        let dispatcher = spotlight.dispatcher();
        use_effect_with((), move |_| {
            let listeners = window().and_then(|win| {
                let document = win.document()?;

                let on_move = {
                    let dispatcher = dispatcher.clone();
                    EventListener::new(&win, "mousemove", move |event| {
                        if let Some(event) = event.dyn_ref::<MouseEvent>() {
                            dispatcher.dispatch(PointerAction::Moved {
                                x: f64::from(event.client_x()),
                                y: f64::from(event.client_y()),
                            });
                        }
                    })
                };
                let on_leave = EventListener::new(&document, "mouseleave", move |_| {
                    dispatcher.dispatch(PointerAction::Left);
                });

                Some((on_move, on_leave))
            });

            move || drop(listeners)
        });
    }

    html! {
        <div
            class="fixed inset-0 pointer-events-none z-30 transition-opacity duration-500"
            style={spotlight.style(&props.settings)}
        />
    }
}

/// Owns an intersection observer for one element; disconnects on drop.
struct RevealObserver {
    observer: IntersectionObserver,
    _callback: Closure<dyn FnMut(Array, IntersectionObserver)>,
}

impl RevealObserver {
    fn watch(
        element: &Element,
        settings: &RevealSettings,
        latch: Rc<RefCell<Reveal>>,
        redraw: UseForceUpdateHandle,
    ) -> Result<Self> {
        let callback = Closure::<dyn FnMut(Array, IntersectionObserver)>::new(
            move |entries: Array, observer: IntersectionObserver| {
                for entry in entries.iter() {
                    let Ok(entry) = entry.dyn_into::<IntersectionObserverEntry>() else {
                        continue;
                    };
                    let report = Intersection {
                        is_intersecting: entry.is_intersecting(),
                        ratio: entry.intersection_ratio(),
                    };
                    if latch.borrow_mut().observe(report) == Observation::Revealed {
                        log::debug!("block revealed at ratio {:.2}", report.ratio);
                        observer.unobserve(&entry.target());
                        redraw.force_update();
                    }
                }
            },
        );

        let options = IntersectionObserverInit::new();
        options.set_threshold(&JsValue::from_f64(settings.threshold));
        options.set_root_margin(&settings.root_margin);

        let observer =
            IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options)
                .map_err(|err| Error::dom("IntersectionObserver", err))?;
        observer.observe(element);

        Ok(Self {
            observer,
            _callback: callback,
        })
    }
}

impl Drop for RevealObserver {
    fn drop(&mut self) {
        self.observer.disconnect();
    }
}

#[derive(Properties, PartialEq)]
pub struct ScrollRevealProps {
    #[prop_or_default]
    pub delay: u32,
    #[prop_or_default]
    pub settings: RevealSettings,
    #[prop_or_default]
    pub children: Html,
}

#[function_component(ScrollReveal)]
pub fn scroll_reveal(props: &ScrollRevealProps) -> Html {
    let node = use_node_ref();
    let latch = use_mut_ref(Reveal::new);
    let redraw = use_force_update();

    {
        let node = node.clone();
        let latch = latch.clone();
        let settings = props.settings.clone();
        use_effect_with((), move |_| {
            let observer = node.cast::<Element>().and_then(|element| {
                match RevealObserver::watch(&element, &settings, latch.clone(), redraw.clone()) {
                    Ok(observer) => Some(observer),
                    Err(err) => {
                        // Without an observer the block would stay hidden forever.
                        log::warn!("{err}; showing block without animation");
                        latch.borrow_mut().observe(Intersection {
                            is_intersecting: true,
                            ratio: 1.0,
                        });
                        redraw.force_update();
                        None
                    }
                }
            });

            move || drop(observer)
        });
    }

    let reveal = *latch.borrow();

    html! {
        <div
            ref={node}
            class={classes!("transition-all", "transform", reveal.classes())}
            style={transition_delay_style(props.delay, &props.settings)}
        >
            {props.children.clone()}
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct TiltCardProps {
    #[prop_or_default]
    pub class: &'static str,
    #[prop_or_default]
    pub settings: TiltSettings,
    #[prop_or_default]
    pub children: Html,
}

#[function_component(TiltCard)]
pub fn tilt_card(props: &TiltCardProps) -> Html {
    let node = use_node_ref();
    let tilt = use_state(Tilt::default);

    let onmousemove = {
        let node = node.clone();
        let tilt = tilt.clone();
        let settings = props.settings.clone();
        Callback::from(move |event: MouseEvent| {
            let Some(element) = node.cast::<Element>() else {
                return;
            };
            let rect = element.get_bounding_client_rect();
            let bounds = Bounds {
                left: rect.left(),
                top: rect.top(),
                width: rect.width(),
                height: rect.height(),
            };

            let mut next = *tilt;
            next.pointer_moved(
                bounds,
                f64::from(event.client_x()),
                f64::from(event.client_y()),
                &settings,
            );
            tilt.set(next);
        })
    };

    let onmouseleave = {
        let tilt = tilt.clone();
        Callback::from(move |_| {
            let mut next = *tilt;
            next.pointer_left();
            tilt.set(next);
        })
    };

    html! {
        <div
            ref={node}
            class={classes!("transform-gpu", "transition-transform", "duration-200", "ease-out", props.class)}
            style={tilt.transform(&props.settings)}
            onmousemove={onmousemove}
            onmouseleave={onmouseleave}
        >
            {props.children.clone()}
        </div>
    }
}

/// Identifies one scramble run. A new generation replaces the running timer.
#[derive(Clone, Copy, Default, PartialEq)]
struct ScrambleRun {
    generation: u32,
    active: bool,
}

#[derive(Properties, PartialEq)]
pub struct GlitchTextProps {
    pub text: AttrValue,
    #[prop_or_default]
    pub settings: ScrambleSettings,
}

#[function_component(GlitchText)]
pub fn glitch_text(props: &GlitchTextProps) -> Html {
    let scramble = {
        let text = props.text.clone();
        let settings = props.settings.clone();
        use_mut_ref(move || Scramble::new(&text, &settings))
    };
    let rng = use_mut_ref(seeded_rng);
    let display = use_state(|| props.text.to_string());
    let run = use_state(ScrambleRun::default);

    {
        let scramble = scramble.clone();
        let display = display.clone();
        let run = run.clone();
        let settings = props.settings.clone();
        use_effect_with(props.text.clone(), move |text| {
            *scramble.borrow_mut() = Scramble::new(text, &settings);
            display.set(text.to_string());
            run.set(ScrambleRun {
                generation: run.generation,
                active: false,
            });
            || ()
        });
    }

    {
        let scramble = scramble.clone();
        let display = display.clone();
        let run_handle = run.clone();
        let tick_ms = props.settings.tick_ms;
        use_effect_with(*run, move |run| {
            let current = *run;
            let interval = current.active.then(|| {
                Interval::new(tick_ms, move || {
                    let frame = scramble.borrow_mut().tick(&mut *rng.borrow_mut());
                    display.set(frame.text);
                    if frame.done {
                        run_handle.set(ScrambleRun {
                            active: false,
                            ..current
                        });
                    }
                })
            });

            move || drop(interval)
        });
    }

    let onmouseenter = {
        let scramble = scramble.clone();
        let run = run.clone();
        Callback::from(move |_: MouseEvent| {
            scramble.borrow_mut().restart();
            run.set(ScrambleRun {
                generation: run.generation.wrapping_add(1),
                active: true,
            });
        })
    };

    html! {
        <span
            onmouseenter={onmouseenter}
            class="inline-block cursor-default text-transparent bg-clip-text bg-gradient-to-r from-amber-400 via-orange-500 to-red-500 hover:text-amber-300 transition-colors"
        >
            {(*display).clone()}
        </span>
    }
}

pub enum TypewriterAction {
    Advance,
}

impl Reducible for Typewriter {
    type Action = TypewriterAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = (*self).clone();
        match action {
            TypewriterAction::Advance => next.advance(),
        }
        Rc::new(next)
    }
}

#[derive(Properties, PartialEq)]
pub struct TypewriterTextProps {
    /// Read once on mount.
    pub texts: Vec<String>,
    #[prop_or_default]
    pub settings: TypewriterSettings,
}

#[function_component(TypewriterText)]
pub fn typewriter_text(props: &TypewriterTextProps) -> Html {
    let typewriter = {
        let texts = props.texts.clone();
        let settings = props.settings.clone();
        use_reducer(move || Typewriter::new(&texts, settings))
    };

    {
        let dispatcher = typewriter.dispatcher();
        let delay = typewriter.delay();
        let idle = typewriter.is_idle();
        use_effect_with(typewriter.step(), move |_| {
            let timeout = (!idle)
                .then(|| Timeout::new(delay, move || dispatcher.dispatch(TypewriterAction::Advance)));
            move || drop(timeout)
        });
    }

    html! {
        <span class="text-amber-400 font-mono border-r-2 border-amber-400 animate-pulse pr-1">
            {typewriter.displayed()}
        </span>
    }
}
