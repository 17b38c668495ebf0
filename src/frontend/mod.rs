mod canvas;
mod effects;
mod icons;
mod sections;

use std::rc::Rc;

use js_sys::Math;
use rand::SeedableRng;
use rand_pcg::Pcg32;
use web_sys::window;
use yew::prelude::*;

use crate::content::SiteContent;

use canvas::ParticleNetwork;
use effects::MouseSpotlight;
use sections::{ContactSection, ExpertiseSection, HeroSection, Navigation, ProjectsSection};

fn viewport_size() -> (f64, f64) {
    let Some(win) = window() else {
        return (1280.0, 720.0);
    };

    let width = win
        .inner_width()
        .ok()
        .and_then(|value| value.as_f64())
        .unwrap_or(1280.0);
    let height = win
        .inner_height()
        .ok()
        .and_then(|value| value.as_f64())
        .unwrap_or(720.0);

    (width, height)
}

/// Effects only need visual variety, so `Math.random` is a good enough seed.
fn seeded_rng() -> Pcg32 {
    let high = (Math::random() * 4_294_967_296.0) as u64;
    let low = (Math::random() * 4_294_967_296.0) as u64;
    Pcg32::seed_from_u64((high << 32) | low)
}

#[derive(Properties, PartialEq)]
struct AppProps {
    content: Rc<SiteContent>,
}

#[function_component(App)]
fn app(props: &AppProps) -> Html {
    let content = &props.content;
    let effects = &content.effects;

    html! {
        <div class="min-h-screen bg-neutral-950 text-neutral-200 selection:bg-amber-500/30 selection:text-amber-200 font-sans overflow-x-hidden cursor-default">
            <MouseSpotlight settings={effects.spotlight.clone()} />
            <ParticleNetwork settings={effects.particles.clone()} />

            <Navigation
                brand={content.brand.clone()}
                links={content.nav.clone()}
                settings={effects.nav.clone()}
            />
            <HeroSection hero={content.hero.clone()} settings={effects.clone()} />
            <ExpertiseSection expertise={content.expertise.clone()} settings={effects.clone()} />
            <ProjectsSection projects={content.projects.clone()} settings={effects.reveal.clone()} />
            <ContactSection
                contact={content.contact.clone()}
                footer={content.footer.clone()}
                settings={effects.reveal.clone()}
            />
        </div>
    }
}

pub fn run() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);

    let content = Rc::new(SiteContent::load_or_default());
    log::info!(
        "mounting portfolio: {} sections, {} projects",
        content.nav.len(),
        content.projects.items.len()
    );

    yew::Renderer::<App>::with_root_and_props(
        window()
            .and_then(|w| w.document())
            .and_then(|d| d.get_element_by_id("app"))
            .expect("missing #app mount point"),
        AppProps { content },
    )
    .render();
}
