//! Static page sections. Content comes from the manifest; the animated
//! pieces are the components in `effects` and `canvas`.

use gloo::events::EventListener;
use web_sys::window;
use yew::prelude::*;

use crate::config::{EffectSettings, NavSettings, RevealSettings, TiltSettings};
use crate::content::{
    Brand, Contact, Expertise, Footer, Hero, Link, Project, Projects, TechCard, Terminal,
};
use crate::effects::nav::NavState;
use crate::icons::Icon;

use super::effects::{GlitchText, ScrollReveal, TiltCard, TypewriterText};
use super::icons::Glyph;

#[derive(Properties, PartialEq)]
pub struct NavigationProps {
    pub brand: Brand,
    pub links: Vec<Link>,
    #[prop_or_default]
    pub settings: NavSettings,
}

#[function_component(Navigation)]
pub fn navigation(props: &NavigationProps) -> Html {
    let nav = use_state(NavState::default);

    {
        let nav = nav.clone();
        let settings = props.settings.clone();
        use_effect_with((), move |_| {
            let listener = window().map(|win| {
                let target = win.clone();
                EventListener::new(&target, "scroll", move |_| {
                    let scroll_y = win.scroll_y().unwrap_or(0.0);
                    nav.set(NavState::from_scroll(scroll_y, &settings));
                })
            });
            move || drop(listener)
        });
    }

    html! {
        <nav class={classes!("fixed", "w-full", "z-50", "transition-all", "duration-500", "border-b", nav.classes())}>
            <div class="max-w-7xl mx-auto px-6 flex justify-between items-center">
                <a href="#" class="flex items-center gap-2 font-mono text-xl font-bold tracking-tighter text-white hover:text-amber-400 transition-colors z-50">
                    <Glyph icon={Icon::Terminal} class="text-amber-400 w-6 h-6" />
                    <span>
                        {props.brand.prefix.clone()}
                        <span class="text-amber-400">{"_"}</span>
                        {props.brand.suffix.clone()}
                    </span>
                </a>
                <div class="hidden md:flex gap-8">
                    { for props.links.iter().map(|link| html! {
                        <a
                            key={link.label.clone()}
                            href={link.href.clone()}
                            class="text-sm font-medium text-neutral-400 hover:text-amber-400 transition-all relative group py-2"
                        >
                            {link.label.clone()}
                            <span class="absolute bottom-0 left-0 w-0 h-0.5 bg-amber-400 transition-all duration-300 group-hover:w-full shadow-[0_0_10px_rgba(251,191,36,0.8)]"></span>
                        </a>
                    }) }
                </div>
                <button class="md:hidden text-neutral-300 hover:text-white z-50" type="button" aria-label="Menu">
                    <Glyph icon={Icon::Layers} class="w-6 h-6" />
                </button>
            </div>
        </nav>
    }
}

#[derive(Properties, PartialEq)]
pub struct HeroSectionProps {
    pub hero: Hero,
    #[prop_or_default]
    pub settings: EffectSettings,
}

#[function_component(HeroSection)]
pub fn hero_section(props: &HeroSectionProps) -> Html {
    let hero = &props.hero;
    let settings = &props.settings;

    html! {
        <section id="home" class="relative min-h-screen flex flex-col justify-center items-center px-6 pt-20 z-10">
            <ScrollReveal settings={settings.reveal.clone()}>
                <div class="max-w-4xl w-full mx-auto text-center">
                    <div class="inline-flex items-center gap-2 px-4 py-1.5 rounded-full bg-amber-950/30 border border-amber-500/20 text-amber-400 text-xs font-mono mb-8 hover:bg-amber-900/30 transition-colors cursor-crosshair hover:border-amber-500/50 shadow-[0_0_15px_rgba(245,158,11,0.2)]">
                        <span class="relative flex h-2 w-2">
                            <span class="animate-ping absolute inline-flex h-full w-full rounded-full bg-amber-400 opacity-75"></span>
                            <span class="relative inline-flex rounded-full h-2 w-2 bg-amber-500"></span>
                        </span>
                        {hero.status.clone()}
                    </div>

                    <h1 class="text-6xl md:text-8xl font-bold tracking-tight text-white mb-8 relative group">
                        {format!("{} ", hero.greeting)}
                        <GlitchText text={hero.name.clone()} settings={settings.scramble.clone()} />
                    </h1>

                    <div class="text-xl md:text-3xl text-neutral-400 font-light mb-12 h-12 flex items-center justify-center gap-3">
                        <span>{hero.lead.clone()}</span>
                        <TypewriterText texts={hero.phrases.clone()} settings={settings.typewriter.clone()} />
                    </div>

                    <p class="max-w-2xl mx-auto text-neutral-400 mb-12 leading-relaxed text-lg">
                        {hero.pitch.clone()}
                    </p>

                    <div class="flex flex-col md:flex-row gap-6 justify-center items-center">
                        <a href={hero.primary.href.clone()} class="relative px-8 py-3.5 bg-amber-500 text-neutral-950 font-bold rounded overflow-hidden group transition-all hover:scale-105 hover:shadow-[0_0_30px_rgba(245,158,11,0.6)]">
                            <span class="relative z-10 flex items-center gap-2">
                                {hero.primary.label.clone()}
                                { link_icon(&hero.primary, "w-4 h-4 group-hover:rotate-12 transition-transform") }
                            </span>
                            <div class="absolute inset-0 bg-white/20 translate-y-full group-hover:translate-y-0 transition-transform duration-300 ease-out"></div>
                        </a>
                        <a href={hero.secondary.href.clone()} class="px-8 py-3.5 bg-transparent border border-neutral-700 hover:border-neutral-500 text-white rounded transition-all hover:scale-105 flex items-center justify-center gap-2 hover:bg-neutral-800/50 backdrop-blur-sm">
                            {hero.secondary.label.clone()}
                            { link_icon(&hero.secondary, "w-4 h-4") }
                        </a>
                    </div>
                </div>
            </ScrollReveal>

            <a href="#expertise" class="absolute bottom-10 left-1/2 transform -translate-x-1/2 animate-bounce text-neutral-600 hover:text-amber-400 transition-colors cursor-pointer">
                <Glyph icon={Icon::ChevronDown} class="w-8 h-8" />
            </a>
        </section>
    }
}

fn link_icon(link: &Link, class: &'static str) -> Html {
    match link.icon {
        Some(icon) => html! { <Glyph icon={icon} class={class} /> },
        None => Html::default(),
    }
}

#[derive(Properties, PartialEq)]
struct TechCardViewProps {
    card: TechCard,
    settings: TiltSettings,
}

#[function_component(TechCardView)]
fn tech_card_view(props: &TechCardViewProps) -> Html {
    let card = &props.card;

    html! {
        <TiltCard
            settings={props.settings.clone()}
            class="group relative p-6 bg-neutral-900/40 backdrop-blur-md border border-neutral-800 rounded-xl overflow-hidden shadow-lg hover:shadow-amber-500/20 h-full"
        >
            <div class="absolute inset-0 bg-gradient-to-r from-transparent via-amber-500/10 to-transparent -translate-x-full group-hover:animate-shimmer" />
            <div class="absolute top-0 left-0 w-full h-0.5 bg-gradient-to-r from-amber-500 to-orange-600 transform scale-x-0 group-hover:scale-x-100 transition-transform duration-500 origin-left" />

            <div class="flex items-start justify-between mb-4 relative z-10">
                <div class="p-3 bg-neutral-800/50 rounded-lg group-hover:bg-amber-500/20 transition-colors duration-300 ring-1 ring-neutral-700 group-hover:ring-amber-500/50">
                    <Glyph icon={card.icon} class="w-8 h-8 text-neutral-400 group-hover:text-amber-400 transition-colors duration-300" />
                </div>
                <Glyph icon={Icon::ScanLine} class="w-5 h-5 text-amber-500/50 opacity-0 group-hover:opacity-100 transition-opacity duration-300 animate-pulse" />
            </div>

            <h3 class="text-xl font-bold text-white mb-2 font-mono group-hover:text-amber-300 transition-colors duration-300 relative z-10">
                {card.title.clone()}
            </h3>

            <p class="text-neutral-400 text-sm leading-relaxed mb-6 relative z-10">
                {card.description.clone()}
            </p>

            <div class="flex flex-wrap gap-2 relative z-10 mt-auto">
                { for card.tags.iter().map(|tag| html! {
                    <span class="text-xs font-mono px-2 py-1 rounded bg-neutral-800/80 text-amber-400/90 border border-neutral-700 group-hover:border-amber-500/30 transition-colors">
                        {tag.clone()}
                    </span>
                }) }
            </div>
        </TiltCard>
    }
}

#[derive(Properties, PartialEq)]
struct TerminalBlockProps {
    terminal: Terminal,
    settings: RevealSettings,
}

fn quoted_list(values: &[String]) -> String {
    let quoted: Vec<String> = values.iter().map(|value| format!("\"{value}\"")).collect();
    format!("[{}]", quoted.join(", "))
}

#[function_component(TerminalBlock)]
fn terminal_block(props: &TerminalBlockProps) -> Html {
    let terminal = &props.terminal;
    let last = terminal.focus.len().saturating_sub(1);

    html! {
        <ScrollReveal settings={props.settings.clone()}>
            <div class="w-full max-w-3xl mx-auto bg-neutral-950/90 rounded-lg border border-neutral-800 shadow-2xl overflow-hidden font-mono text-sm my-20 backdrop-blur-sm group hover:border-neutral-600 transition-colors duration-500">
                <div class="flex items-center px-4 py-3 bg-neutral-900/90 border-b border-neutral-800 gap-2">
                    <div class="flex gap-2">
                        <div class="w-3 h-3 rounded-full bg-red-500/80" />
                        <div class="w-3 h-3 rounded-full bg-yellow-500/80" />
                        <div class="w-3 h-3 rounded-full bg-green-500/80" />
                    </div>
                    <div class="ml-4 text-neutral-500 text-xs flex-1 text-center pr-12 opacity-50">{terminal.title.clone()}</div>
                </div>
                <div class="p-6 text-neutral-300 space-y-3 font-mono text-sm md:text-base">
                    <div class="flex">
                        <span class="text-emerald-500 mr-3 select-none">{"➜"}</span>
                        <span class="text-amber-300">{"whoami"}</span>
                    </div>
                    <div class="text-neutral-400 pl-6 mb-4">{format!("\"{}\"", terminal.whoami)}</div>

                    <div class="flex">
                        <span class="text-emerald-500 mr-3 select-none">{"➜"}</span>
                        <span class="text-amber-300">{terminal.focus_command.clone()}</span>
                    </div>
                    <div class="text-yellow-100/90 pl-6">
                        {"{"}
                        { for terminal.focus.iter().enumerate().map(|(index, entry)| html! {
                            <div class="pl-4 text-indigo-300">
                                {format!("\"{}\": ", entry.key)}
                                <span class="text-emerald-400">{quoted_list(&entry.values)}</span>
                                { if index < last { "," } else { "" } }
                            </div>
                        }) }
                        {"}"}
                    </div>

                    <div class="flex pt-2">
                        <span class="text-emerald-500 mr-3 select-none">{"➜"}</span>
                        <span class="w-2.5 h-5 bg-neutral-500 animate-pulse inline-block align-middle"></span>
                    </div>
                </div>
            </div>
        </ScrollReveal>
    }
}

#[derive(Properties, PartialEq)]
pub struct ExpertiseSectionProps {
    pub expertise: Expertise,
    #[prop_or_default]
    pub settings: EffectSettings,
}

#[function_component(ExpertiseSection)]
pub fn expertise_section(props: &ExpertiseSectionProps) -> Html {
    let expertise = &props.expertise;
    let reveal = &props.settings.reveal;

    html! {
        <section id="expertise" class="py-32 px-6 relative z-10">
            <div class="max-w-7xl mx-auto">
                <ScrollReveal settings={reveal.clone()}>
                    <div class="flex items-center gap-6 mb-20">
                        <div class="h-px flex-1 bg-gradient-to-r from-transparent via-neutral-700 to-neutral-700"></div>
                        <h2 class="text-4xl font-bold text-white font-mono flex items-center gap-3">
                            <Glyph icon={Icon::Binary} class="text-amber-400 w-8 h-8" />
                            {expertise.heading.clone()}
                        </h2>
                        <div class="h-px flex-1 bg-gradient-to-l from-transparent via-neutral-700 to-neutral-700"></div>
                    </div>
                </ScrollReveal>

                <div class="grid grid-cols-1 md:grid-cols-2 lg:grid-cols-4 gap-8">
                    { for expertise.cards.iter().enumerate().map(|(index, card)| html! {
                        <ScrollReveal
                            key={card.title.clone()}
                            delay={reveal.stagger_ms.saturating_mul(index as u32)}
                            settings={reveal.clone()}
                        >
                            <TechCardView card={card.clone()} settings={props.settings.tilt.clone()} />
                        </ScrollReveal>
                    }) }
                </div>

                <TerminalBlock terminal={expertise.terminal.clone()} settings={reveal.clone()} />
            </div>
        </section>
    }
}

#[derive(Properties, PartialEq)]
struct ProjectRowProps {
    project: Project,
    /// One-based, shown as the large backdrop number.
    position: usize,
    /// Image on the right instead of the left.
    mirrored: bool,
}

#[function_component(ProjectRow)]
fn project_row(props: &ProjectRowProps) -> Html {
    let project = &props.project;
    let accent = project.accent;
    let mirrored = props.mirrored;

    let row = if mirrored {
        "flex flex-col lg:flex-row-reverse gap-12 items-center group"
    } else {
        "flex flex-col lg:flex-row gap-12 items-center group"
    };
    let frame_tilt = if mirrored {
        "group-hover:-rotate-y-2"
    } else {
        "group-hover:rotate-y-2"
    };
    let copy_align = if mirrored {
        "w-full lg:w-2/5 text-left lg:text-right relative"
    } else {
        "w-full lg:w-2/5 relative"
    };
    let number_side = if mirrored { "-right-10" } else { "-left-10" };
    let justify = if mirrored {
        "justify-start lg:justify-end"
    } else {
        ""
    };

    html! {
        <div class={row}>
            <div class="w-full lg:w-3/5 relative perspective-1000">
                <div class={classes!("absolute", "-inset-2", "bg-gradient-to-r", accent.glow(), "rounded-xl", "blur-lg", "opacity-20", "group-hover:opacity-40", "transition", "duration-500")}></div>
                <div class={classes!("relative", "rounded-xl", "overflow-hidden", "border", "border-neutral-800", "bg-neutral-900", "shadow-2xl", "transform", "transition-all", "duration-500", frame_tilt, "group-hover:scale-[1.01]")}>
                    <div class="aspect-video bg-neutral-900 relative overflow-hidden">
                        <img
                            src={project.image.clone()}
                            alt={project.image_alt.clone()}
                            loading="lazy"
                            class="object-cover w-full h-full opacity-60 group-hover:opacity-100 transition-opacity duration-500 grayscale group-hover:grayscale-0"
                        />
                        <div class="absolute inset-0 bg-gradient-to-t from-neutral-950 via-transparent to-transparent opacity-80"></div>
                    </div>
                </div>
            </div>

            <div class={copy_align}>
                <div class={classes!("absolute", number_side, "top-0", "text-9xl", "font-bold", "text-neutral-800/20", "-z-10", "select-none")}>
                    {format!("{:02}", props.position)}
                </div>
                <h3 class={classes!(accent.text(), "font-mono", "mb-3", "flex", "items-center", "gap-2", justify)}>
                    <Glyph icon={project.category_icon} class="w-4 h-4" />
                    {project.category.clone()}
                </h3>
                <h4 class={classes!("text-3xl", "font-bold", "text-white", "mb-6", accent.group_hover_text(), "transition-colors")}>
                    {project.title.clone()}
                </h4>
                <div class="p-6 bg-neutral-900/80 backdrop-blur-md border border-neutral-800 rounded-lg shadow-xl mb-6 hover:border-neutral-600 transition-colors text-left">
                    <p class="text-neutral-300 leading-relaxed">{project.description.clone()}</p>
                </div>
                <ul class={classes!("flex", "flex-wrap", "gap-4", "text-sm", "font-mono", "text-neutral-400", "mb-8", justify)}>
                    { for project.tags.iter().enumerate().map(|(index, tag)| html! {
                        <li class={classes!((index == 0).then_some(accent.text()))}>{tag.clone()}</li>
                    }) }
                </ul>
                <div class={classes!("flex", "gap-6", justify)}>
                    <a href={project.repo.clone()} aria-label="Source" class={classes!("text-neutral-400", accent.hover_text(), "hover:scale-110", "transition-all")}>
                        <Glyph icon={Icon::Github} class="w-6 h-6" />
                    </a>
                    <a href={project.demo.clone()} aria-label="Live demo" class={classes!("text-neutral-400", accent.hover_text(), "hover:scale-110", "transition-all")}>
                        <Glyph icon={Icon::ExternalLink} class="w-6 h-6" />
                    </a>
                </div>
            </div>
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct ProjectsSectionProps {
    pub projects: Projects,
    #[prop_or_default]
    pub settings: RevealSettings,
}

#[function_component(ProjectsSection)]
pub fn projects_section(props: &ProjectsSectionProps) -> Html {
    let projects = &props.projects;

    html! {
        <section id="projects" class="py-32 px-6 relative z-10 overflow-hidden">
            <div class="max-w-7xl mx-auto">
                <ScrollReveal settings={props.settings.clone()}>
                    <h2 class="text-4xl font-bold text-white mb-16 font-mono border-l-4 border-amber-500 pl-6">
                        <span class="text-amber-400 text-lg block mb-1 tracking-widest">{projects.kicker.clone()}</span>
                        {projects.heading.clone()}
                    </h2>
                </ScrollReveal>

                <div class="space-y-32">
                    { for projects.items.iter().enumerate().map(|(index, project)| html! {
                        <ScrollReveal key={project.title.clone()} settings={props.settings.clone()}>
                            <ProjectRow
                                project={project.clone()}
                                mirrored={index % 2 == 1}
                                position={index + 1}
                            />
                        </ScrollReveal>
                    }) }
                </div>
            </div>
        </section>
    }
}

#[derive(Properties, PartialEq)]
pub struct ContactSectionProps {
    pub contact: Contact,
    pub footer: Footer,
    #[prop_or_default]
    pub settings: RevealSettings,
}

#[function_component(ContactSection)]
pub fn contact_section(props: &ContactSectionProps) -> Html {
    let contact = &props.contact;
    let footer = &props.footer;

    html! {
        <section id="contact" class="py-32 px-6 text-center relative z-10">
            <ScrollReveal settings={props.settings.clone()}>
                <div class="max-w-2xl mx-auto">
                    <div class="w-20 h-1 bg-gradient-to-r from-amber-500 to-orange-600 mx-auto mb-8 rounded-full"></div>
                    <h2 class="text-5xl font-bold text-white mb-8 tracking-tight">{contact.heading.clone()}</h2>
                    <p class="text-neutral-400 mb-12 text-lg leading-relaxed">
                        { for contact.pitch.iter().map(|span| html! {
                            <>
                                if let Some(accent) = span.accent {
                                    <span class={accent.text()}>{span.text.clone()}</span>
                                } else {
                                    {span.text.clone()}
                                }
                                if span.line_break {
                                    <br />
                                }
                            </>
                        }) }
                    </p>

                    <div class="group relative inline-block">
                        <div class="absolute -inset-1 bg-gradient-to-r from-amber-500 via-orange-500 to-red-500 rounded-lg blur opacity-50 group-hover:opacity-100 transition duration-300 animate-tilt"></div>
                        <a
                            href={contact.cta.href.clone()}
                            class="relative block px-12 py-5 bg-neutral-950 rounded-lg text-white font-bold text-lg hover:bg-neutral-900 transition-colors flex items-center gap-3"
                        >
                            { link_icon(&contact.cta, "w-5 h-5") }
                            {contact.cta.label.clone()}
                        </a>
                    </div>

                    <div class="mt-20 flex justify-center gap-10">
                        { for contact.socials.iter().map(|social| html! {
                            <a
                                key={social.label.clone()}
                                href={social.href.clone()}
                                aria-label={social.label.clone()}
                                class="text-neutral-500 hover:text-amber-400 hover:-translate-y-2 transition-all duration-300 transform"
                            >
                                if let Some(icon) = social.icon {
                                    <Glyph icon={icon} class="w-8 h-8" />
                                } else {
                                    <div class="w-8 h-8 font-bold border-2 border-current rounded flex items-center justify-center">
                                        {social.label.clone()}
                                    </div>
                                }
                            </a>
                        }) }
                    </div>
                </div>
            </ScrollReveal>

            <footer class="absolute bottom-8 w-full text-center text-neutral-700 text-xs font-mono left-0">
                <div class="animate-pulse">{footer.marker.clone()}</div>
                {footer.copyright.clone()}
            </footer>
        </section>
    }
}
