use yew::prelude::*;

use crate::icons::Icon;

#[derive(Properties, PartialEq)]
pub struct GlyphProps {
    pub icon: Icon,
    #[prop_or_default]
    pub class: &'static str,
}

#[function_component(Glyph)]
pub fn glyph(props: &GlyphProps) -> Html {
    html! {
        <svg
            xmlns="http://www.w3.org/2000/svg"
            viewBox="0 0 24 24"
            fill="none"
            stroke="currentColor"
            stroke-width="2"
            stroke-linecap="round"
            stroke-linejoin="round"
            class={props.class}
            aria-hidden="true"
            data-icon={props.icon.name()}
        >
            { for props.icon.paths().iter().map(|d| html! { <path d={*d} /> }) }
        </svg>
    }
}
