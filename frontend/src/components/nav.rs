use log::warn;
use web_sys::{window, HtmlElement, MouseEvent, ScrollBehavior, ScrollToOptions};
use wasm_bindgen::JsCast;
use yew::prelude::*;

use crate::scroll::anchor_scroll_top;

/// Smooth-scrolls to the element with id `target`, leaving room for the
/// fixed navbar.
pub fn scroll_to_section(target: &str) {
    let Some(window) = window() else { return };
    let Some(element) = window
        .document()
        .and_then(|document| document.get_element_by_id(target))
        .and_then(|el| el.dyn_into::<HtmlElement>().ok())
    else {
        warn!("anchor target `#{}` not found", target);
        return;
    };

    let options = ScrollToOptions::new();
    options.set_top(anchor_scroll_top(element.offset_top() as f64));
    options.set_behavior(ScrollBehavior::Smooth);
    window.scroll_to_with_scroll_to_options(&options);
}

#[derive(Properties, PartialEq)]
pub struct AnchorLinkProps {
    pub target: AttrValue,
    #[prop_or_default]
    pub class: Classes,
    #[prop_or_default]
    pub onnavigate: Callback<()>,
    pub children: Children,
}

/// In-page link. Keeps a real `href="#id"` so the active-link highlighting
/// can match it, but scrolls smoothly instead of jumping.
#[function_component(AnchorLink)]
pub fn anchor_link(props: &AnchorLinkProps) -> Html {
    let onclick = {
        let target = props.target.clone();
        let onnavigate = props.onnavigate.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            scroll_to_section(&target);
            onnavigate.emit(());
        })
    };

    html! {
        <a href={format!("#{}", props.target)} class={props.class.clone()} {onclick}>
            { for props.children.iter() }
        </a>
    }
}

pub const SECTIONS: &[(&str, &str)] = &[
    ("home", "Home"),
    ("about", "About"),
    ("team", "Team"),
    ("schedule", "Schedule"),
    ("gallery", "Gallery"),
    ("location", "Location"),
];

#[function_component(Nav)]
pub fn nav() -> Html {
    let menu_open = use_state(|| false);

    let toggle_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            menu_open.set(!*menu_open);
        })
    };

    let close_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |_| menu_open.set(false))
    };

    let active = (*menu_open).then(|| "active");

    html! {
        <nav class="navbar">
            <div class="nav-container">
                <AnchorLink target="home" class="nav-logo" onnavigate={close_menu.clone()}>
                    {"Camden Community Fair"}
                </AnchorLink>

                <ul class={classes!("nav-menu", active)}>
                    {
                        for SECTIONS.iter().map(|(id, label)| html! {
                            <li class="nav-item">
                                <AnchorLink target={*id} class="nav-link" onnavigate={close_menu.clone()}>
                                    {*label}
                                </AnchorLink>
                            </li>
                        })
                    }
                </ul>

                <button class={classes!("hamburger", active)} onclick={toggle_menu} aria-label="Menu">
                    <span class="bar"></span>
                    <span class="bar"></span>
                    <span class="bar"></span>
                </button>
            </div>
        </nav>
    }
}
