use yew::prelude::*;
use yew_router::prelude::*;
use yew_hooks::prelude::*;
use log::{info, warn};
use web_sys::window;

mod config;
mod error;
mod gallery;
mod listener;
mod scroll;
mod components {
    pub mod counter;
    pub mod lightbox;
    pub mod map_embed;
    pub mod nav;
    pub mod reveal;
    pub mod visitor_counter;
}
mod pages {
    pub mod home;
}

use components::nav::Nav;
use listener::Listener;
use pages::home::Home;

#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Home,
    #[not_found]
    #[at("/404")]
    NotFound,
}

fn switch(routes: Route) -> Html {
    match routes {
        Route::Home => {
            info!("Rendering Home page");
            html! { <Home /> }
        },
        Route::NotFound => {
            info!("Rendering NotFound page");
            html! {
                <section class="section not-found">
                    <h2>{"Page not found"}</h2>
                    <Link<Route> to={Route::Home}>{"Back to the fair"}</Link<Route>>
                </section>
            }
        },
    }
}

const GLOBAL_STYLES: &str = r#"
    body {
        opacity: 0;
        transition: opacity 0.5s ease;
    }

    body.loaded {
        opacity: 1;
    }

    .nav-link.active {
        color: #1e40af;
    }

    .nav-link.active::after {
        width: 100%;
    }

    .gallery-item {
        cursor: pointer;
    }
"#;

fn mark_body_loaded() {
    if let Some(body) = window().and_then(|w| w.document()).and_then(|d| d.body()) {
        if let Err(err) = body.class_list().add_1("loaded") {
            warn!("could not mark body loaded: {:?}", err);
        }
    }
}

#[function_component]
fn App() -> Html {
    // Fade the page in once the window has finished loading
    let load_listener = use_mut_ref(|| None::<Listener>);
    {
        let load_listener = load_listener.clone();
        use_mount(move || {
            let Some(window) = window() else { return };
            let complete = window
                .document()
                .map(|d| d.ready_state() == "complete")
                .unwrap_or(false);
            if complete {
                mark_body_loaded();
                return;
            }
            match Listener::new(&window, "load", |_| mark_body_loaded()) {
                Ok(listener) => *load_listener.borrow_mut() = Some(listener),
                Err(err) => {
                    warn!("no load listener, showing page now: {}", err);
                    mark_body_loaded();
                }
            }
        });
    }

    html! {
        <BrowserRouter>
            <style>{GLOBAL_STYLES}</style>
            <Nav />
            <Switch<Route> render={switch} />
        </BrowserRouter>
    }
}

fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    // Initialize logging
    console_log::init_with_level(config::log_level()).expect("error initializing log");

    info!("Starting application");
    yew::Renderer::<App>::new().render();
}
