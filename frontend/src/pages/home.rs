use chrono::Datelike;
use log::{info, warn};
use web_sys::window;
use yew::prelude::*;

use crate::components::{
    counter::StatCounter,
    lightbox::{Lightbox, LightboxBinding},
    map_embed::MapEmbed,
    nav::{AnchorLink, SECTIONS},
    reveal::{observe_reveal_targets, VisibilityObserver},
    visitor_counter::VisitorCounter,
};
use crate::config;
use crate::scroll::ScrollEffects;

const STATS: &[(&str, &str)] = &[
    ("25", "Years running"),
    ("1,200+", "Visitors last fair"),
    ("40", "Local vendors"),
];

const TEAM: &[(&str, &str, &str)] = &[
    ("Maria Lopez", "Organizer", "Has run the fair since the first one in the parking lot."),
    ("Dev Patel", "Vendors", "Keeps forty stalls fed, powered and in the right place."),
    ("Sam Okafor", "Volunteers", "Schedules the people who make the day happen."),
];

const SCHEDULE: &[(&str, &str)] = &[
    ("9:00", "Gates open, farmers market"),
    ("11:00", "Kids' bike parade"),
    ("13:00", "Live music on the lawn"),
    ("16:00", "Raffle draw and closing"),
];

const PHOTOS: &[(&str, &str)] = &[
    ("/assets/gallery/market.jpg", "Saturday farmers market"),
    ("/assets/gallery/parade.jpg", "The bike parade"),
    ("/assets/gallery/stage.jpg", "Music on the lawn"),
    ("/assets/gallery/food.jpg", "Food stalls at dusk"),
    ("/assets/gallery/volunteers.jpg", "Our volunteers"),
    ("/assets/gallery/raffle.jpg", "Raffle winners"),
];

/// DOM behaviors that live as long as the page is mounted.
struct PageBindings {
    _scroll: Option<ScrollEffects>,
    _reveal: Option<VisibilityObserver>,
    _lightbox: Option<LightboxBinding>,
}

fn bind_page() -> Option<PageBindings> {
    let window = window()?;
    let document = window.document()?;

    let scroll = ScrollEffects::attach(&window, &document)
        .map_err(|err| warn!("scroll effects disabled: {}", err))
        .ok();
    let reveal = observe_reveal_targets(&document)
        .map_err(|err| warn!("reveal animations disabled: {}", err))
        .ok();
    let lightbox = match LightboxBinding::initialize(&document) {
        Ok(lightbox) => {
            info!("lightbox ready with {} images", lightbox.image_count());
            Some(lightbox)
        }
        Err(err) => {
            warn!("lightbox disabled: {}", err);
            None
        }
    };

    Some(PageBindings {
        _scroll: scroll,
        _reveal: reveal,
        _lightbox: lightbox,
    })
}

#[function_component(Hero)]
fn hero() -> Html {
    let hero_ref = use_node_ref();
    let counting = use_state(|| false);

    {
        let hero_ref = hero_ref.clone();
        let counting = counting.clone();
        use_effect_with_deps(
            move |_| {
                let observer = hero_ref.cast::<web_sys::Element>().and_then(|hero| {
                    let observer = VisibilityObserver::new(config::HERO_STATS_THRESHOLD, None, move |target, observer| {
                        counting.set(true);
                        observer.unobserve(target);
                    });
                    match observer {
                        Ok(observer) => {
                            observer.observe(&hero);
                            Some(observer)
                        }
                        Err(err) => {
                            warn!("hero counters disabled: {}", err);
                            None
                        }
                    }
                });
                move || drop(observer)
            },
            (),
        );
    }

    html! {
        <section id="home" class="hero" ref={hero_ref}>
            <div class="hero-content">
                <h1 class="hero-title">{"Camden Community Fair"}</h1>
                <p class="hero-subtitle">{"One day, one park, the whole neighborhood."}</p>
                <div class="hero-stats">
                    {
                        for STATS.iter().map(|(value, label)| html! {
                            <StatCounter value={*value} label={*label} active={*counting} />
                        })
                    }
                </div>
                <AnchorLink target="schedule" class="cta-button">{"See the schedule"}</AnchorLink>
            </div>
        </section>
    }
}

#[function_component]
pub fn Home() -> Html {
    {
        use_effect_with_deps(
            move |_| {
                let bindings = bind_page();
                move || drop(bindings)
            },
            (),
        );
    }

    let year = chrono::Local::now().year();

    html! {
        <>
            <Hero />

            <section id="about" class="section about">
                <div class="container">
                    <h2 class="section-title">{"About the fair"}</h2>
                    <div class="features">
                        <div class="feature">
                            <h3>{"Free entry"}</h3>
                            <p>{"Everything on the lawn is free, stalls charge what they like."}</p>
                        </div>
                        <div class="feature">
                            <h3>{"Local first"}</h3>
                            <p>{"Every vendor lives or works within a few miles of the park."}</p>
                        </div>
                        <div class="feature">
                            <h3>{"All ages"}</h3>
                            <p>{"Games for kids, shade and seating for everyone else."}</p>
                        </div>
                    </div>
                </div>
            </section>

            <section id="team" class="section team">
                <div class="container">
                    <h2 class="section-title">{"The team"}</h2>
                    <div class="team-grid">
                        {
                            for TEAM.iter().map(|(name, role, bio)| html! {
                                <div class="team-card">
                                    <h3>{*name}</h3>
                                    <p class="team-role">{*role}</p>
                                    <p>{*bio}</p>
                                </div>
                            })
                        }
                    </div>
                </div>
            </section>

            <section id="schedule" class="section schedule">
                <div class="container">
                    <h2 class="section-title">{"Schedule"}</h2>
                    <div class="timeline">
                        {
                            for SCHEDULE.iter().map(|(time, what)| html! {
                                <div class="timeline-item">
                                    <span class="timeline-time">{*time}</span>
                                    <p>{*what}</p>
                                </div>
                            })
                        }
                    </div>
                </div>
            </section>

            <section id="gallery" class="section gallery">
                <div class="container">
                    <h2 class="section-title">{"Gallery"}</h2>
                    <div class="gallery-grid">
                        {
                            for PHOTOS.iter().map(|(src, caption)| html! {
                                <div class="gallery-item">
                                    <img class="gallery-image" src={*src} alt={*caption} loading="lazy" />
                                    <p>{*caption}</p>
                                </div>
                            })
                        }
                    </div>
                </div>
            </section>

            <section id="location" class="section location">
                <div class="container">
                    <h2 class="section-title">{"Location"}</h2>
                    <MapEmbed />
                </div>
            </section>

            <footer class="footer">
                <div class="container">
                    <ul class="footer-links">
                        {
                            for SECTIONS.iter().map(|(id, label)| html! {
                                <li><AnchorLink target={*id}>{*label}</AnchorLink></li>
                            })
                        }
                    </ul>
                    <VisitorCounter />
                    <p>{format!("© {} Camden Community Fair", year)}</p>
                </div>
            </footer>

            <Lightbox />
        </>
    }
}
