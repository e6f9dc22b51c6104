use std::cell::RefCell;
use std::rc::Rc;

use gloo_timers::callback::Timeout;
use log::debug;
use wasm_bindgen::JsCast;
use web_sys::{Document, HtmlElement, Window};

use crate::config::{self, selectors};
use crate::error::Result;
use crate::listener::Listener;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavbarStyle {
    pub background: &'static str,
    pub box_shadow: &'static str,
}

pub fn navbar_style(scroll_y: f64) -> NavbarStyle {
    if scroll_y > config::NAVBAR_SHADE_THRESHOLD {
        NavbarStyle {
            background: "rgba(255, 255, 255, 0.98)",
            box_shadow: "0 2px 20px rgba(0, 0, 0, 0.1)",
        }
    } else {
        NavbarStyle {
            background: "rgba(255, 255, 255, 0.95)",
            box_shadow: "none",
        }
    }
}

pub fn parallax_offset(scroll_y: f64) -> f64 {
    scroll_y * config::PARALLAX_RATE
}

pub fn hero_title_scrolled_past(scroll_y: f64, hero_height: f64) -> bool {
    scroll_y > hero_height * config::HERO_TITLE_FADE_RATIO
}

/// Where to scroll so an anchor target clears the fixed navbar.
pub fn anchor_scroll_top(offset_top: f64) -> f64 {
    offset_top - config::NAVBAR_HEIGHT
}

#[derive(Debug, Clone, PartialEq)]
pub struct SectionBounds {
    pub id: String,
    pub top: f64,
    pub height: f64,
}

/// The section the reader is in. When sections overlap the later one wins.
pub fn active_section(scroll_y: f64, sections: &[SectionBounds]) -> Option<&str> {
    sections
        .iter()
        .filter(|section| {
            let top = section.top - config::SECTION_ACTIVATION_OFFSET;
            scroll_y >= top && scroll_y < top + section.height
        })
        .last()
        .map(|section| section.id.as_str())
}

fn query_all(document: &Document, selector: &str) -> Result<Vec<HtmlElement>> {
    let nodes = document.query_selector_all(selector)?;
    Ok((0..nodes.length())
        .filter_map(|i| nodes.item(i))
        .filter_map(|node| node.dyn_into::<HtmlElement>().ok())
        .collect())
}

fn query_one(document: &Document, selector: &'static str) -> Option<HtmlElement> {
    let found = document
        .query_selector(selector)
        .ok()
        .flatten()
        .and_then(|el| el.dyn_into::<HtmlElement>().ok());
    if found.is_none() {
        debug!("scroll effects: no `{}` on this page", selector);
    }
    found
}

struct ScrollTargets {
    window: Window,
    navbar: Option<HtmlElement>,
    hero: Option<HtmlElement>,
    hero_title: Option<HtmlElement>,
    sections: Vec<HtmlElement>,
    nav_links: Vec<HtmlElement>,
}

impl ScrollTargets {
    fn apply(&self) {
        let scroll_y = self.window.scroll_y().unwrap_or(0.0);

        if let Some(navbar) = &self.navbar {
            let look = navbar_style(scroll_y);
            let style = navbar.style();
            let _ = style.set_property("background", look.background);
            let _ = style.set_property("box-shadow", look.box_shadow);
        }

        if let Some(hero) = &self.hero {
            let _ = hero
                .style()
                .set_property("transform", &format!("translateY({}px)", parallax_offset(scroll_y)));

            if let Some(title) = &self.hero_title {
                let classes = title.class_list();
                if hero_title_scrolled_past(scroll_y, hero.offset_height() as f64) {
                    let _ = classes.add_1("scrolled-past");
                } else {
                    let _ = classes.remove_1("scrolled-past");
                }
            }
        }

        let bounds: Vec<SectionBounds> = self
            .sections
            .iter()
            .map(|section| SectionBounds {
                id: section.id(),
                top: section.offset_top() as f64,
                height: section.client_height() as f64,
            })
            .collect();
        let current = active_section(scroll_y, &bounds).map(|id| format!("#{}", id));

        for link in &self.nav_links {
            let classes = link.class_list();
            let _ = classes.remove_1("active");
            if current.is_some() && link.get_attribute("href") == current {
                let _ = classes.add_1("active");
            }
        }
    }
}

/// Navbar shading, hero parallax and active-link highlighting, recomputed
/// shortly after the last scroll event.
pub struct ScrollEffects {
    _listener: Listener,
    _pending: Rc<RefCell<Option<Timeout>>>,
}

impl ScrollEffects {
    pub fn attach(window: &Window, document: &Document) -> Result<Self> {
        let targets = Rc::new(ScrollTargets {
            window: window.clone(),
            navbar: query_one(document, selectors::NAVBAR),
            hero: query_one(document, selectors::HERO),
            hero_title: query_one(document, selectors::HERO_TITLE),
            sections: query_all(document, selectors::SECTIONS_WITH_ID)?,
            nav_links: query_all(document, selectors::NAV_LINK)?,
        });
        debug!(
            "scroll effects: tracking {} sections and {} nav links",
            targets.sections.len(),
            targets.nav_links.len()
        );

        let pending: Rc<RefCell<Option<Timeout>>> = Rc::new(RefCell::new(None));
        let listener = {
            let pending = pending.clone();
            let targets = targets.clone();
            Listener::new(window, "scroll", move |_| {
                let targets = targets.clone();
                // Replacing the handle drops and cancels the previous timeout
                *pending.borrow_mut() = Some(Timeout::new(config::SCROLL_DEBOUNCE_MS, move || {
                    targets.apply();
                }));
            })?
        };

        targets.apply();

        Ok(Self {
            _listener: listener,
            _pending: pending,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn section(id: &str, top: f64, height: f64) -> SectionBounds {
        SectionBounds {
            id: id.to_string(),
            top,
            height,
        }
    }

    #[test]
    fn navbar_shades_past_threshold() {
        assert_eq!(navbar_style(0.0).box_shadow, "none");
        assert_eq!(navbar_style(50.0).box_shadow, "none");
        assert_eq!(navbar_style(50.5).background, "rgba(255, 255, 255, 0.98)");
        assert_eq!(navbar_style(400.0).box_shadow, "0 2px 20px rgba(0, 0, 0, 0.1)");
    }

    #[test]
    fn parallax_moves_at_half_speed_upwards() {
        assert_eq!(parallax_offset(0.0), 0.0);
        assert_eq!(parallax_offset(200.0), -100.0);
    }

    #[test]
    fn hero_title_fades_after_most_of_the_hero() {
        assert!(!hero_title_scrolled_past(400.0, 500.0));
        assert!(hero_title_scrolled_past(401.0, 500.0));
    }

    #[test]
    fn anchors_clear_the_navbar() {
        assert_eq!(anchor_scroll_top(870.0), 800.0);
    }

    #[test]
    fn active_section_uses_offset_tops() {
        let sections = vec![
            section("about", 600.0, 500.0),
            section("gallery", 1100.0, 700.0),
            section("location", 1800.0, 400.0),
        ];
        assert_eq!(active_section(0.0, &sections), None);
        assert_eq!(active_section(500.0, &sections), Some("about"));
        assert_eq!(active_section(999.0, &sections), Some("about"));
        assert_eq!(active_section(1000.0, &sections), Some("gallery"));
        assert_eq!(active_section(1750.0, &sections), Some("location"));
        assert_eq!(active_section(2100.0, &sections), None);
    }

    #[test]
    fn later_section_wins_on_overlap() {
        let sections = vec![section("outer", 0.0, 2000.0), section("inner", 300.0, 200.0)];
        assert_eq!(active_section(250.0, &sections), Some("inner"));
        assert_eq!(active_section(450.0, &sections), Some("outer"));
    }
}
