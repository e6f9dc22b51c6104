use log::Level;

#[cfg(debug_assertions)]
pub fn log_level() -> Level {
    Level::Debug  // Verbose console output when running locally
}

#[cfg(not(debug_assertions))]
pub fn log_level() -> Level {
    Level::Info
}

/// Class names and ids the page behaviors bind to.
pub mod selectors {
    pub const NAVBAR: &str = ".navbar";
    pub const NAV_LINK: &str = ".nav-link";
    pub const HERO: &str = ".hero";
    pub const HERO_TITLE: &str = ".hero-title";
    pub const SECTIONS_WITH_ID: &str = "section[id]";
    pub const REVEAL_TARGETS: &str = ".section, .team-card, .timeline-item, .gallery-item, .feature";

    pub const GALLERY_ITEM: &str = ".gallery-item";
    pub const GALLERY_IMAGE: &str = ".gallery-image";
    pub const LIGHTBOX_ID: &str = "lightbox";
    pub const LIGHTBOX_IMAGE_ID: &str = "lightbox-image";
    pub const LIGHTBOX_CAPTION_ID: &str = "lightbox-caption";
    pub const LIGHTBOX_CLOSE: &str = ".lightbox-close";
    pub const LIGHTBOX_PREV: &str = ".lightbox-prev";
    pub const LIGHTBOX_NEXT: &str = ".lightbox-next";
}

// Scroll behavior
pub const NAVBAR_HEIGHT: f64 = 70.0;
pub const SECTION_ACTIVATION_OFFSET: f64 = 100.0;
pub const NAVBAR_SHADE_THRESHOLD: f64 = 50.0;
pub const PARALLAX_RATE: f64 = -0.5;
pub const HERO_TITLE_FADE_RATIO: f64 = 0.8;
pub const SCROLL_DEBOUNCE_MS: u32 = 10;

// Reveal and counters
pub const REVEAL_THRESHOLD: f64 = 0.1;
pub const REVEAL_ROOT_MARGIN: &str = "0px 0px -50px 0px";
pub const HERO_STATS_THRESHOLD: f64 = 0.5;
pub const COUNTER_DURATION_MS: u32 = 2000;
pub const COUNTER_FRAME_MS: u32 = 16;

pub const VISITOR_COUNT_KEY: &str = "visitorCount";

pub const MAP_ADDRESS: &str = "Camden Community Center, 3369 Union Ave, San Jose, CA 95124";
const MAP_EMBED_BASE: &str = "https://www.google.com/maps/embed?pb=!1m18!1m12!1m3!1d3172.5!2d-121.9!3d37.3!2m3!1f0!2f0!3f0!3m2!1i1024!2i768!4f13.1!3m3!1m2!1s0x0%3A0x0!2zMzfCsDE4JzAwLjAiTiAxMjHCsDU0JzAwLjAiVw!5e0!3m2!1sen!2sus!4v1234567890123!5m2!1sen!2sus";

pub fn map_embed_url(address: &str) -> String {
    format!("{}&q={}", MAP_EMBED_BASE, urlencoding::encode(address))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn map_url_carries_encoded_address() {
        let url = map_embed_url("3369 Union Ave, San Jose");
        assert!(url.starts_with("https://www.google.com/maps/embed?pb="));
        assert!(url.ends_with("&q=3369%20Union%20Ave%2C%20San%20Jose"));
    }

    #[test]
    fn lightbox_ids_are_bare() {
        for id in [selectors::LIGHTBOX_ID, selectors::LIGHTBOX_IMAGE_ID, selectors::LIGHTBOX_CAPTION_ID] {
            assert!(!id.starts_with('#') && !id.starts_with('.'), "{} should be a bare id", id);
        }
    }
}
