use log::{info, warn};
use web_sys::window;
use yew::prelude::*;
use yew_hooks::prelude::*;

use crate::config;
use crate::error::{Result, SiteError};

/// Count to store for this visit given whatever was stored before.
pub fn next_visit_count(stored: Option<&str>) -> u64 {
    stored
        .and_then(|value| value.trim().parse::<u64>().ok())
        .unwrap_or(0)
        .saturating_add(1)
}

fn record_visit() -> Result<u64> {
    let storage = window()
        .and_then(|w| w.local_storage().ok())
        .flatten()
        .ok_or_else(|| SiteError::Dom("local storage is unavailable".to_string()))?;

    let stored = storage.get_item(config::VISITOR_COUNT_KEY)?;
    let count = next_visit_count(stored.as_deref());
    storage.set_item(config::VISITOR_COUNT_KEY, &count.to_string())?;
    Ok(count)
}

#[function_component(VisitorCounter)]
pub fn visitor_counter() -> Html {
    let count = use_state(|| None::<u64>);

    {
        let count = count.clone();
        use_mount(move || match record_visit() {
            Ok(visits) => {
                info!("visit number {} from this browser", visits);
                count.set(Some(visits));
            }
            Err(err) => warn!("visitor counter: {}", err),
        });
    }

    match *count {
        Some(visits) => html! {
            <p class="visitor-counter">
                {"You have visited this page "}
                <span class="visitor-count">{visits}</span>
                { if visits == 1 { " time" } else { " times" } }
            </p>
        },
        None => html! {},
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn first_visit_counts_one() {
        assert_eq!(next_visit_count(None), 1);
    }

    #[test]
    fn increments_stored_count() {
        assert_eq!(next_visit_count(Some("41")), 42);
        assert_eq!(next_visit_count(Some(" 7\n")), 8);
    }

    #[test]
    fn garbage_starts_over() {
        assert_eq!(next_visit_count(Some("lots")), 1);
        assert_eq!(next_visit_count(Some("-3")), 1);
        assert_eq!(next_visit_count(Some("")), 1);
    }

    #[test]
    fn saturates_instead_of_wrapping() {
        assert_eq!(next_visit_count(Some(&u64::MAX.to_string())), u64::MAX);
    }
}
