use log::info;
use yew::prelude::*;

use crate::config;

#[derive(Properties, PartialEq)]
pub struct MapEmbedProps {
    #[prop_or(AttrValue::Static(config::MAP_ADDRESS))]
    pub address: AttrValue,
}

/// The map iframe only gets a `src` once the visitor asks for it, so the
/// page does not load the third-party embed up front.
#[function_component(MapEmbed)]
pub fn map_embed(props: &MapEmbedProps) -> Html {
    let loaded = use_state(|| false);

    let load_map = {
        let loaded = loaded.clone();
        Callback::from(move |_: MouseEvent| {
            if !*loaded {
                info!("loading map embed");
                loaded.set(true);
            }
        })
    };

    let src = (*loaded).then(|| config::map_embed_url(&props.address));

    html! {
        <div class="map-container">
            <div
                class="map-placeholder"
                style={if *loaded { "display: none;" } else { "display: flex;" }}
                onclick={load_map}
            >
                <p>{"📍 "}{props.address.clone()}</p>
                <button class="map-load-button">{"Show map"}</button>
            </div>
            <iframe
                id="google-map-iframe"
                src={src}
                style={if *loaded { "display: block; width: 100%; height: 400px; border: 0;" } else { "display: none;" }}
                loading="lazy"
                referrerpolicy="no-referrer-when-downgrade"
                title="Event location"
            ></iframe>
        </div>
    }
}
