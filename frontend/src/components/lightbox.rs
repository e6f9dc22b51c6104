use std::cell::RefCell;
use std::rc::Rc;

use log::{debug, info, warn};
use stylist::yew::styled_component;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, EventTarget, HtmlElement, HtmlImageElement, KeyboardEvent};
use yew::prelude::*;

use crate::config::selectors;
use crate::error::{Result, SiteError};
use crate::gallery::{GalleryState, ImageRecord, KeyOutcome};
use crate::listener::Listener;

/// Overlay markup the controller binds to. Rendered once and never updated by
/// yew afterwards, the controller owns its contents.
#[styled_component(Lightbox)]
pub fn lightbox() -> Html {
    let overlay = css!(
        r#"
        position: fixed;
        inset: 0;
        display: none;
        justify-content: center;
        align-items: center;
        background: rgba(0, 0, 0, 0.9);
        z-index: 10000;
        animation: lightboxFadeIn 0.3s ease;

        .lightbox-content {
            position: relative;
            max-width: 90%;
            max-height: 90%;
            text-align: center;
        }
        .lightbox-content img {
            max-width: 100%;
            max-height: 80vh;
            border-radius: 10px;
        }
        #lightbox-caption {
            color: #fff;
            margin-top: 1rem;
            font-size: 1.1rem;
        }
        button {
            position: absolute;
            background: none;
            border: none;
            color: #fff;
            font-size: 2.5rem;
            cursor: pointer;
        }
        .lightbox-close { top: -3rem; right: 0; }
        .lightbox-prev { top: 50%; left: -3.5rem; transform: translateY(-50%); }
        .lightbox-next { top: 50%; right: -3.5rem; transform: translateY(-50%); }

        @keyframes lightboxFadeIn {
            from { opacity: 0; }
            to { opacity: 1; }
        }
        "#
    );

    html! {
        <div id={selectors::LIGHTBOX_ID} class={classes!("lightbox", overlay)}>
            <div class="lightbox-content">
                <button class="lightbox-close" aria-label="Close">{"×"}</button>
                <button class="lightbox-prev" aria-label="Previous image">{"‹"}</button>
                <img id={selectors::LIGHTBOX_IMAGE_ID} src="" alt="" />
                <p id={selectors::LIGHTBOX_CAPTION_ID}></p>
                <button class="lightbox-next" aria-label="Next image">{"›"}</button>
            </div>
        </div>
    }
}

struct LightboxView {
    overlay: HtmlElement,
    image: HtmlImageElement,
    caption: HtmlElement,
    body: Option<HtmlElement>,
}

impl LightboxView {
    fn resolve(document: &Document) -> Result<Self> {
        let overlay = by_id(document, selectors::LIGHTBOX_ID)?
            .dyn_into::<HtmlElement>()
            .map_err(|_| SiteError::MissingElement(selectors::LIGHTBOX_ID))?;
        let image = by_id(document, selectors::LIGHTBOX_IMAGE_ID)?
            .dyn_into::<HtmlImageElement>()
            .map_err(|_| SiteError::MissingElement(selectors::LIGHTBOX_IMAGE_ID))?;
        let caption = by_id(document, selectors::LIGHTBOX_CAPTION_ID)?
            .dyn_into::<HtmlElement>()
            .map_err(|_| SiteError::MissingElement(selectors::LIGHTBOX_CAPTION_ID))?;
        Ok(Self {
            overlay,
            image,
            caption,
            body: document.body(),
        })
    }

    fn render(&self, record: &ImageRecord) {
        self.image.set_src(&record.src);
        self.image.set_alt(&record.caption);
        self.caption.set_text_content(Some(&record.caption));
    }

    fn show(&self) -> Result<()> {
        self.overlay.style().set_property("display", "flex")?;
        self.overlay.class_list().add_1("active")?;
        if let Some(body) = &self.body {
            body.style().set_property("overflow", "hidden")?;
        }
        Ok(())
    }

    fn hide(&self) -> Result<()> {
        self.overlay.style().set_property("display", "none")?;
        self.overlay.class_list().remove_1("active")?;
        if let Some(body) = &self.body {
            body.style().remove_property("overflow")?;
        }
        Ok(())
    }
}

fn by_id(document: &Document, id: &'static str) -> Result<Element> {
    document
        .get_element_by_id(id)
        .ok_or(SiteError::MissingElement(id))
}

/// Reads the gallery thumbnails in document order. A thumbnail without an
/// image is skipped so record `i` always belongs to the `i`-th returned
/// thumbnail.
fn scan_thumbnails(document: &Document) -> Result<(Vec<ImageRecord>, Vec<Element>)> {
    let nodes = document.query_selector_all(selectors::GALLERY_ITEM)?;
    let mut records = Vec::new();
    let mut thumbnails = Vec::new();
    for i in 0..nodes.length() {
        let Some(item) = nodes.item(i).and_then(|node| node.dyn_into::<Element>().ok()) else {
            continue;
        };
        match item.query_selector(selectors::GALLERY_IMAGE)? {
            Some(image) => {
                records.push(ImageRecord::new(
                    image.get_attribute("src").unwrap_or_default(),
                    image.get_attribute("alt").unwrap_or_default(),
                ));
                thumbnails.push(item);
            }
            None => warn!(
                "lightbox: gallery item {} has no `{}`, skipping it",
                i,
                selectors::GALLERY_IMAGE
            ),
        }
    }
    Ok((records, thumbnails))
}

pub struct LightboxController {
    state: GalleryState,
    view: Option<LightboxView>,
}

impl LightboxController {
    pub fn new(state: GalleryState, document: &Document) -> Self {
        let view = match LightboxView::resolve(document) {
            Ok(view) => Some(view),
            Err(err) => {
                warn!("lightbox: {}, the overlay will stay closed", err);
                None
            }
        };
        Self { state, view }
    }

    pub fn state(&self) -> &GalleryState {
        &self.state
    }

    pub fn open(&mut self, index: usize) {
        let Some(view) = &self.view else {
            warn!("lightbox: cannot open image {}, overlay elements are missing", index);
            return;
        };
        match self.state.open(index) {
            Ok(record) => {
                view.render(record);
                if let Err(err) = view.show() {
                    warn!("lightbox: {}", err);
                }
            }
            Err(err) => warn!("lightbox: {}", err),
        }
    }

    pub fn close(&mut self) {
        self.state.close();
        if let Some(view) = &self.view {
            if let Err(err) = view.hide() {
                warn!("lightbox: {}", err);
            }
        }
    }

    pub fn next(&mut self) {
        let shown = self.state.next().map(|record| record.clone());
        self.show_result(shown);
    }

    pub fn previous(&mut self) {
        let shown = self.state.previous().map(|record| record.clone());
        self.show_result(shown);
    }

    pub fn handle_key(&mut self, key: &str) {
        match self.state.handle_key(key) {
            Ok(KeyOutcome::Ignored) => {}
            Ok(KeyOutcome::Closed) => self.close(),
            Ok(KeyOutcome::Shown(_)) => {
                if let (Some(view), Some(record)) = (&self.view, self.state.current()) {
                    view.render(record);
                }
            }
            Err(err) => warn!("lightbox: {}", err),
        }
    }

    fn show_result(&self, shown: Result<ImageRecord>) {
        match (shown, &self.view) {
            (Ok(record), Some(view)) => view.render(&record),
            (Ok(_), None) => {}
            (Err(err), _) => warn!("lightbox: {}", err),
        }
    }
}

/// A controller wired to the page. Dropping it detaches every listener.
pub struct LightboxBinding {
    controller: Rc<RefCell<LightboxController>>,
    _listeners: Vec<Listener>,
}

impl LightboxBinding {
    pub fn initialize(document: &Document) -> Result<Self> {
        let (records, thumbnails) = scan_thumbnails(document)?;
        info!("lightbox: {} gallery images", records.len());

        let controller = Rc::new(RefCell::new(LightboxController::new(
            GalleryState::new(records),
            document,
        )));
        let mut listeners = Vec::new();

        for (index, thumbnail) in thumbnails.iter().enumerate() {
            let controller = controller.clone();
            listeners.push(Listener::new(thumbnail, "click", move |_| {
                controller.borrow_mut().open(index);
            })?);
        }

        if let Some(overlay) = document.get_element_by_id(selectors::LIGHTBOX_ID) {
            let controller = controller.clone();
            let overlay_target: EventTarget = overlay.clone().into();
            listeners.push(Listener::new(&overlay, "click", move |e| {
                // Only clicks on the dark backdrop itself, not on the content
                if e.target().as_ref() == Some(&overlay_target) {
                    controller.borrow_mut().close();
                }
            })?);
        }

        let controls: [(&'static str, fn(&mut LightboxController)); 3] = [
            (selectors::LIGHTBOX_CLOSE, LightboxController::close),
            (selectors::LIGHTBOX_PREV, LightboxController::previous),
            (selectors::LIGHTBOX_NEXT, LightboxController::next),
        ];
        for (selector, action) in controls {
            match document.query_selector(selector)? {
                Some(control) => {
                    let controller = controller.clone();
                    listeners.push(Listener::new(&control, "click", move |e| {
                        e.stop_propagation();
                        action(&mut controller.borrow_mut());
                    })?);
                }
                None => warn!("lightbox: {}", SiteError::MissingElement(selector)),
            }
        }

        {
            let controller = controller.clone();
            listeners.push(Listener::new(document, "keydown", move |e| {
                if let Some(e) = e.dyn_ref::<KeyboardEvent>() {
                    controller.borrow_mut().handle_key(&e.key());
                }
            })?);
        }

        debug!("lightbox: {} listeners attached", listeners.len());
        Ok(Self {
            controller,
            _listeners: listeners,
        })
    }

    pub fn image_count(&self) -> usize {
        self.controller.borrow().state().len()
    }
}
