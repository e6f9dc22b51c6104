//! Gallery state behind the lightbox: the ordered image list, which image
//! is current, and whether the overlay is showing. Navigation wraps around
//! in both directions.

use crate::error::{Result, SiteError};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageRecord {
    pub src: String,
    pub caption: String,
}

impl ImageRecord {
    pub fn new(src: impl Into<String>, caption: impl Into<String>) -> Self {
        Self {
            src: src.into(),
            caption: caption.into(),
        }
    }
}

/// What a key press did to the lightbox.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyOutcome {
    Ignored,
    Closed,
    Shown(usize),
}

#[derive(Debug, Clone, Default)]
pub struct GalleryState {
    images: Vec<ImageRecord>,
    current: usize,
    visible: bool,
}

impl GalleryState {
    pub fn new(images: Vec<ImageRecord>) -> Self {
        Self {
            images,
            current: 0,
            visible: false,
        }
    }

    pub fn len(&self) -> usize {
        self.images.len()
    }

    pub fn is_empty(&self) -> bool {
        self.images.is_empty()
    }

    pub fn images(&self) -> &[ImageRecord] {
        &self.images
    }

    pub fn current_index(&self) -> usize {
        self.current
    }

    pub fn current(&self) -> Option<&ImageRecord> {
        self.images.get(self.current)
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    pub fn open(&mut self, index: usize) -> Result<&ImageRecord> {
        if self.images.is_empty() {
            return Err(SiteError::EmptyGallery);
        }
        if index >= self.images.len() {
            return Err(SiteError::IndexOutOfRange {
                index,
                len: self.images.len(),
            });
        }
        self.current = index;
        self.visible = true;
        Ok(&self.images[index])
    }

    pub fn close(&mut self) {
        self.visible = false;
    }

    pub fn next(&mut self) -> Result<&ImageRecord> {
        self.step(1)
    }

    pub fn previous(&mut self) -> Result<&ImageRecord> {
        let len = self.images.len();
        // len - 1 steps forward is one step back on the ring
        self.step(len.saturating_sub(1))
    }

    fn step(&mut self, by: usize) -> Result<&ImageRecord> {
        let len = self.images.len();
        if len == 0 {
            return Err(SiteError::EmptyGallery);
        }
        self.current = (self.current % len + by % len) % len;
        Ok(&self.images[self.current])
    }

    /// Keyboard bindings only apply while the overlay is showing.
    pub fn handle_key(&mut self, key: &str) -> Result<KeyOutcome> {
        if !self.visible {
            return Ok(KeyOutcome::Ignored);
        }
        match key {
            "Escape" => {
                self.close();
                Ok(KeyOutcome::Closed)
            }
            "ArrowLeft" => {
                self.previous()?;
                Ok(KeyOutcome::Shown(self.current))
            }
            "ArrowRight" => {
                self.next()?;
                Ok(KeyOutcome::Shown(self.current))
            }
            _ => Ok(KeyOutcome::Ignored),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn animals() -> GalleryState {
        GalleryState::new(vec![
            ImageRecord::new("A.jpg", "Cat"),
            ImageRecord::new("B.jpg", "Dog"),
            ImageRecord::new("C.jpg", "Fox"),
        ])
    }

    fn shown(state: &GalleryState) -> (&str, &str) {
        let record = state.current().expect("current record");
        (record.src.as_str(), record.caption.as_str())
    }

    #[test]
    fn open_shows_the_requested_record() {
        let mut state = animals();
        for index in 0..state.len() {
            let record = state.open(index).unwrap().clone();
            assert_eq!(&record, &state.images()[index]);
            assert_eq!(state.current_index(), index);
            assert!(state.is_visible());
        }
    }

    #[test]
    fn walk_through_and_wrap() {
        let mut state = animals();
        state.open(1).unwrap();
        assert_eq!(shown(&state), ("B.jpg", "Dog"));
        state.next().unwrap();
        assert_eq!(shown(&state), ("C.jpg", "Fox"));
        state.next().unwrap();
        assert_eq!(shown(&state), ("A.jpg", "Cat"));
        state.previous().unwrap();
        assert_eq!(shown(&state), ("C.jpg", "Fox"));
        state.close();
        assert!(!state.is_visible());
    }

    #[test]
    fn next_and_previous_cancel_out() {
        let mut state = animals();
        for start in 0..state.len() {
            state.open(start).unwrap();
            state.next().unwrap();
            state.previous().unwrap();
            assert_eq!(state.current_index(), start);
            state.previous().unwrap();
            state.next().unwrap();
            assert_eq!(state.current_index(), start);
        }
    }

    #[test]
    fn full_lap_returns_to_start() {
        let mut state = animals();
        let len = state.len();
        for start in 0..len {
            state.open(start).unwrap();
            for _ in 0..len {
                state.next().unwrap();
            }
            assert_eq!(state.current_index(), start);
            for _ in 0..len {
                state.previous().unwrap();
            }
            assert_eq!(state.current_index(), start);
        }
    }

    #[test]
    fn single_image_ring() {
        let mut state = GalleryState::new(vec![ImageRecord::new("only.jpg", "Only")]);
        state.open(0).unwrap();
        state.next().unwrap();
        assert_eq!(state.current_index(), 0);
        state.previous().unwrap();
        assert_eq!(state.current_index(), 0);
    }

    #[test]
    fn out_of_range_open_is_rejected() {
        let mut state = animals();
        state.open(2).unwrap();
        state.close();

        let err = state.open(3).unwrap_err();
        assert_eq!(err, SiteError::IndexOutOfRange { index: 3, len: 3 });
        assert_eq!(state.current_index(), 2);
        assert!(!state.is_visible());

        assert!(state.open(usize::MAX).is_err());
        assert_eq!(state.current_index(), 2);
    }

    #[test]
    fn empty_gallery_is_guarded() {
        let mut state = GalleryState::new(Vec::new());
        assert_eq!(state.open(0).unwrap_err(), SiteError::EmptyGallery);
        assert_eq!(state.next().unwrap_err(), SiteError::EmptyGallery);
        assert_eq!(state.previous().unwrap_err(), SiteError::EmptyGallery);
        assert!(!state.is_visible());
        assert!(state.current().is_none());
    }

    #[test]
    fn keys_are_inert_while_hidden() {
        let mut state = animals();
        state.open(1).unwrap();
        state.close();

        for key in ["Escape", "ArrowLeft", "ArrowRight"] {
            assert_eq!(state.handle_key(key).unwrap(), KeyOutcome::Ignored);
            assert_eq!(state.current_index(), 1);
            assert!(!state.is_visible());
        }
    }

    #[test]
    fn keys_navigate_while_visible() {
        let mut state = animals();
        state.open(0).unwrap();

        assert_eq!(state.handle_key("ArrowLeft").unwrap(), KeyOutcome::Shown(2));
        assert_eq!(state.handle_key("ArrowRight").unwrap(), KeyOutcome::Shown(0));
        assert_eq!(state.handle_key("Enter").unwrap(), KeyOutcome::Ignored);
        assert_eq!(state.handle_key("Escape").unwrap(), KeyOutcome::Closed);
        assert!(!state.is_visible());
        assert_eq!(state.current_index(), 0);
    }
}
