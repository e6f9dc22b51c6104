use thiserror::Error;
use wasm_bindgen::JsValue;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SiteError {
    #[error("required element `{0}` is missing from the document")]
    MissingElement(&'static str),

    #[error("gallery has no images")]
    EmptyGallery,

    #[error("image index {index} is out of range for a gallery of {len}")]
    IndexOutOfRange { index: usize, len: usize },

    #[error("browser call failed: {0}")]
    Dom(String),
}

impl From<JsValue> for SiteError {
    fn from(value: JsValue) -> Self {
        SiteError::Dom(value.as_string().unwrap_or_else(|| format!("{:?}", value)))
    }
}

pub type Result<T> = std::result::Result<T, SiteError>;

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn messages_name_the_problem() {
        assert_eq!(
            SiteError::MissingElement("#lightbox").to_string(),
            "required element `#lightbox` is missing from the document"
        );
        assert_eq!(
            SiteError::IndexOutOfRange { index: 7, len: 3 }.to_string(),
            "image index 7 is out of range for a gallery of 3"
        );
    }
}
