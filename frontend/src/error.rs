use thiserror::Error;
use wasm_bindgen::JsValue;

/// Failures from browser APIs. None of them are fatal to rendering, callers
/// log them and carry on.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum DomError {
    #[error("no global window")]
    NoWindow,
    #[error("window has no document")]
    NoDocument,
    #[error("document has no body")]
    NoBody,
    #[error("element is not mounted: {0}")]
    MissingElement(&'static str),
    #[error("browser call failed: {0}")]
    Js(String),
}

impl From<JsValue> for DomError {
    fn from(value: JsValue) -> Self {
        DomError::Js(value.as_string().unwrap_or_else(|| format!("{:?}", value)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_name_the_missing_piece() {
        assert_eq!(DomError::NoWindow.to_string(), "no global window");
        assert_eq!(
            DomError::MissingElement("carousel track").to_string(),
            "element is not mounted: carousel track"
        );
    }
}
