use thiserror::Error;

pub type Result<T> = std::result::Result<T, SiteError>;

#[derive(Debug, Error)]
pub enum SiteError {
    #[error("no global window")]
    MissingWindow,

    #[error("window has no document")]
    MissingDocument,

    #[error("JS error: {0}")]
    Js(String),

    #[error("invalid site index: {0}")]
    IndexParse(#[from] serde_json::Error),
}

#[cfg(target_arch = "wasm32")]
impl From<wasm_bindgen::JsValue> for SiteError {
    fn from(value: wasm_bindgen::JsValue) -> Self {
        let message = value.as_string().unwrap_or_else(|| format!("{:?}", value));
        SiteError::Js(message)
    }
}
