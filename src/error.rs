use thiserror::Error;
use wasm_bindgen::JsValue;

/// Errors surfaced while configuring or attaching the animation
#[derive(Debug, Error)]
pub enum Error {
    #[error("YAML parse error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("invalid config `{field}`: {reason}")]
    InvalidConfig { field: &'static str, reason: String },

    #[error("browser error: {0}")]
    Dom(String),
}

pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    pub(crate) fn invalid(field: &'static str, reason: impl Into<String>) -> Self {
        Self::InvalidConfig {
            field,
            reason: reason.into(),
        }
    }

    /// Wrap a JS exception thrown by a DOM call
    pub(crate) fn dom(context: &str, value: JsValue) -> Self {
        Self::Dom(format!("{}: {:?}", context, value))
    }
}

impl From<Error> for JsValue {
    fn from(err: Error) -> Self {
        JsValue::from_str(&err.to_string())
    }
}
