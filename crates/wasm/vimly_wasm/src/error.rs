use thiserror::Error;
use wasm_bindgen::JsValue;

pub type Result<T> = core::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    #[error("No global window")]
    NoWindow,

    #[error("No document on window")]
    NoDocument,

    #[error("Document has no body")]
    NoBody,

    #[error("Missing element #{0}")]
    MissingElement(&'static str),

    #[error("Element #{0} is not the expected element type")]
    WrongElement(&'static str),

    #[error("Config::{}", .0)]
    Config(#[from] vimly_core::ConfigError),

    #[error("Js::{}", .0)]
    Js(String),
}

impl From<Error> for JsValue {
    fn from(e: Error) -> Self {
        js_sys::Error::new(&e.to_string()).into()
    }
}
