//! # vimly_wasm
//!
//! Browser entry point for the lead form. Load the generated module on the
//! form page and call `mount()` once the DOM is ready:
//!
//! ```js
//! import init, { mount } from "./vimly_wasm.js";
//! await init();
//! mount(JSON.stringify({ brand: "Vimly" }));
//! ```

pub use self::error::{Error, Result};
mod error;

pub mod dom;
pub mod logging;
pub mod telegram;
pub mod timer;

use std::rc::Rc;

use log::{LevelFilter, debug, info};
use vimly_core::{HostBridge, LeadCaptureHandler, LeadConfig};
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;

use crate::dom::DomLeadForm;
use crate::telegram::{TelegramBridge, js_error_message};
use crate::timer::TimeoutScheduler;

/// Returns the version of the vimly_wasm package.
#[wasm_bindgen]
pub fn version() -> String {
    vimly_core::version().to_string()
}

/// Wire the lead form on the current page to the Telegram host.
///
/// `config` is an optional JSON object with any of `brand`,
/// `defaultBgColor`, `closeDelayMs`, `hapticStyle`.
#[wasm_bindgen]
pub fn mount(config: Option<String>) -> core::result::Result<(), JsValue> {
    mount_form(config.as_deref()).map_err(Into::into)
}

fn mount_form(config: Option<&str>) -> Result<()> {
    if logging::init(LevelFilter::Info).is_err() {
        debug!("Console logger already installed");
    }

    let config = match config {
        Some(raw) => LeadConfig::from_json(raw)?,
        None => LeadConfig::default(),
    };

    let window = web_sys::window().ok_or(Error::NoWindow)?;
    let bridge = TelegramBridge::detect(&window).map(|b| Rc::new(b) as Rc<dyn HostBridge>);
    if bridge.is_none() {
        info!("Telegram WebApp not found; running standalone");
    }

    let view = Rc::new(DomLeadForm::from_window(&window)?);
    let form = view.form().clone();
    let scheduler = Rc::new(TimeoutScheduler::new(window));

    let handler = LeadCaptureHandler::new(config, bridge, view, scheduler);
    handler.initialize();

    let on_submit = Closure::<dyn FnMut(web_sys::Event)>::new(move |event: web_sys::Event| {
        event.prevent_default();
        if let Err(e) = handler.submit() {
            debug!("Submit not completed: {e}");
        }
    });
    form.add_event_listener_with_callback("submit", on_submit.as_ref().unchecked_ref())
        .map_err(|e| Error::Js(js_error_message(&e)))?;
    // The listener lives as long as the page.
    on_submit.forget();

    Ok(())
}
