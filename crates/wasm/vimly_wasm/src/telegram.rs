//! `window.Telegram.WebApp` as a [`HostBridge`].

use js_sys::Reflect;
use log::error;
use vimly_core::{BridgeError, HostBridge, ImpactStyle};
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;

#[wasm_bindgen]
extern "C" {
    pub type WebApp;

    #[wasm_bindgen(method)]
    fn expand(this: &WebApp);

    #[wasm_bindgen(method)]
    fn ready(this: &WebApp);

    #[wasm_bindgen(method)]
    fn close(this: &WebApp);

    #[wasm_bindgen(method, catch, js_name = sendData)]
    fn send_data(this: &WebApp, data: &str) -> Result<(), JsValue>;

    #[wasm_bindgen(method, getter = MainButton)]
    fn main_button(this: &WebApp) -> MainButton;

    #[wasm_bindgen(method, getter = themeParams)]
    fn theme_params(this: &WebApp) -> Option<ThemeParams>;

    #[wasm_bindgen(method, getter = HapticFeedback)]
    fn haptic_feedback(this: &WebApp) -> Option<HapticFeedback>;

    pub type MainButton;

    #[wasm_bindgen(method)]
    fn hide(this: &MainButton);

    pub type ThemeParams;

    #[wasm_bindgen(method, getter)]
    fn bg_color(this: &ThemeParams) -> Option<String>;

    pub type HapticFeedback;

    #[wasm_bindgen(method, catch, js_name = impactOccurred)]
    fn impact_occurred(this: &HapticFeedback, style: &str) -> Result<(), JsValue>;
}

/// Host bridge backed by the Telegram WebApp script.
pub struct TelegramBridge {
    web_app: WebApp,
}

impl TelegramBridge {
    /// Look up `window.Telegram?.WebApp`. `None` when the page is opened
    /// outside Telegram or the WebApp script is missing.
    pub fn detect(window: &web_sys::Window) -> Option<Self> {
        let telegram = present(Reflect::get(window, &JsValue::from_str("Telegram")).ok()?)?;
        let web_app = present(Reflect::get(&telegram, &JsValue::from_str("WebApp")).ok()?)?;
        Some(Self {
            web_app: web_app.unchecked_into(),
        })
    }
}

fn present(value: JsValue) -> Option<JsValue> {
    (!value.is_undefined() && !value.is_null()).then_some(value)
}

/// Best-effort text for a thrown JS value.
pub(crate) fn js_error_message(value: &JsValue) -> String {
    value
        .dyn_ref::<js_sys::Error>()
        .map(|e| String::from(e.message()))
        .or_else(|| value.as_string())
        .unwrap_or_else(|| format!("{value:?}"))
}

impl HostBridge for TelegramBridge {
    fn expand(&self) {
        self.web_app.expand();
    }

    fn ready(&self) {
        self.web_app.ready();
    }

    fn hide_main_button(&self) {
        self.web_app.main_button().hide();
    }

    fn theme_bg_color(&self) -> Option<String> {
        self.web_app.theme_params()?.bg_color()
    }

    fn send_data(&self, data: &str) -> Result<(), BridgeError> {
        self.web_app
            .send_data(data)
            .map_err(|e| BridgeError(js_error_message(&e)))
    }

    fn haptic_impact(&self, style: ImpactStyle) -> bool {
        let Some(haptics) = self.web_app.haptic_feedback() else {
            return false;
        };
        match haptics.impact_occurred(style.as_str()) {
            Ok(()) => true,
            Err(e) => {
                error!("Haptic feedback failed: {}", js_error_message(&e));
                false
            }
        }
    }

    fn close(&self) {
        self.web_app.close();
    }
}
