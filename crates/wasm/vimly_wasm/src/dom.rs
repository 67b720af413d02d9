//! The lead form as it exists in the page DOM.

use js_sys::Reflect;
use log::warn;
use vimly_core::{LeadField, LeadFormView};
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Document, Element, HtmlButtonElement, HtmlElement, Window};

use crate::error::{Error, Result};
use crate::telegram::js_error_message;

/// Id of the `<form>` element.
pub const FORM_ID: &str = "quiz";

/// Id of the submit button.
pub const SUBMIT_ID: &str = "send";

/// Elements resolved once at mount time and held for the page lifetime.
pub struct DomLeadForm {
    window: Window,
    form: Element,
    company: Element,
    task: Element,
    contact: Element,
    submit: HtmlButtonElement,
    body: HtmlElement,
}

impl DomLeadForm {
    pub fn from_window(window: &Window) -> Result<Self> {
        let document = window.document().ok_or(Error::NoDocument)?;

        let submit = element(&document, SUBMIT_ID)?
            .dyn_into::<HtmlButtonElement>()
            .map_err(|_| Error::WrongElement(SUBMIT_ID))?;

        Ok(Self {
            window: window.clone(),
            form: element(&document, FORM_ID)?,
            company: element(&document, LeadField::Company.id())?,
            task: element(&document, LeadField::Task.id())?,
            contact: element(&document, LeadField::Contact.id())?,
            submit,
            body: document.body().ok_or(Error::NoBody)?,
        })
    }

    pub fn form(&self) -> &Element {
        &self.form
    }

    fn field(&self, field: LeadField) -> &Element {
        match field {
            LeadField::Company => &self.company,
            LeadField::Task => &self.task,
            LeadField::Contact => &self.contact,
        }
    }
}

fn element(document: &Document, id: &'static str) -> Result<Element> {
    document
        .get_element_by_id(id)
        .ok_or(Error::MissingElement(id))
}

impl LeadFormView for DomLeadForm {
    // Read `.value` reflectively so both <input> and <textarea> work.
    fn field_value(&self, field: LeadField) -> String {
        Reflect::get(self.field(field), &JsValue::from_str("value"))
            .ok()
            .and_then(|v| v.as_string())
            .unwrap_or_default()
    }

    fn set_background_color(&self, color: &str) {
        if let Err(e) = self.body.style().set_property("background-color", color) {
            warn!("Failed to set background color: {}", js_error_message(&e));
        }
    }

    fn alert(&self, message: &str) {
        if let Err(e) = self.window.alert_with_message(message) {
            warn!("Failed to show alert: {}", js_error_message(&e));
        }
    }

    fn mark_sent(&self, label: &str) {
        self.submit.set_text_content(Some(label));
        self.submit.set_disabled(true);
    }
}
