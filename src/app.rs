//! Policy Form Bootstrap
//!
//! Attaches every form behavior to the server-rendered page, once.

use std::fmt;

use wasm_bindgen::prelude::*;
use web_sys::Document;

use crate::config::{FormConfig, CONFIG_ELEMENT_ID};
use crate::dom;
use crate::dropdown::Attachment;
use crate::error::describe_js;

/// What `start` wired up
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InitReport {
    pub digit_inputs: usize,
    pub banners: usize,
    pub sous_types: Attachment,
}

impl fmt::Display for InitReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} digit input(s), {} banner(s), sous-type dropdown ",
            self.digit_inputs, self.banners
        )?;
        match &self.sous_types {
            Attachment::Attached => f.write_str("attached"),
            Attachment::NotAttached(missing) => write!(f, "not attached ({missing})"),
        }
    }
}

/// Attach input sanitizers, banner auto-dismiss and the sous-type loader
pub fn start(document: &Document, config: &FormConfig) -> InitReport {
    let report = InitReport {
        digit_inputs: dom::attach_input_sanitizers(document, &config.digit_input_selector),
        banners: dom::attach_banner_auto_dismiss(document, config),
        sous_types: dom::attach_sous_type_dropdown(document, config),
    };
    log::info!("[APP] {report}");
    report
}

/// Page overrides from `#policy-form-config`, defaults otherwise
pub fn load_config(document: &Document) -> FormConfig {
    let Some(element) = document.get_element_by_id(CONFIG_ELEMENT_ID) else {
        return FormConfig::default();
    };
    let text = element.text_content().unwrap_or_default();
    FormConfig::from_json(&text).unwrap_or_else(|err| {
        log::warn!("[APP] {err}; using defaults");
        FormConfig::default()
    })
}

/// `document.readyState` past "loading" (i.e. "interactive" or "complete")
pub fn is_parsed(ready_state: &str) -> bool {
    ready_state != "loading"
}

/// Run `init` once the document is parsed (now, if it already is)
pub fn run_when_ready(init: impl FnOnce(Document) + 'static) {
    let Some(document) = web_sys::window().and_then(|w| w.document()) else {
        log::error!("[APP] No document; form behaviors not attached");
        return;
    };

    if is_parsed(&document.ready_state()) {
        init(document);
        return;
    }

    let ready = document.clone();
    let on_ready = Closure::once_into_js(move || init(ready));
    if let Err(err) = document.add_event_listener_with_callback("DOMContentLoaded", on_ready.unchecked_ref()) {
        log::error!("[APP] Could not wait for DOMContentLoaded: {}", describe_js(&err));
    }
}
