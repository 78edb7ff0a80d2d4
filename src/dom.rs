//! DOM Adapters
//!
//! web-sys implementations of the capabilities used by the form behaviors,
//! and the functions that wire them to elements already on the page.

use std::rc::Rc;
use std::time::Duration;

use gloo_timers::callback::Timeout;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::spawn_local;
use web_sys::{Document, DocumentFragment, Element, Event, HtmlInputElement, HtmlOptionElement, HtmlSelectElement};

use crate::alerts::{schedule_auto_dismiss, BannerDismisser, Scheduler};
use crate::api::FetchSousTypes;
use crate::config::FormConfig;
use crate::dropdown::{require_pair, Attachment, ChildSelect, DependentDropdown, MissingElement};
use crate::error::{describe_js, FormError};
use crate::models::{ChildOption, ParentSelection};
use crate::sanitize::sanitized_update;

// ========================
// Bootstrap Alert binding
// ========================

#[wasm_bindgen]
extern "C" {
    /// `bootstrap.Alert` from the page's Bootstrap bundle
    #[wasm_bindgen(js_namespace = bootstrap)]
    type Alert;

    #[wasm_bindgen(constructor, js_namespace = bootstrap, catch)]
    fn new(element: &Element) -> Result<Alert, JsValue>;

    #[wasm_bindgen(method, js_namespace = bootstrap, catch)]
    fn close(this: &Alert) -> Result<(), JsValue>;
}

/// Closes banners through Bootstrap's Alert widget
#[derive(Debug, Default, Clone, Copy)]
pub struct BootstrapAlerts;

impl BannerDismisser for BootstrapAlerts {
    type Banner = Element;

    fn dismiss(&self, banner: &Element) -> Result<(), FormError> {
        // already closed and removed by the user
        if !banner.is_connected() {
            return Ok(());
        }
        let alert = Alert::new(banner).map_err(FormError::widget)?;
        alert.close().map_err(FormError::widget)
    }
}

// ========================
// Timers
// ========================

/// `setTimeout` through gloo-timers; timers are never cancelled
#[derive(Debug, Default, Clone, Copy)]
pub struct GlooScheduler;

impl Scheduler for GlooScheduler {
    fn schedule_once(&self, delay: Duration, callback: Box<dyn FnOnce()>) {
        let millis = u32::try_from(delay.as_millis()).unwrap_or(u32::MAX);
        Timeout::new(millis, callback).forget();
    }
}

// ========================
// Dependent selector
// ========================

/// `<select>` whose options are rebuilt from fetched sous-types
#[derive(Debug, Clone)]
pub struct SelectOptions(pub HtmlSelectElement);

impl ChildSelect for SelectOptions {
    fn replace_options(&self, placeholder: &str, options: &[ChildOption]) -> Result<(), FormError> {
        // detached until complete, so a failure leaves the old options in place
        let rebuilt = DocumentFragment::new().map_err(FormError::dom)?;
        let placeholder = HtmlOptionElement::new_with_text_and_value(placeholder, "").map_err(FormError::dom)?;
        rebuilt.append_child(&placeholder).map_err(FormError::dom)?;
        for option in options {
            let element = HtmlOptionElement::new_with_text_and_value(&option.label, &option.id)
                .map_err(FormError::dom)?;
            rebuilt.append_child(&element).map_err(FormError::dom)?;
        }

        self.0.set_length(0);
        self.0.append_child(&rebuilt).map_err(FormError::dom)?;
        Ok(())
    }
}

// ========================
// Wiring
// ========================

fn query_all<T: JsCast>(document: &Document, selector: &str) -> Vec<T> {
    let nodes = match document.query_selector_all(selector) {
        Ok(nodes) => nodes,
        Err(err) => {
            log::warn!("[APP] Bad selector {selector:?}: {}", describe_js(&err));
            return Vec::new();
        }
    };
    (0..nodes.length())
        .filter_map(|i| nodes.item(i))
        .filter_map(|node| node.dyn_into::<T>().ok())
        .collect()
}

/// Digit-only filtering on every matching input present now; returns how many
pub fn attach_input_sanitizers(document: &Document, selector: &str) -> usize {
    let inputs: Vec<HtmlInputElement> = query_all(document, selector);
    for input in &inputs {
        let field = input.clone();
        let on_input = Closure::<dyn FnMut(Event)>::new(move |_ev: Event| {
            if let Some(clean) = sanitized_update(&field.value()) {
                field.set_value(&clean);
            }
        });
        if let Err(err) = input.add_event_listener_with_callback("input", on_input.as_ref().unchecked_ref()) {
            log::warn!("[APP] Could not watch input: {}", describe_js(&err));
        }
        on_input.forget();
    }
    inputs.len()
}

/// Banners present now
pub fn find_banners(document: &Document, selector: &str) -> Vec<Element> {
    query_all(document, selector)
}

/// Wire the TypeBien -> SousTypeBien loader if both selectors are on the page
pub fn attach_sous_type_dropdown(document: &Document, config: &FormConfig) -> Attachment {
    let select_by_id = |id: &str| {
        document
            .get_element_by_id(id)
            .and_then(|el| el.dyn_into::<HtmlSelectElement>().ok())
    };
    let (parent, child) = match require_pair(
        select_by_id(&config.parent_select_id),
        select_by_id(&config.child_select_id),
        &config.parent_select_id,
        &config.child_select_id,
    ) {
        Ok(pair) => pair,
        Err(missing) => return Attachment::NotAttached(missing),
    };

    let loader = DependentDropdown::new(
        SelectOptions(child),
        FetchSousTypes::new(config.sous_types_endpoint.clone()),
        config.placeholder_label.clone(),
        config.stale_policy,
    );

    let source = parent.clone();
    let on_change = Closure::<dyn FnMut(Event)>::new(move |_ev: Event| {
        if let Some(lookup) = loader.on_parent_change(ParentSelection::new(source.value())) {
            spawn_local(async move {
                // outcome is already logged by the loader
                let _ = lookup.await;
            });
        }
    });
    if let Err(err) = parent.add_event_listener_with_callback("change", on_change.as_ref().unchecked_ref()) {
        log::warn!("[DROPDOWN] Could not watch #{}: {}", config.parent_select_id, describe_js(&err));
        return Attachment::NotAttached(MissingElement(config.parent_select_id.clone()));
    }
    on_change.forget();
    Attachment::Attached
}

/// Close every banner after the configured delay; returns how many
pub fn attach_banner_auto_dismiss(document: &Document, config: &FormConfig) -> usize {
    schedule_auto_dismiss(
        find_banners(document, &config.banner_selector),
        config.banner_dismiss_delay(),
        &GlooScheduler,
        Rc::new(BootstrapAlerts),
    )
}
