//! Browser tests for the web-sys adapters.
//!
//! Run with `wasm-pack test --headless --firefox`.

#![cfg(target_arch = "wasm32")]

use policy_form_ui::config::FormConfig;
use policy_form_ui::dom::{attach_input_sanitizers, attach_sous_type_dropdown, SelectOptions};
use policy_form_ui::dropdown::{Attachment, ChildSelect, MissingElement};
use policy_form_ui::models::ChildOption;
use wasm_bindgen::JsCast;
use wasm_bindgen_test::*;
use web_sys::{Document, Element, Event, HtmlInputElement, HtmlOptionElement, HtmlSelectElement};

wasm_bindgen_test_configure!(run_in_browser);

const PLACEHOLDER: &str = "Select Sous Type Bien";

fn document() -> Document {
    web_sys::window().unwrap().document().unwrap()
}

fn mount<T: JsCast>(tag: &str, id: &str) -> T {
    let element = document().create_element(tag).unwrap();
    element.set_id(id);
    document().body().unwrap().append_child(&element).unwrap();
    element.dyn_into::<T>().unwrap()
}

fn add_option(select: &HtmlSelectElement, value: &str, label: &str) {
    let option = HtmlOptionElement::new_with_text_and_value(label, value).unwrap();
    select.append_child(&option).unwrap();
}

fn options_of(select: &HtmlSelectElement) -> Vec<(String, String)> {
    (0..select.length())
        .filter_map(|i| select.item(i))
        .filter_map(|el| el.dyn_into::<HtmlOptionElement>().ok())
        .map(|o| (o.value(), o.text()))
        .collect()
}

fn unmount(element: &Element) {
    element.remove();
}

#[wasm_bindgen_test]
fn test_select_options_replaced_in_order() {
    let select: HtmlSelectElement = mount("select", "web-child-replace");
    add_option(&select, "", PLACEHOLDER);
    add_option(&select, "4", "Loft");

    SelectOptions(select.clone())
        .replace_options(
            PLACEHOLDER,
            &[ChildOption::new("1", "Studio"), ChildOption::new("2", "Duplex")],
        )
        .unwrap();

    assert_eq!(
        options_of(&select),
        vec![
            (String::new(), PLACEHOLDER.to_string()),
            ("1".to_string(), "Studio".to_string()),
            ("2".to_string(), "Duplex".to_string()),
        ]
    );
    unmount(&select);
}

#[wasm_bindgen_test]
fn test_phone_input_keeps_digits() {
    let input: HtmlInputElement = mount("input", "web-phone");
    input.set_type("tel");
    input.set_class_name("web-digits");

    assert_eq!(attach_input_sanitizers(&document(), "input.web-digits"), 1);

    input.set_value("06-12 ab");
    input.dispatch_event(&Event::new("input").unwrap()).unwrap();
    assert_eq!(input.value(), "0612");
    unmount(&input);
}

#[wasm_bindgen_test]
fn test_dropdown_not_attached_without_parent() {
    let child: HtmlSelectElement = mount("select", "web-child-alone");
    let config = FormConfig {
        parent_select_id: "web-parent-missing".to_string(),
        child_select_id: "web-child-alone".to_string(),
        ..FormConfig::default()
    };

    assert_eq!(
        attach_sous_type_dropdown(&document(), &config),
        Attachment::NotAttached(MissingElement("web-parent-missing".to_string()))
    );
    unmount(&child);
}

#[wasm_bindgen_test]
fn test_clearing_parent_resets_child() {
    let parent: HtmlSelectElement = mount("select", "web-parent");
    add_option(&parent, "", "Select Type Bien");
    add_option(&parent, "5", "Appartement");
    let child: HtmlSelectElement = mount("select", "web-child");
    add_option(&child, "", PLACEHOLDER);
    add_option(&child, "1", "Studio");

    let config = FormConfig {
        parent_select_id: "web-parent".to_string(),
        child_select_id: "web-child".to_string(),
        ..FormConfig::default()
    };
    assert_eq!(attach_sous_type_dropdown(&document(), &config), Attachment::Attached);

    parent.set_value("");
    parent.dispatch_event(&Event::new("change").unwrap()).unwrap();
    assert_eq!(options_of(&child), vec![(String::new(), PLACEHOLDER.to_string())]);

    unmount(&parent);
    unmount(&child);
}
