// Copyright © SixtyFPS GmbH <info@slint.dev>
// SPDX-License-Identifier: MIT

//! Browser-side tests of the page behaviors.
//!
//! Run with `wasm-pack test --headless --firefox api/wasm-frontend`. The
//! harness page has no Bootstrap bundle, so widget calls stay inert; all
//! assertions are on the DOM the behaviors produce.

#![cfg(target_arch = "wasm32")]

use std::cell::Cell;
use std::rc::Rc;

use wasm_bindgen::JsCast;
use wasm_bindgen_test::*;
use web_sys::{Document, Element, HtmlElement, HtmlFormElement, HtmlInputElement};

use biblio_wasm_frontend::overdue::OverdueRefresher;
use biblio_wasm_frontend::{attach, attach_ajax_form, dom, search, show_toast, AjaxSuccessCallback};

wasm_bindgen_test_configure!(run_in_browser);

fn document() -> Document {
    dom::document().unwrap()
}

fn body() -> HtmlElement {
    document().body().unwrap()
}

fn fire(target: &web_sys::EventTarget, name: &str) {
    let event = web_sys::Event::new(name).unwrap();
    target.dispatch_event(&event).unwrap();
}

fn remove_toast_container() {
    if let Some(container) = document().query_selector(".toast-container").unwrap() {
        container.remove();
    }
}

async fn sleep(ms: i32) {
    let promise = js_sys::Promise::new(&mut |resolve, _reject| {
        web_sys::window()
            .unwrap()
            .set_timeout_with_callback_and_timeout_and_arguments_0(&resolve, ms)
            .unwrap();
    });
    wasm_bindgen_futures::JsFuture::from(promise).await.unwrap();
}

#[wasm_bindgen_test]
fn search_decorator_adds_and_removes_the_clear_button() {
    let document = document();
    let wrapper = document.create_element("div").unwrap();
    body().append_child(&wrapper).unwrap();
    let input: HtmlInputElement =
        document.create_element("input").unwrap().dyn_into().unwrap();
    input.set_attribute("name", "q").unwrap();
    wrapper.append_child(&input).unwrap();

    let boxes = search::attach(&document).unwrap();
    assert!(!boxes.is_empty());

    // icon immediately, clear button only once there is text
    assert!(wrapper.query_selector(".search-icon").unwrap().is_some());
    assert!(wrapper.query_selector(".clear-search").unwrap().is_none());

    input.set_value("dune");
    fire(input.as_ref(), "input");
    assert_eq!(wrapper.query_selector_all(".clear-search").unwrap().length(), 1);

    // a second keystroke must not add a second button or icon
    input.set_value("duna");
    fire(input.as_ref(), "input");
    assert_eq!(wrapper.query_selector_all(".clear-search").unwrap().length(), 1);
    assert_eq!(wrapper.query_selector_all(".search-icon").unwrap().length(), 1);

    let clear: HtmlElement =
        wrapper.query_selector(".clear-search").unwrap().unwrap().dyn_into().unwrap();
    clear.click();

    assert_eq!(input.value(), "");
    assert!(wrapper.query_selector(".clear-search").unwrap().is_none());
    let active = document.active_element().unwrap();
    assert!(active.is_same_node(Some(input.as_ref())));

    wrapper.remove();
}

#[wasm_bindgen_test]
fn toast_container_is_created_once() {
    remove_toast_container();

    show_toast("Primero", None).unwrap();
    show_toast("Segundo", Some("success".into())).unwrap();

    let document = document();
    let containers = document.query_selector_all(".toast-container").unwrap();
    assert_eq!(containers.length(), 1);

    let container: Element = containers.item(0).unwrap().dyn_into().unwrap();
    assert_eq!(container.query_selector_all(".toast").unwrap().length(), 2);
    assert!(container.query_selector(".toast.bg-success").unwrap().is_some());
    assert!(container.query_selector(".toast.bg-info").unwrap().is_some());

    container.remove();
}

#[wasm_bindgen_test]
fn validator_styles_fields_and_rejects_bad_isbns() {
    let document = document();
    let form: HtmlFormElement = document.create_element("form").unwrap().dyn_into().unwrap();
    form.set_attribute("novalidate", "").unwrap();

    let title: HtmlInputElement =
        document.create_element("input").unwrap().dyn_into().unwrap();
    title.set_attribute("required", "").unwrap();
    form.append_child(&title).unwrap();

    let isbn: HtmlInputElement =
        document.create_element("input").unwrap().dyn_into().unwrap();
    isbn.set_attribute("name", "isbn").unwrap();
    form.append_child(&isbn).unwrap();

    body().append_child(&form).unwrap();
    let _behaviors = attach().unwrap();

    // blur on an empty required field marks it invalid, filling it flips the class
    fire(title.as_ref(), "blur");
    assert!(title.class_list().contains("is-invalid"));
    title.set_value("El Aleph");
    fire(title.as_ref(), "blur");
    assert!(title.class_list().contains("is-valid"));
    assert!(!title.class_list().contains("is-invalid"));

    // five digits cannot be an ISBN
    isbn.set_value("12345");
    fire(isbn.as_ref(), "input");
    assert!(!isbn.check_validity());
    assert_eq!(isbn.validation_message().unwrap(), "El ISBN debe tener 10 o 13 dígitos");

    isbn.set_value("978-0-306-40615-7");
    fire(isbn.as_ref(), "input");
    assert!(isbn.check_validity());

    isbn.set_value("");
    fire(isbn.as_ref(), "input");
    assert!(isbn.check_validity());

    // a failed submit leaves the form in the was-validated state
    title.set_value("");
    fire(form.as_ref(), "submit");
    assert!(form.class_list().contains("was-validated"));

    form.remove();
}

#[wasm_bindgen_test]
fn rejected_confirmation_prevents_the_submission() {
    let document = document();
    let window = web_sys::window().unwrap();

    // answer "no" to every prompt
    js_sys::Reflect::set(
        &window,
        &"confirm".into(),
        &js_sys::Function::new_with_args("message", "return false;"),
    )
    .unwrap();

    let form: HtmlFormElement = document.create_element("form").unwrap().dyn_into().unwrap();
    form.set_attribute("action", "/loans/1/delete").unwrap();
    form.set_attribute("method", "post").unwrap();
    let button: HtmlElement = document.create_element("button").unwrap().dyn_into().unwrap();
    button.set_attribute("type", "submit").unwrap();
    button.set_class_name("btn btn-danger");
    form.append_child(&button).unwrap();
    body().append_child(&form).unwrap();

    let _behaviors = attach().unwrap();

    // registered after the guard, so it observes the guard's decision
    let prevented = Rc::new(Cell::new(false));
    let seen = prevented.clone();
    dom::add_event_listener::<web_sys::Event>(button.as_ref(), "click", move |event| {
        seen.set(event.default_prevented());
    })
    .unwrap();

    button.click();
    assert!(prevented.get());

    form.remove();
}

#[wasm_bindgen_test]
fn overdue_badges_recolor_and_malformed_dates_are_skipped() {
    let document = document();

    let due_soon = document.create_element("span").unwrap();
    let due_ms = js_sys::Date::now() as i64 + 36 * 3_600 * 1_000;
    let stamp = chrono::DateTime::from_timestamp_millis(due_ms)
        .unwrap()
        .format("%Y-%m-%dT%H:%M:%S")
        .to_string();
    due_soon.set_attribute("data-due-date", &stamp).unwrap();
    body().append_child(&due_soon).unwrap();

    let expired = document.create_element("span").unwrap();
    let past_ms = js_sys::Date::now() as i64 - 3 * 24 * 3_600 * 1_000;
    let stamp = chrono::DateTime::from_timestamp_millis(past_ms)
        .unwrap()
        .format("%Y-%m-%dT%H:%M:%S")
        .to_string();
    expired.set_attribute("data-due-date", &stamp).unwrap();
    body().append_child(&expired).unwrap();

    let malformed = document.create_element("span").unwrap();
    malformed.set_attribute("data-due-date", "mañana").unwrap();
    malformed.set_text_content(Some("pendiente"));
    body().append_child(&malformed).unwrap();

    let mut refresher = OverdueRefresher::new(&document).unwrap();
    assert_eq!(refresher.badge_count(), 2);

    refresher.refresh_now();
    assert_eq!(due_soon.text_content().unwrap(), "2 días restantes");
    assert!(due_soon.class_list().contains("text-warning"));
    assert_eq!(expired.text_content().unwrap(), "Vencido");
    assert!(expired.class_list().contains("text-danger"));
    assert_eq!(malformed.text_content().unwrap(), "pendiente");

    refresher.start().unwrap();
    assert!(refresher.is_running());
    refresher.stop();
    assert!(!refresher.is_running());

    due_soon.remove();
    expired.remove();
    malformed.remove();
}

#[wasm_bindgen_test]
async fn successful_ajax_submission_toasts_and_invokes_the_callback() {
    remove_toast_container();

    let document = document();
    let window = web_sys::window().unwrap();

    // canned server answer instead of a live endpoint
    let real_fetch = js_sys::Reflect::get(&window, &"fetch".into()).unwrap();
    js_sys::Reflect::set(
        &window,
        &"fetch".into(),
        &js_sys::Function::new_with_args(
            "request",
            r#"return Promise.resolve(new Response('{"success":true,"message":"Guardado"}'));"#,
        ),
    )
    .unwrap();

    let form: HtmlFormElement = document.create_element("form").unwrap().dyn_into().unwrap();
    form.set_id("ajax-success-fixture");
    form.set_attribute("action", "/loans").unwrap();
    form.set_attribute("method", "post").unwrap();
    let button: web_sys::HtmlButtonElement =
        document.create_element("button").unwrap().dyn_into().unwrap();
    button.set_attribute("type", "submit").unwrap();
    form.append_child(&button).unwrap();
    body().append_child(&form).unwrap();

    let on_success: AjaxSuccessCallback = wasm_bindgen::JsValue::from(
        js_sys::Function::new_with_args("data", "window.__last_message = data.message;"),
    )
    .unchecked_into();
    attach_ajax_form("#ajax-success-fixture", Some(on_success)).unwrap();

    fire(form.as_ref(), "submit");
    assert!(button.disabled());
    sleep(200).await;

    assert!(!button.disabled());
    let container = document.query_selector(".toast-container").unwrap().unwrap();
    assert!(container.query_selector(".toast.bg-success").unwrap().is_some());
    let seen = js_sys::Reflect::get(&window, &"__last_message".into()).unwrap();
    assert_eq!(seen.as_string().as_deref(), Some("Guardado"));

    js_sys::Reflect::set(&window, &"fetch".into(), &real_fetch).unwrap();
    form.remove();
    remove_toast_container();
}

#[wasm_bindgen_test]
async fn failed_ajax_submission_toasts_and_reenables_the_button() {
    remove_toast_container();

    let document = document();
    let form: HtmlFormElement = document.create_element("form").unwrap().dyn_into().unwrap();
    form.set_id("ajax-fixture");
    form.set_attribute("action", "/definitely-not-an-endpoint").unwrap();
    form.set_attribute("method", "post").unwrap();
    let button: web_sys::HtmlButtonElement =
        document.create_element("button").unwrap().dyn_into().unwrap();
    button.set_attribute("type", "submit").unwrap();
    form.append_child(&button).unwrap();
    body().append_child(&form).unwrap();

    attach_ajax_form("#ajax-fixture", None).unwrap();
    fire(form.as_ref(), "submit");

    assert!(button.disabled());

    // 404 page is not the JSON envelope, so this lands on the error path
    sleep(1_000).await;

    assert!(!button.disabled());
    assert!(!button.class_list().contains("loading"));

    let bodies = document.query_selector_all(".toast-body").unwrap();
    let mut found = false;
    for i in 0..bodies.length() {
        if bodies.item(i).and_then(|node| node.text_content()).as_deref()
            == Some("Error de conexión")
        {
            found = true;
        }
    }
    assert!(found);

    form.remove();
    remove_toast_container();
}
