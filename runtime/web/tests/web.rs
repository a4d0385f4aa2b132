//! Browser tests for the web runtime.
//! Run with: wasm-pack test --headless --firefox runtime/web

#![cfg(target_arch = "wasm32")]

use p5rs_core::{Document, MountPoint};
use p5rs_web::*;
use wasm_bindgen_test::*;

wasm_bindgen_test_configure!(run_in_browser);

fn add_container(id: &str, content: &str) -> web_sys::Element {
    let document = web_sys::window().unwrap().document().unwrap();
    let element = document.create_element("div").unwrap();
    element.set_id(id);
    element.set_inner_html(content);
    document.body().unwrap().append_child(&element).unwrap();
    element
}

#[wasm_bindgen_test]
fn test_missing_mount_leaves_page_alone() {
    let element = add_container("present", "<p>keep</p>");
    let err = run("#absent", vec![setup(|_| {}), draw(|_| {})]).unwrap_err();
    assert_eq!(err, SketchError::MountNotFound { selector: "#absent".into() });
    assert_eq!(element.inner_html(), "<p>keep</p>");
}

#[wasm_bindgen_test]
fn test_query_and_clear() {
    add_container("target", "<span>old</span>");
    let document = WebDocument::current().unwrap();
    let mount = document.query("#target").unwrap().unwrap();
    mount.clear();
    mount.clear();
    assert_eq!(mount.element().inner_html(), "");
}

#[wasm_bindgen_test]
fn test_invalid_selector_is_host_error() {
    let document = WebDocument::current().unwrap();
    assert!(matches!(document.query("##"), Err(SketchError::Host { .. })));
}

#[wasm_bindgen_test]
fn test_without_p5_reports_unavailable() {
    if P5Library::is_loaded() {
        return;
    }
    add_container("no-lib", "");
    let err = run("#no-lib", vec![setup(|_| {}), draw(|_| {})]).unwrap_err();
    assert!(matches!(err, SketchError::LibraryUnavailable { .. }));
}

#[wasm_bindgen_test]
async fn test_sleep_resolves() {
    let before = js_sys::Date::now();
    sleep(std::time::Duration::from_millis(20)).await;
    assert!(js_sys::Date::now() - before >= 15.0);
}

#[wasm_bindgen_test]
async fn test_spawned_loader_skips_script_without_mount() {
    let url = "https://example.invalid/p5-spawn-test.js";
    spawn_with_loader(
        "#spawn-absent",
        vec![setup(|_| {}), draw(|_| {})],
        LoadConfig::default().with_url(url),
    );
    sleep(std::time::Duration::from_millis(20)).await;

    let document = web_sys::window().unwrap().document().unwrap();
    let script = document
        .query_selector(&format!("script[src=\"{url}\"]"))
        .unwrap();
    assert!(script.is_none());
}
