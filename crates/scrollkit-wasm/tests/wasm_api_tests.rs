#![cfg(target_arch = "wasm32")]
use scrollkit_wasm::{abi_version, Stage};
use serde_json::json;
use serde_wasm_bindgen as swb;
use wasm_bindgen::JsValue;
use wasm_bindgen_test::*;

wasm_bindgen_test_configure!(run_in_browser);

#[wasm_bindgen_test]
fn abi_version_is_stable() {
    assert_eq!(abi_version(), 1);
}

#[wasm_bindgen_test]
fn mounts_on_a_page_without_any_markup() {
    // Every element is optional; a blank document mounts as a pile of no-ops.
    let stage = Stage::new(JsValue::UNDEFINED).expect("mount");
    assert!(!stage.running());
    assert_eq!(stage.wave_time(), 0.0);
}

#[wasm_bindgen_test]
fn start_stop_roundtrip() {
    let stage = Stage::new(JsValue::NULL).expect("mount");
    stage.start();
    // Reduced-motion environments never run the tick; otherwise it must.
    let expected = !matches_reduced_motion();
    assert_eq!(stage.running(), expected);
    stage.start(); // idempotent
    assert_eq!(stage.running(), expected);
    stage.stop();
    assert!(!stage.running());
}

#[wasm_bindgen_test]
fn rejects_invalid_config() {
    let cfg = swb::to_value(&json!({ "wave": { "wavelength": 0.0 } })).unwrap();
    assert!(Stage::new(cfg).is_err());

    let cfg = swb::to_value(&json!({ "wave": { "frame_skip": 0 } })).unwrap();
    assert!(Stage::new(cfg).is_err());
}

#[wasm_bindgen_test]
fn accepts_partial_config_overrides() {
    let cfg = swb::to_value(&json!({ "header": { "desktop_min_width": 900.0 } })).unwrap();
    let stage = Stage::new(cfg).expect("mount");
    assert_eq!(stage.wave_time(), 0.0);
}

fn matches_reduced_motion() -> bool {
    web_sys::window()
        .and_then(|w| w.match_media("(prefers-reduced-motion: reduce)").ok().flatten())
        .map_or(false, |m| m.matches())
}
