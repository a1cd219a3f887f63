#![cfg(target_arch = "wasm32")]

use js_sys::{Array, Reflect};
use othello_engine::api::OthelloEngine;
use wasm_bindgen::JsValue;
use wasm_bindgen_test::*;

fn field(value: &JsValue, name: &str) -> JsValue {
    Reflect::get(value, &JsValue::from_str(name)).unwrap()
}

#[wasm_bindgen_test]
fn default_engine_starts_at_opening() {
    let engine = OthelloEngine::new(JsValue::UNDEFINED).unwrap();
    let state = engine.state().unwrap();

    assert_eq!(field(&state, "black_count").as_f64(), Some(2.0));
    assert_eq!(field(&state, "current_player").as_f64(), Some(1.0));
    assert_eq!(Array::from(&field(&state, "legal_moves")).length(), 4);
    assert!(!engine.is_terminal());
}

#[wasm_bindgen_test]
fn illegal_place_is_an_error_not_a_panic() {
    let mut engine = OthelloEngine::new(JsValue::NULL).unwrap();

    let err = engine.place(0, 0).unwrap_err();

    assert!(err.as_string().unwrap().contains("illegal move"));
}

#[wasm_bindgen_test]
fn place_then_ai_move_round() {
    let mut engine = OthelloEngine::new(JsValue::UNDEFINED).unwrap();

    let state = engine.place(2, 3).unwrap();
    assert_eq!(field(&state, "black_count").as_f64(), Some(4.0));

    let outcome = engine.advance().unwrap();
    assert_eq!(field(&outcome, "kind").as_string().as_deref(), Some("continue"));

    let mv = engine.ai_move().unwrap();
    assert!(field(&mv, "row").as_f64().is_some());
    assert!(field(&engine.last_search().unwrap(), "candidates").as_f64().is_some());
}

#[wasm_bindgen_test]
fn bad_player_code_is_rejected() {
    let engine = OthelloEngine::new(JsValue::UNDEFINED).unwrap();

    assert!(engine.legal_moves(0).is_err());
    assert!(engine.evaluate(3).is_err());
}

#[wasm_bindgen_test]
fn best_move_suggests_without_playing() {
    let engine = OthelloEngine::new(JsValue::UNDEFINED).unwrap();

    let report = engine.best_move(1).unwrap();

    assert_eq!(field(&field(&report, "position"), "row").as_f64(), Some(2.0));
    assert_eq!(field(&report, "candidates").as_f64(), Some(4.0));
    let state = engine.state().unwrap();
    assert_eq!(field(&state, "black_count").as_f64(), Some(2.0));
    assert!(engine.best_move(0).is_err());
}
