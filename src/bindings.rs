use once_cell::sync::Lazy;
use std::sync::Mutex;
use wasm_bindgen::prelude::*;

use crate::session::SessionStore;

static SESSIONS: Lazy<Mutex<SessionStore>> = Lazy::new(|| Mutex::new(SessionStore::new()));

fn with_store<T>(f: impl FnOnce(&mut SessionStore) -> Result<T, JsValue>) -> Result<T, JsValue> {
    let mut store = SESSIONS
        .lock()
        .map_err(|_| JsValue::from_str("session store is poisoned"))?;
    f(&mut store)
}

fn to_js<T: serde::Serialize>(value: &T) -> Result<JsValue, JsValue> {
    serde_wasm_bindgen::to_value(value).map_err(JsValue::from)
}

/// Starts (or restarts) the game bound to `session` and returns the
/// opening state.
#[wasm_bindgen]
pub fn new_game(session: &str) -> Result<JsValue, JsValue> {
    with_store(|store| to_js(&store.start(session).to_game_state()))
}

/// Applies a placement for the session's side to move, or a forced
/// pass when `position` is `-1`, and returns the updated state.
/// Illegal positions leave the game unchanged.
#[wasm_bindgen]
pub fn place(session: &str, position: i32) -> Result<JsValue, JsValue> {
    with_store(|store| {
        let game = store
            .game_mut(session)
            .ok_or_else(|| JsValue::from_str("unknown session"))?;
        game.place(position);
        to_js(&game.to_game_state())
    })
}

/// Returns the session's current state without mutating it.
#[wasm_bindgen]
pub fn game_state(session: &str) -> Result<JsValue, JsValue> {
    with_store(|store| {
        let game = store
            .game(session)
            .ok_or_else(|| JsValue::from_str("unknown session"))?;
        to_js(&game.to_game_state())
    })
}

/// Returns the final standing for the session's game.
#[wasm_bindgen]
pub fn game_result(session: &str) -> Result<JsValue, JsValue> {
    with_store(|store| {
        let game = store
            .game(session)
            .ok_or_else(|| JsValue::from_str("unknown session"))?;
        to_js(&game.to_game_result())
    })
}

/// Releases the game bound to `session`. Returns whether one existed.
#[wasm_bindgen]
pub fn end_game(session: &str) -> bool {
    SESSIONS
        .lock()
        .map(|mut store| store.end(session))
        .unwrap_or(false)
}
