// Browser-only tests for the localStorage backend (wasm-pack test --headless).
#![cfg(target_arch = "wasm32")]

use vergence_core::*;
use vergence_web::storage::LocalStorage;
use wasm_bindgen_test::*;

wasm_bindgen_test_configure!(run_in_browser);

fn clear() {
    if let Some(storage) = web_sys::window().and_then(|w| w.local_storage().ok().flatten()) {
        _ = storage.remove_item(SETTINGS_KEY);
    }
}

#[wasm_bindgen_test]
fn local_storage_round_trip() {
    clear();
    let storage = LocalStorage::from_window();
    assert!(storage.is_available());
    let store = SettingsStore::new(storage);
    assert_eq!(store.load(), DEFAULT_SETTINGS);

    let s = store.increase_size();
    assert_eq!(store.load(), s);
    clear();
}

#[wasm_bindgen_test]
fn local_storage_malformed_value_falls_back() {
    clear();
    let storage = LocalStorage::from_window();
    storage.set_item(SETTINGS_KEY, "{oops").unwrap();
    assert_eq!(SettingsStore::new(storage).load(), DEFAULT_SETTINGS);
    clear();
}
