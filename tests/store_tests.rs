// Host-side tests for the persisted settings store.

use vergence_core::*;

fn store_with(raw: &str) -> SettingsStore<MemoryStorage> {
    SettingsStore::new(MemoryStorage::with_item(SETTINGS_KEY, raw))
}

#[test]
fn load_returns_defaults_when_storage_is_empty() {
    let store = SettingsStore::new(MemoryStorage::new());
    assert_eq!(store.load(), DEFAULT_SETTINGS);
    assert!(matches!(store.try_load(), Ok(None)));
}

#[test]
fn load_returns_defaults_for_invalid_json() {
    let store = store_with("{not json");
    assert_eq!(store.load(), DEFAULT_SETTINGS);
    assert!(matches!(store.try_load(), Err(StoreError::Malformed(_))));

    // Wrong types are malformed too
    let store = store_with(r#"{"objectSize":"big"}"#);
    assert_eq!(store.load(), DEFAULT_SETTINGS);
}

#[test]
fn mutators_accumulate_without_storage() {
    let store = SettingsStore::new(NoStorage);
    assert_eq!(store.load(), DEFAULT_SETTINGS);
    // Nothing persists, but each mutator builds on the last one in memory
    assert_eq!(store.increase_size().object_size, 1.1);
    assert_eq!(store.increase_size().object_size, 1.2);
    assert_eq!(store.decrease_red_intensity().red_intensity, 0.7);
    assert_eq!(
        store.load(),
        ExerciseSettings {
            object_size: 1.2,
            red_intensity: 0.7,
            green_intensity: 0.8,
        }
    );
    assert_eq!(store.reset(), DEFAULT_SETTINGS);
    assert_eq!(store.load(), DEFAULT_SETTINGS);
}

#[test]
fn readable_storage_wins_over_memory() {
    // A failed write is not read back once storage answers again
    let store = SettingsStore::new(MemoryStorage::failing_writes());
    store.increase_size();
    assert_eq!(store.load(), DEFAULT_SETTINGS);
}

#[test]
fn save_then_load_round_trips() {
    let store = SettingsStore::new(MemoryStorage::new());
    let settings = ExerciseSettings {
        object_size: 2.5,
        red_intensity: 0.6,
        green_intensity: 0.9,
    };
    store.save(&settings);
    assert_eq!(store.load(), settings);

    let raw = store.storage().raw(SETTINGS_KEY).expect("settings written");
    assert!(raw.contains("\"objectSize\""));
    assert!(raw.contains("\"redIntensity\""));
    assert!(raw.contains("\"greenIntensity\""));
}

#[test]
fn legacy_color_intensity_backs_both_channels() {
    let store = store_with(r#"{"objectSize":1.5,"colorIntensity":0.5}"#);
    let s = store.load();
    assert_eq!(s.object_size, 1.5);
    assert_eq!(s.red_intensity, 0.5);
    assert_eq!(s.green_intensity, 0.5);
}

#[test]
fn explicit_intensity_wins_over_legacy_field() {
    let store = store_with(r#"{"redIntensity":0.4,"colorIntensity":0.6}"#);
    let s = store.load();
    assert_eq!(s.object_size, DEFAULT_SETTINGS.object_size);
    assert_eq!(s.red_intensity, 0.4);
    assert_eq!(s.green_intensity, 0.6);
}

#[test]
fn missing_and_null_fields_fall_back_to_defaults() {
    let store = store_with(r#"{"objectSize":null,"greenIntensity":0.5}"#);
    let s = store.load();
    assert_eq!(s.object_size, 1.0);
    assert_eq!(s.red_intensity, 0.8);
    assert_eq!(s.green_intensity, 0.5);
}

#[test]
fn out_of_range_stored_values_are_clamped() {
    let store = store_with(r#"{"objectSize":50,"redIntensity":-1,"greenIntensity":3}"#);
    let s = store.load();
    assert_eq!(s.object_size, MAX_SIZE);
    assert_eq!(s.red_intensity, MIN_INTENSITY);
    assert_eq!(s.green_intensity, MAX_INTENSITY);
}

#[test]
fn size_stays_within_bounds() {
    let store = SettingsStore::new(MemoryStorage::new());
    for _ in 0..150 {
        let s = store.increase_size();
        assert!(s.object_size >= MIN_SIZE && s.object_size <= MAX_SIZE);
    }
    assert_eq!(store.load().object_size, MAX_SIZE);

    for _ in 0..150 {
        let s = store.decrease_size();
        assert!(s.object_size >= MIN_SIZE && s.object_size <= MAX_SIZE);
    }
    assert_eq!(store.load().object_size, MIN_SIZE);
}

#[test]
fn repeated_steps_do_not_drift() {
    let store = SettingsStore::new(MemoryStorage::new());
    for _ in 0..9 {
        store.increase_size();
    }
    // 1.0 + 9 * 0.1 without rounding would be 1.9000000000000006
    assert_eq!(store.load().object_size, 1.9);
}

#[test]
fn narrow_size_bound_caps_at_two() {
    let store = SettingsStore::with_bounds(
        MemoryStorage::new(),
        SettingsBounds::new(SizeBound::Narrow),
    );
    for _ in 0..30 {
        store.increase_size();
    }
    assert_eq!(store.load().object_size, LEGACY_MAX_SIZE);

    // Values stored under the wider bound are pulled back in
    let store = SettingsStore::with_bounds(
        MemoryStorage::with_item(SETTINGS_KEY, r#"{"objectSize":5.0}"#),
        SettingsBounds::new(SizeBound::Narrow),
    );
    assert_eq!(store.load().object_size, LEGACY_MAX_SIZE);
}

#[test]
fn intensity_adjustments_clamp() {
    let store = SettingsStore::new(MemoryStorage::new());
    assert_eq!(store.increase_red_intensity().red_intensity, 0.9);
    assert_eq!(store.increase_red_intensity().red_intensity, 1.0);
    assert_eq!(store.increase_red_intensity().red_intensity, 1.0);

    for _ in 0..10 {
        let s = store.decrease_green_intensity();
        assert!(s.green_intensity >= MIN_INTENSITY && s.green_intensity <= MAX_INTENSITY);
    }
    assert_eq!(store.load().green_intensity, MIN_INTENSITY);

    // Each mutator touches only its own field
    let s = store.load();
    assert_eq!(s.red_intensity, 1.0);
    assert_eq!(s.object_size, 1.0);
}

#[test]
fn update_clamps_and_rounds() {
    let store = SettingsStore::new(MemoryStorage::new());
    let s = store.update(SettingField::ObjectSize, 50.0);
    assert_eq!(s.object_size, MAX_SIZE);
    assert_eq!(store.load(), s);

    let s = store.update(SettingField::RedIntensity, 0.55555);
    assert_eq!(s.red_intensity, 0.6);
    assert_eq!(store.load().red_intensity, 0.6);

    let s = store.update(SettingField::GreenIntensity, -2.0);
    assert_eq!(s.green_intensity, MIN_INTENSITY);

    // Non-finite input falls back to the field default
    let s = store.update(SettingField::ObjectSize, f64::NAN);
    assert_eq!(s.object_size, DEFAULT_SETTINGS.object_size);

    let narrow = SettingsStore::with_bounds(
        MemoryStorage::new(),
        SettingsBounds::new(SizeBound::Narrow),
    );
    assert_eq!(
        narrow.update(SettingField::ObjectSize, 5.0).object_size,
        LEGACY_MAX_SIZE
    );
}

#[test]
fn cycle_wraps_from_max_to_min() {
    let store = SettingsStore::new(MemoryStorage::new());
    store.update(SettingField::RedIntensity, 1.0);
    assert_eq!(store.cycle_red_intensity().red_intensity, 0.3);
    assert_eq!(store.cycle_red_intensity().red_intensity, 0.4);
}

#[test]
fn cycle_visits_every_step() {
    let store = SettingsStore::new(MemoryStorage::new());
    store.update(SettingField::GreenIntensity, 0.3);
    let seen: Vec<f64> = (0..8)
        .map(|_| store.cycle_green_intensity().green_intensity)
        .collect();
    assert_eq!(seen, vec![0.4, 0.5, 0.6, 0.7, 0.8, 0.9, 1.0, 0.3]);
}

#[test]
fn mutators_see_previous_results() {
    // Back-to-back mutators each read the record the previous one wrote
    let store = SettingsStore::new(MemoryStorage::new());
    store.increase_size();
    store.increase_red_intensity();
    store.decrease_green_intensity();
    let s = store.load();
    assert_eq!(s.object_size, 1.1);
    assert_eq!(s.red_intensity, 0.9);
    assert_eq!(s.green_intensity, 0.7);
}

#[test]
fn write_failures_are_swallowed() {
    let store = SettingsStore::new(MemoryStorage::failing_writes());
    let s = store.increase_size();
    assert_eq!(s.object_size, 1.1);
    assert!(store.storage().raw(SETTINGS_KEY).is_none());
    assert!(matches!(
        store.try_save(&s),
        Err(StoreError::Storage(StorageError::Write(_)))
    ));
    assert_eq!(store.load(), DEFAULT_SETTINGS);
}

#[test]
fn reset_restores_defaults() {
    let store = SettingsStore::new(MemoryStorage::new());
    store.increase_size();
    store.cycle_red_intensity();
    assert_ne!(store.load(), DEFAULT_SETTINGS);
    assert_eq!(store.reset(), DEFAULT_SETTINGS);
    assert_eq!(store.load(), DEFAULT_SETTINGS);
}
