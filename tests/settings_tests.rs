// Host-side tests for the settings model, color helpers and exercise presets.

use vergence_core::*;

#[test]
fn serializes_with_camel_case_fields() {
    let value = serde_json::to_value(DEFAULT_SETTINGS).unwrap();
    assert_eq!(value["objectSize"], 1.0);
    assert_eq!(value["redIntensity"], 0.8);
    assert_eq!(value["greenIntensity"], 0.8);
}

#[test]
fn round_to_tenth_removes_drift() {
    assert_eq!(round_to_tenth(0.1 + 0.2), 0.3);
    assert_eq!(round_to_tenth(1.0 + 9.0 * 0.1), 1.9);
    assert_eq!(round_to_tenth(0.7000000000000001), 0.7);
}

#[test]
fn with_field_replaces_one_value() {
    let s = DEFAULT_SETTINGS.with_field(SettingField::GreenIntensity, 0.4);
    assert_eq!(s.green_intensity, 0.4);
    assert_eq!(s.red_intensity, DEFAULT_SETTINGS.red_intensity);
    assert_eq!(s.get(SettingField::ObjectSize), DEFAULT_SETTINGS.object_size);
}

#[test]
fn clamp_handles_non_finite_values() {
    let bounds = SettingsBounds::default();
    let s = bounds.clamp(ExerciseSettings {
        object_size: f64::NAN,
        red_intensity: f64::INFINITY,
        green_intensity: 0.0,
    });
    assert_eq!(s.object_size, DEFAULT_SETTINGS.object_size);
    assert_eq!(s.red_intensity, DEFAULT_SETTINGS.red_intensity);
    assert_eq!(s.green_intensity, MIN_INTENSITY);
    assert!(bounds.contains(&s));
}

#[test]
fn pure_colors() {
    assert_eq!(pure_red_color(0.8), "rgba(255, 0, 0, 0.8)");
    assert_eq!(pure_green_color(0.3), "rgba(0, 255, 0, 0.3)");
    assert_eq!(pure_red_color(1.0), "rgba(255, 0, 0, 1)");
}

#[test]
fn exercise_slugs_resolve() {
    for kind in ExerciseKind::ALL {
        assert_eq!(ExerciseKind::from_slug(kind.slug()), Some(kind));
        assert!(kind.base_step() > 0);
    }
    assert_eq!(ExerciseKind::from_slug("unknown"), None);
    assert_eq!(ExerciseKind::default(), ExerciseKind::Triangle);
    assert_eq!(ExerciseKind::DiamondPrisms.engine_config().base_step, 3);
    assert_eq!(ExerciseKind::Car3d.title(), "3D Car Exercise");
}
