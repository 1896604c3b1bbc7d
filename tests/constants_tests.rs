// Host-side tests for tuning constants and their relationships.

use vergence_core::constants::*;
use vergence_core::*;

#[test]
#[allow(clippy::assertions_on_constants)]
fn bounds_are_ordered() {
    assert!(MIN_SIZE < LEGACY_MAX_SIZE);
    assert!(LEGACY_MAX_SIZE < MAX_SIZE);
    assert!(MIN_INTENSITY < MAX_INTENSITY);
    assert!(MAX_INTENSITY <= 1.0);
    assert!(SIZE_STEP > 0.0 && INTENSITY_STEP > 0.0);
}

#[test]
fn defaults_are_within_bounds() {
    assert!(SettingsBounds::new(SizeBound::Extended).contains(&DEFAULT_SETTINGS));
    assert!(SettingsBounds::new(SizeBound::Narrow).contains(&DEFAULT_SETTINGS));
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn tick_constants_are_sane() {
    assert_eq!(TICK_PERIOD_MS, 50.0);
    assert!(MAX_CATCH_UP_TICKS > 0);
    assert!(DEFAULT_BASE_STEP > 0);
    assert!(DEFAULT_MAX_SEPARATION > DEFAULT_BASE_STEP);
    assert!(ACCEL_MAX_MULTIPLIER > 1.0);
}

#[test]
fn default_config_matches_constants() {
    let config = EngineConfig::default();
    assert_eq!(config.base_step, DEFAULT_BASE_STEP);
    assert_eq!(config.max_horizontal, DEFAULT_MAX_SEPARATION);
    assert_eq!(config.max_vertical, DEFAULT_MAX_SEPARATION);
    assert_eq!(config.tick_period_ms, TICK_PERIOD_MS);
    assert_eq!(config.movement_mode, MovementMode::Accelerating);
    assert!(config.auto_hide_instructions_on_fullscreen);

    let classic = EngineConfig::classic();
    assert_eq!(classic.movement_mode, MovementMode::Discrete);
    assert_eq!(
        classic.intensity_controls,
        IntensityControlStyle::CycleOnSingleKey
    );
    assert!(!classic.auto_hide_instructions_on_fullscreen);
    assert_eq!(classic.size_bound, SizeBound::Extended);
}
