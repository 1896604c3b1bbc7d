// Shared control tuning constants.

// Movement
pub const DEFAULT_BASE_STEP: i32 = 5; // pixels per step at 1x
pub const DEFAULT_MAX_SEPARATION: i32 = 1000; // +/- pixels on each axis

// Held-key ticks
pub const TICK_PERIOD_MS: f64 = 50.0; // 20 Hz
pub const MAX_CATCH_UP_TICKS: usize = 20; // ~1 s of backlog replayed at most

// Acceleration curve breakpoints (ms) and the ceiling multiplier
pub const ACCEL_WARMUP_MS: f64 = 100.0;
pub const ACCEL_MAX_MULTIPLIER: f64 = 12.0;
