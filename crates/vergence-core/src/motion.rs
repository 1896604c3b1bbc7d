//! Directions, axes and the progressive acceleration curve used while a
//! movement key is held.

use crate::constants::{ACCEL_MAX_MULTIPLIER, ACCEL_WARMUP_MS};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Direction {
    Left,
    Right,
    Up,
    Down,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Axis {
    Horizontal,
    Vertical,
}

impl Direction {
    pub const ALL: [Direction; 4] = [
        Direction::Left,
        Direction::Right,
        Direction::Up,
        Direction::Down,
    ];

    #[inline]
    pub fn axis(self) -> Axis {
        match self {
            Direction::Left | Direction::Right => Axis::Horizontal,
            Direction::Up | Direction::Down => Axis::Vertical,
        }
    }

    /// Left and Up shrink the separation value, Right and Down grow it.
    #[inline]
    pub fn sign(self) -> i32 {
        match self {
            Direction::Left | Direction::Up => -1,
            Direction::Right | Direction::Down => 1,
        }
    }

    #[inline]
    pub(crate) fn index(self) -> usize {
        match self {
            Direction::Left => 0,
            Direction::Right => 1,
            Direction::Up => 2,
            Direction::Down => 3,
        }
    }
}

/// Speed multiplier after holding a key for `elapsed_ms`.
///
/// Piecewise linear: 1x for the first 100 ms, ramping to 3x at 1 s, 5x at
/// 3 s, 10x at 7 s and finally 12x at 9 s, where it stays.
pub fn speed_multiplier(elapsed_ms: f64) -> f64 {
    let d = elapsed_ms.max(0.0);
    if d <= ACCEL_WARMUP_MS {
        1.0
    } else if d < 1000.0 {
        1.0 + ((d - ACCEL_WARMUP_MS) / 900.0) * 2.0
    } else if d < 3000.0 {
        3.0 + ((d - 1000.0) / 2000.0) * 2.0
    } else if d < 7000.0 {
        5.0 + ((d - 3000.0) / 4000.0) * 5.0
    } else {
        (10.0 + ((d - 7000.0) / 2000.0) * 2.0).min(ACCEL_MAX_MULTIPLIER)
    }
}

/// Pixel step for a tick `elapsed_ms` after the key went down.
#[inline]
pub fn progressive_step(elapsed_ms: f64, base_step: i32) -> i32 {
    (base_step as f64 * speed_multiplier(elapsed_ms)).round() as i32
}

/// Move `current` by `delta`, absorbing anything past `[-max, max]`.
#[inline]
pub fn apply_step(current: i32, delta: i32, max: i32) -> i32 {
    let max = max.abs();
    current.saturating_add(delta).clamp(-max, max)
}
