//! Persisted exercise settings: object size plus red/green intensity.
//!
//! Values are plain `f64` so they survive a JSON round trip through browser
//! storage unchanged. Every mutation goes through [`round_to_tenth`] so that
//! repeated `+0.1` steps do not drift (0.1 + 0.2 != 0.3).

use serde::{Deserialize, Serialize};

pub const MIN_SIZE: f64 = 0.5;
pub const MAX_SIZE: f64 = 10.0;
// Ceiling used by the first generation of exercises.
pub const LEGACY_MAX_SIZE: f64 = 2.0;
pub const SIZE_STEP: f64 = 0.1;

pub const MIN_INTENSITY: f64 = 0.3;
pub const MAX_INTENSITY: f64 = 1.0;
pub const INTENSITY_STEP: f64 = 0.1;

pub const DEFAULT_SETTINGS: ExerciseSettings = ExerciseSettings {
    object_size: 1.0,
    red_intensity: 0.8,
    green_intensity: 0.8,
};

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExerciseSettings {
    /// Size multiplier for the rendered shapes.
    pub object_size: f64,
    /// Opacity of the pure red shape.
    pub red_intensity: f64,
    /// Opacity of the pure green shape.
    pub green_intensity: f64,
}

impl Default for ExerciseSettings {
    fn default() -> Self {
        DEFAULT_SETTINGS
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SettingField {
    ObjectSize,
    RedIntensity,
    GreenIntensity,
}

impl ExerciseSettings {
    #[inline]
    pub fn get(&self, field: SettingField) -> f64 {
        match field {
            SettingField::ObjectSize => self.object_size,
            SettingField::RedIntensity => self.red_intensity,
            SettingField::GreenIntensity => self.green_intensity,
        }
    }

    /// Copy of `self` with one field replaced.
    pub fn with_field(mut self, field: SettingField, value: f64) -> Self {
        match field {
            SettingField::ObjectSize => self.object_size = value,
            SettingField::RedIntensity => self.red_intensity = value,
            SettingField::GreenIntensity => self.green_intensity = value,
        }
        self
    }
}

/// Upper bound for `object_size`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SizeBound {
    #[default]
    Extended,
    Narrow,
}

impl SizeBound {
    #[inline]
    pub fn max(self) -> f64 {
        match self {
            SizeBound::Extended => MAX_SIZE,
            SizeBound::Narrow => LEGACY_MAX_SIZE,
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct SettingsBounds {
    pub size: SizeBound,
}

impl SettingsBounds {
    pub fn new(size: SizeBound) -> Self {
        Self { size }
    }

    #[inline]
    pub fn range(&self, field: SettingField) -> (f64, f64) {
        match field {
            SettingField::ObjectSize => (MIN_SIZE, self.size.max()),
            SettingField::RedIntensity | SettingField::GreenIntensity => {
                (MIN_INTENSITY, MAX_INTENSITY)
            }
        }
    }

    /// Clamp every field into its valid interval. Non-finite values are
    /// replaced by the field default.
    pub fn clamp(&self, settings: ExerciseSettings) -> ExerciseSettings {
        [
            SettingField::ObjectSize,
            SettingField::RedIntensity,
            SettingField::GreenIntensity,
        ]
        .into_iter()
        .fold(settings, |acc, field| {
            let (lo, hi) = self.range(field);
            let raw = acc.get(field);
            let value = if raw.is_finite() {
                raw.clamp(lo, hi)
            } else {
                DEFAULT_SETTINGS.get(field)
            };
            acc.with_field(field, value)
        })
    }

    pub fn contains(&self, settings: &ExerciseSettings) -> bool {
        [
            SettingField::ObjectSize,
            SettingField::RedIntensity,
            SettingField::GreenIntensity,
        ]
        .into_iter()
        .all(|field| {
            let (lo, hi) = self.range(field);
            let v = settings.get(field);
            v >= lo && v <= hi
        })
    }
}

/// Round to one decimal place.
#[inline]
pub fn round_to_tenth(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

/// Shape of the record as it may appear in storage, including data written
/// before red and green had separate intensities.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct StoredSettings {
    #[serde(default)]
    pub object_size: Option<f64>,
    #[serde(default)]
    pub red_intensity: Option<f64>,
    #[serde(default)]
    pub green_intensity: Option<f64>,
    #[serde(default)]
    pub color_intensity: Option<f64>,
}

impl StoredSettings {
    pub(crate) fn resolve(self) -> ExerciseSettings {
        ExerciseSettings {
            object_size: self.object_size.unwrap_or(DEFAULT_SETTINGS.object_size),
            red_intensity: self
                .red_intensity
                .or(self.color_intensity)
                .unwrap_or(DEFAULT_SETTINGS.red_intensity),
            green_intensity: self
                .green_intensity
                .or(self.color_intensity)
                .unwrap_or(DEFAULT_SETTINGS.green_intensity),
        }
    }
}

// ---------------- Color helpers ----------------

/// CSS color for a pure red at the given opacity.
pub fn pure_red_color(intensity: f64) -> String {
    format!("rgba(255, 0, 0, {})", intensity)
}

/// CSS color for a pure green at the given opacity.
pub fn pure_green_color(intensity: f64) -> String {
    format!("rgba(0, 255, 0, {})", intensity)
}
