use crate::settings::{
    round_to_tenth, ExerciseSettings, SettingField, SettingsBounds, StoredSettings,
    DEFAULT_SETTINGS, INTENSITY_STEP, MAX_INTENSITY, MIN_INTENSITY, SIZE_STEP,
};
use crate::storage::{SettingsStorage, StorageError, SETTINGS_KEY};
use std::cell::Cell;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error(transparent)]
    Storage(#[from] StorageError),
    #[error("stored settings are malformed: {0}")]
    Malformed(#[source] serde_json::Error),
    #[error("settings could not be encoded: {0}")]
    Encode(#[source] serde_json::Error),
}

/// Single source of truth for the persisted settings.
///
/// Every mutator re-reads storage, applies one change, writes the full record
/// back and returns it. Faults never reach the caller: they are logged and
/// masked by the last committed record (reads) or dropped (writes).
#[derive(Debug)]
pub struct SettingsStore<S> {
    storage: S,
    bounds: SettingsBounds,
    // Last record read or written. Stands in for storage that cannot be read.
    last: Cell<ExerciseSettings>,
}

impl<S: SettingsStorage> SettingsStore<S> {
    pub fn new(storage: S) -> Self {
        Self::with_bounds(storage, SettingsBounds::default())
    }

    pub fn with_bounds(storage: S, bounds: SettingsBounds) -> Self {
        Self {
            storage,
            bounds,
            last: Cell::new(DEFAULT_SETTINGS),
        }
    }

    pub fn bounds(&self) -> SettingsBounds {
        self.bounds
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }

    /// Read and decode the stored record. `Ok(None)` means nothing is stored.
    pub fn try_load(&self) -> Result<Option<ExerciseSettings>, StoreError> {
        let Some(raw) = self.storage.get_item(SETTINGS_KEY)? else {
            return Ok(None);
        };
        let stored: StoredSettings = serde_json::from_str(&raw).map_err(StoreError::Malformed)?;
        let resolved = stored.resolve();
        if !self.bounds.contains(&resolved) {
            log::warn!("[settings] stored settings out of range, clamping: {:?}", resolved);
        }
        Ok(Some(self.bounds.clamp(resolved)))
    }

    /// Current settings. Empty or malformed storage yields the defaults. A
    /// medium that cannot be read yields the last committed record, so
    /// mutators keep building on each other in memory.
    pub fn load(&self) -> ExerciseSettings {
        let settings = match self.try_load() {
            Ok(Some(settings)) => settings,
            Ok(None) => DEFAULT_SETTINGS,
            Err(StoreError::Storage(StorageError::Unavailable)) => return self.last.get(),
            Err(StoreError::Storage(e)) => {
                log::error!("[settings] error loading settings: {}", e);
                return self.last.get();
            }
            Err(e) => {
                log::error!("[settings] error loading settings: {}", e);
                DEFAULT_SETTINGS
            }
        };
        self.last.set(settings);
        settings
    }

    pub fn try_save(&self, settings: &ExerciseSettings) -> Result<(), StoreError> {
        let json = serde_json::to_string(settings).map_err(StoreError::Encode)?;
        self.storage.set_item(SETTINGS_KEY, &json)?;
        Ok(())
    }

    pub fn save(&self, settings: &ExerciseSettings) {
        self.last.set(*settings);
        match self.try_save(settings) {
            Ok(()) | Err(StoreError::Storage(StorageError::Unavailable)) => {}
            Err(e) => log::error!("[settings] error saving settings: {}", e),
        }
    }

    /// Replace one field and persist the result. The value is rounded to a
    /// tenth and clamped into range first.
    pub fn update(&self, field: SettingField, value: f64) -> ExerciseSettings {
        let next = self
            .bounds
            .clamp(self.load().with_field(field, round_to_tenth(value)));
        self.save(&next);
        next
    }

    /// Write the defaults back, as the settings dialog's reset does.
    pub fn reset(&self) -> ExerciseSettings {
        self.save(&DEFAULT_SETTINGS);
        log::info!("[settings] reset to defaults");
        DEFAULT_SETTINGS
    }

    fn adjust(&self, field: SettingField, delta: f64) -> ExerciseSettings {
        self.update(field, self.load().get(field) + delta)
    }

    fn cycle(&self, field: SettingField) -> ExerciseSettings {
        let mut next = round_to_tenth(self.load().get(field) + INTENSITY_STEP);
        if next > MAX_INTENSITY {
            next = MIN_INTENSITY;
        }
        self.update(field, next)
    }

    pub fn increase_size(&self) -> ExerciseSettings {
        self.adjust(SettingField::ObjectSize, SIZE_STEP)
    }

    pub fn decrease_size(&self) -> ExerciseSettings {
        self.adjust(SettingField::ObjectSize, -SIZE_STEP)
    }

    pub fn increase_red_intensity(&self) -> ExerciseSettings {
        self.adjust(SettingField::RedIntensity, INTENSITY_STEP)
    }

    pub fn decrease_red_intensity(&self) -> ExerciseSettings {
        self.adjust(SettingField::RedIntensity, -INTENSITY_STEP)
    }

    pub fn increase_green_intensity(&self) -> ExerciseSettings {
        self.adjust(SettingField::GreenIntensity, INTENSITY_STEP)
    }

    pub fn decrease_green_intensity(&self) -> ExerciseSettings {
        self.adjust(SettingField::GreenIntensity, -INTENSITY_STEP)
    }

    /// Step red up by 0.1, wrapping past 1.0 back to 0.3.
    pub fn cycle_red_intensity(&self) -> ExerciseSettings {
        self.cycle(SettingField::RedIntensity)
    }

    /// Step green up by 0.1, wrapping past 1.0 back to 0.3.
    pub fn cycle_green_intensity(&self) -> ExerciseSettings {
        self.cycle(SettingField::GreenIntensity)
    }
}
