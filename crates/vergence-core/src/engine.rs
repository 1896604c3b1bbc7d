//! Keyboard-driven control engine.
//!
//! Translates key-down/key-up events into one-shot actions (instructions,
//! fullscreen, settings) and into held-key movement sessions that move the
//! two shapes apart on a fixed tick, faster the longer the key is held.
//!
//! The engine never reads a clock: every entry point takes the host's
//! current time in milliseconds.

use crate::constants::{DEFAULT_BASE_STEP, DEFAULT_MAX_SEPARATION, TICK_PERIOD_MS};
use crate::keymap::{control_for_key, ControlKey, IntensityControlStyle};
use crate::motion::{apply_step, progressive_step, Axis, Direction};
use crate::schedule::TickSchedule;
use crate::settings::{ExerciseSettings, SettingsBounds, SizeBound, DEFAULT_SETTINGS};
use crate::storage::SettingsStorage;
use crate::store::SettingsStore;
use fnv::FnvHashSet;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum MovementMode {
    /// One `base_step` per key-down event, auto-repeat included.
    Discrete,
    /// Held keys tick at a fixed period with a growing step.
    #[default]
    Accelerating,
}

#[derive(Clone, Debug, PartialEq)]
pub struct EngineConfig {
    pub base_step: i32,
    pub max_horizontal: i32,
    pub max_vertical: i32,
    pub movement_mode: MovementMode,
    pub tick_period_ms: f64,
    pub intensity_controls: IntensityControlStyle,
    pub auto_hide_instructions_on_fullscreen: bool,
    pub size_bound: SizeBound,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            base_step: DEFAULT_BASE_STEP,
            max_horizontal: DEFAULT_MAX_SEPARATION,
            max_vertical: DEFAULT_MAX_SEPARATION,
            movement_mode: MovementMode::Accelerating,
            tick_period_ms: TICK_PERIOD_MS,
            intensity_controls: IntensityControlStyle::FourDirectionalKeys,
            auto_hide_instructions_on_fullscreen: true,
            size_bound: SizeBound::Extended,
        }
    }
}

impl EngineConfig {
    /// First-generation behavior: fixed steps per key-down and single-key
    /// intensity cycling.
    pub fn classic() -> Self {
        Self {
            movement_mode: MovementMode::Discrete,
            intensity_controls: IntensityControlStyle::CycleOnSingleKey,
            auto_hide_instructions_on_fullscreen: false,
            ..Self::default()
        }
    }

    pub fn with_base_step(mut self, base_step: i32) -> Self {
        self.base_step = base_step;
        self
    }

    pub fn with_max_separation(mut self, max_horizontal: i32, max_vertical: i32) -> Self {
        self.max_horizontal = max_horizontal;
        self.max_vertical = max_vertical;
        self
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FullscreenRequest {
    Enter,
    Exit,
}

/// What the host should do with a key event.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum KeyResponse {
    /// Not a control key; leave the event alone.
    Ignored,
    /// Consumed; suppress the browser default.
    Handled,
    /// Consumed; the host must ask the platform for this fullscreen change.
    Fullscreen(FullscreenRequest),
}

impl KeyResponse {
    #[inline]
    pub fn is_handled(self) -> bool {
        !matches!(self, KeyResponse::Ignored)
    }
}

/// Read-only state consumed by the rendering layer each frame.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ViewState {
    pub horizontal_separation: i32,
    pub vertical_separation: i32,
    pub show_instructions: bool,
    pub is_fullscreen: bool,
    pub settings: ExerciseSettings,
}

#[derive(Clone, Copy, Debug)]
struct KeySession {
    started_at_ms: f64,
}

pub struct ControlEngine<S> {
    config: EngineConfig,
    store: SettingsStore<S>,
    settings: ExerciseSettings,
    horizontal: i32,
    vertical: i32,
    show_instructions: bool,
    is_fullscreen: bool,
    sessions: [Option<KeySession>; 4],
    ticks: TickSchedule,
    held: FnvHashSet<ControlKey>,
    live: bool,
}

impl<S: SettingsStorage> ControlEngine<S> {
    pub fn new(config: EngineConfig, storage: S) -> Self {
        let store = SettingsStore::with_bounds(storage, SettingsBounds::new(config.size_bound));
        Self::with_store(config, store)
    }

    pub fn with_store(config: EngineConfig, store: SettingsStore<S>) -> Self {
        let ticks = TickSchedule::new(config.tick_period_ms);
        Self {
            config,
            store,
            settings: DEFAULT_SETTINGS,
            horizontal: 0,
            vertical: 0,
            show_instructions: true,
            is_fullscreen: false,
            sessions: [None; 4],
            ticks,
            held: FnvHashSet::default(),
            live: false,
        }
    }

    // ---------------- Lifecycle ----------------

    /// Load persisted settings and begin accepting input.
    pub fn start_session(&mut self) {
        self.settings = self.store.load();
        self.live = true;
        log::info!(
            "[engine] session started: mode={:?} step={} size={:.1} red={:.1} green={:.1}",
            self.config.movement_mode,
            self.config.base_step,
            self.settings.object_size,
            self.settings.red_intensity,
            self.settings.green_intensity
        );
    }

    /// Stop accepting input and cancel every outstanding movement tick.
    pub fn end_session(&mut self) {
        self.release_all();
        self.live = false;
        log::info!("[engine] session ended");
    }

    #[inline]
    pub fn is_live(&self) -> bool {
        self.live
    }

    // ---------------- Input ----------------

    pub fn handle_key_down(&mut self, key: &str, repeat: bool, now_ms: f64) -> KeyResponse {
        if !self.live {
            return KeyResponse::Ignored;
        }
        let Some(control) = control_for_key(key, self.config.intensity_controls) else {
            return KeyResponse::Ignored;
        };
        if let ControlKey::Move(direction) = control {
            self.press_direction(direction, repeat, now_ms);
            return KeyResponse::Handled;
        }
        // One-shot actions fire once per physical press.
        if repeat || !self.held.insert(control) {
            return KeyResponse::Handled;
        }
        self.apply_one_shot(control)
    }

    pub fn handle_key_up(&mut self, key: &str, now_ms: f64) -> KeyResponse {
        if !self.live {
            return KeyResponse::Ignored;
        }
        let Some(control) = control_for_key(key, self.config.intensity_controls) else {
            return KeyResponse::Ignored;
        };
        match control {
            ControlKey::Move(direction) => self.release_direction(direction, now_ms),
            other => {
                self.held.remove(&other);
            }
        }
        KeyResponse::Handled
    }

    /// Treat every key as released, e.g. when the window loses focus and
    /// key-up events will never arrive.
    pub fn release_all(&mut self) {
        self.ticks.cancel_all();
        self.sessions = [None; 4];
        self.held.clear();
    }

    fn press_direction(&mut self, direction: Direction, repeat: bool, now_ms: f64) {
        match self.config.movement_mode {
            MovementMode::Discrete => self.move_by(direction, self.config.base_step),
            MovementMode::Accelerating => {
                let slot = &mut self.sessions[direction.index()];
                if repeat || slot.is_some() {
                    return;
                }
                *slot = Some(KeySession {
                    started_at_ms: now_ms,
                });
                self.ticks.start(direction, now_ms);
                log::debug!("[keys] {:?} held", direction);
                self.move_by(direction, progressive_step(0.0, self.config.base_step));
            }
        }
    }

    fn release_direction(&mut self, direction: Direction, now_ms: f64) {
        if self.sessions[direction.index()].is_none() {
            return;
        }
        // Ticks that fell due before the release still count.
        self.advance(now_ms);
        let Some(session) = self.sessions[direction.index()].take() else {
            return;
        };
        self.ticks.cancel(direction);
        log::debug!(
            "[keys] {:?} released after {:.0}ms",
            direction,
            now_ms - session.started_at_ms
        );
    }

    fn apply_one_shot(&mut self, control: ControlKey) -> KeyResponse {
        match control {
            ControlKey::ToggleInstructions => {
                self.show_instructions = !self.show_instructions;
            }
            ControlKey::ToggleFullscreen => {
                return KeyResponse::Fullscreen(self.toggle_fullscreen());
            }
            ControlKey::IncreaseSize => self.settings = self.store.increase_size(),
            ControlKey::DecreaseSize => self.settings = self.store.decrease_size(),
            ControlKey::CycleRed => self.settings = self.store.cycle_red_intensity(),
            ControlKey::CycleGreen => self.settings = self.store.cycle_green_intensity(),
            ControlKey::IncreaseRed => self.settings = self.store.increase_red_intensity(),
            ControlKey::DecreaseRed => self.settings = self.store.decrease_red_intensity(),
            ControlKey::IncreaseGreen => self.settings = self.store.increase_green_intensity(),
            ControlKey::DecreaseGreen => self.settings = self.store.decrease_green_intensity(),
            ControlKey::Move(_) => {}
        }
        KeyResponse::Handled
    }

    // ---------------- Time ----------------

    /// Fire every movement tick due at or before `now_ms`.
    pub fn advance(&mut self, now_ms: f64) {
        for (direction, at) in self.ticks.due(now_ms) {
            self.on_tick(direction, at);
        }
    }

    /// Apply one tick for `direction`. Does nothing unless the key is held.
    pub fn on_tick(&mut self, direction: Direction, now_ms: f64) {
        let Some(session) = self.sessions[direction.index()] else {
            return;
        };
        let step = progressive_step(now_ms - session.started_at_ms, self.config.base_step);
        self.move_by(direction, step);
    }

    fn move_by(&mut self, direction: Direction, step: i32) {
        let delta = direction.sign() * step;
        match direction.axis() {
            Axis::Horizontal => {
                self.horizontal = apply_step(self.horizontal, delta, self.config.max_horizontal);
            }
            Axis::Vertical => {
                self.vertical = apply_step(self.vertical, delta, self.config.max_vertical);
            }
        }
    }

    // ---------------- Fullscreen / instructions ----------------

    /// Platform notification that the display entered or left fullscreen.
    pub fn on_fullscreen_change(&mut self, is_fullscreen: bool) {
        let entering = is_fullscreen && !self.is_fullscreen;
        self.is_fullscreen = is_fullscreen;
        if entering && self.config.auto_hide_instructions_on_fullscreen {
            self.show_instructions = false;
        }
        log::info!("[fullscreen] {}", if is_fullscreen { "entered" } else { "left" });
    }

    /// Which fullscreen change to request; `is_fullscreen` is left alone
    /// until the platform confirms it.
    #[inline]
    pub fn toggle_fullscreen(&self) -> FullscreenRequest {
        if self.is_fullscreen {
            FullscreenRequest::Exit
        } else {
            FullscreenRequest::Enter
        }
    }

    #[inline]
    pub fn set_show_instructions(&mut self, show: bool) {
        self.show_instructions = show;
    }

    // ---------------- Settings ----------------

    /// Persist a full settings record (e.g. from a settings dialog).
    pub fn apply_settings(&mut self, settings: ExerciseSettings) -> ExerciseSettings {
        let clamped = self.store.bounds().clamp(settings);
        self.store.save(&clamped);
        self.settings = clamped;
        clamped
    }

    pub fn reset_settings(&mut self) -> ExerciseSettings {
        self.settings = self.store.reset();
        self.settings
    }

    // ---------------- Accessors ----------------

    pub fn snapshot(&self) -> ViewState {
        ViewState {
            horizontal_separation: self.horizontal,
            vertical_separation: self.vertical,
            show_instructions: self.show_instructions,
            is_fullscreen: self.is_fullscreen,
            settings: self.settings,
        }
    }

    #[inline]
    pub fn settings(&self) -> ExerciseSettings {
        self.settings
    }

    #[inline]
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// True while `direction` is held in accelerating mode.
    #[inline]
    pub fn is_active(&self, direction: Direction) -> bool {
        self.sessions[direction.index()].is_some()
    }

    pub fn active_tick_count(&self) -> usize {
        self.ticks.running_count()
    }
}
