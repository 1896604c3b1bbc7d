// Page element ids and presentation constants used by the web host.

// Layout
pub const ROOT_ID: &str = "exercise-root";
pub const RED_SHAPE_ID: &str = "shape-red";
pub const GREEN_SHAPE_ID: &str = "shape-green";

// Instructions panel
pub const INSTRUCTIONS_ID: &str = "instructions-panel";
pub const INSTRUCTIONS_TITLE_ID: &str = "instructions-title";
pub const INSTRUCTIONS_KEYS_ID: &str = "instructions-keys";
pub const SEPARATION_STATUS_ID: &str = "status-separation";
pub const SETTINGS_STATUS_ID: &str = "status-settings";
pub const FULLSCREEN_BADGE_ID: &str = "fullscreen-badge";

// Buttons
pub const INSTRUCTIONS_CLOSE_ID: &str = "instructions-close";
pub const SETTINGS_RESET_ID: &str = "settings-reset";

// Root element attributes selecting the exercise and control preset
pub const EXERCISE_ATTR: &str = "data-exercise";
pub const CONTROLS_ATTR: &str = "data-controls"; // "classic" selects the first-generation engine
pub const SIZE_BOUND_ATTR: &str = "data-size-bound"; // "narrow" caps object size at 2.0
