use crate::motion::Direction;

/// How red/green intensity is driven from the keyboard.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum IntensityControlStyle {
    /// `R` and `G` step up and wrap from 1.0 back to 0.3.
    CycleOnSingleKey,
    /// `R`/`E` raise/lower red, `G`/`H` raise/lower green, clamped.
    #[default]
    FourDirectionalKeys,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ControlKey {
    Move(Direction),
    ToggleInstructions,
    ToggleFullscreen,
    IncreaseSize,
    DecreaseSize,
    CycleRed,
    CycleGreen,
    IncreaseRed,
    DecreaseRed,
    IncreaseGreen,
    DecreaseGreen,
}

#[inline]
pub fn direction_for_key(key: &str) -> Option<Direction> {
    match key {
        "ArrowLeft" => Some(Direction::Left),
        "ArrowRight" => Some(Direction::Right),
        "ArrowUp" => Some(Direction::Up),
        "ArrowDown" => Some(Direction::Down),
        _ => None,
    }
}

pub fn control_for_key(key: &str, style: IntensityControlStyle) -> Option<ControlKey> {
    if let Some(direction) = direction_for_key(key) {
        return Some(ControlKey::Move(direction));
    }
    let control = match key {
        "Escape" => ControlKey::ToggleInstructions,
        "+" | "=" => ControlKey::IncreaseSize,
        "-" | "_" => ControlKey::DecreaseSize,
        "f" | "F" => ControlKey::ToggleFullscreen,
        _ => return intensity_control_for_key(key, style),
    };
    Some(control)
}

fn intensity_control_for_key(key: &str, style: IntensityControlStyle) -> Option<ControlKey> {
    match (style, key) {
        (IntensityControlStyle::CycleOnSingleKey, "r" | "R") => Some(ControlKey::CycleRed),
        (IntensityControlStyle::CycleOnSingleKey, "g" | "G") => Some(ControlKey::CycleGreen),
        (IntensityControlStyle::FourDirectionalKeys, "r" | "R") => Some(ControlKey::IncreaseRed),
        (IntensityControlStyle::FourDirectionalKeys, "e" | "E") => Some(ControlKey::DecreaseRed),
        (IntensityControlStyle::FourDirectionalKeys, "g" | "G") => Some(ControlKey::IncreaseGreen),
        (IntensityControlStyle::FourDirectionalKeys, "h" | "H") => Some(ControlKey::DecreaseGreen),
        _ => None,
    }
}

/// Help lines shown in the instructions panel, as `(keys, action)`.
pub fn instructions_lines(style: IntensityControlStyle) -> Vec<(&'static str, &'static str)> {
    let mut lines = vec![
        ("← →", "Horizontal separation"),
        ("↑ ↓", "Vertical separation"),
        ("+ -", "Increase/decrease size"),
    ];
    match style {
        IntensityControlStyle::CycleOnSingleKey => {
            lines.push(("R", "Cycle red intensity"));
            lines.push(("G", "Cycle green intensity"));
        }
        IntensityControlStyle::FourDirectionalKeys => {
            lines.push(("R E", "Increase/decrease red intensity"));
            lines.push(("G H", "Increase/decrease green intensity"));
        }
    }
    lines.push(("F", "Toggle fullscreen"));
    lines.push(("ESC", "Toggle instructions"));
    lines
}
