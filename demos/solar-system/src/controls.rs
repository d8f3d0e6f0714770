/// Control panel: custom events from the host's DOM controls and the
/// global toggle state they drive.

use serde::Serialize;

// ── Custom event kinds from the host ─────────────────────────────────

pub const CUSTOM_SELECT: u32 = 1;
pub const CUSTOM_SET_SPEED: u32 = 2;
pub const CUSTOM_TOGGLE_PAUSE: u32 = 3;
pub const CUSTOM_TOGGLE_THEME: u32 = 4;
pub const CUSTOM_RESET_SPEEDS: u32 = 5;

/// A validated control-panel action.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum UiCommand {
    /// Label clicked: zoom to the planet, or cancel zoom if it is already selected.
    Select(usize),
    SetSpeed { planet: usize, value: f32 },
    TogglePause,
    ToggleTheme,
    ResetSpeeds,
}

impl UiCommand {
    /// Decode a custom input event. Unknown kinds, planet indices outside
    /// `0..planet_count` and non-finite payloads yield `None`.
    pub fn from_custom(kind: u32, a: f32, b: f32, planet_count: usize) -> Option<Self> {
        let command = match kind {
            CUSTOM_SELECT => Self::Select(planet_index(a, planet_count)?),
            CUSTOM_SET_SPEED => {
                let planet = planet_index(a, planet_count)?;
                if !b.is_finite() {
                    log::debug!("controls: non-finite speed for planet {}", planet);
                    return None;
                }
                Self::SetSpeed { planet, value: b }
            }
            CUSTOM_TOGGLE_PAUSE => Self::TogglePause,
            CUSTOM_TOGGLE_THEME => Self::ToggleTheme,
            CUSTOM_RESET_SPEEDS => Self::ResetSpeeds,
            other => {
                log::debug!("controls: ignoring custom event kind {}", other);
                return None;
            }
        };
        Some(command)
    }
}

fn planet_index(raw: f32, planet_count: usize) -> Option<usize> {
    let valid = raw.is_finite() && raw >= 0.0 && raw.fract() == 0.0 && (raw as usize) < planet_count;
    if !valid {
        log::debug!("controls: ignoring planet index {}", raw);
        return None;
    }
    Some(raw as usize)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Dark,
    Light,
}

impl Theme {
    pub fn toggled(self) -> Self {
        match self {
            Self::Dark => Self::Light,
            Self::Light => Self::Dark,
        }
    }

    /// Class the host puts on `<body>`.
    pub fn body_class(self) -> Option<&'static str> {
        match self {
            Self::Dark => None,
            Self::Light => Some("light-mode"),
        }
    }
}

/// Global buttons: pause/resume and theme.
#[derive(Debug, Clone, Default)]
pub struct ControlPanel {
    paused: bool,
    theme: Theme,
}

impl ControlPanel {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn paused(&self) -> bool {
        self.paused
    }

    /// Flip pause. Returns the new state.
    pub fn toggle_pause(&mut self) -> bool {
        self.paused = !self.paused;
        self.paused
    }

    /// Text of the pause button: the action it will perform.
    pub fn pause_label(&self) -> &'static str {
        if self.paused { "Resume" } else { "Pause" }
    }

    pub fn theme(&self) -> Theme {
        self.theme
    }

    pub fn toggle_theme(&mut self) -> Theme {
        self.theme = self.theme.toggled();
        self.theme
    }
}
