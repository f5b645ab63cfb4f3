// Drawing mode state machine

use std::fmt;

/// How pointer interaction colors cells
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Mode {
    Hover,
    Click,
    Rainbow,
    #[default]
    Darkening,
}

impl Mode {
    /// All modes in toggle order, starting from the default
    pub const CYCLE: [Mode; 4] = [Mode::Darkening, Mode::Hover, Mode::Click, Mode::Rainbow];

    /// The mode a toggle switches to
    pub fn next(self) -> Self {
        match self {
            Mode::Darkening => Mode::Hover,
            Mode::Hover => Mode::Click,
            Mode::Click => Mode::Rainbow,
            Mode::Rainbow => Mode::Darkening,
        }
    }

    /// Short identifier used in configuration files and environment variables
    pub fn key(self) -> &'static str {
        match self {
            Mode::Hover => "hover",
            Mode::Click => "click",
            Mode::Rainbow => "rainbow",
            Mode::Darkening => "darkening",
        }
    }

    /// Decode a mode identifier, case-insensitively
    pub fn from_key(key: &str) -> Option<Self> {
        Mode::CYCLE
            .into_iter()
            .find(|mode| mode.key().eq_ignore_ascii_case(key.trim()))
    }

    /// Decode a mode identifier; anything unknown selects darkening
    pub fn from_key_or_default(key: &str) -> Self {
        Self::from_key(key).unwrap_or_default()
    }

    pub fn display_name(self) -> &'static str {
        match self {
            Mode::Hover => "Hover",
            Mode::Click => "Click & Drag",
            Mode::Rainbow => "Rainbow",
            Mode::Darkening => "Progressive Darkening",
        }
    }

    pub fn instructions(self) -> &'static str {
        match self {
            Mode::Hover => "Hover over squares to draw!",
            Mode::Click => "Click and drag to draw!",
            Mode::Rainbow => "Hover over squares for rainbow colors!",
            Mode::Darkening => {
                "Hover over squares to draw! Each square darkens by 10% with each interaction."
            }
        }
    }

    pub fn toggle_label(self) -> String {
        format!("Toggle Mode: {}", self.display_name())
    }

    /// Whether moving the pointer onto a cell draws without a button held
    pub fn draws_on_hover(self) -> bool {
        !matches!(self, Mode::Click)
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

impl From<String> for Mode {
    fn from(key: String) -> Self {
        Mode::from_key_or_default(&key)
    }
}

impl From<Mode> for String {
    fn from(mode: Mode) -> Self {
        mode.key().to_string()
    }
}
