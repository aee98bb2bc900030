use std::fmt;
use std::str::FromStr;
use std::time::Duration;

use common::games::tictactoe::Mark;
use crossterm::style::Color;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum ThemeType {
    #[default]
    Neon,
    Elegance,
    Modern,
}

impl fmt::Display for ThemeType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ThemeType::Neon => "neon",
            ThemeType::Elegance => "elegance",
            ThemeType::Modern => "modern",
        };
        write!(f, "{}", name)
    }
}

impl FromStr for ThemeType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "neon" => Ok(ThemeType::Neon),
            "elegance" => Ok(ThemeType::Elegance),
            "modern" => Ok(ThemeType::Modern),
            other => Err(format!(
                "Unknown theme '{}', expected neon, elegance or modern",
                other
            )),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum AnimationSpeed {
    Slow,
    #[default]
    Normal,
    Fast,
}

impl AnimationSpeed {
    pub fn duration(&self) -> Duration {
        match self {
            AnimationSpeed::Slow => Duration::from_millis(800),
            AnimationSpeed::Normal => Duration::from_millis(500),
            AnimationSpeed::Fast => Duration::from_millis(300),
        }
    }
}

impl fmt::Display for AnimationSpeed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            AnimationSpeed::Slow => "slow",
            AnimationSpeed::Normal => "normal",
            AnimationSpeed::Fast => "fast",
        };
        write!(f, "{}", name)
    }
}

impl FromStr for AnimationSpeed {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "slow" => Ok(AnimationSpeed::Slow),
            "normal" => Ok(AnimationSpeed::Normal),
            "fast" => Ok(AnimationSpeed::Fast),
            other => Err(format!(
                "Unknown animation speed '{}', expected slow, normal or fast",
                other
            )),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ThemePalette {
    pub x: Color,
    pub o: Color,
    pub win: Color,
    pub accent: Color,
    pub label: Color,
    pub heading: Color,
}

impl ThemePalette {
    pub fn mark_color(&self, mark: Mark) -> Color {
        match mark {
            Mark::X => self.x,
            Mark::O => self.o,
            Mark::Empty => self.label,
        }
    }
}

const fn rgb(r: u8, g: u8, b: u8) -> Color {
    Color::Rgb { r, g, b }
}

const NEON: ThemePalette = ThemePalette {
    x: rgb(34, 211, 238),
    o: rgb(236, 72, 153),
    win: rgb(126, 34, 206),
    accent: rgb(147, 51, 234),
    label: rgb(156, 163, 175),
    heading: rgb(255, 255, 255),
};

const ELEGANCE: ThemePalette = ThemePalette {
    x: rgb(17, 17, 17),
    o: rgb(17, 17, 17),
    win: rgb(212, 212, 212),
    accent: rgb(120, 113, 108),
    label: rgb(75, 85, 99),
    heading: rgb(0, 0, 0),
};

const MODERN: ThemePalette = ThemePalette {
    x: rgb(52, 211, 153),
    o: rgb(251, 191, 36),
    win: rgb(4, 120, 87),
    accent: rgb(13, 148, 136),
    label: rgb(148, 163, 184),
    heading: rgb(255, 255, 255),
};

/// Presentation state handed to the renderer; the game core never sees it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ThemeSettings {
    pub theme: ThemeType,
    pub animation_speed: AnimationSpeed,
}

impl ThemeSettings {
    pub fn new(theme: ThemeType, animation_speed: AnimationSpeed) -> Self {
        Self {
            theme,
            animation_speed,
        }
    }

    pub fn palette(&self) -> &'static ThemePalette {
        match self.theme {
            ThemeType::Neon => &NEON,
            ThemeType::Elegance => &ELEGANCE,
            ThemeType::Modern => &MODERN,
        }
    }

    pub fn animation_duration(&self) -> Duration {
        self.animation_speed.duration()
    }
}
