use serde::{Deserialize, Serialize};

use crate::render::Color;

/// Colors and font used for figure chrome (background, grid, axes, labels).
///
/// Passed explicitly into axes construction; nothing reads a global theme.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Theme {
    pub name: String,
    pub background: Color,
    pub text: Color,
    pub grid: Color,
    pub axis: Color,
    pub font_family: String,
}

impl Default for Theme {
    fn default() -> Self {
        Self::light()
    }
}

impl Theme {
    #[must_use]
    pub fn light() -> Self {
        Self {
            name: "light".to_owned(),
            background: Color::WHITE,
            text: Color::BLACK,
            grid: Color::from_rgb8(0xdd, 0xdd, 0xdd),
            axis: Color::from_rgb8(0x33, 0x33, 0x33),
            font_family: "sans-serif".to_owned(),
        }
    }

    #[must_use]
    pub fn dark() -> Self {
        Self {
            name: "dark".to_owned(),
            background: Color::from_rgb8(18, 18, 20),
            text: Color::from_rgb8(235, 235, 245),
            grid: Color::from_rgb8(40, 40, 45),
            axis: Color::from_rgb8(180, 180, 190),
            font_family: "sans-serif".to_owned(),
        }
    }

    /// Built-in theme presets.
    #[must_use]
    pub fn presets() -> Vec<Self> {
        vec![Self::light(), Self::dark()]
    }

    /// Finds a preset by name (case-insensitive), falling back to light.
    #[must_use]
    pub fn find(name: &str) -> Self {
        Self::presets()
            .into_iter()
            .find(|theme| theme.name.eq_ignore_ascii_case(name))
            .unwrap_or_else(Self::light)
    }
}
