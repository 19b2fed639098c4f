use crate::{
    foundation::error::{PinError, PinResult},
    geometry::orientation::Orientation,
};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
/// A named `width:height` ratio.
pub struct AspectPreset {
    pub name: &'static str,
    pub width: u32,
    pub height: u32,
}

impl AspectPreset {
    const fn new(name: &'static str, width: u32, height: u32) -> Self {
        Self {
            name,
            width,
            height,
        }
    }

    /// Height of a box of the given width with this ratio.
    pub fn height_for_width(self, width: f64) -> f64 {
        width * f64::from(self.height) / f64::from(self.width)
    }
}

/// Ratios offered while the canvas is portrait.
pub const PORTRAIT_PRESETS: &[AspectPreset] = &[
    AspectPreset::new("1:2", 1, 2),
    AspectPreset::new("9:16", 9, 16),
    AspectPreset::new("2:3", 2, 3),
    AspectPreset::new("3:4", 3, 4),
    AspectPreset::new("4:5", 4, 5),
    AspectPreset::new("1:1", 1, 1),
];

/// Ratios offered while the canvas is landscape.
pub const LANDSCAPE_PRESETS: &[AspectPreset] = &[
    AspectPreset::new("2:1", 2, 1),
    AspectPreset::new("16:9", 16, 9),
    AspectPreset::new("3:2", 3, 2),
    AspectPreset::new("4:3", 4, 3),
    AspectPreset::new("5:4", 5, 4),
    AspectPreset::new("1:1", 1, 1),
];

/// Preset list for an orientation.
pub fn presets_for(orientation: Orientation) -> &'static [AspectPreset] {
    match orientation {
        Orientation::Portrait => PORTRAIT_PRESETS,
        Orientation::Landscape => LANDSCAPE_PRESETS,
    }
}

/// Look a ratio up by name in both lists.
pub fn find_preset(name: &str) -> Option<AspectPreset> {
    PORTRAIT_PRESETS
        .iter()
        .chain(LANDSCAPE_PRESETS)
        .find(|p| p.name == name)
        .copied()
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(into = "String", try_from = "String")]
/// Canvas size choice: the image's own ratio or a named preset.
///
/// Serialized as `"original"` or the preset name (`"16:9"`).
pub enum SizePreset {
    #[default]
    Original,
    Ratio(AspectPreset),
}

impl SizePreset {
    pub const ORIGINAL_NAME: &'static str = "original";

    pub fn name(&self) -> &'static str {
        match self {
            Self::Original => Self::ORIGINAL_NAME,
            Self::Ratio(p) => p.name,
        }
    }

    /// Resolve `"original"` or a preset name.
    pub fn from_name(name: &str) -> PinResult<Self> {
        if name == Self::ORIGINAL_NAME {
            return Ok(Self::Original);
        }
        find_preset(name)
            .map(Self::Ratio)
            .ok_or_else(|| PinError::validation(format!("unknown size preset '{name}'")))
    }
}

/// Choices shown by the size picker: `Original` first, then the orientation's ratios.
pub fn size_choices(orientation: Orientation) -> Vec<SizePreset> {
    std::iter::once(SizePreset::Original)
        .chain(presets_for(orientation).iter().copied().map(SizePreset::Ratio))
        .collect()
}

impl From<SizePreset> for String {
    fn from(preset: SizePreset) -> Self {
        preset.name().to_string()
    }
}

impl TryFrom<String> for SizePreset {
    type Error = PinError;

    fn try_from(name: String) -> Result<Self, Self::Error> {
        Self::from_name(&name)
    }
}

impl std::fmt::Display for SizePreset {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/geometry/presets.rs"]
mod tests;
