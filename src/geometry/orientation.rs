//! Canvas height and orientation derivation.
//!
//! Pure functions of the source image's intrinsic size. A zero-width or
//! zero-height image yields a non-finite height; callers are expected to pass
//! images validated by the upload path (see [`SourceImage::new`]).

use crate::{
    foundation::core::{CANVAS_WIDTH, SourceImage},
    geometry::presets::SizePreset,
};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
/// Portrait/landscape classification of an image or canvas.
pub enum Orientation {
    #[default]
    Portrait,
    Landscape,
}

impl Orientation {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Portrait => "portrait",
            Self::Landscape => "landscape",
        }
    }

    /// The other orientation.
    pub fn flipped(self) -> Self {
        match self {
            Self::Portrait => Self::Landscape,
            Self::Landscape => Self::Portrait,
        }
    }
}

impl std::fmt::Display for Orientation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Orientation {
    type Err = crate::PinError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "portrait" => Ok(Self::Portrait),
            "landscape" => Ok(Self::Landscape),
            other => Err(crate::PinError::validation(format!(
                "unknown orientation '{other}'"
            ))),
        }
    }
}

/// Classify by intrinsic size: portrait iff `width < height`. Squares are landscape.
pub fn orientation_of(image: &SourceImage) -> Orientation {
    if image.width < image.height {
        Orientation::Portrait
    } else {
        Orientation::Landscape
    }
}

/// Canvas height for a target orientation.
///
/// Keeping the image's own orientation preserves its aspect ratio; the other
/// orientation inverts it. Width stays [`CANVAS_WIDTH`] either way.
pub fn height_for_orientation(image: &SourceImage, target: Orientation) -> f64 {
    if target == orientation_of(image) {
        CANVAS_WIDTH * image.height_f64() / image.width_f64()
    } else {
        CANVAS_WIDTH * image.width_f64() / image.height_f64()
    }
}

/// Canvas height for a size preset under the current canvas orientation.
///
/// Named ratios ignore the source image's own ratio; cropping or letterboxing
/// is left to whoever renders the canvas.
pub fn height_for_preset(image: &SourceImage, current: Orientation, preset: &SizePreset) -> f64 {
    match preset {
        SizePreset::Original => height_for_orientation(image, current),
        SizePreset::Ratio(ratio) => ratio.height_for_width(CANVAS_WIDTH),
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
/// Result of the first-mount canvas derivation.
pub struct CanvasBootstrap {
    pub height: f64,
    pub orientation: Orientation,
}

/// First-mount derivation used before any user interaction.
///
/// Classifies by the derived height against [`CANVAS_WIDTH`], not through
/// [`orientation_of`].
pub fn bootstrap_canvas(image: &SourceImage) -> CanvasBootstrap {
    let height = CANVAS_WIDTH * image.height_f64() / image.width_f64();
    let orientation = if height > CANVAS_WIDTH {
        Orientation::Portrait
    } else {
        Orientation::Landscape
    };
    CanvasBootstrap {
        height,
        orientation,
    }
}

#[cfg(test)]
#[path = "../../tests/unit/geometry/orientation.rs"]
mod tests;
