use crate::foundation::error::{PinError, PinResult};

pub use kurbo::{Point, Vec2};

/// Display width of the pin canvas. Every preset and orientation shares it;
/// only the height is derived.
pub const CANVAS_WIDTH: f64 = 375.0;

#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
/// An uploaded asset and its intrinsic pixel dimensions.
///
/// Supplied by the upload collaborator once the file has been read. The
/// geometry functions assume both dimensions are non-zero; [`SourceImage::new`]
/// enforces that, while struct-literal construction does not.
pub struct SourceImage {
    /// Preview URL of the uploaded media.
    pub url: String,
    /// Intrinsic width in pixels.
    pub width: u32,
    /// Intrinsic height in pixels.
    pub height: u32,
}

impl SourceImage {
    /// Create a source image, rejecting zero dimensions.
    pub fn new(url: impl Into<String>, width: u32, height: u32) -> PinResult<Self> {
        if width == 0 || height == 0 {
            return Err(PinError::validation(
                "source image width/height must be > 0",
            ));
        }
        Ok(Self {
            url: url.into(),
            width,
            height,
        })
    }

    pub fn width_f64(&self) -> f64 {
        f64::from(self.width)
    }

    pub fn height_f64(&self) -> f64 {
        f64::from(self.height)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/core.rs"]
mod tests;
