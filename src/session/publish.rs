use crate::{
    composition::model::{CanvasSpec, TextLayer},
    foundation::color::is_hex_color,
    foundation::error::{PinError, PinResult},
    geometry::{orientation::Orientation, presets::SizePreset},
};

/// Identifier the submission collaborator assigns to a published pin.
#[derive(Clone, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(transparent)]
pub struct PinId(pub String);

impl std::fmt::Display for PinId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default, rename_all = "camelCase")]
/// Form fields published next to the composition.
pub struct PinForm {
    pub title: String,
    pub description: String,
    pub link: String,
    /// Existing board id; empty when none was chosen.
    pub board: String,
    pub tags: String,
    /// Name of a board to create along with the pin; empty for none.
    pub new_board: String,
}

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
/// Wire shape of the text layer.
pub struct TextOptions {
    pub text: String,
    pub left: f64,
    pub top: f64,
    pub font_size: f64,
    pub color: String,
}

impl From<&TextLayer> for TextOptions {
    fn from(layer: &TextLayer) -> Self {
        Self {
            text: layer.content.clone(),
            left: layer.position.x,
            top: layer.position.y,
            font_size: layer.font_size,
            color: layer.color.clone(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
/// Wire shape of the canvas.
pub struct CanvasOptions {
    pub orientation: Orientation,
    pub size: SizePreset,
    pub height: f64,
    pub background_color: String,
}

impl From<&CanvasSpec> for CanvasOptions {
    fn from(canvas: &CanvasSpec) -> Self {
        Self {
            orientation: canvas.orientation,
            size: canvas.size_preset,
            height: canvas.height,
            background_color: canvas.background_color.clone(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
/// Everything handed to the submission collaborator on publish.
pub struct PinSubmission {
    /// URL of the uploaded media the composition decorates.
    pub media_url: String,
    pub form: PinForm,
    pub text_options: TextOptions,
    pub canvas_options: CanvasOptions,
}

impl PinSubmission {
    /// Multipart-style field list. Composition parts are JSON-encoded.
    pub fn form_fields(&self) -> PinResult<Vec<(String, String)>> {
        let f = &self.form;
        Ok(vec![
            ("title".to_string(), f.title.clone()),
            ("description".to_string(), f.description.clone()),
            ("link".to_string(), f.link.clone()),
            ("board".to_string(), f.board.clone()),
            ("tags".to_string(), f.tags.clone()),
            ("media".to_string(), self.media_url.clone()),
            (
                "textOptions".to_string(),
                serde_json::to_string(&self.text_options)?,
            ),
            (
                "canvasOptions".to_string(),
                serde_json::to_string(&self.canvas_options)?,
            ),
            ("newBoard".to_string(), f.new_board.clone()),
        ])
    }

    /// Check the composition parts are self-consistent.
    ///
    /// Opt-in; [`crate::EditSession::publish`] does not call it.
    pub fn validate(&self) -> PinResult<()> {
        let c = &self.canvas_options;
        if !c.height.is_finite() || c.height <= 0.0 {
            return Err(PinError::validation(
                "canvas height must be finite and > 0 (was the canvas mounted?)",
            ));
        }
        if !is_hex_color(&c.background_color) {
            return Err(PinError::validation(format!(
                "canvas background color '{}' is not a hex color",
                c.background_color
            )));
        }

        let t = &self.text_options;
        if t.text.is_empty() {
            // Deleted or never created: position and style carry no meaning.
            return Ok(());
        }
        if !t.left.is_finite() || !t.top.is_finite() {
            return Err(PinError::validation("text position must be finite"));
        }
        if !t.font_size.is_finite() || t.font_size <= 0.0 {
            return Err(PinError::validation(
                "text font size must be finite and > 0",
            ));
        }
        if !is_hex_color(&t.color) {
            return Err(PinError::validation(format!(
                "text color '{}' is not a hex color",
                t.color
            )));
        }
        Ok(())
    }

    pub fn to_json_pretty(&self) -> PinResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

/// Pin-submission collaborator (network transport lives outside this crate).
pub trait PinSubmitter {
    /// Submit a finished pin and return the id the backend assigned.
    fn submit(&mut self, submission: &PinSubmission) -> anyhow::Result<PinId>;
}

#[cfg(test)]
#[path = "../../tests/unit/session/publish.rs"]
mod tests;
