use crate::{
    composition::model::{CanvasSpec, SelectedLayer, TextLayer},
    foundation::config::EditorConfig,
};

/// Authoritative composition state of one editing session.
///
/// Every setter replaces its sub-state wholesale; callers build the complete
/// next value. No operation fails.
#[derive(Clone, Debug)]
pub struct CompositionStore {
    config: EditorConfig,
    selected: SelectedLayer,
    text: Option<TextLayer>,
    canvas: CanvasSpec,
}

impl Default for CompositionStore {
    fn default() -> Self {
        Self::new(EditorConfig::default())
    }
}

impl CompositionStore {
    pub fn new(config: EditorConfig) -> Self {
        let canvas = CanvasSpec::unset(&config.canvas);
        Self {
            config,
            selected: SelectedLayer::default(),
            text: None,
            canvas,
        }
    }

    pub fn config(&self) -> &EditorConfig {
        &self.config
    }

    pub fn selected_layer(&self) -> SelectedLayer {
        self.selected
    }

    /// The stored text layer, including a deleted (empty) one.
    pub fn text_layer(&self) -> Option<&TextLayer> {
        self.text.as_ref()
    }

    /// The text layer if it is present (non-empty content).
    pub fn visible_text(&self) -> Option<&TextLayer> {
        self.text.as_ref().filter(|t| t.is_present())
    }

    pub fn canvas(&self) -> &CanvasSpec {
        &self.canvas
    }

    /// Select a layer. Selecting [`SelectedLayer::Text`] creates a default text
    /// layer when none is present; an existing one is left untouched.
    pub fn select_layer(&mut self, layer: SelectedLayer) {
        self.selected = layer;
        if layer == SelectedLayer::Text && self.visible_text().is_none() {
            let created = TextLayer::with_defaults(&self.config.text);
            tracing::debug!(?created, "created default text layer");
            self.text = Some(created);
        }
        tracing::debug!(?layer, "selected layer");
    }

    pub fn set_text_layer(&mut self, next: TextLayer) {
        tracing::debug!(?next, "set text layer");
        self.text = Some(next);
    }

    pub fn set_canvas(&mut self, next: CanvasSpec) {
        tracing::debug!(?next, "set canvas");
        self.canvas = next;
    }

    /// Back to session-start defaults: no text layer, unset canvas, canvas selected.
    pub fn reset(&mut self) {
        self.selected = SelectedLayer::default();
        self.text = None;
        self.canvas = CanvasSpec::unset(&self.config.canvas);
        tracing::debug!("composition reset");
    }
}

#[cfg(test)]
#[path = "../../tests/unit/composition/store.rs"]
mod tests;
