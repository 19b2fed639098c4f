use crate::{
    composition::{
        model::{CanvasSpec, SelectedLayer, TextLayer},
        store::CompositionStore,
    },
    foundation::core::SourceImage,
    geometry::{
        orientation::{Orientation, height_for_orientation, height_for_preset, orientation_of},
        presets::{SizePreset, size_choices},
    },
};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
/// Which option group the panel shows.
pub enum PanelMode {
    /// Font size and color of the text layer.
    Text,
    /// Orientation, size preset and background color of the canvas.
    Canvas,
}

/// Option panel: turns entered option values into store mutations.
///
/// Values are written through as entered; font sizes and colors are not
/// range-checked here.
pub struct OptionPanel<'s> {
    store: &'s mut CompositionStore,
    source: &'s SourceImage,
}

impl<'s> OptionPanel<'s> {
    pub fn new(store: &'s mut CompositionStore, source: &'s SourceImage) -> Self {
        Self { store, source }
    }

    pub fn mode(&self) -> PanelMode {
        match self.store.selected_layer() {
            SelectedLayer::Text => PanelMode::Text,
            SelectedLayer::Canvas => PanelMode::Canvas,
        }
    }

    /// Orientation of the uploaded image itself.
    pub fn original_orientation(&self) -> Orientation {
        orientation_of(self.source)
    }

    /// Size picker entries for the current canvas orientation.
    pub fn size_choices(&self) -> Vec<SizePreset> {
        size_choices(self.store.canvas().orientation)
    }

    pub fn is_size_selected(&self, preset: &SizePreset) -> bool {
        &self.store.canvas().size_preset == preset
    }

    pub fn set_font_size(&mut self, font_size: f64) {
        self.update_text(|t| t.font_size = font_size);
    }

    pub fn set_text_color(&mut self, color: impl Into<String>) {
        let color = color.into();
        self.update_text(|t| t.color = color);
    }

    /// Switch orientation. Always resets the size preset to `Original`.
    pub fn set_orientation(&mut self, orientation: Orientation) {
        let height = height_for_orientation(self.source, orientation);
        let next = CanvasSpec {
            orientation,
            size_preset: SizePreset::Original,
            height,
            ..self.store.canvas().clone()
        };
        self.store.set_canvas(next);
    }

    /// Pick a size preset; orientation is unchanged.
    pub fn set_size(&mut self, preset: SizePreset) {
        let current = self.store.canvas();
        let height = height_for_preset(self.source, current.orientation, &preset);
        let next = CanvasSpec {
            size_preset: preset,
            height,
            ..current.clone()
        };
        self.store.set_canvas(next);
    }

    pub fn set_background_color(&mut self, color: impl Into<String>) {
        let next = CanvasSpec {
            background_color: color.into(),
            ..self.store.canvas().clone()
        };
        self.store.set_canvas(next);
    }

    fn update_text(&mut self, edit: impl FnOnce(&mut TextLayer)) {
        let Some(mut next) = self.store.text_layer().cloned() else {
            tracing::debug!("text option changed with no text layer; ignored");
            return;
        };
        edit(&mut next);
        self.store.set_text_layer(next);
    }
}

#[cfg(test)]
#[path = "../../tests/unit/editor/options.rs"]
mod tests;
