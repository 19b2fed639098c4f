use crate::{
    composition::{model::CanvasSpec, store::CompositionStore},
    foundation::core::SourceImage,
    geometry::orientation::bootstrap_canvas,
};

/// Canvas area: hosts the text layer's inline editor and sizes the canvas on mount.
///
/// Content edits are independent of drag state and keep the layer's position.
pub struct Workspace<'s> {
    store: &'s mut CompositionStore,
    source: &'s SourceImage,
}

impl<'s> Workspace<'s> {
    pub fn new(store: &'s mut CompositionStore, source: &'s SourceImage) -> Self {
        Self { store, source }
    }

    /// First-mount derivation. Only acts while the canvas height is unset;
    /// returns whether it did.
    pub fn mount(&mut self) -> bool {
        if !self.store.canvas().is_unset() {
            return false;
        }
        let derived = bootstrap_canvas(self.source);
        let next = CanvasSpec {
            height: derived.height,
            orientation: derived.orientation,
            ..self.store.canvas().clone()
        };
        tracing::debug!(height = next.height, orientation = %next.orientation, "canvas bootstrapped");
        self.store.set_canvas(next);
        true
    }

    pub fn set_text(&mut self, content: impl Into<String>) {
        let content = content.into();
        let Some(mut next) = self.store.text_layer().cloned() else {
            tracing::warn!("text edit with no text layer; ignored");
            return;
        };
        next.content = content;
        self.store.set_text_layer(next);
    }

    /// Delete the text layer by clearing its content.
    pub fn delete_text(&mut self) {
        self.set_text(String::new());
    }
}

#[cfg(test)]
#[path = "../../tests/unit/editor/workspace.rs"]
mod tests;
