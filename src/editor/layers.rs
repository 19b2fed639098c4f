use crate::composition::{model::SelectedLayer, store::CompositionStore};

/// Layer picker: switches which layer the option panel edits.
pub struct LayerSelector<'s> {
    store: &'s mut CompositionStore,
}

impl<'s> LayerSelector<'s> {
    pub fn new(store: &'s mut CompositionStore) -> Self {
        Self { store }
    }

    /// Make `layer` active. Selecting text guarantees a present text layer.
    pub fn select(&mut self, layer: SelectedLayer) {
        self.store.select_layer(layer);
    }

    pub fn selected(&self) -> SelectedLayer {
        self.store.selected_layer()
    }

    pub fn is_selected(&self, layer: SelectedLayer) -> bool {
        self.selected() == layer
    }
}

#[cfg(test)]
#[path = "../../tests/unit/editor/layers.rs"]
mod tests;
