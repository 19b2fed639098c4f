//! Pointer-drag state machine for repositioning the text layer.
//!
//! ```text
//!            down (select text, store offset)
//!   Idle ─────────────────────────────────────▶ Dragging { offset }
//!    ▲                                              │  move: position = pointer - offset
//!    └──────────────── up / leave ──────────────────┘
//! ```
//!
//! Moves while idle are ignored. [`DragState`] holds the pure transitions;
//! [`DragSurface`] applies them to the composition store.

use crate::{
    composition::{model::SelectedLayer, store::CompositionStore},
    foundation::core::{Point, Vec2},
};

#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
/// Pointer input delivered to the drag surface.
pub enum PointerEvent {
    /// Pointer pressed on the text layer.
    Down { x: f64, y: f64 },
    /// Pointer moved inside the surface.
    Move { x: f64, y: f64 },
    /// Pointer released.
    Up,
    /// Pointer left the surface bounds.
    Leave,
}

impl PointerEvent {
    pub fn down(p: Point) -> Self {
        Self::Down { x: p.x, y: p.y }
    }

    pub fn move_to(p: Point) -> Self {
        Self::Move { x: p.x, y: p.y }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub enum DragState {
    #[default]
    Idle,
    /// `offset` is the vector from the layer's top-left to the pointer at press time.
    Dragging { offset: Vec2 },
}

impl DragState {
    /// Enter `Dragging` from a press at `pointer` on a layer at `layer_position`.
    pub fn press(pointer: Point, layer_position: Point) -> Self {
        Self::Dragging {
            offset: pointer - layer_position,
        }
    }

    /// New layer position for a move to `pointer`, or `None` while idle.
    pub fn drag_to(&self, pointer: Point) -> Option<Point> {
        match self {
            Self::Idle => None,
            Self::Dragging { offset } => Some(pointer - *offset),
        }
    }

    /// Leave `Dragging`. Up and leave share this transition.
    pub fn release(self) -> Self {
        Self::Idle
    }

    pub fn is_dragging(&self) -> bool {
        matches!(self, Self::Dragging { .. })
    }

    pub fn offset(&self) -> Option<Vec2> {
        match self {
            Self::Idle => None,
            Self::Dragging { offset } => Some(*offset),
        }
    }
}

/// Drag surface bound to a session's store and drag state.
pub struct DragSurface<'s> {
    state: &'s mut DragState,
    store: &'s mut CompositionStore,
}

impl<'s> DragSurface<'s> {
    pub fn new(state: &'s mut DragState, store: &'s mut CompositionStore) -> Self {
        Self { state, store }
    }

    pub fn state(&self) -> DragState {
        *self.state
    }

    /// Dispatch one pointer event.
    pub fn handle(&mut self, event: PointerEvent) {
        match event {
            PointerEvent::Down { x, y } => self.pointer_down(Point::new(x, y)),
            PointerEvent::Move { x, y } => {
                self.pointer_move(Point::new(x, y));
            }
            PointerEvent::Up => self.pointer_up(),
            PointerEvent::Leave => self.pointer_leave(),
        }
    }

    /// Press on the text layer: selects it and starts dragging.
    pub fn pointer_down(&mut self, pointer: Point) {
        self.store.select_layer(SelectedLayer::Text);
        let layer_position = self
            .store
            .text_layer()
            .map(|t| t.position)
            .unwrap_or(Point::ORIGIN);
        *self.state = DragState::press(pointer, layer_position);
        tracing::debug!(?pointer, state = ?self.state, "drag started");
    }

    /// Move the text layer while dragging. Returns whether a position was written.
    pub fn pointer_move(&mut self, pointer: Point) -> bool {
        let Some(position) = self.state.drag_to(pointer) else {
            return false;
        };
        let Some(mut next) = self.store.text_layer().cloned() else {
            return false;
        };
        next.position = position;
        self.store.set_text_layer(next);
        true
    }

    pub fn pointer_up(&mut self) {
        self.end_drag("pointer up");
    }

    pub fn pointer_leave(&mut self) {
        self.end_drag("pointer left surface");
    }

    fn end_drag(&mut self, reason: &'static str) {
        if self.state.is_dragging() {
            tracing::debug!(reason, "drag ended");
        }
        *self.state = self.state.release();
    }
}

#[cfg(test)]
#[path = "../../tests/unit/editor/drag.rs"]
mod tests;
