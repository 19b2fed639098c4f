//! pinstudio is the composition engine behind the "design your pin" editor.
//!
//! Given an uploaded image it lets a user place a movable text overlay and pick
//! a canvas orientation and aspect preset, and produces the finished
//! composition description that is published with the pin. Pixels are never
//! touched: rendering belongs to whatever view hosts the editor.
//!
//! # Pieces
//!
//! 1. **Geometry**: pure canvas height/orientation derivation from the source
//!    image size and an aspect preset (fixed display width [`CANVAS_WIDTH`]).
//! 2. **Store**: [`CompositionStore`], the single source of truth for the
//!    selected layer, the text layer and the canvas.
//! 3. **Components**: [`LayerSelector`], [`OptionPanel`], [`DragSurface`] and
//!    [`Workspace`], short-lived views borrowed from an [`EditSession`].
//! 4. **Session**: [`EditSession`] owns the store for one pin, replays
//!    [`EditorEvent`]s and hands a [`PinSubmission`] to a [`PinSubmitter`].
//!
//! Everything runs synchronously on the caller's event thread.
#![forbid(unsafe_code)]

mod composition;
mod editor;
mod foundation;
mod geometry;
mod session;

pub use composition::model::{CanvasSpec, SelectedLayer, TextLayer};
pub use composition::store::CompositionStore;
pub use editor::drag::{DragState, DragSurface, PointerEvent};
pub use editor::layers::LayerSelector;
pub use editor::options::{OptionPanel, PanelMode};
pub use editor::workspace::Workspace;
pub use foundation::color::{Rgba8, is_hex_color, parse_hex_color};
pub use foundation::config::{CanvasDefaults, EditorConfig, TextDefaults};
pub use foundation::core::{CANVAS_WIDTH, Point, SourceImage, Vec2};
pub use foundation::error::{PinError, PinResult};
pub use geometry::orientation::{
    CanvasBootstrap, Orientation, bootstrap_canvas, height_for_orientation, height_for_preset,
    orientation_of,
};
pub use geometry::presets::{
    AspectPreset, LANDSCAPE_PRESETS, PORTRAIT_PRESETS, SizePreset, find_preset, presets_for,
    size_choices,
};
pub use session::edit::{EditSession, SessionStatus};
pub use session::publish::{
    CanvasOptions, PinForm, PinId, PinSubmission, PinSubmitter, TextOptions,
};
pub use session::script::{EditorEvent, EditorScript};
