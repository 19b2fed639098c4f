use crate::{
    composition::store::CompositionStore,
    editor::{
        drag::{DragState, DragSurface},
        layers::LayerSelector,
        options::{OptionPanel, PanelMode},
        workspace::Workspace,
    },
    foundation::{config::EditorConfig, core::SourceImage, error::PinError, error::PinResult},
    geometry::presets::SizePreset,
    session::{
        publish::{CanvasOptions, PinForm, PinId, PinSubmission, PinSubmitter, TextOptions},
        script::{EditorEvent, EditorScript},
    },
};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
/// Where an editing session is in its lifecycle.
pub enum SessionStatus {
    /// Accepting edits.
    Editing,
    /// Published successfully; state has been reset.
    Published,
    /// Abandoned by the user; state has been reset.
    Abandoned,
}

/// One pin-creation session: the sole owner of its composition state.
///
/// Components are borrowed views over the session ([`EditSession::layers`],
/// [`EditSession::options`], [`EditSession::drag_surface`],
/// [`EditSession::workspace`]); none of them keeps its own copy of the state.
#[derive(Debug)]
pub struct EditSession {
    source: SourceImage,
    store: CompositionStore,
    drag: DragState,
    status: SessionStatus,
}

impl EditSession {
    /// Start a session for an uploaded image. The canvas stays unset until
    /// [`EditSession::open_editor`] mounts the workspace.
    pub fn new(source: SourceImage, config: EditorConfig) -> Self {
        Self {
            source,
            store: CompositionStore::new(config),
            drag: DragState::default(),
            status: SessionStatus::Editing,
        }
    }

    pub fn source(&self) -> &SourceImage {
        &self.source
    }

    pub fn store(&self) -> &CompositionStore {
        &self.store
    }

    pub fn drag_state(&self) -> DragState {
        self.drag
    }

    pub fn status(&self) -> SessionStatus {
        self.status
    }

    /// Mount the editor: derives the canvas on first open.
    #[tracing::instrument(skip(self), fields(url = %self.source.url))]
    pub fn open_editor(&mut self) -> bool {
        self.workspace().mount()
    }

    pub fn layers(&mut self) -> LayerSelector<'_> {
        LayerSelector::new(&mut self.store)
    }

    pub fn options(&mut self) -> OptionPanel<'_> {
        OptionPanel::new(&mut self.store, &self.source)
    }

    pub fn drag_surface(&mut self) -> DragSurface<'_> {
        DragSurface::new(&mut self.drag, &mut self.store)
    }

    pub fn workspace(&mut self) -> Workspace<'_> {
        Workspace::new(&mut self.store, &self.source)
    }

    /// Route one UI event to the component that owns it.
    ///
    /// Option events only reach the panel in their own mode: text options
    /// while the text layer is selected, canvas options while the canvas is.
    pub fn apply(&mut self, event: &EditorEvent) -> PinResult<()> {
        tracing::trace!(?event, "apply editor event");
        let mode = self.options().mode();
        match event {
            EditorEvent::SelectLayer { layer } => self.layers().select(*layer),
            EditorEvent::Pointer { event } => self.drag_surface().handle(*event),
            EditorEvent::SetText { content } => self.workspace().set_text(content.clone()),
            EditorEvent::DeleteText => self.workspace().delete_text(),
            EditorEvent::FontSize { .. } | EditorEvent::TextColor { .. }
                if mode != PanelMode::Text =>
            {
                tracing::debug!(?event, ?mode, "text option outside text mode ignored");
            }
            EditorEvent::FontSize { value } => self.options().set_font_size(*value),
            EditorEvent::TextColor { color } => self.options().set_text_color(color.clone()),
            EditorEvent::Size { preset } => {
                let preset = SizePreset::from_name(preset)?;
                if mode == PanelMode::Canvas {
                    self.options().set_size(preset);
                } else {
                    tracing::debug!(?event, ?mode, "canvas option outside canvas mode ignored");
                }
            }
            EditorEvent::Orientation { .. } | EditorEvent::BackgroundColor { .. }
                if mode != PanelMode::Canvas =>
            {
                tracing::debug!(?event, ?mode, "canvas option outside canvas mode ignored");
            }
            EditorEvent::Orientation { orientation } => {
                self.options().set_orientation(*orientation)
            }
            EditorEvent::BackgroundColor { color } => {
                self.options().set_background_color(color.clone())
            }
        }
        Ok(())
    }

    /// Apply a script's events in order, stopping at the first invalid one.
    #[tracing::instrument(skip(self, script), fields(events = script.events.len()))]
    pub fn replay(&mut self, script: &EditorScript) -> PinResult<()> {
        for (idx, event) in script.events.iter().enumerate() {
            self.apply(event).map_err(|err| match err {
                PinError::Validation(msg) => PinError::validation(format!("event {idx}: {msg}")),
                other => other,
            })?;
        }
        Ok(())
    }

    /// Current composition as a submission. A missing text layer is emitted
    /// with empty text and the configured defaults.
    pub fn snapshot(&self, form: PinForm) -> PinSubmission {
        let text_options = match self.store.text_layer() {
            Some(layer) => TextOptions::from(layer),
            None => {
                let defaults = &self.store.config().text;
                TextOptions {
                    text: String::new(),
                    left: 0.0,
                    top: 0.0,
                    font_size: defaults.font_size,
                    color: defaults.color.clone(),
                }
            }
        };
        PinSubmission {
            media_url: self.source.url.clone(),
            form,
            text_options,
            canvas_options: CanvasOptions::from(self.store.canvas()),
        }
    }

    /// Hand the composition to the submission collaborator.
    ///
    /// On success the state is reset and the session ends. On failure the
    /// composition is left as it was and the session keeps editing.
    #[tracing::instrument(skip(self, submitter, form))]
    pub fn publish<S: PinSubmitter + ?Sized>(
        &mut self,
        submitter: &mut S,
        form: PinForm,
    ) -> PinResult<PinId> {
        if self.status != SessionStatus::Editing {
            return Err(PinError::submission("session is no longer editing"));
        }
        let submission = self.snapshot(form);
        match submitter.submit(&submission) {
            Ok(id) => {
                tracing::info!(%id, "pin published");
                self.finish(SessionStatus::Published);
                Ok(id)
            }
            Err(err) => {
                tracing::warn!(error = %err, "pin submission failed; composition kept");
                Err(PinError::submission(format!("{err:#}")))
            }
        }
    }

    /// Drop the session's edits without publishing.
    pub fn abandon(&mut self) {
        self.finish(SessionStatus::Abandoned);
    }

    fn finish(&mut self, status: SessionStatus) {
        self.store.reset();
        self.drag = DragState::Idle;
        self.status = status;
    }
}

#[cfg(test)]
#[path = "../../tests/unit/session/edit.rs"]
mod tests;
